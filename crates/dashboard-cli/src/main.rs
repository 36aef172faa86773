// File: crates/dashboard-cli/src/main.rs
// Summary: CLI that renders chart JSON for configured graphs, prints the TOC and records daily rows.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use clap::{Parser, Subcommand};
use dashboard_core::types::{LABEL_SEPARATOR, PERIOD_DATE_FORMAT};
use dashboard_core::{record_ages, record_on, ChartData, Dashboard, DashboardConfig, DisplayParams, RawTable};
use serde::Serialize;
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "dashboard", version, about = "Build stacked chart data from per-graph CSV files")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print chart data for every configured graph (or one) as JSON.
    Render {
        #[arg(long, default_value = "dashboard.yaml")]
        config: PathBuf,
        /// Only render this graph.
        #[arg(long)]
        id: Option<String>,
        /// Most recent periods to show; blank or invalid resets to the default.
        #[arg(long)]
        window: Option<String>,
        /// Show each period as percentage shares.
        #[arg(long)]
        relative: bool,
        #[arg(long)]
        pretty: bool,
    },
    /// Print the table of contents as JSON.
    Toc {
        #[arg(long, default_value = "dashboard.yaml")]
        config: PathBuf,
    },
    /// Upsert a period row at the top of a CSV file.
    Record {
        file: PathBuf,
        /// Period date, YYYY-MM-DD. Defaults to today (UTC).
        #[arg(long)]
        date: Option<String>,
        /// One value per series column.
        #[arg(long, value_delimiter = ',', conflicts_with = "ages", required_unless_present = "ages")]
        values: Vec<String>,
        /// Ages in days, binned into the header's day ranges.
        #[arg(long, value_delimiter = ',')]
        ages: Vec<i64>,
        /// Separator between a header's day range and its label.
        #[arg(long, default_value_t = LABEL_SEPARATOR)]
        separator: char,
    },
}

#[derive(Serialize)]
struct RenderedChart {
    id: String,
    title: String,
    chart: ChartData,
    /// Per-period totals for the tooltip footer; absent in relative mode.
    totals: Option<Vec<f64>>,
}

fn main() -> Result<()> {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .init();

    match Cli::parse().command {
        Command::Render { config, id, window, relative, pretty } => render(config, id, window, relative, pretty),
        Command::Toc { config } => toc(config),
        Command::Record { file, date, values, ages, separator } => record(file, date, values, ages, separator),
    }
}

fn render(config: PathBuf, id: Option<String>, window: Option<String>, relative: bool, pretty: bool) -> Result<()> {
    let cfg = DashboardConfig::load(&config)
        .with_context(|| format!("failed to load config '{}'", config.display()))?;
    let mut dashboard = Dashboard::new(&cfg);

    let defaults = cfg.display_params();
    let relative = relative || defaults.relative;
    let params = match window {
        Some(text) => DisplayParams::from_input(&text, relative),
        None => defaults.with_relative(relative),
    };
    dashboard.set_params(params);
    info!(window = params.window, relative = params.relative, "rendering");

    let charts = match id {
        Some(id) => {
            dashboard
                .load_file(&id)
                .with_context(|| format!("failed to load '{}'", dashboard.data_path(&id).display()))?;
            dashboard.redraw(&id)?.map(|c| (id, c)).into_iter().collect::<Vec<_>>()
        }
        None => {
            let failures = dashboard.load_all();
            if !failures.is_empty() {
                warn!("{} of {} charts could not be loaded", failures.len(), cfg.graphs.len());
            }
            dashboard.redraw_all()
        }
    };

    let out: Vec<RenderedChart> = charts
        .into_iter()
        .map(|(id, chart)| {
            let title = cfg
                .graphs
                .iter()
                .find(|g| g.id == id)
                .map(|g| g.display_title().to_owned())
                .unwrap_or_else(|| id.clone());
            let totals = (!params.relative).then(|| (0..chart.len()).map(|i| chart.period_total(i)).collect());
            RenderedChart { id, title, chart, totals }
        })
        .collect();
    info!("rendered {} charts", out.len());

    let json = if pretty { serde_json::to_string_pretty(&out)? } else { serde_json::to_string(&out)? };
    println!("{json}");
    Ok(())
}

fn toc(config: PathBuf) -> Result<()> {
    let cfg = DashboardConfig::load(&config)
        .with_context(|| format!("failed to load config '{}'", config.display()))?;
    let dashboard = Dashboard::new(&cfg);
    println!("{}", serde_json::to_string_pretty(&dashboard.toc())?);
    Ok(())
}

fn record(file: PathBuf, date: Option<String>, values: Vec<String>, ages: Vec<i64>, separator: char) -> Result<()> {
    let text = std::fs::read_to_string(&file)
        .with_context(|| format!("opening {}", file.display()))?;
    let mut table = RawTable::parse(&text)
        .with_context(|| format!("parsing {}", file.display()))?;

    let date = match date {
        Some(d) => NaiveDate::parse_from_str(&d, PERIOD_DATE_FORMAT)
            .with_context(|| format!("invalid date '{d}'"))?,
        None => Utc::now().date_naive(),
    };

    if ages.is_empty() {
        record_on(&mut table, date, values)?;
    } else {
        record_ages(&mut table, date, &ages, separator)
            .context("header parameters are not day ranges")?;
    }
    table.write_to(&file)?;
    info!(file = %file.display(), %date, "recorded period");
    Ok(())
}
