// File: crates/dashboard-core/src/dashboard.rs
// Summary: Dashboard owning per-chart tables, display params and the redraw gate.

use std::collections::HashMap;
use std::path::PathBuf;

use tracing::{debug, warn};

use crate::builder::SeriesBuilder;
use crate::chart::ChartData;
use crate::config::{DashboardConfig, GraphConfig};
use crate::error::DashboardError;
use crate::gate::RedrawGate;
use crate::table::RawTable;
use crate::toc::{build_toc, TocEntry};
use crate::types::DATA_EXT;
use crate::view::DisplayParams;

pub struct Dashboard {
    data_dir: PathBuf,
    graphs: Vec<GraphConfig>,
    tables: HashMap<String, RawTable>,
    builder: SeriesBuilder,
    gate: RedrawGate,
    params: DisplayParams,
}

impl Dashboard {
    pub fn new(cfg: &DashboardConfig) -> Self {
        Self {
            data_dir: cfg.data_dir.clone(),
            graphs: cfg.graphs.clone(),
            tables: HashMap::new(),
            builder: SeriesBuilder::new(cfg.builder_options()),
            gate: RedrawGate::new(),
            params: cfg.display_params(),
        }
    }

    pub fn graphs(&self) -> &[GraphConfig] {
        &self.graphs
    }

    pub fn params(&self) -> DisplayParams {
        self.params
    }

    /// Page-wide params; charts pick them up on their next redraw.
    pub fn set_params(&mut self, params: DisplayParams) {
        self.params = params;
    }

    /// `<data_dir>/<id>.csv`
    pub fn data_path(&self, id: &str) -> PathBuf {
        self.data_dir.join(format!("{id}.{DATA_EXT}"))
    }

    pub fn table(&self, id: &str) -> Option<&RawTable> {
        self.tables.get(id)
    }

    pub fn is_loaded(&self, id: &str) -> bool {
        self.tables.contains_key(id)
    }

    /// Parse and cache CSV text for chart `id`. Replacing a table forces the
    /// next redraw.
    pub fn load_text(&mut self, id: &str, text: &str) -> Result<(), DashboardError> {
        self.ensure_known(id)?;
        let table = RawTable::parse(text).map_err(|source| DashboardError::Parse {
            id: id.to_owned(),
            source,
        })?;
        if !table.is_most_recent_first() {
            warn!(chart = id, "period rows are not ordered most recent first");
        }
        debug!(chart = id, periods = table.period_rows().len(), "loaded table");
        self.tables.insert(id.to_owned(), table);
        self.gate.invalidate(id);
        Ok(())
    }

    pub fn load_file(&mut self, id: &str) -> Result<(), DashboardError> {
        self.ensure_known(id)?;
        let path = self.data_path(id);
        let text = std::fs::read_to_string(&path).map_err(|source| DashboardError::Io {
            path: path.display().to_string(),
            source,
        })?;
        self.load_text(id, &text)
    }

    /// Load every configured chart. Failures are logged and returned; the
    /// affected charts simply stay unloaded.
    pub fn load_all(&mut self) -> Vec<(String, DashboardError)> {
        let ids: Vec<String> = self.graphs.iter().map(|g| g.id.clone()).collect();
        let mut failures = Vec::new();
        for id in ids {
            if let Err(e) = self.load_file(&id) {
                warn!(chart = %id, error = %e, "skipping chart");
                failures.push((id, e));
            }
        }
        failures
    }

    /// Chart data for `id`, or `None` when it has no table yet or was
    /// already drawn with the current params.
    pub fn redraw(&mut self, id: &str) -> Result<Option<ChartData>, DashboardError> {
        self.ensure_known(id)?;
        let Some(table) = self.tables.get(id) else {
            return Ok(None);
        };
        if !self.gate.should_redraw(id, self.params) {
            return Ok(None);
        }
        Ok(Some(self.builder.build(table, self.params)))
    }

    /// Redraw every chart whose output changed, in page order.
    pub fn redraw_all(&mut self) -> Vec<(String, ChartData)> {
        let ids: Vec<String> = self.graphs.iter().map(|g| g.id.clone()).collect();
        let mut out = Vec::new();
        for id in ids {
            if let Ok(Some(data)) = self.redraw(&id) {
                out.push((id, data));
            }
        }
        out
    }

    pub fn toc(&self) -> Vec<TocEntry> {
        build_toc(&self.graphs)
    }

    fn ensure_known(&self, id: &str) -> Result<(), DashboardError> {
        if self.graphs.iter().any(|g| g.id == id) {
            Ok(())
        } else {
            Err(DashboardError::UnknownChart(id.to_owned()))
        }
    }
}
