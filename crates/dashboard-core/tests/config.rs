// File: crates/dashboard-core/tests/config.rs
// Purpose: YAML dashboard config parsing, defaults and validation.

use std::path::PathBuf;

use dashboard_core::{ConfigError, DashboardConfig, DisplayParams};

#[test]
fn parses_full_config() {
    let yaml = r#"
data_dir: stats
window: 14
relative: true
palette: tableau
graphs:
  - id: wait-on-review
    title: PRs waiting on review
  - id: blocked
"#;
    let cfg = DashboardConfig::from_yaml_str(yaml).expect("config");
    assert_eq!(cfg.data_dir, PathBuf::from("stats"));
    assert_eq!(cfg.display_params(), DisplayParams::new(14, true));
    assert_eq!(cfg.builder_options().palette.name, "tableau");
    assert_eq!(cfg.graphs.len(), 2);
    assert_eq!(cfg.graphs[1].display_title(), "blocked");
}

#[test]
fn missing_fields_use_defaults() {
    let cfg = DashboardConfig::from_yaml_str("graphs: []").expect("config");
    assert_eq!(cfg, DashboardConfig::default());
    assert_eq!(cfg.window, 30);
    assert_eq!(cfg.separator, '|');
    assert_eq!(cfg.builder_options().palette.name, "classic");
}

#[test]
fn rejects_duplicate_ids() {
    let yaml = "graphs:\n  - id: a\n  - id: a\n";
    assert!(matches!(DashboardConfig::from_yaml_str(yaml), Err(ConfigError::DuplicateId(id)) if id == "a"));
}

#[test]
fn rejects_zero_window_and_empty_id() {
    assert!(matches!(DashboardConfig::from_yaml_str("window: 0"), Err(ConfigError::ZeroWindow)));
    assert!(matches!(
        DashboardConfig::from_yaml_str("window: 36501"),
        Err(ConfigError::WindowTooLarge(36501))
    ));
    assert!(DashboardConfig::from_yaml_str("window: 36500").is_ok());
    assert!(matches!(DashboardConfig::from_yaml_str("graphs:\n  - id: ''\n"), Err(ConfigError::EmptyId)));
}

#[test]
fn rejects_malformed_yaml() {
    assert!(matches!(DashboardConfig::from_yaml_str("window: [1"), Err(ConfigError::Yaml(_))));
}

#[test]
fn load_resolves_data_dir_next_to_config() {
    let dir = std::env::temp_dir().join(format!("dashboard-config-test-{}", std::process::id()));
    std::fs::create_dir_all(&dir).expect("create dir");
    let path = dir.join("dashboard.yaml");
    std::fs::write(&path, "data_dir: data\ngraphs:\n  - id: a\n").expect("write");

    let cfg = DashboardConfig::load(&path).expect("load");
    assert_eq!(cfg.data_dir, dir.join("data"));

    std::fs::remove_dir_all(&dir).ok();
}
