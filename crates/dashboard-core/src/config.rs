// File: crates/dashboard-core/src/config.rs
// Summary: YAML dashboard description (data directory, defaults, graph list).

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::builder::BuilderOptions;
use crate::error::{ConfigError, DashboardError};
use crate::theme;
use crate::types::{DATA_DIR, DEFAULT_WINDOW, LABEL_SEPARATOR, MAX_WINDOW};
use crate::view::DisplayParams;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphConfig {
    pub id: String,
    #[serde(default)]
    pub title: String,
}

impl GraphConfig {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self { id: id.into(), title: title.into() }
    }

    /// Title shown in headings and the TOC; the id when no title is set.
    pub fn display_title(&self) -> &str {
        if self.title.is_empty() { &self.id } else { &self.title }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub data_dir: PathBuf,
    pub window: usize,
    pub relative: bool,
    pub palette: String,
    pub separator: char,
    pub graphs: Vec<GraphConfig>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DATA_DIR),
            window: DEFAULT_WINDOW,
            relative: false,
            palette: "classic".to_string(),
            separator: LABEL_SEPARATOR,
            graphs: Vec::new(),
        }
    }
}

impl DashboardConfig {
    pub fn from_yaml_str(text: &str) -> Result<Self, ConfigError> {
        let cfg: Self = serde_yaml::from_str(text)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Load from a file. A relative `data_dir` is resolved against the
    /// config file's directory.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DashboardError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| DashboardError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let mut cfg = Self::from_yaml_str(&text)?;
        if cfg.data_dir.is_relative() {
            if let Some(parent) = path.parent() {
                cfg.data_dir = parent.join(&cfg.data_dir);
            }
        }
        debug!(path = %path.display(), graphs = cfg.graphs.len(), "loaded dashboard config");
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window == 0 {
            return Err(ConfigError::ZeroWindow);
        }
        if self.window > MAX_WINDOW {
            return Err(ConfigError::WindowTooLarge(self.window));
        }
        let mut seen = HashSet::new();
        for g in &self.graphs {
            if g.id.is_empty() {
                return Err(ConfigError::EmptyId);
            }
            if !seen.insert(g.id.as_str()) {
                return Err(ConfigError::DuplicateId(g.id.clone()));
            }
        }
        Ok(())
    }

    pub fn builder_options(&self) -> BuilderOptions {
        BuilderOptions { palette: theme::find(&self.palette), separator: self.separator }
    }

    pub fn display_params(&self) -> DisplayParams {
        DisplayParams::new(self.window, self.relative)
    }
}
