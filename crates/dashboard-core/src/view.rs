// File: crates/dashboard-core/src/view.rs
// Summary: Display parameters (window, relative) driven by the page controls.

use serde::{Deserialize, Serialize};

use crate::types::{DEFAULT_WINDOW, MAX_WINDOW};

/// What a chart is asked to show. Compared by value by the redraw gate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DisplayParams {
    pub window: usize,
    pub relative: bool,
}

impl DisplayParams {
    /// A zero window falls back to the default; larger than [`MAX_WINDOW`]
    /// is capped.
    pub fn new(window: usize, relative: bool) -> Self {
        let window = if window == 0 { DEFAULT_WINDOW } else { window.min(MAX_WINDOW) };
        Self { window, relative }
    }

    /// Normalize the raw window field: a cleared, unparseable or zero entry
    /// falls back to the default window; oversized entries are capped.
    pub fn from_input(window_text: &str, relative: bool) -> Self {
        let window = window_text.trim().parse::<usize>().unwrap_or(DEFAULT_WINDOW);
        Self::new(window, relative)
    }

    pub fn with_relative(mut self, relative: bool) -> Self {
        self.relative = relative;
        self
    }
}

impl Default for DisplayParams {
    fn default() -> Self {
        Self { window: DEFAULT_WINDOW, relative: false }
    }
}
