// File: crates/dashboard-core/src/gate.rs
// Summary: Redraw gate remembering the last display params drawn per chart.

use std::collections::HashMap;

use tracing::trace;

use crate::view::DisplayParams;

#[derive(Clone, Debug, Default)]
pub struct RedrawGate {
    last: HashMap<String, DisplayParams>,
}

impl RedrawGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when `id` has not been drawn with exactly these params; records
    /// them as drawn in that case.
    pub fn should_redraw(&mut self, id: &str, params: DisplayParams) -> bool {
        if self.last.get(id) == Some(&params) {
            trace!(chart = id, ?params, "params unchanged, skipping redraw");
            return false;
        }
        self.last.insert(id.to_owned(), params);
        true
    }

    /// Forget what was drawn for `id`, forcing the next redraw.
    pub fn invalidate(&mut self, id: &str) {
        self.last.remove(id);
    }

    pub fn last_drawn(&self, id: &str) -> Option<DisplayParams> {
        self.last.get(id).copied()
    }
}
