// File: crates/dashboard-core/src/toc.rs
// Summary: Table of contents entries linking to each graph on the page.

use serde::Serialize;

use crate::config::GraphConfig;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TocEntry {
    pub href: String,
    pub title: String,
}

/// One anchor per graph, in page order.
pub fn build_toc(graphs: &[GraphConfig]) -> Vec<TocEntry> {
    graphs
        .iter()
        .map(|g| TocEntry { href: format!("#{}", g.id), title: g.display_title().to_owned() })
        .collect()
}
