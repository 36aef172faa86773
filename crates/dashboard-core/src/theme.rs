// File: crates/dashboard-core/src/theme.rs
// Summary: Series color palettes assigned round-robin by column position.

/// Color used when a palette has no entries.
pub const FALLBACK_COLOR: &str = "#888888";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub name: &'static str,
    pub colors: &'static [&'static str],
}

impl Palette {
    pub fn classic() -> Self {
        Self {
            name: "classic",
            colors: &[
                "#3366cc", "#dc3912", "#ff9900", "#109618",
                "#990099", "#0099c6", "#66aa00", "#dd4477",
            ],
        }
    }

    pub fn tableau() -> Self {
        Self {
            name: "tableau",
            colors: &[
                "#4e79a7", "#f28e2b", "#e15759", "#76b7b2", "#59a14f",
                "#edc948", "#b07aa1", "#ff9da7", "#9c755f", "#bab0ac",
            ],
        }
    }

    pub fn high_contrast() -> Self {
        Self {
            name: "high-contrast",
            colors: &["#0000ff", "#ff0000", "#00aa00", "#000000", "#ff00ff", "#00aaff"],
        }
    }

    /// Color for the zero-based series position, cycling through the palette.
    /// An empty palette yields [`FALLBACK_COLOR`].
    pub fn color(&self, position: usize) -> &'static str {
        match self.colors.len() {
            0 => FALLBACK_COLOR,
            n => self.colors[position % n],
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::classic()
    }
}

/// Return a list of built-in palette presets.
pub fn presets() -> Vec<Palette> {
    vec![Palette::classic(), Palette::tableau(), Palette::high_contrast()]
}

/// Find a palette by its `name`, falling back to classic.
pub fn find(name: &str) -> Palette {
    for p in presets() { if p.name.eq_ignore_ascii_case(name) { return p; } }
    Palette::classic()
}
