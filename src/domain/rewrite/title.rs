//! First-cell title normalization

/// Marker present in first cells that carry the "open in ..." button row
pub const BUTTON_ROW_MARKER: &str = "custom-button-row";

/// How the first markdown cell of a document is reduced to its title line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitlePolicy {
    /// Always keep only the first line, provided it is a `# ` title
    Unconditional,
    /// Keep only the first line when the button-row marker is present
    ButtonRow,
}

impl TitlePolicy {
    /// The reduced source, or `None` when the rule does not apply or the
    /// cell already is just its title line.
    pub fn normalize(&self, source: &str) -> Option<String> {
        let title = match self {
            TitlePolicy::Unconditional => {
                let first = source.trim().lines().next()?;
                if !first.starts_with("# ") {
                    return None;
                }
                first
            }
            TitlePolicy::ButtonRow => {
                if !source.contains(BUTTON_ROW_MARKER) {
                    return None;
                }
                source.lines().next().unwrap_or_default()
            }
        };

        (title != source).then(|| title.to_string())
    }
}
