//! Anchor link remapping

/// Literal old-anchor → new-anchor table.
///
/// Entries are kept longest key first so a key that is a prefix of another
/// (`#data-structures` vs `#data-structures-lists`) never fires inside the
/// longer one's occurrences.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LinkMap {
    entries: Vec<(String, String)>,
}

impl LinkMap {
    pub fn new<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut entries: Vec<(String, String)> = entries
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .filter(|(k, _)| !k.is_empty())
            .collect();
        entries.sort_by(|a, b| b.0.len().cmp(&a.0.len()).then_with(|| a.0.cmp(&b.0)));
        LinkMap { entries }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Replace every occurrence of every key. Returns `None` if nothing matched.
    pub fn apply(&self, text: &str) -> Option<String> {
        let mut result = text.to_string();
        for (old, new) in &self.entries {
            if result.contains(old.as_str()) {
                result = result.replace(old.as_str(), new);
            }
        }
        (result != text).then_some(result)
    }
}
