//! Heading style table and heading classification

use serde::{Deserialize, Serialize};

/// Heading category a style string is chosen for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingStyle {
    H2,
    H3Example,
    H3Exercise,
    H3Plain,
}

impl HeadingStyle {
    /// Classify a level-3 heading inside a markdown cell.
    ///
    /// "exercise" is checked before "example", so a title containing both
    /// gets the exercise style.
    pub fn for_markdown_h3(title: &str) -> Self {
        let title = title.to_lowercase();
        if title.contains("exercise") {
            HeadingStyle::H3Exercise
        } else if title.contains("example") {
            HeadingStyle::H3Example
        } else {
            HeadingStyle::H3Plain
        }
    }

    /// Classify a rendered `<h3>` element by its text.
    ///
    /// Unlike [`HeadingStyle::for_markdown_h3`], "example" wins here. Both
    /// orders are relied on by existing output; do not merge the two.
    pub fn for_rendered_h3(text: &str) -> Self {
        let text = text.to_lowercase();
        if text.contains("example") {
            HeadingStyle::H3Example
        } else if text.contains("exercise") {
            HeadingStyle::H3Exercise
        } else {
            HeadingStyle::H3Plain
        }
    }

    /// Name used in progress output
    pub fn name(&self) -> &'static str {
        match self {
            HeadingStyle::H2 => "H2_STYLE",
            HeadingStyle::H3Example => "EXAMPLE_STYLE",
            HeadingStyle::H3Exercise => "EXERCISE_STYLE",
            HeadingStyle::H3Plain => "H3_STYLE",
        }
    }
}

/// Style strings (CSS declarations) per heading category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleTable {
    pub h2: String,
    pub h3_example: String,
    pub h3_exercise: String,
    pub h3_plain: String,
}

impl Default for StyleTable {
    fn default() -> Self {
        StyleTable {
            h2: "display: block; background-color: #1f4e79; color: #ffffff; \
                 padding: 6px 12px; border-radius: 6px;"
                .to_string(),
            h3_example: "display: block; background-color: #e8f4ea; color: #1e5631; \
                         border-left: 6px solid #2e8b57; padding: 4px 10px;"
                .to_string(),
            h3_exercise: "display: block; background-color: #fff4e5; color: #8a4b08; \
                          border-left: 6px solid #f0a030; padding: 4px 10px;"
                .to_string(),
            h3_plain: "display: block; background-color: #eef3f8; color: #1f4e79; \
                       border-left: 6px solid #1f4e79; padding: 4px 10px;"
                .to_string(),
        }
    }
}

impl StyleTable {
    pub fn get(&self, style: HeadingStyle) -> &str {
        match style {
            HeadingStyle::H2 => &self.h2,
            HeadingStyle::H3Example => &self.h3_example,
            HeadingStyle::H3Exercise => &self.h3_exercise,
            HeadingStyle::H3Plain => &self.h3_plain,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markdown_h3_prefers_exercise() {
        assert_eq!(
            HeadingStyle::for_markdown_h3("Example exercise"),
            HeadingStyle::H3Exercise
        );
        assert_eq!(
            HeadingStyle::for_markdown_h3("Example Usage"),
            HeadingStyle::H3Example
        );
        assert_eq!(HeadingStyle::for_markdown_h3("Notes"), HeadingStyle::H3Plain);
    }

    #[test]
    fn test_rendered_h3_prefers_example() {
        assert_eq!(
            HeadingStyle::for_rendered_h3("Example exercise"),
            HeadingStyle::H3Example
        );
        assert_eq!(
            HeadingStyle::for_rendered_h3("EXERCISE 2"),
            HeadingStyle::H3Exercise
        );
        assert_eq!(HeadingStyle::for_rendered_h3("Notes"), HeadingStyle::H3Plain);
    }

    #[test]
    fn test_default_styles_are_distinct() {
        let table = StyleTable::default();
        let styles = [
            table.get(HeadingStyle::H2),
            table.get(HeadingStyle::H3Example),
            table.get(HeadingStyle::H3Exercise),
            table.get(HeadingStyle::H3Plain),
        ];
        for (i, a) in styles.iter().enumerate() {
            assert!(!a.is_empty());
            assert!(!a.contains('"'));
            for b in &styles[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
