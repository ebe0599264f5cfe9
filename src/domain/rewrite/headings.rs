//! Inline heading styles for markdown cells

use crate::domain::styles::{HeadingStyle, StyleTable};
use regex::Regex;
use std::sync::OnceLock;

/// Inline element wrapped around heading titles
pub const HTML_TYPE: &str = "mark";

fn h2_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^(##\s+)(.+)$").unwrap())
}

fn h3_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^(###\s+)(.+)$").unwrap())
}

/// Wrap level-2 and level-3 heading titles in a styled `<mark>`.
///
/// Only whole heading lines are rewritten. Returns the number of headings
/// styled alongside the new text; the text is unchanged when the count is 0.
pub fn style_markdown_headings(source: &str, styles: &StyleTable) -> (String, usize) {
    let mut styled = 0usize;

    let lines: Vec<String> = source
        .split('\n')
        .map(|line| {
            let (caps, style) = if let Some(caps) = h2_regex().captures(line) {
                (caps, HeadingStyle::H2)
            } else if let Some(caps) = h3_regex().captures(line) {
                let style = HeadingStyle::for_markdown_h3(&caps[2]);
                (caps, style)
            } else {
                return line.to_string();
            };

            styled += 1;
            format!(
                "{}<{} style=\"{}\">{}</{}>",
                &caps[1],
                HTML_TYPE,
                styles.get(style),
                &caps[2],
                HTML_TYPE
            )
        })
        .collect();

    if styled == 0 {
        return (source.to_string(), 0);
    }

    (lines.join("\n"), styled)
}
