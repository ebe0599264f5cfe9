//! Heading styles for rendered HTML
//!
//! Classification needs each `<h3>`'s rendered text, which a streaming
//! rewriter only sees after the start tag has been emitted. So the document
//! is read once with scraper to plan a style per heading, then rewritten with
//! lol_html, which overwrites `style` attributes and leaves every other byte
//! as it was.

use crate::domain::{HeadingStyle, StyleTable};
use crate::error::{BookprepError, Result};
use lol_html::{element, HtmlRewriter, Settings};
use scraper::{Html, Selector};
use std::sync::OnceLock;

fn heading_selector() -> &'static Selector {
    static SELECTOR: OnceLock<Selector> = OnceLock::new();
    SELECTOR.get_or_init(|| Selector::parse("h2, h3").unwrap())
}

/// A heading and the style chosen for it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledHeading {
    pub tag: String,
    pub style: HeadingStyle,
    pub text: String,
}

impl StyledHeading {
    /// Heading text cut to `max` characters for progress output
    pub fn preview(&self, max: usize) -> String {
        self.text.trim().chars().take(max).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledHtml {
    pub html: String,
    pub headings: Vec<StyledHeading>,
}

impl StyledHtml {
    /// Whether any element was restyled
    pub fn modified(&self) -> bool {
        !self.headings.is_empty()
    }
}

/// Choose a style for every `h2`/`h3`, in document order
pub fn plan_heading_styles(html: &str) -> Vec<StyledHeading> {
    let document = Html::parse_document(html);

    document
        .select(heading_selector())
        .map(|element| {
            let tag = element.value().name().to_string();
            let text: String = element.text().collect();
            let style = if tag == "h2" {
                HeadingStyle::H2
            } else {
                HeadingStyle::for_rendered_h3(&text)
            };
            StyledHeading { tag, style, text }
        })
        .collect()
}

/// Overwrite the `style` attribute of every `h2`/`h3` element.
pub fn apply_header_styles(html: &str, styles: &StyleTable) -> Result<StyledHtml> {
    let headings = plan_heading_styles(html);
    if headings.is_empty() {
        return Ok(StyledHtml {
            html: html.to_string(),
            headings,
        });
    }

    let mut planned = headings.iter();
    let mut output = Vec::with_capacity(html.len());

    let mut rewriter = HtmlRewriter::new(
        Settings {
            element_content_handlers: vec![element!("h2, h3", |el| {
                let tag = el.tag_name();
                let style = match planned.next() {
                    Some(heading) if heading.tag == tag => heading.style,
                    _ => {
                        log::warn!("<{}> not found by the planning pass, using default", tag);
                        if tag == "h2" {
                            HeadingStyle::H2
                        } else {
                            HeadingStyle::H3Plain
                        }
                    }
                };
                el.set_attribute("style", styles.get(style))?;
                Ok(())
            })],
            strict: false,
            ..Settings::default()
        },
        |c: &[u8]| output.extend_from_slice(c),
    );

    rewriter
        .write(html.as_bytes())
        .map_err(|e| BookprepError::Html(format!("rewrite failed: {}", e)))?;
    rewriter
        .end()
        .map_err(|e| BookprepError::Html(format!("rewrite finalization failed: {}", e)))?;

    let html = String::from_utf8(output)
        .map_err(|e| BookprepError::Html(format!("invalid UTF-8 in output: {}", e)))?;

    Ok(StyledHtml { html, headings })
}
