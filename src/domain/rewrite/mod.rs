//! Content rewriters
//!
//! Each rewriter takes a cell's source text and returns the rewritten text,
//! or `None` when the rule does not apply and the source must stay as is.

pub mod dependencies;
pub mod headings;
pub mod links;
pub mod title;
pub mod unsupported;

pub use dependencies::{install_commands, rewrite_dependency_cell};
pub use headings::style_markdown_headings;
pub use links::LinkMap;
pub use title::TitlePolicy;
pub use unsupported::comment_unsupported;
