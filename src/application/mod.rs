//! Application layer - Use cases and orchestration

pub mod convert_colab;
pub mod update_html_styles;
pub mod update_notebooks;

pub use convert_colab::convert_to_colab;
pub use update_html_styles::{update_html_styles, FileOutcome, HtmlBatchReport};
pub use update_notebooks::{update_notebook, NotebookOutcome};
