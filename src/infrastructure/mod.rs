//! Infrastructure layer - File formats and external I/O

pub mod config;
pub mod html;
pub mod notebook_io;

pub use config::Config;
pub use html::{apply_header_styles, StyledHeading, StyledHtml};
pub use notebook_io::{read_notebook, write_notebook};
