//! bookprep - Publication tooling for notebook-based books
//!
//! Rewrites notebook cells for the Colab and student/teacher variants of a
//! book, and applies heading styles to the book's rendered HTML.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::BookprepError;
