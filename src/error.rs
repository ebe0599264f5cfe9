//! Error types for bookprep

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for bookprep
#[derive(Debug, Error)]
pub enum BookprepError {
    #[error("Input not found: {0}")]
    InputNotFound(PathBuf),

    #[error("Path is not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Malformed notebook: {0}")]
    MalformedNotebook(String),

    #[error("HTML error: {0}")]
    Html(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),
}

impl BookprepError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            BookprepError::MalformedNotebook(_) | BookprepError::Json(_) => 2,
            BookprepError::Config(_) | BookprepError::TomlDeserialize(_) => 3,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            BookprepError::InputNotFound(path) => {
                format!(
                    "Input not found: {}\n\n\
                    Suggestions:\n\
                    • Check the path for typos\n\
                    • Relative paths are resolved from the current directory\n\
                    • Build the book first so the HTML output exists",
                    path.display()
                )
            }
            BookprepError::Html(msg) => {
                format!(
                    "HTML error: {}\n\n\
                    Suggestions:\n\
                    • Rebuild the book to regenerate the HTML output\n\
                    • Check that the file is UTF-8 encoded",
                    msg
                )
            }
            BookprepError::MalformedNotebook(msg) => {
                format!(
                    "Malformed notebook: {}\n\n\
                    Suggestions:\n\
                    • Open the file in Jupyter to check that it still loads\n\
                    • Validate the notebook with 'jupyter nbconvert --to notebook'",
                    msg
                )
            }
            BookprepError::Json(err) => {
                format!(
                    "Notebook is not valid JSON: {}\n\n\
                    Expected an nbformat v4 document (.ipynb)",
                    err
                )
            }
            BookprepError::Config(msg) => {
                format!(
                    "Configuration error: {}\n\n\
                    Configuration files use TOML, for example:\n\
                    exclude_from_styling = [\"intro.html\"]",
                    msg
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using BookprepError
pub type Result<T> = std::result::Result<T, BookprepError>;
