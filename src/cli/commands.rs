//! CLI command definitions

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "bookprep")]
#[command(about = "Prepare book notebooks and HTML for publication", long_about = None)]
#[command(version)]
pub struct Cli {
    /// TOML file overriding the built-in tables
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Rewrite a book notebook for Colab
    ConvertToColab {
        /// Notebook to convert
        input: PathBuf,

        /// Where to write the converted notebook
        output: PathBuf,
    },

    /// Style h2/h3 headings in rendered HTML
    UpdateHtmlStyles {
        /// HTML file, or directory searched recursively for *.html
        path: PathBuf,
    },

    /// Prepare a book notebook for students or teachers
    UpdateNotebooks {
        /// Notebook to process
        input: PathBuf,

        /// Where to write the processed notebook
        output: PathBuf,

        /// "true" keeps teacher cells; anything else blanks them
        teacher: String,
    },
}
