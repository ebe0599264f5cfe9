//! Convert a book notebook into its Colab variant

use crate::domain::{CellPipeline, PipelineReport, Target};
use crate::error::Result;
use crate::infrastructure::notebook_io::{read_notebook, write_notebook};
use crate::infrastructure::Config;
use std::path::Path;

/// Read `input`, rewrite it for Colab and write the result to `output`.
///
/// Errors are not contained: a missing or corrupt notebook aborts the run.
pub fn convert_to_colab(input: &Path, output: &Path, config: &Config) -> Result<PipelineReport> {
    let notebook = read_notebook(input)?;

    let (notebook, report) = CellPipeline::new(Target::Colab, &config.styles).run(notebook);
    write_notebook(output, &notebook)?;

    log::info!(
        "{} -> {}: kept {} of {} cells",
        input.display(),
        output.display(),
        report.cells_out(),
        report.cells_in
    );

    Ok(report)
}
