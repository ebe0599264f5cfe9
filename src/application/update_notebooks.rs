//! Prepare a book notebook for students or teachers

use crate::domain::{Audience, CellPipeline, PipelineReport, Target};
use crate::error::Result;
use crate::infrastructure::notebook_io::{read_notebook, write_notebook};
use crate::infrastructure::Config;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotebookOutcome {
    /// Listed in the notebook exclusion table; nothing was read or written
    Skipped,
    Written(PipelineReport),
}

/// Rewrite `input` for `audience` and write it to `output`.
pub fn update_notebook(
    input: &Path,
    output: &Path,
    audience: Audience,
    config: &Config,
) -> Result<NotebookOutcome> {
    let file_name = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    if config.is_excluded_from_notebooks(&file_name) {
        println!("Skipping excluded file: {}", file_name);
        log::info!("{} is excluded from notebook processing", input.display());
        return Ok(NotebookOutcome::Skipped);
    }

    let notebook = read_notebook(input)?;

    let link_map = config.link_map_for(&file_name);
    let mut pipeline = CellPipeline::new(Target::Book(audience), &config.styles);
    if let Some(map) = &link_map {
        log::debug!("remapping {} anchor(s) in {}", map.len(), file_name);
        pipeline = pipeline.with_link_map(map);
    }

    let (notebook, report) = pipeline.run(notebook);
    write_notebook(output, &notebook)?;

    log::info!(
        "{} -> {} ({}): kept {} of {} cells, {} redacted",
        input.display(),
        output.display(),
        audience,
        report.cells_out(),
        report.cells_in,
        report.redacted
    );

    Ok(NotebookOutcome::Written(report))
}
