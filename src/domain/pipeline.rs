//! Cell pipeline
//!
//! Runs the tag policy and the content rewriters over every cell of a
//! notebook, in order, and rebuilds the cell list from the survivors.
//!
//! Colab target, per cell:
//! 1. title normalization (first cell, unconditional)
//! 2. tag policy without redaction
//! 3. script metadata → install directives (code)
//! 4. unsupported viewer commented out (code)
//!
//! Book target, per cell:
//! 1. title normalization (first cell, button-row marker only)
//! 2. tag policy with the audience's redaction rule
//! 3. link remap (markdown, remapped document only)
//! 4. heading styles (markdown)

use crate::domain::mode::Target;
use crate::domain::notebook::{Cell, Notebook};
use crate::domain::policy::{TagPolicy, Verdict};
use crate::domain::rewrite::{self, unsupported::UNSUPPORTED_VIEWER, LinkMap, TitlePolicy};
use crate::domain::styles::StyleTable;

/// What happened to a notebook's cells
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PipelineReport {
    pub cells_in: usize,
    pub dropped: usize,
    pub redacted: usize,
    pub title_normalized: bool,
    pub install_cells: usize,
    pub commented_cells: usize,
    pub links_remapped: usize,
    pub headings_styled: usize,
}

impl PipelineReport {
    pub fn cells_out(&self) -> usize {
        self.cells_in - self.dropped
    }
}

pub struct CellPipeline<'a> {
    target: Target,
    styles: &'a StyleTable,
    /// Only set when the document being processed is the remapped one
    link_map: Option<&'a LinkMap>,
}

impl<'a> CellPipeline<'a> {
    pub fn new(target: Target, styles: &'a StyleTable) -> Self {
        CellPipeline {
            target,
            styles,
            link_map: None,
        }
    }

    /// Remap anchors in markdown cells (book target only)
    pub fn with_link_map(mut self, link_map: &'a LinkMap) -> Self {
        self.link_map = Some(link_map);
        self
    }

    fn title_policy(&self) -> TitlePolicy {
        match self.target {
            Target::Colab => TitlePolicy::Unconditional,
            Target::Book(_) => TitlePolicy::ButtonRow,
        }
    }

    /// Transform `notebook`, returning the rewritten document and a report.
    pub fn run(&self, notebook: Notebook) -> (Notebook, PipelineReport) {
        let Notebook { cells, rest } = notebook;
        let policy = TagPolicy::for_audience(self.target.audience());
        let mut report = PipelineReport {
            cells_in: cells.len(),
            ..PipelineReport::default()
        };

        let mut kept = Vec::with_capacity(cells.len());
        for (index, mut cell) in cells.into_iter().enumerate() {
            if index == 0 && cell.is_markdown() {
                if let Some(title) = self.title_policy().normalize(cell.source()) {
                    log::debug!("cell 0: reduced to title line {:?}", title);
                    cell.set_source(title);
                    report.title_normalized = true;
                }
            }

            match policy.apply(&mut cell) {
                Verdict::Drop => {
                    log::debug!("cell {}: dropped by tags {:?}", index, cell.tags());
                    report.dropped += 1;
                    continue;
                }
                Verdict::Redact => {
                    log::debug!("cell {}: redacted for {}", index, self.target);
                    report.redacted += 1;
                }
                Verdict::Keep => {}
            }

            match self.target {
                Target::Colab => self.rewrite_for_colab(index, &mut cell, &mut report),
                Target::Book(_) => self.rewrite_for_book(index, &mut cell, &mut report),
            }

            kept.push(cell);
        }

        (Notebook { cells: kept, rest }, report)
    }

    fn rewrite_for_colab(&self, index: usize, cell: &mut Cell, report: &mut PipelineReport) {
        if !cell.is_code() {
            return;
        }

        if let Some(source) = rewrite::rewrite_dependency_cell(cell.source()) {
            log::debug!("cell {}: script metadata replaced by install commands", index);
            cell.set_source(source);
            report.install_cells += 1;
        }

        if let Some(source) = rewrite::comment_unsupported(cell.source(), UNSUPPORTED_VIEWER) {
            log::debug!("cell {}: {} calls commented out", index, UNSUPPORTED_VIEWER);
            cell.set_source(source);
            report.commented_cells += 1;
        }
    }

    fn rewrite_for_book(&self, index: usize, cell: &mut Cell, report: &mut PipelineReport) {
        if !cell.is_markdown() {
            return;
        }

        if let Some(source) = self.link_map.and_then(|map| map.apply(cell.source())) {
            log::debug!("cell {}: anchor links remapped", index);
            cell.set_source(source);
            report.links_remapped += 1;
        }

        let (source, styled) = rewrite::style_markdown_headings(cell.source(), self.styles);
        if styled > 0 {
            log::debug!("cell {}: {} heading(s) styled", index, styled);
            cell.set_source(source);
            report.headings_styled += styled;
        }
    }
}
