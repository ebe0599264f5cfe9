//! Output formatting utilities

use crate::application::HtmlBatchReport;
use crate::domain::PipelineReport;

/// Summary line(s) for one processed notebook
pub fn format_pipeline_report(report: &PipelineReport) -> String {
    let mut output = format!(
        "Kept {} of {} cells ({} dropped, {} redacted)",
        report.cells_out(),
        report.cells_in,
        report.dropped,
        report.redacted
    );

    let mut details = Vec::new();
    if report.title_normalized {
        details.push("title cell trimmed".to_string());
    }
    if report.install_cells > 0 {
        details.push(format!("{} install cell(s) generated", report.install_cells));
    }
    if report.commented_cells > 0 {
        details.push(format!(
            "{} cell(s) with unsupported calls commented out",
            report.commented_cells
        ));
    }
    if report.links_remapped > 0 {
        details.push(format!("links remapped in {} cell(s)", report.links_remapped));
    }
    if report.headings_styled > 0 {
        details.push(format!("{} heading(s) styled", report.headings_styled));
    }

    for detail in details {
        output.push_str(&format!("\n  - {}", detail));
    }

    output
}

/// Closing line of an HTML batch
pub fn format_batch_summary(report: &HtmlBatchReport) -> String {
    if report.files.is_empty() {
        return "No HTML files processed".to_string();
    }

    format!(
        "✅ Finished processing {} HTML files ({} updated, {} unchanged, {} excluded, {} failed)",
        report.files.len(),
        report.updated(),
        report.unchanged(),
        report.excluded(),
        report.failed()
    )
}
