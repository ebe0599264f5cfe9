//! Apply heading styles to the rendered book
//!
//! One bad file never aborts the batch: its error is reported and the next
//! file is processed.

use crate::error::{BookprepError, Result};
use crate::infrastructure::html::{apply_header_styles, StyledHeading};
use crate::infrastructure::Config;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Characters of heading text shown per progress line
const PREVIEW_LEN: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// In the styling exclusion list; not read, not written
    Excluded,
    /// No `h2`/`h3` found; not written
    Unchanged,
    /// Rewritten with these headings restyled
    Updated(Vec<StyledHeading>),
    /// Reading, rewriting or writing failed
    Failed(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HtmlBatchReport {
    pub files: Vec<(PathBuf, FileOutcome)>,
}

impl HtmlBatchReport {
    pub fn updated(&self) -> usize {
        self.count(|o| matches!(o, FileOutcome::Updated(_)))
    }

    pub fn unchanged(&self) -> usize {
        self.count(|o| matches!(o, FileOutcome::Unchanged))
    }

    pub fn excluded(&self) -> usize {
        self.count(|o| matches!(o, FileOutcome::Excluded))
    }

    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, FileOutcome::Failed(_)))
    }

    fn count(&self, pred: impl Fn(&FileOutcome) -> bool) -> usize {
        self.files.iter().filter(|(_, o)| pred(o)).count()
    }
}

/// Style one HTML file, or every `*.html` below a directory.
///
/// # Errors
///
/// Only for the path itself (missing, or neither file nor directory).
/// Per-file failures are recorded in the report.
pub fn update_html_styles(path: &Path, config: &Config) -> Result<HtmlBatchReport> {
    if !path.exists() {
        return Err(BookprepError::InputNotFound(path.to_path_buf()));
    }

    let files = if path.is_file() {
        vec![path.to_path_buf()]
    } else if path.is_dir() {
        println!("🔍 Looking for HTML files in: {}", path.display());
        let files = find_html_files(path);
        if files.is_empty() {
            println!("❌ No HTML files found in {}", path.display());
            return Ok(HtmlBatchReport::default());
        }
        println!("📝 Found {} HTML files to process", files.len());
        files
    } else {
        return Err(BookprepError::NotADirectory(path.to_path_buf()));
    };

    let mut report = HtmlBatchReport::default();
    for file in files {
        println!("\n🔄 Processing: {}", file.display());
        let outcome = match process_html_file(&file, config) {
            Ok(outcome) => outcome,
            Err(e) => {
                log::error!("failed to style {}: {}", file.display(), e);
                println!("  ❌ Error processing {}: {}", file.display(), e);
                FileOutcome::Failed(e.to_string())
            }
        };
        report.files.push((file, outcome));
    }

    Ok(report)
}

/// All `*.html` files below `dir`, sorted
pub fn find_html_files(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| path.extension().and_then(|e| e.to_str()) == Some("html"))
        .collect();
    files.sort();
    files
}

/// Style a single file in place, unless it is excluded or has no headings
pub fn process_html_file(path: &Path, config: &Config) -> Result<FileOutcome> {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    if config.is_excluded_from_styling(&file_name) {
        println!("  ⏭️  Excluded from styling: {}", file_name);
        log::info!("{} is excluded from styling", path.display());
        return Ok(FileOutcome::Excluded);
    }

    let content = fs::read_to_string(path)?;
    let styled = apply_header_styles(&content, &config.styles)?;

    if !styled.modified() {
        println!("  ⏭️  No headers found in {}", path.display());
        return Ok(FileOutcome::Unchanged);
    }

    for heading in &styled.headings {
        println!(
            "    ✅ Applied {} to {}: {}...",
            heading.style.name(),
            heading.tag,
            heading.preview(PREVIEW_LEN)
        );
    }

    fs::write(path, &styled.html)?;
    println!("  💾 Updated {}", path.display());

    Ok(FileOutcome::Updated(styled.headings))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::HeadingStyle;
    use tempfile::TempDir;

    #[test]
    fn test_find_html_files_recursive_and_sorted() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("content/b")).unwrap();
        fs::write(temp.path().join("content/b/z.html"), "").unwrap();
        fs::write(temp.path().join("content/a.html"), "").unwrap();
        fs::write(temp.path().join("content/notes.md"), "").unwrap();
        fs::write(temp.path().join("content/page.htm"), "").unwrap();

        let files = find_html_files(temp.path());
        assert_eq!(
            files,
            vec![
                temp.path().join("content/a.html"),
                temp.path().join("content/b/z.html")
            ]
        );
    }

    #[test]
    fn test_excluded_file_untouched() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("python_basics.html");
        let html = "<h2 style='x'>Basics</h2>";
        fs::write(&path, html).unwrap();

        let outcome = process_html_file(&path, &Config::default()).unwrap();
        assert_eq!(outcome, FileOutcome::Excluded);
        assert_eq!(fs::read_to_string(&path).unwrap(), html);
    }

    #[test]
    fn test_updates_file_in_place() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("lesson.html");
        fs::write(&path, "<h3>Exercise 1</h3>").unwrap();

        let outcome = process_html_file(&path, &Config::default()).unwrap();
        match outcome {
            FileOutcome::Updated(headings) => {
                assert_eq!(headings.len(), 1);
                assert_eq!(headings[0].style, HeadingStyle::H3Exercise);
            }
            other => panic!("Expected Updated, got {:?}", other),
        }
        assert!(fs::read_to_string(&path).unwrap().contains("style="));
    }

    #[test]
    fn test_missing_path() {
        let temp = TempDir::new().unwrap();
        let result = update_html_styles(&temp.path().join("_build"), &Config::default());
        assert!(matches!(result, Err(BookprepError::InputNotFound(_))));
    }

    #[test]
    fn test_bad_file_does_not_abort_batch() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("a.html"), [0xff, 0xfe, 0x00]).unwrap();
        fs::write(temp.path().join("b.html"), "<h2>Overview</h2>").unwrap();

        let report = update_html_styles(temp.path(), &Config::default()).unwrap();

        assert_eq!(report.files.len(), 2);
        assert_eq!(report.failed(), 1);
        assert_eq!(report.updated(), 1);
        assert!(fs::read_to_string(temp.path().join("b.html"))
            .unwrap()
            .contains("style="));
    }

    #[test]
    fn test_empty_directory() {
        let temp = TempDir::new().unwrap();
        let report = update_html_styles(temp.path(), &Config::default()).unwrap();
        assert!(report.files.is_empty());
    }

    #[test]
    fn test_report_counts() {
        let report = HtmlBatchReport {
            files: vec![
                (PathBuf::from("a.html"), FileOutcome::Excluded),
                (PathBuf::from("b.html"), FileOutcome::Unchanged),
                (PathBuf::from("c.html"), FileOutcome::Unchanged),
            ],
        };
        assert_eq!(report.excluded(), 1);
        assert_eq!(report.unchanged(), 2);
        assert_eq!(report.updated(), 0);
        assert_eq!(report.failed(), 0);
    }
}
