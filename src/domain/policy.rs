//! Tag-driven publication policy
//!
//! Decides, per cell, whether it is dropped, redacted or kept. Rules run in a
//! fixed order:
//!
//! 1. student audience + `teacher` tag: redact and drop the `teacher` tag
//! 2. any removal tag: drop, even when rule 1 already fired
//! 3. `skip-execution`: keep, minus that tag

use crate::domain::mode::Audience;
use crate::domain::notebook::Cell;

pub const TEACHER_TAG: &str = "teacher";
pub const SKIP_EXECUTION_TAG: &str = "skip-execution";
pub const REMOVAL_TAGS: [&str; 3] = ["remove-input", "remove-output", "remove-cell"];

/// Outcome of applying the policy to one cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Excluded from the output document
    Drop,
    /// Kept in place with its content blanked
    Redact,
    /// Kept with content untouched (administrative tags may be stripped)
    Keep,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TagPolicy {
    audience: Option<Audience>,
}

impl TagPolicy {
    /// Policy without the redaction rule
    pub fn new() -> Self {
        TagPolicy { audience: None }
    }

    pub fn for_audience(audience: Option<Audience>) -> Self {
        TagPolicy { audience }
    }

    /// Apply the rules to `cell`, mutating its tags and content as needed.
    /// A dropped cell is left in whatever state the earlier rules put it in.
    pub fn apply(&self, cell: &mut Cell) -> Verdict {
        let mut verdict = Verdict::Keep;

        if self.audience == Some(Audience::Student) && cell.remove_tag(TEACHER_TAG) {
            cell.blank();
            verdict = Verdict::Redact;
        }

        if REMOVAL_TAGS.iter().any(|tag| cell.has_tag(tag)) {
            return Verdict::Drop;
        }

        cell.remove_tag(SKIP_EXECUTION_TAG);

        verdict
    }
}
