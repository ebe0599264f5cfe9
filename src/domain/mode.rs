//! Publication targets and audiences

use std::fmt;

/// Who a book notebook is published for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Audience {
    /// `teacher` cells are blanked
    #[default]
    Student,
    /// Everything is kept
    Teacher,
}

impl Audience {
    /// Interpret the `<teacher-flag>` argument: `true` (any case) selects
    /// the teacher audience, anything else the student one.
    pub fn from_teacher_flag(flag: &str) -> Self {
        if flag.eq_ignore_ascii_case("true") {
            Audience::Teacher
        } else {
            Audience::Student
        }
    }
}

impl fmt::Display for Audience {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Audience::Student => write!(f, "student"),
            Audience::Teacher => write!(f, "teacher"),
        }
    }
}

/// Publication target a notebook is rewritten for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// Hands-on variant run on a hosted cloud kernel
    Colab,
    /// Downloadable book notebook for the given audience
    Book(Audience),
}

impl Target {
    /// Audience whose redaction rule applies, if any
    pub fn audience(&self) -> Option<Audience> {
        match self {
            Target::Colab => None,
            Target::Book(audience) => Some(*audience),
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Colab => write!(f, "colab"),
            Target::Book(audience) => write!(f, "book ({})", audience),
        }
    }
}
