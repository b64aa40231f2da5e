//! Error category classification.

use std::fmt;

/// High-level categorization of startup errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Bundled content failed to load. A build defect.
    Content,

    /// Invalid input from the command line.
    User,
}

impl ErrorCategory {
    /// Short label for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Content => "content",
            ErrorCategory::User => "user",
        }
    }

    /// Process exit code for a startup failure in this category.
    pub fn exit_code(&self) -> i32 {
        match self {
            ErrorCategory::Content => 1,
            ErrorCategory::User => 2,
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
