//! Application-level error type.

use thiserror::Error;

use super::category::ErrorCategory;
use crate::i18n::{ContentError, UnknownLang};

/// Errors that stop the application during startup.
#[derive(Debug, Error)]
pub enum FolioError {
    #[error("content: {0}")]
    Content(#[from] ContentError),

    #[error("{0}")]
    Lang(#[from] UnknownLang),
}

impl FolioError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            FolioError::Content(_) => ErrorCategory::Content,
            FolioError::Lang(_) => ErrorCategory::User,
        }
    }

    /// One-line message for stderr.
    pub fn user_message(&self) -> String {
        match self {
            FolioError::Content(e) => format!("The bundled page content is invalid: {e}"),
            FolioError::Lang(e) => format!("{e}. Supported languages: tr, en"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{Lang, LocalizationTable};

    #[test]
    fn test_content_error_category() {
        let err = LocalizationTable::from_sources("{}", "{}").unwrap_err();
        let err = FolioError::from(err);
        assert_eq!(err.category(), ErrorCategory::Content);
        assert!(err.user_message().contains("invalid"));
    }

    #[test]
    fn test_lang_error_message() {
        let err = FolioError::from("de".parse::<Lang>().unwrap_err());
        assert_eq!(err.category(), ErrorCategory::User);
        assert!(err.user_message().contains("tr, en"));
    }
}
