//! Result alias for fallible application operations.

use super::folio_error::FolioError;

/// `Result` with [`FolioError`].
pub type FolioResult<T> = Result<T, FolioError>;
