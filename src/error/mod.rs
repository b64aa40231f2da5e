//! Error handling.
//!
//! Module-level errors (`ContentError`, `StatsError`, `StorageError`,
//! `HttpError`) stay close to the code that raises them and are absorbed
//! where they occur. [`FolioError`] covers the two failures that stop the
//! program before the terminal is taken over:
//!
//! | Category | Description | Exit code |
//! |----------|-------------|-----------|
//! | Content | Bundled localization invalid | 1 |
//! | User | Bad command-line value | 2 |

mod category;
mod folio_error;
mod result;

pub use category::ErrorCategory;
pub use folio_error::FolioError;
pub use result::FolioResult;
