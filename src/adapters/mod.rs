//! Concrete implementations of trait abstractions.
//!
//! # Adapters
//!
//! - [`FileStore`] - JSON-file storage area (persistent and session scopes)
//! - [`MemoryStore`] - process-lifetime storage area
//! - [`ReqwestHttpClient`] - HTTP client using reqwest
//!
//! The [`mock`] submodule provides test doubles.

pub mod file_store;
pub mod memory_store;
pub mod mock;
pub mod reqwest_http;

pub use file_store::FileStore;
pub use memory_store::MemoryStore;
pub use mock::{FlakyStore, MockHttpClient};
pub use reqwest_http::ReqwestHttpClient;
