//! Trait abstractions for dependency injection and testability.
//!
//! # Traits
//!
//! - [`KeyValueStore`] - one synchronous storage area (persistent or session)
//! - [`HttpClient`] - HTTP GET for the profile statistics request

pub mod http;
pub mod storage;

pub use http::{Headers, HttpClient, HttpError, Response};
pub use storage::{KeyValueStore, StorageError};
