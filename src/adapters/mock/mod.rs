//! Mock implementations for testing.
//!
//! # Available Mocks
//!
//! - [`MockHttpClient`] - HTTP client with configurable responses
//! - [`FlakyStore`] - key-value store with injectable read/write failures

pub mod http;
pub mod store;

pub use http::{MockHttpClient, MockResponse};
pub use store::FlakyStore;
