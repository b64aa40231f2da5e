//! Startup configuration and logging.
//!
//! # Components
//!
//! - [`config`] - [`StartupConfig`] with builder and environment overrides
//! - [`logging`] - file-backed tracing subscriber

pub mod config;
pub mod logging;

pub use config::StartupConfig;
pub use logging::init_tracing;
