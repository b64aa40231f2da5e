//! Folio - a bilingual personal portfolio rendered in the terminal
//!
//! This library exposes modules for use in integration tests and benches.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod error;
pub mod i18n;
pub mod startup;
pub mod stats;
pub mod storage;
pub mod terminal;
pub mod traits;
pub mod ui;
