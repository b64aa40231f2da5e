//! AppMessage enum for results arriving from background tasks.

use crate::stats::ProfileStats;

/// Messages received from async operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMessage {
    /// Profile statistics arrived
    StatsReady(ProfileStats),
    /// Profile statistics could not be fetched
    StatsUnavailable,
}
