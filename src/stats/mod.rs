//! Best-effort public profile statistics.
//!
//! One GET against the GitHub users API. Anything other than a 2xx response
//! with a JSON body degrades to [`StatsState::Unavailable`]; none of it is
//! shown to the user as an error.

use std::sync::Arc;

use serde::Deserialize;
use thiserror::Error;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::app::AppMessage;
use crate::traits::{Headers, HttpClient, HttpError};

/// Public API root.
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Profile whose numbers are shown in the footprint section.
pub const DEFAULT_USERNAME: &str = "MustafaEP";

const ACCEPT: &str = "application/vnd.github+json";

/// Counts shown in the footprint section. Each may be missing on its own.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct ProfileStats {
    #[serde(default)]
    pub public_repos: Option<u64>,
    #[serde(default)]
    pub followers: Option<u64>,
}

/// Where the statistics request stands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatsState {
    #[default]
    Loading,
    Ready(ProfileStats),
    /// Request failed, was skipped or was aborted
    Unavailable,
}

impl StatsState {
    /// The stats, if they arrived.
    pub fn stats(&self) -> Option<ProfileStats> {
        match self {
            StatsState::Ready(stats) => Some(*stats),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, StatsState::Loading)
    }
}

#[derive(Debug, Error)]
pub enum StatsError {
    #[error("request failed: {0}")]
    Http(#[from] HttpError),

    #[error("unexpected status {0}")]
    Status(u16),

    #[error("malformed profile body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// URL of the public profile endpoint for `username`.
pub fn profile_url(api_base: &str, username: &str) -> String {
    format!("{}/users/{}", api_base.trim_end_matches('/'), username)
}

/// Fetch the profile counts.
pub async fn fetch_profile_stats<C>(client: &C, url: &str) -> Result<ProfileStats, StatsError>
where
    C: HttpClient + ?Sized,
{
    let mut headers = Headers::new();
    headers.insert("Accept".to_string(), ACCEPT.to_string());
    headers.insert(
        "User-Agent".to_string(),
        format!("folio/{}", env!("CARGO_PKG_VERSION")),
    );

    let response = client.get(url, &headers).await?;
    if !response.is_success() {
        return Err(StatsError::Status(response.status));
    }
    Ok(response.json()?)
}

/// Run the request on the tokio runtime and report back through `tx`.
///
/// Returns `None` when called outside a runtime. The caller owns the handle
/// and aborts it when the view goes away.
pub fn spawn_stats_fetch(
    client: Arc<dyn HttpClient>,
    url: String,
    tx: mpsc::UnboundedSender<AppMessage>,
) -> Option<JoinHandle<()>> {
    let runtime = tokio::runtime::Handle::try_current().ok()?;

    Some(runtime.spawn(async move {
        let message = match fetch_profile_stats(client.as_ref(), &url).await {
            Ok(stats) => AppMessage::StatsReady(stats),
            Err(e) => {
                tracing::debug!("Profile statistics unavailable: {}", e);
                AppMessage::StatsUnavailable
            }
        };
        // Receiver is gone once the app has shut down.
        let _ = tx.send(message);
    }))
}
