//! Error types surfaced to the host.

use thiserror::Error;

/// Failure to load or decode an episode manifest.
///
/// The host treats any of these as "no episodes" and keeps running.
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("manifest io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("manifest json error: {0}")]
    Json(#[from] serde_json::Error),
}
