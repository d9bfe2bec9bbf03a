//! Playback error types.

use thiserror::Error;

/// Errors that can occur while playing back scenarios
#[derive(Debug, Error)]
pub enum PlaybackError {
    /// Writing a report to the output failed
    #[error("Failed to write report for scenario '{scenario}': {source}")]
    Io {
        scenario: String,
        #[source]
        source: std::io::Error,
    },

    /// Rendering a report as JSON failed
    #[error("Failed to serialize report for scenario '{scenario}': {source}")]
    Serialization {
        scenario: String,
        #[source]
        source: serde_json::Error,
    },
}
