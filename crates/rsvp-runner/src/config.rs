//! Configuration for the demo runner.
//!
//! Everything is loaded from environment variables; the demo has exactly one
//! knob.

/// Runner configuration loaded from the environment.
#[derive(Debug, Clone, Default)]
pub struct RunnerConfig {
    /// Path to a JSON snapshot to preload before the demo sequence.
    ///
    /// Taken from `RSVP_SNAPSHOT`. When unset, the demo starts from an
    /// empty registry.
    pub snapshot_path: Option<String>,
}

impl RunnerConfig {
    /// Load configuration from environment variables.
    ///
    /// Optional variables:
    /// - `RSVP_SNAPSHOT` -- path to a JSON record array to preload
    pub fn from_env() -> Self {
        Self {
            snapshot_path: std::env::var("RSVP_SNAPSHOT").ok(),
        }
    }
}
