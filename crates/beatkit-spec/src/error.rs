//! Error types for request validation and configuration loading.

use thiserror::Error;

/// Errors produced while parsing or validating Beatkit inputs.
#[derive(Debug, Error)]
pub enum SpecError {
    /// Genre name not in the supported list.
    #[error("unknown genre: '{0}'")]
    UnknownGenre(String),

    /// Tempo outside the accepted range.
    #[error("invalid bpm: {bpm} (expected {min}-{max})")]
    InvalidBpm {
        /// The rejected tempo.
        bpm: u32,
        /// Lowest accepted tempo.
        min: u32,
        /// Highest accepted tempo.
        max: u32,
    },

    /// Duration that is not a positive, finite number of seconds up to the maximum.
    #[error("invalid duration: {0} seconds")]
    InvalidDuration(f64),

    /// Configuration value out of range.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// Configuration file could not be parsed.
    #[error("config parse error: {0}")]
    Config(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Common interface for errors raised by Beatkit backends.
///
/// Gives every backend error a stable code for programmatic handling and a
/// category for grouping, on top of the regular `Display` message.
///
/// # Example
/// ```ignore
/// use beatkit_spec::BackendError;
///
/// fn report(err: &dyn BackendError) {
///     eprintln!("[{}] {}", err.code(), err.message());
/// }
/// ```
pub trait BackendError: std::error::Error {
    /// Stable error code such as "BEAT_001".
    fn code(&self) -> &'static str;

    /// Human-readable message, owned.
    fn message(&self) -> String {
        self.to_string()
    }

    /// Error category ("render", "midi", "decode").
    fn category(&self) -> &'static str;
}
