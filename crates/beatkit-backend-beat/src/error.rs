//! Error types for the beat backend.

use std::path::{Path, PathBuf};

use beatkit_spec::{BackendError, SpecError};
use thiserror::Error;

use crate::midi::MidiError;

/// Result type for beat backend operations.
pub type BeatResult<T> = Result<T, BeatError>;

/// Errors that can occur while rendering a beat.
#[derive(Debug, Error)]
pub enum BeatError {
    /// The sample bank has no decoded samples, so there is nothing to mix.
    #[error("sample bank not loaded: no percussion samples available")]
    BankNotLoaded,

    /// The render request failed validation.
    #[error("invalid render request: {0}")]
    InvalidRequest(#[from] SpecError),

    /// MIDI encoding failed.
    #[error("MIDI encoding failed: {0}")]
    Midi(#[from] MidiError),

    /// A file could not be created, written or read.
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        /// File the operation targeted.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },

    /// The sample-library manifest could not be serialized.
    #[error("manifest error at {}: {source}", path.display())]
    Manifest {
        /// Manifest file path.
        path: PathBuf,
        /// Underlying error.
        source: serde_json::Error,
    },
}

impl BeatError {
    /// Wraps an I/O error with the path it happened on.
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}

impl BackendError for BeatError {
    fn code(&self) -> &'static str {
        match self {
            BeatError::BankNotLoaded => "BEAT_001",
            BeatError::InvalidRequest(_) => "BEAT_002",
            BeatError::Midi(_) => "BEAT_003",
            BeatError::Io { .. } => "BEAT_004",
            BeatError::Manifest { .. } => "BEAT_005",
        }
    }

    fn category(&self) -> &'static str {
        match self {
            BeatError::Midi(_) => "midi",
            _ => "render",
        }
    }
}
