//! JSON output types for machine-readable CLI output.
//!
//! Every command that takes `--json` prints a single [`CommandOutput`] object
//! to stdout, with either a result or a list of errors.

use beatkit_spec::BackendError;
use serde::Serialize;

/// Error codes for CLI-level failures.
///
/// Backend failures pass their own codes (`BEAT_xxx`) through unchanged.
pub mod error_codes {
    /// Config file could not be read or parsed
    pub const CONFIG: &str = "CLI_001";
    /// Unknown genre name
    pub const UNKNOWN_GENRE: &str = "CLI_002";
    /// Invalid tempo or duration
    pub const INVALID_REQUEST: &str = "CLI_003";
}

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g. "CLI_002", "BEAT_001")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Error category for backend errors
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl JsonError {
    /// Creates a new error with code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            category: None,
        }
    }

    /// Creates an error from a backend error, keeping its code and category.
    pub fn from_backend(err: &dyn BackendError) -> Self {
        Self {
            code: err.code().to_string(),
            message: err.message(),
            category: Some(err.category().to_string()),
        }
    }
}

/// Top-level JSON envelope.
#[derive(Debug, Clone, Serialize)]
pub struct CommandOutput<T> {
    /// Whether the command succeeded
    pub success: bool,
    /// Errors encountered
    pub errors: Vec<JsonError>,
    /// Command result (on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<T>,
}

impl<T: Serialize> CommandOutput<T> {
    /// A successful output.
    pub fn success(result: T) -> Self {
        Self {
            success: true,
            errors: Vec::new(),
            result: Some(result),
        }
    }

    /// A failed output.
    pub fn failure(errors: Vec<JsonError>) -> Self {
        Self {
            success: false,
            errors,
            result: None,
        }
    }

    /// Serialize and print to stdout.
    pub fn print(&self) -> anyhow::Result<()> {
        println!("{}", serde_json::to_string_pretty(self)?);
        Ok(())
    }
}

/// One genre in `genres --json`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct GenreInfo {
    /// Wire name
    pub name: String,
    /// Display label
    pub label: String,
    /// Preset tempo
    pub default_bpm: u32,
    /// Whether the genre has its own groove
    pub dedicated_pattern: bool,
    /// Whether the groove sits on a triplet grid
    pub triplet_feel: bool,
    /// Short description
    pub description: String,
    /// Instruments the arrangement usually carries
    pub instruments: Vec<String>,
}

/// One catalog voice in `kit --json`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct VoiceStatus {
    /// Manifest key
    pub name: String,
    /// Percussion identifier
    pub pitch: u8,
    /// Whether the sample file is present
    pub available: bool,
    /// Library-relative path, if listed in the manifest
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

/// Result of `kit --json`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct KitReport {
    /// Library directory inspected
    pub library: String,
    /// Number of voices with a sample on disk
    pub available: usize,
    /// Number of voices in the catalog
    pub total: usize,
    /// Per-voice status, in catalog order
    pub voices: Vec<VoiceStatus>,
}

/// Result of `midi --json`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MidiReport {
    /// Path written
    pub path: String,
    /// Genre rendered
    pub genre: String,
    /// Tempo used
    pub bpm: u32,
    /// Notes written
    pub notes: usize,
}
