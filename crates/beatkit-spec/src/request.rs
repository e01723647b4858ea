//! Render requests and engine configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::SpecError;
use crate::genre::Genre;
use crate::hash::is_valid_render_id;

/// Lowest accepted tempo.
pub const MIN_BPM: u32 = 1;
/// Highest accepted tempo.
pub const MAX_BPM: u32 = 999;
/// Longest accepted render.
///
/// Keeps bar ticks inside `u32` at [`MAX_BPM`] and the WAV `data` chunk under
/// 4 GiB at [`MAX_SAMPLE_RATE`].
pub const MAX_DURATION_SECONDS: f64 = 3600.0;

/// Output sample rate used unless configured otherwise.
pub const DEFAULT_SAMPLE_RATE: u32 = 44_100;
/// Peak ceiling applied when a mix clips.
pub const DEFAULT_NORMALIZE_CEILING: f32 = 0.95;
/// Highest accepted output sample rate.
pub const MAX_SAMPLE_RATE: u32 = 192_000;

/// What to render: genre, tempo and length.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RenderRequest {
    /// Genre whose pattern is sequenced.
    pub genre: Genre,
    /// Tempo in beats per minute.
    pub bpm: u32,
    /// Target length in seconds.
    pub duration_seconds: f64,
}

impl RenderRequest {
    /// Creates a request.
    pub fn new(genre: Genre, bpm: u32, duration_seconds: f64) -> Self {
        Self {
            genre,
            bpm,
            duration_seconds,
        }
    }

    /// Creates a request at the genre's preset tempo.
    pub fn with_default_bpm(genre: Genre, duration_seconds: f64) -> Self {
        Self::new(genre, genre.default_bpm(), duration_seconds)
    }

    /// Checks tempo and duration.
    pub fn validate(&self) -> Result<(), SpecError> {
        if !(MIN_BPM..=MAX_BPM).contains(&self.bpm) {
            return Err(SpecError::InvalidBpm {
                bpm: self.bpm,
                min: MIN_BPM,
                max: MAX_BPM,
            });
        }
        if !self.duration_seconds.is_finite()
            || self.duration_seconds <= 0.0
            || self.duration_seconds > MAX_DURATION_SECONDS
        {
            return Err(SpecError::InvalidDuration(self.duration_seconds));
        }
        Ok(())
    }
}

/// Engine settings that are not part of an individual request.
///
/// Every field has a default, so a config file only needs the keys it changes:
///
/// ```json
/// { "track_name": "Late Set", "sample_rate": 48000 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    /// Output sample rate in Hz.
    pub sample_rate: u32,
    /// Peak level a clipping mix is scaled down to.
    pub normalize_ceiling: f32,
    /// Name written into the MIDI track-name event.
    pub track_name: String,
    /// Prefix of generated render identifiers.
    pub id_prefix: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            sample_rate: DEFAULT_SAMPLE_RATE,
            normalize_ceiling: DEFAULT_NORMALIZE_CEILING,
            track_name: "Beatkit Afro Percussion".to_string(),
            id_prefix: "offline".to_string(),
        }
    }
}

impl RenderConfig {
    /// Parses a config from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, SpecError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks sample rate, normalization ceiling and id prefix.
    ///
    /// The prefix becomes part of output file names, so it is held to the
    /// same character set as a render identifier.
    pub fn validate(&self) -> Result<(), SpecError> {
        if self.sample_rate == 0 || self.sample_rate > MAX_SAMPLE_RATE {
            return Err(SpecError::InvalidConfig(format!(
                "sample_rate must be in 1..={}, got {}",
                MAX_SAMPLE_RATE, self.sample_rate
            )));
        }
        if !(self.normalize_ceiling > 0.0 && self.normalize_ceiling <= 1.0) {
            return Err(SpecError::InvalidConfig(format!(
                "normalize_ceiling must be in (0, 1], got {}",
                self.normalize_ceiling
            )));
        }
        if !is_valid_render_id(&self.id_prefix) {
            return Err(SpecError::InvalidConfig(format!(
                "id_prefix may only contain ASCII letters, digits, '_' and '-', got {:?}",
                self.id_prefix
            )));
        }
        Ok(())
    }

    /// Loads a config from a JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self, SpecError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }
}
