//! CLI command implementations

pub mod genres;
pub mod json_output;
pub mod kit;
pub mod midi;
pub mod render;

use std::path::Path;

use beatkit_spec::{Genre, RenderConfig, RenderRequest, SpecError};

use json_output::{error_codes, JsonError};

/// A validated request with the config it renders under.
#[derive(Debug, Clone)]
pub struct Prepared {
    pub request: RenderRequest,
    pub config: RenderConfig,
}

/// Parse and validate the shared render arguments.
///
/// `bpm` falls back to the genre preset. Errors carry a stable code so the
/// JSON and human paths report the same thing.
pub fn prepare(
    genre: &str,
    bpm: Option<u32>,
    duration: f64,
    config_path: Option<&str>,
) -> Result<Prepared, JsonError> {
    let genre: Genre = genre
        .parse()
        .map_err(|e: SpecError| JsonError::new(error_codes::UNKNOWN_GENRE, e.to_string()))?;

    let bpm = bpm.unwrap_or_else(|| genre.default_bpm());
    let request = RenderRequest::new(genre, bpm, duration);
    request
        .validate()
        .map_err(|e| JsonError::new(error_codes::INVALID_REQUEST, e.to_string()))?;

    let config = match config_path {
        Some(path) => RenderConfig::from_json_file(Path::new(path)).map_err(|e| {
            JsonError::new(
                error_codes::CONFIG,
                format!("failed to load config {}: {}", path, e),
            )
        })?,
        None => RenderConfig::default(),
    };

    Ok(Prepared { request, config })
}
