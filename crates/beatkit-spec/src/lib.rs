//! Beatkit Canonical Types
//!
//! This crate provides the shared vocabulary of the Beatkit percussion engine:
//! the genre list and its presets, the tick-based timing model, note events,
//! the percussion voice catalog, and render requests.
//!
//! # Example
//!
//! ```
//! use beatkit_spec::{Genre, RenderRequest};
//! use beatkit_spec::timing::total_bars;
//!
//! let request = RenderRequest::new(Genre::AfroHouse, 124, 8.0);
//! assert!(request.validate().is_ok());
//! assert_eq!(total_bars(request.bpm, request.duration_seconds), 4);
//! ```
//!
//! # Modules
//!
//! - [`catalog`]: Percussion voices and General MIDI percussion constants
//! - [`error`]: Error types and the backend error trait
//! - [`genre`]: Genre enumeration and presets
//! - [`hash`]: Stable render identifiers
//! - [`note`]: Note events
//! - [`request`]: Render requests and render configuration
//! - [`timing`]: Ticks, bars, and grid helpers

pub mod catalog;
pub mod error;
pub mod genre;
pub mod hash;
pub mod note;
pub mod request;
pub mod timing;

// Re-export commonly used types at the crate root
pub use catalog::{voice_by_name, voice_by_pitch, PercussionVoice, CATALOG};
pub use error::{BackendError, SpecError};
pub use genre::Genre;
pub use hash::{content_hash, render_id};
pub use note::{sort_by_tick, NoteEvent};
pub use request::{
    RenderConfig, RenderRequest, MAX_BPM, MAX_DURATION_SECONDS, MAX_SAMPLE_RATE, MIN_BPM,
};
pub use timing::TICKS_PER_QUARTER;
