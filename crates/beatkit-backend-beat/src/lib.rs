//! Beatkit Beat Backend - Deterministic Percussion Sequencing and Mixdown
//!
//! This crate turns a [`RenderRequest`](beatkit_spec::RenderRequest) into a
//! percussion groove: a tick-level note sequence from the genre's bar pattern,
//! a Standard MIDI File of that sequence, and a 16-bit stereo WAV mixed from
//! recorded samples.
//!
//! # Features
//!
//! - **Pattern Library**: One-bar generators for African and diaspora genres,
//!   with a generic fallback groove for the rest
//! - **MIDI Export**: Format 0 files on the General MIDI percussion channel
//! - **Sample Bank**: MP3 and WAV samples decoded once and shared read-only
//! - **Mixdown**: Velocity-scaled placement, peak normalization, WAV output
//!
//! # Determinism
//!
//! Sequences carry no randomness. The same request and the same sample bank
//! always produce byte-identical WAV and MIDI files, and render identifiers are
//! derived from a BLAKE3 hash of the WAV bytes.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use beatkit_backend_beat::{render_beat, SampleBank};
//! use beatkit_spec::{Genre, RenderConfig, RenderRequest};
//!
//! let bank = SampleBank::load(Path::new("."));
//! let request = RenderRequest::new(Genre::AfroHouse, 124, 8.0);
//! let output = render_beat(&bank, &request, &RenderConfig::default(), Path::new("out"))?;
//! println!("{} -> {}", output.id, output.wav_path.display());
//! # Ok::<(), beatkit_backend_beat::BeatError>(())
//! ```
//!
//! # Module Structure
//!
//! - [`pattern`]: Per-genre bar generators and sequence building
//! - [`midi`]: Standard MIDI File writer and reader
//! - [`bank`]: Sample decoding, the library manifest, and the sample bank
//! - [`mixdown`]: Mix buffer, normalization, and WAV encoding
//! - [`render`]: Main render entry point

pub mod bank;
pub mod error;
pub mod midi;
pub mod mixdown;
pub mod pattern;
pub mod render;

// Re-export main types
pub use bank::{DecodedSample, Manifest, SampleBank};
pub use error::{BeatError, BeatResult};
pub use midi::{read_midi, write_drum_midi, MidiError, MidiWriter};
pub use mixdown::{encode_wav, mix_notes};
pub use pattern::{build_sequence, default_pattern, has_dedicated_pattern, pattern_for};
pub use render::{render_beat, render_midi_bytes, render_wav_bytes, RenderOutput};

/// Crate version for backend identification.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Backend identifier for logs and reports.
pub const BACKEND_ID: &str = "beatkit-backend-beat";
