//! Beatkit End-to-End Test Infrastructure
//!
//! This crate provides integration tests for the full render path:
//!
//! - Rendering: request + sample kit -> WAV and MIDI files
//! - Export: MIDI without samples, read back and checked against the generator
//! - **Determinism**: byte-identical output across runs and threads
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p beatkit-tests
//! ```
//!
//! ## Fixtures
//!
//! [`fixtures::KitFixture`] lays out a throwaway sample library of synthetic
//! one-shot WAVs so tests never depend on recorded samples:
//!
//! ```rust,ignore
//! use beatkit_tests::fixtures::KitFixture;
//!
//! let kit = KitFixture::kick_and_clap();
//! let bank = kit.load_bank();
//! ```

pub mod audio_analysis;
pub mod determinism;
pub mod fixtures;

// Re-export commonly used items
pub use determinism::{compute_hash, verify_determinism, DeterminismResult};
pub use fixtures::KitFixture;
