//! Test fixture utilities for creating synthetic sample libraries.

use std::path::{Path, PathBuf};
use tempfile::TempDir;

use beatkit_backend_beat::bank::{library_dir, Manifest};
use beatkit_backend_beat::SampleBank;

/// Output rate of fixture samples unless stated otherwise.
pub const FIXTURE_RATE: u32 = 44_100;

/// A temporary output root with a `sample_library/` and its manifest.
pub struct KitFixture {
    pub root: TempDir,
    manifest: Manifest,
}

impl KitFixture {
    /// Create an empty kit.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp dir");
        std::fs::create_dir_all(library_dir(root.path())).expect("Failed to create library dir");
        Self {
            root,
            manifest: Manifest::new(),
        }
    }

    /// A kit holding only a kick and a clap.
    pub fn kick_and_clap() -> Self {
        let mut kit = Self::new();
        kit.add_hit("kick", FIXTURE_RATE, 2_000, 0.5);
        kit.add_hit("clap", FIXTURE_RATE, 1_000, 0.25);
        kit
    }

    /// Output root path (the directory that holds `sample_library/`).
    pub fn path(&self) -> &Path {
        self.root.path()
    }

    /// Directory renders should be written to.
    pub fn out_dir(&self) -> PathBuf {
        self.root.path().join("renders")
    }

    /// Add a constant-level mono one-shot for a catalog voice and list it in the
    /// manifest.
    ///
    /// # Arguments
    /// * `voice` - Catalog voice name (the manifest key)
    /// * `sample_rate` - Rate the WAV is written at
    /// * `frames` - Length in frames
    /// * `level` - Amplitude in [-1.0, 1.0]
    pub fn add_hit(&mut self, voice: &str, sample_rate: u32, frames: usize, level: f32) -> PathBuf {
        let file = format!("{}.wav", voice);
        let path = library_dir(self.path()).join(&file);
        let spec = hound::WavSpec {
            channels: 1,
            sample_rate,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };
        let mut writer = hound::WavWriter::create(&path, spec).expect("Failed to create WAV");
        let value = (level * 32768.0).clamp(-32768.0, 32767.0) as i16;
        for _ in 0..frames {
            writer.write_sample(value).expect("Failed to write sample");
        }
        writer.finalize().expect("Failed to finalize WAV");

        self.manifest.insert(voice, file);
        self.manifest
            .save(self.path())
            .expect("Failed to save manifest");
        path
    }

    /// Load the kit the way the engine does.
    pub fn load_bank(&self) -> SampleBank {
        SampleBank::load(self.path())
    }
}

impl Default for KitFixture {
    fn default() -> Self {
        Self::new()
    }
}
