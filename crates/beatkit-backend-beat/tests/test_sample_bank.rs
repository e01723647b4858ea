//! Integration tests for loading a sample library from disk and rendering
//! against it.

use std::path::Path;

use beatkit_backend_beat::bank::{library_dir, Manifest, SampleBank};
use beatkit_backend_beat::render_beat;
use beatkit_spec::catalog::gm;
use beatkit_spec::{Genre, RenderConfig, RenderRequest, CATALOG};
use pretty_assertions::assert_eq;

// =============================================================================
// Helper Functions
// =============================================================================

/// Write a short constant-level mono WAV.
fn write_hit(path: &Path, sample_rate: u32, frames: usize, level: i16) {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut writer = hound::WavWriter::create(path, spec).unwrap();
    for _ in 0..frames {
        writer.write_sample(level).unwrap();
    }
    writer.finalize().unwrap();
}

/// Lay out a library with a kick and a clap under `root`.
fn write_library(root: &Path) -> Manifest {
    let dir = library_dir(root);
    std::fs::create_dir_all(&dir).unwrap();
    write_hit(&dir.join("kick.wav"), 44100, 4000, 16384);
    write_hit(&dir.join("clap.wav"), 44100, 2000, 8192);

    let mut manifest = Manifest::new();
    manifest.insert("kick", "kick.wav");
    manifest.insert("clap", "clap.wav");
    manifest.save(root).unwrap();
    manifest
}

// =============================================================================
// Loading
// =============================================================================

#[test]
fn test_load_from_manifest() {
    let root = tempfile::tempdir().unwrap();
    let manifest = write_library(root.path());

    let bank = SampleBank::load(root.path());
    assert_eq!(bank.len(), 2);
    assert_eq!(bank.pitches().collect::<Vec<_>>(), vec![gm::KICK, gm::CLAP]);
    assert_eq!(bank.get(gm::KICK).unwrap().frames(), 4000);

    assert_eq!(manifest.count_available(root.path()), 2);
    assert_eq!(
        manifest.missing_samples(root.path()).len(),
        CATALOG.len() - 2
    );
    assert!(!manifest.is_complete(root.path()));
}

#[test]
fn test_listed_but_missing_file_is_skipped() {
    let root = tempfile::tempdir().unwrap();
    let mut manifest = write_library(root.path());
    manifest.insert("snare", "snare.wav");
    manifest.save(root.path()).unwrap();

    let bank = SampleBank::load(root.path());
    assert_eq!(bank.len(), 2);
    assert!(bank.get(gm::SNARE).is_none());
}

#[test]
fn test_undecodable_file_is_skipped() {
    let root = tempfile::tempdir().unwrap();
    let mut manifest = write_library(root.path());
    std::fs::write(library_dir(root.path()).join("cowbell.wav"), b"not a wav").unwrap();
    manifest.insert("cowbell", "cowbell.wav");
    manifest.save(root.path()).unwrap();

    let bank = SampleBank::load(root.path());
    assert_eq!(bank.len(), 2);
    assert!(bank.get(gm::COWBELL).is_none());
}

#[test]
fn test_no_library_gives_empty_bank() {
    let root = tempfile::tempdir().unwrap();
    let bank = SampleBank::load(root.path());
    assert!(!bank.is_loaded());
}

// =============================================================================
// Rendering
// =============================================================================

#[test]
fn test_render_from_disk_library() {
    let root = tempfile::tempdir().unwrap();
    write_library(root.path());
    let bank = SampleBank::load(root.path());

    let out = root.path().join("renders");
    let request = RenderRequest::new(Genre::AfroHouse, 124, 8.0);
    let output = render_beat(&bank, &request, &RenderConfig::default(), &out).unwrap();

    assert_eq!(output.frames, 352_800);
    assert_eq!(output.samples_mixed, 24);

    let mut reader = hound::WavReader::open(&output.wav_path).unwrap();
    assert_eq!(reader.spec().channels, 2);
    assert_eq!(reader.duration(), 352_800);

    // the first downbeat carries the kick at half scale
    let first: Vec<i16> = reader
        .samples::<i16>()
        .take(2)
        .map(|s| s.unwrap())
        .collect();
    assert!(first.iter().all(|&s| s > 10_000), "{first:?}");
}
