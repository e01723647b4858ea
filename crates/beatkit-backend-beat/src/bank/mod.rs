//! Sample bank: decoded percussion samples indexed by percussion identifier.
//!
//! The bank is filled once from the sample library and is read-only after
//! that, so one bank can be shared by any number of concurrent renders.

pub mod decode;
pub mod manifest;

use std::collections::BTreeMap;
use std::path::Path;

use beatkit_spec::CATALOG;
use tracing::{debug, info, instrument, warn};

pub use decode::{decode_sample, DecodeError, DecodedSample};
pub use manifest::{library_dir, manifest_path, Manifest};

/// Decoded samples keyed by percussion identifier.
#[derive(Debug, Clone, Default)]
pub struct SampleBank {
    samples: BTreeMap<u8, DecodedSample>,
}

impl SampleBank {
    /// A bank with no samples.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Load every available catalog voice from the library under `root`.
    #[instrument(skip_all, fields(root = %root.display()))]
    pub fn load(root: &Path) -> Self {
        let manifest = Manifest::load(root);
        Self::load_from(&manifest, &library_dir(root))
    }

    /// Load every catalog voice listed in `manifest`, resolving paths against
    /// `library_dir`.
    ///
    /// Voices that are unlisted, whose file is missing, or that fail to decode
    /// are skipped.
    pub fn load_from(manifest: &Manifest, library_dir: &Path) -> Self {
        let mut bank = Self::empty();

        for voice in CATALOG.iter() {
            let Some(rel) = manifest.get(voice.name) else {
                continue;
            };
            let path = library_dir.join(rel);
            if !path.is_file() {
                debug!(voice = voice.name, path = %path.display(), "sample file missing");
                continue;
            }
            match decode_sample(&path) {
                Ok(sample) => {
                    debug!(
                        voice = voice.name,
                        pitch = voice.pitch,
                        frames = sample.frames(),
                        sample_rate = sample.sample_rate(),
                        "decoded sample"
                    );
                    bank.insert(voice.pitch, sample);
                }
                Err(e) => {
                    warn!(voice = voice.name, path = %path.display(), error = %e, "skipping sample");
                }
            }
        }

        info!(
            loaded = bank.len(),
            catalog = CATALOG.len(),
            "sample bank loaded"
        );
        bank
    }

    /// Add or replace the sample for a percussion identifier.
    pub fn insert(&mut self, pitch: u8, sample: DecodedSample) {
        self.samples.insert(pitch, sample);
    }

    /// Sample for a percussion identifier.
    pub fn get(&self, pitch: u8) -> Option<&DecodedSample> {
        self.samples.get(&pitch)
    }

    /// Number of loaded samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether no samples are loaded.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Whether at least one sample is loaded.
    pub fn is_loaded(&self) -> bool {
        !self.is_empty()
    }

    /// Loaded percussion identifiers in ascending order.
    pub fn pitches(&self) -> impl Iterator<Item = u8> + '_ {
        self.samples.keys().copied()
    }
}
