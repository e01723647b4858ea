//! Sample-library manifest.
//!
//! The library lives under `<root>/sample_library/`. Its `manifest.json` maps
//! catalog voice names to file paths relative to that directory:
//!
//! ```json
//! { "kick": "kick.mp3", "clap": "hand/clap.wav" }
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use beatkit_spec::CATALOG;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{BeatError, BeatResult};

/// Directory name of the sample library under the output root.
pub const LIBRARY_DIR: &str = "sample_library";
/// File name of the manifest inside the library directory.
pub const MANIFEST_FILE: &str = "manifest.json";

/// Sample library directory for an output root.
pub fn library_dir(root: &Path) -> PathBuf {
    root.join(LIBRARY_DIR)
}

/// Manifest file path for an output root.
pub fn manifest_path(root: &Path) -> PathBuf {
    library_dir(root).join(MANIFEST_FILE)
}

/// Mapping from voice name to library-relative file path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Manifest {
    entries: BTreeMap<String, String>,
}

impl Manifest {
    /// Create an empty manifest.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the manifest under `root`.
    ///
    /// A missing or unparseable manifest loads as empty.
    pub fn load(root: &Path) -> Self {
        let path = manifest_path(root);
        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(_) => return Self::default(),
        };
        match serde_json::from_str(&content) {
            Ok(manifest) => manifest,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "ignoring unreadable manifest");
                Self::default()
            }
        }
    }

    /// Write the manifest under `root`, creating the library directory.
    pub fn save(&self, root: &Path) -> BeatResult<()> {
        let dir = library_dir(root);
        std::fs::create_dir_all(&dir).map_err(|e| BeatError::io(&dir, e))?;

        let path = manifest_path(root);
        let json = serde_json::to_string_pretty(self).map_err(|source| BeatError::Manifest {
            path: path.clone(),
            source,
        })?;
        std::fs::write(&path, json).map_err(|e| BeatError::io(&path, e))
    }

    /// Add or replace an entry.
    pub fn insert(&mut self, name: impl Into<String>, relative_path: impl Into<String>) {
        self.entries.insert(name.into(), relative_path.into());
    }

    /// Library-relative path recorded for `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the manifest has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Absolute path of `name`'s file, if the manifest lists it.
    pub fn resolve(&self, root: &Path, name: &str) -> Option<PathBuf> {
        self.get(name).map(|rel| library_dir(root).join(rel))
    }

    /// Whether `name` is listed and its file exists.
    pub fn sample_exists(&self, root: &Path, name: &str) -> bool {
        self.resolve(root, name).is_some_and(|p| p.is_file())
    }

    /// Catalog voices that are unlisted or whose file is missing, in catalog order.
    pub fn missing_samples(&self, root: &Path) -> Vec<&'static str> {
        CATALOG
            .iter()
            .filter(|v| !self.sample_exists(root, v.name))
            .map(|v| v.name)
            .collect()
    }

    /// Whether every catalog voice is available.
    pub fn is_complete(&self, root: &Path) -> bool {
        CATALOG.iter().all(|v| self.sample_exists(root, v.name))
    }

    /// Number of catalog voices that are available.
    pub fn count_available(&self, root: &Path) -> usize {
        CATALOG.len() - self.missing_samples(root).len()
    }
}
