//! Named parameter sets persisted in a JSON file.
//!
//! The store is a single document:
//!
//! ```json
//! {"version": 1, "presets": {"name": { ...parameter set... }}}
//! ```
//!
//! Writes go to a sibling temp file first and are renamed into place, so a
//! crash never leaves a half-written store behind.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use petalforge_spec::ParameterSet;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Current store format version.
pub const STORE_VERSION: u32 = 1;

/// Longest accepted preset name.
pub const MAX_NAME_LEN: usize = 64;

/// Errors from the preset store.
#[derive(Debug, Error)]
pub enum PresetError {
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed preset store {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Unsupported preset store version {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },

    #[error("Invalid preset name '{0}': use 1-64 letters, digits, spaces, '_', '-' or '.'")]
    InvalidName(String),

    #[error("Preset '{0}' not found")]
    NotFound(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct StoreFile {
    version: u32,
    #[serde(default)]
    presets: BTreeMap<String, ParameterSet>,
}

impl Default for StoreFile {
    fn default() -> Self {
        Self {
            version: STORE_VERSION,
            presets: BTreeMap::new(),
        }
    }
}

/// A preset store bound to one file.
#[derive(Debug, Clone)]
pub struct PresetStore {
    path: PathBuf,
    file: StoreFile,
}

impl PresetStore {
    /// Default store location (`<config dir>/petalforge/presets.json`).
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("petalforge").join("presets.json"))
    }

    /// Opens the store at `path`. A missing file is an empty store.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, PresetError> {
        let path = path.into();
        let file = match fs::read_to_string(&path) {
            Ok(text) => {
                let file: StoreFile =
                    serde_json::from_str(&text).map_err(|source| PresetError::Parse {
                        path: path.clone(),
                        source,
                    })?;
                if file.version != STORE_VERSION {
                    return Err(PresetError::UnsupportedVersion {
                        found: file.version,
                        expected: STORE_VERSION,
                    });
                }
                file
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => StoreFile::default(),
            Err(source) => return Err(PresetError::Io { path, source }),
        };
        debug!(
            "opened preset store {} ({} presets)",
            path.display(),
            file.presets.len()
        );
        Ok(Self { path, file })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.file.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.file.presets.is_empty()
    }

    /// Preset names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.file.presets.keys().map(String::as_str)
    }

    pub fn get(&self, name: &str) -> Option<&ParameterSet> {
        self.file.presets.get(name)
    }

    /// Looks up `name`, failing with [`PresetError::NotFound`].
    pub fn load(&self, name: &str) -> Result<&ParameterSet, PresetError> {
        self.get(name)
            .ok_or_else(|| PresetError::NotFound(name.to_string()))
    }

    /// Stores `params` (clamped) under `name` and persists the store.
    ///
    /// Returns `true` if an existing preset was replaced.
    pub fn save(&mut self, name: &str, params: &ParameterSet) -> Result<bool, PresetError> {
        validate_name(name)?;
        let replaced = self
            .file
            .presets
            .insert(name.to_string(), params.clamped())
            .is_some();
        self.persist()?;
        Ok(replaced)
    }

    /// Removes `name` and persists the store. Returns `false` if it was absent.
    pub fn delete(&mut self, name: &str) -> Result<bool, PresetError> {
        if self.file.presets.remove(name).is_none() {
            return Ok(false);
        }
        self.persist()?;
        Ok(true)
    }

    fn persist(&self) -> Result<(), PresetError> {
        let io_err = |source| PresetError::Io {
            path: self.path.clone(),
            source,
        };
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(io_err)?;
            }
        }
        let body = serde_json::to_string_pretty(&self.file).map_err(|source| {
            PresetError::Parse {
                path: self.path.clone(),
                source,
            }
        })?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, body).map_err(io_err)?;
        fs::rename(&tmp, &self.path).map_err(io_err)?;
        debug!(
            "saved preset store {} ({} presets)",
            self.path.display(),
            self.file.presets.len()
        );
        Ok(())
    }
}

/// Checks a preset name: 1 to 64 chars of `[A-Za-z0-9 _.-]`, not blank.
pub fn validate_name(name: &str) -> Result<(), PresetError> {
    let valid = !name.is_empty()
        && name.len() <= MAX_NAME_LEN
        && !name.trim().is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, ' ' | '_' | '-' | '.'));
    if valid {
        Ok(())
    } else {
        Err(PresetError::InvalidName(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_name() {
        assert!(validate_name("Sunrise 2").is_ok());
        assert!(validate_name("a.b-c_d").is_ok());
        assert!(validate_name(&"x".repeat(64)).is_ok());
        assert!(validate_name("").is_err());
        assert!(validate_name("   ").is_err());
        assert!(validate_name(&"x".repeat(65)).is_err());
        assert!(validate_name("a/b").is_err());
        assert!(validate_name("ros\u{e9}").is_err());
    }

    #[test]
    fn test_missing_file_is_empty_store() {
        let dir = tempfile::tempdir().unwrap();
        let store = PresetStore::open(dir.path().join("nope.json")).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_default_path_ends_with_store_name() {
        if let Some(path) = PresetStore::default_path() {
            assert!(path.ends_with("petalforge/presets.json"));
        }
    }
}
