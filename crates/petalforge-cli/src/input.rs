//! Parameter loading for CLI commands.
//!
//! Sources are layered in a fixed order, each overriding the previous one:
//! defaults, then a stored preset, then a JSON file, then a query string. The
//! merged set is clamped into its declared ranges.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use log::debug;
use petalforge_spec::ParameterSet;
use serde::Serialize;

use crate::presets::PresetStore;

/// Where a command's parameters come from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParamSource {
    pub preset: Option<String>,
    pub params_file: Option<PathBuf>,
    pub query: Option<String>,
}

impl ParamSource {
    pub fn is_empty(&self) -> bool {
        self.preset.is_none() && self.params_file.is_none() && self.query.is_none()
    }
}

/// One applied layer, for reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum Layer {
    Defaults,
    Preset(String),
    File(String),
    Query(String),
}

impl std::fmt::Display for Layer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Layer::Defaults => write!(f, "defaults"),
            Layer::Preset(name) => write!(f, "preset '{}'", name),
            Layer::File(path) => write!(f, "file {}", path),
            Layer::Query(_) => write!(f, "query string"),
        }
    }
}

/// A resolved parameter set with its provenance.
#[derive(Debug, Clone)]
pub struct LoadedParams {
    pub params: ParameterSet,
    pub layers: Vec<Layer>,
}

/// Resolves `source` against the store. The store is only opened when a
/// preset is requested.
pub fn load_params(source: &ParamSource, store_path: Option<&Path>) -> Result<LoadedParams> {
    let mut params = ParameterSet::default();
    let mut layers = vec![Layer::Defaults];

    if let Some(name) = &source.preset {
        let path = resolve_store_path(store_path)?;
        let store = PresetStore::open(&path)?;
        params = store.load(name)?.clone();
        layers.push(Layer::Preset(name.clone()));
    }

    if let Some(file) = &source.params_file {
        let text = fs::read_to_string(file)
            .with_context(|| format!("Failed to read parameter file {}", file.display()))?;
        params = overlay_json(&params, &text)
            .with_context(|| format!("Failed to parse parameter file {}", file.display()))?;
        layers.push(Layer::File(file.display().to_string()));
    }

    if let Some(query) = &source.query {
        params = params
            .with_query(query)
            .context("Failed to parse query string")?;
        layers.push(Layer::Query(query.clone()));
    }

    let params = params.clamped();
    debug!(
        "resolved parameters from {}",
        layers
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" <- ")
    );
    Ok(LoadedParams { params, layers })
}

/// Applies the fields present in a JSON object on top of `base`.
///
/// Missing fields keep `base`'s values; unknown fields are rejected.
pub fn overlay_json(base: &ParameterSet, json: &str) -> Result<ParameterSet> {
    let overlay: serde_json::Value = serde_json::from_str(json).context("Invalid JSON")?;
    let serde_json::Value::Object(fields) = overlay else {
        bail!("Parameter file must contain a JSON object");
    };
    let mut merged = base.to_value()?;
    if let serde_json::Value::Object(target) = &mut merged {
        for (key, value) in fields {
            target.insert(key, value);
        }
    }
    Ok(serde_json::from_value(merged)?)
}

/// The store path: the override if given, else the default location.
pub fn resolve_store_path(store_path: Option<&Path>) -> Result<PathBuf> {
    match store_path {
        Some(path) => Ok(path.to_path_buf()),
        None => PresetStore::default_path()
            .context("Failed to determine config directory for the preset store"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlay_keeps_base_fields() {
        let base = ParameterSet {
            num_petals: 9,
            ..Default::default()
        };
        let merged = overlay_json(&base, r#"{"numLayers": 3}"#).unwrap();
        assert_eq!(merged.num_petals, 9);
        assert_eq!(merged.num_layers, 3);
    }

    #[test]
    fn test_overlay_rejects_bad_input() {
        let base = ParameterSet::default();
        assert!(overlay_json(&base, "[1, 2]").is_err());
        assert!(overlay_json(&base, r#"{"glitter": 1}"#).is_err());
        assert!(overlay_json(&base, "{").is_err());
    }

    #[test]
    fn test_empty_source_is_defaults() {
        let loaded = load_params(&ParamSource::default(), None).unwrap();
        assert_eq!(loaded.params, ParameterSet::default());
        assert_eq!(loaded.layers, vec![Layer::Defaults]);
    }
}
