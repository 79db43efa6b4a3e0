//! Preset command implementations: save, load, list and delete named
//! parameter sets.

use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use colored::Colorize;
use petalforge_spec::{canonical_params_hash, short_hash, ParameterSet};
use serde::Serialize;

use super::json_output::{print_json, CommandOutput, JsonError};
use crate::input::{load_params, resolve_store_path, ParamSource};
use crate::presets::PresetStore;

/// One stored preset, as listed.
#[derive(Debug, Clone, Serialize)]
pub struct PresetEntry {
    pub name: String,
    pub hash: String,
}

/// Outcome of a preset command.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum PresetResult {
    Saved {
        name: String,
        replaced: bool,
        hash: String,
        store: String,
    },
    Loaded {
        name: String,
        params: ParameterSet,
        query: String,
    },
    Listed {
        store: String,
        presets: Vec<PresetEntry>,
    },
    Deleted {
        name: String,
        existed: bool,
    },
}

/// Stores the parameters from `source` under `name`.
pub fn save(
    store: Option<&Path>,
    name: &str,
    source: &ParamSource,
    json: bool,
) -> Result<ExitCode> {
    report(json, || {
        let params = load_params(source, store)?.params;
        let mut presets = open_store(store)?;
        let replaced = presets
            .save(name, &params)
            .with_context(|| format!("Failed to save preset '{}'", name))?;
        Ok(PresetResult::Saved {
            name: name.to_string(),
            replaced,
            hash: canonical_params_hash(&params)?,
            store: presets.path().display().to_string(),
        })
    })
}

/// Prints preset `name`, as JSON or (with `as_query`) as a query string.
pub fn load(store: Option<&Path>, name: &str, as_query: bool, json: bool) -> Result<ExitCode> {
    if as_query && !json {
        let presets = open_store(store)?;
        println!("{}", presets.load(name)?.to_query());
        return Ok(ExitCode::SUCCESS);
    }
    report(json, || {
        let presets = open_store(store)?;
        let params = presets.load(name)?.clone();
        Ok(PresetResult::Loaded {
            name: name.to_string(),
            query: params.to_query(),
            params,
        })
    })
}

/// Lists stored presets with their short hashes.
pub fn list(store: Option<&Path>, json: bool) -> Result<ExitCode> {
    report(json, || {
        let presets = open_store(store)?;
        let entries = presets
            .names()
            .map(|name| -> Result<PresetEntry> {
                let params = presets.load(name)?;
                Ok(PresetEntry {
                    name: name.to_string(),
                    hash: canonical_params_hash(params)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(PresetResult::Listed {
            store: presets.path().display().to_string(),
            presets: entries,
        })
    })
}

/// Removes preset `name`. Deleting a missing preset is not an error.
pub fn delete(store: Option<&Path>, name: &str, json: bool) -> Result<ExitCode> {
    report(json, || {
        let mut presets = open_store(store)?;
        let existed = presets
            .delete(name)
            .with_context(|| format!("Failed to delete preset '{}'", name))?;
        Ok(PresetResult::Deleted {
            name: name.to_string(),
            existed,
        })
    })
}

fn open_store(store: Option<&Path>) -> Result<PresetStore> {
    let path = resolve_store_path(store)?;
    Ok(PresetStore::open(path)?)
}

fn report(json: bool, action: impl FnOnce() -> Result<PresetResult>) -> Result<ExitCode> {
    if json {
        let output = match action() {
            Ok(result) => CommandOutput::success(result),
            Err(e) => CommandOutput::failure(vec![JsonError::from_anyhow(&e)]),
        };
        print_json(&output)?;
        return Ok(if output.success {
            ExitCode::SUCCESS
        } else {
            ExitCode::from(1)
        });
    }

    match action()? {
        PresetResult::Saved {
            name,
            replaced,
            hash,
            store,
        } => {
            let verb = if replaced { "Replaced" } else { "Saved" };
            println!(
                "{} preset '{}' ({}) in {}",
                verb.green().bold(),
                name,
                short_hash(&hash),
                store
            );
        }
        PresetResult::Loaded { params, .. } => {
            println!("{}", params.to_json_pretty()?);
        }
        PresetResult::Listed { store, presets } => {
            println!("{} {}", "Store:".cyan().bold(), store);
            if presets.is_empty() {
                println!("  {}", "(no presets)".dimmed());
            }
            for entry in presets {
                println!("  {}  {}", short_hash(&entry.hash).dimmed(), entry.name);
            }
        }
        PresetResult::Deleted { name, existed } => {
            if existed {
                println!("{} preset '{}'", "Deleted".green().bold(), name);
            } else {
                println!("{} no preset named '{}'", "WARNING".yellow().bold(), name);
            }
        }
    }
    Ok(ExitCode::SUCCESS)
}
