//! Defaults command: prints the default parameter set and declared ranges.

use std::process::ExitCode;

use anyhow::Result;
use colored::Colorize;
use petalforge_spec::{ParamKind, ParameterSet, PARAM_BOUNDS};
use serde::Serialize;

use super::json_output::{print_json, CommandOutput};

#[derive(Debug, Clone, Serialize)]
pub struct BoundInfo {
    pub key: &'static str,
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    pub default: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct DefaultsResult {
    pub defaults: ParameterSet,
    pub bounds: Vec<BoundInfo>,
}

/// Collects the defaults with each parameter's range.
pub fn defaults() -> DefaultsResult {
    let defaults = ParameterSet::default();
    let values = defaults.to_pairs();
    let bounds = PARAM_BOUNDS
        .iter()
        .map(|b| {
            let default = values
                .iter()
                .find(|(k, _)| *k == b.key)
                .map(|(_, v)| v.clone())
                .unwrap_or_default();
            let (kind, range) = match b.kind {
                ParamKind::Float => ("float", true),
                ParamKind::Integer => ("integer", true),
                ParamKind::Color => ("color", false),
            };
            BoundInfo {
                key: b.key,
                kind,
                min: range.then_some(b.min),
                max: range.then_some(b.max),
                default,
            }
        })
        .collect();
    DefaultsResult { defaults, bounds }
}

/// Run the defaults command.
pub fn run(json: bool) -> Result<ExitCode> {
    let result = defaults();
    if json {
        print_json(&CommandOutput::success(result))?;
        return Ok(ExitCode::SUCCESS);
    }

    println!("{}", "Parameters:".cyan().bold());
    for b in &result.bounds {
        match (b.min, b.max) {
            (Some(min), Some(max)) => println!(
                "  {:<24} {:>10}  {}",
                b.key,
                b.default,
                format!("[{}, {}]", trim_float(min), trim_float(max)).dimmed()
            ),
            _ => println!("  {:<24} {:>10}  {}", b.key, b.default, b.kind.dimmed()),
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn trim_float(v: f64) -> String {
    if v.fract() == 0.0 {
        format!("{}", v as i64)
    } else {
        format!("{:.4}", v)
    }
}
