//! Inspect command implementation
//!
//! Summarizes what a parameter set generates without writing any files.

use std::path::Path;
use std::process::ExitCode;

use anyhow::Result;
use colored::Colorize;
use petalforge_backend_vector::{build_paths, generate_curves, render_svg, CurveKind};
use petalforge_spec::{canonical_params_hash, short_hash, ParameterSet};
use serde::Serialize;

use super::json_output::{print_json, CommandOutput, JsonError};
use crate::input::{load_params, Layer, ParamSource};

/// Generation statistics for one parameter set.
#[derive(Debug, Clone, Serialize)]
pub struct InspectReport {
    pub params_hash: String,
    pub query: String,
    pub sources: Vec<Layer>,
    pub size: f64,
    pub curves: usize,
    pub petal_curves: usize,
    pub inner_curves: usize,
    pub points: usize,
    pub path_commands: usize,
    pub svg_bytes: usize,
    pub params: ParameterSet,
}

/// Run the inspect command.
pub fn run(source: &ParamSource, store: Option<&Path>, size: f64, json: bool) -> Result<ExitCode> {
    let report = inspect(source, store, size);

    if json {
        let output = match report {
            Ok(r) => CommandOutput::success(r),
            Err(e) => CommandOutput::failure(vec![JsonError::from_anyhow(&e)]),
        };
        print_json(&output)?;
        return Ok(if output.success {
            ExitCode::SUCCESS
        } else {
            ExitCode::from(1)
        });
    }

    let r = report?;
    println!("{} {}", "Params hash:".cyan().bold(), short_hash(&r.params_hash));
    println!(
        "{} {}",
        "Sources:".dimmed(),
        r.sources
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" <- ")
    );
    println!("{} {}", "Query:".dimmed(), r.query);
    println!(
        "{} {} ({} petal, {} inner)",
        "Curves:".cyan().bold(),
        r.curves,
        r.petal_curves,
        r.inner_curves
    );
    println!("{} {}", "Points:".dimmed(), r.points);
    println!("{} {}", "Path commands:".dimmed(), r.path_commands);
    println!("{} {} bytes at size {}", "SVG:".dimmed(), r.svg_bytes, r.size);
    Ok(ExitCode::SUCCESS)
}

/// Builds the report for `source` at canvas `size`.
pub fn inspect(source: &ParamSource, store: Option<&Path>, size: f64) -> Result<InspectReport> {
    let loaded = load_params(source, store)?;
    let params = loaded.params;
    let curves = generate_curves(&params, size);
    let paths = build_paths(&curves);
    let petal_curves = curves.iter().filter(|c| c.kind == CurveKind::Petal).count();

    Ok(InspectReport {
        params_hash: canonical_params_hash(&params)?,
        query: params.to_query(),
        sources: loaded.layers,
        size,
        curves: curves.len(),
        petal_curves,
        inner_curves: curves.len() - petal_curves,
        points: curves.iter().map(|c| c.len()).sum(),
        path_commands: paths.iter().map(|p| p.len()).sum(),
        svg_bytes: render_svg(&paths, &curves, &params, size).len(),
        params,
    })
}
