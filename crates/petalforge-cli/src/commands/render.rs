//! Render command implementation
//!
//! Renders the settled logo for a parameter set to an SVG or PNG file.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use colored::Colorize;
use petalforge_backend_vector::{build_paths, export, generate_curves, ExportFormat, Frame};
use petalforge_spec::{canonical_params_hash, short_hash};
use serde::Serialize;

use super::json_output::{print_json, CommandOutput, JsonError};
use crate::input::{load_params, ParamSource};

/// Render command options.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub source: ParamSource,
    pub store: Option<PathBuf>,
    pub size: f64,
    pub scale: f64,
    pub output: PathBuf,
    pub json: bool,
}

/// Result of a successful render.
#[derive(Debug, Clone, Serialize)]
pub struct RenderResult {
    pub output: String,
    pub format: String,
    pub size: f64,
    pub scale: f64,
    pub bytes: u64,
    pub curves: usize,
    pub params_hash: String,
}

/// Run the render command.
///
/// # Returns
/// Exit code: 0 on success, 1 if parameters could not be loaded or export failed
pub fn run(opts: &RenderOptions) -> Result<ExitCode> {
    if opts.json {
        let output = match render(opts) {
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

    let result = render(opts)?;
    println!(
        "{} {} ({}, {} curves, {} bytes)",
        "Rendered".green().bold(),
        result.output,
        result.format,
        result.curves,
        result.bytes
    );
    println!(
        "{} {}",
        "Params hash:".dimmed(),
        short_hash(&result.params_hash)
    );
    Ok(ExitCode::SUCCESS)
}

/// Loads parameters, renders and writes the output file.
pub fn render(opts: &RenderOptions) -> Result<RenderResult> {
    let format = output_format(&opts.output)?;
    let loaded = load_params(&opts.source, opts.store.as_deref())?;
    let params = loaded.params;

    let curves = generate_curves(&params, opts.size);
    let paths = build_paths(&curves);
    let frame = Frame {
        paths: &paths,
        curves: &curves,
        params: &params,
        size: opts.size,
    };
    let bytes = export(&frame, format, opts.scale, &opts.output)
        .with_context(|| format!("Failed to export {}", opts.output.display()))?;

    Ok(RenderResult {
        output: opts.output.display().to_string(),
        format: format.extension().to_string(),
        size: opts.size,
        scale: opts.scale,
        bytes,
        curves: curves.len(),
        params_hash: canonical_params_hash(&params)?,
    })
}

/// Export format from the output file's extension.
pub fn output_format(output: &Path) -> Result<ExportFormat> {
    ExportFormat::from_path(output).ok_or_else(|| {
        anyhow::Error::new(UnknownFormat(output.display().to_string()))
    })
}

/// Raised when the output extension is neither `.svg` nor `.png`.
#[derive(Debug, thiserror::Error)]
#[error("Unknown output format for '{0}' (expected .svg or .png)")]
pub struct UnknownFormat(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    fn opts(output: PathBuf) -> RenderOptions {
        RenderOptions {
            source: ParamSource {
                query: Some("numPetals=3&numLayers=2".into()),
                ..Default::default()
            },
            store: None,
            size: 64.0,
            scale: 1.0,
            output,
            json: false,
        }
    }

    #[test]
    fn test_render_svg_and_png() {
        let dir = tempfile::tempdir().unwrap();
        let svg = render(&opts(dir.path().join("logo.svg"))).unwrap();
        assert_eq!(svg.format, "svg");
        assert_eq!(svg.curves, 6);
        assert!(dir.path().join("logo.svg").exists());

        let png = render(&opts(dir.path().join("logo.png"))).unwrap();
        assert_eq!(png.format, "png");
        assert_eq!(png.params_hash, svg.params_hash);
    }

    #[test]
    fn test_unknown_extension() {
        let dir = tempfile::tempdir().unwrap();
        let err = render(&opts(dir.path().join("logo.bmp"))).unwrap_err();
        assert!(err.downcast_ref::<UnknownFormat>().is_some());
    }
}
