//! Animate command implementation
//!
//! Drives a transition from a start parameter set to a target at a fixed
//! frame rate and writes every frame to a directory.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use colored::Colorize;
use log::info;
use petalforge_backend_vector::{
    export, AnimationDriver, DriverState, Easing, ExportFormat, Frame,
};
use petalforge_spec::canonical_params_hash;
use serde::Serialize;

use super::json_output::{print_json, CommandOutput, JsonError};
use crate::input::{load_params, ParamSource};

/// Highest accepted frame rate.
pub const MAX_FPS: f64 = 240.0;

/// Animate command options.
#[derive(Debug, Clone)]
pub struct AnimateOptions {
    /// Start parameters.
    pub source: ParamSource,
    pub store: Option<PathBuf>,
    /// Query applied on top of the start parameters to form the target.
    pub to_query: String,
    pub fps: f64,
    pub easing: Easing,
    pub size: f64,
    pub scale: f64,
    pub out_dir: PathBuf,
    pub format: ExportFormat,
    pub json: bool,
}

/// Summary of a rendered animation.
#[derive(Debug, Clone, Serialize)]
pub struct AnimateResult {
    pub out_dir: String,
    pub format: String,
    pub frames: usize,
    pub fps: f64,
    pub duration_ms: u32,
    pub easing: String,
    /// True if the petal or layer count changed between start and target.
    pub shape_changed: bool,
    /// True if the target was shown at once, without morphing.
    pub snapped: bool,
    pub start_hash: String,
    pub target_hash: String,
    pub bytes: u64,
}

/// Run the animate command.
pub fn run(opts: &AnimateOptions) -> Result<ExitCode> {
    if opts.json {
        let output = match animate(opts) {
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

    println!("{} {}", "Output:".cyan().bold(), opts.out_dir.display());
    let result = animate(opts)?;
    if result.snapped {
        let reason = if result.shape_changed {
            "curve counts differ"
        } else {
            "duration is zero"
        };
        println!(
            "{} {}, target shown without morphing",
            "NOTE".yellow().bold(),
            reason
        );
    }
    println!(
        "{} {} frames at {} fps ({} bytes)",
        "Rendered".green().bold(),
        result.frames,
        result.fps,
        result.bytes
    );
    Ok(ExitCode::SUCCESS)
}

/// Renders all frames and returns a summary.
pub fn animate(opts: &AnimateOptions) -> Result<AnimateResult> {
    if !opts.fps.is_finite() || opts.fps <= 0.0 || opts.fps > MAX_FPS {
        bail!("fps must be in (0, {}], got {}", MAX_FPS, opts.fps);
    }
    let start = load_params(&opts.source, opts.store.as_deref())?.params;
    let target = start
        .with_query(&opts.to_query)
        .context("Failed to parse target query")?;

    fs::create_dir_all(&opts.out_dir)
        .with_context(|| format!("Failed to create {}", opts.out_dir.display()))?;

    let frame_ms = 1000.0 / opts.fps;
    let shape_changed = !start.same_shape(&target);
    let mut driver = AnimationDriver::new(start.clone(), opts.size).with_easing(opts.easing);
    let mut frames = 0usize;
    let mut bytes = 0u64;

    bytes += write_frame(&driver, opts, frames)?;
    frames += 1;

    let changed = driver.set_params(target);
    let snapped = changed && driver.state() == DriverState::Settled;
    if snapped {
        bytes += write_frame(&driver, opts, frames)?;
        frames += 1;
    }
    while driver.state() == DriverState::Transitioning {
        driver.advance(frame_ms);
        bytes += write_frame(&driver, opts, frames)?;
        frames += 1;
    }
    info!("wrote {} frames to {}", frames, opts.out_dir.display());

    Ok(AnimateResult {
        out_dir: opts.out_dir.display().to_string(),
        format: opts.format.extension().to_string(),
        frames,
        fps: opts.fps,
        duration_ms: driver.params().animation_duration_ms,
        easing: opts.easing.as_str().to_string(),
        shape_changed,
        snapped,
        start_hash: canonical_params_hash(&start)?,
        target_hash: canonical_params_hash(driver.params())?,
        bytes,
    })
}

/// File name of frame `index`.
pub fn frame_file_name(index: usize, format: ExportFormat) -> String {
    format!("frame_{:04}.{}", index, format.extension())
}

fn write_frame(driver: &AnimationDriver, opts: &AnimateOptions, index: usize) -> Result<u64> {
    let frame = Frame {
        paths: driver.paths(),
        curves: driver.curves(),
        params: driver.params(),
        size: driver.size(),
    };
    let path = opts.out_dir.join(frame_file_name(index, opts.format));
    export(&frame, opts.format, opts.scale, &path)
        .with_context(|| format!("Failed to write frame {}", path.display()))
}
