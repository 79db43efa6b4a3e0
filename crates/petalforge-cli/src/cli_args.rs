//! CLI argument definitions for the PetalForge command-line interface.
//!
//! All `#[derive(Parser)]`, `#[derive(Args)]` and `#[derive(Subcommand)]`
//! types are defined here, keeping `main.rs` focused on dispatch logic.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use petalforge_backend_vector::{Easing, ExportFormat};
use petalforge_cli::input::ParamSource;

/// PetalForge - Parametric Logo Renderer
#[derive(Parser)]
#[command(name = "petalforge")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub(crate) struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Preset store file (default: <config dir>/petalforge/presets.json)
    #[arg(long, global = true)]
    pub store: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Where parameters come from. Later sources override earlier ones:
/// preset, then file, then query.
#[derive(Args, Debug, Clone, Default)]
pub(crate) struct SourceArgs {
    /// Start from a stored preset
    #[arg(long)]
    pub preset: Option<String>,

    /// JSON file with parameter overrides
    #[arg(long)]
    pub params: Option<PathBuf>,

    /// Query string with parameter overrides (e.g. "numPetals=7&waviness=1.2")
    #[arg(short, long)]
    pub query: Option<String>,
}

impl SourceArgs {
    pub fn to_source(&self) -> ParamSource {
        ParamSource {
            preset: self.preset.clone(),
            params_file: self.params.clone(),
            query: self.query.clone(),
        }
    }
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Render the logo to an SVG or PNG file
    Render {
        #[command(flatten)]
        source: SourceArgs,

        /// Canvas edge length in logical units
        #[arg(long, default_value_t = 400.0)]
        size: f64,

        /// Pixels per logical unit for PNG output
        #[arg(long, default_value_t = 1.0)]
        scale: f64,

        /// Output file (.svg or .png)
        #[arg(short, long)]
        output: PathBuf,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Render every frame of a transition to a directory
    Animate {
        /// Start parameters
        #[command(flatten)]
        source: SourceArgs,

        /// Query applied on top of the start parameters to form the target
        #[arg(long)]
        to_query: String,

        /// Frames per second
        #[arg(long, default_value_t = 60.0)]
        fps: f64,

        /// Easing curve: ease-in-out-cubic or linear
        #[arg(long, default_value = "ease-in-out-cubic")]
        easing: Easing,

        /// Canvas edge length in logical units
        #[arg(long, default_value_t = 400.0)]
        size: f64,

        /// Pixels per logical unit for PNG frames
        #[arg(long, default_value_t = 1.0)]
        scale: f64,

        /// Output directory for frame files
        #[arg(short, long)]
        output: PathBuf,

        /// Frame file format
        #[arg(long, value_enum, default_value_t = FrameFormat::Svg)]
        format: FrameFormat,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Show curve counts, hashes and the share query for a parameter set
    Inspect {
        #[command(flatten)]
        source: SourceArgs,

        /// Canvas edge length in logical units
        #[arg(long, default_value_t = 400.0)]
        size: f64,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Manage named parameter presets
    Preset {
        #[command(subcommand)]
        action: PresetCommands,
    },

    /// Print default parameters and their ranges
    Defaults {
        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand)]
pub(crate) enum PresetCommands {
    /// Save parameters under a name (replaces an existing preset)
    Save {
        /// Preset name (1-64 chars of letters, digits, space, '_', '-', '.')
        name: String,

        #[command(flatten)]
        source: SourceArgs,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Print a stored preset
    Load {
        name: String,

        /// Print as a share query string instead of JSON
        #[arg(long = "as-query")]
        as_query: bool,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// List stored presets
    List {
        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Delete a stored preset
    Delete {
        name: String,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },
}

/// Frame file format for `animate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum FrameFormat {
    Svg,
    Png,
}

impl From<FrameFormat> for ExportFormat {
    fn from(format: FrameFormat) -> Self {
        match format {
            FrameFormat::Svg => ExportFormat::Svg,
            FrameFormat::Png => ExportFormat::Png,
        }
    }
}
