//! PetalForge CLI - render, animate and manage parametric logos
//!
//! This binary provides commands for rendering a parameter set to SVG/PNG,
//! writing transition frames, inspecting generation output and managing
//! named presets.

mod cli_args;

use clap::Parser;
use std::process::ExitCode;

use cli_args::{Cli, Commands, PresetCommands};
use petalforge_cli::commands;
use petalforge_cli::commands::animate::AnimateOptions;
use petalforge_cli::commands::render::RenderOptions;
use petalforge_cli::logger;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logger::init(cli.verbose);
    let store = cli.store.as_deref();

    let result = match cli.command {
        Commands::Render {
            source,
            size,
            scale,
            output,
            json,
        } => commands::render::run(&RenderOptions {
            source: source.to_source(),
            store: cli.store.clone(),
            size,
            scale,
            output,
            json,
        }),
        Commands::Animate {
            source,
            to_query,
            fps,
            easing,
            size,
            scale,
            output,
            format,
            json,
        } => commands::animate::run(&AnimateOptions {
            source: source.to_source(),
            store: cli.store.clone(),
            to_query,
            fps,
            easing,
            size,
            scale,
            out_dir: output,
            format: format.into(),
            json,
        }),
        Commands::Inspect { source, size, json } => {
            commands::inspect::run(&source.to_source(), store, size, json)
        }
        Commands::Preset { action } => match action {
            PresetCommands::Save { name, source, json } => {
                commands::preset::save(store, &name, &source.to_source(), json)
            }
            PresetCommands::Load {
                name,
                as_query,
                json,
            } => commands::preset::load(store, &name, as_query, json),
            PresetCommands::List { json } => commands::preset::list(store, json),
            PresetCommands::Delete { name, json } => commands::preset::delete(store, &name, json),
        },
        Commands::Defaults { json } => commands::defaults::run(json),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
