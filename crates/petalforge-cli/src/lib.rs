//! PetalForge CLI library.
//!
//! This crate provides the core functionality for the `petalforge` binary:
//! parameter loading, the preset store, logging setup and the command
//! implementations.

pub mod commands;
pub mod input;
pub mod logger;
pub mod presets;
