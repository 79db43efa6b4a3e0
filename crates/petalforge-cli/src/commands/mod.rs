//! CLI command implementations

pub mod animate;
pub mod defaults;
pub mod inspect;
pub mod json_output;
pub mod preset;
pub mod render;
