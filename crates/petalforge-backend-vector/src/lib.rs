//! PetalForge Vector Backend
//!
//! This crate turns a [`petalforge_spec::ParameterSet`] into layered curves,
//! smooth cubic paths, animated transitions between parameter sets, and
//! SVG/PNG output. Every stage is deterministic: the same parameters at the
//! same canvas size always yield bit-identical curves and byte-identical files.
//!
//! # Pipeline
//!
//! - **Generation**: [`generate::generate_curves`] samples petal arcs and inner
//!   connective curves
//! - **Paths**: [`path::build_path`] fits a Catmull-Rom spline as cubic Beziers
//! - **Morphing**: [`morph::build_interpolators`] pairs curves of two lists
//! - **Animation**: [`animation::AnimationDriver`] eases between sets frame by frame
//! - **Export**: [`svg::render_svg`], [`raster::rasterize`] and [`png`]
//!
//! # Example
//!
//! ```
//! use petalforge_backend_vector::{build_path, generate_curves};
//! use petalforge_spec::ParameterSet;
//!
//! let params = ParameterSet { num_petals: 3, num_layers: 1, ..Default::default() };
//! let curves = generate_curves(&params, 400.0);
//! assert_eq!(curves.len(), 3);
//!
//! let d = build_path(&curves[0]).to_svg_d();
//! assert!(d.starts_with("M 200.00 200.00 C "));
//! ```

pub mod animation;
pub mod easing;
pub mod error;
pub mod export;
pub mod generate;
pub mod geometry;
pub mod morph;
pub mod path;
pub mod png;
pub mod raster;
pub mod style;
pub mod svg;

// Re-export main types for convenience
pub use animation::{AnimationDriver, DriverState, SETTLE_THRESHOLD};
pub use easing::Easing;
pub use error::RenderError;
pub use export::{export, export_png, export_svg, ExportFormat, Frame};
pub use generate::{expected_curve_count, generate_curves};
pub use geometry::{Curve, CurveKind, Point};
pub use morph::{build_interpolators, CurveInterpolator, MorphSet};
pub use path::{build_path, build_paths, Path, PathBuilder, PathCommand};
pub use png::{PngConfig, PngError};
pub use raster::{rasterize, RgbaImage};
pub use style::{curve_style, curve_styles, CurveStyle};
pub use svg::{render_params_svg, render_svg};
