//! PetalForge Parameter Library
//!
//! This crate provides the value types that describe a PetalForge logo: the
//! bounded [`ParameterSet`], its [`Color`] values, a flat key/value codec for
//! sharing sets as URL query strings, and canonical hashing.
//!
//! The crate holds no generation logic; see `petalforge-backend-vector` for
//! curve generation, morphing and export.
//!
//! # Example
//!
//! ```
//! use petalforge_spec::{ParameterSet, hash::canonical_params_hash};
//!
//! let params = ParameterSet::from_query("numPetals=3&numLayers=1&waviness=0").unwrap();
//! assert_eq!(params.num_petals, 3);
//!
//! // Sharing is lossless.
//! let shared = params.to_query();
//! assert_eq!(ParameterSet::from_query(&shared).unwrap(), params);
//!
//! let hash = canonical_params_hash(&params).unwrap();
//! assert_eq!(hash.len(), 64);
//! ```
//!
//! # Modules
//!
//! - [`params`]: parameter set, declared bounds and clamping
//! - [`color`]: RGBA color parsing and formatting
//! - [`query`]: flat key/value and URL query codec
//! - [`hash`]: canonical hashing
//! - [`error`]: error types

pub mod color;
pub mod error;
pub mod hash;
pub mod params;
pub mod query;

pub use color::Color;
pub use error::{BackendError, ParamsError};
pub use hash::{canonical_params_hash, canonical_value_hash, short_hash};
pub use params::{bound_for, ParamBound, ParamKind, ParameterSet, PARAM_BOUNDS};
