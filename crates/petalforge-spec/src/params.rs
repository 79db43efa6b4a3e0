//! The parameter set that fully describes one logo.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::color::Color;

/// Kind of value a parameter holds, for UIs that build controls from [`PARAM_BOUNDS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParamKind {
    /// Finite floating-point value.
    Float,
    /// Non-negative integer value.
    Integer,
    /// Color value; `min`/`max` are unused.
    Color,
}

/// Declared range of one parameter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ParamBound {
    /// Key used in JSON and in the flat key/value mapping.
    pub key: &'static str,
    /// Value kind.
    pub kind: ParamKind,
    /// Inclusive lower bound.
    pub min: f64,
    /// Inclusive upper bound.
    pub max: f64,
}

impl ParamBound {
    const fn float(key: &'static str, min: f64, max: f64) -> Self {
        Self {
            key,
            kind: ParamKind::Float,
            min,
            max,
        }
    }

    const fn integer(key: &'static str, min: f64, max: f64) -> Self {
        Self {
            key,
            kind: ParamKind::Integer,
            min,
            max,
        }
    }

    const fn color(key: &'static str) -> Self {
        Self {
            key,
            kind: ParamKind::Color,
            min: 0.0,
            max: 0.0,
        }
    }

    /// Clamp a float into this bound, substituting `fallback` for non-finite input.
    pub fn clamp_f64(&self, value: f64, fallback: f64) -> f64 {
        if value.is_finite() {
            value.clamp(self.min, self.max)
        } else {
            fallback
        }
    }

    /// Clamp an integer into this bound.
    pub fn clamp_u32(&self, value: u32) -> u32 {
        value.clamp(self.min as u32, self.max as u32)
    }
}

pub const KEY_WAVINESS: &str = "waviness";
pub const KEY_STAGGERED_ROTATION: &str = "staggeredRotationRad";
pub const KEY_NUM_PETALS: &str = "numPetals";
pub const KEY_NUM_LAYERS: &str = "numLayers";
pub const KEY_INNER_RADIUS_MIN: &str = "innerRadiusMin";
pub const KEY_INNER_RADIUS_MAX: &str = "innerRadiusMax";
pub const KEY_ANGLE_RANGE: &str = "angleRangeRad";
pub const KEY_INNER_AMPLITUDE: &str = "innerAmplitude";
pub const KEY_STROKE_WIDTH: &str = "strokeWidth";
pub const KEY_OPACITY_BASE: &str = "opacityBase";
pub const KEY_OPACITY_VARIATION: &str = "opacityVariation";
pub const KEY_LINE_ROTATION_SPREAD: &str = "lineRotationSpreadDeg";
pub const KEY_ANIMATION_DURATION: &str = "animationDurationMs";
pub const KEY_BACKGROUND_COLOR: &str = "backgroundColor";
pub const KEY_LINE_COLOR: &str = "lineColor";

/// Declared ranges for every parameter, in display order.
pub const PARAM_BOUNDS: &[ParamBound] = &[
    ParamBound::float(KEY_WAVINESS, 0.0, 2.0),
    ParamBound::float(KEY_STAGGERED_ROTATION, -PI, PI),
    ParamBound::integer(KEY_NUM_PETALS, 1.0, 36.0),
    ParamBound::integer(KEY_NUM_LAYERS, 1.0, 120.0),
    ParamBound::float(KEY_INNER_RADIUS_MIN, 0.0, 3.0),
    ParamBound::float(KEY_INNER_RADIUS_MAX, 0.0, 3.0),
    ParamBound::float(KEY_ANGLE_RANGE, 0.0, 2.0 * PI),
    ParamBound::float(KEY_INNER_AMPLITUDE, 0.0, 2.0),
    ParamBound::float(KEY_STROKE_WIDTH, 0.05, 12.0),
    ParamBound::float(KEY_OPACITY_BASE, 0.0, 1.0),
    ParamBound::float(KEY_OPACITY_VARIATION, 0.0, 0.5),
    ParamBound::float(KEY_LINE_ROTATION_SPREAD, -360.0, 360.0),
    ParamBound::integer(KEY_ANIMATION_DURATION, 0.0, 10_000.0),
    ParamBound::color(KEY_BACKGROUND_COLOR),
    ParamBound::color(KEY_LINE_COLOR),
];

/// Look up the declared bound for a key.
pub fn bound_for(key: &str) -> Option<&'static ParamBound> {
    PARAM_BOUNDS.iter().find(|b| b.key == key)
}

/// Every tunable input of the logo.
///
/// A new value is produced for each edit; the generator never mutates one.
/// Missing JSON fields take their defaults and unknown fields are rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct ParameterSet {
    /// Ripple strength applied to petal and inner radii.
    pub waviness: f64,
    /// Extra rotation added per layer, in radians.
    pub staggered_rotation_rad: f64,
    /// Number of angular sectors.
    pub num_petals: u32,
    /// Number of concentric bands.
    pub num_layers: u32,
    /// Inner-curve radius factor at the first layer.
    pub inner_radius_min: f64,
    /// Inner-curve radius factor at the last layer.
    pub inner_radius_max: f64,
    /// Angular width of each petal sweep, in radians.
    pub angle_range_rad: f64,
    /// Radius perturbation of inner curves.
    pub inner_amplitude: f64,
    /// Base stroke width in canvas units.
    pub stroke_width: f64,
    /// Opacity of the first curve in each group of three.
    pub opacity_base: f64,
    /// Opacity step between consecutive curves in a group of three.
    pub opacity_variation: f64,
    /// Total rotation spread across all curves, in degrees.
    pub line_rotation_spread_deg: f64,
    /// Transition duration in milliseconds.
    pub animation_duration_ms: u32,
    /// Canvas fill.
    pub background_color: Color,
    /// Stroke color.
    pub line_color: Color,
}

impl Default for ParameterSet {
    fn default() -> Self {
        Self {
            waviness: 0.5,
            staggered_rotation_rad: 0.1,
            num_petals: 5,
            num_layers: 12,
            inner_radius_min: 0.2,
            inner_radius_max: 1.0,
            angle_range_rad: PI / 3.0,
            inner_amplitude: 0.3,
            stroke_width: 1.0,
            opacity_base: 0.6,
            opacity_variation: 0.15,
            line_rotation_spread_deg: 0.0,
            animation_duration_ms: 800,
            background_color: Color::rgb(0x0b, 0x0d, 0x12),
            line_color: Color::rgb(0xf4, 0xef, 0xe2),
        }
    }
}

impl ParameterSet {
    /// Parses a parameter set from JSON. The result is not clamped.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serializes to a compact JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Serializes to a pretty-printed JSON string.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Serializes to a JSON value.
    pub fn to_value(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(self)
    }

    /// Declared ranges of all parameters.
    pub fn bounds() -> &'static [ParamBound] {
        PARAM_BOUNDS
    }

    /// Returns a copy with every numeric field clamped into its declared range.
    ///
    /// Non-finite floats are replaced by the field default.
    pub fn clamped(&self) -> Self {
        let d = Self::default();
        let f = |key: &str, value: f64, fallback: f64| match bound_for(key) {
            Some(b) => b.clamp_f64(value, fallback),
            None => value,
        };
        let u = |key: &str, value: u32| match bound_for(key) {
            Some(b) => b.clamp_u32(value),
            None => value,
        };

        Self {
            waviness: f(KEY_WAVINESS, self.waviness, d.waviness),
            staggered_rotation_rad: f(
                KEY_STAGGERED_ROTATION,
                self.staggered_rotation_rad,
                d.staggered_rotation_rad,
            ),
            num_petals: u(KEY_NUM_PETALS, self.num_petals),
            num_layers: u(KEY_NUM_LAYERS, self.num_layers),
            inner_radius_min: f(KEY_INNER_RADIUS_MIN, self.inner_radius_min, d.inner_radius_min),
            inner_radius_max: f(KEY_INNER_RADIUS_MAX, self.inner_radius_max, d.inner_radius_max),
            angle_range_rad: f(KEY_ANGLE_RANGE, self.angle_range_rad, d.angle_range_rad),
            inner_amplitude: f(KEY_INNER_AMPLITUDE, self.inner_amplitude, d.inner_amplitude),
            stroke_width: f(KEY_STROKE_WIDTH, self.stroke_width, d.stroke_width),
            opacity_base: f(KEY_OPACITY_BASE, self.opacity_base, d.opacity_base),
            opacity_variation: f(
                KEY_OPACITY_VARIATION,
                self.opacity_variation,
                d.opacity_variation,
            ),
            line_rotation_spread_deg: f(
                KEY_LINE_ROTATION_SPREAD,
                self.line_rotation_spread_deg,
                d.line_rotation_spread_deg,
            ),
            animation_duration_ms: u(KEY_ANIMATION_DURATION, self.animation_duration_ms),
            background_color: self.background_color,
            line_color: self.line_color,
        }
    }

    /// Petal count with zero treated as one.
    pub fn petal_count(&self) -> u32 {
        self.num_petals.max(1)
    }

    /// Layer count with zero treated as one.
    pub fn layer_count(&self) -> u32 {
        self.num_layers.max(1)
    }

    /// Returns true if both sets produce the same number of curves with the
    /// same number of points each, so one can morph into the other pointwise.
    pub fn same_shape(&self, other: &ParameterSet) -> bool {
        self.petal_count() == other.petal_count() && self.layer_count() == other.layer_count()
    }
}
