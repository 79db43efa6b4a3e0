//! Curve generation: parameter set to an ordered list of curves.
//!
//! The output is concatenated in a fixed order (all petal arcs, then all
//! inner curves) so that index-based styling stays stable across
//! regenerations with unchanged petal/layer counts.

use std::f64::consts::PI;

use petalforge_spec::ParameterSet;

use crate::geometry::{Curve, CurveKind, Point};

/// Points sampled along each petal sweep (`t = i / 50`).
pub const PETAL_SAMPLES: usize = 51;

/// Points sampled around each inner curve (a closed full turn, `i / 60`).
pub const INNER_SAMPLES: usize = 61;

/// Ripple strength of the petal envelope per unit of waviness.
pub const PETAL_RIPPLE: f64 = 0.3;

const PETAL_RADIUS_BASE: f64 = 0.3;
const PETAL_RADIUS_GROWTH: f64 = 0.6;
const PETAL_EXTENT: f64 = 0.35;
const INNER_EXTENT: f64 = 0.15;

/// Number of curves `generate_curves` returns for these counts.
pub fn expected_curve_count(params: &ParameterSet) -> usize {
    let petals = params.petal_count() as usize;
    let layers = params.layer_count() as usize;
    petals * layers + petals * layers.saturating_sub(2)
}

/// Generates every curve of the logo on a `size x size` canvas.
///
/// Pure and deterministic. Zero petal or layer counts are treated as one, and
/// a non-finite or non-positive `size` collapses every point onto the origin.
pub fn generate_curves(params: &ParameterSet, size: f64) -> Vec<Curve> {
    let size = if size.is_finite() && size > 0.0 { size } else { 0.0 };
    let center = Point::new(size / 2.0, size / 2.0);

    let mut curves = Vec::with_capacity(expected_curve_count(params));
    push_petal_arcs(params, size, center, &mut curves);
    push_inner_curves(params, size, center, &mut curves);
    curves
}

fn push_petal_arcs(params: &ParameterSet, size: f64, center: Point, out: &mut Vec<Curve>) {
    let petals = params.petal_count();
    let layers = params.layer_count();
    let sector = 2.0 * PI / petals as f64;
    let ripple = PETAL_RIPPLE * params.waviness;

    for petal in 0..petals {
        for layer in 0..layers {
            let base_angle = petal as f64 * sector + layer as f64 * params.staggered_rotation_rad;
            let radius_scale =
                PETAL_RADIUS_BASE + (layer as f64 / layers as f64) * PETAL_RADIUS_GROWTH;
            let max_radius = size * PETAL_EXTENT * radius_scale;

            let points = (0..PETAL_SAMPLES)
                .map(|i| {
                    let t = i as f64 / (PETAL_SAMPLES - 1) as f64;
                    let angle = base_angle + (t - 0.5) * params.angle_range_rad;
                    // sin(pi t) pinches both ends of the sweep to the center.
                    let r = max_radius
                        * (PI * t).sin()
                        * (1.0 + ripple * (petals as f64 * PI * t).cos());
                    Point::polar(center, r, angle)
                })
                .collect();

            out.push(Curve::new(points, CurveKind::Petal, layer, petal));
        }
    }
}

fn push_inner_curves(params: &ParameterSet, size: f64, center: Point, out: &mut Vec<Curve>) {
    let petals = params.petal_count();
    let layers = params.layer_count();
    if layers < 3 {
        return;
    }
    let sector = 2.0 * PI / petals as f64;
    let wobble = params.inner_amplitude * params.waviness;
    let steps = (INNER_SAMPLES - 1) as f64;

    for petal in 0..petals {
        let petal_angle = petal as f64 * sector;
        for layer in 1..layers - 1 {
            let fraction = layer as f64 / layers as f64;
            let radius_scale = params.inner_radius_min
                + fraction * (params.inner_radius_max - params.inner_radius_min);
            let radius = size * INNER_EXTENT * radius_scale;
            let stagger = layer as f64 * params.staggered_rotation_rad;

            let points = (0..INNER_SAMPLES)
                .map(|i| {
                    let angle = petal_angle + (i as f64 / steps) * 2.0 * PI + stagger;
                    let r = radius
                        * (1.0 + wobble * (petals as f64 * angle + layer as f64).sin());
                    Point::polar(center, r, angle)
                })
                .collect();

            out.push(Curve::new(points, CurveKind::Inner, layer, petal));
        }
    }
}
