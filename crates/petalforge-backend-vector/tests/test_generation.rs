//! Integration tests for curve generation, path building and morphing.
//!
//! These exercise the public pipeline the way a host renderer would: generate
//! curves, build paths, pair two curve lists for a transition.

use std::f64::consts::PI;

use petalforge_backend_vector::{
    build_interpolators, build_path, build_paths, generate_curves, CurveKind, Path, PathCommand,
    Point,
};
use petalforge_backend_vector::generate::PETAL_SAMPLES;
use petalforge_spec::ParameterSet;
use pretty_assertions::assert_eq;

fn params(petals: u32, layers: u32) -> ParameterSet {
    ParameterSet {
        num_petals: petals,
        num_layers: layers,
        ..Default::default()
    }
}

// ============================================================================
// Generation
// ============================================================================

/// Same parameters and size always produce bit-identical curves.
#[test]
fn test_generation_is_deterministic() {
    let p = ParameterSet {
        waviness: 1.37,
        staggered_rotation_rad: -0.4,
        ..params(7, 9)
    };
    let a = generate_curves(&p, 512.0);
    let b = generate_curves(&p, 512.0);
    assert_eq!(a, b);
    for (ca, cb) in a.iter().zip(&b) {
        for (pa, pb) in ca.points.iter().zip(&cb.points) {
            assert_eq!(pa.x.to_bits(), pb.x.to_bits());
            assert_eq!(pa.y.to_bits(), pb.y.to_bits());
        }
    }
}

/// Exactly one petal curve per (petal, layer) pair.
#[test]
fn test_petal_curve_count() {
    for (petals, layers) in [(1, 1), (3, 2), (5, 12), (36, 4)] {
        let curves = generate_curves(&params(petals, layers), 400.0);
        let count = curves.iter().filter(|c| c.kind == CurveKind::Petal).count();
        assert_eq!(count, (petals * layers) as usize, "P={petals} L={layers}");
    }
}

/// A single layer has no room for connective curves.
#[test]
fn test_single_layer_has_no_inner_curves() {
    let curves = generate_curves(&params(8, 1), 400.0);
    assert_eq!(curves.len(), 8);
    assert!(curves.iter().all(|c| c.kind == CurveKind::Petal));
}

/// With a zero angular range each petal collapses onto a radial segment.
#[test]
fn test_zero_angle_range_gives_colinear_petals() {
    let p = ParameterSet {
        angle_range_rad: 0.0,
        ..params(3, 1)
    };
    let curves = generate_curves(&p, 400.0);
    assert_eq!(curves.len(), 3);
    let center = Point::new(200.0, 200.0);
    for (petal, curve) in curves.iter().enumerate() {
        let angle = petal as f64 * 2.0 * PI / 3.0;
        let (sin, cos) = angle.sin_cos();
        for p in &curve.points {
            let d = *p - center;
            let cross = d.x * sin - d.y * cos;
            assert!(cross.abs() < 1e-9, "petal {petal} strays off its ray: {cross}");
        }
    }
}

/// Every point stays finite with all parameters at their upper bounds.
#[test]
fn test_points_stay_finite_at_extremes() {
    let p = ParameterSet {
        waviness: 2.0,
        inner_amplitude: 2.0,
        inner_radius_max: 3.0,
        ..params(36, 120)
    };
    let curves = generate_curves(&p, 400.0);
    assert!(curves
        .iter()
        .flat_map(|c| &c.points)
        .all(|pt| pt.x.is_finite() && pt.y.is_finite()));
}

// ============================================================================
// Paths
// ============================================================================

/// Path edge cases: empty, single point and two points.
#[test]
fn test_path_edge_cases() {
    use petalforge_backend_vector::Curve;

    let empty = Curve::new(vec![], CurveKind::Petal, 0, 0);
    assert_eq!(build_path(&empty), Path::new());

    let dot = Curve::new(vec![Point::new(3.0, 4.0)], CurveKind::Petal, 0, 0);
    assert_eq!(build_path(&dot).commands(), &[PathCommand::MoveTo(Point::new(3.0, 4.0))]);

    let seg = Curve::new(
        vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0)],
        CurveKind::Inner,
        1,
        0,
    );
    assert_eq!(build_path(&seg).to_svg_d(), "M 0.00 0.00 L 1.00 1.00");
}

/// Every generated petal becomes one move plus one cubic per segment.
#[test]
fn test_generated_paths_have_one_cubic_per_segment() {
    let curves = generate_curves(&ParameterSet::default(), 400.0);
    let paths = build_paths(&curves);
    assert_eq!(paths.len(), curves.len());
    for (curve, path) in curves.iter().zip(&paths) {
        assert_eq!(path.len(), curve.len());
        let cubics = path
            .commands()
            .iter()
            .filter(|c| matches!(c, PathCommand::CubicTo { .. }))
            .count();
        assert_eq!(cubics, curve.len() - 1);
    }
    assert_eq!(paths[0].len(), PETAL_SAMPLES);
}

// ============================================================================
// Morphing
// ============================================================================

/// Morphing is refused exactly when the curve counts differ.
#[test]
fn test_morph_requires_equal_lengths() {
    let a = generate_curves(&params(5, 12), 400.0);
    let b = generate_curves(&params(5, 13), 400.0);
    let c = generate_curves(&ParameterSet { waviness: 1.9, ..params(5, 12) }, 400.0);
    assert!(build_interpolators(&a, &b).is_none());
    assert!(build_interpolators(&a, &c).is_some());
}

/// Progress 0 reproduces the old curves, progress 1 the new ones exactly.
#[test]
fn test_morph_endpoints() {
    let old = generate_curves(&ParameterSet::default(), 400.0);
    let new = generate_curves(
        &ParameterSet {
            waviness: 1.5,
            staggered_rotation_rad: 0.3,
            ..Default::default()
        },
        400.0,
    );
    let morph = build_interpolators(&old, &new).unwrap();
    assert_eq!(morph.at(0.0), old);
    assert_eq!(morph.at(1.0), new);

    let mid = morph.at(0.5);
    for ((m, o), n) in mid.iter().zip(&old).zip(&new) {
        for ((pm, po), pn) in m.points.iter().zip(&o.points).zip(&n.points) {
            assert!((pm.x - (po.x + pn.x) / 2.0).abs() < 1e-9);
            assert!((pm.y - (po.y + pn.y) / 2.0).abs() < 1e-9);
        }
    }
}
