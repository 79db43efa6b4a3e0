//! Per-curve stroke styling.

use petalforge_spec::{Color, ParameterSet};

use crate::geometry::{Curve, CurveKind};

/// Stroke attributes for one curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveStyle {
    pub color: Color,
    pub width: f64,
    /// Opacity in `[0, 1]`, multiplied with the color's own alpha.
    pub opacity: f64,
    /// Rotation about the canvas center, in degrees.
    pub rotation_deg: f64,
}

/// Style of curve `index` out of `count`.
///
/// Inner curves are drawn at half the stroke width. Opacity cycles through
/// three steps of `opacity_variation` above `opacity_base`, and rotation
/// spreads linearly over `line_rotation_spread_deg`.
pub fn curve_style(index: usize, count: usize, curve: &Curve, params: &ParameterSet) -> CurveStyle {
    let width = match curve.kind {
        CurveKind::Petal => params.stroke_width,
        CurveKind::Inner => params.stroke_width * 0.5,
    };
    let opacity = (params.opacity_base + (index % 3) as f64 * params.opacity_variation).clamp(0.0, 1.0);
    let rotation_deg = if count == 0 {
        0.0
    } else {
        (index as f64 / count as f64) * params.line_rotation_spread_deg
    };
    CurveStyle {
        color: params.line_color,
        width,
        opacity,
        rotation_deg,
    }
}

/// Styles for every curve, in order.
pub fn curve_styles(curves: &[Curve], params: &ParameterSet) -> Vec<CurveStyle> {
    let count = curves.len();
    curves
        .iter()
        .enumerate()
        .map(|(i, c)| curve_style(i, count, c, params))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;

    fn curve(kind: CurveKind) -> Curve {
        Curve::new(vec![Point::new(0.0, 0.0)], kind, 0, 0)
    }

    #[test]
    fn test_inner_curves_are_thinner() {
        let params = ParameterSet {
            stroke_width: 2.0,
            ..Default::default()
        };
        assert_eq!(curve_style(0, 1, &curve(CurveKind::Petal), &params).width, 2.0);
        assert_eq!(curve_style(0, 1, &curve(CurveKind::Inner), &params).width, 1.0);
    }

    #[test]
    fn test_opacity_cycles_and_clamps() {
        let params = ParameterSet {
            opacity_base: 0.5,
            opacity_variation: 0.25,
            ..Default::default()
        };
        let c = curve(CurveKind::Petal);
        let ops: Vec<f64> = (0..4).map(|i| curve_style(i, 4, &c, &params).opacity).collect();
        assert_eq!(ops, vec![0.5, 0.75, 1.0, 0.5]);

        let loud = ParameterSet {
            opacity_base: 0.9,
            opacity_variation: 0.5,
            ..Default::default()
        };
        assert_eq!(curve_style(2, 3, &c, &loud).opacity, 1.0);
    }

    #[test]
    fn test_rotation_spreads_over_count() {
        let params = ParameterSet {
            line_rotation_spread_deg: 90.0,
            ..Default::default()
        };
        let curves = vec![curve(CurveKind::Petal); 4];
        let rot: Vec<f64> = curve_styles(&curves, &params)
            .iter()
            .map(|s| s.rotation_deg)
            .collect();
        assert_eq!(rot, vec![0.0, 22.5, 45.0, 67.5]);
    }
}
