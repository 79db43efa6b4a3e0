//! Curve morphing between two generated curve lists.

use crate::geometry::{Curve, Point};

/// Remaps `points` to `n` entries by index lookup.
///
/// Output index `i` reads input index `floor(i / (n - 1) * (len - 1))`, so the
/// first and last points are always kept. An empty input stays empty.
pub fn resample(points: &[Point], n: usize) -> Vec<Point> {
    if points.is_empty() || n == 0 {
        return Vec::new();
    }
    if n == 1 {
        return vec![points[0]];
    }
    let last = points.len() - 1;
    (0..n)
        .map(|i| {
            let src = ((i as f64 / (n - 1) as f64) * last as f64).floor() as usize;
            points[src.min(last)]
        })
        .collect()
}

/// Pointwise blend between two curves of equal (resampled) length.
///
/// The resampled target only drives the blend; progress 1 yields the new
/// curve as generated.
#[derive(Debug, Clone, PartialEq)]
pub struct CurveInterpolator {
    from: Vec<Point>,
    to: Vec<Point>,
    target: Curve,
}

impl CurveInterpolator {
    /// Pairs `old` with `new`, resampling both to the larger point count
    /// when they differ.
    pub fn new(old: &Curve, new: &Curve) -> Self {
        let (from, to) = if old.len() == new.len() {
            (old.points.clone(), new.points.clone())
        } else if old.is_empty() || new.is_empty() {
            // Nothing to blend from (or to): jump straight to the target.
            (new.points.clone(), new.points.clone())
        } else {
            let n = old.len().max(new.len());
            (resample(&old.points, n), resample(&new.points, n))
        };
        Self {
            from,
            to,
            target: new.clone(),
        }
    }

    /// Point count of the curve while blending (before progress 1).
    pub fn len(&self) -> usize {
        self.to.len()
    }

    pub fn is_empty(&self) -> bool {
        self.to.is_empty()
    }

    /// The new curve, as reached at progress 1.
    pub fn target(&self) -> &Curve {
        &self.target
    }

    /// Curve at progress `t`, clamped to `[0, 1]`.
    pub fn at(&self, t: f64) -> Curve {
        let mut out = Curve {
            points: Vec::with_capacity(self.len()),
            ..self.target.clone()
        };
        self.write_into(t, &mut out);
        out
    }

    /// Writes the curve at progress `t` into `out`, reusing its point buffer.
    ///
    /// At `t >= 1` the new curve's own points are copied, not the resampled
    /// ones.
    pub fn write_into(&self, t: f64, out: &mut Curve) {
        let t = clamp_progress(t);
        out.kind = self.target.kind;
        out.layer_index = self.target.layer_index;
        out.petal_index = self.target.petal_index;
        out.points.clear();
        if t >= 1.0 {
            out.points.extend_from_slice(&self.target.points);
            return;
        }
        out.points
            .extend(self.from.iter().zip(&self.to).map(|(a, b)| a.lerp(*b, t)));
    }
}

/// Interpolators for every curve of a transition, in generator order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MorphSet {
    interpolators: Vec<CurveInterpolator>,
}

impl MorphSet {
    pub fn len(&self) -> usize {
        self.interpolators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.interpolators.is_empty()
    }

    pub fn interpolators(&self) -> &[CurveInterpolator] {
        &self.interpolators
    }

    /// Evaluates every curve at progress `t`.
    pub fn at(&self, t: f64) -> Vec<Curve> {
        self.interpolators.iter().map(|i| i.at(t)).collect()
    }

    /// Evaluates every curve at `t` into `out`, reusing existing allocations.
    pub fn write_into(&self, t: f64, out: &mut Vec<Curve>) {
        out.truncate(self.interpolators.len());
        for (idx, interp) in self.interpolators.iter().enumerate() {
            match out.get_mut(idx) {
                Some(curve) => interp.write_into(t, curve),
                None => out.push(interp.at(t)),
            }
        }
    }
}

/// Pairs `old[i]` with `new[i]`.
///
/// Returns `None` when the lists differ in length; the caller is expected to
/// show `new` directly in that case.
pub fn build_interpolators(old: &[Curve], new: &[Curve]) -> Option<MorphSet> {
    if old.len() != new.len() {
        return None;
    }
    Some(MorphSet {
        interpolators: old
            .iter()
            .zip(new)
            .map(|(a, b)| CurveInterpolator::new(a, b))
            .collect(),
    })
}

fn clamp_progress(t: f64) -> f64 {
    if t.is_nan() {
        0.0
    } else {
        t.clamp(0.0, 1.0)
    }
}
