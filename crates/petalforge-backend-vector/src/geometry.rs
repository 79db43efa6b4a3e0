//! Points and curves in canvas space.

use std::ops::{Add, Mul, Sub};

/// A point in `[0, size] x [0, size]` canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Point at `radius` from `center` in direction `angle` (radians).
    #[inline]
    pub fn polar(center: Point, radius: f64, angle: f64) -> Self {
        Self {
            x: center.x + radius * angle.cos(),
            y: center.y + radius * angle.sin(),
        }
    }

    /// Linear blend `self + (other - self) * t`.
    #[inline]
    pub fn lerp(self, other: Point, t: f64) -> Point {
        Point {
            x: self.x + (other.x - self.x) * t,
            y: self.y + (other.y - self.y) * t,
        }
    }

    /// Euclidean distance to another point.
    #[inline]
    pub fn distance(self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

impl From<Point> for kurbo::Point {
    fn from(p: Point) -> Self {
        kurbo::Point::new(p.x, p.y)
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point {
    type Output = Point;

    fn mul(self, rhs: f64) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

/// Which pass of the generator produced a curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CurveKind {
    /// One angular lobe of the pattern.
    Petal,
    /// Connective tracery circling near the center.
    Inner,
}

impl CurveKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CurveKind::Petal => "petal",
            CurveKind::Inner => "inner",
        }
    }
}

/// An ordered point sequence plus the indices used for styling.
///
/// `kind`, `layer_index` and `petal_index` have no geometric meaning.
#[derive(Debug, Clone, PartialEq)]
pub struct Curve {
    pub points: Vec<Point>,
    pub kind: CurveKind,
    pub layer_index: u32,
    pub petal_index: u32,
}

impl Curve {
    pub fn new(points: Vec<Point>, kind: CurveKind, layer_index: u32, petal_index: u32) -> Self {
        Self {
            points,
            kind,
            layer_index,
            petal_index,
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
