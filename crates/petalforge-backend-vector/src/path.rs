//! Path construction: smooth cubic splines through curve points.
//!
//! Interior tangents follow the local Catmull-Rom rule
//! `m[i] = tension * (p[i+1] - p[i-1])`; the end points use one-sided
//! differences. Each segment `i -> i+1` becomes a cubic with control points
//! `p[i] + m[i]` and `p[i+1] - m[i+1]`.

use kurbo::BezPath;

use crate::geometry::{Curve, Point};

/// Tension of the uniform Catmull-Rom spline.
pub const DEFAULT_TENSION: f64 = 1.0 / 6.0;

/// Decimal places used for every number written into path data.
pub const COORD_DECIMALS: usize = 2;

/// One vector drawing command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    QuadTo { ctrl: Point, to: Point },
    CubicTo { ctrl1: Point, ctrl2: Point, to: Point },
    Close,
}

/// A sequence of drawing commands derived from one curve.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Path {
    commands: Vec<PathCommand>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_commands(commands: Vec<PathCommand>) -> Self {
        Self { commands }
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn push(&mut self, command: PathCommand) {
        self.commands.push(command);
    }

    /// Formats the path as SVG path data with fixed precision.
    ///
    /// An empty path yields an empty string.
    pub fn to_svg_d(&self) -> String {
        let mut out = String::with_capacity(self.commands.len() * 40);
        for cmd in &self.commands {
            if !out.is_empty() {
                out.push(' ');
            }
            match cmd {
                PathCommand::MoveTo(p) => {
                    out.push_str("M ");
                    push_point(&mut out, *p);
                }
                PathCommand::LineTo(p) => {
                    out.push_str("L ");
                    push_point(&mut out, *p);
                }
                PathCommand::QuadTo { ctrl, to } => {
                    out.push_str("Q ");
                    push_point(&mut out, *ctrl);
                    out.push_str(", ");
                    push_point(&mut out, *to);
                }
                PathCommand::CubicTo { ctrl1, ctrl2, to } => {
                    out.push_str("C ");
                    push_point(&mut out, *ctrl1);
                    out.push_str(", ");
                    push_point(&mut out, *ctrl2);
                    out.push_str(", ");
                    push_point(&mut out, *to);
                }
                PathCommand::Close => out.push('Z'),
            }
        }
        out
    }

    /// Converts the path to a `kurbo` path for rasterization.
    pub fn to_bez_path(&self) -> BezPath {
        let mut bez = BezPath::new();
        for cmd in &self.commands {
            match *cmd {
                PathCommand::MoveTo(p) => bez.move_to(p),
                PathCommand::LineTo(p) => bez.line_to(p),
                PathCommand::QuadTo { ctrl, to } => bez.quad_to(ctrl, to),
                PathCommand::CubicTo { ctrl1, ctrl2, to } => bez.curve_to(ctrl1, ctrl2, to),
                PathCommand::Close => bez.close_path(),
            }
        }
        bez
    }
}

/// Builds paths with a configurable tension.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathBuilder {
    tension: f64,
}

impl Default for PathBuilder {
    fn default() -> Self {
        Self {
            tension: DEFAULT_TENSION,
        }
    }
}

impl PathBuilder {
    /// Builder with a custom tension. Non-finite values fall back to the default.
    pub fn with_tension(tension: f64) -> Self {
        Self {
            tension: if tension.is_finite() {
                tension
            } else {
                DEFAULT_TENSION
            },
        }
    }

    pub fn tension(&self) -> f64 {
        self.tension
    }

    /// Builds a fresh path through `points`.
    pub fn build(&self, points: &[Point]) -> Path {
        let mut path = Path::new();
        self.rebuild(points, &mut path);
        path
    }

    /// Rewrites `path` in place, reusing its allocation.
    pub fn rebuild(&self, points: &[Point], path: &mut Path) {
        path.clear();
        match points {
            [] => {}
            [only] => path.push(PathCommand::MoveTo(*only)),
            [a, b] => {
                path.push(PathCommand::MoveTo(*a));
                path.push(PathCommand::LineTo(*b));
            }
            _ => {
                path.commands.reserve(points.len());
                path.push(PathCommand::MoveTo(points[0]));
                let mut m_prev = self.tangent(points, 0);
                for i in 0..points.len() - 1 {
                    let m_next = self.tangent(points, i + 1);
                    path.push(PathCommand::CubicTo {
                        ctrl1: points[i] + m_prev,
                        ctrl2: points[i + 1] - m_next,
                        to: points[i + 1],
                    });
                    m_prev = m_next;
                }
            }
        }
    }

    fn tangent(&self, points: &[Point], i: usize) -> Point {
        let n = points.len();
        let delta = if i == 0 {
            points[1] - points[0]
        } else if i == n - 1 {
            points[n - 1] - points[n - 2]
        } else {
            points[i + 1] - points[i - 1]
        };
        delta * self.tension
    }
}

/// Builds the path for one curve with the default tension.
pub fn build_path(curve: &Curve) -> Path {
    PathBuilder::default().build(&curve.points)
}

/// Builds paths for every curve, in order.
pub fn build_paths(curves: &[Curve]) -> Vec<Path> {
    let builder = PathBuilder::default();
    curves.iter().map(|c| builder.build(&c.points)).collect()
}

/// Formats a number with [`COORD_DECIMALS`] places; `-0.00` prints as `0.00`.
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return format!("{:.*}", COORD_DECIMALS, 0.0);
    }
    let scale = 10f64.powi(COORD_DECIMALS as i32);
    let mut rounded = (value * scale).round() / scale;
    if rounded == 0.0 {
        rounded = 0.0;
    }
    format!("{:.*}", COORD_DECIMALS, rounded)
}

fn push_point(out: &mut String, p: Point) {
    out.push_str(&format_number(p.x));
    out.push(' ');
    out.push_str(&format_number(p.y));
}
