//! Anti-aliased raster rendering of stroked paths.
//!
//! Paths go through `kurbo` into `tiny-skia`, which strokes them with round
//! caps and joins. Each stroke is rotated about the canvas center by its
//! style, then scaled to pixels.

use kurbo::{BezPath, PathEl};
use log::debug;
use petalforge_spec::{Color, ParameterSet};
use tiny_skia::{LineCap, LineJoin, Paint, Pixmap, Stroke, Transform};

use crate::error::RenderError;
use crate::geometry::Curve;
use crate::path::Path;
use crate::style::curve_styles;

/// Largest accepted resolution multiplier.
pub const MAX_SCALE: f64 = 16.0;

/// Largest accepted canvas edge in pixels.
pub const MAX_DIMENSION: u32 = 8192;

/// An RGBA8 image with straight (non-premultiplied) alpha, row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct RgbaImage {
    pub width: u32,
    pub height: u32,
    data: Vec<u8>,
}

impl RgbaImage {
    /// Creates an image filled with `fill`.
    pub fn new(width: u32, height: u32, fill: Color) -> Self {
        let pixels = width as usize * height as usize;
        Self {
            width,
            height,
            data: [fill.r, fill.g, fill.b, fill.a].repeat(pixels),
        }
    }

    #[inline]
    pub fn get(&self, x: u32, y: u32) -> [u8; 4] {
        let i = self.index(x, y);
        [self.data[i], self.data[i + 1], self.data[i + 2], self.data[i + 3]]
    }

    #[inline]
    pub fn set(&mut self, x: u32, y: u32, rgba: [u8; 4]) {
        let i = self.index(x, y);
        self.data[i..i + 4].copy_from_slice(&rgba);
    }

    /// Raw RGBA8 bytes.
    pub fn as_rgba8(&self) -> &[u8] {
        &self.data
    }

    fn from_pixmap(pixmap: &Pixmap) -> Self {
        let mut data = Vec::with_capacity(pixmap.data().len());
        for px in pixmap.pixels() {
            let c = px.demultiply();
            data.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
        }
        Self {
            width: pixmap.width(),
            height: pixmap.height(),
            data,
        }
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * 4
    }
}

/// Canvas edge in pixels for `size` at `scale`.
///
/// Fails if `scale` is outside `(0, MAX_SCALE]`, `size` is not positive, or
/// the result would exceed [`MAX_DIMENSION`].
pub fn canvas_dimension(size: f64, scale: f64) -> Result<u32, RenderError> {
    if !scale.is_finite() || scale <= 0.0 || scale > MAX_SCALE {
        return Err(RenderError::InvalidParameter(format!(
            "scale must be in (0, {}], got {}",
            MAX_SCALE, scale
        )));
    }
    if !size.is_finite() || size <= 0.0 {
        return Err(RenderError::InvalidParameter(format!(
            "size must be positive, got {}",
            size
        )));
    }
    let pixels = (size * scale).ceil();
    if pixels > MAX_DIMENSION as f64 {
        return Err(RenderError::InvalidParameter(format!(
            "canvas of {} px exceeds the {} px limit",
            pixels, MAX_DIMENSION
        )));
    }
    Ok(pixels.max(1.0) as u32)
}

/// Renders `paths` (styled from `curves` and `params`) onto a square canvas.
///
/// # Arguments
/// * `paths` - One path per curve, in the same order as `curves`
/// * `curves` - Curves the paths were built from (used for styling)
/// * `params` - Colors, stroke width, opacity and rotation settings
/// * `size` - Logical canvas edge
/// * `scale` - Pixels per logical unit
pub fn rasterize(
    paths: &[Path],
    curves: &[Curve],
    params: &ParameterSet,
    size: f64,
    scale: f64,
) -> Result<RgbaImage, RenderError> {
    if paths.len() != curves.len() {
        return Err(RenderError::InvalidParameter(format!(
            "{} paths for {} curves",
            paths.len(),
            curves.len()
        )));
    }
    let dim = canvas_dimension(size, scale)?;
    let mut pixmap = Pixmap::new(dim, dim).ok_or_else(|| {
        RenderError::InvalidParameter(format!("cannot allocate {}x{} canvas", dim, dim))
    })?;
    pixmap.fill(skia_color(params.background_color, 1.0));

    let center = (size / 2.0) as f32;
    let styles = curve_styles(curves, params);
    let mut stroked = 0usize;

    for (path, style) in paths.iter().zip(&styles) {
        // A lone MoveTo has no segments to stroke.
        let Some(shape) = to_skia_path(&path.to_bez_path()) else {
            continue;
        };
        let mut paint = Paint::default();
        paint.set_color(skia_color(style.color, style.opacity));
        paint.anti_alias = true;

        let stroke = Stroke {
            width: style.width as f32,
            line_cap: LineCap::Round,
            line_join: LineJoin::Round,
            ..Stroke::default()
        };
        let transform = Transform::from_rotate_at(style.rotation_deg as f32, center, center)
            .post_scale(scale as f32, scale as f32);

        pixmap.stroke_path(&shape, &paint, &stroke, transform, None);
        stroked += 1;
    }

    debug!(
        "rasterized {} of {} paths onto {}x{} canvas",
        stroked,
        paths.len(),
        dim,
        dim
    );
    Ok(RgbaImage::from_pixmap(&pixmap))
}

fn skia_color(color: Color, opacity: f64) -> tiny_skia::Color {
    let mut c = tiny_skia::Color::from_rgba8(color.r, color.g, color.b, color.a);
    c.apply_opacity(opacity.clamp(0.0, 1.0) as f32);
    c
}

fn to_skia_path(bez: &BezPath) -> Option<tiny_skia::Path> {
    let mut pb = tiny_skia::PathBuilder::new();
    for el in bez.elements() {
        match *el {
            PathEl::MoveTo(p) => pb.move_to(p.x as f32, p.y as f32),
            PathEl::LineTo(p) => pb.line_to(p.x as f32, p.y as f32),
            PathEl::QuadTo(c, p) => pb.quad_to(c.x as f32, c.y as f32, p.x as f32, p.y as f32),
            PathEl::CurveTo(c1, c2, p) => pb.cubic_to(
                c1.x as f32,
                c1.y as f32,
                c2.x as f32,
                c2.y as f32,
                p.x as f32,
                p.y as f32,
            ),
            PathEl::ClosePath => pb.close(),
        }
    }
    pb.finish()
}
