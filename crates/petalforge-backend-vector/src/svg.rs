//! SVG document output.

use std::fmt::Write as _;

use petalforge_spec::ParameterSet;

use crate::generate::generate_curves;
use crate::geometry::Curve;
use crate::path::{build_paths, format_number, Path};
use crate::style::curve_styles;

/// Serializes styled paths into a standalone SVG document.
///
/// `paths[i]` is drawn with the style of `curves[i]`; extra entries on either
/// side are ignored. Output is byte-identical for identical inputs.
pub fn render_svg(paths: &[Path], curves: &[Curve], params: &ParameterSet, size: f64) -> String {
    let size = if size.is_finite() && size > 0.0 { size } else { 0.0 };
    let dim = format_number(size);
    let center = format_number(size / 2.0);
    let stroke = params.line_color.to_hex_rgb();
    let line_alpha = params.line_color.alpha_f64();
    let styles = curve_styles(curves, params);

    let mut out = String::with_capacity(256 + paths.len() * 2048);
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{dim}" height="{dim}" viewBox="0 0 {dim} {dim}">"#
    );
    let _ = write!(
        out,
        r#"  <rect width="100%" height="100%" fill="{}""#,
        params.background_color.to_hex_rgb()
    );
    if params.background_color.a < 255 {
        let _ = write!(
            out,
            r#" fill-opacity="{}""#,
            format_number(params.background_color.alpha_f64())
        );
    }
    out.push_str("/>\n");

    for (path, style) in paths.iter().zip(&styles) {
        if path.is_empty() {
            continue;
        }
        let _ = write!(
            out,
            r#"  <path d="{}" fill="none" stroke="{}" stroke-width="{}" stroke-opacity="{}" stroke-linecap="round" stroke-linejoin="round""#,
            path.to_svg_d(),
            stroke,
            format_number(style.width),
            format_number(style.opacity * line_alpha),
        );
        if style.rotation_deg != 0.0 {
            let _ = write!(
                out,
                r#" transform="rotate({} {} {})""#,
                format_number(style.rotation_deg),
                center,
                center
            );
        }
        out.push_str("/>\n");
    }

    out.push_str("</svg>\n");
    out
}

/// Generates, builds and serializes the settled logo for `params`.
pub fn render_params_svg(params: &ParameterSet, size: f64) -> String {
    let curves = generate_curves(params, size);
    let paths = build_paths(&curves);
    render_svg(&paths, &curves, params, size)
}
