//! File export of a rendered frame.

use std::path::Path as FsPath;

use log::info;
use petalforge_spec::ParameterSet;

use crate::error::RenderError;
use crate::geometry::Curve;
use crate::path::Path;
use crate::png::{self, PngConfig};
use crate::raster::rasterize;
use crate::svg::render_svg;

/// Output format, chosen from the file extension when not given.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Svg,
    Png,
}

impl ExportFormat {
    /// Format for `path`'s extension (case-insensitive), if recognized.
    pub fn from_path(path: &FsPath) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "svg" => Some(ExportFormat::Svg),
            "png" => Some(ExportFormat::Png),
            _ => None,
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Svg => "svg",
            ExportFormat::Png => "png",
        }
    }
}

/// A frame ready for export: paths with the curves they style from.
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    pub paths: &'a [Path],
    pub curves: &'a [Curve],
    pub params: &'a ParameterSet,
    pub size: f64,
}

/// Writes the frame as an SVG document. Returns bytes written.
pub fn export_svg(frame: &Frame<'_>, out: &FsPath) -> Result<u64, RenderError> {
    let svg = render_svg(frame.paths, frame.curves, frame.params, frame.size);
    std::fs::write(out, svg.as_bytes())?;
    info!("wrote {} ({} bytes)", out.display(), svg.len());
    Ok(svg.len() as u64)
}

/// Rasterizes the frame at `scale` and writes it as PNG. Returns bytes written.
pub fn export_png(frame: &Frame<'_>, scale: f64, out: &FsPath) -> Result<u64, RenderError> {
    let image = rasterize(frame.paths, frame.curves, frame.params, frame.size, scale)?;
    let (data, hash) = png::write_rgba_to_vec_with_hash(&image, &PngConfig::default())?;
    std::fs::write(out, &data)?;
    info!(
        "wrote {} ({}x{}, {} bytes, blake3 {})",
        out.display(),
        image.width,
        image.height,
        data.len(),
        &hash[..12]
    );
    Ok(data.len() as u64)
}

/// Writes the frame in `format`.
pub fn export(
    frame: &Frame<'_>,
    format: ExportFormat,
    scale: f64,
    out: &FsPath,
) -> Result<u64, RenderError> {
    match format {
        ExportFormat::Svg => export_svg(frame, out),
        ExportFormat::Png => export_png(frame, scale, out),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::generate_curves;
    use crate::path::build_paths;
    use std::path::PathBuf;

    #[test]
    fn test_format_from_path() {
        assert_eq!(
            ExportFormat::from_path(&PathBuf::from("logo.SVG")),
            Some(ExportFormat::Svg)
        );
        assert_eq!(
            ExportFormat::from_path(&PathBuf::from("a/b/logo.png")),
            Some(ExportFormat::Png)
        );
        assert_eq!(ExportFormat::from_path(&PathBuf::from("logo.jpg")), None);
        assert_eq!(ExportFormat::from_path(&PathBuf::from("logo")), None);
    }

    #[test]
    fn test_export_both_formats() {
        let dir = tempfile::tempdir().unwrap();
        let params = ParameterSet::default();
        let curves = generate_curves(&params, 64.0);
        let paths = build_paths(&curves);
        let frame = Frame {
            paths: &paths,
            curves: &curves,
            params: &params,
            size: 64.0,
        };

        let svg_path = dir.path().join("logo.svg");
        let written = export(&frame, ExportFormat::Svg, 1.0, &svg_path).unwrap();
        assert_eq!(std::fs::metadata(&svg_path).unwrap().len(), written);

        let png_path = dir.path().join("logo.png");
        let written = export(&frame, ExportFormat::Png, 2.0, &png_path).unwrap();
        assert_eq!(std::fs::metadata(&png_path).unwrap().len(), written);
    }

    #[test]
    fn test_bad_scale_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let params = ParameterSet::default();
        let frame = Frame {
            paths: &[],
            curves: &[],
            params: &params,
            size: 64.0,
        };
        let out = dir.path().join("logo.png");
        assert!(export_png(&frame, 100.0, &out).is_err());
        assert!(!out.exists());
    }
}
