//! Rasterization of SVG documents to RGBA pixels and PNG.
//!
//! This module provides [`SvgImage`], which parses SVG markup with `usvg`
//! and renders it with `resvg` at any resolution.
//!
//! # Usage
//!
//! ```ignore
//! use usericon_render::SvgImage;
//!
//! let svg = SvgImage::from_str(&markup)?;
//! let rgba = svg.render_to_rgba(96, 96)?;
//! svg.save_png("avatar.png", 96, 96)?;
//! ```
//!
//! Text is shaped with the system fonts, which are loaded once per process.
//! On a machine without fonts the label is simply not drawn.

use std::io::Cursor;
use std::path::Path;
use std::sync::{Arc, OnceLock};

use resvg::tiny_skia;
use resvg::usvg;
use tracing::debug;

use crate::error::{RenderError, RenderResult};
use crate::types::Size;

/// Log target for rasterization events, the module path itself.
pub(crate) const LOG_TARGET: &str = module_path!();

static FONT_DATABASE: OnceLock<Arc<usvg::fontdb::Database>> = OnceLock::new();

fn font_database() -> Arc<usvg::fontdb::Database> {
    FONT_DATABASE
        .get_or_init(|| {
            let mut db = usvg::fontdb::Database::new();
            db.load_system_fonts();
            debug!(
                target: LOG_TARGET,
                faces = db.len(),
                "loaded system fonts"
            );
            Arc::new(db)
        })
        .clone()
}

/// A parsed SVG document that can be rendered at any resolution.
///
/// The parsed tree is shared behind an `Arc`, so clones are cheap.
#[derive(Clone)]
pub struct SvgImage {
    tree: Arc<usvg::Tree>,
    default_size: Size,
}

impl SvgImage {
    /// Parse SVG markup.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Parse`] if the SVG is invalid or malformed.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(markup: &str) -> RenderResult<Self> {
        Self::from_bytes(markup.as_bytes())
    }

    /// Parse SVG from raw bytes (UTF-8 XML).
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Parse`] if the SVG is invalid or malformed.
    pub fn from_bytes(data: &[u8]) -> RenderResult<Self> {
        let options = usvg::Options {
            fontdb: font_database(),
            ..usvg::Options::default()
        };

        let tree = usvg::Tree::from_data(data, &options)
            .map_err(|e| RenderError::Parse(e.to_string()))?;

        let size = tree.size();
        let default_size = Size::new(size.width(), size.height());

        Ok(Self {
            tree: Arc::new(tree),
            default_size,
        })
    }

    /// The natural size from the SVG's `width`/`height` or `viewBox`.
    pub fn natural_size(&self) -> Size {
        self.default_size
    }

    /// Render to straight (non-premultiplied) RGBA pixels.
    ///
    /// The result has length `width * height * 4`, row-major.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::InvalidDimensions`] if either dimension is zero.
    pub fn render_to_rgba(&self, width: u32, height: u32) -> RenderResult<Vec<u8>> {
        let mut pixmap = tiny_skia::Pixmap::new(width, height)
            .ok_or(RenderError::InvalidDimensions { width, height })?;

        let sx = width as f32 / self.default_size.width;
        let sy = height as f32 / self.default_size.height;
        let transform = tiny_skia::Transform::from_scale(sx, sy);

        resvg::render(&self.tree, transform, &mut pixmap.as_mut());

        debug!(
            target: LOG_TARGET,
            width,
            height,
            "rasterized svg"
        );

        let data = pixmap.data();
        let mut result = Vec::with_capacity(data.len());
        for chunk in data.chunks(4) {
            let a = chunk[3] as f32 / 255.0;
            if a > 0.0 {
                // Unpremultiply RGB
                result.push((chunk[0] as f32 / a).min(255.0) as u8);
                result.push((chunk[1] as f32 / a).min(255.0) as u8);
                result.push((chunk[2] as f32 / a).min(255.0) as u8);
                result.push(chunk[3]);
            } else {
                result.extend_from_slice(&[0, 0, 0, 0]);
            }
        }

        Ok(result)
    }

    /// Render at the natural size multiplied by `scale_factor`.
    ///
    /// Returns the pixels together with their dimensions.
    pub fn render_scaled(&self, scale_factor: f64) -> RenderResult<(Vec<u8>, u32, u32)> {
        let (width, height) = self.default_size.to_pixels(scale_factor);
        let rgba = self.render_to_rgba(width, height)?;
        Ok((rgba, width, height))
    }

    /// Render and encode as PNG bytes.
    pub fn encode_png(&self, width: u32, height: u32) -> RenderResult<Vec<u8>> {
        let rgba = self.render_to_rgba(width, height)?;
        let image = image::RgbaImage::from_raw(width, height, rgba)
            .ok_or(RenderError::InvalidDimensions { width, height })?;

        let mut bytes = Vec::new();
        image
            .write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
            .map_err(|e| RenderError::Encode(e.to_string()))?;
        Ok(bytes)
    }

    /// Render and write a PNG file.
    pub fn save_png(&self, path: impl AsRef<Path>, width: u32, height: u32) -> RenderResult<()> {
        let path = path.as_ref();
        let bytes = self.encode_png(width, height)?;
        std::fs::write(path, bytes).map_err(|source| RenderError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        debug!(
            target: LOG_TARGET,
            path = %path.display(),
            width,
            height,
            "saved png"
        );

        Ok(())
    }
}

impl std::fmt::Debug for SvgImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SvgImage")
            .field("natural_size", &self.default_size)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIMPLE_SVG: &str = r#"
        <svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24">
            <circle cx="12" cy="12" r="10" fill="red"/>
        </svg>
    "#;

    #[test]
    fn test_svg_from_str() {
        let svg = SvgImage::from_str(SIMPLE_SVG).expect("Should parse valid SVG");
        assert_eq!(svg.natural_size(), Size::new(24.0, 24.0));
    }

    #[test]
    fn test_svg_render_to_rgba() {
        let svg = SvgImage::from_str(SIMPLE_SVG).unwrap();
        let rgba = svg.render_to_rgba(48, 48).unwrap();
        assert_eq!(rgba.len(), 48 * 48 * 4);

        // Center pixel should be red (circle is at center)
        let center_idx = (24 * 48 + 24) * 4;
        assert!(rgba[center_idx] > 200, "Red channel should be high");
        assert!(rgba[center_idx + 1] < 50, "Green channel should be low");
        assert!(rgba[center_idx + 2] < 50, "Blue channel should be low");
        assert!(rgba[center_idx + 3] > 200, "Alpha should be opaque");

        // Corner is outside the circle
        assert_eq!(&rgba[0..4], &[0, 0, 0, 0]);
    }

    #[test]
    fn test_svg_render_zero_size() {
        let svg = SvgImage::from_str(SIMPLE_SVG).unwrap();
        let err = svg.render_to_rgba(0, 10).unwrap_err();
        assert!(matches!(
            err,
            RenderError::InvalidDimensions {
                width: 0,
                height: 10
            }
        ));
    }

    #[test]
    fn test_svg_render_scaled() {
        let svg = SvgImage::from_str(SIMPLE_SVG).unwrap();
        let (rgba, width, height) = svg.render_scaled(2.0).unwrap();
        assert_eq!((width, height), (48, 48));
        assert_eq!(rgba.len(), 48 * 48 * 4);
    }

    #[test]
    fn test_svg_encode_png() {
        let svg = SvgImage::from_str(SIMPLE_SVG).unwrap();
        let png = svg.encode_png(24, 24).unwrap();
        assert_eq!(&png[..4], &[0x89, b'P', b'N', b'G']);
    }

    #[test]
    fn test_log_target_matches_module_path() {
        assert_eq!(LOG_TARGET, "usericon_render::raster");
        assert!(module_path!().starts_with(LOG_TARGET));
    }

    #[test]
    fn test_svg_invalid_data() {
        let result = SvgImage::from_bytes(b"not valid svg");
        assert!(matches!(result, Err(RenderError::Parse(_))));
    }
}
