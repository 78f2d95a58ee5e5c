//! Integration tests for building, writing and rasterizing SVG trees.

use usericon_render::{RenderError, SVG_NAMESPACE, SvgElement, SvgImage};

fn square_with_circle(fill: &str) -> SvgElement {
    let mut svg = SvgElement::new("svg")
        .with_attribute("xmlns", SVG_NAMESPACE)
        .with_attribute("width", "48")
        .with_attribute("height", "48");
    svg.append_child(
        SvgElement::new("circle")
            .with_attribute("cx", "24")
            .with_attribute("cy", "24")
            .with_attribute("r", "23")
            .with_attribute("fill", fill),
    );
    svg
}

#[test]
fn test_written_markup_parses_back() {
    let markup = square_with_circle("#0b486b").to_svg_string().unwrap();
    let image = SvgImage::from_str(&markup).unwrap();
    let size = image.natural_size();
    assert_eq!(size.width, 48.0);
    assert_eq!(size.height, 48.0);
}

#[test]
fn test_rasterized_fill_color() {
    let markup = square_with_circle("#0b486b").to_svg_string().unwrap();
    let image = SvgImage::from_str(&markup).unwrap();
    let rgba = image.render_to_rgba(48, 48).unwrap();

    let idx = (24 * 48 + 24) * 4;
    let pixel = &rgba[idx..idx + 4];
    assert!(pixel[0].abs_diff(0x0b) <= 2);
    assert!(pixel[1].abs_diff(0x48) <= 2);
    assert!(pixel[2].abs_diff(0x6b) <= 2);
    assert_eq!(pixel[3], 255);
}

#[test]
fn test_save_png_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("circle.png");

    let markup = square_with_circle("#f38630").to_svg_string().unwrap();
    SvgImage::from_str(&markup)
        .unwrap()
        .save_png(&path, 96, 96)
        .unwrap();

    let bytes = std::fs::read(&path).unwrap();
    assert!(bytes.starts_with(&[0x89, b'P', b'N', b'G']));
}

#[test]
fn test_save_png_missing_directory() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("circle.png");

    let markup = square_with_circle("#f38630").to_svg_string().unwrap();
    let err = SvgImage::from_str(&markup)
        .unwrap()
        .save_png(&path, 48, 48)
        .unwrap_err();
    assert!(matches!(err, RenderError::Io { .. }));
}
