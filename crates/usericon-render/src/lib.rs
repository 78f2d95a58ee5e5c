//! SVG building and rendering for usericon.
//!
//! This crate provides the drawing side of an avatar icon:
//!
//! - [`SvgElement`]: an ordered, in-memory SVG element tree
//! - [`to_svg_string`]: serialization to markup with `quick-xml`
//! - [`SvgImage`]: rasterization to RGBA pixels or PNG with `resvg`
//!
//! # Example
//!
//! ```no_run
//! use usericon_render::{SvgElement, SvgImage, SVG_NAMESPACE};
//!
//! # fn example() -> usericon_render::RenderResult<()> {
//! let mut svg = SvgElement::new("svg")
//!     .with_attribute("xmlns", SVG_NAMESPACE)
//!     .with_attribute("width", "48")
//!     .with_attribute("height", "48");
//! svg.append_child(
//!     SvgElement::new("circle")
//!         .with_attribute("cx", "24")
//!         .with_attribute("cy", "24")
//!         .with_attribute("r", "23")
//!         .with_attribute("fill", "#69d2e7"),
//! );
//!
//! let markup = svg.to_svg_string()?;
//! let image = SvgImage::from_str(&markup)?;
//! image.save_png("circle.png", 96, 96)?;
//! # Ok(())
//! # }
//! ```

mod element;
mod error;
mod raster;
mod types;
mod writer;

pub use element::{SVG_NAMESPACE, SvgElement, SvgNode};
pub use error::{RenderError, RenderResult};
pub use raster::SvgImage;
pub use types::{Point, Size};
pub use writer::{to_svg_string, to_svg_string_pretty, write_element};
