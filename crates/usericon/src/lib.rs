//! usericon - circular SVG avatar icons with initials.
//!
//! Given a display name, usericon derives up to two initials and a
//! deterministic background color from a fixed 26-color palette, and builds
//! a 48x48 SVG: a filled circle with the lowercased initials on top.
//!
//! This is the umbrella crate that re-exports the public APIs of
//! `usericon-core` and `usericon-render`.
//!
//! # Example
//!
//! ```
//! use usericon::prelude::*;
//!
//! let icon = IconGenerator::new().generate("jane-doe")?;
//! assert_eq!(icon.initials().as_str(), "jd");
//!
//! let markup = icon.to_svg_string()?;
//! assert!(markup.starts_with("<svg"));
//! # Ok::<(), usericon::Error>(())
//! ```
//!
//! # Mounting
//!
//! Generating an icon never touches a document. To place it, mount it into a
//! [`Document`] explicitly, or let [`IconGenerator::render`] decide:
//!
//! ```
//! use usericon::prelude::*;
//!
//! let mut document = Document::new();
//! document.create_element_with_id("div", "profile");
//!
//! let request = IconRequest::new("bob").with_mount("profile");
//! let output = IconGenerator::new().render(&request, &mut document)?;
//! assert!(output.is_mounted());
//! # Ok::<(), usericon::Error>(())
//! ```

pub mod document;
pub mod generator;
pub mod style;

mod error;

pub use document::{Document, ElementId};
pub use error::{Error, Result};
pub use generator::{
    CIRCLE_CENTER, CIRCLE_RADIUS, ICON_SIZE, IconGenerator, IconOutput, IconRequest, RenderedIcon,
};
pub use style::{IconStyle, TextPlacement};

pub use usericon_core::{
    ALPHABET, Color, ColorPalette, DELIMITERS, ErrorKind, Initials, alphabet_position,
    extract_initials, logging, select_color,
};

/// SVG trees, serialization and rasterization.
pub mod render {
    pub use usericon_render::*;
}

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::document::{Document, ElementId};
    pub use crate::generator::{IconGenerator, IconOutput, IconRequest, RenderedIcon};
    pub use crate::style::{IconStyle, TextPlacement};
    pub use usericon_core::{Color, ColorPalette, Initials};
    pub use usericon_render::SvgElement;
}
