//! Icon assembly.
//!
//! [`IconGenerator::generate`] is a pure computation: it derives the color
//! and initials for a name and builds a fresh [`RenderedIcon`]. Attaching the
//! result to a document is a separate step, see [`Document::mount`] and
//! [`IconGenerator::render`].

use std::path::Path;

use tracing::{debug, debug_span};
use usericon_core::logging::{span_names, targets};
use usericon_core::{Color, Initials, extract_initials, select_color};
use usericon_render::{Point, SVG_NAMESPACE, SvgElement, SvgImage};

use crate::document::{Document, ElementId};
use crate::error::{Error, Result};
use crate::style::IconStyle;

/// Width and height of the icon canvas.
pub const ICON_SIZE: u32 = 48;

/// Center of the background circle.
pub const CIRCLE_CENTER: Point = Point::new(24.0, 24.0);

/// Radius of the background circle.
pub const CIRCLE_RADIUS: f32 = 23.0;

/// A request for an icon: a display name and an optional mount target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconRequest {
    name: String,
    mount: Option<String>,
}

impl IconRequest {
    /// A request that returns the icon to the caller.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mount: None,
        }
    }

    /// Attach the icon to the element with identifier `id` when it exists.
    pub fn with_mount(mut self, id: impl Into<String>) -> Self {
        self.mount = Some(id.into());
        self
    }

    /// The display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The mount target identifier, if any.
    pub fn mount(&self) -> Option<&str> {
        self.mount.as_deref()
    }
}

/// A generated avatar: a 48x48 `<svg>` holding a circle and a text label.
///
/// The tree is read-only once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedIcon {
    root: SvgElement,
    color: Option<Color>,
    initials: Initials,
}

impl RenderedIcon {
    /// The root `<svg>` element.
    pub fn root(&self) -> &SvgElement {
        &self.root
    }

    /// The background `<circle>`.
    pub fn circle(&self) -> Option<&SvgElement> {
        self.root.find_child("circle")
    }

    /// The initials `<text>` label.
    pub fn label(&self) -> Option<&SvgElement> {
        self.root.find_child("text")
    }

    /// The background color, or `None` for an empty name.
    pub fn color(&self) -> Option<Color> {
        self.color
    }

    /// The lowercased initials shown on the label.
    pub fn initials(&self) -> &Initials {
        &self.initials
    }

    /// Serialize to compact SVG markup.
    ///
    /// Attributes keep their insertion order and childless elements are
    /// written self-closing.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`] wrapping `RenderError::Write` if the XML
    /// writer fails.
    ///
    /// # Example
    ///
    /// ```
    /// use usericon::IconGenerator;
    ///
    /// let icon = IconGenerator::new().generate("bob")?;
    /// let markup = icon.to_svg_string()?;
    /// assert!(markup.contains(r##"<circle cx="24" cy="24" r="23" fill="#fa6900"/>"##));
    /// # Ok::<(), usericon::Error>(())
    /// ```
    pub fn to_svg_string(&self) -> Result<String> {
        Ok(self.root.to_svg_string()?)
    }

    /// Serialize to SVG markup indented by two spaces per level.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`] if the XML writer fails.
    pub fn to_svg_string_pretty(&self) -> Result<String> {
        Ok(self.root.to_svg_string_pretty()?)
    }

    /// Rasterize to straight (non-premultiplied) RGBA pixels.
    ///
    /// The 48x48 canvas is scaled to fill the target size. The label is
    /// shaped with the system fonts; without any it is not drawn.
    ///
    /// # Arguments
    ///
    /// * `width` - Target width in pixels
    /// * `height` - Target height in pixels
    ///
    /// # Returns
    ///
    /// Row-major pixel data with length `width * height * 4`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`] wrapping:
    /// - `RenderError::InvalidDimensions` if either dimension is zero
    /// - `RenderError::Write` or `RenderError::Parse` if the icon cannot be
    ///   turned into a renderable document
    ///
    /// # Example
    ///
    /// ```
    /// use usericon::IconGenerator;
    ///
    /// let icon = IconGenerator::new().generate("bob")?;
    /// let rgba = icon.rasterize(96, 96)?;
    /// assert_eq!(rgba.len(), 96 * 96 * 4);
    /// assert!(icon.rasterize(0, 96).is_err());
    /// # Ok::<(), usericon::Error>(())
    /// ```
    pub fn rasterize(&self, width: u32, height: u32) -> Result<Vec<u8>> {
        Ok(self.to_image()?.render_to_rgba(width, height)?)
    }

    /// Rasterize and encode as PNG bytes.
    ///
    /// # Arguments
    ///
    /// * `width` - Image width in pixels
    /// * `height` - Image height in pixels
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`] wrapping:
    /// - `RenderError::InvalidDimensions` if either dimension is zero
    /// - `RenderError::Encode` if PNG encoding fails
    ///
    /// # Example
    ///
    /// ```
    /// use usericon::IconGenerator;
    ///
    /// let png = IconGenerator::new().generate("bob")?.to_png(48, 48)?;
    /// assert_eq!(&png[..4], &[0x89, b'P', b'N', b'G']);
    /// # Ok::<(), usericon::Error>(())
    /// ```
    pub fn to_png(&self, width: u32, height: u32) -> Result<Vec<u8>> {
        Ok(self.to_image()?.encode_png(width, height)?)
    }

    /// Rasterize and write a PNG file, replacing any existing file.
    ///
    /// # Arguments
    ///
    /// * `path` - Destination file; its directory must exist
    /// * `width` - Image width in pixels
    /// * `height` - Image height in pixels
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`] wrapping:
    /// - `RenderError::InvalidDimensions` if either dimension is zero
    /// - `RenderError::Encode` if PNG encoding fails
    /// - `RenderError::Io` with the offending path if the file cannot be
    ///   written
    ///
    /// # Example
    ///
    /// ```no_run
    /// use usericon::IconGenerator;
    ///
    /// IconGenerator::new().generate("jane-doe")?.save_png("jane.png", 96, 96)?;
    /// # Ok::<(), usericon::Error>(())
    /// ```
    pub fn save_png(&self, path: impl AsRef<Path>, width: u32, height: u32) -> Result<()> {
        Ok(self.to_image()?.save_png(path, width, height)?)
    }

    /// Consume the icon, returning the root element.
    pub fn into_element(self) -> SvgElement {
        self.root
    }

    fn to_image(&self) -> Result<SvgImage> {
        let _span = debug_span!(target: targets::GENERATOR, span_names::RASTERIZE).entered();
        let markup = self.root.to_svg_string()?;
        Ok(SvgImage::from_str(&markup)?)
    }
}

impl From<RenderedIcon> for SvgElement {
    fn from(icon: RenderedIcon) -> Self {
        icon.root
    }
}

/// What [`IconGenerator::render`] did with the icon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IconOutput {
    /// The icon was appended to the element with this handle.
    Mounted(ElementId),
    /// No mount target was requested or found; the icon is returned.
    Detached(RenderedIcon),
}

impl IconOutput {
    /// Whether the icon was attached to a document element.
    pub fn is_mounted(&self) -> bool {
        matches!(self, IconOutput::Mounted(_))
    }

    /// The detached icon, if it was not mounted.
    pub fn into_icon(self) -> Option<RenderedIcon> {
        match self {
            IconOutput::Detached(icon) => Some(icon),
            IconOutput::Mounted(_) => None,
        }
    }
}

/// Builds avatar icons from display names.
///
/// # Example
///
/// ```
/// use usericon::IconGenerator;
///
/// let icon = IconGenerator::new().generate("jane-doe")?;
/// assert_eq!(icon.initials().as_str(), "jd");
/// assert_eq!(icon.color().unwrap().to_hex(), "#ff6b6b");
/// # Ok::<(), usericon::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct IconGenerator {
    style: IconStyle,
}

impl IconGenerator {
    /// A generator with the default label style.
    pub fn new() -> Self {
        Self::default()
    }

    /// A generator with a custom label style.
    pub fn with_style(style: IconStyle) -> Self {
        Self { style }
    }

    /// The label style.
    pub fn style(&self) -> &IconStyle {
        &self.style
    }

    /// Build the icon for `name`.
    ///
    /// An empty name yields an icon with no circle fill and an empty label.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Core`] when the name has
    /// malformed delimiters (e.g. `"a-b-c"` or `"jane-"`).
    pub fn generate(&self, name: &str) -> Result<RenderedIcon> {
        let _span = debug_span!(
            target: targets::GENERATOR,
            span_names::GENERATE,
            name_len = name.len()
        )
        .entered();

        let color = select_color(name);
        let initials = extract_initials(name)?.to_lowercase();

        let size = ICON_SIZE.to_string();
        let mut svg = SvgElement::new("svg");
        svg.set_attribute("xmlns", SVG_NAMESPACE);
        svg.set_attribute("height", size.as_str());
        svg.set_attribute("width", size);

        let mut circle = SvgElement::new("circle");
        circle.set_attribute("cx", CIRCLE_CENTER.x.to_string());
        circle.set_attribute("cy", CIRCLE_CENTER.y.to_string());
        circle.set_attribute("r", CIRCLE_RADIUS.to_string());
        if let Some(color) = color {
            circle.set_attribute("fill", color.to_hex());
        }

        let mut text = SvgElement::new("text");
        self.style.placement.apply(&mut text, initials.len());
        text.set_attribute("style", self.style.css());
        text.set_attribute("fill", self.style.text_color.to_hex());
        if !initials.is_empty() {
            text.append_text(initials.as_str());
        }

        svg.append_child(circle);
        svg.append_child(text);

        debug!(
            target: targets::GENERATOR,
            initials = %initials,
            color = ?color.map(Color::to_hex),
            "generated icon"
        );

        Ok(RenderedIcon {
            root: svg,
            color,
            initials,
        })
    }

    /// Generate the icon for `request` and place it.
    ///
    /// When the request names a mount target that exists in `document`, the
    /// icon is appended to it and [`IconOutput::Mounted`] is returned.
    /// Otherwise the icon is handed back as [`IconOutput::Detached`]; a
    /// missing target is not an error here.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Core`] when the name has malformed delimiters, as
    /// [`generate`](Self::generate) does.
    pub fn render(&self, request: &IconRequest, document: &mut Document) -> Result<IconOutput> {
        let icon = self.generate(request.name())?;

        let Some(target) = request.mount() else {
            return Ok(IconOutput::Detached(icon));
        };

        match document.mount(target, icon) {
            Ok(id) => Ok(IconOutput::Mounted(id)),
            Err(Error::MountTargetNotFound { icon, .. }) => {
                debug!(
                    target: targets::DOCUMENT,
                    mount = target,
                    "mount target not found, returning icon"
                );
                Ok(IconOutput::Detached(*icon))
            }
            Err(err) => Err(err),
        }
    }
}

static_assertions::assert_impl_all!(RenderedIcon: Send, Sync);
static_assertions::assert_impl_all!(IconGenerator: Send, Sync);
