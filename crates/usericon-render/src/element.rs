//! In-memory SVG element trees.
//!
//! # Building a tree
//!
//! ```
//! use usericon_render::{SvgElement, SVG_NAMESPACE};
//!
//! let mut svg = SvgElement::new("svg");
//! svg.set_attribute("xmlns", SVG_NAMESPACE);
//! svg.set_attribute("width", "48");
//!
//! let mut circle = SvgElement::new("circle");
//! circle.set_attribute("r", "23");
//! svg.append_child(circle);
//!
//! assert_eq!(svg.child_elements().count(), 1);
//! assert_eq!(svg.attribute("width"), Some("48"));
//! ```

use std::fmt;

use crate::error::RenderResult;
use crate::writer;

/// The SVG XML namespace.
pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// A node in an SVG tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SvgNode {
    /// A child element.
    Element(SvgElement),
    /// Character data. Escaped when serialized.
    Text(String),
}

impl SvgNode {
    /// Returns this node as an element, if it is one.
    pub fn as_element(&self) -> Option<&SvgElement> {
        match self {
            SvgNode::Element(el) => Some(el),
            SvgNode::Text(_) => None,
        }
    }

    /// Returns the text of this node, if it is a text node.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            SvgNode::Text(t) => Some(t),
            SvgNode::Element(_) => None,
        }
    }
}

impl From<SvgElement> for SvgNode {
    fn from(element: SvgElement) -> Self {
        SvgNode::Element(element)
    }
}

impl From<&str> for SvgNode {
    fn from(text: &str) -> Self {
        SvgNode::Text(text.to_string())
    }
}

impl From<String> for SvgNode {
    fn from(text: String) -> Self {
        SvgNode::Text(text)
    }
}

/// An SVG element with ordered attributes and children.
///
/// Attribute order is preserved so serialized output is stable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SvgElement {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<SvgNode>,
}

impl SvgElement {
    /// Creates an element with no attributes or children.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// The tag name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Gets an attribute value.
    ///
    /// # Arguments
    ///
    /// * `name` - Attribute name, matched exactly (case-sensitive)
    ///
    /// # Example
    ///
    /// ```
    /// use usericon_render::SvgElement;
    ///
    /// let circle = SvgElement::new("circle").with_attribute("r", "23");
    /// assert_eq!(circle.attribute("r"), Some("23"));
    /// assert_eq!(circle.attribute("R"), None);
    /// ```
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Sets an attribute value.
    ///
    /// A new attribute is appended after the existing ones. Setting an
    /// attribute that already exists replaces its value without moving it,
    /// so serialized attribute order only depends on first insertion.
    ///
    /// # Arguments
    ///
    /// * `name` - Attribute name
    /// * `value` - Unescaped value; escaping happens on serialization
    ///
    /// # Example
    ///
    /// ```
    /// use usericon_render::SvgElement;
    ///
    /// let mut circle = SvgElement::new("circle");
    /// circle.set_attribute("cx", "12");
    /// circle.set_attribute("cy", "24");
    /// circle.set_attribute("cx", "24");
    ///
    /// let attrs: Vec<_> = circle.attributes().collect();
    /// assert_eq!(attrs, vec![("cx", "24"), ("cy", "24")]);
    /// ```
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(key, _)| *key == name) {
            Some((_, existing)) => *existing = value,
            None => self.attributes.push((name, value)),
        }
    }

    /// Builder-style [`set_attribute`](Self::set_attribute).
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attribute(name, value);
        self
    }

    /// Removes an attribute, returning its value if it was set.
    pub fn remove_attribute(&mut self, name: &str) -> Option<String> {
        let pos = self.attributes.iter().position(|(key, _)| key == name)?;
        Some(self.attributes.remove(pos).1)
    }

    /// Returns true if the element has the specified attribute.
    pub fn has_attribute(&self, name: &str) -> bool {
        self.attributes.iter().any(|(key, _)| key == name)
    }

    /// All attributes in insertion order.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// Appends a child node after the existing children.
    ///
    /// # Arguments
    ///
    /// * `child` - An [`SvgElement`], or a `&str`/`String` which becomes a
    ///   text node
    ///
    /// # Example
    ///
    /// ```
    /// use usericon_render::SvgElement;
    ///
    /// let mut text = SvgElement::new("text");
    /// text.append_child("jd");
    /// assert_eq!(text.text(), "jd");
    ///
    /// let mut svg = SvgElement::new("svg");
    /// svg.append_child(SvgElement::new("circle"));
    /// svg.append_child(text);
    /// assert_eq!(svg.children().len(), 2);
    /// ```
    pub fn append_child(&mut self, child: impl Into<SvgNode>) {
        self.children.push(child.into());
    }

    /// Appends a text node.
    pub fn append_text(&mut self, text: impl Into<String>) {
        self.children.push(SvgNode::Text(text.into()));
    }

    /// All child nodes.
    pub fn children(&self) -> &[SvgNode] {
        &self.children
    }

    /// Child elements, skipping text.
    pub fn child_elements(&self) -> impl Iterator<Item = &SvgElement> {
        self.children.iter().filter_map(SvgNode::as_element)
    }

    /// First direct child element with the given tag name.
    ///
    /// Only direct children are searched; text nodes are skipped.
    pub fn find_child(&self, name: &str) -> Option<&SvgElement> {
        self.child_elements().find(|el| el.name == name)
    }

    /// Concatenated text of the direct text children.
    ///
    /// Text inside child elements is not included. Returns an empty string
    /// for an element without text.
    pub fn text(&self) -> String {
        self.children.iter().filter_map(SvgNode::as_text).collect()
    }

    /// Serializes the element to compact SVG markup.
    ///
    /// Elements without children are written self-closing, and text and
    /// attribute values are escaped.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Write`](crate::RenderError::Write) if the XML
    /// writer fails or produces invalid UTF-8.
    ///
    /// # Example
    ///
    /// ```
    /// use usericon_render::SvgElement;
    ///
    /// let mut text = SvgElement::new("text").with_attribute("x", "50%");
    /// text.append_text("a<b");
    /// assert_eq!(text.to_svg_string()?, r#"<text x="50%">a&lt;b</text>"#);
    /// # Ok::<(), usericon_render::RenderError>(())
    /// ```
    pub fn to_svg_string(&self) -> RenderResult<String> {
        writer::to_svg_string(self)
    }

    /// Serializes the element to SVG markup indented by two spaces.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Write`](crate::RenderError::Write) if the XML
    /// writer fails.
    pub fn to_svg_string_pretty(&self) -> RenderResult<String> {
        writer::to_svg_string_pretty(self)
    }
}

impl fmt::Display for SvgElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let markup = self.to_svg_string().map_err(|_| fmt::Error)?;
        f.write_str(&markup)
    }
}
