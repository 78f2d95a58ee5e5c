//! SVG serialization on top of `quick-xml`.

use std::io::Write;

use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};

use crate::element::{SvgElement, SvgNode};
use crate::error::{RenderError, RenderResult};

/// Serializes `element` to compact markup.
///
/// Elements without children are written self-closing; text and attribute
/// values are XML-escaped.
pub fn to_svg_string(element: &SvgElement) -> RenderResult<String> {
    let mut writer = Writer::new(Vec::new());
    write_element(&mut writer, element)?;
    into_string(writer.into_inner())
}

/// Serializes `element` with two-space indentation.
pub fn to_svg_string_pretty(element: &SvgElement) -> RenderResult<String> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
    write_element(&mut writer, element)?;
    into_string(writer.into_inner())
}

/// Writes `element` and its subtree to `writer`.
pub fn write_element<W: Write>(writer: &mut Writer<W>, element: &SvgElement) -> RenderResult<()> {
    let mut start = BytesStart::new(element.name());
    for attribute in element.attributes() {
        start.push_attribute(attribute);
    }

    if element.children().is_empty() {
        return write_event(writer, Event::Empty(start));
    }

    write_event(writer, Event::Start(start))?;
    for child in element.children() {
        match child {
            SvgNode::Element(el) => write_element(writer, el)?,
            SvgNode::Text(text) => write_event(writer, Event::Text(BytesText::new(text)))?,
        }
    }
    write_event(writer, Event::End(BytesEnd::new(element.name())))
}

fn write_event<W: Write>(writer: &mut Writer<W>, event: Event<'_>) -> RenderResult<()> {
    writer
        .write_event(event)
        .map_err(|e| RenderError::Write(e.to_string()))
}

fn into_string(bytes: Vec<u8>) -> RenderResult<String> {
    String::from_utf8(bytes).map_err(|e| RenderError::Write(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_element_self_closes() {
        let el = SvgElement::new("circle")
            .with_attribute("cx", "24")
            .with_attribute("r", "23");
        assert_eq!(to_svg_string(&el).unwrap(), r#"<circle cx="24" r="23"/>"#);
    }

    #[test]
    fn test_nested_elements() {
        let mut text = SvgElement::new("text").with_attribute("fill", "#ffffff");
        text.append_text("jd");
        let mut svg = SvgElement::new("svg").with_attribute("width", "48");
        svg.append_child(SvgElement::new("circle"));
        svg.append_child(text);

        assert_eq!(
            to_svg_string(&svg).unwrap(),
            r##"<svg width="48"><circle/><text fill="#ffffff">jd</text></svg>"##
        );
    }

    #[test]
    fn test_text_and_attributes_escaped() {
        let mut text = SvgElement::new("text").with_attribute("data-name", "a\"b");
        text.append_text("<&>");
        let markup = to_svg_string(&text).unwrap();
        assert_eq!(markup, r#"<text data-name="a&quot;b">&lt;&amp;&gt;</text>"#);
    }

    #[test]
    fn test_pretty_output_is_indented() {
        let mut svg = SvgElement::new("svg");
        svg.append_child(SvgElement::new("circle"));
        let pretty = to_svg_string_pretty(&svg).unwrap();
        assert!(pretty.contains("\n  <circle/>"));
    }
}
