//! A minimal in-memory display tree that icons can be mounted into.
//!
//! A [`Document`] holds host elements (a `<div>`, a `<span>`, ...) addressed
//! by [`ElementId`] handles. Host elements may carry a string identifier,
//! which is what mount targets are resolved against.
//!
//! # Example
//!
//! ```
//! use usericon::{Document, IconGenerator};
//!
//! let mut document = Document::new();
//! let slot = document.create_element_with_id("div", "avatar");
//!
//! let icon = IconGenerator::new().generate("bob")?;
//! document.mount("avatar", icon)?;
//!
//! assert_eq!(document.children(slot).unwrap().len(), 1);
//! # Ok::<(), usericon::Error>(())
//! ```

use std::collections::HashMap;

use slotmap::{SlotMap, new_key_type};
use tracing::{debug, debug_span};
use usericon_core::logging::{span_names, targets};
use usericon_render::SvgElement;

use crate::error::{Error, Result};
use crate::generator::RenderedIcon;

new_key_type! {
    /// A handle to a host element in a [`Document`].
    ///
    /// Handles stay valid until the element is removed.
    pub struct ElementId;
}

#[derive(Debug, Clone)]
struct HostElement {
    tag: String,
    dom_id: Option<String>,
    children: Vec<SvgElement>,
}

/// An in-memory document of host elements.
#[derive(Debug, Default)]
pub struct Document {
    elements: SlotMap<ElementId, HostElement>,
    /// Identifier lookup. The first element registered under an identifier
    /// wins, matching `getElementById`.
    ids: HashMap<String, ElementId>,
}

impl Document {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a host element without an identifier.
    pub fn create_element(&mut self, tag: impl Into<String>) -> ElementId {
        self.elements.insert(HostElement {
            tag: tag.into(),
            dom_id: None,
            children: Vec::new(),
        })
    }

    /// Create a host element with identifier `id`.
    pub fn create_element_with_id(
        &mut self,
        tag: impl Into<String>,
        id: impl Into<String>,
    ) -> ElementId {
        let id = id.into();
        let key = self.elements.insert(HostElement {
            tag: tag.into(),
            dom_id: Some(id.clone()),
            children: Vec::new(),
        });
        self.ids.entry(id).or_insert(key);
        key
    }

    /// Resolve an identifier to an element.
    pub fn get_element_by_id(&self, id: &str) -> Option<ElementId> {
        self.ids.get(id).copied()
    }

    /// Whether `element` is a live handle.
    pub fn contains(&self, element: ElementId) -> bool {
        self.elements.contains_key(element)
    }

    /// Append an SVG tree as the last child of `parent`.
    ///
    /// Returns the index of the new child.
    pub fn append_child(&mut self, parent: ElementId, child: SvgElement) -> Result<usize> {
        let host = self
            .elements
            .get_mut(parent)
            .ok_or(Error::InvalidElement)?;
        host.children.push(child);
        Ok(host.children.len() - 1)
    }

    /// Children of `element`, in append order.
    pub fn children(&self, element: ElementId) -> Option<&[SvgElement]> {
        self.elements.get(element).map(|host| host.children.as_slice())
    }

    /// Tag name of `element`.
    pub fn tag(&self, element: ElementId) -> Option<&str> {
        self.elements.get(element).map(|host| host.tag.as_str())
    }

    /// Identifier of `element`, if it has one.
    pub fn dom_id(&self, element: ElementId) -> Option<&str> {
        self.elements.get(element)?.dom_id.as_deref()
    }

    /// Remove `element` and its children. Returns false for a stale handle.
    pub fn remove_element(&mut self, element: ElementId) -> bool {
        let Some(host) = self.elements.remove(element) else {
            return false;
        };

        if let Some(id) = host.dom_id
            && self.ids.get(&id) == Some(&element)
        {
            self.ids.remove(&id);
            // Fall back to another element registered under the same id.
            let replacement = self
                .elements
                .iter()
                .find(|(_, other)| other.dom_id.as_deref() == Some(id.as_str()))
                .map(|(key, _)| key);
            if let Some(key) = replacement {
                self.ids.insert(id, key);
            }
        }
        true
    }

    /// Number of host elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether the document has no host elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Attach `icon` as the last child of the element with identifier
    /// `target_id`.
    ///
    /// # Arguments
    ///
    /// * `target_id` - Identifier of the host element, as given to
    ///   [`create_element_with_id`](Self::create_element_with_id)
    /// * `icon` - The icon to attach; its root `<svg>` becomes the child
    ///
    /// # Errors
    ///
    /// Returns [`Error::MountTargetNotFound`] if no element has that
    /// identifier. The error owns the icon, which
    /// [`Error::into_unmounted_icon`] gives back.
    ///
    /// # Example
    ///
    /// ```
    /// use usericon::{Document, IconGenerator};
    ///
    /// let mut document = Document::new();
    /// let icon = IconGenerator::new().generate("bob")?;
    ///
    /// let err = document.mount("missing", icon).unwrap_err();
    /// let icon = err.into_unmounted_icon().unwrap();
    /// assert_eq!(icon.initials().as_str(), "b");
    /// # Ok::<(), usericon::Error>(())
    /// ```
    pub fn mount(&mut self, target_id: &str, icon: RenderedIcon) -> Result<ElementId> {
        let _span = debug_span!(target: targets::DOCUMENT, span_names::MOUNT, target_id).entered();

        let Some(target) = self.get_element_by_id(target_id) else {
            return Err(Error::mount_target_not_found(target_id, icon));
        };
        let index = self.append_child(target, icon.into_element())?;

        debug!(target: targets::DOCUMENT, index, "mounted icon");
        Ok(target)
    }

    /// Serialize `element` and its children as markup.
    pub fn to_markup(&self, element: ElementId) -> Result<String> {
        let host = self.elements.get(element).ok_or(Error::InvalidElement)?;

        let mut node = SvgElement::new(host.tag.as_str());
        if let Some(id) = &host.dom_id {
            node.set_attribute("id", id.as_str());
        }
        for child in &host.children {
            node.append_child(child.clone());
        }
        Ok(node.to_svg_string()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::IconGenerator;

    #[test]
    fn test_create_and_lookup() {
        let mut document = Document::new();
        let plain = document.create_element("span");
        let named = document.create_element_with_id("div", "avatar");

        assert_eq!(document.len(), 2);
        assert_eq!(document.get_element_by_id("avatar"), Some(named));
        assert_eq!(document.get_element_by_id("missing"), None);
        assert_eq!(document.tag(plain), Some("span"));
        assert_eq!(document.dom_id(plain), None);
        assert_eq!(document.dom_id(named), Some("avatar"));
    }

    #[test]
    fn test_first_id_wins() {
        let mut document = Document::new();
        let first = document.create_element_with_id("div", "dup");
        let second = document.create_element_with_id("div", "dup");
        assert_eq!(document.get_element_by_id("dup"), Some(first));

        assert!(document.remove_element(first));
        assert_eq!(document.get_element_by_id("dup"), Some(second));

        assert!(document.remove_element(second));
        assert_eq!(document.get_element_by_id("dup"), None);
        assert!(document.is_empty());
    }

    #[test]
    fn test_stale_handle() {
        let mut document = Document::new();
        let el = document.create_element("div");
        assert!(document.remove_element(el));
        assert!(!document.remove_element(el));
        assert!(!document.contains(el));
        assert!(matches!(
            document.append_child(el, SvgElement::new("svg")),
            Err(Error::InvalidElement)
        ));
        assert!(document.children(el).is_none());
    }

    #[test]
    fn test_mount_appends_icon() {
        let mut document = Document::new();
        let target = document.create_element_with_id("div", "avatar");
        let icon = IconGenerator::new().generate("bob").unwrap();
        let expected = icon.root().clone();

        let mounted = document.mount("avatar", icon).unwrap();
        assert_eq!(mounted, target);

        let children = document.children(target).unwrap();
        assert_eq!(children.len(), 1);
        assert_eq!(children[0], expected);
    }

    #[test]
    fn test_mount_missing_target() {
        let mut document = Document::new();
        let icon = IconGenerator::new().generate("bob").unwrap();
        let err = document.mount("nowhere", icon).unwrap_err();
        assert!(matches!(err, Error::MountTargetNotFound { ref id, .. } if id == "nowhere"));
        assert_eq!(err.to_string(), "mount target 'nowhere' not found");
    }

    #[test]
    fn test_failed_mount_returns_icon() {
        let mut document = Document::new();
        let target = document.create_element_with_id("div", "avatar");
        let icon = IconGenerator::new().generate("jane-doe").unwrap();
        let expected = icon.clone();

        let err = document.mount("nowhere", icon).unwrap_err();
        let recovered = err.into_unmounted_icon().unwrap();
        assert_eq!(recovered, expected);

        // the same icon can still be mounted elsewhere
        assert_eq!(document.mount("avatar", recovered).unwrap(), target);
        assert_eq!(document.children(target).unwrap()[0], *expected.root());
    }

    #[test]
    fn test_other_errors_carry_no_icon() {
        assert!(Error::InvalidElement.into_unmounted_icon().is_none());
    }

    #[test]
    fn test_to_markup() {
        let mut document = Document::new();
        let target = document.create_element_with_id("div", "a");
        document
            .append_child(target, SvgElement::new("svg"))
            .unwrap();
        assert_eq!(
            document.to_markup(target).unwrap(),
            r#"<div id="a"><svg/></div>"#
        );
    }
}
