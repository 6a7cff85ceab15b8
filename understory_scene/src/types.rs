// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the scene: node identifiers, flags, and element data.

use alloc::string::String;
use alloc::vec::Vec;
use kurbo::Rect;

use crate::style::Style;

/// Identifier for a node in the scene.
///
/// This is a small, copyable handle that stays stable across updates but becomes
/// invalid when the underlying slot is reused.
/// It consists of a slot index and a generation counter.
///
/// ## Semantics
///
/// - On insert, a fresh slot is allocated with generation `1`.
/// - On remove, the slot is freed; any existing `NodeId` that pointed to that slot is now stale.
/// - On reuse of a freed slot, its generation is incremented, producing a new, distinct `NodeId`.
///
/// Use [`Scene::is_alive`](crate::Scene::is_alive) to check whether a `NodeId` still refers to a
/// live node. Stale `NodeId`s never alias a different live node because the generation must match.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct NodeId(pub(crate) u32, pub(crate) u32);

impl NodeId {
    pub(crate) const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }
}

bitflags::bitflags! {
    /// Element flags controlling visibility and picking.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ElementFlags: u8 {
        /// Element is visible (participates in rendering).
        const VISIBLE  = 0b0000_0001;
        /// Element is pickable (participates in hit testing).
        const PICKABLE = 0b0000_0010;
    }
}

impl Default for ElementFlags {
    fn default() -> Self {
        Self::VISIBLE | Self::PICKABLE
    }
}

/// Data carried by one element of the scene.
///
/// Tags and class names are matched ASCII case-insensitively by
/// [`Selector`](crate::Selector).
#[derive(Clone, Debug, PartialEq)]
pub struct Element {
    /// Tag name, e.g. `div`, `a`, `img`.
    pub tag: String,
    /// Class list in insertion order, without duplicates.
    pub classes: Vec<String>,
    /// Attributes such as `src` or `href`, in insertion order.
    pub attributes: Vec<(String, String)>,
    /// Local (untransformed) bounds in parent space.
    pub local_bounds: Rect,
    /// Inline style.
    pub style: Style,
    /// Z-order among siblings. Higher is drawn on top.
    pub z_index: i32,
    /// Visibility and picking flags.
    pub flags: ElementFlags,
}

impl Element {
    /// Create an element with the given tag and default everything else.
    pub fn new(tag: &str) -> Self {
        Self {
            tag: String::from(tag),
            classes: Vec::new(),
            attributes: Vec::new(),
            local_bounds: Rect::ZERO,
            style: Style::default(),
            z_index: 0,
            flags: ElementFlags::default(),
        }
    }

    /// Builder: add a class name.
    #[must_use]
    pub fn with_class(mut self, class: &str) -> Self {
        self.add_class(class);
        self
    }

    /// Builder: set an attribute.
    #[must_use]
    pub fn with_attribute(mut self, name: &str, value: &str) -> Self {
        self.set_attribute(name, value);
        self
    }

    /// Builder: set local bounds.
    #[must_use]
    pub fn with_bounds(mut self, bounds: Rect) -> Self {
        self.local_bounds = bounds;
        self
    }

    /// Returns true if the class list contains `class`.
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c.eq_ignore_ascii_case(class))
    }

    /// Add `class` if absent. Returns true if the list changed.
    pub fn add_class(&mut self, class: &str) -> bool {
        if self.has_class(class) {
            return false;
        }
        self.classes.push(String::from(class));
        true
    }

    /// Remove `class` if present. Returns true if the list changed.
    pub fn remove_class(&mut self, class: &str) -> bool {
        let before = self.classes.len();
        self.classes.retain(|c| !c.eq_ignore_ascii_case(class));
        self.classes.len() != before
    }

    /// Look up an attribute value.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Set or replace an attribute value.
    pub fn set_attribute(&mut self, name: &str, value: &str) {
        match self
            .attributes
            .iter_mut()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
        {
            Some((_, v)) => *v = String::from(value),
            None => self
                .attributes
                .push((String::from(name), String::from(value))),
        }
    }

    /// Returns true if the tag matches `tag`.
    pub fn is_tag(&self, tag: &str) -> bool {
        self.tag.eq_ignore_ascii_case(tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_list_has_no_duplicates() {
        let mut e = Element::new("a").with_class("dot");
        assert!(!e.add_class("dot"));
        assert!(e.add_class("current"));
        assert_eq!(e.classes.len(), 2);
        assert!(e.remove_class("current"));
        assert!(!e.remove_class("current"));
        assert!(e.has_class("DOT"));
    }

    #[test]
    fn attributes_replace_in_place() {
        let mut e = Element::new("img").with_attribute("src", "./img/01.jpg");
        e.set_attribute("src", "./img/02.jpg");
        assert_eq!(e.attribute("src"), Some("./img/02.jpg"));
        assert_eq!(e.attributes.len(), 1);
        assert_eq!(e.attribute("href"), None);
    }
}
