// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Compound selectors: `tag`, `.class`, `tag.class`, `.a.b`.
//!
//! Combinators, ids, attributes and pseudo-classes are out of scope; parsing rejects them.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::str::FromStr;

use crate::error::SelectorError;
use crate::types::Element;

/// A parsed compound selector.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selector {
    tag: Option<String>,
    classes: Vec<String>,
}

impl Selector {
    /// Parse a selector string.
    pub fn parse(s: &str) -> Result<Self, SelectorError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(SelectorError::Empty);
        }
        let unsupported = || SelectorError::Unsupported(s.to_string());
        let mut parts = s.split('.');
        let tag = match parts.next() {
            Some("") => None,
            Some(t) if is_ident(t) => Some(t.to_string()),
            _ => return Err(unsupported()),
        };
        let mut classes = Vec::new();
        for c in parts {
            if !is_ident(c) {
                return Err(unsupported());
            }
            classes.push(c.to_string());
        }
        Ok(Self { tag, classes })
    }

    /// Selector matching a single class.
    pub fn class(name: &str) -> Self {
        Self {
            tag: None,
            classes: alloc::vec![name.to_string()],
        }
    }

    /// Selector matching a tag name.
    pub fn tag(name: &str) -> Self {
        Self {
            tag: Some(name.to_string()),
            classes: Vec::new(),
        }
    }

    /// Returns true if `element` matches every part of this selector.
    pub fn matches(&self, element: &Element) -> bool {
        if let Some(tag) = &self.tag
            && !element.is_tag(tag)
        {
            return false;
        }
        self.classes.iter().all(|c| element.has_class(c))
    }
}

impl FromStr for Selector {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn is_ident(s: &str) -> bool {
    !s.is_empty()
        && s
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_forms() {
        let s = Selector::parse(".slider-item").unwrap();
        assert_eq!(s, Selector::class("slider-item"));
        let s = Selector::parse("img").unwrap();
        assert_eq!(s, Selector::tag("img"));
        let s = Selector::parse("a.next.primary").unwrap();
        assert_eq!(s.tag.as_deref(), Some("a"));
        assert_eq!(s.classes.len(), 2);
    }

    #[test]
    fn parse_rejects_unsupported() {
        assert_eq!(Selector::parse("  "), Err(SelectorError::Empty));
        assert!(Selector::parse("#hero").is_err());
        assert!(Selector::parse(".a .b").is_err());
        assert!(Selector::parse("div > a").is_err());
        assert!(Selector::parse("a..b").is_err());
        assert!(Selector::parse(".").is_err());
    }

    #[test]
    fn matches_tag_and_classes() {
        let e = Element::new("A").with_class("next").with_class("primary");
        assert!(Selector::parse("a").unwrap().matches(&e));
        assert!(Selector::parse(".next").unwrap().matches(&e));
        assert!(Selector::parse("a.primary.next").unwrap().matches(&e));
        assert!(!Selector::parse("a.prev").unwrap().matches(&e));
        assert!(!Selector::parse("div").unwrap().matches(&e));
    }
}
