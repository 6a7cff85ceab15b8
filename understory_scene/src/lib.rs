// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_scene --heading-base-level=0

//! Understory Scene: a Kurbo-native element tree for headless widgets.
//!
//! Widgets such as a carousel are usually written against a DOM: they look elements up by
//! selector, measure them, clone them, toggle classes, and write inline `transform` and
//! `transition` styles. This crate provides exactly that surface as plain data, so the widget
//! logic can live in Rust and be driven by any host (a browser binding, a GPU renderer, a test).
//!
//! - Elements carry a tag, a class list, attributes, local bounds, an inline [`Style`], a z-index
//!   and [`ElementFlags`].
//! - Structure mirrors the DOM calls widgets need: [`Scene::insert`], [`Scene::append_child`],
//!   [`Scene::insert_before`], [`Scene::deep_clone`], [`Scene::remove`].
//! - Lookups use compound [`Selector`]s (`tag`, `.class`, `tag.class`).
//! - [`Scene::hit_test_point`] resolves a world-space point to the topmost element, honoring
//!   inline transforms.
//! - [`Scene::commit`] drains a [`Damage`] list of mutated elements for incremental rendering.
//!
//! ## Not a layout engine
//!
//! Bounds are set by the host (or, for a single horizontal strip, by [`Scene::layout_row`]).
//! There is no cascade and no box model. Child bounds are expressed in the parent's space, and
//! an element's inline transform applies to itself and its subtree.
//!
//! ## Minimal usage
//!
//! ```
//! use kurbo::{Affine, Point, Rect, Vec2};
//! use understory_scene::{Element, QueryFilter, Scene, Selector};
//!
//! let mut scene = Scene::new();
//! let area = scene.insert(
//!     None,
//!     Element::new("div").with_bounds(Rect::new(0.0, 0.0, 300.0, 200.0)),
//! );
//! let track = scene.insert(Some(area), Element::new("ul").with_class("slider-view"));
//! for _ in 0..3 {
//!     scene.insert(
//!         Some(track),
//!         Element::new("li")
//!             .with_class("slider-item")
//!             .with_bounds(Rect::new(0.0, 0.0, 300.0, 200.0)),
//!     );
//! }
//! scene.layout_row(track);
//!
//! let items = scene.query_selector_all(None, &Selector::parse(".slider-item").unwrap());
//! assert_eq!(items.len(), 3);
//!
//! // Slide the strip one item to the left; the second item is now under the cursor.
//! scene.set_transform(track, Affine::translate(Vec2::new(-300.0, 0.0)));
//! let hit = scene.hit_test_point(Point::new(10.0, 10.0), QueryFilter::default()).unwrap();
//! assert_eq!(hit.node, items[1]);
//! assert_eq!(scene.style(track).unwrap().transform_css(), "translateX(-300px)");
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod damage;
mod error;
mod selector;
mod style;
mod tree;
mod types;

pub use damage::Damage;
pub use error::{EasingParseError, SelectorError};
pub use selector::Selector;
pub use style::{Easing, Style, Transition};
pub use tree::{Hit, QueryFilter, Scene};
pub use types::{Element, ElementFlags, NodeId};
