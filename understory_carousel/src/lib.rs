// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_carousel --heading-base-level=0

//! Understory Carousel: a headless, looping image carousel.
//!
//! ## Overview
//!
//! A carousel shows one slide at a time from a horizontal strip (the track) inside a visible
//! area, and moves between slides with an animated translation. It loops: "next" from the last
//! slide goes to the first and "prev" from the first goes to the last, always animating in the
//! direction of travel.
//!
//! The loop is built from a clone buffer. After loading, the track holds
//! `[clone(N-2), clone(N-1), slide 0 .. slide N-1, clone(0), clone(1)]`. Stepping past an end
//! animates onto a clone; when the move completes the track snaps, without animation, to the
//! real slide showing the same content.
//!
//! ## Pieces
//!
//! - [`LoopIndex`]: current/next index arithmetic and the wrap rule.
//! - [`TrackGeometry`]: the translation that centers a slide in the area.
//! - [`Pager`] and [`Indicator`]: controls that publish [`CarouselEvent`]s through an
//!   [`understory_dispatch`] event dispatcher.
//! - [`Carousel`]: the controller. It owns an [`understory_scene::Scene`], mounts the controls,
//!   turns their events into moves and ignores input while a move is running.
//!
//! The host drives time. Input ([`Carousel::click`], [`Carousel::navigate`]) carries a monotonic
//! timestamp, and while [`Carousel::next_deadline`] is `Some` the host calls [`Carousel::tick`]
//! each frame; moves end and wraps snap when their timers come due. Hosts that observe real
//! transitions can choose [`Completion::TransitionEnd`] and report [`Carousel::transition_end`]
//! instead.
//!
//! ## Minimal usage
//!
//! ```
//! use core::time::Duration;
//! use kurbo::Rect;
//! use understory_carousel::{Carousel, CarouselConfig, InitStatus};
//! use understory_scene::{Element, Scene};
//!
//! let mut scene = Scene::new();
//! let area = scene.insert(
//!     None,
//!     Element::new("div")
//!         .with_class("slider-content")
//!         .with_bounds(Rect::new(0.0, 0.0, 900.0, 300.0)),
//! );
//! let track = scene.insert(Some(area), Element::new("ul").with_class("slider-view"));
//! for _ in 0..5 {
//!     scene.insert(
//!         Some(track),
//!         Element::new("li")
//!             .with_class("slider-item")
//!             .with_bounds(Rect::new(0.0, 0.0, 300.0, 300.0)),
//!     );
//! }
//!
//! let mut carousel = Carousel::new(scene, CarouselConfig::default()).unwrap();
//! assert_eq!(carousel.init().unwrap(), InitStatus::Loaded);
//! // Slide 0 sits in the middle of the 900 px area.
//! assert_eq!(carousel.offset_at(Duration::ZERO), -300.0);
//!
//! // Click "prev": the track animates onto the clone of slide 4 ...
//! let (prev, _next) = carousel.pager_controls().unwrap();
//! assert!(carousel.click(prev, Duration::ZERO));
//! assert_eq!(carousel.next_index(), -1);
//!
//! // ... and snaps onto the real slide 4 once the 600 ms move is over.
//! carousel.tick(Duration::from_millis(600));
//! assert_eq!(carousel.current_index(), 4);
//! assert_eq!(carousel.offset_at(Duration::from_millis(600)), -1500.0);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod carousel;
mod config;
mod error;
mod event;
mod geometry;
mod index;
mod indicator;
mod pager;
mod timer;

pub use carousel::{Carousel, CarouselElements, InitStatus, MIN_SLIDES};
pub use config::{CarouselConfig, Completion, DEFAULT_DURATION};
pub use error::CarouselError;
pub use event::CarouselEvent;
pub use geometry::{CLONE_PADDING, TrackGeometry, diff_width, next_position};
pub use index::{Direction, LoopIndex};
pub use indicator::{CURRENT_CLASS, Indicator, mark_current};
pub use pager::Pager;
