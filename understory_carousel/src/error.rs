// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors raised while building or loading a carousel.

use alloc::string::String;

use understory_scene::{EasingParseError, SelectorError};

/// Errors raised while building or loading a carousel.
///
/// Navigation itself never fails: intents that arrive while a move is running or before the
/// carousel is loaded are ignored.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CarouselError {
    /// A configured selector could not be parsed.
    #[error("invalid {role} selector")]
    Selector {
        /// Which element the selector locates (`area`, `view`, `item`).
        role: &'static str,
        /// Parse failure.
        #[source]
        source: SelectorError,
    },
    /// No live element fills a required role.
    #[error("no element for the {role} ({selector:?})")]
    MissingElement {
        /// Which element is missing.
        role: &'static str,
        /// The selector used, or a description of the handle that was passed in.
        selector: String,
    },
    /// The clone buffer reads slides `0`, `1`, `N-2` and `N-1`.
    #[error("a looping carousel needs at least {min} slides, found {found}")]
    TooFewSlides {
        /// Slides found.
        found: usize,
        /// Slides required.
        min: usize,
    },
    /// Slides must be children of the track so clones can be inserted around them.
    #[error("slides must be children of the track")]
    DetachedSlides,
    /// The first slide measured zero width, so no position can be computed.
    #[error("the first slide has no width; set its bounds before loading")]
    ZeroWidth,
    /// The configured easing is not a supported timing function.
    #[error(transparent)]
    Easing(#[from] EasingParseError),
    /// [`Carousel::image_loaded`](crate::Carousel::image_loaded) was called before
    /// [`Carousel::init`](crate::Carousel::init).
    #[error("carousel has not been initialized")]
    NotInitialized,
    /// Loading runs once per carousel.
    #[error("carousel is already loaded")]
    AlreadyLoaded,
}
