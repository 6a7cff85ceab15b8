// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types for parsing selectors and easing functions.

use alloc::string::String;

/// A selector string could not be parsed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SelectorError {
    /// The selector was empty or only whitespace.
    #[error("empty selector")]
    Empty,
    /// The selector used syntax outside `tag`, `.class` and `tag.class`.
    #[error("unsupported selector syntax in {0:?}")]
    Unsupported(String),
}

/// A CSS timing-function string could not be parsed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EasingParseError {
    /// Not a keyword or `cubic-bezier(..)` form this crate understands.
    #[error("unknown easing {0:?}")]
    Unknown(String),
    /// `cubic-bezier(..)` with the wrong arity, non-numeric values, or x outside `0..=1`.
    #[error("invalid cubic-bezier arguments in {0:?}")]
    InvalidCubicBezier(String),
}
