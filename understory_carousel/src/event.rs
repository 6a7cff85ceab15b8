// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// Events published by the carousel's pager and indicator.
///
/// The payload type shared by all carousel events is `usize`; only
/// [`CarouselEvent::IndicatorClicked`] carries one (the dot index).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CarouselEvent {
    /// The pager's "next" control was clicked.
    NextClicked,
    /// The pager's "prev" control was clicked.
    PrevClicked,
    /// An indicator dot was clicked; the payload is its index.
    IndicatorClicked,
}

impl CarouselEvent {
    /// Stable event name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::NextClicked => "next-clicked",
            Self::PrevClicked => "prev-clicked",
            Self::IndicatorClicked => "jump-to-index",
        }
    }
}

impl fmt::Display for CarouselEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
