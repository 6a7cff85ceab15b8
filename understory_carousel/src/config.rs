// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Carousel configuration.
//!
//! Defaults are explicit: a missing `duration` means 600 ms, while an explicit `0` is kept and
//! makes every move settle on the next [`tick`](crate::Carousel::tick).
//!
//! With the `serde` feature, field names are camelCase to match the option object web pages
//! already pass to carousels:
//!
//! ```json
//! { "area": ".slider-content", "hasPager": true, "easing": "ease", "duration": 600 }
//! ```

use alloc::string::String;
use core::time::Duration;

use understory_scene::{Easing, Transition};

use crate::error::CarouselError;

/// Default transition length.
pub const DEFAULT_DURATION: Duration = Duration::from_millis(600);

/// What ends a move and releases the moving flag.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum Completion {
    /// A timer of the configured duration, driven by [`Carousel::tick`](crate::Carousel::tick).
    #[default]
    Timer,
    /// The host reports the end of the real transition through
    /// [`Carousel::transition_end`](crate::Carousel::transition_end).
    TransitionEnd,
}

/// Construction parameters.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct CarouselConfig {
    /// Selector of the visible area.
    pub area: String,
    /// Selector of the track that moves.
    pub view: String,
    /// Selector of the slides.
    pub item: String,
    /// Source of the image whose load gates initialization, if the page names one.
    pub first_src: Option<String>,
    /// Mount a dot indicator.
    pub has_indicator: bool,
    /// Mount next/prev controls.
    pub has_pager: bool,
    /// CSS timing function.
    pub easing: String,
    /// Transition length in milliseconds; [`DEFAULT_DURATION`] when absent.
    pub duration: Option<u64>,
    /// Stored for hosts; the carousel does not delay moves.
    pub delay: Option<u64>,
    /// Slide shown after loading, wrapped into range.
    pub initial_index: usize,
    /// What ends a move.
    pub completion: Completion,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            area: String::from(".slider-content"),
            view: String::from(".slider-view"),
            item: String::from(".slider-item"),
            first_src: None,
            has_indicator: true,
            has_pager: true,
            easing: String::from("ease"),
            duration: None,
            delay: None,
            initial_index: 0,
            completion: Completion::Timer,
        }
    }
}

impl CarouselConfig {
    /// Builder: set the area, track and slide selectors.
    #[must_use]
    pub fn with_selectors(mut self, area: &str, view: &str, item: &str) -> Self {
        self.area = String::from(area);
        self.view = String::from(view);
        self.item = String::from(item);
        self
    }

    /// Builder: enable or disable the indicator and pager.
    #[must_use]
    pub fn with_controls(mut self, has_indicator: bool, has_pager: bool) -> Self {
        self.has_indicator = has_indicator;
        self.has_pager = has_pager;
        self
    }

    /// Builder: set the timing function.
    #[must_use]
    pub fn with_easing(mut self, easing: &str) -> Self {
        self.easing = String::from(easing);
        self
    }

    /// Builder: set the transition length.
    #[must_use]
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = Some(u64::try_from(duration.as_millis()).unwrap_or(u64::MAX));
        self
    }

    /// Builder: set the initial slide.
    #[must_use]
    pub fn with_initial_index(mut self, index: usize) -> Self {
        self.initial_index = index;
        self
    }

    /// Builder: set the completion signal.
    #[must_use]
    pub fn with_completion(mut self, completion: Completion) -> Self {
        self.completion = completion;
        self
    }

    /// Effective transition length.
    pub fn duration(&self) -> Duration {
        self.duration
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_DURATION)
    }

    /// Effective delay.
    pub fn delay(&self) -> Duration {
        self.delay.map(Duration::from_millis).unwrap_or_default()
    }

    /// Parsed timing function.
    pub fn easing(&self) -> Result<Easing, CarouselError> {
        Ok(self.easing.parse()?)
    }

    /// The transition applied to animated moves.
    pub fn transition(&self) -> Result<Transition, CarouselError> {
        Ok(Transition::new(self.duration(), self.easing()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use understory_scene::EasingParseError;

    #[test]
    fn explicit_defaults() {
        let c = CarouselConfig::default();
        assert_eq!(c.duration(), Duration::from_millis(600));
        assert_eq!(c.delay(), Duration::ZERO);
        assert_eq!(c.easing(), Ok(Easing::Ease));
        assert!(c.has_indicator && c.has_pager);
    }

    #[test]
    fn zero_duration_is_kept() {
        let c = CarouselConfig::default().with_duration(Duration::ZERO);
        assert_eq!(c.duration(), Duration::ZERO);
    }

    #[test]
    fn transition_uses_duration_and_easing() {
        let c = CarouselConfig::default()
            .with_duration(Duration::from_millis(450))
            .with_easing("ease-in-out");
        let t = c.transition().unwrap();
        assert_eq!(t.duration, Duration::from_millis(450));
        assert_eq!(t.easing, Easing::EaseInOut);
    }

    #[test]
    fn bad_easing_is_a_config_error() {
        let c = CarouselConfig::default().with_easing("springy");
        assert!(matches!(
            c.transition(),
            Err(CarouselError::Easing(EasingParseError::Unknown(_)))
        ));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserializes_camel_case_with_defaults() {
        let c: CarouselConfig = serde_json::from_str(
            r#"{
                "area": ".hero",
                "hasIndicator": false,
                "firstSrc": "./img/01.jpg",
                "duration": 300,
                "completion": "transitionEnd"
            }"#,
        )
        .unwrap();
        assert_eq!(c.area, ".hero");
        assert_eq!(c.item, ".slider-item");
        assert!(!c.has_indicator);
        assert!(c.has_pager);
        assert_eq!(c.first_src.as_deref(), Some("./img/01.jpg"));
        assert_eq!(c.duration(), Duration::from_millis(300));
        assert_eq!(c.completion, Completion::TransitionEnd);
    }
}
