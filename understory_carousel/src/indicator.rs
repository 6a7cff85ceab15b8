// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dot indicator: one clickable dot per logical slide.

use alloc::vec::Vec;

use understory_dispatch::dispatcher::EventDispatcher;
use understory_dispatch::types::{Event, ListenerId};
use understory_scene::{Element, NodeId, Scene};

use crate::event::CarouselEvent;

/// Class marking the dot of the slide being shown.
pub const CURRENT_CLASS: &str = "current";

/// A row of dots publishing [`CarouselEvent::IndicatorClicked`] with the clicked dot's index.
pub struct Indicator<C> {
    dots: Vec<NodeId>,
    events: EventDispatcher<CarouselEvent, usize, C>,
}

impl<C> core::fmt::Debug for Indicator<C> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Indicator")
            .field("dots", &self.dots)
            .field("events", &self.events)
            .finish()
    }
}

impl<C> Indicator<C> {
    /// Wrap existing dot elements, in slide order.
    pub fn new(dots: Vec<NodeId>) -> Self {
        Self {
            dots,
            events: EventDispatcher::new(),
        }
    }

    /// Build `div.slider-dots > a × len` as the last child of `parent`.
    pub fn mount(scene: &mut Scene, parent: NodeId, len: usize) -> Self {
        let container =
            scene.insert(Some(parent), Element::new("div").with_class("slider-dots"));
        let dots = (0..len)
            .map(|_| {
                scene.insert(
                    Some(container),
                    Element::new("a").with_attribute("href", "javascript:void(0)"),
                )
            })
            .collect();
        Self::new(dots)
    }

    /// Dot elements in slide order.
    pub fn dots(&self) -> &[NodeId] {
        &self.dots
    }

    /// Number of dots.
    pub fn len(&self) -> usize {
        self.dots.len()
    }

    /// Returns true if there are no dots.
    pub fn is_empty(&self) -> bool {
        self.dots.is_empty()
    }

    /// Register a listener for [`CarouselEvent::IndicatorClicked`].
    pub fn add_event_listener<F>(&mut self, ty: CarouselEvent, handler: F) -> Option<ListenerId>
    where
        F: FnMut(&mut C, Option<&usize>) + 'static,
    {
        self.events.add_event_listener(ty, handler)
    }

    /// Handle a click on `node`. Returns false if `node` is not one of the dots.
    pub fn click(&mut self, ctx: &mut C, node: NodeId) -> bool {
        let Some(index) = self.dots.iter().position(|d| *d == node) else {
            return false;
        };
        self.events
            .dispatch(ctx, &Event::with_args(CarouselEvent::IndicatorClicked, index));
        true
    }

    /// Mark the dot at `index` current and clear every other dot.
    pub fn set_current_style(&self, scene: &mut Scene, index: usize) {
        mark_current(scene, &self.dots, index);
    }
}

/// Mark `dots[index]` with [`CURRENT_CLASS`] and clear it from every other dot.
///
/// Idempotent. An `index` past the end clears all dots.
pub fn mark_current(scene: &mut Scene, dots: &[NodeId], index: usize) {
    for (i, dot) in dots.iter().enumerate() {
        if i == index {
            scene.add_class(*dot, CURRENT_CLASS);
        } else {
            scene.remove_class(*dot, CURRENT_CLASS);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mounted(len: usize) -> (Scene, Indicator<Option<usize>>) {
        let mut scene = Scene::new();
        let area = scene.insert(None, Element::new("div"));
        let indicator = Indicator::mount(&mut scene, area, len);
        (scene, indicator)
    }

    fn current_dots(scene: &Scene, dots: &[NodeId]) -> Vec<usize> {
        dots.iter()
            .enumerate()
            .filter(|(_, d)| scene.has_class(**d, CURRENT_CLASS))
            .map(|(i, _)| i)
            .collect()
    }

    #[test]
    fn mount_builds_one_dot_per_slide() {
        let (scene, indicator) = mounted(5);
        assert_eq!(indicator.len(), 5);
        let container = scene.parent(indicator.dots()[0]).unwrap();
        assert!(scene.has_class(container, "slider-dots"));
        assert_eq!(scene.children(container), indicator.dots());
    }

    #[test]
    fn exactly_one_dot_is_current() {
        let (mut scene, indicator) = mounted(5);
        for i in [0, 3, 3, 4, 1] {
            indicator.set_current_style(&mut scene, i);
            assert_eq!(current_dots(&scene, indicator.dots()), [i]);
        }
        indicator.set_current_style(&mut scene, 5);
        assert!(current_dots(&scene, indicator.dots()).is_empty());
    }

    #[test]
    fn click_reports_dot_index() {
        let (mut scene, mut indicator) = mounted(4);
        indicator.add_event_listener(
            CarouselEvent::IndicatorClicked,
            |seen: &mut Option<usize>, args: Option<&usize>| *seen = args.copied(),
        );
        let mut seen = None;
        let third = indicator.dots()[2];
        assert!(indicator.click(&mut seen, third));
        assert_eq!(seen, Some(2));
        let stray = scene.insert(None, Element::new("a"));
        assert!(!indicator.click(&mut seen, stray));
    }
}
