// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Next/prev controls.

use understory_dispatch::dispatcher::EventDispatcher;
use understory_dispatch::types::{Event, ListenerId};
use understory_scene::{Element, NodeId, Scene};

use crate::event::CarouselEvent;

/// A pair of clickable controls publishing [`CarouselEvent::NextClicked`] and
/// [`CarouselEvent::PrevClicked`].
///
/// The pager holds no carousel state; `C` is the context its listeners receive.
pub struct Pager<C> {
    next: NodeId,
    prev: NodeId,
    events: EventDispatcher<CarouselEvent, usize, C>,
}

impl<C> core::fmt::Debug for Pager<C> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Pager")
            .field("next", &self.next)
            .field("prev", &self.prev)
            .field("events", &self.events)
            .finish()
    }
}

impl<C> Pager<C> {
    /// Wrap existing control elements.
    pub fn new(next: NodeId, prev: NodeId) -> Self {
        Self {
            next,
            prev,
            events: EventDispatcher::new(),
        }
    }

    /// Build `div.slider-controller > a.prev + a.next` as the last child of `parent`.
    pub fn mount(scene: &mut Scene, parent: NodeId) -> Self {
        let container = scene.insert(
            Some(parent),
            Element::new("div").with_class("slider-controller"),
        );
        let prev = scene.insert(Some(container), control("prev"));
        let next = scene.insert(Some(container), control("next"));
        Self::new(next, prev)
    }

    /// The "next" control.
    pub fn next_node(&self) -> NodeId {
        self.next
    }

    /// The "prev" control.
    pub fn prev_node(&self) -> NodeId {
        self.prev
    }

    /// Register a listener for one of the pager's events.
    pub fn add_event_listener<F>(&mut self, ty: CarouselEvent, handler: F) -> Option<ListenerId>
    where
        F: FnMut(&mut C, Option<&usize>) + 'static,
    {
        self.events.add_event_listener(ty, handler)
    }

    /// Handle a click on `node`. Returns false if `node` is neither control.
    pub fn click(&mut self, ctx: &mut C, node: NodeId) -> bool {
        let ty = if node == self.next {
            CarouselEvent::NextClicked
        } else if node == self.prev {
            CarouselEvent::PrevClicked
        } else {
            return false;
        };
        self.events.dispatch(ctx, &Event::new(ty));
        true
    }
}

fn control(class: &str) -> Element {
    Element::new("a")
        .with_class(class)
        .with_attribute("href", "javascript:void(0);")
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn mount_builds_markup() {
        let mut scene = Scene::new();
        let area = scene.insert(None, Element::new("div"));
        let pager: Pager<()> = Pager::mount(&mut scene, area);

        let container = scene.children(area)[0];
        assert!(scene.has_class(container, "slider-controller"));
        assert_eq!(scene.children(container), &[pager.prev_node(), pager.next_node()]);
        assert!(scene.has_class(pager.next_node(), "next"));
        assert!(scene.has_class(pager.prev_node(), "prev"));
    }

    #[test]
    fn click_dispatches_matching_event() {
        let mut scene = Scene::new();
        let area = scene.insert(None, Element::new("div"));
        let mut pager: Pager<Vec<CarouselEvent>> = Pager::mount(&mut scene, area);
        for ty in [CarouselEvent::NextClicked, CarouselEvent::PrevClicked] {
            pager.add_event_listener(ty, move |log: &mut Vec<CarouselEvent>, _| log.push(ty));
        }

        let mut log = Vec::new();
        assert!(pager.click(&mut log, pager.next_node()));
        assert!(pager.click(&mut log, pager.prev_node()));
        assert!(!pager.click(&mut log, area));
        assert_eq!(log, [CarouselEvent::NextClicked, CarouselEvent::PrevClicked]);
    }
}
