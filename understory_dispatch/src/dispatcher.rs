// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dispatcher implementation.
//!
//! ## Overview
//!
//! Keeps an ordered list of `(type, handler)` registrations and invokes the handlers whose
//! type matches an incoming [`Event`].
//!
//! ## Ordering
//!
//! - Handlers run in registration order.
//! - Under [`Registration::Single`] there is at most one handler per type, so ordering only
//!   matters with [`Registration::FanOut`].
//!
//! ## Removal
//!
//! Closures cannot be compared, so removal is keyed by the [`ListenerId`] handed out at
//! registration together with the event type. Both must match.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt::Debug;

use crate::types::{Event, ListenerId, Registration};

type Handler<A, C> = Box<dyn FnMut(&mut C, Option<&A>)>;

struct Listener<T, A, C> {
    id: ListenerId,
    ty: T,
    handler: Handler<A, C>,
}

/// Publish/subscribe registry keyed by event type.
///
/// - `T`: event type key (an enum or a `&'static str`).
/// - `A`: payload type carried by [`Event::args`].
/// - `C`: context handed to every handler at dispatch time.
///
/// ## Usage
///
/// - Construct with [`EventDispatcher::new`] for single-handler semantics, or
///   [`EventDispatcher::with_policy`] for fan-out.
/// - Register with [`EventDispatcher::add_event_listener`].
/// - Publish with [`EventDispatcher::dispatch`].
pub struct EventDispatcher<T, A = (), C = ()> {
    listeners: Vec<Listener<T, A, C>>,
    policy: Registration,
    next_id: u64,
}

impl<T: Debug, A, C> Debug for EventDispatcher<T, A, C> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let types: Vec<&T> = self.listeners.iter().map(|l| &l.ty).collect();
        f.debug_struct("EventDispatcher")
            .field("policy", &self.policy)
            .field("listeners", &types)
            .finish_non_exhaustive()
    }
}

impl<T: PartialEq + Debug, A, C> Default for EventDispatcher<T, A, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialEq + Debug, A, C> EventDispatcher<T, A, C> {
    /// Create an empty dispatcher with [`Registration::Single`].
    pub fn new() -> Self {
        Self::with_policy(Registration::Single)
    }

    /// Create an empty dispatcher with an explicit registration policy.
    pub fn with_policy(policy: Registration) -> Self {
        Self {
            listeners: Vec::new(),
            policy,
            next_id: 0,
        }
    }

    /// The registration policy in effect.
    pub fn policy(&self) -> Registration {
        self.policy
    }

    /// Register `handler` for events of type `ty`.
    ///
    /// Under [`Registration::Single`], returns `None` and drops `handler` when `ty` already
    /// has a handler.
    pub fn add_event_listener<F>(&mut self, ty: T, handler: F) -> Option<ListenerId>
    where
        F: FnMut(&mut C, Option<&A>) + 'static,
    {
        if self.policy == Registration::Single && self.has_event_listener(&ty) {
            tracing::trace!(?ty, "listener already registered; dropping new handler");
            return None;
        }
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        tracing::trace!(?ty, ?id, "listener registered");
        self.listeners.push(Listener {
            id,
            ty,
            handler: Box::new(handler),
        });
        Some(id)
    }

    /// Invoke the handlers registered for `event.ty`, passing `event.args`.
    ///
    /// Returns the number of handlers invoked.
    pub fn dispatch(&mut self, ctx: &mut C, event: &Event<T, A>) -> usize {
        let mut invoked = 0;
        for l in self.listeners.iter_mut().filter(|l| l.ty == event.ty) {
            (l.handler)(ctx, event.args.as_ref());
            invoked += 1;
        }
        tracing::debug!(ty = ?event.ty, invoked, "dispatched");
        invoked
    }

    /// Returns true if at least one handler is registered for `ty`.
    pub fn has_event_listener(&self, ty: &T) -> bool {
        self.listeners.iter().any(|l| l.ty == *ty)
    }

    /// Number of handlers registered for `ty`.
    pub fn listener_count(&self, ty: &T) -> usize {
        self.listeners.iter().filter(|l| l.ty == *ty).count()
    }

    /// Remove the registration matching both `ty` and `id`.
    ///
    /// Returns true if a registration was removed.
    pub fn remove_event_listener(&mut self, ty: &T, id: ListenerId) -> bool {
        let Some(pos) = self
            .listeners
            .iter()
            .position(|l| l.ty == *ty && l.id == id)
        else {
            return false;
        };
        self.listeners.remove(pos);
        tracing::trace!(?ty, ?id, "listener removed");
        true
    }

    /// Returns true when no handlers are registered.
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    enum Ty {
        Next,
        Prev,
        Jump,
    }

    #[test]
    fn dispatch_invokes_matching_handler_only() {
        let mut log: Vec<&'static str> = Vec::new();
        let mut d: EventDispatcher<Ty, (), Vec<&'static str>> = EventDispatcher::new();
        d.add_event_listener(Ty::Next, |log: &mut Vec<&'static str>, _| log.push("next"));
        d.add_event_listener(Ty::Prev, |log: &mut Vec<&'static str>, _| log.push("prev"));

        assert_eq!(d.dispatch(&mut log, &Event::new(Ty::Next)), 1);
        assert_eq!(d.dispatch(&mut log, &Event::new(Ty::Prev)), 1);
        assert_eq!(d.dispatch(&mut log, &Event::new(Ty::Jump)), 0);
        assert_eq!(log, vec!["next", "prev"]);
    }

    #[test]
    fn single_policy_drops_second_registration() {
        let mut hits = 0_u32;
        let mut d: EventDispatcher<Ty, (), u32> = EventDispatcher::new();
        assert!(d.add_event_listener(Ty::Next, |h: &mut u32, _| *h += 1).is_some());
        assert!(d.add_event_listener(Ty::Next, |h: &mut u32, _| *h += 100).is_none());
        assert_eq!(d.listener_count(&Ty::Next), 1);

        d.dispatch(&mut hits, &Event::new(Ty::Next));
        assert_eq!(hits, 1, "first handler wins under the single policy");
    }

    #[test]
    fn fan_out_runs_in_registration_order() {
        let mut log: Vec<u8> = Vec::new();
        let mut d: EventDispatcher<Ty, (), Vec<u8>> =
            EventDispatcher::with_policy(Registration::FanOut);
        d.add_event_listener(Ty::Next, |log: &mut Vec<u8>, _| log.push(1));
        d.add_event_listener(Ty::Prev, |log: &mut Vec<u8>, _| log.push(9));
        d.add_event_listener(Ty::Next, |log: &mut Vec<u8>, _| log.push(2));

        assert_eq!(d.dispatch(&mut log, &Event::new(Ty::Next)), 2);
        assert_eq!(log, vec![1, 2]);
    }

    #[test]
    fn payload_reaches_handler() {
        let mut seen: Option<usize> = None;
        let mut d: EventDispatcher<Ty, usize, Option<usize>> = EventDispatcher::new();
        d.add_event_listener(Ty::Jump, |seen: &mut Option<usize>, args: Option<&usize>| {
            *seen = args.copied();
        });
        d.dispatch(&mut seen, &Event::with_args(Ty::Jump, 3));
        assert_eq!(seen, Some(3));

        d.dispatch(&mut seen, &Event::new(Ty::Jump));
        assert_eq!(seen, None, "missing payload is passed through as None");
    }

    #[test]
    fn remove_requires_matching_type_and_id() {
        let mut d: EventDispatcher<Ty, (), ()> = EventDispatcher::new();
        let next = d.add_event_listener(Ty::Next, |_: &mut (), _| {}).unwrap();
        let prev = d.add_event_listener(Ty::Prev, |_: &mut (), _| {}).unwrap();

        // Wrong type for the id: nothing removed.
        assert!(!d.remove_event_listener(&Ty::Prev, next));
        assert!(d.has_event_listener(&Ty::Next));
        assert!(d.has_event_listener(&Ty::Prev));

        assert!(d.remove_event_listener(&Ty::Next, next));
        assert!(!d.has_event_listener(&Ty::Next));
        assert!(d.has_event_listener(&Ty::Prev));

        // Already gone.
        assert!(!d.remove_event_listener(&Ty::Next, next));

        assert!(d.remove_event_listener(&Ty::Prev, prev));
        assert!(d.is_empty());
    }

    #[test]
    fn type_is_free_again_after_removal() {
        let mut hits = 0_u32;
        let mut d: EventDispatcher<Ty, (), u32> = EventDispatcher::new();
        let first = d.add_event_listener(Ty::Next, |h: &mut u32, _| *h += 1).unwrap();
        d.remove_event_listener(&Ty::Next, first);

        let second = d.add_event_listener(Ty::Next, |h: &mut u32, _| *h += 10);
        assert!(second.is_some());
        assert_ne!(second, Some(first), "ids are not reused");

        d.dispatch(&mut hits, &Event::new(Ty::Next));
        assert_eq!(hits, 10);
    }

    #[test]
    fn string_keys_work() {
        let mut hits = 0_u32;
        let mut d: EventDispatcher<&'static str, (), u32> = EventDispatcher::new();
        d.add_event_listener("sliderEvent_onClickNext", |h: &mut u32, _| *h += 1);
        d.dispatch(&mut hits, &Event::new("sliderEvent_onClickNext"));
        d.dispatch(&mut hits, &Event::new("sliderEvent_onClickPrev"));
        assert_eq!(hits, 1);
    }
}
