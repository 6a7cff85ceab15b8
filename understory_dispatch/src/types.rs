// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types for the dispatcher: events, listener handles, and registration policy.

/// A typed event with an optional payload.
///
/// Passed to [`EventDispatcher::dispatch`](crate::dispatcher::EventDispatcher::dispatch);
/// handlers registered for [`Event::ty`] receive `args` as `Option<&A>`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Event<T, A = ()> {
    /// Event type used to select handlers.
    pub ty: T,
    /// Optional payload.
    pub args: Option<A>,
}

impl<T, A> Event<T, A> {
    /// Create an event without a payload.
    pub const fn new(ty: T) -> Self {
        Self { ty, args: None }
    }

    /// Create an event carrying `args`.
    pub const fn with_args(ty: T, args: A) -> Self {
        Self {
            ty,
            args: Some(args),
        }
    }
}

/// Handle identifying one registration.
///
/// Returned by [`EventDispatcher::add_event_listener`](crate::dispatcher::EventDispatcher::add_event_listener)
/// and accepted by [`EventDispatcher::remove_event_listener`](crate::dispatcher::EventDispatcher::remove_event_listener).
/// Handles are never reused by the dispatcher that issued them.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct ListenerId(pub(crate) u64);

/// How many handlers an event type may have.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum Registration {
    /// At most one handler per type; later registrations for a taken type are dropped.
    #[default]
    Single,
    /// Any number of handlers per type, invoked in registration order.
    FanOut,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_constructors() {
        let e: Event<&str> = Event::new("next");
        assert_eq!(e.ty, "next");
        assert_eq!(e.args, None);

        let e = Event::with_args("jump", 3_usize);
        assert_eq!(e.args, Some(3));
    }

    #[test]
    fn single_is_default_policy() {
        assert_eq!(Registration::default(), Registration::Single);
    }
}
