// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_dispatch --heading-base-level=0

//! Understory Dispatch: a small, deterministic, `no_std` publish/subscribe registry for UI widgets.
//!
//! ## Overview
//!
//! Interactive widgets (a pager, a row of indicator dots, a toolbar) own an
//! [`EventDispatcher`](crate::dispatcher::EventDispatcher) and publish typed
//! [`Event`](crate::types::Event)s through it. Whoever owns the widget registers handlers
//! keyed by event type and receives the event's optional payload.
//!
//! This decouples the widget (which only knows *that* something was clicked) from the
//! controller that decides *what* the click means.
//!
//! ## Handler context
//!
//! Handlers are `FnMut(&mut C, Option<&A>)`.
//! The context `C` is supplied by the caller at [`dispatch`](crate::dispatcher::EventDispatcher::dispatch)
//! time rather than captured by the handler, so a controller can own its widgets and still let
//! their handlers mutate controller state without shared ownership.
//!
//! ## Registration policy
//!
//! - [`Registration::Single`](crate::types::Registration::Single) (default): at most one handler
//!   per event type. A second registration for the same type is dropped and
//!   [`add_event_listener`](crate::dispatcher::EventDispatcher::add_event_listener) returns `None`.
//! - [`Registration::FanOut`](crate::types::Registration::FanOut): any number of handlers per type,
//!   invoked in registration order.
//!
//! Dispatch is synchronous and in-process. There is no queue.
//!
//! ## Minimal example
//!
//! ```
//! use understory_dispatch::dispatcher::EventDispatcher;
//! use understory_dispatch::types::Event;
//!
//! #[derive(Copy, Clone, Debug, PartialEq, Eq)]
//! enum Click {
//!     Next,
//!     Jump,
//! }
//!
//! let mut steps = 0_i32;
//! let mut events: EventDispatcher<Click, usize, i32> = EventDispatcher::new();
//! events.add_event_listener(Click::Next, |steps: &mut i32, _| *steps += 1);
//! events.add_event_listener(Click::Jump, |steps: &mut i32, to: Option<&usize>| {
//!     *steps = to.copied().unwrap_or(0) as i32;
//! });
//!
//! events.dispatch(&mut steps, &Event::new(Click::Next));
//! assert_eq!(steps, 1);
//! events.dispatch(&mut steps, &Event::with_args(Click::Jump, 4));
//! assert_eq!(steps, 4);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod dispatcher;
pub mod types;
