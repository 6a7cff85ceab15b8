// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dispatcher basics.
//!
//! Shows the two registration policies: `Single` keeps the first handler per event type and
//! drops later ones, `FanOut` calls every handler in registration order. Handlers receive a
//! context supplied at dispatch time.
//!
//! Run:
//! - `cargo run -p understory_carousel_demos --example dispatch_basics`

use understory_dispatch::dispatcher::EventDispatcher;
use understory_dispatch::types::{Event, Registration};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Toolbar {
    Save,
    Zoom,
}

fn main() {
    println!("== Single ==");
    let mut single: EventDispatcher<Toolbar, f64, Vec<String>> = EventDispatcher::new();
    let first = single.add_event_listener(Toolbar::Save, |log: &mut Vec<String>, _| {
        log.push("save #1".into());
    });
    let second = single.add_event_listener(Toolbar::Save, |log: &mut Vec<String>, _| {
        log.push("save #2".into());
    });
    println!("  first registered: {first:?}, second registered: {second:?}");

    let mut log = Vec::new();
    single.dispatch(&mut log, &Event::new(Toolbar::Save));
    println!("  log: {log:?}");

    println!("== FanOut ==");
    let mut fan: EventDispatcher<Toolbar, f64, Vec<String>> =
        EventDispatcher::with_policy(Registration::FanOut);
    let status = fan
        .add_event_listener(Toolbar::Zoom, |log: &mut Vec<String>, z: Option<&f64>| {
            log.push(format!("status bar: {:.0}%", z.copied().unwrap_or(1.0) * 100.0));
        })
        .expect("fan-out accepts every listener");
    fan.add_event_listener(Toolbar::Zoom, |log: &mut Vec<String>, z: Option<&f64>| {
        log.push(format!("canvas scale {:?}", z));
    });

    let mut log = Vec::new();
    let invoked = fan.dispatch(&mut log, &Event::with_args(Toolbar::Zoom, 1.5));
    println!("  invoked {invoked}: {log:?}");

    fan.remove_event_listener(&Toolbar::Zoom, status);
    let mut log = Vec::new();
    fan.dispatch(&mut log, &Event::with_args(Toolbar::Zoom, 2.0));
    println!("  after removing the status bar: {log:?}");
}
