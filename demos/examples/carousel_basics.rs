// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Carousel basics.
//!
//! Builds a five-slide carousel, clicks "prev" from the first slide and steps a 60 Hz frame
//! clock, printing the track offset as it animates onto the clone and snaps to the last slide.
//! Then jumps with an indicator dot and shows that clicks during a move are ignored.
//!
//! Run:
//! - `RUST_LOG=understory_carousel=debug cargo run -p understory_carousel_demos --example carousel_basics`

use std::time::Duration;

use kurbo::{Point, Rect};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use understory_carousel::{Carousel, CarouselConfig, CarouselError, InitStatus};
use understory_scene::{Element, Scene};

const FRAME: Duration = Duration::from_micros(16_667);

fn build_scene() -> Scene {
    let mut scene = Scene::new();
    let area = scene.insert(
        None,
        Element::new("div")
            .with_class("slider-content")
            .with_bounds(Rect::new(0.0, 0.0, 900.0, 300.0)),
    );
    let track = scene.insert(Some(area), Element::new("ul").with_class("slider-view"));
    for i in 0..5 {
        scene.insert(
            Some(track),
            Element::new("li")
                .with_class("slider-item")
                .with_attribute("data-slide", &i.to_string())
                .with_bounds(Rect::new(0.0, 0.0, 300.0, 300.0)),
        );
    }
    scene
}

fn run_frames(carousel: &mut Carousel, now: &mut Duration) {
    while carousel.is_moving() {
        *now += FRAME;
        println!(
            "  t={:>4}ms  offset={:>8.1}",
            now.as_millis(),
            carousel.offset_at(*now)
        );
        carousel.tick(*now);
    }
    let damage = carousel.commit();
    println!(
        "  settled on slide {} (offset {}), {} elements to repaint",
        carousel.current_index(),
        carousel.offset_at(*now),
        damage.dirty.len()
    );
}

fn main() -> Result<(), CarouselError> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "understory_carousel=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = CarouselConfig::default().with_duration(Duration::from_millis(200));
    let mut carousel = Carousel::new(build_scene(), config)?;
    assert_eq!(carousel.init()?, InitStatus::Loaded);

    let track = carousel.elements().track;
    println!("== Loaded ==");
    println!(
        "  track: {} slides + {} clones, transform {}",
        carousel.len(),
        carousel.clones().len(),
        carousel.scene().style(track).map(|s| s.transform_css()).unwrap_or_default()
    );

    let mut now = Duration::ZERO;
    carousel.tick(now);

    println!("== Prev from slide 0 (wraps through a clone) ==");
    let (prev, next) = carousel.pager_controls().expect("pager is enabled");
    carousel.click(prev, now);
    println!("  next index {} (wrap pending: {})", carousel.next_index(), carousel.needs_reset());
    run_frames(&mut carousel, &mut now);

    println!("== Dot 2, then a click while moving ==");
    let dot = carousel.dots()[2];
    carousel.click(dot, now);
    carousel.click(next, now + FRAME);
    println!("  next index {} (second click ignored)", carousel.next_index());
    run_frames(&mut carousel, &mut now);

    println!("== Hit-tested click on the next control ==");
    carousel
        .scene_mut()
        .set_local_bounds(next, Rect::new(860.0, 130.0, 900.0, 170.0));
    let routed = carousel.click_at(Point::new(880.0, 150.0), now);
    println!("  routed: {routed}");
    run_frames(&mut carousel, &mut now);

    Ok(())
}
