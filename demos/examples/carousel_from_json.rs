// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Carousel configured from JSON.
//!
//! Parses the camelCase option object a page would pass, waits for the first slide's image
//! before loading, and lets the host report transition ends instead of relying on timers.
//!
//! Run:
//! - `cargo run -p understory_carousel_demos --example carousel_from_json`

use std::error::Error;
use std::time::Duration;

use kurbo::Rect;
use understory_carousel::{Carousel, CarouselConfig, Direction, InitStatus};
use understory_scene::{Element, Scene};

const OPTIONS: &str = r#"{
    "area": "section.hero",
    "view": ".hero-track",
    "item": ".hero-slide",
    "hasIndicator": true,
    "hasPager": false,
    "easing": "cubic-bezier(0.25, 0.1, 0.25, 1)",
    "duration": 450,
    "initialIndex": 1,
    "completion": "transitionEnd"
}"#;

fn build_scene() -> Scene {
    let mut scene = Scene::new();
    let area = scene.insert(
        None,
        Element::new("section")
            .with_class("hero")
            .with_bounds(Rect::new(0.0, 0.0, 640.0, 360.0)),
    );
    let track = scene.insert(Some(area), Element::new("div").with_class("hero-track"));
    for i in 1..=3 {
        let slide = scene.insert(
            Some(track),
            Element::new("figure")
                .with_class("hero-slide")
                .with_bounds(Rect::new(0.0, 0.0, 640.0, 360.0)),
        );
        scene.insert(
            Some(slide),
            Element::new("img").with_attribute("src", &format!("./img/{i:02}.jpg")),
        );
    }
    scene
}

fn main() -> Result<(), Box<dyn Error>> {
    let config: CarouselConfig = serde_json::from_str(OPTIONS)?;
    println!("== Config ==");
    println!("  {config:?}");

    let mut carousel = Carousel::new(build_scene(), config)?;
    match carousel.init()? {
        InitStatus::AwaitingImage { src } => {
            println!("  waiting for {}", src.as_deref().unwrap_or("<no src>"));
            // The host's image loader fires here.
            carousel.image_loaded()?;
        }
        InitStatus::Loaded => {}
    }
    println!("  loaded on slide {}", carousel.current_index());

    println!("== Next twice, reporting transition ends ==");
    let mut now = Duration::ZERO;
    for _ in 0..2 {
        carousel.navigate(Direction::Next, now);
        let track = carousel.elements().track;
        let style = carousel.scene().style(track).copied().unwrap_or_default();
        println!(
            "  -> {} with `transition: {}`",
            style.transform_css(),
            style.transition_css()
        );
        // Timers never end a move in this mode.
        now += Duration::from_secs(10);
        carousel.tick(now);
        carousel.transition_end();
        println!("  settled on slide {}", carousel.current_index());
    }

    Ok(())
}
