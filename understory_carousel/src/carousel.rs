// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The carousel controller.
//!
//! ## States
//!
//! - idle: `moving == false`; the next intent starts a move.
//! - animating: `moving == true`; intents are dropped until the completion signal.
//!
//! The completion signal is a timer of the transition's duration ([`Completion::Timer`]) or
//! the host's report that the real transition ended ([`Completion::TransitionEnd`]).
//!
//! ## Wrapping
//!
//! Stepping past either end animates onto a clone. When the move completes the controller
//! wraps the index, recomputes the position and re-applies it with the transition disabled,
//! so the clone is swapped for the real slide showing the same content.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::time::Duration;

use kurbo::{Affine, Point, Vec2};
use understory_scene::{Damage, NodeId, QueryFilter, Scene, Selector, Transition};

use crate::config::{CarouselConfig, Completion};
use crate::error::CarouselError;
use crate::event::CarouselEvent;
use crate::geometry::TrackGeometry;
use crate::index::{Direction, LoopIndex};
use crate::indicator::Indicator;
use crate::pager::Pager;
use crate::timer::{Task, TimerQueue};

/// Fewest slides a looping carousel accepts.
pub const MIN_SLIDES: usize = 2;

/// Element handles the carousel operates on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CarouselElements {
    /// Visible area; pager and indicator markup is mounted here.
    pub area: NodeId,
    /// Strip that is translated; parent of every slide.
    pub track: NodeId,
    /// Logical slides in order.
    pub items: Vec<NodeId>,
}

/// Outcome of [`Carousel::init`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InitStatus {
    /// The carousel is ready for input.
    Loaded,
    /// The area contains an image; call [`Carousel::image_loaded`] once it has loaded so slide
    /// widths can be measured.
    AwaitingImage {
        /// The image's `src`, or the configured `first_src` when the element has none.
        src: Option<String>,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Phase {
    Constructed,
    AwaitingImage,
    Loaded,
}

#[derive(Copy, Clone, Debug)]
struct Motion {
    from: f64,
    to: f64,
    started: Duration,
    transition: Transition,
}

/// State the pager and indicator listeners mutate.
#[derive(Debug)]
pub(crate) struct Controller {
    scene: Scene,
    elements: CarouselElements,
    /// Dot to mark current once the indicator is free to update.
    dot: Option<usize>,
    clones: Vec<NodeId>,
    index: LoopIndex,
    geometry: TrackGeometry,
    transition: Transition,
    completion: Completion,
    moving: bool,
    snap_pending: bool,
    timers: TimerQueue,
    now: Duration,
    motion: Option<Motion>,
    phase: Phase,
}

impl Controller {
    fn navigate(&mut self, direction: Direction) -> bool {
        if self.phase != Phase::Loaded {
            tracing::warn!(?direction, "navigation before load ignored");
            return false;
        }
        if self.moving {
            tracing::debug!(?direction, "navigation ignored while moving");
            return false;
        }
        self.index.get_next_index(direction);
        self.calc_next_position();
        self.move_to();
        self.set_current_style(self.index.normalized_next());
        if self.index.needs_reset() {
            match self.completion {
                Completion::Timer => self
                    .timers
                    .schedule(self.now + self.transition.duration, Task::SnapReset),
                Completion::TransitionEnd => self.snap_pending = true,
            }
        }
        tracing::debug!(
            ?direction,
            next = self.index.next(),
            position = self.geometry.next_position,
            wrap = self.index.needs_reset(),
            "moving"
        );
        true
    }

    /// The area is re-measured on every call, so a resized area re-centers on the next move.
    fn calc_next_position(&mut self) -> f64 {
        if let Some(w) = self.scene.client_width(self.elements.area) {
            self.geometry.area_width = w;
        }
        self.geometry.calc_next_position(self.index.next())
    }

    fn move_to(&mut self) {
        self.moving = true;
        self.apply_position(true);
        if self.completion == Completion::Timer {
            self.timers
                .schedule(self.now + self.transition.duration, Task::EndMove);
        }
    }

    fn apply_position(&mut self, animated: bool) {
        let to = self.geometry.next_position;
        let track = self.elements.track;
        if animated {
            self.motion = Some(Motion {
                from: self.offset_at(self.now),
                to,
                started: self.now,
                transition: self.transition,
            });
            self.scene.set_transition(track, Some(self.transition));
        } else {
            self.motion = None;
            self.scene.set_transition(track, None);
        }
        self.scene
            .set_transform(track, Affine::translate(Vec2::new(to, 0.0)));
    }

    fn offset_at(&self, now: Duration) -> f64 {
        match self.motion {
            Some(m) => {
                let p = m.transition.progress(now.saturating_sub(m.started));
                m.from + (m.to - m.from) * p
            }
            None => self
                .scene
                .style(self.elements.track)
                .map(|s| s.transform.translation().x)
                .unwrap_or(0.0),
        }
    }

    fn set_current_style(&mut self, index: usize) {
        self.dot = Some(index);
    }

    fn end_move(&mut self) {
        self.moving = false;
        self.motion = None;
        if !self.index.needs_reset() {
            self.index.commit();
        }
        tracing::trace!(current = self.index.current(), "move finished");
    }

    fn snap_reset(&mut self) {
        self.index.reset_index();
        self.calc_next_position();
        self.apply_position(false);
        self.set_current_style(self.index.normalized_next());
        self.index.commit();
        tracing::debug!(
            current = self.index.current(),
            position = self.geometry.next_position,
            "snapped from clone to slide"
        );
    }

    fn run(&mut self, task: Task) {
        match task {
            Task::EndMove => self.end_move(),
            Task::SnapReset => self.snap_reset(),
        }
    }

    fn measure(&mut self) -> Result<(), CarouselError> {
        let len = self.elements.items.len();
        let child_width = self
            .scene
            .client_width(self.elements.items[0])
            .unwrap_or(0.0);
        if child_width.is_nan() || child_width <= 0.0 {
            return Err(CarouselError::ZeroWidth);
        }
        let area_width = self.scene.client_width(self.elements.area).unwrap_or(0.0);
        self.geometry = TrackGeometry::measure(area_width, child_width, len);
        for item in &self.elements.items {
            self.scene.set_width(*item, child_width);
        }
        self.scene
            .set_width(self.elements.track, self.geometry.content_width);
        Ok(())
    }

    /// Track becomes `[clone(N-2), clone(N-1), 0 .. N-1, clone(0), clone(1)]`.
    fn clone_first_and_last(&mut self) -> Result<(), CarouselError> {
        let track = self.elements.track;
        let items = &self.elements.items;
        let len = items.len();
        let first = items[0];
        let sources = [items[0], items[1], items[len - 2], items[len - 1]];
        if let Some(dead) = sources.iter().find(|s| !self.scene.is_alive(**s)) {
            return Err(CarouselError::MissingElement {
                role: "item",
                selector: format!("{dead:?}"),
            });
        }

        let mut clones = [first; 4];
        for (slot, source) in clones.iter_mut().zip(sources) {
            *slot = self
                .scene
                .deep_clone(source)
                .ok_or_else(|| CarouselError::MissingElement {
                    role: "item",
                    selector: format!("{source:?}"),
                })?;
        }
        let [head_a, head_b, tail_a, tail_b] = clones;
        self.scene.append_child(track, head_a);
        self.scene.append_child(track, head_b);
        self.scene.insert_before(track, tail_a, first);
        self.scene.insert_before(track, tail_b, first);
        self.clones = clones.to_vec();
        Ok(())
    }

    fn jump_to_initial(&mut self, initial: usize) {
        self.index.get_next_index(Direction::To(initial));
        self.index.reset_index();
        self.calc_next_position();
        self.apply_position(false);
        self.set_current_style(self.index.normalized_next());
        self.index.commit();
    }
}

/// A looping carousel over a [`Scene`].
///
/// ## Usage
///
/// 1. Build a scene with an area, a track and at least [`MIN_SLIDES`] slides with non-zero
///    width, then construct with [`Carousel::new`] (selectors) or
///    [`Carousel::with_elements`] (handles).
/// 2. Call [`Carousel::init`]; if it reports [`InitStatus::AwaitingImage`], call
///    [`Carousel::image_loaded`] when the image is ready.
/// 3. Route clicks through [`Carousel::click`] or [`Carousel::click_at`] with the time of the
///    input. While [`Carousel::next_deadline`] is `Some`, call [`Carousel::tick`] each frame;
///    render the [`Damage`] from [`Carousel::commit`].
///
/// Time is whatever monotonic clock the host uses, as a [`Duration`] since any fixed epoch.
/// Every input carries a timestamp, so a host may stop ticking while the carousel is idle.
pub struct Carousel {
    ctrl: Controller,
    pager: Option<Pager<Controller>>,
    indicator: Option<Indicator<Controller>>,
    config: CarouselConfig,
}

impl core::fmt::Debug for Carousel {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Carousel")
            .field("phase", &self.ctrl.phase)
            .field("index", &self.ctrl.index)
            .field("geometry", &self.ctrl.geometry)
            .field("moving", &self.ctrl.moving)
            .field("scene", &self.ctrl.scene)
            .finish_non_exhaustive()
    }
}

impl Carousel {
    /// Locate the area, track and slides with the configured selectors.
    pub fn new(scene: Scene, config: CarouselConfig) -> Result<Self, CarouselError> {
        let area = find_one(&scene, "area", &config.area)?;
        let track = find_one(&scene, "view", &config.view)?;
        let items = scene.query_selector_all(None, &parse_selector("item", &config.item)?);
        Self::with_elements(scene, CarouselElements { area, track, items }, config)
    }

    /// Use explicit element handles.
    pub fn with_elements(
        scene: Scene,
        elements: CarouselElements,
        config: CarouselConfig,
    ) -> Result<Self, CarouselError> {
        for (role, id) in [("area", elements.area), ("view", elements.track)] {
            if !scene.is_alive(id) {
                return Err(CarouselError::MissingElement {
                    role,
                    selector: format!("{id:?}"),
                });
            }
        }
        if elements.items.len() < MIN_SLIDES {
            return Err(CarouselError::TooFewSlides {
                found: elements.items.len(),
                min: MIN_SLIDES,
            });
        }
        if elements
            .items
            .iter()
            .any(|i| scene.parent(*i) != Some(elements.track))
        {
            return Err(CarouselError::DetachedSlides);
        }
        let transition = config.transition()?;
        let ctrl = Controller {
            scene,
            index: LoopIndex::new(elements.items.len()),
            elements,
            dot: None,
            clones: Vec::new(),
            geometry: TrackGeometry::default(),
            transition,
            completion: config.completion,
            moving: false,
            snap_pending: false,
            timers: TimerQueue::default(),
            now: Duration::ZERO,
            motion: None,
            phase: Phase::Constructed,
        };
        Ok(Self {
            ctrl,
            pager: None,
            indicator: None,
            config,
        })
    }

    /// Start loading. Loads immediately unless the area contains an image.
    pub fn init(&mut self) -> Result<InitStatus, CarouselError> {
        match self.ctrl.phase {
            Phase::Loaded => return Err(CarouselError::AlreadyLoaded),
            Phase::AwaitingImage => {
                return Ok(InitStatus::AwaitingImage {
                    src: self.first_image_src(),
                });
            }
            Phase::Constructed => {}
        }
        let area = self.ctrl.elements.area;
        if self
            .ctrl
            .scene
            .query_selector(Some(area), &Selector::tag("img"))
            .is_some()
        {
            self.ctrl.phase = Phase::AwaitingImage;
            let src = self.first_image_src();
            tracing::debug!(?src, "waiting for first image");
            return Ok(InitStatus::AwaitingImage { src });
        }
        self.load()?;
        Ok(InitStatus::Loaded)
    }

    /// Report that the image named by [`InitStatus::AwaitingImage`] has loaded.
    pub fn image_loaded(&mut self) -> Result<(), CarouselError> {
        match self.ctrl.phase {
            Phase::Constructed => Err(CarouselError::NotInitialized),
            Phase::Loaded => Err(CarouselError::AlreadyLoaded),
            Phase::AwaitingImage => self.load(),
        }
    }

    fn load(&mut self) -> Result<(), CarouselError> {
        self.ctrl.measure()?;
        self.ctrl.clone_first_and_last()?;
        let area = self.ctrl.elements.area;
        let len = self.ctrl.elements.items.len();

        if self.config.has_indicator {
            let mut indicator = Indicator::mount(&mut self.ctrl.scene, area, len);
            indicator.add_event_listener(
                CarouselEvent::IndicatorClicked,
                |c: &mut Controller, args: Option<&usize>| {
                    if let Some(&i) = args {
                        c.navigate(Direction::To(i));
                    }
                },
            );
            self.indicator = Some(indicator);
        }

        if self.config.has_pager {
            let mut pager = Pager::mount(&mut self.ctrl.scene, area);
            pager.add_event_listener(CarouselEvent::NextClicked, |c: &mut Controller, _| {
                c.navigate(Direction::Next);
            });
            pager.add_event_listener(CarouselEvent::PrevClicked, |c: &mut Controller, _| {
                c.navigate(Direction::Prev);
            });
            self.pager = Some(pager);
        }

        self.ctrl.scene.layout_row(self.ctrl.elements.track);
        self.ctrl.jump_to_initial(self.config.initial_index);
        self.sync_indicator();
        self.ctrl.phase = Phase::Loaded;
        tracing::info!(
            slides = len,
            child_width = self.ctrl.geometry.child_width,
            area_width = self.ctrl.geometry.area_width,
            "carousel loaded"
        );
        Ok(())
    }

    fn first_image_src(&self) -> Option<String> {
        let area = self.ctrl.elements.area;
        self.ctrl
            .scene
            .query_selector(Some(area), &Selector::tag("img"))
            .and_then(|img| self.ctrl.scene.element(img))
            .and_then(|e| e.attribute("src"))
            .map(String::from)
            .or_else(|| self.config.first_src.clone())
    }

    /// Run a navigation intent at time `now`, as if the matching control had been clicked.
    ///
    /// The clock is advanced to `now` first, so the move's animation window starts at the
    /// moment of input even if the host stopped ticking while idle.
    ///
    /// Returns false if the intent was ignored (not loaded, or a move is running).
    pub fn navigate(&mut self, direction: Direction, now: Duration) -> bool {
        self.tick(now);
        let moved = self.ctrl.navigate(direction);
        self.sync_indicator();
        moved
    }

    /// Route a click at time `now` on `node` (or its nearest ancestor that is a control) to
    /// the pager or indicator. Returns true if a control received it.
    pub fn click(&mut self, node: NodeId, now: Duration) -> bool {
        self.tick(now);
        let routed = self.route_click(node);
        self.sync_indicator();
        routed
    }

    /// Hit-test `pt` against visible, pickable elements and route the click as
    /// [`Carousel::click`] does.
    pub fn click_at(&mut self, pt: Point, now: Duration) -> bool {
        let filter = QueryFilter {
            visible_only: true,
            pickable_only: true,
        };
        match self.ctrl.scene.hit_test_point(pt, filter) {
            Some(hit) => self.click(hit.node, now),
            None => false,
        }
    }

    fn route_click(&mut self, node: NodeId) -> bool {
        let mut target = Some(node);
        while let Some(id) = target {
            if let Some(pager) = self.pager.as_mut()
                && pager.click(&mut self.ctrl, id)
            {
                return true;
            }
            if let Some(indicator) = self.indicator.as_mut()
                && indicator.click(&mut self.ctrl, id)
            {
                return true;
            }
            target = self.ctrl.scene.parent(id);
        }
        false
    }

    fn sync_indicator(&mut self) {
        if let Some(index) = self.ctrl.dot.take()
            && let Some(indicator) = &self.indicator
        {
            indicator.set_current_style(&mut self.ctrl.scene, index);
        }
    }

    /// Advance the clock to `now` and run every timer that has come due.
    ///
    /// Time never goes backwards; an earlier `now` is treated as the latest one seen.
    pub fn tick(&mut self, now: Duration) {
        if now > self.ctrl.now {
            self.ctrl.now = now;
        }
        for task in self.ctrl.timers.drain_due(self.ctrl.now) {
            self.ctrl.run(task);
        }
        self.sync_indicator();
    }

    /// Report that the track's transition finished.
    ///
    /// Only meaningful with [`Completion::TransitionEnd`]; returns false otherwise or when no
    /// move is running.
    pub fn transition_end(&mut self) -> bool {
        let ctrl = &mut self.ctrl;
        if ctrl.completion != Completion::TransitionEnd || !ctrl.moving {
            tracing::trace!("transition end ignored");
            return false;
        }
        ctrl.end_move();
        if core::mem::take(&mut ctrl.snap_pending) {
            ctrl.snap_reset();
        }
        self.sync_indicator();
        true
    }

    /// Track translation at `now`, interpolated along the running transition.
    ///
    /// For hosts that animate the track themselves instead of handing the CSS to a browser.
    pub fn offset_at(&self, now: Duration) -> f64 {
        self.ctrl.offset_at(now)
    }

    /// When the next timer is due, if any.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.ctrl.timers.next_due()
    }

    /// Slide shown once the latest move settled.
    pub fn current_index(&self) -> usize {
        self.ctrl.index.current()
    }

    /// Target of the latest intent; outside `0..N` while a wrap is pending.
    pub fn next_index(&self) -> isize {
        self.ctrl.index.next()
    }

    /// True while a wrap is pending.
    pub fn needs_reset(&self) -> bool {
        self.ctrl.index.needs_reset()
    }

    /// True while a move is running.
    pub fn is_moving(&self) -> bool {
        self.ctrl.moving
    }

    /// True once loading finished.
    pub fn is_loaded(&self) -> bool {
        self.ctrl.phase == Phase::Loaded
    }

    /// Number of logical slides.
    pub fn len(&self) -> usize {
        self.ctrl.index.len()
    }

    /// Always false; construction requires at least [`MIN_SLIDES`] slides.
    pub fn is_empty(&self) -> bool {
        self.ctrl.index.is_empty()
    }

    /// Measured geometry.
    pub fn geometry(&self) -> &TrackGeometry {
        &self.ctrl.geometry
    }

    /// Element handles.
    pub fn elements(&self) -> &CarouselElements {
        &self.ctrl.elements
    }

    /// Indicator dots, empty without an indicator.
    pub fn dots(&self) -> &[NodeId] {
        match &self.indicator {
            Some(indicator) => indicator.dots(),
            None => &[],
        }
    }

    /// Clone slides in creation order: clones of slides `0`, `1`, `N-2`, `N-1`.
    pub fn clones(&self) -> &[NodeId] {
        &self.ctrl.clones
    }

    /// The pager's `(prev, next)` controls, if mounted.
    pub fn pager_controls(&self) -> Option<(NodeId, NodeId)> {
        self.pager.as_ref().map(|p| (p.prev_node(), p.next_node()))
    }

    /// Configuration the carousel was built with.
    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    /// The scene.
    pub fn scene(&self) -> &Scene {
        &self.ctrl.scene
    }

    /// Mutable scene access, e.g. to update bounds after a resize.
    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.ctrl.scene
    }

    /// Drain the scene's damage.
    pub fn commit(&mut self) -> Damage {
        self.ctrl.scene.commit()
    }

    /// Give the scene back.
    pub fn into_scene(self) -> Scene {
        self.ctrl.scene
    }
}

fn parse_selector(role: &'static str, selector: &str) -> Result<Selector, CarouselError> {
    Selector::parse(selector).map_err(|source| CarouselError::Selector { role, source })
}

fn find_one(scene: &Scene, role: &'static str, selector: &str) -> Result<NodeId, CarouselError> {
    scene
        .query_selector(None, &parse_selector(role, selector)?)
        .ok_or_else(|| CarouselError::MissingElement {
            role,
            selector: String::from(selector),
        })
}
