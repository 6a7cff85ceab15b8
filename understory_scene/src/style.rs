// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Inline style: a transform plus an optional transition, and the easing curves transitions use.
//!
//! Styles are data. This crate never runs an animation; hosts either hand the CSS text to a
//! browser ([`Style::transform_css`], [`Style::transition_css`]) or sample
//! [`Transition::progress`] themselves each frame.

use alloc::format;
use alloc::string::{String, ToString};
use core::fmt;
use core::str::FromStr;
use core::time::Duration;

use kurbo::{Affine, CubicBez, ParamCurve, Point};

use crate::error::EasingParseError;

/// A CSS timing function.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub enum Easing {
    /// `ease`, equivalent to `cubic-bezier(0.25, 0.1, 0.25, 1)`.
    #[default]
    Ease,
    /// `linear`.
    Linear,
    /// `ease-in`.
    EaseIn,
    /// `ease-out`.
    EaseOut,
    /// `ease-in-out`.
    EaseInOut,
    /// `cubic-bezier(x1, y1, x2, y2)`; `x1` and `x2` lie in `0..=1`.
    CubicBezier(f64, f64, f64, f64),
}

impl Easing {
    /// Control points `(x1, y1, x2, y2)` of the equivalent cubic Bézier.
    pub fn control_points(self) -> (f64, f64, f64, f64) {
        match self {
            Self::Ease => (0.25, 0.1, 0.25, 1.0),
            Self::Linear => (0.0, 0.0, 1.0, 1.0),
            Self::EaseIn => (0.42, 0.0, 1.0, 1.0),
            Self::EaseOut => (0.0, 0.0, 0.58, 1.0),
            Self::EaseInOut => (0.42, 0.0, 0.58, 1.0),
            Self::CubicBezier(x1, y1, x2, y2) => (x1, y1, x2, y2),
        }
    }

    /// The timing curve from `(0, 0)` to `(1, 1)`.
    pub fn curve(self) -> CubicBez {
        let (x1, y1, x2, y2) = self.control_points();
        CubicBez::new(
            Point::ZERO,
            Point::new(x1, y1),
            Point::new(x2, y2),
            Point::new(1.0, 1.0),
        )
    }

    /// Eased progress for linear time `t`, clamped to `0..=1`.
    ///
    /// Solves `x(s) = t` on the timing curve by bisection and returns `y(s)`.
    pub fn sample(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        if matches!(self, Self::Linear) || t == 0.0 || t == 1.0 {
            return t;
        }
        let curve = self.curve();
        let (mut lo, mut hi) = (0.0_f64, 1.0_f64);
        let mut s = t;
        for _ in 0..48 {
            s = 0.5 * (lo + hi);
            let x = curve.eval(s).x;
            if x < t {
                lo = s;
            } else {
                hi = s;
            }
        }
        curve.eval(s).y
    }
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ease => f.write_str("ease"),
            Self::Linear => f.write_str("linear"),
            Self::EaseIn => f.write_str("ease-in"),
            Self::EaseOut => f.write_str("ease-out"),
            Self::EaseInOut => f.write_str("ease-in-out"),
            Self::CubicBezier(x1, y1, x2, y2) => {
                write!(f, "cubic-bezier({x1}, {y1}, {x2}, {y2})")
            }
        }
    }
}

impl FromStr for Easing {
    type Err = EasingParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        const PREFIX: &str = "cubic-bezier(";
        let s = s.trim();
        for (name, easing) in [
            ("ease", Self::Ease),
            ("linear", Self::Linear),
            ("ease-in", Self::EaseIn),
            ("ease-out", Self::EaseOut),
            ("ease-in-out", Self::EaseInOut),
        ] {
            if s.eq_ignore_ascii_case(name) {
                return Ok(easing);
            }
        }

        let is_bezier = s
            .get(..PREFIX.len())
            .is_some_and(|p| p.eq_ignore_ascii_case(PREFIX));
        if !is_bezier {
            return Err(EasingParseError::Unknown(s.to_string()));
        }
        let invalid = || EasingParseError::InvalidCubicBezier(s.to_string());
        let body = s[PREFIX.len()..].strip_suffix(')').ok_or_else(invalid)?;
        let mut values = [0.0_f64; 4];
        let mut parts = body.split(',');
        for v in &mut values {
            *v = parts
                .next()
                .and_then(|p| p.trim().parse::<f64>().ok())
                .filter(|v| v.is_finite())
                .ok_or_else(invalid)?;
        }
        if parts.next().is_some() {
            return Err(invalid());
        }
        let [x1, y1, x2, y2] = values;
        if !(0.0..=1.0).contains(&x1) || !(0.0..=1.0).contains(&x2) {
            return Err(invalid());
        }
        Ok(Self::CubicBezier(x1, y1, x2, y2))
    }
}

/// A transition on the `transform` property.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Transition {
    /// How long the transition runs.
    pub duration: Duration,
    /// Timing function.
    pub easing: Easing,
    /// Delay before the transition starts.
    pub delay: Duration,
}

impl Transition {
    /// A transition with no delay.
    pub const fn new(duration: Duration, easing: Easing) -> Self {
        Self {
            duration,
            easing,
            delay: Duration::ZERO,
        }
    }

    /// Eased progress in `0..=1` after `elapsed` time since the transition was applied.
    ///
    /// A zero duration completes immediately once the delay has passed.
    pub fn progress(&self, elapsed: Duration) -> f64 {
        if elapsed < self.delay {
            return 0.0;
        }
        let active = elapsed - self.delay;
        if self.duration.is_zero() || active >= self.duration {
            return 1.0;
        }
        self.easing
            .sample(active.as_secs_f64() / self.duration.as_secs_f64())
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "transform {}ms {}",
            self.duration.as_millis(),
            self.easing
        )?;
        if !self.delay.is_zero() {
            write!(f, " {}ms", self.delay.as_millis())?;
        }
        Ok(())
    }
}

/// Inline style of an element.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Style {
    /// Local transform relative to parent space.
    pub transform: Affine,
    /// Transition applied when `transform` changes; `None` snaps.
    pub transition: Option<Transition>,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            transform: Affine::IDENTITY,
            transition: None,
        }
    }
}

impl Style {
    /// CSS text for `transform`.
    ///
    /// Pure horizontal translations render as `translateX(..px)`, the identity as `none`,
    /// anything else as `matrix(..)`.
    pub fn transform_css(&self) -> String {
        let [a, b, c, d, e, f] = self.transform.as_coeffs();
        if [a, b, c, d, f] == [1.0, 0.0, 0.0, 1.0, 0.0] {
            if e == 0.0 {
                return String::from("none");
            }
            return format!("translateX({e}px)");
        }
        format!("matrix({a}, {b}, {c}, {d}, {e}, {f})")
    }

    /// CSS text for `transition`.
    pub fn transition_css(&self) -> String {
        match &self.transition {
            Some(t) => t.to_string(),
            None => String::from("none"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Vec2;

    fn close(a: f64, b: f64) -> bool {
        a - b < 1e-6 && b - a < 1e-6
    }

    #[test]
    fn parse_keywords_and_bezier() {
        assert_eq!("ease".parse::<Easing>(), Ok(Easing::Ease));
        assert_eq!(" Ease-In-Out ".parse::<Easing>(), Ok(Easing::EaseInOut));
        assert_eq!(
            "cubic-bezier(0.1, 0.7, 1.0, 0.1)".parse::<Easing>(),
            Ok(Easing::CubicBezier(0.1, 0.7, 1.0, 0.1))
        );
    }

    #[test]
    fn parse_rejects_bad_input() {
        assert!(matches!(
            "bounce".parse::<Easing>(),
            Err(EasingParseError::Unknown(_))
        ));
        assert!(matches!(
            "cubic-bezier(0.1, 0.7, 1.0)".parse::<Easing>(),
            Err(EasingParseError::InvalidCubicBezier(_))
        ));
        assert!(matches!(
            "cubic-bezier(1.5, 0, 0, 1)".parse::<Easing>(),
            Err(EasingParseError::InvalidCubicBezier(_))
        ));
        assert!(matches!(
            "cubic-bezier(0, 0, 1, 1".parse::<Easing>(),
            Err(EasingParseError::InvalidCubicBezier(_))
        ));
    }

    #[test]
    fn display_matches_css() {
        assert_eq!(Easing::EaseOut.to_string(), "ease-out");
        let t = Transition::new(Duration::from_millis(600), Easing::Ease);
        assert_eq!(t.to_string(), "transform 600ms ease");
        let t = Transition {
            delay: Duration::from_millis(50),
            ..t
        };
        assert_eq!(t.to_string(), "transform 600ms ease 50ms");
    }

    #[test]
    fn sample_endpoints_and_monotonic() {
        for easing in [
            Easing::Ease,
            Easing::Linear,
            Easing::EaseIn,
            Easing::EaseOut,
            Easing::EaseInOut,
        ] {
            assert_eq!(easing.sample(0.0), 0.0);
            assert_eq!(easing.sample(1.0), 1.0);
            assert_eq!(easing.sample(-3.0), 0.0);
            let mut prev = 0.0;
            for i in 1..=20 {
                let y = easing.sample(f64::from(i) / 20.0);
                assert!(y >= prev - 1e-9, "{easing} must be monotonic");
                prev = y;
            }
        }
        assert_eq!(Easing::Linear.sample(0.3), 0.3);
        // ease-in-out is symmetric around the midpoint.
        let mid = Easing::EaseInOut.sample(0.5);
        assert!(close(mid, 0.5));
    }

    #[test]
    fn progress_respects_delay_and_duration() {
        let t = Transition {
            duration: Duration::from_millis(100),
            easing: Easing::Linear,
            delay: Duration::from_millis(20),
        };
        assert_eq!(t.progress(Duration::from_millis(10)), 0.0);
        assert!(close(t.progress(Duration::from_millis(70)), 0.5));
        assert_eq!(t.progress(Duration::from_millis(500)), 1.0);

        let instant = Transition::new(Duration::ZERO, Easing::Ease);
        assert_eq!(instant.progress(Duration::ZERO), 1.0);
    }

    #[test]
    fn transform_css_forms() {
        let mut s = Style::default();
        assert_eq!(s.transform_css(), "none");
        assert_eq!(s.transition_css(), "none");
        s.transform = Affine::translate(Vec2::new(-900.0, 0.0));
        assert_eq!(s.transform_css(), "translateX(-900px)");
        s.transform = Affine::scale(2.0);
        assert_eq!(s.transform_css(), "matrix(2, 0, 0, 2, 0, 0)");
    }
}
