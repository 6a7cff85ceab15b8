// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Track geometry: where the strip must be translated so slide `next` sits centered in the area.

/// Clone slides kept on each side of the real slides.
pub const CLONE_PADDING: usize = 2;

/// Offset that centers one slide of `child_width` inside an area of `area_width`.
pub fn diff_width(area_width: f64, child_width: f64) -> f64 {
    (area_width - child_width) / 2.0
}

/// Horizontal translation of the track that centers logical slide `next`.
///
/// `-(2 × child_width)` skips the prepended clones, `-(next × child_width)` scrolls to the
/// slide, and [`diff_width`] centers it.
pub fn next_position(area_width: f64, child_width: f64, next: isize) -> f64 {
    -(CLONE_PADDING as f64 * child_width) - next as f64 * child_width
        + diff_width(area_width, child_width)
}

/// Measured and derived track geometry.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct TrackGeometry {
    /// Width of the visible area.
    pub area_width: f64,
    /// Width of one slide.
    pub child_width: f64,
    /// Width of the whole strip, clones included.
    pub content_width: f64,
    /// Centering offset from the latest [`TrackGeometry::calc_next_position`].
    pub diff_width: f64,
    /// Target translation from the latest [`TrackGeometry::calc_next_position`].
    pub next_position: f64,
}

impl TrackGeometry {
    /// Geometry for `len` logical slides of `child_width` in an area of `area_width`.
    pub fn measure(area_width: f64, child_width: f64, len: usize) -> Self {
        Self {
            area_width,
            child_width,
            content_width: child_width * (len + 2 * CLONE_PADDING) as f64,
            diff_width: 0.0,
            next_position: 0.0,
        }
    }

    /// Recompute [`TrackGeometry::diff_width`] and [`TrackGeometry::next_position`] for `next`.
    pub fn calc_next_position(&mut self, next: isize) -> f64 {
        self.diff_width = diff_width(self.area_width, self.child_width);
        self.next_position = next_position(self.area_width, self.child_width, next);
        self.next_position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_position_example() {
        let mut g = TrackGeometry::measure(900.0, 300.0, 5);
        assert_eq!(g.content_width, 2700.0);
        assert_eq!(g.calc_next_position(2), -900.0);
        assert_eq!(g.diff_width, 300.0);
    }

    #[test]
    fn position_is_pure() {
        let a = next_position(640.0, 320.0, 3);
        let b = next_position(640.0, 320.0, 3);
        assert_eq!(a, b);
        let mut g = TrackGeometry::measure(640.0, 320.0, 4);
        assert_eq!(g.calc_next_position(3), a);
        assert_eq!(g.calc_next_position(3), a);
    }

    #[test]
    fn clone_slots_are_one_width_apart() {
        // -1 is the prepended clone of the last slide, N is the appended clone of the first.
        let w = 200.0;
        assert_eq!(next_position(w, w, -1), -w);
        assert_eq!(next_position(w, w, 0), -2.0 * w);
        assert_eq!(next_position(w, w, 5), -7.0 * w);
    }

    #[test]
    fn full_width_area_has_no_centering() {
        assert_eq!(diff_width(300.0, 300.0), 0.0);
    }
}
