// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Loop index arithmetic.
//!
//! The visible strip is `[clone(N-2), clone(N-1), slide 0 .. slide N-1, clone(0), clone(1)]`.
//! Stepping past either end lands on a clone: the index leaves `0..N` for the length of one
//! animation, [`LoopIndex::needs_reset`] turns true, and [`LoopIndex::reset_index`] later wraps
//! it back onto the real slide showing the same content.

/// A navigation intent.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    /// One slide forward.
    Next,
    /// One slide back.
    Prev,
    /// Jump to a logical slide.
    To(usize),
}

/// Current and next slide indices for a carousel of `len` logical slides.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoopIndex {
    len: usize,
    current: isize,
    next: isize,
    needs_reset: bool,
}

impl LoopIndex {
    /// Start at slide 0 of `len` slides.
    ///
    /// `len` must be non-zero.
    pub fn new(len: usize) -> Self {
        debug_assert!(len > 0, "a carousel needs at least one slide");
        Self {
            len,
            current: 0,
            next: 0,
            needs_reset: false,
        }
    }

    /// Number of logical slides.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always false; a loop index has at least one slide.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The slide shown once the last completed move settled.
    pub fn current(&self) -> usize {
        self.current.max(0) as usize
    }

    /// Target index of the latest intent. Outside `0..len` while a wrap is pending.
    pub fn next(&self) -> isize {
        self.next
    }

    /// True when [`LoopIndex::next`] points at a clone and must be wrapped.
    pub fn needs_reset(&self) -> bool {
        self.needs_reset
    }

    /// Apply an intent to `next`. Leaving `0..len` raises [`LoopIndex::needs_reset`].
    ///
    /// A jump past the end is clamped to `len`, the first appended clone.
    pub fn get_next_index(&mut self, direction: Direction) {
        match direction {
            Direction::Next => self.next += 1,
            Direction::Prev => self.next -= 1,
            Direction::To(i) => {
                let i = isize::try_from(i).unwrap_or(isize::MAX);
                self.next = i.min(self.len_isize());
            }
        }
        if !self.in_range(self.next) {
            self.needs_reset = true;
        }
    }

    /// Wrap `next` back into `0..len`: past the end goes to the first slide, before the start
    /// goes to the last. Clears [`LoopIndex::needs_reset`].
    pub fn reset_index(&mut self) {
        self.needs_reset = false;
        self.next = self.wrapped(self.next);
    }

    /// The logical slide `next` shows, without mutating anything.
    pub fn normalized_next(&self) -> usize {
        self.wrapped(self.next) as usize
    }

    /// Make `next` the current slide.
    pub fn commit(&mut self) {
        self.current = self.next;
    }

    fn len_isize(&self) -> isize {
        self.len as isize
    }

    fn in_range(&self, i: isize) -> bool {
        (0..self.len_isize()).contains(&i)
    }

    fn wrapped(&self, i: isize) -> isize {
        if i >= self.len_isize() {
            0
        } else if i < 0 {
            self.len_isize() - 1
        } else {
            i
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(len: usize, i: usize) -> LoopIndex {
        let mut idx = LoopIndex::new(len);
        idx.get_next_index(Direction::To(i));
        idx.commit();
        idx
    }

    #[test]
    fn reset_always_lands_in_range() {
        for len in 3..=8 {
            for start in 0..len {
                for dir in [Direction::Next, Direction::Prev] {
                    let mut idx = at(len, start);
                    idx.get_next_index(dir);
                    idx.reset_index();
                    assert!((0..len as isize).contains(&idx.next()));
                    assert!(!idx.needs_reset());
                }
            }
        }
    }

    #[test]
    fn next_then_prev_is_identity_inside() {
        let len = 6;
        for start in 1..len - 1 {
            let mut idx = at(len, start);
            idx.get_next_index(Direction::Next);
            idx.get_next_index(Direction::Prev);
            assert_eq!(idx.next(), start as isize);
            assert!(!idx.needs_reset());
        }
    }

    #[test]
    fn next_from_last_wraps_to_first() {
        let mut idx = at(5, 4);
        idx.get_next_index(Direction::Next);
        assert_eq!(idx.next(), 5, "lands on the appended clone first");
        assert!(idx.needs_reset());
        assert_eq!(idx.normalized_next(), 0);
        idx.reset_index();
        assert_eq!(idx.next(), 0);
    }

    #[test]
    fn prev_from_first_wraps_to_last() {
        let mut idx = LoopIndex::new(5);
        idx.get_next_index(Direction::Prev);
        assert_eq!(idx.next(), -1);
        assert!(idx.needs_reset());
        idx.reset_index();
        assert_eq!(idx.next(), 4);
    }

    #[test]
    fn jump_sets_directly() {
        let mut idx = LoopIndex::new(5);
        idx.get_next_index(Direction::To(3));
        assert_eq!(idx.next(), 3);
        assert!(!idx.needs_reset());
        assert_eq!(idx.current(), 0, "current moves only on commit");
        idx.commit();
        assert_eq!(idx.current(), 3);

        // Out-of-range jumps land on the first appended clone and wrap to the first slide.
        idx.get_next_index(Direction::To(9));
        assert_eq!(idx.next(), 5);
        assert!(idx.needs_reset());
        idx.reset_index();
        assert_eq!(idx.next(), 0);
    }

    #[test]
    fn huge_jump_wraps_to_first() {
        let mut idx = at(5, 2);
        idx.get_next_index(Direction::To(usize::MAX));
        assert_eq!(idx.next(), 5);
        assert!(idx.needs_reset());
        assert_eq!(idx.normalized_next(), 0);
        idx.reset_index();
        assert_eq!(idx.next(), 0);
    }
}
