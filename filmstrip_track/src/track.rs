// Copyright 2026 the Filmstrip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::placement::{Placement, Placements};

/// Position model for a strip of items viewed one viewport at a time.
///
/// `Track` holds the unbounded logical cursor, the viewport extent along the
/// travel axis, and the wrap/clamp policy. Looping tracks let the cursor run
/// freely in both directions; bounded tracks keep it inside `[0, len - 1]` on
/// every mutation. The display position is always the floored-modulo image of
/// the cursor, so it stays in range even for negative cursors.
///
/// A zero item count is degenerate for a carousel; construction clamps it to a
/// single item so every later query stays total.
#[derive(Clone, Debug)]
pub struct Track {
    len: usize,
    cursor: i64,
    extent: f64,
    looped: bool,
}

impl Track {
    /// Creates a track of `len` items (clamped to at least 1), looping or
    /// bounded, with the cursor clamped into `[0, len - 1]`.
    ///
    /// The extent starts at zero; hosts feed the measured viewport in via
    /// [`Track::set_extent`] before reading offsets.
    #[must_use]
    pub fn new(len: usize, looped: bool, initial: i64) -> Self {
        let mut track = Self {
            len: len.max(1),
            cursor: 0,
            extent: 0.0,
            looped,
        };
        track.jump_to(initial);
        track
    }

    /// Number of items on the track, at least 1.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always `false`; the item count is clamped to at least 1.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns `true` when the track wraps at the ends.
    #[must_use]
    pub fn looped(&self) -> bool {
        self.looped
    }

    /// The unbounded logical cursor.
    #[must_use]
    pub fn cursor(&self) -> i64 {
        self.cursor
    }

    /// The viewport extent along the travel axis.
    #[must_use]
    pub fn extent(&self) -> f64 {
        self.extent
    }

    /// Sets the viewport extent along the travel axis.
    ///
    /// Non-finite or negative extents collapse to zero, which makes every
    /// derived offset zero rather than poisoning later arithmetic.
    pub fn set_extent(&mut self, extent: f64) {
        self.extent = if extent.is_finite() && extent > 0.0 {
            extent
        } else {
            0.0
        };
    }

    /// The display position: the cursor wrapped into `[0, len - 1]`.
    #[must_use]
    pub fn position(&self) -> usize {
        self.wrap(self.cursor)
    }

    /// Wraps an arbitrary logical index into `[0, len - 1]` (floored modulo).
    #[must_use]
    pub fn wrap(&self, index: i64) -> usize {
        let wrapped = index.rem_euclid(self.len_i64());
        #[expect(
            clippy::cast_possible_truncation,
            reason = "rem_euclid against a usize-derived len always fits"
        )]
        {
            wrapped as usize
        }
    }

    /// The container offset that shows the current item: `-cursor * extent`.
    #[must_use]
    pub fn resting_offset(&self) -> f64 {
        -(self.cursor as f64) * self.extent
    }

    /// The offset of a logical slot: `slot * extent`.
    #[must_use]
    pub fn slot_offset(&self, slot: i64) -> f64 {
        (slot as f64) * self.extent
    }

    /// Moves the cursor by `steps` (negative for backward travel).
    ///
    /// Bounded tracks clamp the result into `[0, len - 1]`.
    pub fn advance(&mut self, steps: i64) {
        let target = self.cursor.saturating_add(steps);
        self.cursor = if self.looped {
            target
        } else {
            target.clamp(0, self.len_i64() - 1)
        };
    }

    /// Sets the cursor to `index` clamped into `[0, len - 1]`.
    pub fn jump_to(&mut self, index: i64) {
        self.cursor = index.clamp(0, self.len_i64() - 1);
    }

    /// Folds the cursor onto its display position.
    ///
    /// The visible item is unchanged; only the accumulated wrap count is
    /// discarded. Hosts do this before re-deriving a layout so offsets stay
    /// near the origin.
    pub fn normalize(&mut self) {
        self.cursor = self.position() as i64;
    }

    /// The re-slot target one step in the given direction, if any.
    ///
    /// Looping tracks place item `wrap(cursor + step)` into slot
    /// `cursor + step` so the strip appears continuous across the boundary.
    /// Bounded tracks never re-slot; the edges are real.
    #[must_use]
    pub fn neighbor(&self, step: i64) -> Option<Placement> {
        if !self.looped {
            return None;
        }
        let slot = self.cursor.saturating_add(step);
        Some(Placement {
            item: self.wrap(slot),
            slot,
        })
    }

    /// Iterator over the default placements: item `i` in slot `i`.
    #[must_use]
    pub fn placements(&self) -> Placements {
        Placements::new(self.len)
    }

    fn len_i64(&self) -> i64 {
        i64::try_from(self.len).unwrap_or(i64::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::Track;

    #[test]
    fn position_is_floored_modulo_for_any_cursor() {
        let mut track = Track::new(3, true, 0);
        for n in -25_i64..=25 {
            track.advance(n - track.cursor());
            assert_eq!(track.cursor(), n);
            let expected = ((n % 3) + 3) % 3;
            assert_eq!(track.position() as i64, expected);
            assert!(track.position() < 3);
        }
    }

    #[test]
    fn position_stays_in_range_for_large_cursors() {
        let mut track = Track::new(7, true, 0);
        track.advance(1_000_000_007);
        assert!(track.position() < 7);
        track.advance(-2_000_000_014);
        assert!(track.position() < 7);
    }

    #[test]
    fn zero_len_is_clamped_to_one() {
        let track = Track::new(0, true, 5);
        assert_eq!(track.len(), 1);
        assert_eq!(track.position(), 0);
        assert_eq!(track.resting_offset(), 0.0);
    }

    #[test]
    fn initial_cursor_is_clamped() {
        assert_eq!(Track::new(3, true, -4).position(), 0);
        assert_eq!(Track::new(3, true, 9).position(), 2);
    }

    #[test]
    fn bounded_advance_clamps_at_both_ends() {
        let mut track = Track::new(3, false, 1);
        track.advance(5);
        assert_eq!(track.cursor(), 2);
        track.advance(-10);
        assert_eq!(track.cursor(), 0);
    }

    #[test]
    fn looped_advance_is_unbounded() {
        let mut track = Track::new(3, true, 0);
        track.advance(-4);
        assert_eq!(track.cursor(), -4);
        assert_eq!(track.position(), 2);
    }

    #[test]
    fn resting_offset_tracks_cursor_and_extent() {
        let mut track = Track::new(4, true, 1);
        track.set_extent(250.0);
        assert_eq!(track.resting_offset(), -250.0);
        track.advance(2);
        assert_eq!(track.resting_offset(), -750.0);
        track.advance(-4);
        assert_eq!(track.resting_offset(), 250.0);
    }

    #[test]
    fn slot_offset_is_linear_in_slot() {
        let mut track = Track::new(3, true, 0);
        track.set_extent(100.0);
        assert_eq!(track.slot_offset(-1), -100.0);
        assert_eq!(track.slot_offset(0), 0.0);
        assert_eq!(track.slot_offset(5), 500.0);
    }

    #[test]
    fn degenerate_extent_collapses_to_zero() {
        let mut track = Track::new(3, true, 2);
        track.set_extent(f64::NAN);
        assert_eq!(track.resting_offset(), 0.0);
        track.set_extent(-50.0);
        assert_eq!(track.slot_offset(3), 0.0);
    }

    #[test]
    fn normalize_keeps_the_visible_item() {
        let mut track = Track::new(3, true, 0);
        track.set_extent(300.0);
        track.advance(5);
        let shown = track.position();
        track.normalize();
        assert_eq!(track.position(), shown);
        assert_eq!(track.cursor(), shown as i64);
        assert_eq!(track.resting_offset(), -(shown as f64) * 300.0);
    }

    #[test]
    fn looped_neighbor_wraps_into_range() {
        let mut track = Track::new(3, true, 0);
        track.advance(-1);
        let back = track.neighbor(-1).unwrap();
        assert_eq!(back.slot, -2);
        assert_eq!(back.item, 1);
        let forward = track.neighbor(1).unwrap();
        assert_eq!(forward.slot, 0);
        assert_eq!(forward.item, 0);
    }

    #[test]
    fn bounded_track_never_reslots() {
        let track = Track::new(3, false, 0);
        assert!(track.neighbor(-1).is_none());
        assert!(track.neighbor(1).is_none());
    }

    #[test]
    fn placements_cover_every_item_once() {
        let track = Track::new(5, false, 0);
        let mut seen = [false; 5];
        for p in track.placements() {
            assert_eq!(p.slot, p.item as i64);
            assert!(!seen[p.item]);
            seen[p.item] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }
}
