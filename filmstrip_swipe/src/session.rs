// Copyright 2026 the Filmstrip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Swipe session tracking: one pointer from contact to release.
//!
//! ## Usage
//!
//! 1) Start a session with [`SwipeTracker::begin`] when the pointer lands.
//! 2) On each move, call [`SwipeTracker::update`] for the total delta from the
//!    origin, and [`SwipeTracker::turn`] to detect direction changes.
//! 3) On release or cancel, [`SwipeTracker::finish`] consumes the session and
//!    returns what the decision rules need.
//!
//! Samples carrying more than one contact are ignored throughout: a
//! multi-touch start never opens a session and a multi-touch move never moves
//! one. Sessions hold no framework state, so a cancelled or abandoned session
//! is dropped with [`SwipeTracker::clear`] and nothing leaks.

use kurbo::{Point, Vec2};

use crate::commit::Direction;

/// One pointer observation, as a plain value.
///
/// Hosts build these from their input events, whatever their shape (touch,
/// mouse, pointer). Times are milliseconds on any monotonic host clock; only
/// differences are used.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PointerSample {
    /// Pointer position in the host's coordinate space.
    pub position: Point,
    /// Sample time in milliseconds.
    pub time_ms: u64,
    /// Number of active contacts; more than one makes the sample inert.
    pub contacts: u32,
}

impl PointerSample {
    /// A single-contact sample.
    #[must_use]
    pub fn single(position: Point, time_ms: u64) -> Self {
        Self {
            position,
            time_ms,
            contacts: 1,
        }
    }
}

/// What a finished session hands to the decision rules.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SwipeEnd {
    /// Total delta from the session origin to the last observed position.
    pub delta: Vec2,
    /// Session start time in milliseconds.
    pub started_ms: u64,
}

/// Tracks at most one swipe session at a time.
#[derive(Clone, Debug, Default)]
pub struct SwipeTracker {
    session: Option<Session>,
}

#[derive(Clone, Debug)]
struct Session {
    origin: Point,
    started_ms: u64,
    delta: Vec2,
    last_direction: Direction,
    moved: bool,
}

impl SwipeTracker {
    /// Opens a session at the sample's position and time.
    ///
    /// Returns `false` without touching any state when the sample has more
    /// than one contact. A `begin` while a session is active restarts it from
    /// the new origin; hosts that bind start/move/end exclusively never hit
    /// this, and restarting keeps the call total for those that do not.
    pub fn begin(&mut self, sample: &PointerSample) -> bool {
        if sample.contacts > 1 {
            return false;
        }
        self.session = Some(Session {
            origin: sample.position,
            started_ms: sample.time_ms,
            delta: Vec2::ZERO,
            last_direction: Direction::None,
            moved: false,
        });
        true
    }

    /// Records a move and returns the total delta from the origin.
    ///
    /// Returns `None` when no session is active or the sample has more than
    /// one contact (the stored delta is left as it was).
    pub fn update(&mut self, sample: &PointerSample) -> Option<Vec2> {
        if sample.contacts > 1 {
            return None;
        }
        let session = self.session.as_mut()?;
        session.delta = sample.position - session.origin;
        Some(session.delta)
    }

    /// Records the move's direction; returns `true` when it warrants a
    /// re-slot.
    ///
    /// That is the case on the first move of the session and whenever the
    /// direction differs from the previous move. Returns `false` when idle.
    pub fn turn(&mut self, direction: Direction) -> bool {
        let Some(session) = self.session.as_mut() else {
            return false;
        };
        let turned = !session.moved || session.last_direction != direction;
        session.moved = true;
        session.last_direction = direction;
        turned
    }

    /// Consumes the session, if any.
    pub fn finish(&mut self) -> Option<SwipeEnd> {
        self.session.take().map(|session| SwipeEnd {
            delta: session.delta,
            started_ms: session.started_ms,
        })
    }

    /// Drops any active session without producing an end value.
    pub fn clear(&mut self) {
        self.session = None;
    }

    /// Returns `true` while a session is active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Vec2};

    use super::{PointerSample, SwipeTracker};
    use crate::commit::Direction;

    fn at(x: f64, y: f64, t: u64) -> PointerSample {
        PointerSample::single(Point::new(x, y), t)
    }

    #[test]
    fn fresh_tracker_is_idle() {
        let mut swipe = SwipeTracker::default();
        assert!(!swipe.is_active());
        assert_eq!(swipe.update(&at(5.0, 5.0, 10)), None);
        assert_eq!(swipe.finish(), None);
    }

    #[test]
    fn begin_opens_a_session_at_the_origin() {
        let mut swipe = SwipeTracker::default();
        assert!(swipe.begin(&at(10.0, 20.0, 1_000)));
        assert!(swipe.is_active());

        let end = swipe.finish().unwrap();
        assert_eq!(end.delta, Vec2::ZERO);
        assert_eq!(end.started_ms, 1_000);
        assert!(!swipe.is_active());
    }

    #[test]
    fn multi_contact_start_is_refused() {
        let mut swipe = SwipeTracker::default();
        let mut sample = at(10.0, 20.0, 1_000);
        sample.contacts = 2;
        assert!(!swipe.begin(&sample));
        assert!(!swipe.is_active());
    }

    #[test]
    fn update_returns_the_total_delta_from_the_origin() {
        let mut swipe = SwipeTracker::default();
        swipe.begin(&at(100.0, 50.0, 0));

        assert_eq!(swipe.update(&at(90.0, 52.0, 16)), Some(Vec2::new(-10.0, 2.0)));
        // Totals, not increments.
        assert_eq!(swipe.update(&at(70.0, 55.0, 32)), Some(Vec2::new(-30.0, 5.0)));
    }

    #[test]
    fn multi_contact_move_leaves_the_delta_alone() {
        let mut swipe = SwipeTracker::default();
        swipe.begin(&at(100.0, 50.0, 0));
        swipe.update(&at(90.0, 50.0, 16));

        let mut pinch = at(0.0, 0.0, 32);
        pinch.contacts = 2;
        assert_eq!(swipe.update(&pinch), None);

        let end = swipe.finish().unwrap();
        assert_eq!(end.delta, Vec2::new(-10.0, 0.0));
    }

    #[test]
    fn first_move_always_turns() {
        let mut swipe = SwipeTracker::default();
        swipe.begin(&at(0.0, 0.0, 0));
        assert!(swipe.turn(Direction::Forward));
        assert!(!swipe.turn(Direction::Forward));
    }

    #[test]
    fn direction_change_turns_again() {
        let mut swipe = SwipeTracker::default();
        swipe.begin(&at(0.0, 0.0, 0));
        assert!(swipe.turn(Direction::Forward));
        assert!(swipe.turn(Direction::Back));
        assert!(!swipe.turn(Direction::Back));
        assert!(swipe.turn(Direction::Forward));
    }

    #[test]
    fn turn_is_inert_while_idle() {
        let mut swipe = SwipeTracker::default();
        assert!(!swipe.turn(Direction::Forward));
    }

    #[test]
    fn begin_restarts_an_active_session() {
        let mut swipe = SwipeTracker::default();
        swipe.begin(&at(0.0, 0.0, 0));
        swipe.update(&at(50.0, 0.0, 100));

        swipe.begin(&at(10.0, 10.0, 200));
        let end = swipe.finish().unwrap();
        assert_eq!(end.delta, Vec2::ZERO);
        assert_eq!(end.started_ms, 200);
    }

    #[test]
    fn clear_drops_the_session_silently() {
        let mut swipe = SwipeTracker::default();
        swipe.begin(&at(0.0, 0.0, 0));
        swipe.clear();
        assert!(!swipe.is_active());
        assert_eq!(swipe.finish(), None);
    }
}
