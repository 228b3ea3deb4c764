// Copyright 2026 the Filmstrip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Filmstrip Swipe: single-pointer swipe sessions and commit rules.
//!
//! This crate provides the gesture half of a touch carousel: stateful tracking
//! of one pointer from contact to release, and the pure decision rules that
//! turn a finished swipe into a number of committed steps. It handles:
//!
//! - [`SwipeTracker`]: session state across start/move/end samples (origin,
//!   start time, running delta, and direction turns).
//! - [`commit_steps`]: the release decision. A short swipe commits one step
//!   past a distance threshold; a slower one commits by fractions of the
//!   viewport crossed. Cross-axis movement never commits.
//! - [`attenuate`]: the square-root resistance curve applied when a bounded
//!   strip is dragged past its edge.
//!
//! ## Design Philosophy
//!
//! Input arrives as plain [`PointerSample`] values (a `kurbo::Point` plus a
//! millisecond timestamp and a contact count), not as framework event objects.
//! Samples with more than one contact are ignored rather than treated as
//! errors, so hosts can forward raw touch streams unfiltered. The tracker
//! knows nothing about axes or item counts; hosts project the 2D delta onto
//! their travel axis and feed the scalar components to the decision rules.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use filmstrip_swipe::{CommitRules, Direction, PointerSample, SwipeTracker, commit_steps};
//!
//! let mut swipe = SwipeTracker::default();
//! swipe.begin(&PointerSample::single(Point::new(200.0, 10.0), 1_000));
//!
//! // Finger travels 80px to the left in 150ms: a flick.
//! let delta = swipe
//!     .update(&PointerSample::single(Point::new(120.0, 12.0), 1_150))
//!     .unwrap();
//! assert_eq!(Direction::from_travel(delta.x), Direction::Forward);
//!
//! let end = swipe.finish().unwrap();
//! let steps = commit_steps(end.delta.x, end.delta.y, 320.0, 150, &CommitRules::default());
//! assert_eq!(steps, 1);
//! ```
//!
//! This crate is `no_std` compatible (enable the `libm` feature instead of the
//! default `std`).

#![no_std]

mod commit;
mod math;
mod session;

pub use commit::{CommitRules, Direction, StepLimit, attenuate, commit_steps};
pub use session::{PointerSample, SwipeEnd, SwipeTracker};
