// Copyright 2026 the Filmstrip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Release decision rules: direction, attenuation, and committed steps.

use crate::math;

/// Travel direction of a swipe along the travel axis.
///
/// The sign convention matches what a carousel needs: positive raw travel
/// (finger moving toward +axis, i.e. right or down) reveals the *previous*
/// item, so it maps to [`Direction::Back`]; negative travel advances to the
/// next item and maps to [`Direction::Forward`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum Direction {
    /// Toward the previous item (finger moved toward +axis).
    Back,
    /// No travel.
    #[default]
    None,
    /// Toward the next item (finger moved toward -axis).
    Forward,
}

impl Direction {
    /// Classifies a raw travel delta along the axis.
    #[must_use]
    pub fn from_travel(delta: f64) -> Self {
        if delta > 0.0 {
            Self::Back
        } else if delta < 0.0 {
            Self::Forward
        } else {
            Self::None
        }
    }

    /// The signed cursor step for this direction: -1, 0, or +1.
    #[must_use]
    pub fn step(self) -> i64 {
        match self {
            Self::Back => -1,
            Self::None => 0,
            Self::Forward => 1,
        }
    }
}

/// Cap on how many steps a single swipe may commit.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum StepLimit {
    /// A swipe commits at most one step, however far it travelled.
    One,
    /// A long slow swipe may commit several steps (one per viewport crossed).
    #[default]
    Unbounded,
}

/// Thresholds for the release decision.
///
/// The defaults reproduce the common touch-slider feel: a swipe released
/// within 200 ms commits when it travelled more than 30 px; a slower swipe
/// commits one step per viewport extent crossed, rounded to nearest.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CommitRules {
    /// Releases faster than this use the flick distance test.
    pub flick_window_ms: u64,
    /// Minimum travel for a flick to commit.
    pub flick_distance: f64,
    /// Cap on committed steps per swipe.
    pub step_limit: StepLimit,
}

impl Default for CommitRules {
    fn default() -> Self {
        Self {
            flick_window_ms: 200,
            flick_distance: 30.0,
            step_limit: StepLimit::Unbounded,
        }
    }
}

/// Square-root resistance applied past a bounded edge.
///
/// Sign-preserving: the square root is taken of the magnitude, so pulling
/// 100 px past the edge moves the strip only 10 px, and further travel yields
/// ever less movement.
#[must_use]
pub fn attenuate(travel: f64) -> f64 {
    if travel < 0.0 {
        -math::sqrt(-travel)
    } else {
        math::sqrt(travel)
    }
}

/// Decides how many steps a finished swipe commits.
///
/// `along` and `cross` are the components of the total delta on and across the
/// travel axis; `extent` is the viewport extent along it; `elapsed_ms` is the
/// session duration.
///
/// A swipe that did not move or that mostly drifted across the axis commits
/// zero steps, as does a slow swipe that crossed less than half the viewport.
/// The result is capped by [`CommitRules::step_limit`]; callers apply
/// direction and boundary policy themselves.
#[must_use]
pub fn commit_steps(
    along: f64,
    cross: f64,
    extent: f64,
    elapsed_ms: u64,
    rules: &CommitRules,
) -> u32 {
    let distance = along.abs();
    if !distance.is_finite() || distance == 0.0 || distance < cross.abs() {
        return 0;
    }

    let steps = if elapsed_ms < rules.flick_window_ms {
        u32::from(distance > rules.flick_distance)
    } else if extent.is_finite() && extent > 0.0 {
        let crossed = math::round(distance / extent);
        #[allow(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            reason = "rounded from a non-negative finite ratio, clamped below u32::MAX"
        )]
        {
            crossed.min(f64::from(u32::MAX)) as u32
        }
    } else {
        // No usable viewport measurement; a slow swipe cannot commit.
        0
    };

    match rules.step_limit {
        StepLimit::One => steps.min(1),
        StepLimit::Unbounded => steps,
    }
}
