// Copyright 2026 the Filmstrip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Size, Vec2};

/// Travel axis of a carousel.
///
/// The model is one-dimensional; this enum is where its scalar space meets the
/// host's 2D coordinates. Splitting a pointer delta yields the on-axis travel
/// and the cross-axis drift, and embedding a scalar offset yields the 2D
/// offset the host applies.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum Axis {
    /// Items advance along X; swipes travel left/right.
    #[default]
    Horizontal,
    /// Items advance along Y; swipes travel up/down.
    Vertical,
}

impl Axis {
    /// Viewport extent along the travel axis.
    #[must_use]
    pub fn extent_of(self, size: Size) -> f64 {
        match self {
            Self::Horizontal => size.width,
            Self::Vertical => size.height,
        }
    }

    /// Splits a 2D delta into `(along, cross)` components.
    #[must_use]
    pub fn split(self, delta: Vec2) -> (f64, f64) {
        match self {
            Self::Horizontal => (delta.x, delta.y),
            Self::Vertical => (delta.y, delta.x),
        }
    }

    /// Embeds a scalar travel offset as a 2D offset.
    #[must_use]
    pub fn vec(self, along: f64) -> Vec2 {
        match self {
            Self::Horizontal => Vec2::new(along, 0.0),
            Self::Vertical => Vec2::new(0.0, along),
        }
    }
}
