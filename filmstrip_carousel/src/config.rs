// Copyright 2026 the Filmstrip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use filmstrip_swipe::CommitRules;

use crate::axis::Axis;
use crate::host::Easing;

/// Construction-time options for a carousel.
///
/// Every field has a usable default; [`CarouselConfig::validated`] clamps the
/// rest into range, so an arbitrary bag of values still yields a working
/// instance rather than a panic later.
#[derive(Clone, Debug, PartialEq)]
pub struct CarouselConfig {
    /// Travel axis.
    pub axis: Axis,
    /// Whether the strip wraps at the ends.
    pub looped: bool,
    /// Display index shown at construction, clamped into range.
    pub initial_index: i64,
    /// Snap transition duration in milliseconds; zero snaps immediately.
    pub duration_ms: u64,
    /// Easing curve for snap transitions.
    pub easing: Easing,
    /// Whether the carousel advances on its own and resumes after drags.
    pub autoplay: bool,
    /// Milliseconds between automatic advances.
    pub interval_ms: u64,
    /// Whether to request deferred item loads as items are first shown.
    pub lazy_load: bool,
    /// Thresholds for the swipe commit decision.
    pub commit: CommitRules,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            axis: Axis::Horizontal,
            looped: true,
            initial_index: 0,
            duration_ms: 400,
            easing: Easing::Ease,
            autoplay: false,
            interval_ms: 3_000,
            lazy_load: false,
            commit: CommitRules::default(),
        }
    }
}

impl CarouselConfig {
    /// Clamps fields into usable ranges.
    ///
    /// A zero autoplay interval would make every poll fire, so it is raised
    /// to one millisecond; a negative or NaN flick distance collapses to zero.
    /// The initial index is clamped against the item count at construction,
    /// not here, since the config does not know it.
    #[must_use]
    pub fn validated(mut self) -> Self {
        self.interval_ms = self.interval_ms.max(1);
        self.commit.flick_distance = self.commit.flick_distance.max(0.0);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::CarouselConfig;

    #[test]
    fn defaults_describe_a_looping_horizontal_strip() {
        let config = CarouselConfig::default();
        assert!(config.looped);
        assert!(!config.autoplay);
        assert!(!config.lazy_load);
        assert_eq!(config.duration_ms, 400);
        assert_eq!(config.interval_ms, 3_000);
    }

    #[test]
    fn validated_clamps_degenerate_values() {
        let mut config = CarouselConfig {
            interval_ms: 0,
            ..CarouselConfig::default()
        };
        config.commit.flick_distance = f64::NAN;
        let config = config.validated();
        assert_eq!(config.interval_ms, 1);
        assert_eq!(config.commit.flick_distance, 0.0);
    }
}
