// Copyright 2026 the Filmstrip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Observable carousel transitions, returned as values.

use filmstrip_swipe::Direction;
use smallvec::SmallVec;

/// Something observable the carousel did.
///
/// Operations return these instead of calling into an observer, so hosts can
/// route them however they route events. Every variant carries the display
/// index it concerns, always in `[0, len - 1]`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CarouselEvent {
    /// A drag session opened on the shown item.
    DragStart {
        /// Display index when the drag began.
        index: usize,
    },
    /// A drag's travel direction was established or reversed.
    Drag {
        /// Direction of travel for this stretch of the drag.
        direction: Direction,
        /// Display index the drag started from.
        index: usize,
    },
    /// A drag session released.
    DragEnd {
        /// Committed direction; [`Direction::None`] when nothing committed.
        direction: Direction,
        /// Display index after the release.
        index: usize,
    },
    /// The shown item changed.
    Change {
        /// The newly shown display index.
        index: usize,
    },
}

/// Event batch produced by one operation.
///
/// At most two events arise from any single call (a change plus a drag end),
/// so batches stay inline.
pub type Events = SmallVec<[CarouselEvent; 2]>;
