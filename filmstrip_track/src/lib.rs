// Copyright 2026 the Filmstrip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Filmstrip Track: logical index and slot placement for wrapping carousels.
//!
//! This crate provides the position model shared by carousel/slider surfaces:
//! a strip of `len` items shown one viewport at a time, addressed by an
//! unbounded logical cursor that either wraps (looping strips) or clamps
//! (bounded strips) at the ends.
//!
//! The core concepts are:
//!
//! - [`Track`]: the cursor, the viewport extent along the travel axis, and the
//!   wrap/clamp policy. It derives the bounded display position via floored
//!   modulo and the container offset that shows the current item.
//! - [`Placement`]: a physical item paired with the logical slot it must
//!   occupy. The default placement puts item `i` in slot `i`; during a wrap
//!   the item next to the boundary is re-slotted to the far side so the strip
//!   appears continuous.
//!
//! This crate deliberately does **not** know about widgets, pointer input, or
//! any particular UI framework. Host layers are responsible for:
//!
//! - Translating the container by [`Track::resting_offset`] (plus any
//!   in-progress drag delta).
//! - Applying [`Placement`]s by positioning items at
//!   [`Track::slot_offset`]`(slot)`.
//! - Feeding the viewport extent back in whenever it changes.
//!
//! ## Minimal example
//!
//! ```rust
//! use filmstrip_track::Track;
//!
//! // Three items, looping, starting at the first, 320 units wide.
//! let mut track = Track::new(3, true, 0);
//! track.set_extent(320.0);
//!
//! // Advance twice, then once more: the display position wraps.
//! track.advance(1);
//! track.advance(1);
//! assert_eq!(track.position(), 2);
//! track.advance(1);
//! assert_eq!(track.position(), 0);
//!
//! // The cursor itself keeps counting, and the container offset follows it.
//! assert_eq!(track.cursor(), 3);
//! assert_eq!(track.resting_offset(), -960.0);
//! ```
//!
//! All extents and offsets live in a caller-chosen 1D coordinate space
//! (typically logical pixels along the travel axis) and are expected to be
//! finite. This crate is `no_std`.

#![no_std]

mod placement;
mod track;

pub use placement::{Placement, Placements};
pub use track::Track;
