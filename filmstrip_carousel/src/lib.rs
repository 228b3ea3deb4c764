// Copyright 2026 the Filmstrip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Filmstrip Carousel: a headless touch carousel controller.
//!
//! This crate composes the Filmstrip primitives into the full
//! gesture-to-position machine of a touch slider: raw pointer samples become
//! a live-dragged offset, a release becomes a commit-or-reject decision, a
//! persistent logical cursor wraps or clamps at the ends, and an autoplay
//! deadline advances the strip while it is idle. The pieces:
//!
//! - [`Carousel`]: the controller. One instance per bound container.
//! - [`CarouselHost`]: the trait hosts implement so the controller can
//!   measure the container and apply offsets, placements, and deferred
//!   loads. Everything else (event binding, resize sources, CSS, timers)
//!   stays on the host side.
//! - [`CarouselConfig`]: construction-time options with clamped defaults.
//! - [`CarouselEvent`]: observable transitions, returned as values from the
//!   operations that cause them.
//! - [`dispatch`]: an optional string-keyed adapter for scripting boundaries.
//!
//! ## Design Philosophy
//!
//! The controller is synchronous and headless. It never reads a clock and
//! never owns a timer: operations that schedule or decide take `now_ms`, and
//! hosts poll [`Carousel::tick`] (or sleep until
//! [`Carousel::next_deadline`]). Everything from flick thresholds to the
//! drag/autoplay mutual exclusion is therefore reproducible in plain unit
//! tests, with no simulated input events and no real time.
//!
//! ## Minimal example
//!
//! ```rust
//! use filmstrip_carousel::{Carousel, CarouselConfig, CarouselHost, PointerSample, Transition};
//! use kurbo::{Point, Size, Vec2};
//!
//! struct NullHost;
//!
//! impl CarouselHost for NullHost {
//!     fn viewport(&self) -> Size {
//!         Size::new(320.0, 240.0)
//!     }
//!     fn translate(&mut self, _offset: Vec2, _transition: Transition) {}
//!     fn place_item(&mut self, _item: usize, _offset: Vec2) {}
//!     fn load_item(&mut self, _item: usize) {}
//! }
//!
//! let mut carousel = Carousel::new(NullHost, 3, CarouselConfig::default(), 0);
//! assert_eq!(carousel.index(), 0);
//!
//! // A quick 80px leftward flick advances one item.
//! carousel.pointer_down(PointerSample::single(Point::new(200.0, 100.0), 1_000));
//! carousel.pointer_move(PointerSample::single(Point::new(120.0, 100.0), 1_100));
//! carousel.pointer_up(1_150);
//! assert_eq!(carousel.index(), 1);
//! ```
//!
//! This crate is `no_std` + `alloc` compatible (enable the `libm` feature
//! instead of the default `std`).

#![no_std]

extern crate alloc;

mod autoplay;
mod axis;
mod carousel;
mod config;
pub mod dispatch;
mod events;
mod host;

pub use autoplay::Autoplay;
pub use axis::Axis;
pub use carousel::Carousel;
pub use config::CarouselConfig;
pub use events::{CarouselEvent, Events};
pub use host::{CarouselHost, Easing, Transition};

// The swipe vocabulary appears throughout the public API; re-export it so
// hosts depend on one crate.
pub use filmstrip_swipe::{CommitRules, Direction, PointerSample, StepLimit};
