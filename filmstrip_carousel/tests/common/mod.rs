// Copyright 2026 the Filmstrip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared recording host for carousel integration tests.

#![allow(
    missing_docs,
    reason = "Integration-test helper module; not part of the public API."
)]
#![allow(
    dead_code,
    reason = "Each integration-test crate uses a different subset of the helpers."
)]

use filmstrip_carousel::{Carousel, CarouselConfig, CarouselHost, PointerSample, Transition};
use kurbo::{Point, Size, Vec2};

/// Records every call the controller makes, in order, for assertions.
#[derive(Debug)]
pub(crate) struct RecordingHost {
    pub(crate) size: Size,
    pub(crate) translations: Vec<(Vec2, Transition)>,
    pub(crate) placements: Vec<(usize, Vec2)>,
    pub(crate) loads: Vec<usize>,
}

impl RecordingHost {
    pub(crate) fn new(size: Size) -> Self {
        Self {
            size,
            translations: Vec::new(),
            placements: Vec::new(),
            loads: Vec::new(),
        }
    }

    pub(crate) fn last_translation(&self) -> (Vec2, Transition) {
        *self.translations.last().expect("no translation recorded")
    }

    pub(crate) fn call_count(&self) -> usize {
        self.translations.len() + self.placements.len() + self.loads.len()
    }
}

impl CarouselHost for RecordingHost {
    fn viewport(&self) -> Size {
        self.size
    }

    fn translate(&mut self, offset: Vec2, transition: Transition) {
        self.translations.push((offset, transition));
    }

    fn place_item(&mut self, item: usize, offset: Vec2) {
        self.placements.push((item, offset));
    }

    fn load_item(&mut self, item: usize) {
        self.loads.push(item);
    }
}

/// A carousel over a 300×200 viewport, the geometry most tests assume.
pub(crate) fn carousel(item_count: usize, config: CarouselConfig) -> Carousel<RecordingHost> {
    Carousel::new(
        RecordingHost::new(Size::new(300.0, 200.0)),
        item_count,
        config,
        0,
    )
}

pub(crate) fn sample(x: f64, y: f64, time_ms: u64) -> PointerSample {
    PointerSample::single(Point::new(x, y), time_ms)
}

/// Runs a complete horizontal drag of `delta` pixels over `duration_ms`.
pub(crate) fn drag_x(
    carousel: &mut Carousel<RecordingHost>,
    delta: f64,
    start_ms: u64,
    duration_ms: u64,
) {
    carousel.pointer_down(sample(200.0, 100.0, start_ms));
    carousel.pointer_move(sample(200.0 + delta, 100.0, start_ms + duration_ms));
    carousel.pointer_up(start_ms + duration_ms);
}
