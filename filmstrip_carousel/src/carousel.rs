// Copyright 2026 the Filmstrip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use filmstrip_swipe::{Direction, PointerSample, SwipeTracker, attenuate, commit_steps};
use filmstrip_track::Track;
use hashbrown::HashSet;

use crate::autoplay::Autoplay;
use crate::config::CarouselConfig;
use crate::events::{CarouselEvent, Events};
use crate::host::{CarouselHost, Transition};

/// Headless touch carousel controller.
///
/// One instance per bound container. It owns the track model, the swipe
/// session, and the autoplay deadline, and drives a [`CarouselHost`] for all
/// visible effects. Hosts feed it pointer samples, clock readings, resize
/// refreshes, and transition completions; operations return the observable
/// [`CarouselEvent`]s they caused.
///
/// Instances with fewer than two items are inert for gestures and autoplay
/// but still lay out and load: a degenerate strip renders, it just does not
/// interact. After [`Carousel::destroy`], every call is a no-op, so stale
/// host subscriptions can never touch freed state.
#[derive(Debug)]
pub struct Carousel<H: CarouselHost> {
    host: H,
    track: Track,
    swipe: SwipeTracker,
    config: CarouselConfig,
    autoplay: Autoplay,
    loaded: HashSet<usize>,
    shown: usize,
    pending_snap: bool,
    destroyed: bool,
}

impl<H: CarouselHost> Carousel<H> {
    /// Builds a carousel over `item_count` items and performs the initial
    /// layout, including the load request for the initially shown item.
    ///
    /// When the config enables autoplay and the strip is interactive, the
    /// first advance is scheduled one interval after `now_ms`.
    pub fn new(host: H, item_count: usize, config: CarouselConfig, now_ms: u64) -> Self {
        let config = config.validated();
        let track = Track::new(item_count, config.looped, config.initial_index);
        let mut carousel = Self {
            shown: track.position(),
            autoplay: Autoplay::new(config.interval_ms),
            swipe: SwipeTracker::default(),
            loaded: HashSet::new(),
            pending_snap: false,
            destroyed: false,
            host,
            track,
            config,
        };
        carousel.refresh();
        if carousel.config.autoplay {
            carousel.play(now_ms);
        }
        carousel
    }

    /// The shown display index, always in `[0, len - 1]`.
    #[must_use]
    pub fn index(&self) -> usize {
        self.track.position()
    }

    /// The unbounded logical cursor behind [`Carousel::index`].
    #[must_use]
    pub fn cursor(&self) -> i64 {
        self.track.cursor()
    }

    /// Returns `true` while a swipe session is open.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.swipe.is_active()
    }

    /// Returns `true` while an automatic advance is scheduled.
    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.autoplay.is_armed()
    }

    /// When the next automatic advance is due, if one is scheduled.
    ///
    /// Hosts that sleep rather than poll can use this to pick a wake-up time
    /// for [`Carousel::tick`].
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        self.autoplay.deadline()
    }

    /// Returns `true` once [`Carousel::destroy`] has run.
    #[must_use]
    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    /// Shared access to the host surface.
    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable access to the host surface.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Re-derives the layout from current measurements.
    ///
    /// Folds the cursor onto its display position, re-reads the viewport,
    /// re-places every item, and re-applies the container offset without
    /// animation. Idempotent: a second call with nothing changed repeats the
    /// same writes. Hosts call this on resize and rotation; it never touches
    /// the autoplay schedule, so it needs no clock.
    pub fn refresh(&mut self) -> Events {
        let mut events = Events::new();
        if self.destroyed {
            return events;
        }
        self.track.normalize();
        let size = self.host.viewport();
        self.track.set_extent(self.config.axis.extent_of(size));
        for p in self.track.placements() {
            let offset = self.config.axis.vec(self.track.slot_offset(p.slot));
            self.host.place_item(p.item, offset);
        }
        self.apply_cursor(Transition::immediate(), &mut events);
        events
    }

    /// Animates to a display index, clamped into `[0, len - 1]`.
    ///
    /// Performs a refresh first (the original layout may be stale), then
    /// snaps to the target. The load hook fires at most once for the target
    /// index across both steps.
    pub fn slide_to(&mut self, index: i64, now_ms: u64) -> Events {
        let mut events = self.refresh();
        if self.destroyed {
            return events;
        }
        self.track.jump_to(index);
        self.snap(now_ms, &mut events);
        events
    }

    /// Schedules automatic advances, starting one interval after `now_ms`.
    ///
    /// Replaces any pending deadline. Inert strips never play.
    pub fn play(&mut self, now_ms: u64) {
        if self.destroyed || !self.is_interactive() {
            return;
        }
        self.autoplay.arm(now_ms);
    }

    /// Cancels the pending automatic advance; idempotent when stopped.
    pub fn stop(&mut self) {
        self.autoplay.disarm();
    }

    /// Polls the autoplay deadline.
    ///
    /// When due, and only while idle, this re-slots the forward neighbor and
    /// advances the cursor by one, then re-arms for the next interval. On a
    /// bounded strip a tick that lands on the last item stops autoplay
    /// instead of advancing.
    pub fn tick(&mut self, now_ms: u64) -> Events {
        let mut events = Events::new();
        if self.destroyed || !self.is_interactive() || self.swipe.is_active() {
            return events;
        }
        if !self.autoplay.fire(now_ms) {
            return events;
        }
        if !self.track.looped() && self.track.position() + 1 == self.track.len() {
            return events;
        }
        if let Some(p) = self.track.neighbor(1) {
            let offset = self.config.axis.vec(self.track.slot_offset(p.slot));
            self.host.place_item(p.item, offset);
        }
        self.track.advance(1);
        let transition = self.snap_transition();
        self.apply_cursor(transition, &mut events);
        self.autoplay.arm(now_ms);
        events
    }

    /// Opens a swipe session at the sample.
    ///
    /// Multi-contact samples are ignored, as are calls on inert or destroyed
    /// instances. Opening a session suspends autoplay until the session's
    /// snap settles.
    pub fn pointer_down(&mut self, sample: PointerSample) -> Events {
        let mut events = Events::new();
        if self.destroyed || !self.is_interactive() {
            return events;
        }
        if !self.swipe.begin(&sample) {
            return events;
        }
        self.autoplay.disarm();
        events.push(CarouselEvent::DragStart {
            index: self.track.position(),
        });
        events
    }

    /// Tracks a move, dragging the container live with the finger.
    ///
    /// On the first move and on every direction reversal the wrap neighbor is
    /// re-slotted (looping strips only) and a [`CarouselEvent::Drag`] is
    /// emitted. Past the edge of a bounded strip the travel is attenuated for
    /// increasing resistance.
    pub fn pointer_move(&mut self, sample: PointerSample) -> Events {
        let mut events = Events::new();
        if self.destroyed {
            return events;
        }
        let Some(delta) = self.swipe.update(&sample) else {
            return events;
        };
        let (along, _) = self.config.axis.split(delta);
        let direction = Direction::from_travel(along);
        let travel = if self.outward_at_edge(direction) {
            attenuate(along)
        } else {
            along
        };
        if self.swipe.turn(direction) {
            if let Some(p) = self.track.neighbor(direction.step()) {
                let offset = self.config.axis.vec(self.track.slot_offset(p.slot));
                self.host.place_item(p.item, offset);
            }
            events.push(CarouselEvent::Drag {
                direction,
                index: self.track.position(),
            });
        }
        let offset = self.config.axis.vec(self.track.resting_offset() + travel);
        self.host.translate(offset, Transition::immediate());
        events
    }

    /// Releases the swipe session and commits or rejects the travel.
    ///
    /// Fast releases commit past a distance threshold; slow releases commit
    /// one step per viewport crossed (see
    /// [`CommitRules`](filmstrip_swipe::CommitRules)). Releases pointing past
    /// the edge of a bounded strip never commit. Either way the container
    /// snaps to the resulting index and a [`CarouselEvent::DragEnd`] reports
    /// the outcome.
    pub fn pointer_up(&mut self, now_ms: u64) -> Events {
        let mut events = Events::new();
        if self.destroyed {
            return events;
        }
        let Some(end) = self.swipe.finish() else {
            return events;
        };
        let (along, cross) = self.config.axis.split(end.delta);
        let direction = Direction::from_travel(along);
        let elapsed = now_ms.saturating_sub(end.started_ms);
        let steps = if self.outward_at_edge(direction) {
            0
        } else {
            commit_steps(
                along,
                cross,
                self.track.extent(),
                elapsed,
                &self.config.commit,
            )
        };
        self.track.advance(direction.step() * i64::from(steps));
        self.snap(now_ms, &mut events);
        events.push(CarouselEvent::DragEnd {
            direction: if steps > 0 { direction } else { Direction::None },
            index: self.track.position(),
        });
        events
    }

    /// Releases the session after a cancelled gesture.
    ///
    /// Identical to [`Carousel::pointer_up`]: the trigger differs, the
    /// snap-and-decide logic does not.
    pub fn pointer_cancel(&mut self, now_ms: u64) -> Events {
        self.pointer_up(now_ms)
    }

    /// Reports that a timed container transition finished.
    ///
    /// Hosts may deliver this zero or several times per transition; only the
    /// first report after a timed snap does anything, and what it does is
    /// resume autoplay when configured and idle.
    pub fn finish_transition(&mut self, now_ms: u64) {
        if self.destroyed || !self.pending_snap {
            return;
        }
        self.pending_snap = false;
        self.resume_autoplay(now_ms);
    }

    /// Tears the instance down.
    ///
    /// Cancels the pending advance, drops any open swipe session, and marks
    /// the instance destroyed so that every later call is a harmless no-op,
    /// including calls from host subscriptions that outlive the instance.
    pub fn destroy(&mut self) {
        self.autoplay.disarm();
        self.swipe.clear();
        self.pending_snap = false;
        self.destroyed = true;
    }

    fn is_interactive(&self) -> bool {
        self.track.len() >= 2
    }

    fn snap_transition(&self) -> Transition {
        Transition {
            duration_ms: self.config.duration_ms,
            easing: self.config.easing,
        }
    }

    /// True when a bounded strip is being pushed past its nearest edge.
    fn outward_at_edge(&self, direction: Direction) -> bool {
        if self.track.looped() {
            return false;
        }
        match direction {
            Direction::Back => self.track.position() == 0,
            Direction::Forward => self.track.position() + 1 == self.track.len(),
            Direction::None => false,
        }
    }

    /// Shows the current cursor, noting a change of shown item on the way.
    fn apply_cursor(&mut self, transition: Transition, events: &mut Events) {
        self.load_shown();
        let position = self.track.position();
        if position != self.shown {
            self.shown = position;
            events.push(CarouselEvent::Change { index: position });
        }
        let offset = self.config.axis.vec(self.track.resting_offset());
        self.host.translate(offset, transition);
        if !transition.is_immediate() {
            self.pending_snap = true;
        }
    }

    /// Snaps to the cursor with the configured transition.
    ///
    /// A zero-duration snap fires no completion, so autoplay resumption
    /// happens here instead of waiting on a report that will not arrive.
    fn snap(&mut self, now_ms: u64, events: &mut Events) {
        let transition = self.snap_transition();
        self.apply_cursor(transition, events);
        if transition.is_immediate() {
            self.resume_autoplay(now_ms);
        }
    }

    fn resume_autoplay(&mut self, now_ms: u64) {
        if self.config.autoplay && self.is_interactive() && !self.swipe.is_active() {
            self.autoplay.arm(now_ms);
        }
    }

    fn load_shown(&mut self) {
        if !self.config.lazy_load {
            return;
        }
        let position = self.track.position();
        if self.loaded.insert(position) {
            self.host.load_item(position);
        }
    }
}
