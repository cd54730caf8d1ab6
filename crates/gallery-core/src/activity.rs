//! User-activity tracking and periodic idle polling.

use crate::constants::*;
use std::time::Duration;

/// Input sources that count as user activity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActivityKind {
    PointerMove,
    PointerDown,
    KeyDown,
}

impl ActivityKind {
    /// DOM event name this kind is wired to.
    pub fn event_name(&self) -> &'static str {
        match self {
            ActivityKind::PointerMove => "pointermove",
            ActivityKind::PointerDown => "pointerdown",
            ActivityKind::KeyDown => "keydown",
        }
    }

    pub const ALL: [ActivityKind; 3] = [
        ActivityKind::PointerMove,
        ActivityKind::PointerDown,
        ActivityKind::KeyDown,
    ];
}

#[derive(Clone, Debug)]
pub struct ActivityParams {
    pub idle_threshold: Duration,
    pub poll_interval: Duration,
}

impl Default for ActivityParams {
    fn default() -> Self {
        Self {
            idle_threshold: Duration::from_millis(IDLE_THRESHOLD_MS),
            poll_interval: Duration::from_millis(POLL_INTERVAL_MS),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ActivityState {
    pub last_input: Duration,
    pub next_poll: Duration,
}

/// Times are session-relative (`Duration` since session entry).
pub struct ActivityMonitor {
    pub params: ActivityParams,
    state: ActivityState,
}

impl ActivityMonitor {
    pub fn new(params: ActivityParams, now: Duration) -> Self {
        let mut monitor = Self {
            params,
            state: ActivityState::default(),
        };
        monitor.reset(now);
        monitor
    }

    pub fn state(&self) -> ActivityState {
        self.state
    }

    pub fn reset(&mut self, now: Duration) {
        self.state = ActivityState {
            last_input: now,
            next_poll: now + self.params.poll_interval,
        };
    }

    pub fn record(&mut self, kind: ActivityKind, now: Duration) {
        log::trace!("[activity] {kind:?} at {now:?}");
        self.state.last_input = self.state.last_input.max(now);
    }

    pub fn idle_for(&self, now: Duration) -> Duration {
        now.saturating_sub(self.state.last_input)
    }

    /// Run the periodic check if it is due. Returns the idle duration seen by
    /// the check, or `None` when no poll fell due. Missed polls collapse into one.
    pub fn poll(&mut self, now: Duration) -> Option<Duration> {
        if now < self.state.next_poll {
            return None;
        }
        let interval = self.params.poll_interval.max(Duration::from_millis(1));
        while self.state.next_poll <= now {
            self.state.next_poll += interval;
        }
        Some(self.idle_for(now))
    }

    /// True when `idle` is long enough to start autoplay.
    #[inline]
    pub fn exceeds_threshold(&self, idle: Duration) -> bool {
        idle > self.params.idle_threshold
    }
}
