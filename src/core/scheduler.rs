//! Fixed-rate timers for the three simulation callbacks.
//!
//! Timers only exist while a run is in progress. [`Scheduler::start`] creates
//! fresh ones and [`Scheduler::cancel_all`] drops them; nothing is paused and
//! resumed. Due firings come out in time order, with simultaneous firings
//! ordered physics, collision, spawn.

use crate::core::config::SimConfig;

/// Which callback a timer drives. Declaration order is the tie-break order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TimerKind {
    Physics,
    Collision,
    Spawn,
}

/// One repeating timer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntervalTimer {
    pub kind: TimerKind,
    pub interval_ms: u64,
    pub next_due_ms: u64,
}

impl IntervalTimer {
    /// First firing is one full interval after `now_ms`.
    pub fn new(kind: TimerKind, interval_ms: u64, now_ms: u64) -> Self {
        Self {
            kind,
            interval_ms: interval_ms.max(1),
            next_due_ms: now_ms + interval_ms.max(1),
        }
    }
}

/// A firing handed back by [`Scheduler::pop_due`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Firing {
    pub kind: TimerKind,
    pub due_ms: u64,
}

#[derive(Debug, Clone, Default)]
pub struct Scheduler {
    timers: Vec<IntervalTimer>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace any existing timers with fresh ones anchored at `now_ms`.
    pub fn start(&mut self, config: &SimConfig, now_ms: u64) {
        self.timers = vec![
            IntervalTimer::new(TimerKind::Physics, config.physics_interval_ms, now_ms),
            IntervalTimer::new(TimerKind::Collision, config.collision_interval_ms, now_ms),
            IntervalTimer::new(TimerKind::Spawn, config.spawn_interval_ms, now_ms),
        ];
    }

    pub fn cancel_all(&mut self) {
        self.timers.clear();
    }

    pub fn is_active(&self) -> bool {
        !self.timers.is_empty()
    }

    pub fn timers(&self) -> &[IntervalTimer] {
        &self.timers
    }

    /// Take the earliest firing due at or before `now_ms`, rescheduling its
    /// timer one interval later.
    pub fn pop_due(&mut self, now_ms: u64) -> Option<Firing> {
        let timer = self
            .timers
            .iter_mut()
            .filter(|t| t.next_due_ms <= now_ms)
            .min_by_key(|t| (t.next_due_ms, t.kind))?;

        let firing = Firing {
            kind: timer.kind,
            due_ms: timer.next_due_ms,
        };
        timer.next_due_ms += timer.interval_ms;
        Some(firing)
    }

    /// Drop any backlog: each timer's next firing becomes the first one
    /// strictly after `now_ms` on its original cadence.
    pub fn skip_backlog(&mut self, now_ms: u64) {
        for timer in &mut self.timers {
            if timer.next_due_ms <= now_ms {
                let behind = now_ms - timer.next_due_ms;
                let missed = behind / timer.interval_ms + 1;
                timer.next_due_ms += missed * timer.interval_ms;
            }
        }
    }
}
