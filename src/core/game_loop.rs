//! The single owner of the simulation.
//!
//! All mutation goes through [`GameLoop`]: player commands are queued in a
//! FIFO mailbox with [`GameLoop::post`] and applied, together with every
//! timer firing that has come due, by [`GameLoop::pump`]. Nothing else holds
//! a mutable reference to the state, so the loop can be driven by a real
//! clock in the binary or stepped tick by tick in tests.

use crate::core::clock::Clock;
use crate::core::config::SimConfig;
use crate::core::constants::MAX_CATCH_UP_FIRINGS;
use crate::core::scheduler::{Scheduler, TimerKind};
use crate::game::{
    activate, check_collisions, physics_step, reset, spawn_obstacle, GameEvent, Phase,
    SimulationState,
};
use rand::Rng;
use std::collections::VecDeque;
use std::io;

/// A request from the outside world.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Key press or click: start, flap, or (when over) reset.
    Activate,
    /// Abandon whatever is happening and return to Idle.
    Reset,
}

pub struct GameLoop<R: Rng> {
    config: SimConfig,
    state: SimulationState,
    scheduler: Scheduler,
    mailbox: VecDeque<Command>,
    rng: R,
}

impl<R: Rng> GameLoop<R> {
    /// Fails with `InvalidData` when the tuning cannot be simulated.
    pub fn new(config: SimConfig, rng: R) -> io::Result<Self> {
        config
            .validate()
            .map_err(|msg| io::Error::new(io::ErrorKind::InvalidData, msg))?;
        let state = SimulationState::new(&config);
        Ok(Self {
            config,
            state,
            scheduler: Scheduler::new(),
            mailbox: VecDeque::new(),
            rng,
        })
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    /// Queue a command for the next [`pump`](Self::pump).
    pub fn post(&mut self, command: Command) {
        self.mailbox.push_back(command);
    }

    pub fn pending_commands(&self) -> usize {
        self.mailbox.len()
    }

    /// Bring the simulation up to the clock's current time.
    ///
    /// Queued commands are applied first, in arrival order, then every timer
    /// firing due at or before `now` runs in time order. Input gathered while
    /// waiting for the next poll therefore lands before the ticks that came
    /// due in the same window: a flap pressed just ahead of a crash tick is
    /// still a flap, not a reset of the finished run.
    pub fn pump(&mut self, clock: &impl Clock) -> Vec<GameEvent> {
        let now_ms = clock.now_ms();
        let mut events = Vec::new();

        while let Some(command) = self.mailbox.pop_front() {
            self.apply(command, now_ms, &mut events);
        }

        self.run_due_timers(now_ms, &mut events);

        events
    }

    /// Apply one command immediately, bypassing the mailbox.
    pub fn dispatch(&mut self, command: Command, now_ms: u64) -> Vec<GameEvent> {
        let mut events = Vec::new();
        self.apply(command, now_ms, &mut events);
        events
    }

    /// Run a single timer callback directly. Used by headless drivers that
    /// step ticks without a clock.
    pub fn fire(&mut self, kind: TimerKind) -> Vec<GameEvent> {
        let mut events = Vec::new();
        self.run_callback(kind, &mut events);
        if !self.state.is_running() {
            self.scheduler.cancel_all();
        }
        events
    }

    fn apply(&mut self, command: Command, now_ms: u64, events: &mut Vec<GameEvent>) {
        let before = self.state.phase;
        match command {
            Command::Activate => events.extend(activate(&mut self.state, &self.config)),
            Command::Reset => {
                if before != Phase::Idle {
                    reset(&mut self.state, &self.config);
                    events.push(GameEvent::Reset);
                }
            }
        }
        self.sync_timers(before, now_ms);
    }

    fn run_due_timers(&mut self, now_ms: u64, events: &mut Vec<GameEvent>) {
        let mut fired = 0;
        while let Some(firing) = self.scheduler.pop_due(now_ms) {
            self.run_callback(firing.kind, events);

            if !self.state.is_running() {
                self.scheduler.cancel_all();
                return;
            }

            fired += 1;
            if fired >= MAX_CATCH_UP_FIRINGS {
                log::warn!(
                    "timer backlog after {} firings, skipping to {} ms",
                    fired,
                    now_ms
                );
                self.scheduler.skip_backlog(now_ms);
                return;
            }
        }
    }

    fn run_callback(&mut self, kind: TimerKind, events: &mut Vec<GameEvent>) {
        match kind {
            TimerKind::Physics => events.extend(physics_step(&mut self.state, &self.config)),
            TimerKind::Collision => {
                events.extend(check_collisions(&mut self.state, &self.config))
            }
            TimerKind::Spawn => {
                events.extend(spawn_obstacle(&mut self.state, &self.config, &mut self.rng))
            }
        }
    }

    /// Timers never survive a phase change: entering Running creates fresh
    /// ones, leaving it drops them.
    fn sync_timers(&mut self, before: Phase, now_ms: u64) {
        let after = self.state.phase;
        if before == after {
            return;
        }
        if after == Phase::Running {
            self.scheduler.start(&self.config, now_ms);
        } else {
            self.scheduler.cancel_all();
        }
        log::debug!("phase {:?} -> {:?} at {} ms", before, after, now_ms);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::clock::ManualClock;
    use crate::game::Obstacle;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn new_loop() -> GameLoop<ChaCha8Rng> {
        GameLoop::new(SimConfig::default(), ChaCha8Rng::seed_from_u64(42)).unwrap()
    }

    #[test]
    fn test_unrunnable_config_is_refused() {
        let config = SimConfig {
            gap_size: 400.0,
            ..SimConfig::default()
        };
        let result = GameLoop::new(config, ChaCha8Rng::seed_from_u64(1));
        assert_eq!(result.err().map(|e| e.kind()), Some(io::ErrorKind::InvalidData));

        let stalled = SimConfig {
            pipe_speed: 0.0,
            ..SimConfig::default()
        };
        assert!(GameLoop::new(stalled, ChaCha8Rng::seed_from_u64(1)).is_err());
    }

    #[test]
    fn test_idle_does_not_tick() {
        let mut game = new_loop();
        let mut clock = ManualClock::new();
        clock.advance(10_000);
        let events = game.pump(&clock);
        assert!(events.is_empty());
        assert_eq!(game.state().bird_y, 250.0);
        assert!(!game.scheduler().is_active());
    }

    #[test]
    fn test_activate_starts_timers() {
        let mut game = new_loop();
        let clock = ManualClock::at(100);
        game.post(Command::Activate);
        assert_eq!(game.pending_commands(), 1);

        let events = game.pump(&clock);

        assert_eq!(events, vec![GameEvent::Started, GameEvent::Flapped]);
        assert_eq!(game.state().phase, Phase::Running);
        assert!(game.scheduler().is_active());
        assert_eq!(game.pending_commands(), 0);
    }

    #[test]
    fn test_one_physics_tick_after_interval() {
        let mut game = new_loop();
        let mut clock = ManualClock::new();
        game.post(Command::Activate);
        game.pump(&clock);

        clock.advance(20);
        game.pump(&clock);

        assert_eq!(game.state().bird_velocity, -9.5);
        assert_eq!(game.state().bird_y, 240.5);
        assert_eq!(game.state().bird_tilt, -27.0);
    }

    #[test]
    fn test_spawn_after_interval() {
        let mut game = new_loop();
        let mut clock = ManualClock::new();
        game.post(Command::Activate);
        game.pump(&clock);

        // A flap every 40 ticks roughly holds altitude
        for tick in 1..=75 {
            clock.advance(20);
            if tick % 40 == 0 {
                game.post(Command::Activate);
            }
            game.pump(&clock);
        }

        assert_eq!(game.state().phase, Phase::Running);
        assert_eq!(game.state().obstacles.len(), 1);
        assert_eq!(game.state().obstacles[0].x, 800.0);
    }

    #[test]
    fn test_fall_to_floor_ends_run_and_cancels_timers() {
        let mut game = new_loop();
        let mut clock = ManualClock::new();
        game.post(Command::Activate);
        game.pump(&clock);

        let mut crashed = false;
        for _ in 0..200 {
            clock.advance(20);
            let events = game.pump(&clock);
            if events
                .iter()
                .any(|e| matches!(e, GameEvent::Crashed { .. }))
            {
                crashed = true;
                break;
            }
        }

        assert!(crashed);
        assert_eq!(game.state().phase, Phase::Over);
        assert!(!game.scheduler().is_active());

        // Frozen while over
        let frozen = game.state().clone();
        clock.advance(1_000);
        game.pump(&clock);
        assert_eq!(game.state(), &frozen);
    }

    #[test]
    fn test_flap_queued_before_crash_tick_applies_first() {
        let mut game = new_loop();
        let mut clock = ManualClock::new();
        game.dispatch(Command::Activate, 0);
        game.state.bird_y = 495.0;
        game.state.bird_velocity = 10.0;

        // Left alone, the next physics tick would carry the bird past the floor
        game.post(Command::Activate);
        clock.advance(20);
        let events = game.pump(&clock);

        assert_eq!(events.first(), Some(&GameEvent::Flapped));
        assert!(!events.iter().any(|e| matches!(e, GameEvent::Crashed { .. })));
        assert_eq!(game.state().phase, Phase::Running);
        assert_eq!(game.state().bird_velocity, -9.5);
        assert_eq!(game.state().bird_y, 485.5);
    }

    #[test]
    fn test_activate_while_over_returns_to_idle() {
        let mut game = new_loop();
        game.dispatch(Command::Activate, 0);
        game.state.phase = Phase::Over;
        game.scheduler.cancel_all();

        let events = game.dispatch(Command::Activate, 500);

        assert_eq!(events, vec![GameEvent::Reset]);
        assert_eq!(game.state().phase, Phase::Idle);
        assert!(!game.scheduler().is_active());

        game.dispatch(Command::Activate, 600);
        assert_eq!(game.state().phase, Phase::Running);
        assert_eq!(game.scheduler().timers()[0].next_due_ms, 620);
    }

    #[test]
    fn test_reset_command_from_running() {
        let mut game = new_loop();
        game.dispatch(Command::Activate, 0);
        game.state.obstacles.push(Obstacle::new(400.0, 100.0));

        let events = game.dispatch(Command::Reset, 10);

        assert_eq!(events, vec![GameEvent::Reset]);
        assert_eq!(game.state().phase, Phase::Idle);
        assert!(game.state().obstacles.is_empty());
        assert!(!game.scheduler().is_active());
    }

    #[test]
    fn test_reset_command_while_idle_is_silent() {
        let mut game = new_loop();
        assert!(game.dispatch(Command::Reset, 0).is_empty());
    }

    #[test]
    fn test_stall_is_capped() {
        let mut game = new_loop();
        let mut clock = ManualClock::new();
        game.dispatch(Command::Activate, 0);
        game.state.bird_velocity = 0.0;
        game.config.gravity = 0.0;

        clock.advance(60_000);
        game.pump(&clock);

        // Backlog dropped: nothing else is due right now
        assert!(game.scheduler.pop_due(60_000).is_none());
        assert_eq!(game.state().phase, Phase::Running);
    }

    #[test]
    fn test_fire_steps_without_clock() {
        let mut game = new_loop();
        game.dispatch(Command::Activate, 0);
        game.fire(TimerKind::Spawn);
        assert_eq!(game.state().obstacles.len(), 1);
        game.fire(TimerKind::Physics);
        assert_eq!(game.state().obstacles[0].x, 797.0);
    }
}
