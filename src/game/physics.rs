//! Physics timer callback: gravity, position, tilt, and pipe scrolling.

use super::logic::{end_run, GameEvent};
use super::obstacles::{advance_obstacles, prune_obstacles};
use super::types::{CrashCause, SimulationState};
use crate::core::config::SimConfig;

/// One fixed physics step. Does nothing outside Running.
///
/// Velocity is integrated first and the new velocity moves the bird. A
/// position outside `[ceiling_y, floor_y]` ends the run and is discarded;
/// the rest of the step (tilt, pipe scroll) still happens on that tick.
pub fn physics_step(state: &mut SimulationState, config: &SimConfig) -> Option<GameEvent> {
    if !state.is_running() {
        return None;
    }

    state.bird_velocity += config.gravity;

    let mut event = None;
    let new_y = state.bird_y + state.bird_velocity;
    if new_y < config.ceiling_y || new_y > config.floor_y {
        event = Some(end_run(state, CrashCause::OutOfBounds));
    } else {
        state.bird_y = new_y;
    }

    state.bird_tilt = (state.bird_tilt + config.tilt_step).min(config.max_tilt);

    advance_obstacles(state, config);
    prune_obstacles(state, config);

    event
}
