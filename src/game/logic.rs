//! Phase transitions: activation, reset, and the end of a run.

use super::types::{CrashCause, Phase, SimulationState};
use crate::core::config::SimConfig;

/// Something observable that happened while applying a command or tick.
///
/// The front end may react to these (the binary logs them); the simulation
/// never depends on anyone consuming them.
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// Idle → Running.
    Started,
    /// An impulse was applied.
    Flapped,
    /// A pipe pair entered at the spawn position.
    Spawned { gap_top: f64 },
    /// The bird cleared a pipe pair.
    Scored { score: u32 },
    /// Running → Over.
    Crashed {
        cause: CrashCause,
        score: u32,
        new_best: bool,
    },
    /// Over → Idle.
    Reset,
}

/// Apply the single player action.
///
/// - Idle: start the run, then flap.
/// - Running: flap.
/// - Over: reset to Idle without flapping.
pub fn activate(state: &mut SimulationState, config: &SimConfig) -> Vec<GameEvent> {
    match state.phase {
        Phase::Idle => {
            state.phase = Phase::Running;
            log::info!("run started");
            apply_impulse(state, config);
            vec![GameEvent::Started, GameEvent::Flapped]
        }
        Phase::Running => {
            apply_impulse(state, config);
            vec![GameEvent::Flapped]
        }
        Phase::Over => {
            reset(state, config);
            vec![GameEvent::Reset]
        }
    }
}

/// Velocity override (not additive) plus the immediate nose-up tilt.
pub fn apply_impulse(state: &mut SimulationState, config: &SimConfig) {
    state.bird_velocity = config.jump_force;
    state.bird_tilt = config.flap_tilt;
}

/// Restore the initial Idle values. The best score survives.
pub fn reset(state: &mut SimulationState, config: &SimConfig) {
    let best_score = state.best_score;
    *state = SimulationState::new(config);
    state.best_score = best_score;
    log::debug!("state reset (best {})", best_score);
}

/// Every terminal path goes through here so the best score is always
/// updated on the transition into Over.
pub fn end_run(state: &mut SimulationState, cause: CrashCause) -> GameEvent {
    state.phase = Phase::Over;
    let new_best = state.score > state.best_score;
    if new_best {
        state.best_score = state.score;
    }
    log::info!(
        "run over: {:?}, score {}, best {}",
        cause,
        state.score,
        state.best_score
    );
    GameEvent::Crashed {
        cause,
        score: state.score,
        new_best,
    }
}
