//! Collision timer callback: bird vs. pipe overlap and pass-through scoring.

use super::logic::{end_run, GameEvent};
use super::types::{CrashCause, Obstacle, Rect, SimulationState};
use crate::core::config::SimConfig;

/// Whether the bird box hits a pipe pair.
///
/// Horizontal overlap with the pair, combined with the bird poking above
/// the gap OR below it. The vertical test is taken across both halves
/// rather than per rectangle, so any horizontal overlap plus either
/// vertical condition counts.
pub fn hits_pipe(bird: &Rect, pipe: &Obstacle, config: &SimConfig) -> bool {
    let top = pipe.top_rect(config);
    let bottom = pipe.bottom_rect(config);

    bird.right > top.left
        && bird.left < top.right
        && (bird.top < top.bottom || bird.bottom > bottom.top)
}

/// One collision check over every pipe, oldest first.
///
/// The first colliding pipe ends the run and stops the scan, so pipes after
/// it are neither tested nor scored this tick. A pipe whose trailing edge is
/// left of the bird's leading edge scores once.
pub fn check_collisions(state: &mut SimulationState, config: &SimConfig) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if !state.is_running() {
        return events;
    }

    let bird = state.bird_rect(config);
    let mut crashed = false;
    let mut scored = 0;

    for pipe in &mut state.obstacles {
        if hits_pipe(&bird, pipe, config) {
            crashed = true;
            break;
        }

        if !pipe.passed && pipe.right(config) < config.bird_x {
            pipe.passed = true;
            scored += 1;
        }
    }

    for _ in 0..scored {
        state.score += 1;
        log::debug!("scored {}", state.score);
        events.push(GameEvent::Scored { score: state.score });
    }

    if crashed {
        events.push(end_run(state, CrashCause::Pipe));
    }

    events
}
