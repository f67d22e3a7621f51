//! Pipe spawning, scrolling and pruning.

use super::logic::GameEvent;
use super::types::{Obstacle, SimulationState};
use crate::core::config::SimConfig;
use rand::Rng;

/// Spawn timer callback. Appends a pair at the spawn position with a random
/// gap top in `[gap_top_min, gap_top_limit - gap_size)`.
pub fn spawn_obstacle<R: Rng>(
    state: &mut SimulationState,
    config: &SimConfig,
    rng: &mut R,
) -> Option<GameEvent> {
    if !state.is_running() {
        return None;
    }

    let gap_top = rng.gen_range(config.gap_top_min..config.gap_top_max());
    state
        .obstacles
        .push(Obstacle::new(config.pipe_spawn_x, gap_top));
    log::trace!("pipe spawned, gap top {:.1}", gap_top);
    Some(GameEvent::Spawned { gap_top })
}

/// Scroll every pipe left by one tick's worth.
pub fn advance_obstacles(state: &mut SimulationState, config: &SimConfig) {
    for pipe in &mut state.obstacles {
        pipe.x -= config.pipe_speed;
    }
}

/// Drop pipes that have scrolled fully off-screen. Order is preserved.
pub fn prune_obstacles(state: &mut SimulationState, config: &SimConfig) {
    state.obstacles.retain(|p| p.x > config.pipe_prune_x);
}
