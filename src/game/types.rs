//! Flappy simulation data structures.

use crate::core::config::SimConfig;

/// Where the run currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for the first activation. Nothing ticks.
    Idle,
    /// Simulating. The only phase in which timers run.
    Running,
    /// Crashed. Awaiting reset.
    Over,
}

/// What ended a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrashCause {
    /// The bird left `[ceiling_y, floor_y]`.
    OutOfBounds,
    /// The bird overlapped a pipe pair.
    Pipe,
}

/// Axis-aligned rectangle in world units. `top < bottom` (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Rect {
    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }
}

/// A single pipe pair (top + bottom with a gap between).
#[derive(Debug, Clone, PartialEq)]
pub struct Obstacle {
    /// Left edge.
    pub x: f64,
    /// Bottom edge of the top pipe.
    pub gap_top: f64,
    /// Whether the bird has cleared this pair (for scoring).
    pub passed: bool,
}

impl Obstacle {
    pub fn new(x: f64, gap_top: f64) -> Self {
        Self {
            x,
            gap_top,
            passed: false,
        }
    }

    /// Trailing (right) edge.
    pub fn right(&self, config: &SimConfig) -> f64 {
        self.x + config.pipe_width
    }

    /// Upper pipe, spanning from the ceiling down to the gap.
    pub fn top_rect(&self, config: &SimConfig) -> Rect {
        Rect {
            left: self.x,
            right: self.right(config),
            top: config.ceiling_y,
            bottom: self.gap_top,
        }
    }

    /// Lower pipe, spanning from below the gap to the floor.
    pub fn bottom_rect(&self, config: &SimConfig) -> Rect {
        Rect {
            left: self.x,
            right: self.right(config),
            top: self.gap_top + config.gap_size,
            bottom: config.floor_y,
        }
    }
}

/// Full simulation state. Owned by [`crate::core::game_loop::GameLoop`].
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationState {
    pub phase: Phase,
    /// Top edge of the bird box.
    pub bird_y: f64,
    /// Vertical velocity in units/tick (positive = downward).
    pub bird_velocity: f64,
    /// Rotation in degrees (positive = nose down).
    pub bird_tilt: f64,
    /// Active pipes, oldest (leftmost) first.
    pub obstacles: Vec<Obstacle>,
    pub score: u32,
    /// Highest score of any finished run in this process.
    pub best_score: u32,
}

impl SimulationState {
    pub fn new(config: &SimConfig) -> Self {
        Self {
            phase: Phase::Idle,
            bird_y: config.start_y,
            bird_velocity: 0.0,
            bird_tilt: 0.0,
            obstacles: Vec::new(),
            score: 0,
            best_score: 0,
        }
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    /// The bird's bounding box at its current position.
    pub fn bird_rect(&self, config: &SimConfig) -> Rect {
        Rect {
            left: config.bird_x,
            right: config.bird_x + config.bird_size,
            top: self.bird_y,
            bottom: self.bird_y + config.bird_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_defaults() {
        let config = SimConfig::default();
        let state = SimulationState::new(&config);
        assert_eq!(state.phase, Phase::Idle);
        assert!((state.bird_y - 250.0).abs() < f64::EPSILON);
        assert_eq!(state.bird_velocity, 0.0);
        assert_eq!(state.bird_tilt, 0.0);
        assert!(state.obstacles.is_empty());
        assert_eq!(state.score, 0);
        assert_eq!(state.best_score, 0);
    }

    #[test]
    fn test_pipe_rects() {
        let config = SimConfig::default();
        let pipe = Obstacle::new(800.0, 100.0);

        let top = pipe.top_rect(&config);
        assert_eq!(top.left, 800.0);
        assert_eq!(top.right, 864.0);
        assert_eq!(top.top, 0.0);
        assert_eq!(top.height(), 100.0);

        let bottom = pipe.bottom_rect(&config);
        assert_eq!(bottom.top, 250.0);
        assert_eq!(bottom.bottom, 500.0);
        assert!(!pipe.passed);
    }

    #[test]
    fn test_bird_rect() {
        let config = SimConfig::default();
        let state = SimulationState::new(&config);
        let rect = state.bird_rect(&config);
        assert_eq!(rect.left, 50.0);
        assert_eq!(rect.right, 82.0);
        assert_eq!(rect.top, 250.0);
        assert_eq!(rect.bottom, 282.0);
    }
}
