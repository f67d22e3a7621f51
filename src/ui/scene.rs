//! Presentation model: a plain description of what should be on screen.
//!
//! [`build_scene`] is a pure function of the simulation state. It owns no
//! state and has no side effects; the terminal renderer consumes the result.

use crate::core::config::SimConfig;
use crate::game::{Phase, SimulationState};

#[derive(Debug, Clone, PartialEq)]
pub struct BirdSprite {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    /// Degrees, positive = nose down.
    pub tilt: f64,
}

impl BirdSprite {
    /// Glyph for the current tilt.
    pub fn glyph(&self) -> char {
        if self.tilt < -10.0 {
            '▲'
        } else if self.tilt > 45.0 {
            '▼'
        } else {
            '►'
        }
    }
}

/// One pipe pair as two vertical bars.
#[derive(Debug, Clone, PartialEq)]
pub struct PipeSprite {
    pub x: f64,
    pub width: f64,
    /// Height of the upper pipe, measured down from the ceiling.
    pub top_height: f64,
    /// Upper edge of the lower pipe.
    pub bottom_y: f64,
    pub bottom_height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreReadout {
    pub score: u32,
    pub best: u32,
}

/// Phase-dependent prompt drawn over the play field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    Start,
    GameOver,
}

impl Overlay {
    pub fn lines(self) -> &'static [&'static str] {
        match self {
            Overlay::Start => &["Click or Press Space", "to Start"],
            Overlay::GameOver => &["Game Over!", "Click or Press Space", "to Play Again"],
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub world_width: f64,
    pub world_height: f64,
    pub bird: BirdSprite,
    pub pipes: Vec<PipeSprite>,
    pub score: ScoreReadout,
    pub overlay: Option<Overlay>,
}

/// Describe the current frame.
pub fn build_scene(state: &SimulationState, config: &SimConfig) -> Scene {
    let pipes = state
        .obstacles
        .iter()
        .map(|pipe| {
            let bottom_y = pipe.gap_top + config.gap_size;
            PipeSprite {
                x: pipe.x,
                width: config.pipe_width,
                top_height: pipe.gap_top - config.ceiling_y,
                bottom_y,
                bottom_height: config.floor_y - bottom_y,
            }
        })
        .collect();

    let overlay = match state.phase {
        Phase::Idle => Some(Overlay::Start),
        Phase::Running => None,
        Phase::Over => Some(Overlay::GameOver),
    };

    Scene {
        world_width: config.pipe_spawn_x,
        world_height: config.floor_y - config.ceiling_y,
        bird: BirdSprite {
            x: config.bird_x,
            y: state.bird_y,
            size: config.bird_size,
            tilt: state.bird_tilt,
        },
        pipes,
        score: ScoreReadout {
            score: state.score,
            best: state.best_score,
        },
        overlay,
    }
}
