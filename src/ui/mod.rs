pub mod flappy_scene;
pub mod game_common;
pub mod scene;

use crate::core::config::SimConfig;
use crate::game::SimulationState;
use ratatui::Frame;

/// Draw one frame of the game screen.
pub fn draw_ui(frame: &mut Frame, state: &SimulationState, config: &SimConfig) {
    let scene = scene::build_scene(state, config);
    let area = frame.size();
    flappy_scene::render_flappy(frame, area, &scene);
}
