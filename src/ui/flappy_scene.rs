//! Terminal rendering of a [`Scene`].
//!
//! World units are scaled onto the play field and drawn into a cell buffer
//! for per-character color control, then stamped row by row as Paragraph
//! widgets. The bottom row of the field is the ground strip.

use super::game_common::{
    create_game_layout, render_info_panel_frame, render_prompt_box, render_status_bar,
};
use super::scene::{Overlay, Scene};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const SKY: Color = Color::Rgb(78, 166, 214);
const GROUND_FG: Color = Color::Rgb(60, 120, 40);
const GROUND_BG: Color = Color::Rgb(84, 168, 55);
const PIPE_FG: Color = Color::Rgb(100, 190, 45);
const PIPE_CAP: Color = Color::Rgb(60, 120, 20);
const BIRD_BODY: Color = Color::Rgb(245, 200, 66);
const BIRD_BEAK: Color = Color::Rgb(225, 95, 35);

/// Cell in the render buffer with foreground and background colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub fg: Color,
    pub bg: Color,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            fg: Color::Reset,
            bg: SKY,
        }
    }
}

/// Render the whole game screen.
pub fn render_flappy(frame: &mut Frame, area: Rect, scene: &Scene) {
    let layout = create_game_layout(frame, area, " Flappy ", Color::Cyan, 10, 20);

    render_play_field(frame, layout.content, scene);
    render_status_bar_content(frame, layout.status_bar, scene);
    render_info_panel(frame, layout.info_panel, scene);

    match scene.overlay {
        Some(overlay @ Overlay::Start) => {
            render_prompt_box(frame, layout.content, overlay.lines(), Color::White)
        }
        Some(overlay @ Overlay::GameOver) => {
            render_prompt_box(frame, layout.content, overlay.lines(), Color::Red)
        }
        None => {}
    }
}

/// Scale the scene onto a `width` x `height` grid of cells.
pub fn rasterize(scene: &Scene, width: u16, height: u16) -> Vec<Vec<Cell>> {
    let width = width as usize;
    let height = height as usize;
    let mut buffer = vec![vec![Cell::default(); width]; height];
    if width == 0 || height < 2 {
        return buffer;
    }

    // World maps onto every row except the ground strip
    let field_rows = height - 1;
    let x_scale = width as f64 / scene.world_width;
    let y_scale = field_rows as f64 / scene.world_height;
    let to_col = |x: f64| (x * x_scale).floor() as i64;
    let to_row = |y: f64| (y * y_scale).floor() as i64;

    // ── Pipes ─────────────────────────────────────────────────────────
    for pipe in &scene.pipes {
        let left = to_col(pipe.x);
        let right = to_col(pipe.x + pipe.width).max(left + 1);
        let top_end = to_row(pipe.top_height);
        let bottom_start = to_row(pipe.bottom_y).max(top_end + 1);

        for col in left..right {
            if col < 0 || col >= width as i64 {
                continue;
            }
            let col = col as usize;
            for row in 0..field_rows as i64 {
                let in_top = row < top_end;
                let in_bottom = row >= bottom_start;
                if !in_top && !in_bottom {
                    continue;
                }
                let is_cap = row == top_end - 1 || row == bottom_start;
                buffer[row as usize][col] = if is_cap {
                    Cell {
                        ch: '▓',
                        fg: PIPE_CAP,
                        bg: PIPE_FG,
                    }
                } else {
                    Cell {
                        ch: '█',
                        fg: PIPE_FG,
                        bg: SKY,
                    }
                };
            }
        }
    }

    // ── Ground ────────────────────────────────────────────────────────
    for (i, cell) in buffer[field_rows].iter_mut().enumerate() {
        *cell = Cell {
            ch: if i % 4 == 0 { '▒' } else { '░' },
            fg: GROUND_FG,
            bg: GROUND_BG,
        };
    }

    // ── Bird ──────────────────────────────────────────────────────────
    let bird = &scene.bird;
    let bird_left = to_col(bird.x);
    let bird_cols = ((bird.size * x_scale).round() as i64).max(1);
    let bird_top = to_row(bird.y).min(field_rows as i64 - 1);
    let bird_rows = ((bird.size * y_scale).round() as i64).max(1);
    for dy in 0..bird_rows {
        let row = bird_top + dy;
        if row < 0 || row >= field_rows as i64 {
            continue;
        }
        for dx in 0..bird_cols {
            let col = bird_left + dx;
            if col < 0 || col >= width as i64 {
                continue;
            }
            let is_head = dx == bird_cols - 1 && dy == 0;
            buffer[row as usize][col as usize] = if is_head {
                Cell {
                    ch: bird.glyph(),
                    fg: BIRD_BEAK,
                    bg: BIRD_BODY,
                }
            } else {
                Cell {
                    ch: '█',
                    fg: BIRD_BODY,
                    bg: SKY,
                }
            };
        }
    }

    // ── Score (top centre) ────────────────────────────────────────────
    stamp_centered(&mut buffer, 0, &scene.score.score.to_string(), Color::White);
    if field_rows > 2 {
        stamp_centered(
            &mut buffer,
            1,
            &format!("Best: {}", scene.score.best),
            Color::Rgb(220, 235, 245),
        );
    }

    buffer
}

fn stamp_centered(buffer: &mut [Vec<Cell>], row: usize, text: &str, fg: Color) {
    let Some(line) = buffer.get_mut(row) else {
        return;
    };
    let len = text.chars().count();
    let start = line.len().saturating_sub(len) / 2;
    for (i, ch) in text.chars().enumerate() {
        if let Some(cell) = line.get_mut(start + i) {
            *cell = Cell { ch, fg, bg: SKY };
        }
    }
}

fn render_play_field(frame: &mut Frame, area: Rect, scene: &Scene) {
    if area.height < 2 || area.width < 10 {
        return;
    }

    let buffer = rasterize(scene, area.width, area.height);

    for (row_idx, row_data) in buffer.iter().enumerate() {
        let mut spans: Vec<Span> = Vec::new();
        let mut current_fg = Color::Reset;
        let mut current_bg = Color::Reset;
        let mut current_text = String::new();

        for &cell in row_data.iter() {
            if (cell.fg != current_fg || cell.bg != current_bg) && !current_text.is_empty() {
                spans.push(Span::styled(
                    std::mem::take(&mut current_text),
                    Style::default().fg(current_fg).bg(current_bg),
                ));
            }
            current_fg = cell.fg;
            current_bg = cell.bg;
            current_text.push(cell.ch);
        }
        if !current_text.is_empty() {
            spans.push(Span::styled(
                current_text,
                Style::default().fg(current_fg).bg(current_bg),
            ));
        }

        let row_area = Rect::new(area.x, area.y + row_idx as u16, area.width, 1);
        frame.render_widget(Paragraph::new(Line::from(spans)), row_area);
    }
}

fn render_status_bar_content(frame: &mut Frame, area: Rect, scene: &Scene) {
    let (status, color, action) = match scene.overlay {
        Some(Overlay::Start) => ("Ready", Color::Yellow, "Start"),
        Some(Overlay::GameOver) => ("Crashed!", Color::Red, "Play again"),
        None => ("Fly!", Color::Green, "Flap"),
    };
    render_status_bar(
        frame,
        area,
        status,
        color,
        &[("[Space/Click]", action), ("[R]", "Reset"), ("[Q]", "Quit")],
    );
}

fn render_info_panel(frame: &mut Frame, area: Rect, scene: &Scene) {
    let inner = render_info_panel_frame(frame, area);
    if inner.height < 2 || inner.width < 4 {
        return;
    }

    let lines = vec![
        Line::from(vec![
            Span::styled(" Score: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                scene.score.score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled(" Best: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                scene.score.best.to_string(),
                Style::default().fg(Color::Yellow),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled(" Pipes: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                scene.pipes.len().to_string(),
                Style::default().fg(Color::Green),
            ),
        ]),
        Line::from(vec![
            Span::styled(" Tilt: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{:+.0}°", scene.bird.tilt),
                Style::default().fg(Color::White),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled(" █ ", Style::default().fg(BIRD_BODY)),
            Span::styled("Bird", Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(vec![
            Span::styled(" █ ", Style::default().fg(PIPE_FG)),
            Span::styled("Pipe", Style::default().fg(Color::DarkGray)),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::SimConfig;
    use crate::game::{Obstacle, Phase, SimulationState};
    use crate::ui::scene::build_scene;

    fn scene_with_pipe(x: f64, gap_top: f64) -> Scene {
        let config = SimConfig::default();
        let mut state = SimulationState::new(&config);
        state.phase = Phase::Running;
        state.obstacles.push(Obstacle::new(x, gap_top));
        build_scene(&state, &config)
    }

    #[test]
    fn test_buffer_dimensions() {
        let scene = scene_with_pipe(400.0, 100.0);
        let buffer = rasterize(&scene, 80, 26);
        assert_eq!(buffer.len(), 26);
        assert!(buffer.iter().all(|row| row.len() == 80));
    }

    #[test]
    fn test_ground_fills_bottom_row() {
        let scene = scene_with_pipe(400.0, 100.0);
        let buffer = rasterize(&scene, 80, 26);
        assert!(buffer[25].iter().all(|c| c.bg == GROUND_BG));
    }

    #[test]
    fn test_pipe_has_gap() {
        // 80 cols over 800 units: 10 units per col; 25 rows over 500: 20 per row
        let scene = scene_with_pipe(400.0, 100.0);
        let buffer = rasterize(&scene, 80, 26);
        let col = 42;
        // Top pipe rows 0..5, gap rows 5..12, bottom pipe 12..25
        assert_ne!(buffer[3][col], Cell::default());
        assert_eq!(buffer[8][col], Cell::default());
        assert_ne!(buffer[20][col], Cell::default());
    }

    #[test]
    fn test_bird_drawn_at_position() {
        let config = SimConfig::default();
        let state = SimulationState::new(&config);
        let scene = build_scene(&state, &config);
        let buffer = rasterize(&scene, 80, 26);
        // bird_y 250 -> row 12, bird_x 50 -> col 5
        assert_eq!(buffer[12][5].fg, BIRD_BODY);
    }

    #[test]
    fn test_offscreen_pipe_is_clipped() {
        let scene = scene_with_pipe(-90.0, 100.0);
        let buffer = rasterize(&scene, 80, 26);
        assert_eq!(buffer.len(), 26);
    }

    #[test]
    fn test_tiny_area_does_not_panic() {
        let scene = scene_with_pipe(400.0, 100.0);
        assert_eq!(rasterize(&scene, 0, 0).len(), 0);
        assert_eq!(rasterize(&scene, 5, 1).len(), 1);
    }
}
