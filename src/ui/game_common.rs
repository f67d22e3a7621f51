//! Shared layout helpers for the game screen.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Layout areas returned by `create_game_layout`.
pub struct GameLayout {
    /// Play field - top left, inside outer border
    pub content: Rect,
    /// Status bar area (2 lines) - bottom left, inside outer border
    pub status_bar: Rect,
    /// Info panel area - right side, with its own border
    pub info_panel: Rect,
}

/// Create the game layout with an outer border.
///
/// ```text
/// ┌─ Title ─────────────────────────┬─ Info ──────┐
/// │                                 │             │
/// │   [play field]                  │  [info]     │
/// │                                 │             │
/// │ [status bar - 2 lines]          │             │
/// └─────────────────────────────────┴─────────────┘
/// ```
///
/// # Arguments
/// * `frame` - The frame to render to
/// * `area` - The whole terminal area given to the game
/// * `title` - Title for the outer border (" Flappy ")
/// * `border_color` - Color for the outer border
/// * `content_min_height` - Rows the play field keeps before the status bar shrinks it
/// * `info_panel_width` - Width of the score panel on the right
///
/// # Returns
/// A `GameLayout` with the play field, status bar and info panel areas.
pub fn create_game_layout(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    border_color: Color,
    content_min_height: u16,
    info_panel_width: u16,
) -> GameLayout {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Play field and status bar on the left, info panel on the right
    let h_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(info_panel_width)])
        .split(inner);

    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(content_min_height), Constraint::Length(2)])
        .split(h_chunks[0]);

    GameLayout {
        content: v_chunks[0],
        status_bar: v_chunks[1],
        info_panel: h_chunks[1],
    }
}

/// Render a 2-line status bar: the phase message, then key hints.
///
/// # Arguments
/// * `frame` - The frame to render to
/// * `area` - The 2-line strip under the play field
/// * `status_text` - Phase message for line 1 (e.g. "Fly!")
/// * `status_color` - Color for the message
/// * `controls` - `(key, action)` pairs for line 2, e.g. `[("[Space/Click]", "Flap"), ("[Q]", "Quit")]`
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    status_text: &str,
    status_color: Color,
    controls: &[(&str, &str)],
) {
    if area.height < 1 {
        return;
    }

    let status = Paragraph::new(status_text)
        .style(Style::default().fg(status_color))
        .alignment(Alignment::Center);
    frame.render_widget(status, Rect { height: 1, ..area });

    if area.height >= 2 && !controls.is_empty() {
        let mut spans = Vec::new();
        for (i, (key, action)) in controls.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("  ", Style::default()));
            }
            spans.push(Span::styled(*key, Style::default().fg(Color::White)));
            spans.push(Span::styled(
                format!(" {}", action),
                Style::default().fg(Color::DarkGray),
            ));
        }

        let controls_line = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
        frame.render_widget(
            controls_line,
            Rect {
                y: area.y + 1,
                height: 1,
                ..area
            },
        );
    }
}

/// Draw the bordered " Info " box that holds the score readouts.
///
/// Returns the inner Rect for the panel's lines.
pub fn render_info_panel_frame(frame: &mut Frame, area: Rect) -> Rect {
    let block = Block::default()
        .title(" Info ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

/// Centre of `area` sized to fit `width` x `height`, clipped to the area.
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

/// Bordered prompt box centred over `area`. The first line is the title.
pub fn render_prompt_box(frame: &mut Frame, area: Rect, lines: &[&str], color: Color) {
    if lines.is_empty() {
        return;
    }

    let text_width = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0) as u16;
    let box_area = centered_rect(area, text_width + 6, lines.len() as u16 + 2);
    if box_area.width < 3 || box_area.height < 3 {
        return;
    }

    frame.render_widget(Clear, box_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));
    let inner = block.inner(box_area);
    frame.render_widget(block, box_area);

    let text: Vec<Line> = lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            let style = if i == 0 {
                Style::default().fg(color).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            Line::from(Span::styled(*line, style))
        })
        .collect();

    frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), inner);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_centered_rect_fits() {
        let area = Rect::new(10, 5, 40, 20);
        let rect = centered_rect(area, 20, 4);
        assert_eq!(rect, Rect::new(20, 13, 20, 4));
    }

    #[test]
    fn test_centered_rect_clips_to_area() {
        let area = Rect::new(0, 0, 10, 3);
        let rect = centered_rect(area, 30, 8);
        assert_eq!(rect, area);
    }

    #[test]
    fn test_layout_splits_inside_border() {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.size();
                let layout = create_game_layout(frame, area, " Flappy ", Color::Cyan, 10, 22);
                assert_eq!(layout.info_panel, Rect::new(57, 1, 22, 22));
                assert_eq!(layout.content, Rect::new(1, 1, 56, 20));
                assert_eq!(layout.status_bar, Rect::new(1, 21, 56, 2));
            })
            .unwrap();
    }

    #[test]
    fn test_status_bar_writes_message_and_hints() {
        let mut terminal = Terminal::new(TestBackend::new(40, 2)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.size();
                render_status_bar(frame, area, "Fly!", Color::Green, &[("[Q]", "Quit")]);
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let row = |y: u16| -> String { (0..40).map(|x| buffer.get(x, y).symbol()).collect() };
        assert_eq!(row(0).trim(), "Fly!");
        assert_eq!(row(1).trim(), "[Q] Quit");
    }
}
