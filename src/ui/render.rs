use ratatui::{
    layout::{Rect, Size},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::config::{DisplayConfig, KeyBindings};
use crate::game::{Field, GameState, Player};

// Layout (field of W x H cells):
// Row 0: top border with the score written over its middle
// Rows 1..=H: playable rows framed by '|'
// Row H+1: bottom border
// Row H+3: controls hint

/// Whether a terminal of `size` is big enough for the whole field plus the hint line
pub fn fits(size: Size, field: &Field) -> bool {
    let (cols, rows) = field.min_terminal_size();
    size.width >= cols && size.height >= rows
}

pub fn render(frame: &mut Frame, state: &GameState, display: &DisplayConfig, controls_hint: &str) {
    let area = frame.area();
    if !fits(area.as_size(), &state.field) {
        render_too_small(frame, &state.field);
        return;
    }

    let mut lines: Vec<Line> = field_lines(state, display.ball_char)
        .into_iter()
        .map(Line::from)
        .collect();

    if display.show_controls {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            controls_hint.to_string(),
            Style::default().fg(Color::DarkGray),
        )));
    }

    let (cols, rows) = state.field.min_terminal_size();
    let field_area = Rect {
        x: area.x,
        y: area.y,
        width: cols,
        height: rows,
    };

    frame.render_widget(Paragraph::new(lines), field_area);
}

/// Shown instead of the field until the terminal is resized
pub fn render_too_small(frame: &mut Frame, field: &Field) {
    let (cols, rows) = field.min_terminal_size();
    let message = format!("Terminal too small! Resize to at least {}x{}.", cols, rows);

    let warning = Paragraph::new(message)
        .style(Style::default().fg(Color::Yellow))
        .wrap(Wrap { trim: true });

    frame.render_widget(warning, frame.area());
}

/// One-line summary of the in-game keys
pub fn controls_hint(bindings: &KeyBindings) -> String {
    format!(
        "{} quit | {}/{} left | {}/{} right",
        bindings.quit,
        bindings.left_paddle_up,
        bindings.left_paddle_down,
        bindings.right_paddle_up,
        bindings.right_paddle_down
    )
}

/// The bordered field as plain text rows, score included
pub fn field_lines(state: &GameState, ball_char: char) -> Vec<String> {
    let field = &state.field;
    let border = format!("+{}+", "-".repeat(field.width as usize));

    let mut lines = Vec::with_capacity(field.height as usize + 2);
    lines.push(with_score(&border, state));

    for y in 1..=field.height {
        let mut line = String::with_capacity(field.width as usize + 2);
        line.push('|');
        for x in 1..=field.width {
            line.push(cell_glyph(state, x, y, ball_char));
        }
        line.push('|');
        lines.push(line);
    }

    lines.push(border);
    lines
}

fn cell_glyph(state: &GameState, x: i32, y: i32, ball_char: char) -> char {
    paddle_glyph(&state.left, &state.field, x, y)
        .or_else(|| paddle_glyph(&state.right, &state.field, x, y))
        .unwrap_or(if state.ball.x == x && state.ball.y == y {
            ball_char
        } else {
            ' '
        })
}

fn paddle_glyph(player: &Player, field: &Field, x: i32, y: i32) -> Option<char> {
    let paddle = &player.paddle;
    if x != field.paddle_column(paddle.side) || !paddle.covers(y) {
        return None;
    }

    player
        .kind()
        .glyphs(paddle.side)
        .get((y - paddle.y) as usize)
        .copied()
}

fn with_score(border: &str, state: &GameState) -> String {
    let score = format!("{} : {}", state.score_left, state.score_right);
    let mut chars: Vec<char> = border.chars().collect();
    let start = chars.len().saturating_sub(score.len()) / 2;

    for (i, c) in score.chars().enumerate() {
        if let Some(slot) = chars.get_mut(start + i) {
            *slot = c;
        }
    }

    chars.into_iter().collect()
}
