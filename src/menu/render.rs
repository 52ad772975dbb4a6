// Menu rendering with Ratatui

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::state::MenuState;
use crate::config::KeyBindings;
use crate::game::Side;
use crate::players::PlayerKind;
use crate::session::MatchSummary;

const REPORT_WIDTH: u16 = 36;
const REPORT_HEIGHT: u16 = 9;

/// Render the player selection menu
pub fn render_menu(frame: &mut Frame, menu_state: &MenuState, bindings: &KeyBindings) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7), // Title area
            Constraint::Length(2), // Prompt
            Constraint::Min(6),    // Player kinds
            Constraint::Length(2), // Controls hint
        ])
        .split(area);

    let title_style = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
    let title_text = vec![
        Line::from(""),
        Line::from(Span::styled("+----------------------------+", title_style)),
        Line::from(Span::styled("|      A S C I I  P O N G    |", title_style)),
        Line::from(Span::styled("|   |           O         |  |", title_style)),
        Line::from(Span::styled("+----------------------------+", title_style)),
    ];
    let title = Paragraph::new(title_text).alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let prompt = Paragraph::new(Line::from(Span::styled(
        menu_state.prompt(),
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(prompt, chunks[1]);

    let mut menu_items: Vec<Line> = menu_state
        .items
        .iter()
        .enumerate()
        .map(|(i, kind)| {
            let is_selected = i == menu_state.selected_index;
            let prefix = if is_selected { "> " } else { "  " };
            let text = format!("{}{:<12}", prefix, kind.display_name());

            if is_selected {
                Line::from(Span::styled(
                    text,
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(Span::styled(text, Style::default().fg(Color::White)))
            }
        })
        .collect();

    menu_items.push(Line::from(""));
    menu_items.push(Line::from(Span::styled(
        menu_state.selected_item().description().to_string(),
        Style::default().fg(Color::DarkGray),
    )));

    let menu = Paragraph::new(menu_items).alignment(Alignment::Center);
    frame.render_widget(menu, chunks[2]);

    let controls_widget = Paragraph::new(menu_controls(bindings)).alignment(Alignment::Center);
    frame.render_widget(controls_widget, chunks[3]);
}

/// Key legend for the menu, read from the configured bindings
fn menu_controls(bindings: &KeyBindings) -> Line<'static> {
    let key = Style::default().fg(Color::Gray);
    let label = Style::default().fg(Color::DarkGray);

    Line::from(vec![
        Span::styled(format!("{}/{}", bindings.menu_up, bindings.menu_down), key),
        Span::styled(": Navigate  ", label),
        Span::styled(bindings.menu_select.clone(), key),
        Span::styled(": Select  ", label),
        Span::styled(bindings.menu_back.clone(), key),
        Span::styled(": Back  ", label),
        Span::styled(bindings.quit.clone(), key),
        Span::styled(": Quit", label),
    ])
}

fn side_color(winner: Option<Side>) -> Color {
    match winner {
        Some(Side::Left) => Color::Cyan,
        Some(Side::Right) => Color::Magenta,
        None => Color::Yellow,
    }
}

fn headline(winner: Option<Side>, left: PlayerKind, right: PlayerKind) -> String {
    match winner {
        Some(Side::Left) => format!("LEFT WINS ({})", left.display_name()),
        Some(Side::Right) => format!("RIGHT WINS ({})", right.display_name()),
        None => "DRAW".to_string(),
    }
}

/// Render the end-of-match report: who won, the final score, and how to go on
pub fn render_final_score(
    frame: &mut Frame,
    summary: &MatchSummary,
    left: PlayerKind,
    right: PlayerKind,
) {
    let area = frame.area();
    let winner = summary.winner();
    let color = side_color(winner);

    let width = REPORT_WIDTH.min(area.width);
    let height = REPORT_HEIGHT.min(area.height);
    let report_area = Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    };

    let block = Block::default()
        .title(" Match over ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));

    let body = vec![
        Line::from(""),
        Line::from(Span::styled(
            headline(winner, left, right),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(format!("{}  ", left.display_name()), Style::default().fg(Color::Gray)),
            Span::styled(
                format!("{} : {}", summary.score_left, summary.score_right),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("  {}", right.display_name()), Style::default().fg(Color::Gray)),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Press any key to continue",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    frame.render_widget(Clear, report_area);
    frame.render_widget(
        Paragraph::new(body).alignment(Alignment::Center).block(block),
        report_area,
    );
}
