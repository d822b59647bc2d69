//! Stateless UI rendering.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use strictly_minimax::{CELL_COUNT, Mark, Outcome, Player};

use super::app::{App, Highlight};

const CELL_WIDTH: u16 = 9;
const CELL_HEIGHT: u16 = 3;
const ORANGE: Color = Color::Rgb(255, 165, 0);

/// Draws the whole screen and returns where each cell landed.
pub fn draw(frame: &mut Frame, app: &App) -> [Rect; CELL_COUNT] {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(11),   // Board
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new("Strictly Minimax - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let areas = draw_board(frame, chunks[1], app);

    let status_style = match app.outcome() {
        Some(Outcome::Won(Player::Human)) => Style::default().fg(Color::Green),
        Some(Outcome::Won(Player::Automated)) => Style::default().fg(Color::Yellow),
        Some(Outcome::Tied) => Style::default().fg(ORANGE),
        None => Style::default().fg(Color::White),
    };
    let status = Paragraph::new(app.status_message())
        .style(status_style.add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    let help = Paragraph::new("arrows + Enter, 1-9 or click to play | r replay | q quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);

    areas
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) -> [Rect; CELL_COUNT] {
    let board_area = center_rect(area, CELL_WIDTH * 3 + 2, CELL_HEIGHT * 3 + 2);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
        ])
        .split(board_area);

    let mut areas = [Rect::default(); CELL_COUNT];
    for row in 0..3 {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(CELL_WIDTH),
                Constraint::Length(1),
                Constraint::Length(CELL_WIDTH),
                Constraint::Length(1),
                Constraint::Length(CELL_WIDTH),
            ])
            .split(rows[row * 2]);

        for col in 0..3 {
            let index = row * 3 + col;
            areas[index] = cols[col * 2];
            draw_cell(frame, areas[index], app, index);
            if col < 2 {
                draw_separator_vertical(frame, cols[col * 2 + 1]);
            }
        }
        if row < 2 {
            draw_separator(frame, rows[row * 2 + 1]);
        }
    }
    areas
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, index: usize) {
    let mark = app.cell(index);
    let symbol = app.config().symbol(mark).unwrap_or(' ');

    let mut style = match mark {
        Mark::Empty => Style::default().fg(Color::DarkGray),
        Mark::Human => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        Mark::Automated => Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
    };

    if let Some(highlight) = app.highlight().filter(|h| h.covers(index)) {
        let background = match highlight {
            Highlight::Line {
                player: Player::Human,
                ..
            } => Color::Green,
            Highlight::Line {
                player: Player::Automated,
                ..
            } => Color::Yellow,
            Highlight::Tie => ORANGE,
        };
        style = style.bg(background).fg(Color::Black);
    } else if app.input_enabled() && index == app.cursor() {
        style = style.bg(Color::White).fg(Color::Black);
    }

    let text = vec![
        Line::from(""),
        Line::from(Span::raw(format!(" {} ", symbol))),
        Line::from(""),
    ];
    let paragraph = Paragraph::new(text)
        .style(style)
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::from("│"); area.height as usize])
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
