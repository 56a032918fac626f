//! Stateless rendering of the LED board into the terminal.

use ledtoe_core::{Color as LedColor, GameSession, Lamp, Mark, Mode, Outcome};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

use crate::keymap::HELP;

const CELL_WIDTH: u16 = 10;
const CELL_HEIGHT: u16 = 5;

/// Draws the board, a status line and the key reference.
pub fn draw(frame: &mut Frame, session: &GameSession) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(CELL_HEIGHT * 3 + 2), // Board
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new("LED Tic-Tac-Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    draw_board(frame, chunks[1], session);

    let status = Paragraph::new(status_line(session))
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);
}

fn draw_board(frame: &mut Frame, area: Rect, session: &GameSession) {
    let board_area = center_rect(area, CELL_WIDTH * 3 + 2, CELL_HEIGHT * 3 + 2);
    let outline = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = outline.inner(board_area);
    frame.render_widget(outline, board_area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(CELL_HEIGHT); 3])
        .split(inner);

    for (row, lamps) in session.frame().rows().iter().enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(CELL_WIDTH); 3])
            .split(rows[row]);
        for (col, lamp) in lamps.iter().enumerate() {
            let cell = Block::default().style(Style::default().bg(lamp_color(lamp)));
            frame.render_widget(cell, cols[col]);
        }
    }
}

/// Terminal color for what a lamp is emitting.
pub fn lamp_color(lamp: &Lamp) -> Color {
    let LedColor { red, green, blue } = lamp.emitted();
    let channel = |on: bool| if on { 255 } else { 0 };
    Color::Rgb(channel(red), channel(green), channel(blue))
}

/// Describes the mode and game state in one line.
pub fn status_line(session: &GameSession) -> String {
    match session.mode() {
        Mode::Setup => {
            let opponent = if *session.two_player() {
                "two players"
            } else if *session.random_ai() {
                "random AI"
            } else {
                "minimax AI"
            };
            format!(
                "Setup: editing {} ({} vs {}), {}",
                session.editing(),
                session.colors().entry(Mark::X),
                session.colors().entry(Mark::O),
                opponent
            )
        }
        Mode::Play => format!("Play: cursor at {}", session.cursor().label()),
        Mode::End => match session.outcome() {
            Outcome::Won(mark) => format!("{} wins! Select for a new game", mark),
            Outcome::Draw | Outcome::Undetermined => "Draw! Select for a new game".to_string(),
        },
        Mode::Party => "Party! Select to leave".to_string(),
    }
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

#[cfg(test)]
mod tests {
    use super::*;
    use ledtoe_core::{GameSettings, PaletteColor, X_SLOT};

    #[test]
    fn test_lit_lamp_maps_to_rgb() {
        let session = GameSession::new(GameSettings::default(), 0);
        let lamp = session.frame().lamp(X_SLOT);
        assert_eq!(lamp.color, PaletteColor::Red.color());
        assert_eq!(lamp_color(&lamp), Color::Rgb(255, 0, 0));
    }

    #[test]
    fn test_setup_status() {
        let session = GameSession::new(GameSettings::default(), 0);
        assert_eq!(
            status_line(&session),
            "Setup: editing X (Red vs Blue), minimax AI"
        );
    }
}
