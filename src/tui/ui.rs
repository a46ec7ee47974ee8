//! Stateless UI rendering for the game.

use super::app::{App, Focus};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use tictactoe_core::{Player, Position, Snapshot, Square, Status};

/// Draws the main UI.
pub fn draw(frame: &mut Frame, app: &App) {
    let snapshot = app.snapshot();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(9),    // Board + moves
            Constraint::Length(3), // Status
            Constraint::Length(3), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, rows[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[1]);

    draw_board(frame, columns[0], app, &snapshot);
    draw_moves(frame, columns[1], app, &snapshot);

    let status_color = match snapshot.status() {
        Status::Winner(_) => Color::Green,
        Status::Draw => Color::Magenta,
        Status::NextPlayer(_) => Color::Yellow,
    };
    let status = Paragraph::new(snapshot.status_text())
        .style(Style::default().fg(status_color))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(status, rows[2]);

    let help = Paragraph::new(
        "1-9/Enter: play | Tab: board/moves | ↑↓: select | S: sort | Q: quit",
    )
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, rows[3]);
}

fn pane_block(title: &str, focused: bool) -> Block<'_> {
    let border = if focused { Color::White } else { Color::DarkGray };
    Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(border))
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App, snapshot: &Snapshot) {
    let focused = *app.focus() == Focus::Board;
    let block = pane_block("Board", focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = Vec::with_capacity(5);
    for row in 0..3 {
        let mut spans = Vec::with_capacity(5);
        for col in 0..3 {
            let pos = Position::ALL[row * 3 + col];
            spans.push(cell_span(snapshot, pos, focused && pos == *app.cursor()));
            if col < 2 {
                spans.push(Span::styled("│", Style::default().fg(Color::DarkGray)));
            }
        }
        lines.push(Line::from(spans));
        if row < 2 {
            lines.push(Line::styled(
                "───┼───┼───",
                Style::default().fg(Color::DarkGray),
            ));
        }
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board, center_rect(inner, 11, 5));
}

fn cell_span(snapshot: &Snapshot, pos: Position, under_cursor: bool) -> Span<'static> {
    let (symbol, mut style) = match snapshot.board().get(pos) {
        Square::Empty => (" · ", Style::default().fg(Color::DarkGray)),
        Square::Occupied(Player::X) => (
            " X ",
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            " O ",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    if snapshot.winner().is_some_and(|line| line.contains(pos)) {
        style = style.bg(Color::Green).fg(Color::Black);
    }
    if under_cursor {
        style = style.bg(Color::White).fg(Color::Black);
    }
    Span::styled(symbol, style)
}

fn draw_moves(frame: &mut Frame, area: Rect, app: &App, snapshot: &Snapshot) {
    let order = if *snapshot.ascending() { "Asc" } else { "Desc" };
    let title = format!("Moves [{}]", order);
    let focused = *app.focus() == Focus::History;

    let items: Vec<ListItem> = snapshot
        .moves()
        .iter()
        .map(|entry| {
            let style = if *entry.current() {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(Line::styled(
                format!("{}. {}", entry.step(), entry.description()),
                style,
            ))
        })
        .collect();

    let highlight = if focused {
        Style::default().bg(Color::White).fg(Color::Black)
    } else {
        Style::default().fg(Color::Cyan)
    };
    let list = List::new(items)
        .block(pane_block(&title, focused))
        .highlight_style(highlight)
        .highlight_symbol("> ");

    let mut state = ListState::default().with_selected(Some(app.selected_row()));
    frame.render_stateful_widget(list, area, &mut state);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}
