use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use crate::game::{GameState, Position};
use crate::metrics::GameMetrics;

/// Terminal columns used per grid cell, cells are roughly square this way
const CELL_WIDTH: u16 = 2;

pub struct Renderer {
    segment_size: f32,
}

impl Renderer {
    pub fn new(segment_size: f32) -> Self {
        Self { segment_size }
    }

    pub fn render(&self, frame: &mut Frame, state: &GameState, metrics: &GameMetrics) {
        frame.render_widget(
            Block::default().style(Style::default().bg(Color::Black)),
            frame.area(),
        );

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Header
                Constraint::Min(0),    // Play area
                Constraint::Length(1), // Footer
            ])
            .split(frame.area());

        let stats = self.render_stats(state, metrics);
        frame.render_widget(stats, chunks[0]);

        let (columns, rows) = state.play_area.cells(self.segment_size);
        let board = centered_rect(
            to_u16(columns).saturating_mul(CELL_WIDTH).saturating_add(2),
            to_u16(rows).saturating_add(2),
            chunks[1],
        );
        // Only the cells that fit inside the border are drawn
        let visible = (
            columns.min(usize::from(board.width.saturating_sub(2) / CELL_WIDTH)),
            rows.min(usize::from(board.height.saturating_sub(2))),
        );
        frame.render_widget(self.render_grid(state, visible), board);

        if state.is_over {
            let overlay = centered_rect(24, 5, board);
            frame.render_widget(Clear, overlay);
            frame.render_widget(self.render_game_over(state), overlay);
        }

        let controls = self.render_controls();
        frame.render_widget(controls, chunks[2]);
    }

    fn render_grid(&self, state: &GameState, (columns, rows): (usize, usize)) -> Paragraph<'_> {
        let size = self.segment_size;
        let area = state.play_area;
        let head = state.head();

        let mut lines = Vec::with_capacity(rows);
        for row in 0..rows {
            let mut spans = Vec::with_capacity(columns);

            for column in 0..columns {
                let pos = area.cell_origin(column, row, size);
                spans.push(self.cell(pos, head, state));
            }

            lines.push(Line::from(spans));
        }

        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(Color::White))
                .title(" Snake "),
        )
    }

    fn cell(&self, pos: Position, head: Position, state: &GameState) -> Span<'static> {
        if pos == head {
            // Snake head - distinct color
            Span::styled(
                "██",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
        } else if state.player.occupies(pos) {
            Span::styled("██", Style::default().fg(Color::White))
        } else if state.food == Some(pos) {
            Span::styled(
                "()",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )
        } else {
            Span::raw("  ")
        }
    }

    fn render_stats(&self, state: &GameState, metrics: &GameMetrics) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("score: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                state.score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled("length: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                state.player.len().to_string(),
                Style::default().fg(Color::White),
            ),
            Span::raw("  "),
            Span::styled("ticks: ", Style::default().fg(Color::Yellow)),
            Span::styled(state.ticks.to_string(), Style::default().fg(Color::White)),
            Span::raw("  "),
            Span::styled("time: ", Style::default().fg(Color::Yellow)),
            Span::styled(metrics.format_time(), Style::default().fg(Color::White)),
            Span::raw("  "),
            Span::styled("games: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                metrics.games_played().to_string(),
                Style::default().fg(Color::White),
            ),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_game_over(&self, state: &GameState) -> Paragraph<'_> {
        let text = vec![
            Line::from(Span::styled(
                "game over",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )),
            Line::from(vec![
                Span::styled("score ", Style::default().fg(Color::Gray)),
                Span::styled(
                    state.score.to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(vec![
                Span::styled("R", Style::default().fg(Color::Green)),
                Span::styled(" restart  ", Style::default().fg(Color::Gray)),
                Span::styled("Q", Style::default().fg(Color::Red)),
                Span::styled(" quit", Style::default().fg(Color::Gray)),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
    }

    fn render_controls(&self) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" to turn | "),
            Span::styled("R", Style::default().fg(Color::Green)),
            Span::raw(" to restart | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

fn to_u16(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

/// A `width` x `height` rectangle centered in `area`, clipped to it
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
