use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::game::{GameState, Position};
use crate::metrics::SessionMetrics;

const BOARD: Color = Color::Rgb(0, 34, 0);
const SNAKE_BODY: Color = Color::Rgb(0, 119, 0);
const SNAKE_HEAD: Color = Color::Rgb(0, 190, 0);
const APPLE: Color = Color::Rgb(120, 0, 0);

/// Draws the whole frame: stats header, the grid (or the win banner), and a
/// controls footer. Reads state, never mutates it.
pub struct Renderer {
    apples_to_win: u32,
}

impl Renderer {
    pub fn new(apples_to_win: u32) -> Self {
        Self { apples_to_win }
    }

    pub fn render(
        &self,
        frame: &mut Frame,
        state: &GameState,
        metrics: &SessionMetrics,
        paused: bool,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(3),
            ])
            .split(frame.area());

        frame.render_widget(self.stats_line(state, metrics, paused), chunks[0]);

        let board_area = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(10),
                Constraint::Percentage(80),
                Constraint::Percentage(10),
            ])
            .split(chunks[1])[1];

        if state.is_running() {
            frame.render_widget(self.board(state, paused), board_area);
        } else {
            frame.render_widget(self.win_banner(state, metrics), board_area);
        }

        frame.render_widget(self.controls_line(), chunks[2]);
    }

    /// The grid as two-character quads: dark board, green snake with a
    /// brighter head, red apple. The apple is painted last, so a respawn
    /// onto a body cell stays visible.
    fn board(&self, state: &GameState, paused: bool) -> Paragraph<'_> {
        let snap = state.snapshot();
        let mut lines = Vec::with_capacity(state.grid.height as usize);

        for y in 0..state.grid.height {
            let mut spans = Vec::with_capacity(state.grid.width as usize);

            for x in 0..state.grid.width {
                let pos = Position::new(x, y);

                let cell = if pos == snap.apple {
                    Span::styled("██", Style::default().fg(APPLE))
                } else if pos == snap.head {
                    Span::styled("██", Style::default().fg(SNAKE_HEAD))
                } else if snap.body.contains(&pos) {
                    Span::styled("██", Style::default().fg(SNAKE_BODY))
                } else {
                    Span::styled("░░", Style::default().fg(BOARD))
                };

                spans.push(cell);
            }

            lines.push(Line::from(spans));
        }

        let title = if paused { " Snake (paused) " } else { " Snake " };

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .title(title),
            )
            .alignment(Alignment::Center)
    }

    fn stats_line(
        &self,
        state: &GameState,
        metrics: &SessionMetrics,
        paused: bool,
    ) -> Paragraph<'_> {
        let mut spans = vec![
            Span::styled("Apples: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                format!("{} / {}", state.snake.apples_eaten(), self.apples_to_win),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Time: ", Style::default().fg(Color::Yellow)),
            Span::styled(metrics.format_elapsed(), Style::default().fg(Color::White)),
            Span::raw("    "),
            Span::styled("Wins: ", Style::default().fg(Color::Yellow)),
            Span::styled(metrics.wins().to_string(), Style::default().fg(Color::White)),
        ];

        if paused {
            spans.push(Span::raw("    "));
            spans.push(Span::styled(
                "PAUSED",
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            ));
        }

        Paragraph::new(vec![Line::from(spans)]).alignment(Alignment::Center)
    }

    fn win_banner(&self, state: &GameState, metrics: &SessionMetrics) -> Paragraph<'_> {
        let mut lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                "YOU WIN!",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("Apples eaten: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    state.snake.apples_eaten().to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
        ];

        if let Some(best) = metrics.fastest_win() {
            lines.push(Line::from(vec![
                Span::styled("Fastest win: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    crate::metrics::session::format_mm_ss(best),
                    Style::default().fg(Color::White),
                ),
            ]));
        }

        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("Press ", Style::default().fg(Color::Gray)),
            Span::styled(
                "R",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" to play again or ", Style::default().fg(Color::Gray)),
            Span::styled(
                "Q",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Span::styled(" to quit", Style::default().fg(Color::Gray)),
        ]));

        Paragraph::new(lines).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Green)),
        )
    }

    fn controls_line(&self) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" to steer | "),
            Span::styled("Space", Style::default().fg(Color::Cyan)),
            Span::raw(" to pause | "),
            Span::styled("R", Style::default().fg(Color::Green)),
            Span::raw(" to restart | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}
