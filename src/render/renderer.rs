use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::game::{GameEngine, Position, Status};

pub const TITLE: &str = "Retro Snake with Walls";

/// Terminal columns used by one grid cell, so cells look roughly square
pub const CELL_WIDTH: u16 = 2;

const HEAD_SYMBOL: &str = "■ ";
const BODY_SYMBOL: &str = "□ ";
const FOOD_SYMBOL: &str = "● ";
const WALL_SYMBOL: &str = "▓▓";
const EMPTY_SYMBOL: &str = "· ";

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    /// Outer size of the bordered board for a grid of `grid_size` cells
    pub fn board_size(grid_size: usize) -> (u16, u16) {
        let cells = grid_size as u16;
        (cells * CELL_WIDTH + 2, cells + 2)
    }

    pub fn render(&self, frame: &mut Frame, engine: &GameEngine) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // Title
                Constraint::Min(0),    // Board
                Constraint::Length(2), // Score and controls
            ])
            .split(frame.area());

        frame.render_widget(self.render_title(), chunks[0]);

        let board_area = self.center_board(chunks[1], engine.grid().size());
        frame.render_widget(self.render_grid(engine), board_area);

        frame.render_widget(self.render_footer(engine), chunks[2]);
    }

    fn center_board(&self, area: Rect, grid_size: usize) -> Rect {
        let (width, height) = Self::board_size(grid_size);

        let [row] = Layout::vertical([Constraint::Length(height)])
            .flex(Flex::Center)
            .areas(area);
        let [board] = Layout::horizontal([Constraint::Length(width)])
            .flex(Flex::Center)
            .areas(row);
        board
    }

    fn render_title(&self) -> Paragraph<'_> {
        Paragraph::new(Line::from(Span::styled(
            TITLE,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center)
    }

    fn render_grid(&self, engine: &GameEngine) -> Paragraph<'_> {
        let grid = engine.grid();
        let state = engine.state();
        let head = state.snake.head();
        let mut lines = Vec::with_capacity(grid.size());

        for y in 0..grid.size() {
            let mut spans = Vec::with_capacity(grid.size());

            for x in 0..grid.size() {
                let pos = Position::new(x as i32, y as i32);

                let cell = if pos == head {
                    Span::styled(
                        HEAD_SYMBOL,
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    )
                } else if state.snake.contains(pos) {
                    Span::styled(BODY_SYMBOL, Style::default().fg(Color::Blue))
                } else if pos == state.food.position {
                    Span::styled(
                        FOOD_SYMBOL,
                        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                    )
                } else if grid.is_blocked(pos) {
                    Span::styled(WALL_SYMBOL, Style::default().fg(Color::Rgb(209, 149, 63)))
                } else {
                    Span::styled(EMPTY_SYMBOL, Style::default().fg(Color::DarkGray))
                };

                spans.push(cell);
            }

            lines.push(Line::from(spans));
        }

        let border_color = match state.status {
            Status::Running => Color::White,
            Status::Stopped => Color::DarkGray,
        };

        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Thick)
                .border_style(Style::default().fg(border_color)),
        )
    }

    fn render_footer(&self, engine: &GameEngine) -> Paragraph<'_> {
        let state = engine.state();

        let score = Line::from(vec![
            Span::styled("Score: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                state.score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]);

        let hint = match state.status {
            Status::Running => Line::from(vec![
                Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
                Span::raw(" or "),
                Span::styled("WASD", Style::default().fg(Color::Cyan)),
                Span::raw(" to move | "),
                Span::styled("Q", Style::default().fg(Color::Red)),
                Span::raw(" to quit"),
            ]),
            Status::Stopped => Line::from(vec![
                Span::styled(
                    "Press any key to play",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(" | "),
                Span::styled("Q", Style::default().fg(Color::Red)),
                Span::raw(" to quit"),
            ]),
        };

        Paragraph::new(vec![score, hint]).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}
