use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::action::Direction;

/// Configuration for a game session
///
/// The board is a fixed square; none of these values are meant to change
/// while a session is running.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Side length of the square grid, in cells
    pub grid_size: usize,
    /// Random wall cells placed per row pass when the grid is built
    pub walls_per_row: usize,
    /// Snake body on start and after every game over, head first
    pub initial_body: Vec<(i32, i32)>,
    /// Direction the snake moves in on start and after every game over
    pub initial_direction: Direction,
    /// Time between two engine ticks, in milliseconds
    pub tick_interval_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: 25,
            walls_per_row: 3,
            initial_body: vec![(6, 9), (5, 9), (4, 9)],
            initial_direction: Direction::Right,
            tick_interval_ms: 200,
        }
    }
}

impl GameConfig {
    /// Default board with a custom tick interval
    pub fn with_tick_interval(tick_interval_ms: u64) -> Self {
        Self {
            tick_interval_ms,
            ..Default::default()
        }
    }

    /// Default board without any interior walls
    pub fn without_walls() -> Self {
        Self {
            walls_per_row: 0,
            ..Default::default()
        }
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}
