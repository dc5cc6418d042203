//! Food entity - a single cell the snake can eat

use rand::Rng;

use super::grid::Grid;
use super::state::Position;

/// The active food cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Food {
    pub position: Position,
}

impl Food {
    /// Create food at a specific position
    pub fn at(position: Position) -> Self {
        Self { position }
    }

    /// Place new food on a free cell
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, snake_body: &[Position], grid: &Grid) -> Self {
        Self::at(Self::random_free_cell(rng, snake_body, grid))
    }

    /// Move the food to a random cell that is neither part of the snake nor
    /// a wall.
    ///
    /// Cells are sampled uniformly over the whole board until a free one
    /// turns up. The snake and walls never cover more than a small part of
    /// the board, so the retry loop is left unbounded.
    pub fn relocate<R: Rng + ?Sized>(&mut self, rng: &mut R, snake_body: &[Position], grid: &Grid) {
        self.position = Self::random_free_cell(rng, snake_body, grid);
    }

    fn random_free_cell<R: Rng + ?Sized>(
        rng: &mut R,
        snake_body: &[Position],
        grid: &Grid,
    ) -> Position {
        let size = grid.size() as i32;
        loop {
            let pos = Position::new(rng.gen_range(0..size), rng.gen_range(0..size));

            if !snake_body.contains(&pos) && !grid.is_blocked(pos) {
                return pos;
            }
        }
    }
}
