use rand::Rng;

use super::config::GameConfig;
use super::state::Position;

/// Square board with a fixed set of blocked interior cells
///
/// The outer boundary is not stored here: leaving the board is detected by
/// coordinate range through [`Grid::in_bounds`]. Blocked cells are decided
/// once when the grid is built and never change afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    blocked: Vec<bool>,
}

impl Grid {
    /// Build a grid with no walls
    pub fn empty(size: usize) -> Self {
        Self {
            size,
            blocked: vec![false; size * size],
        }
    }

    /// Build a grid with random interior walls
    ///
    /// For every row pass, `walls_per_row` cells are drawn from the interior
    /// (both coordinates in `1..=size-2`). The same cell may be drawn more
    /// than once, so the final wall count can be lower than requested.
    pub fn generate<R: Rng + ?Sized>(config: &GameConfig, rng: &mut R) -> Self {
        let mut grid = Self::empty(config.grid_size);

        if config.grid_size < 3 {
            return grid;
        }

        let max = config.grid_size as i32 - 2;
        for _ in 0..config.grid_size {
            for _ in 0..config.walls_per_row {
                let x = rng.gen_range(1..=max);
                let y = rng.gen_range(1..=max);
                grid.block(Position::new(x, y));
            }
        }

        grid
    }

    /// Mark a cell as a wall. Out-of-range cells are ignored.
    pub fn block(&mut self, pos: Position) {
        if let Some(index) = self.index(pos) {
            self.blocked[index] = true;
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Check if a position is within the grid bounds
    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.x < self.size as i32 && pos.y >= 0 && pos.y < self.size as i32
    }

    /// True if the cell holds a wall. Cells outside the board are not walls.
    pub fn is_blocked(&self, pos: Position) -> bool {
        self.index(pos).is_some_and(|index| self.blocked[index])
    }

    /// All wall cells, row by row
    pub fn blocked_cells(&self) -> impl Iterator<Item = Position> + '_ {
        self.blocked
            .iter()
            .enumerate()
            .filter(|(_, blocked)| **blocked)
            .map(|(index, _)| {
                Position::new((index % self.size) as i32, (index / self.size) as i32)
            })
    }

    pub fn wall_count(&self) -> usize {
        self.blocked.iter().filter(|blocked| **blocked).count()
    }

    fn index(&self, pos: Position) -> Option<usize> {
        self.in_bounds(pos)
            .then(|| pos.y as usize * self.size + pos.x as usize)
    }
}
