use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info, trace};

use super::{
    action::Direction,
    config::GameConfig,
    food::Food,
    grid::Grid,
    state::{CollisionType, GameState, Snake, Status},
};

/// What happened during one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickOutcome {
    /// Whether the snake ate food this tick
    pub ate_food: bool,
    /// Cause of the game over, if the tick ended the run
    pub collision: Option<CollisionType>,
}

/// The game engine that handles all game logic
///
/// One engine lives for a whole session. The wall grid is built once when
/// the engine is created and survives every game over; snake, food and score
/// are reset on each game over.
pub struct GameEngine {
    config: GameConfig,
    rng: StdRng,
    seed: u64,
    grid: Grid,
    state: GameState,
}

impl GameEngine {
    /// Create a new session with random walls and a random seed
    pub fn new(config: GameConfig) -> Self {
        Self::with_seed(config, rand::random())
    }

    /// Create a new session whose walls and food placement follow `seed`
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let grid = Grid::generate(&config, &mut rng);
        Self::build(config, grid, rng, seed)
    }

    /// Create a new session on a prepared grid
    pub fn with_grid(config: GameConfig, grid: Grid, seed: u64) -> Self {
        Self::build(config, grid, StdRng::seed_from_u64(seed), seed)
    }

    fn build(config: GameConfig, grid: Grid, mut rng: StdRng, seed: u64) -> Self {
        let snake = Snake::from_config(&config);
        let food = Food::spawn(&mut rng, &snake.body, &grid);

        info!(
            seed,
            grid_size = grid.size(),
            walls = grid.wall_count(),
            "Game session started"
        );

        Self {
            config,
            rng,
            seed,
            grid,
            state: GameState::new(snake, food),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    /// Advance the game by one step. Does nothing while stopped.
    ///
    /// Order within a tick: move, eat, then check boundary and walls, then
    /// check the body. Checks run against the already advanced head. A snake
    /// moving onto food keeps its tail on that same move, so it is one
    /// segment longer as soon as the tick returns.
    pub fn tick(&mut self) -> TickOutcome {
        if !self.state.is_running() {
            return TickOutcome::default();
        }

        if self.state.snake.next_head() == self.state.food.position {
            self.state.snake.grow();
        }
        self.state.snake.advance();

        let ate_food = self.state.snake.head() == self.state.food.position;
        if ate_food {
            self.state
                .food
                .relocate(&mut self.rng, &self.state.snake.body, &self.grid);
            self.state.score += 1;
            debug!(
                score = self.state.score,
                food = ?self.state.food.position,
                "Food eaten"
            );
        }

        let collision = self.check_collision();
        if let Some(cause) = collision {
            info!(?cause, score = self.state.score, "Game over");
            self.game_over();
        }

        TickOutcome {
            ate_food,
            collision,
        }
    }

    /// Turn the snake. Reversing onto itself is silently ignored.
    pub fn set_direction(&mut self, direction: Direction) -> bool {
        let accepted = self.state.snake.set_direction(direction);
        if !accepted {
            trace!(?direction, "Reverse turn ignored");
        }
        accepted
    }

    /// Restart ticking after a game over. Returns true if the game was stopped.
    pub fn resume(&mut self) -> bool {
        match self.state.status {
            Status::Stopped => {
                self.state.status = Status::Running;
                debug!("Game resumed");
                true
            }
            Status::Running => false,
        }
    }

    /// End the current run: respawn snake and food, clear the score and stop
    /// until the next key press. Walls are kept.
    pub fn game_over(&mut self) {
        self.state.snake.reset();
        self.state
            .food
            .relocate(&mut self.rng, &self.state.snake.body, &self.grid);
        self.state.status = Status::Stopped;
        self.state.score = 0;
    }

    fn check_collision(&self) -> Option<CollisionType> {
        let head = self.state.snake.head();

        if !self.grid.in_bounds(head) {
            return Some(CollisionType::Boundary);
        }

        if self.grid.is_blocked(head) {
            return Some(CollisionType::Wall);
        }

        if self.state.snake.bites_itself() {
            return Some(CollisionType::SelfCollision);
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::state::Position;

    fn open_engine() -> GameEngine {
        let config = GameConfig::without_walls();
        let grid = Grid::empty(config.grid_size);
        GameEngine::with_grid(config, grid, 42)
    }

    #[test]
    fn test_new_session() {
        let engine = GameEngine::with_seed(GameConfig::default(), 1);
        let state = engine.state();

        assert!(state.is_running());
        assert_eq!(state.score, 0);
        assert_eq!(state.snake.len(), 3);
        assert!(!state.snake.contains(state.food.position));
        assert!(!engine.grid().is_blocked(state.food.position));
        assert!(engine.grid().wall_count() > 0);
        assert_eq!(engine.seed(), 1);
    }

    #[test]
    fn test_basic_movement() {
        let mut engine = open_engine();
        engine.state_mut().food = Food::at(Position::new(20, 20));

        let outcome = engine.tick();

        assert_eq!(outcome, TickOutcome::default());
        assert_eq!(engine.state().snake.head(), Position::new(7, 9));
        assert_eq!(engine.state().snake.len(), 3);
    }

    #[test]
    fn test_food_consumption() {
        let mut engine = open_engine();
        engine.state_mut().food = Food::at(Position::new(7, 9));

        let outcome = engine.tick();

        assert!(outcome.ate_food);
        assert_eq!(outcome.collision, None);
        assert_eq!(engine.state().score, 1);
        assert_eq!(engine.state().snake.len(), 4);
        assert!(!engine.state().snake.contains(engine.state().food.position));
    }

    #[test]
    fn test_boundary_collision() {
        let mut engine = open_engine();
        engine.state_mut().snake.body =
            vec![Position::new(24, 3), Position::new(23, 3), Position::new(22, 3)];
        engine.state_mut().score = 7;

        let outcome = engine.tick();

        assert_eq!(outcome.collision, Some(CollisionType::Boundary));
        assert_eq!(engine.state().status, Status::Stopped);
        assert_eq!(engine.state().score, 0);
        assert_eq!(engine.state().snake, Snake::from_config(engine.config()));
    }

    #[test]
    fn test_wall_collision() {
        let config = GameConfig::default();
        let mut grid = Grid::empty(config.grid_size);
        grid.block(Position::new(8, 9));
        let mut engine = GameEngine::with_grid(config, grid, 9);
        engine.state_mut().food = Food::at(Position::new(0, 0));

        assert_eq!(engine.tick().collision, None);
        assert_eq!(engine.tick().collision, Some(CollisionType::Wall));

        assert_eq!(engine.state().status, Status::Stopped);
        assert_eq!(engine.state().snake.head(), Position::new(6, 9));
        // Walls survive the game over
        assert!(engine.grid().is_blocked(Position::new(8, 9)));
    }

    #[test]
    fn test_self_collision() {
        let mut engine = open_engine();
        engine.state_mut().food = Food::at(Position::new(0, 0));

        // Moving right from (5,5) lands on (6,5), which stays occupied
        engine.state_mut().snake.body = [(5, 5), (5, 4), (6, 4), (6, 5), (6, 6), (6, 7)]
            .into_iter()
            .map(Position::from)
            .collect();

        let outcome = engine.tick();

        assert_eq!(outcome.collision, Some(CollisionType::SelfCollision));
        assert_eq!(engine.state().status, Status::Stopped);
        assert_eq!(engine.state().snake.len(), 3);
    }

    #[test]
    fn test_prevent_180_degree_turn() {
        let mut engine = open_engine();

        assert!(!engine.set_direction(Direction::Left));
        assert_eq!(engine.state().snake.direction(), Direction::Right);
    }

    #[test]
    fn test_stopped_game_ignores_ticks() {
        let mut engine = open_engine();
        engine.game_over();
        let before = engine.state().clone();

        let outcome = engine.tick();

        assert_eq!(outcome, TickOutcome::default());
        assert_eq!(engine.state(), &before);
    }

    #[test]
    fn test_resume_only_from_stopped() {
        let mut engine = open_engine();
        assert!(!engine.resume());

        engine.game_over();
        assert!(engine.resume());
        assert!(engine.state().is_running());
    }
}
