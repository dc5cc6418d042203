use super::action::Direction;
use super::config::GameConfig;
use super::food::Food;

/// A position on the game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move position in a direction
    pub fn moved_in_direction(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx, dy)
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// The snake in the game
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, with head at index 0
    pub body: Vec<Position>,
    direction: Direction,
    /// Direction of the last completed move
    heading: Direction,
    /// One-shot flag: keep the tail on the next advance
    grow_pending: bool,
    spawn_body: Vec<Position>,
    spawn_direction: Direction,
}

impl Snake {
    /// Create a snake from its segments (head first) and its direction.
    /// The same body and direction are restored by [`Snake::reset`].
    pub fn new(body: Vec<Position>, direction: Direction) -> Self {
        debug_assert!(!body.is_empty(), "snake needs at least one segment");

        Self {
            spawn_body: body.clone(),
            spawn_direction: direction,
            body,
            direction,
            heading: direction,
            grow_pending: false,
        }
    }

    /// Snake in the start position described by the config
    pub fn from_config(config: &GameConfig) -> Self {
        let body = config
            .initial_body
            .iter()
            .copied()
            .map(Position::from)
            .collect();
        Self::new(body, config.initial_direction)
    }

    /// Get the head position
    pub fn head(&self) -> Position {
        self.body[0]
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Change direction unless it would reverse the snake.
    ///
    /// Stricter than a plain opposite check: a turn is ignored when it is the
    /// opposite of the current direction, and also when it is the opposite
    /// of the direction of the last completed move. Right, Up, Left pressed
    /// within one tick therefore stops at Up instead of folding the head
    /// back onto the neck. Returns whether the turn was accepted.
    pub fn set_direction(&mut self, direction: Direction) -> bool {
        if self.direction.is_opposite(direction) || self.heading.is_opposite(direction) {
            return false;
        }
        self.direction = direction;
        true
    }

    /// Where the head goes on the next advance
    pub fn next_head(&self) -> Position {
        self.head().moved_in_direction(self.direction)
    }

    /// Move one cell in the current direction.
    ///
    /// The tail is kept if a growth is pending, which lengthens the snake by
    /// exactly one segment.
    pub fn advance(&mut self) {
        let new_head = self.next_head();
        self.body.insert(0, new_head);

        if self.grow_pending {
            self.grow_pending = false;
        } else {
            self.body.pop();
        }

        self.heading = self.direction;
    }

    /// Keep the tail on the next advance. Repeated calls before that
    /// advance still add a single segment.
    pub fn grow(&mut self) {
        self.grow_pending = true;
    }

    pub fn is_growing(&self) -> bool {
        self.grow_pending
    }

    /// Back to the spawn body and direction, dropping any pending growth
    pub fn reset(&mut self) {
        self.body = self.spawn_body.clone();
        self.direction = self.spawn_direction;
        self.heading = self.spawn_direction;
        self.grow_pending = false;
    }

    /// Get body segments (excluding head)
    pub fn body_segments(&self) -> &[Position] {
        &self.body[1..]
    }

    /// Check if position collides with snake body (excluding head)
    pub fn collides_with_body(&self, pos: Position) -> bool {
        self.body_segments().contains(&pos)
    }

    /// True if the head overlaps another segment
    pub fn bites_itself(&self) -> bool {
        self.collides_with_body(self.head())
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Check if the snake is empty (should never happen in practice)
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// Whether the engine consumes ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    Running,
    /// Waiting for a key press after a game over
    Stopped,
}

/// Cause of a game over
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionType {
    /// Snake left the board
    Boundary,
    /// Snake hit an interior wall
    Wall,
    /// Snake hit itself
    SelfCollision,
}

/// Per-run game state: everything that is reset on game over
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    pub food: Food,
    pub score: u32,
    pub status: Status,
}

impl GameState {
    pub fn new(snake: Snake, food: Food) -> Self {
        Self {
            snake,
            food,
            score: 0,
            status: Status::Running,
        }
    }

    pub fn is_running(&self) -> bool {
        self.status == Status::Running
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn start_snake() -> Snake {
        Snake::from_config(&GameConfig::default())
    }

    #[test]
    fn test_position_movement() {
        let pos = Position::new(5, 5);
        assert_eq!(pos.moved_by(1, 0), Position::new(6, 5));
        assert_eq!(pos.moved_by(-1, 0), Position::new(4, 5));
        assert_eq!(pos.moved_by(0, 1), Position::new(5, 6));
        assert_eq!(pos.moved_by(0, -1), Position::new(5, 4));
        assert_eq!(pos.moved_in_direction(Direction::Up), Position::new(5, 4));
    }

    #[test]
    fn test_snake_from_config() {
        let snake = start_snake();
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), Position::new(6, 9));
        assert_eq!(snake.body[1], Position::new(5, 9));
        assert_eq!(snake.body[2], Position::new(4, 9));
        assert_eq!(snake.direction(), Direction::Right);
    }

    #[test]
    fn test_next_head_follows_direction() {
        let mut snake = start_snake();
        assert_eq!(snake.next_head(), Position::new(7, 9));

        snake.set_direction(Direction::Down);
        assert_eq!(snake.next_head(), Position::new(6, 10));
    }

    #[test]
    fn test_snake_advance() {
        let mut snake = start_snake();

        snake.advance();
        assert_eq!(
            snake.body,
            vec![Position::new(7, 9), Position::new(6, 9), Position::new(5, 9)]
        );
    }

    #[test]
    fn test_grow_adds_one_segment() {
        let mut snake = start_snake();

        snake.grow();
        snake.grow();
        assert!(snake.is_growing());

        snake.advance();
        assert_eq!(snake.len(), 4);
        assert!(!snake.is_growing());
        assert_eq!(*snake.body.last().unwrap(), Position::new(4, 9));

        snake.advance();
        assert_eq!(snake.len(), 4);
    }

    #[test]
    fn test_reverse_turn_ignored() {
        let mut snake = start_snake();

        for _ in 0..5 {
            assert!(!snake.set_direction(Direction::Left));
            assert_eq!(snake.direction(), Direction::Right);
        }

        assert!(snake.set_direction(Direction::Up));
        assert_eq!(snake.direction(), Direction::Up);
    }

    #[test]
    fn test_double_turn_within_tick_cannot_reverse() {
        let mut snake = start_snake();

        assert!(snake.set_direction(Direction::Up));
        // Still heading right until the next advance
        assert!(!snake.set_direction(Direction::Left));
        assert_eq!(snake.direction(), Direction::Up);

        snake.advance();
        assert!(snake.set_direction(Direction::Left));
    }

    #[test]
    fn test_reset_restores_spawn() {
        let mut snake = start_snake();
        snake.set_direction(Direction::Down);
        snake.grow();
        snake.advance();
        snake.advance();

        snake.reset();
        assert_eq!(snake, start_snake());
    }

    #[test]
    fn test_collision_detection() {
        let snake = start_snake();
        assert!(!snake.collides_with_body(Position::new(6, 9))); // head
        assert!(snake.collides_with_body(Position::new(5, 9))); // body
        assert!(!snake.collides_with_body(Position::new(10, 10))); // empty
        assert!(!snake.bites_itself());
    }

    #[test]
    fn test_default_status() {
        assert_eq!(Status::default(), Status::Running);
    }
}
