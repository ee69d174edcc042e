use super::{
    config::GameConfig,
    direction::Direction,
    state::{CollisionType, GameState, GameStatus, Position, Snake},
};
use rand::Rng;

/// What happened during one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickOutcome {
    /// Whether the snake ate food this tick
    pub ate_food: bool,
    /// Type of collision if one ended the game this tick
    pub collision: Option<CollisionType>,
}

/// The game engine that handles all game logic
pub struct GameEngine {
    config: GameConfig,
    rng: rand::rngs::ThreadRng,
}

impl GameEngine {
    /// Create a new game engine with the given configuration
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            rng: rand::thread_rng(),
        }
    }

    /// Reset the game to initial state
    pub fn reset(&mut self) -> GameState {
        let snake = Snake::new(
            Position::new(self.config.start_x, self.config.start_y),
            Direction::Right,
            self.config.initial_snake_length,
        );

        let food = self.spawn_food();

        GameState::new(snake, food, self.config.grid_size)
    }

    /// Advance the game by one tick.
    ///
    /// Food and collision checks run on the head position *before* the
    /// move, against the body as it stood last tick. The move then runs
    /// unconditionally, even on the tick that ends the game. Checks are
    /// therefore one tick behind the visual head; this ordering matches
    /// the reference behavior and the tests depend on it.
    pub fn tick(&mut self, state: &mut GameState) -> TickOutcome {
        if state.status == GameStatus::Over {
            return TickOutcome::default();
        }

        let head = state.snake.head();

        // Food check on the pre-move head
        let ate_food = head == state.food;
        let grow = ate_food && state.snake.len() < self.config.max_snake_length();

        if ate_food {
            state.score += 1;
            state.food = self.spawn_food();
        }

        // Collision check on the pre-move head against last tick's body
        let collision = if !state.is_in_bounds(head) {
            Some(CollisionType::Wall)
        } else if state.snake.collides_with_body(head) {
            Some(CollisionType::SelfCollision)
        } else {
            None
        };

        if collision.is_some() {
            state.status = GameStatus::Over;
        }

        // The move still happens on the tick the game ends
        state.snake.advance(grow);
        state.ticks += 1;

        TickOutcome { ate_food, collision }
    }

    /// Spawn food at a uniformly random grid cell.
    ///
    /// The cell may land on the snake's body; the reference behavior
    /// does not guard against that and neither do we.
    fn spawn_food(&mut self) -> Position {
        let x = self.rng.gen_range(0..self.config.grid_size) as i32;
        let y = self.rng.gen_range(0..self.config.grid_size) as i32;
        Position::new(x, y)
    }
}
