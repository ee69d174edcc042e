use serde::{Deserialize, Serialize};

/// Configuration for the game
///
/// The defaults reproduce the reference behavior: a 20x20 grid, a
/// 3-segment snake starting at cell (3,3) heading right, and one game
/// update every 250ms. None of these are exposed on the CLI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Side length of the square game grid, in cells
    pub grid_size: usize,
    /// Initial length of the snake
    pub initial_snake_length: usize,
    /// Grid cell where the snake's head starts
    pub start_x: i32,
    pub start_y: i32,
    /// Milliseconds between game updates
    pub tick_interval_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: 20,
            initial_snake_length: 3,
            start_x: 3,
            start_y: 3,
            tick_interval_ms: 250,
        }
    }
}

impl GameConfig {
    /// Upper bound on the snake's length: one segment per grid cell
    pub fn max_snake_length(&self) -> usize {
        self.grid_size * self.grid_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.grid_size, 20);
        assert_eq!(config.initial_snake_length, 3);
        assert_eq!(config.tick_interval_ms, 250);
    }

    #[test]
    fn test_max_snake_length() {
        let config = GameConfig::default();
        assert_eq!(config.max_snake_length(), 400);
    }
}
