//! Core game logic module for Snake
//!
//! Everything in here is pure state manipulation with no I/O or
//! rendering dependencies; the collaborators in `input`, `render`,
//! `audio` and `modes` drive it.

pub mod config;
pub mod direction;
pub mod engine;
pub mod state;

// Re-export commonly used types
pub use config::GameConfig;
pub use direction::Direction;
pub use engine::{GameEngine, TickOutcome};
pub use state::{CollisionType, GameState, GameStatus, Position, RenderSnapshot, Snake};
