//! Grid Snake - a fixed-grid snake game for the terminal
//!
//! This library provides:
//! - Core game logic, pure and I/O-free (game module)
//! - Keyboard mapping (input module)
//! - TUI rendering (render module)
//! - Fire-and-forget sound effects (audio module)
//! - Session metrics (metrics module)
//! - The interactive game loop (modes module)

pub mod audio;
pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
