//! Retro Snake with Walls - a single-screen terminal snake game
//!
//! This library provides:
//! - Core game logic (game module): grid, snake, food and the tick engine
//! - Keyboard mapping (input module)
//! - TUI rendering (render module)
//! - The interactive frame driver (modes module)

pub mod game;
pub mod input;
pub mod modes;
pub mod render;
