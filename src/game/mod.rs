//! Core game logic module for Snake
//!
//! This module contains all the game rules without any I/O or rendering
//! dependencies. The front end advances it once per tick and reads the
//! state back for drawing.

pub mod action;
pub mod config;
pub mod engine;
pub mod state;

// Re-export commonly used types
pub use action::{Axis, Direction, DirectionKey, KeyboardState};
pub use config::GameConfig;
pub use engine::{GameEngine, StepInfo, StepResult};
pub use state::{BodyPart, GameState, PlayArea, Player, Position};
