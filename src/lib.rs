//! Tone Snake - a snake game with tone cues, played in the terminal
//!
//! This library provides:
//! - Core game logic, driven one tick at a time (game module)
//! - Fire-and-forget tone playback (audio module)
//! - Held-key tracking and key mapping (input module)
//! - TUI rendering (render module)
//! - The interactive play loop (modes module)

pub mod audio;
pub mod game;
pub mod input;
pub mod logging;
pub mod metrics;
pub mod modes;
pub mod render;
