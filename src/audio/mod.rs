//! Tone cues
//!
//! The engine only describes tones; playing them happens on a separate
//! tokio task so a tick never waits for a sound to finish.

pub mod queue;
pub mod tone;

pub use queue::{AudioQueue, BellSink, SilentSink, ToneSink, spawn_audio_worker};
pub use tone::{Note, Tone, sine_samples};
