use std::f32::consts::TAU;
use std::time::Duration;

use crate::game::Direction;

/// Pitches the game uses for its cues
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Note {
    C4,
    E4,
    FSharp4,
    G4,
    A4,
    C5,
}

impl Note {
    pub fn frequency_hz(&self) -> f32 {
        match self {
            Note::C4 => 261.6256,
            Note::E4 => 329.6276,
            Note::FSharp4 => 369.9944,
            Note::G4 => 391.9954,
            Note::A4 => 440.0,
            Note::C5 => 523.2511,
        }
    }

    /// Each turn direction has its own pitch
    pub fn for_direction(direction: Direction) -> Note {
        match direction {
            Direction::West => Note::A4,
            Direction::South => Note::G4,
            Direction::East => Note::FSharp4,
            Direction::North => Note::E4,
        }
    }
}

/// A sine tone request
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    pub note: Note,
    pub duration: Duration,
    /// Linear volume, 0.0 to 1.0
    pub volume: f32,
    /// Silence kept after the tone before the next one starts
    pub pause_after: Duration,
}

impl Tone {
    pub fn new(note: Note, duration: Duration, volume: f32) -> Self {
        Self {
            note,
            duration,
            volume,
            pause_after: Duration::ZERO,
        }
    }

    pub fn with_pause(mut self, pause: Duration) -> Self {
        self.pause_after = pause;
        self
    }

    pub fn frequency_hz(&self) -> f32 {
        self.note.frequency_hz()
    }

    /// Time the tone occupies the audio queue, pause included
    pub fn slot(&self) -> Duration {
        self.duration + self.pause_after
    }
}

/// Render a tone as mono f32 PCM at the given sample rate
pub fn sine_samples(tone: &Tone, sample_rate: u32) -> Vec<f32> {
    let count = (tone.duration.as_secs_f32() * sample_rate as f32) as usize;
    let amplitude = tone.volume.clamp(0.0, 1.0);
    let frequency = tone.frequency_hz();

    (0..count)
        .map(|n| {
            let t = n as f32 / sample_rate as f32;
            amplitude * (TAU * frequency * t).sin()
        })
        .collect()
}
