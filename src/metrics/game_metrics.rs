use std::time::{Duration, Instant};

/// Session stats shown in the header
///
/// The clock runs while a game is in progress and holds its value once the
/// game ends, until the next restart.
pub struct GameMetrics {
    started: Instant,
    finished_after: Option<Duration>,
    games_played: u32,
}

impl GameMetrics {
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
            finished_after: None,
            games_played: 0,
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.finished_after
            .unwrap_or_else(|| self.started.elapsed())
    }

    /// Games that ended in a collision this session
    pub fn games_played(&self) -> u32 {
        self.games_played
    }

    pub fn on_game_start(&mut self) {
        self.started = Instant::now();
        self.finished_after = None;
    }

    pub fn on_game_over(&mut self) {
        if self.finished_after.is_none() {
            self.finished_after = Some(self.started.elapsed());
            self.games_played += 1;
        }
    }

    pub fn format_time(&self) -> String {
        clock(self.elapsed())
    }
}

impl Default for GameMetrics {
    fn default() -> Self {
        Self::new()
    }
}

/// `mm:ss`, minutes keep counting past an hour
fn clock(elapsed: Duration) -> String {
    let secs = elapsed.as_secs();
    format!("{:02}:{:02}", secs / 60, secs % 60)
}
