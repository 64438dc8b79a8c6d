use std::collections::HashMap;
use std::time::{Duration, Instant};

use crossterm::event::KeyEventKind;

use crate::game::{DirectionKey, KeyboardState};

/// Tracks which direction keys are currently held
///
/// Terminals with the kitty keyboard protocol report releases and the keys
/// stay held until then. Others only send presses and auto-repeats, so a
/// key counts as released once `hold_timeout` passes without another event.
#[derive(Debug)]
pub struct HeldKeys {
    last_seen: HashMap<DirectionKey, Instant>,
    hold_timeout: Duration,
    reports_release: bool,
}

impl HeldKeys {
    pub fn new(hold_timeout: Duration) -> Self {
        Self {
            last_seen: HashMap::new(),
            hold_timeout,
            reports_release: false,
        }
    }

    /// Trust release events instead of the timeout
    pub fn trust_release_events(&mut self) {
        self.reports_release = true;
    }

    pub fn record(&mut self, key: DirectionKey, kind: KeyEventKind, now: Instant) {
        match kind {
            KeyEventKind::Press | KeyEventKind::Repeat => {
                self.last_seen.insert(key, now);
            }
            KeyEventKind::Release => {
                self.reports_release = true;
                self.last_seen.remove(&key);
            }
        }
    }

    /// Forget keys whose hold has timed out
    pub fn expire(&mut self, now: Instant) {
        if self.reports_release {
            return;
        }
        let timeout = self.hold_timeout;
        self.last_seen
            .retain(|_, seen| now.saturating_duration_since(*seen) < timeout);
    }

    pub fn clear(&mut self) {
        self.last_seen.clear();
    }
}

impl KeyboardState for HeldKeys {
    fn is_held(&self, key: DirectionKey) -> bool {
        self.last_seen.contains_key(&key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TIMEOUT: Duration = Duration::from_millis(150);

    #[test]
    fn test_press_then_timeout() {
        let start = Instant::now();
        let mut keys = HeldKeys::new(TIMEOUT);

        keys.record(DirectionKey::Left, KeyEventKind::Press, start);
        keys.expire(start + Duration::from_millis(100));
        assert!(keys.is_held(DirectionKey::Left));
        assert!(!keys.is_held(DirectionKey::Right));

        keys.expire(start + Duration::from_millis(200));
        assert!(!keys.any_held());
    }

    #[test]
    fn test_repeat_extends_hold() {
        let start = Instant::now();
        let mut keys = HeldKeys::new(TIMEOUT);

        keys.record(DirectionKey::Up, KeyEventKind::Press, start);
        keys.record(
            DirectionKey::Up,
            KeyEventKind::Repeat,
            start + Duration::from_millis(120),
        );
        keys.expire(start + Duration::from_millis(200));
        assert!(keys.is_held(DirectionKey::Up));
    }

    #[test]
    fn test_release_events_disable_timeout() {
        let start = Instant::now();
        let mut keys = HeldKeys::new(TIMEOUT);

        keys.record(DirectionKey::Down, KeyEventKind::Press, start);
        keys.record(DirectionKey::Down, KeyEventKind::Release, start);
        assert!(!keys.is_held(DirectionKey::Down));

        keys.record(DirectionKey::Right, KeyEventKind::Press, start);
        keys.expire(start + Duration::from_secs(5));
        assert!(keys.is_held(DirectionKey::Right));
    }

    #[test]
    fn test_clear() {
        let mut keys = HeldKeys::new(TIMEOUT);
        keys.trust_release_events();
        keys.record(DirectionKey::Left, KeyEventKind::Press, Instant::now());
        keys.clear();
        assert!(!keys.any_held());
    }
}
