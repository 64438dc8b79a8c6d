use anyhow::{Context, Result, bail, ensure};
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::state::PlayArea;

/// Largest grid the engine accepts along either axis
pub const MAX_CELLS_PER_SIDE: usize = 256;

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Edge length of one grid cell, in screen units
    pub segment_size: f32,
    /// Width of the virtual screen
    pub screen_width: f32,
    /// Height of the virtual screen
    pub screen_height: f32,
    /// Gap between the screen edge and the play area on every side
    pub margin: f32,
    /// Ticks between two movement steps
    pub move_period_ticks: u64,
    /// Fixed rate the engine is advanced at
    pub tick_rate_hz: u32,
    /// Volume of direction tones; food tones play slightly louder
    pub base_volume: f32,
    /// How long a key counts as held after its last press when the
    /// terminal does not report key releases
    pub key_hold_timeout_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            segment_size: 8.0,
            screen_width: 128.0,
            screen_height: 128.0,
            margin: 8.0,
            move_period_ticks: 16,
            tick_rate_hz: 60,
            base_volume: 0.05,
            key_hold_timeout_ms: 150,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with a custom screen size
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            screen_width: width,
            screen_height: height,
            ..Default::default()
        }
    }

    /// Same rules with a different cell size; the move period follows the
    /// cell size so the snake keeps its pace
    pub fn with_segment_size(mut self, segment_size: f32) -> Self {
        self.segment_size = segment_size;
        self.move_period_ticks = (segment_size * 2.0).max(1.0) as u64;
        self
    }

    /// Read a JSON config file; missing fields fall back to defaults
    pub fn from_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: GameConfig = serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Bounds the body moves within
    pub fn play_area(&self) -> PlayArea {
        PlayArea {
            top: self.margin,
            bottom: self.screen_height - self.margin,
            left: self.margin,
            right: self.screen_width - self.margin,
        }
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.segment_size.is_finite() && self.segment_size >= 1.0,
            "segment_size must be at least 1, got {}",
            self.segment_size
        );
        ensure!(
            self.segment_size.fract() == 0.0,
            "segment_size must be a whole number, got {}",
            self.segment_size
        );
        ensure!(self.move_period_ticks > 0, "move_period_ticks must be positive");
        ensure!(self.tick_rate_hz > 0, "tick_rate_hz must be positive");
        ensure!(
            (0.0..=1.0).contains(&self.base_volume),
            "base_volume must be within 0..=1, got {}",
            self.base_volume
        );

        for (name, value) in [
            ("screen_width", self.screen_width),
            ("screen_height", self.screen_height),
            ("margin", self.margin),
        ] {
            if value % self.segment_size != 0.0 {
                bail!(
                    "{name} ({value}) must be a multiple of segment_size ({})",
                    self.segment_size
                );
            }
        }

        let area = self.play_area();
        ensure!(
            area.width() >= self.segment_size && area.height() >= self.segment_size,
            "play area {}x{} is smaller than one cell",
            area.width(),
            area.height()
        );

        let (columns, rows) = area.cells(self.segment_size);
        ensure!(
            columns <= MAX_CELLS_PER_SIDE && rows <= MAX_CELLS_PER_SIDE,
            "play area of {columns}x{rows} cells exceeds {MAX_CELLS_PER_SIDE} cells per side"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.segment_size, 8.0);
        assert_eq!(config.move_period_ticks, 16);
        assert_eq!(config.tick_rate_hz, 60);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_play_area() {
        let area = GameConfig::default().play_area();
        assert_eq!(area.left, 8.0);
        assert_eq!(area.top, 8.0);
        assert_eq!(area.right, 120.0);
        assert_eq!(area.bottom, 120.0);
    }

    #[test]
    fn test_segment_size_sets_move_period() {
        let config = GameConfig::default().with_segment_size(4.0);
        assert_eq!(config.move_period_ticks, 8);
    }

    #[test]
    fn test_rejects_misaligned_screen() {
        let config = GameConfig::new(130.0, 128.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_tiny_play_area() {
        let config = GameConfig::new(16.0, 16.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_oversized_board() {
        assert!(GameConfig::new(262_152.0, 128.0).validate().is_err());

        // 256 cells of 8 plus two margins is the largest accepted width
        let widest = GameConfig::new(256.0 * 8.0 + 16.0, 128.0);
        assert!(widest.validate().is_ok());
        let too_wide = GameConfig::new(257.0 * 8.0 + 16.0, 128.0);
        assert!(too_wide.validate().is_err());
    }

    #[test]
    fn test_rejects_zero_move_period() {
        let config = GameConfig {
            move_period_ticks: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_partial_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("snake.json");
        std::fs::write(&path, r#"{ "screen_width": 256.0, "tick_rate_hz": 30 }"#).unwrap();

        let config = GameConfig::from_file(&path).unwrap();
        assert_eq!(config.screen_width, 256.0);
        assert_eq!(config.tick_rate_hz, 30);
        assert_eq!(config.screen_height, 128.0);
    }

    #[test]
    fn test_load_invalid_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("snake.json");
        std::fs::write(&path, r#"{ "segment_size": 0.0 }"#).unwrap();
        assert!(GameConfig::from_file(&path).is_err());

        assert!(GameConfig::from_file(&dir.path().join("missing.json")).is_err());
    }
}
