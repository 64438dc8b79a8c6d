use anyhow::Result;
use clap::Parser;
use log::{LevelFilter, info};
use std::path::PathBuf;
use tone_snake::audio::{BellSink, SilentSink, spawn_audio_worker};
use tone_snake::game::{GameConfig, GameEngine};
use tone_snake::logging::init_file_logger;
use tone_snake::modes::PlayMode;

#[derive(Parser)]
#[command(name = "tone_snake")]
#[command(version, about = "Snake in the terminal, with a tone for every move")]
struct Cli {
    /// JSON config file; flags below override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Engine ticks per second
    #[arg(long)]
    tick_rate: Option<u32>,

    /// Grid cell size in screen units (also sets the move period)
    #[arg(long)]
    segment_size: Option<f32>,

    /// Screen width in screen units
    #[arg(long)]
    width: Option<f32>,

    /// Screen height in screen units
    #[arg(long)]
    height: Option<f32>,

    /// Seed for food placement
    #[arg(long)]
    seed: Option<u64>,

    /// Do not play tones
    #[arg(long)]
    mute: bool,

    /// Where to write the log
    #[arg(long, default_value = "tone_snake.log")]
    log_file: PathBuf,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: LevelFilter,
}

impl Cli {
    fn game_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::from_file(path)?,
            None => GameConfig::default(),
        };

        if let Some(size) = self.segment_size {
            config = config.with_segment_size(size);
        }
        if let Some(rate) = self.tick_rate {
            config.tick_rate_hz = rate;
        }
        if let Some(width) = self.width {
            config.screen_width = width;
        }
        if let Some(height) = self.height {
            config.screen_height = height;
        }

        config.validate()?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_file_logger(&cli.log_file, cli.log_level)?;
    let config = cli.game_config()?;
    info!("Starting with {config:?}");

    let engine = match cli.seed {
        Some(seed) => GameEngine::with_seed(config, seed)?,
        None => GameEngine::new(config)?,
    };

    let (audio, audio_worker) = if cli.mute {
        spawn_audio_worker(SilentSink)
    } else {
        spawn_audio_worker(BellSink)
    };

    let mut play_mode = PlayMode::new(engine, audio);
    let result = play_mode.run().await;

    // Dropping the mode closes the queue; pending tones are discarded
    drop(play_mode);
    audio_worker.abort();

    result
}
