use anyhow::{Context, Result};
use crossterm::{
    event::{
        DisableFocusChange, EnableFocusChange, Event, EventStream, KeyEventKind,
        KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    execute,
    terminal::{
        EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
        supports_keyboard_enhancement,
    },
};
use futures::StreamExt;
use log::{debug, info, warn};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use std::time::{Duration, Instant};
use tokio::time::{MissedTickBehavior, interval};

use crate::audio::AudioQueue;
use crate::game::{GameEngine, GameState};
use crate::input::{HeldKeys, InputHandler, KeyAction};
use crate::metrics::GameMetrics;
use crate::render::Renderer;

/// Render at 30 FPS (33ms per frame)
const RENDER_INTERVAL: Duration = Duration::from_millis(33);

/// Interactive game in the terminal
pub struct PlayMode {
    engine: GameEngine,
    state: GameState,
    metrics: GameMetrics,
    renderer: Renderer,
    input_handler: InputHandler,
    held_keys: HeldKeys,
    audio: AudioQueue,
    should_quit: bool,
}

impl PlayMode {
    pub fn new(mut engine: GameEngine, audio: AudioQueue) -> Self {
        let config = engine.config().clone();
        let state = engine.reset();

        Self {
            engine,
            state,
            metrics: GameMetrics::new(),
            renderer: Renderer::new(config.segment_size),
            input_handler: InputHandler::new(),
            held_keys: HeldKeys::new(Duration::from_millis(config.key_hold_timeout_ms)),
            audio,
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        execute!(stderr, EnableFocusChange).context("Failed to enable focus events")?;

        let enhanced = supports_keyboard_enhancement().unwrap_or(false);
        if enhanced {
            execute!(
                stderr,
                PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
            )
            .context("Failed to enable key release events")?;
            self.held_keys.trust_release_events();
        }
        info!("Terminal ready, key release events: {enhanced}");

        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal, enhanced)?;

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        let tick_rate = self.engine.config().tick_rate_hz;
        let mut tick_timer = interval(Duration::from_secs(1) / tick_rate);
        tick_timer.set_missed_tick_behavior(MissedTickBehavior::Delay);

        let mut render_timer = interval(RENDER_INTERVAL);
        render_timer.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(event)) => self.handle_event(event),
                        Some(Err(err)) => warn!("Terminal event error: {err}"),
                        None => self.should_quit = true,
                    }
                }

                // Game logic tick
                _ = tick_timer.tick() => {
                    self.update_game();
                }

                // Render frame
                _ = render_timer.tick() => {
                    terminal.draw(|frame| {
                        self.renderer.render(frame, &self.state, &self.metrics);
                    }).context("Failed to draw frame")?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        info!("Quitting after {} ticks, score {}", self.state.ticks, self.state.score);
        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        let key = match event {
            Event::Key(key) => key,
            // Releases that happen while unfocused never reach us
            Event::FocusLost => {
                debug!("Focus lost, releasing held keys");
                self.held_keys.clear();
                return;
            }
            _ => return,
        };

        match self.input_handler.handle_key_event(key) {
            KeyAction::Steer(direction_key) => {
                self.held_keys.record(direction_key, key.kind, Instant::now());
            }
            // Controls fire once, on press
            _ if key.kind != KeyEventKind::Press => {}
            KeyAction::Restart => self.reset_game(),
            KeyAction::Quit => self.should_quit = true,
            KeyAction::None => {}
        }
    }

    fn update_game(&mut self) {
        self.held_keys.expire(Instant::now());

        let result = self.engine.advance(&mut self.state, &self.held_keys);
        self.audio.play_all(result.tones);

        if result.info.collided {
            self.metrics.on_game_over();
        }
    }

    fn reset_game(&mut self) {
        debug!("Restarting game");
        self.state = self.engine.reset();
        self.held_keys.clear();
        self.metrics.on_game_start();
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
        enhanced: bool,
    ) -> Result<()> {
        if enhanced {
            execute!(terminal.backend_mut(), PopKeyboardEnhancementFlags)
                .context("Failed to restore keyboard mode")?;
        }
        execute!(terminal.backend_mut(), DisableFocusChange)
            .context("Failed to disable focus events")?;
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}
