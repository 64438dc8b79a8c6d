use anyhow::{Context, Result};
use crossterm::{execute, style::Print};
use log::{debug, warn};
use std::io::stderr;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};
use tokio::task::JoinHandle;

use super::tone::Tone;

/// Something that can sound a tone
///
/// `play` must return promptly; the worker handles the tone's length.
pub trait ToneSink: Send + 'static {
    fn play(&mut self, tone: &Tone) -> Result<()>;
}

/// Rings the terminal bell for every audible tone
///
/// A terminal bell has a single fixed sound, so the note, volume and length
/// of a tone are lost here; only its slot in the queue survives. Rendering
/// the actual pitch is left to a device-backed sink fed from
/// [`sine_samples`](super::tone::sine_samples).
pub struct BellSink;

impl ToneSink for BellSink {
    fn play(&mut self, tone: &Tone) -> Result<()> {
        if tone.volume <= 0.0 {
            return Ok(());
        }
        let mut out = stderr();
        execute!(out, Print('\x07')).context("Failed to ring terminal bell")
    }
}

/// Swallows every tone
pub struct SilentSink;

impl ToneSink for SilentSink {
    fn play(&mut self, _tone: &Tone) -> Result<()> {
        Ok(())
    }
}

/// Sending half of the audio queue
///
/// Cloning is cheap; every clone feeds the same worker.
#[derive(Clone)]
pub struct AudioQueue {
    tx: UnboundedSender<Tone>,
}

impl AudioQueue {
    /// Queue a tone without waiting for it to play
    pub fn play(&self, tone: Tone) {
        if self.tx.send(tone).is_err() {
            warn!("Audio worker is gone, dropping {:?}", tone.note);
        }
    }

    pub fn play_all(&self, tones: impl IntoIterator<Item = Tone>) {
        for tone in tones {
            self.play(tone);
        }
    }
}

/// Start the audio worker on the current tokio runtime
///
/// The worker plays tones in order and waits out each tone's length and
/// pause before starting the next one. It exits when every `AudioQueue`
/// clone has been dropped.
pub fn spawn_audio_worker<S: ToneSink>(sink: S) -> (AudioQueue, JoinHandle<()>) {
    let (tx, rx) = unbounded_channel();
    let handle = tokio::spawn(run_worker(sink, rx));
    (AudioQueue { tx }, handle)
}

async fn run_worker<S: ToneSink>(mut sink: S, mut rx: UnboundedReceiver<Tone>) {
    while let Some(tone) = rx.recv().await {
        debug!(
            "Playing {:.1} Hz for {:?} at volume {:.3}",
            tone.frequency_hz(),
            tone.duration,
            tone.volume
        );
        if let Err(err) = sink.play(&tone) {
            warn!("Tone playback failed: {err:#}");
        }
        tokio::time::sleep(tone.slot()).await;
    }
    debug!("Audio worker stopped");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::Note;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;
    use tokio::time::Instant;

    #[derive(Clone, Default)]
    struct RecordingSink {
        played: Arc<Mutex<Vec<(Note, Instant)>>>,
    }

    impl ToneSink for RecordingSink {
        fn play(&mut self, tone: &Tone) -> Result<()> {
            self.played.lock().unwrap().push((tone.note, Instant::now()));
            Ok(())
        }
    }

    fn tone(note: Note) -> Tone {
        Tone::new(note, Duration::from_millis(80), 0.05).with_pause(Duration::from_millis(80))
    }

    #[test]
    fn test_bell_skips_muted_tone() {
        // Nothing is written for a silent tone, so this never touches the terminal
        let muted = Tone::new(Note::A4, Duration::from_millis(80), 0.0);
        assert!(BellSink.play(&muted).is_ok());
        assert_eq!(muted.slot(), Duration::from_millis(80));
    }

    #[tokio::test(start_paused = true)]
    async fn test_tones_play_in_order_with_spacing() {
        let sink = RecordingSink::default();
        let played = sink.played.clone();
        let (queue, handle) = spawn_audio_worker(sink);

        queue.play_all([tone(Note::C4), tone(Note::C5)]);
        drop(queue);
        handle.await.unwrap();

        let played = played.lock().unwrap();
        assert_eq!(played.len(), 2);
        assert_eq!(played[0].0, Note::C4);
        assert_eq!(played[1].0, Note::C5);
        assert!(played[1].1 - played[0].1 >= Duration::from_millis(160));
    }

    #[tokio::test(start_paused = true)]
    async fn test_play_does_not_block() {
        let (queue, handle) = spawn_audio_worker(SilentSink);
        let start = Instant::now();

        for _ in 0..100 {
            queue.play(tone(Note::A4));
        }

        assert_eq!(Instant::now() - start, Duration::ZERO);
        drop(queue);
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn test_send_after_worker_stopped() {
        let (queue, handle) = spawn_audio_worker(SilentSink);
        handle.abort();
        let _ = handle.await;

        // Logged and dropped, never panics
        queue.play(tone(Note::E4));
    }
}
