//! core/playback/engine.rs
//! Playback engine (rodio owner).
//!
//! Owns:
//! - OutputStream (must stay alive)
//! - Sink (one looping track, built lazily on the first Play)
//! - the command loop
//!
//! Emits PlayerEvent back via a channel. No Iced imports.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{Receiver, Sender};

use rodio::{Decoder, OutputStream, OutputStreamBuilder, Sink, Source};
use tracing::{info, warn};

use super::melody;
use super::{PlaybackError, PlayerCommand, PlayerEvent};

/// Sink volume while unmuted. The card has no volume slider (the system
/// mixer covers that); mute snaps between this and zero.
const BASE_VOLUME: f32 = 1.0;

pub struct PlaybackEngine {
    // Keep this alive for the lifetime of the engine!
    stream: OutputStream,

    sink: Option<Sink>,

    track: PathBuf,
    muted: bool,

    event_tx: Sender<PlayerEvent>,
}

impl PlaybackEngine {
    pub fn new(track: PathBuf, event_tx: Sender<PlayerEvent>) -> Result<Self, PlaybackError> {
        // rodio 0.21.x: build/open the default output stream via OutputStreamBuilder
        let stream = OutputStreamBuilder::open_default_stream()
            .map_err(|e| PlaybackError::Device(e.to_string()))?;

        Ok(Self {
            stream,
            sink: None,
            track,
            muted: false,
            event_tx,
        })
    }

    pub fn run(&mut self, command_rx: Receiver<PlayerCommand>) {
        // A closed command channel (GUI state dropped) is the shutdown signal.
        while let Ok(cmd) = command_rx.recv() {
            self.handle_command(cmd);
        }

        if let Some(sink) = self.sink.take() {
            sink.stop();
        }
    }

    fn handle_command(&mut self, cmd: PlayerCommand) {
        match cmd {
            PlayerCommand::Play => self.play(),
            PlayerCommand::Pause => {
                if let Some(sink) = &self.sink {
                    sink.pause();
                    let _ = self.event_tx.send(PlayerEvent::Paused);
                }
            }
            PlayerCommand::SetMuted(muted) => {
                self.muted = muted;
                if let Some(sink) = &self.sink {
                    sink.set_volume(self.effective_volume());
                }
            }
        }
    }

    /// The first Play builds the sink and queues the looping track; every
    /// later Play just resumes it. An unreadable track is downgraded to the
    /// built-in melody so the play/pause toggle stays meaningful.
    fn play(&mut self) {
        if let Some(sink) = &self.sink {
            sink.play();
            let _ = self.event_tx.send(PlayerEvent::Resumed);
            return;
        }

        // rodio 0.21.x: Sink is created from the stream's mixer
        let sink = Sink::connect_new(self.stream.mixer());

        match open_track(&self.track) {
            Ok(decoder) => {
                info!("looping {}", self.track.display());
                sink.append(decoder.repeat_infinite());
            }
            Err(err) => {
                warn!("{err}; falling back to the built-in melody");
                sink.append(melody::music_box().repeat_infinite());
            }
        }

        sink.set_volume(self.effective_volume());
        sink.play();
        self.sink = Some(sink);

        let _ = self.event_tx.send(PlayerEvent::Started);
    }

    fn effective_volume(&self) -> f32 {
        if self.muted { 0.0 } else { BASE_VOLUME }
    }
}

fn open_track(path: &Path) -> Result<Decoder<BufReader<File>>, PlaybackError> {
    let file = File::open(path).map_err(|e| PlaybackError::Open {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    Decoder::new(BufReader::new(file)).map_err(|e| PlaybackError::Decode {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}
