//! core/playback/mod.rs
//! Background-music playback core.
//!
//! One engine thread owns rodio; the GUI talks to it through a command
//! channel and polls a matching event channel. Playback failures are
//! events, never panics: the card keeps working with the music silent.

use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use thiserror::Error;

mod engine;
mod melody;

use engine::PlaybackEngine;

#[derive(Debug, Clone, Error)]
pub enum PlaybackError {
    #[error("audio output unavailable: {0}")]
    Device(String),
    #[error("could not open {path}: {reason}")]
    Open { path: String, reason: String },
    #[error("could not decode {path}: {reason}")]
    Decode { path: String, reason: String },
}

#[derive(Clone)]
pub struct PlaybackController {
    command_tx: Sender<PlayerCommand>,
}

impl PlaybackController {
    /// Best-effort send; if the engine died the command just vanishes.
    pub fn send(&self, cmd: PlayerCommand) {
        let _ = self.command_tx.send(cmd);
    }
}

#[derive(Debug)]
pub enum PlayerCommand {
    Play,
    Pause,
    SetMuted(bool),
}

#[derive(Debug, Clone)]
pub enum PlayerEvent {
    Started,
    Paused,
    Resumed,
    Error(PlaybackError),
}

/// Spawns the engine thread for the given looping track and returns:
/// - PlaybackController (store in GUI state)
/// - Receiver<PlayerEvent> (drain from a periodic subscription tick)
///
/// If the audio device cannot be opened, the thread reports one
/// `PlayerEvent::Error` and exits; commands sent afterwards are dropped.
pub fn start_playback(track: PathBuf) -> (PlaybackController, Receiver<PlayerEvent>) {
    let (command_tx, command_rx) = mpsc::channel::<PlayerCommand>();
    let (event_tx, event_rx) = mpsc::channel::<PlayerEvent>();

    thread::spawn(move || {
        let mut engine = match PlaybackEngine::new(track, event_tx.clone()) {
            Ok(engine) => engine,
            Err(err) => {
                let _ = event_tx.send(PlayerEvent::Error(err));
                return;
            }
        };

        engine.run(command_rx);
    });

    (PlaybackController { command_tx }, event_rx)
}
