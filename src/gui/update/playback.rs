//! gui/update/playback.rs
//! GUI-playback engine bridge.
//!
//! - The GUI never touches rodio directly; the engine owns the device.
//! - The engine thread is spawned lazily, the first time music is
//!   actually wanted, and polled via PlaybackTick afterwards.
//! - `is_playing` flips optimistically; engine events confirm or
//!   revert it.

use std::cell::RefCell;
use std::path::PathBuf;

use iced::Task;
use tracing::warn;

use super::super::state::{Keepsake, Message};
use crate::content;
use crate::core::playback::{PlayerCommand, PlayerEvent, start_playback};

fn ensure_engine(state: &mut Keepsake) {
    if state.playback.is_some() && state.playback_events.is_some() {
        return;
    }

    let (controller, events) = start_playback(PathBuf::from(content::MUSIC_PATH));

    // The engine starts unmuted; catch it up with the UI flag.
    if state.muted {
        controller.send(PlayerCommand::SetMuted(true));
    }

    state.playback = Some(controller);
    state.playback_events = Some(RefCell::new(events));
}

/// Best-effort start, shared by the music bar and the reveal autoplay.
pub(crate) fn start_music(state: &mut Keepsake) -> Task<Message> {
    ensure_engine(state);

    if let Some(controller) = &state.playback {
        controller.send(PlayerCommand::Play);
    }
    state.is_playing = true;

    Task::none()
}

pub(crate) fn toggle(state: &mut Keepsake) -> Task<Message> {
    if state.is_playing {
        pause(state)
    } else {
        start_music(state)
    }
}

fn pause(state: &mut Keepsake) -> Task<Message> {
    if let Some(controller) = &state.playback {
        controller.send(PlayerCommand::Pause);
    }
    state.is_playing = false;

    Task::none()
}

/// Mute rides on top of play/pause and never disturbs it.
pub(crate) fn toggle_mute(state: &mut Keepsake) -> Task<Message> {
    state.muted = !state.muted;

    if let Some(controller) = &state.playback {
        controller.send(PlayerCommand::SetMuted(state.muted));
    }

    Task::none()
}

/// Polled while the engine is alive; applies everything it has sent
/// since the last tick.
pub(crate) fn drain_events(state: &mut Keepsake) -> Task<Message> {
    let Some(rx_cell) = state.playback_events.as_ref() else {
        return Task::none();
    };

    let mut drained: Vec<PlayerEvent> = Vec::new();
    {
        // Receiver::try_recv only needs &self, so borrow() is enough.
        let rx = rx_cell.borrow();
        while let Ok(ev) = rx.try_recv() {
            drained.push(ev);
        }
    }

    for ev in drained {
        apply_event(state, ev);
    }

    Task::none()
}

fn apply_event(state: &mut Keepsake, event: PlayerEvent) {
    match event {
        PlayerEvent::Started | PlayerEvent::Resumed => state.is_playing = true,
        PlayerEvent::Paused => state.is_playing = false,
        PlayerEvent::Error(err) => {
            // The card never surfaces audio problems; it just goes quiet.
            warn!("music stays off: {err}");
            state.is_playing = false;
        }
    }
}
