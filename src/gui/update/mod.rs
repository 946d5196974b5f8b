//! gui/update/mod.rs
//! Update logic (router).
//! Mutates state in response to `Message` events.

use iced::Task;

use super::state::{Keepsake, Message};

mod modal;
mod photos;
mod playback;
mod reveal;

pub(crate) use photos::load_photos;
pub(crate) use reveal::countdown_tick;

pub(crate) fn update(state: &mut Keepsake, message: Message) -> Task<Message> {
    match message {
        // Countdown
        Message::CountdownTick => reveal::countdown_tick(state),
        Message::SkipCountdown => reveal::skip(state),

        // Reveal animation
        Message::ConfettiTick => reveal::confetti_tick(state),

        // Music
        Message::TogglePlayback => playback::toggle(state),
        Message::ToggleMute => playback::toggle_mute(state),
        Message::PlaybackTick => playback::drain_events(state),

        // Gallery
        Message::PhotosLoaded(results) => photos::photos_loaded(state, results),

        // Secret message modal
        Message::OpenSecret => modal::open_secret(state),
        Message::CloseSecret => modal::close_secret(state),
    }
}
