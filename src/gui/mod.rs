//! gui/mod.rs
//!
//! This folder contains ONLY frontend concerns:
//! - app state ('Keepsake')
//! - messages ('Message')
//! - update logic ('update()')
//! - view layout ('view()')
//! - subscriptions (countdown tick, confetti frames, playback polling)
//! - the palette ('theme')

pub(crate) mod state;
pub(crate) mod subscription;
pub(crate) mod theme;
pub(crate) mod update;
pub(crate) mod view;

use iced::Task;

// Re-export the entry points main.rs needs.
pub(crate) use state::{Keepsake, Message};
pub(crate) use subscription::subscription;
pub(crate) use update::update;
pub(crate) use view::view;

use crate::content;

/// Initial state + startup work.
///
/// The countdown is seeded synchronously so the very first frame shows
/// real numbers; a target that is already in the past reveals the card
/// before anything is drawn. Photos load off the UI thread.
pub(crate) fn boot() -> (Keepsake, Task<Message>) {
    let mut state = Keepsake::default();
    let seed = update::countdown_tick(&mut state);
    let photos = update::load_photos();

    (state, Task::batch([seed, photos]))
}

pub(crate) fn title(state: &Keepsake) -> String {
    let title = if state.phase.is_revealed() {
        content::WINDOW_TITLE_REVEALED
    } else {
        content::WINDOW_TITLE_WAITING
    };

    title.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Local;

    #[test]
    fn title_follows_the_phase() {
        let mut state = Keepsake::default();
        assert_eq!(title(&state), content::WINDOW_TITLE_WAITING);

        state.phase.reveal();
        assert_eq!(title(&state), content::WINDOW_TITLE_REVEALED);
    }

    #[test]
    fn boot_with_a_future_target_stays_waiting() {
        let (state, _task) = boot();
        assert!(state.phase.is_waiting());
        assert!(state.confetti.is_none());
        assert!(state.target > Local::now());
    }
}
