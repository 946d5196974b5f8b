//! gui/update/modal.rs
//! Secret message modal flag. The interesting part (overlay clicks
//! close it, panel clicks don't) lives in the view layer.

use iced::Task;

use super::super::state::{Keepsake, Message};

pub(crate) fn open_secret(state: &mut Keepsake) -> Task<Message> {
    state.show_secret = true;
    Task::none()
}

pub(crate) fn close_secret(state: &mut Keepsake) -> Task<Message> {
    state.show_secret = false;
    Task::none()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_then_close() {
        let mut state = Keepsake::default();
        assert!(!state.show_secret);

        let _ = open_secret(&mut state);
        assert!(state.show_secret);

        let _ = close_secret(&mut state);
        assert!(!state.show_secret);
    }

    #[test]
    fn closing_an_already_closed_modal_is_harmless() {
        let mut state = Keepsake::default();

        let _ = close_secret(&mut state);

        assert!(!state.show_secret);
    }
}
