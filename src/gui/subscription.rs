//! gui/subscription.rs
//! Recurring work, gated by state so each timer dies with its phase:
//! the 1 s countdown tick while waiting, per-frame confetti advances
//! while a burst is alive, and 200 ms playback-event polling once the
//! engine exists.

use std::time::Duration;

use iced::{Subscription, time, window};

use super::state::{Keepsake, Message};

pub(crate) fn subscription(state: &Keepsake) -> Subscription<Message> {
    let (needs_countdown, needs_frames, needs_poll) = decisions(state);

    let countdown = if needs_countdown {
        time::every(Duration::from_secs(1)).map(|_| Message::CountdownTick)
    } else {
        Subscription::none()
    };

    let confetti = if needs_frames {
        window::frames().map(|_| Message::ConfettiTick)
    } else {
        Subscription::none()
    };

    let playback = if needs_poll {
        time::every(Duration::from_millis(200)).map(|_| Message::PlaybackTick)
    } else {
        Subscription::none()
    };

    Subscription::batch([countdown, confetti, playback])
}

/// Which recurring subscriptions the current state needs:
/// (countdown tick, confetti frames, playback polling).
fn decisions(state: &Keepsake) -> (bool, bool, bool) {
    (
        state.phase.is_waiting(),
        state.confetti.is_some(),
        state.playback_events.is_some(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::confetti::ConfettiBurst;
    use crate::core::playback::PlayerEvent;
    use std::cell::RefCell;
    use std::sync::mpsc;
    use std::time::Instant;

    #[test]
    fn waiting_state_only_ticks_the_countdown() {
        let state = Keepsake::default();
        assert_eq!(decisions(&state), (true, false, false));
    }

    #[test]
    fn reveal_swaps_the_countdown_for_confetti_frames() {
        let mut state = Keepsake::default();
        state.phase.reveal();
        state.confetti = Some(ConfettiBurst::new(Instant::now()));

        let (needs_countdown, needs_frames, _) = decisions(&state);
        assert!(!needs_countdown);
        assert!(needs_frames);
    }

    #[test]
    fn frames_stop_once_the_burst_is_dropped() {
        let mut state = Keepsake::default();
        state.phase.reveal();
        state.confetti = None;

        let (needs_countdown, needs_frames, _) = decisions(&state);
        assert!(!needs_countdown);
        assert!(!needs_frames);
    }

    #[test]
    fn polling_follows_the_engine_handle() {
        let mut state = Keepsake::default();
        assert!(!decisions(&state).2);

        let (_tx, rx) = mpsc::channel::<PlayerEvent>();
        state.playback_events = Some(RefCell::new(rx));
        assert!(decisions(&state).2);
    }
}
