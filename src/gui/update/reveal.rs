//! gui/update/reveal.rs
//! Countdown ticks, the skip shortcut, and the moment the card flips
//! from waiting to revealed. Completion always funnels through one
//! handler so the side effects (confetti, music) cannot run twice.

use std::time::Instant;

use chrono::{DateTime, Local};
use iced::Task;
use tracing::info;

use super::super::state::{Keepsake, Message};
use super::playback;
use crate::core::confetti::ConfettiBurst;
use crate::core::countdown::{self, TimeLeft};

/// One-second timer tick while the countdown is showing.
pub(crate) fn countdown_tick(state: &mut Keepsake) -> Task<Message> {
    tick_at(state, Local::now())
}

fn tick_at(state: &mut Keepsake, now: DateTime<Local>) -> Task<Message> {
    if state.phase.is_revealed() {
        return Task::none();
    }

    match countdown::remaining(state.target, now) {
        Some(time_left) => {
            state.time_left = time_left;
            Task::none()
        }
        None => complete(state),
    }
}

/// The "Early Access" button ends the wait the same way a naturally
/// expiring countdown does.
pub(crate) fn skip(state: &mut Keepsake) -> Task<Message> {
    complete(state)
}

fn complete(state: &mut Keepsake) -> Task<Message> {
    if !state.phase.reveal() {
        return Task::none();
    }

    state.time_left = TimeLeft::default();
    state.confetti = Some(ConfettiBurst::new(Instant::now()));
    info!("countdown complete, the card is revealed");

    playback::start_music(state)
}

/// Per-frame confetti update. Frames that arrive after the burst is
/// dropped land here harmlessly.
pub(crate) fn confetti_tick(state: &mut Keepsake) -> Task<Message> {
    let Some(burst) = state.confetti.as_mut() else {
        return Task::none();
    };

    let now = Instant::now();
    burst.advance(now);
    if burst.is_finished(now) {
        state.confetti = None;
    }

    Task::none()
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use chrono::TimeDelta;

    use super::*;
    use crate::core::reveal::Phase;

    #[test]
    fn ticks_update_the_display() {
        let mut state = Keepsake::default();
        let now = Local::now();
        state.target = now + TimeDelta::milliseconds(90_061_001);

        let _ = tick_at(&mut state, now);

        assert_eq!(
            state.time_left,
            TimeLeft {
                days: 1,
                hours: 1,
                minutes: 1,
                seconds: 1,
            }
        );
        assert_eq!(state.phase, Phase::Waiting);
        assert!(state.confetti.is_none());
    }

    #[test]
    fn past_target_completes_on_the_first_tick() {
        let mut state = Keepsake::default();
        let now = Local::now();
        state.target = now - TimeDelta::milliseconds(5);

        let _ = tick_at(&mut state, now);

        assert_eq!(state.phase, Phase::Revealed);
        assert_eq!(state.time_left, TimeLeft::default());
        assert!(state.confetti.is_some());
        assert!(state.is_playing);
    }

    #[test]
    fn skip_matches_natural_completion() {
        let mut skipped = Keepsake::default();
        skipped.target = Local::now() + TimeDelta::hours(6);
        let _ = skip(&mut skipped);

        let mut expired = Keepsake::default();
        let now = Local::now();
        expired.target = now - TimeDelta::seconds(1);
        let _ = tick_at(&mut expired, now);

        assert_eq!(skipped.phase, expired.phase);
        assert_eq!(skipped.is_playing, expired.is_playing);
        assert_eq!(skipped.confetti.is_some(), expired.confetti.is_some());
        assert_eq!(skipped.time_left, expired.time_left);
    }

    #[test]
    fn completion_side_effects_run_exactly_once() {
        let mut state = Keepsake::default();
        let now = Local::now();
        state.target = now - TimeDelta::seconds(1);

        let _ = skip(&mut state);
        assert_eq!(state.phase, Phase::Revealed);

        // Pretend the burst finished and the music was paused, then hit
        // the handler again from both entry points.
        state.confetti = None;
        state.is_playing = false;

        let _ = skip(&mut state);
        let _ = tick_at(&mut state, now);

        assert_eq!(state.phase, Phase::Revealed);
        assert!(state.confetti.is_none());
        assert!(!state.is_playing);
    }

    #[test]
    fn ticks_after_reveal_leave_the_display_alone() {
        let mut state = Keepsake::default();
        let now = Local::now();
        state.target = now + TimeDelta::hours(2);

        let _ = skip(&mut state);
        let _ = tick_at(&mut state, now);

        assert_eq!(state.time_left, TimeLeft::default());
    }

    #[test]
    fn stray_confetti_frames_are_no_ops() {
        let mut state = Keepsake::default();
        assert!(state.confetti.is_none());

        let _ = confetti_tick(&mut state);

        assert!(state.confetti.is_none());
    }

    #[test]
    fn confetti_is_dropped_once_it_finishes() {
        let mut state = Keepsake::default();

        // Age a burst far past its deadline offline, so the next frame
        // in the GUI loop sees it finished. Skipped on a platform whose
        // monotonic clock started less than a minute ago.
        let Some(t0) = Instant::now().checked_sub(Duration::from_secs(60)) else {
            return;
        };
        let mut burst = ConfettiBurst::new(t0);
        let mut t = t0;
        for _ in 0..400 {
            t += Duration::from_millis(50);
            burst.advance(t);
        }
        state.confetti = Some(burst);

        let _ = confetti_tick(&mut state);

        assert!(state.confetti.is_none());
    }
}
