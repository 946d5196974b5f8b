//! GUI state + messages.
//! Pure data definitions used by the update router and the view builders.

use std::cell::RefCell;
use std::sync::mpsc::Receiver;

use chrono::{DateTime, Local};
use iced::widget::image;

use crate::content;
use crate::core::confetti::ConfettiBurst;
use crate::core::countdown::TimeLeft;
use crate::core::playback::{PlaybackController, PlayerEvent};
use crate::core::reveal::Phase;

/// App state
pub(crate) struct Keepsake {
    pub phase: Phase,

    // Countdown
    pub target: DateTime<Local>,
    pub time_left: TimeLeft,

    // Music
    pub is_playing: bool,
    pub muted: bool,

    // Overlays
    pub show_secret: bool,
    pub confetti: Option<ConfettiBurst>,

    // Gallery: one slot per content::PHOTOS entry, None = placeholder card
    pub photos: Vec<Option<image::Handle>>,

    // Engine handles, None until the first Play
    pub playback: Option<PlaybackController>,
    pub playback_events: Option<RefCell<Receiver<PlayerEvent>>>,
}

impl Default for Keepsake {
    fn default() -> Self {
        Self {
            phase: Phase::default(),

            target: content::target_instant(Local::now()),
            time_left: TimeLeft::default(),

            is_playing: false,
            muted: false,

            show_secret: false,
            confetti: None,

            photos: vec![None; content::PHOTOS.len()],

            playback: None,
            playback_events: None,
        }
    }
}

/// Message = “something happened”.
#[derive(Debug, Clone)]
pub(crate) enum Message {
    // Countdown
    CountdownTick,
    SkipCountdown,

    // Reveal animation
    ConfettiTick,

    // Music
    TogglePlayback,
    ToggleMute,
    PlaybackTick,

    // Gallery
    PhotosLoaded(Vec<Result<image::Handle, String>>),

    // Secret message modal
    OpenSecret,
    CloseSecret,
}
