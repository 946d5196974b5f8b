//! Keepsake
//!
//! A small desktop greeting card (built with the `iced` GUI library):
//! a countdown ticks toward a chosen moment, then the page flips into a
//! celebration with photos, a poem, a letter, background music and a
//! confetti send-off.
//!
//! # How Iced works (super simple mental model)
//! Think "video game loop", but message-based:
//!
//! - `Keepsake` = the *entire memory* of the app (all the state)
//! - `Message` = "something happened" (timer tick, button click, photo loaded)
//! - `update(state, message)` = handles that thing and updates state
//! - `view(state)` = draws UI based on the current state
//!
//! The app repeats this forever:
//! **Message happens -> update changes state -> view redraws**
//!
//! # Where things live
//! - `content` = the editing surface: the date, the copy, the photo paths
//! - `core` = countdown math, the reveal latch, the confetti simulation,
//!   and the audio engine (its own thread; the GUI only passes messages)
//! - `gui` = state, update handlers, subscriptions, theme, views
//!
//! # Concurrency model (aka "don't freeze the app")
//! - Photo bytes are read on a background thread and come back as
//!   `Message::PhotosLoaded(...)`.
//! - Audio runs on a dedicated engine thread; the GUI polls its events
//!   with `Message::PlaybackTick` while the engine is alive.

mod content;
mod core;
mod gui;

fn main() -> iced::Result {
    // Initialize tracing for logging
    tracing_subscriber::fmt::init();

    iced::application(gui::boot, gui::update, gui::view)
        .title(gui::title)
        .subscription(gui::subscription)
        .window_size(iced::Size::new(1000.0, 720.0))
        .antialiasing(true)
        .run()
}
