//! core/mod.rs
//!
//! The card's logic, free of GUI concerns:
//! - Countdown decomposition (target - now -> days/hours/minutes/seconds)
//! - The one-way Waiting -> Revealed state machine
//! - The confetti burst model (pure data, wall-clock driven)
//! - The audio engine (rodio owner on its own thread)
//!
//! Nothing in here imports Iced; the GUI renders whatever these modules
//! hand back.

pub mod confetti;
pub mod countdown;
pub mod playback;
pub mod reveal;
