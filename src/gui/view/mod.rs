//! GUI renderer (reads state, produces widgets; no mutation).
//!
//! The page for the current phase goes at the bottom of a stack;
//! the floating layers (music bar, confetti, secret modal) go on top
//! of it in that order, so the modal always wins.

mod celebration;
mod confetti;
mod countdown;
mod gallery;
mod modal;
mod music_bar;

use iced::Element;
use iced::widget::stack;

use super::state::{Keepsake, Message};
use crate::core::reveal::Phase;

pub(crate) fn view(state: &Keepsake) -> Element<'_, Message> {
    let page = match state.phase {
        Phase::Waiting => countdown::page(state),
        Phase::Revealed => celebration::page(state),
    };

    let mut layers = stack![page];

    if state.phase.is_revealed() {
        layers = layers.push(music_bar::overlay(state));
    }
    if let Some(burst) = &state.confetti {
        layers = layers.push(confetti::layer(burst));
    }
    if state.show_secret {
        layers = layers.push(modal::secret_overlay());
    }

    layers.into()
}
