//! gui/view/music_bar.rs
//! Floating music pill, pinned to the bottom-right corner above the
//! celebration page. Emits only Messages; the engine lives in core.

use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, column, container, row, text};
use iced::{Alignment, Element, Length};

use super::super::state::{Keepsake, Message};
use super::super::theme;
use crate::content;

pub(crate) fn overlay(state: &Keepsake) -> Element<'_, Message> {
    let play_label = if state.is_playing { "Pause" } else { "Play" };
    let mute_label = if state.muted { "Unmute" } else { "Mute" };

    let play = button(text(play_label).size(13))
        .padding([10, 18])
        .style(theme::play_button)
        .on_press(Message::TogglePlayback);

    let labels = column![
        text(content::MUSIC_TITLE).size(13).color(theme::INK),
        text(content::MUSIC_SUBTITLE).size(11).color(theme::TEXT_FAINT),
    ]
    .spacing(2);

    let mute = button(text(mute_label).size(12))
        .padding([6, 10])
        .style(theme::ghost_button)
        .on_press(Message::ToggleMute);

    let pill = container(row![play, labels, mute].spacing(14).align_y(Alignment::Center))
        .padding([10, 16])
        .style(theme::music_pill);

    container(pill)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Right)
        .align_y(Vertical::Bottom)
        .padding(24)
        .into()
}
