//! gui/view/celebration.rs
//! The revealed page: hero, gallery, poem, letter, footer, one long
//! scroll. The floating layers (music bar, confetti, secret modal) sit
//! above this in the view stack, not inside it.

use iced::widget::{Column, button, column, container, row, scrollable, text};
use iced::{Alignment, Element, Length};

use super::super::state::{Keepsake, Message};
use super::super::theme;
use super::gallery;
use crate::content;

pub(crate) fn page(state: &Keepsake) -> Element<'_, Message> {
    let body = column![
        hero(),
        gallery::section(state),
        poem(),
        letter(),
        text(content::FOOTER).size(13).color(theme::TEXT_FAINT),
    ]
    .spacing(56)
    .padding([64, 48])
    .align_x(Alignment::Center)
    .width(Length::Fill);

    container(scrollable(body).width(Length::Fill).height(Length::Fill))
        .style(theme::celebration_page)
        .into()
}

fn hero() -> Column<'static, Message> {
    let secret = button(text(content::SECRET_BUTTON_LABEL).size(14))
        .padding([10, 26])
        .style(theme::outline_button)
        .on_press(Message::OpenSecret);

    column![
        text(content::HEADLINE).size(64).color(theme::DEEP_RED),
        text(content::SUBTITLE)
            .size(17)
            .color(theme::INK_SOFT)
            .align_x(Alignment::Center),
        text("♥").size(30).color(theme::ROSE_GOLD),
        secret,
    ]
    .spacing(20)
    .align_x(Alignment::Center)
}

fn poem() -> Element<'static, Message> {
    let mut verses = column![text(content::POEM_TITLE).size(26).color(theme::DEEP_RED)]
        .spacing(24)
        .align_x(Alignment::Center);

    for stanza in content::POEM_STANZAS {
        verses = verses.push(
            text(*stanza)
                .size(15)
                .color(theme::INK_SOFT)
                .align_x(Alignment::Center),
        );
    }

    let signoff = row![
        accent_bar(),
        text(content::POEM_SIGNOFF).size(14).color(theme::ROSE_GOLD),
        accent_bar(),
    ]
    .spacing(14)
    .align_y(Alignment::Center);

    container(verses.push(signoff))
        .padding([44, 64])
        .style(theme::poem_card)
        .into()
}

/// Short rose-gold stroke used to flank the poem signoff.
fn accent_bar() -> Element<'static, Message> {
    container(text(""))
        .width(Length::Fixed(40.0))
        .height(Length::Fixed(2.0))
        .style(theme::accent_bar)
        .into()
}

fn letter() -> Element<'static, Message> {
    let page = container(text(content::LETTER_BODY).size(15).color(theme::INK))
        .padding(32)
        .max_width(620)
        .style(theme::letter_card);

    column![
        text(content::LETTER_TITLE).size(26).color(theme::DEEP_RED),
        page,
    ]
    .spacing(24)
    .align_x(Alignment::Center)
    .into()
}
