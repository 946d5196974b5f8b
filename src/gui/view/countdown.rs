//! gui/view/countdown.rs
//! The waiting page: a centered headline over four unit tiles, with
//! the early-access escape hatch underneath.

use iced::widget::{button, column, container, row, text};
use iced::{Alignment, Color, Element, Length};

use super::super::state::{Keepsake, Message};
use super::super::theme;
use crate::content;

pub(crate) fn page(state: &Keepsake) -> Element<'_, Message> {
    let heading = column![
        text("♥").size(44).color(theme::DEEP_RED),
        text(content::WAITING_TITLE).size(34),
    ]
    .spacing(12)
    .align_x(Alignment::Center);

    let cards = row![
        time_card(state.time_left.days, "Days"),
        time_card(state.time_left.hours, "Hours"),
        time_card(state.time_left.minutes, "Minutes"),
        time_card(state.time_left.seconds, "Seconds"),
    ]
    .spacing(16);

    let skip = column![
        button(text(content::SKIP_LABEL).size(15))
            .padding([12, 28])
            .style(theme::skip_button)
            .on_press(Message::SkipCountdown),
        text(content::SKIP_HINT)
            .size(13)
            .color(theme::alpha(Color::WHITE, 0.8)),
    ]
    .spacing(10)
    .align_x(Alignment::Center);

    let body = column![heading, cards, skip]
        .spacing(36)
        .align_x(Alignment::Center);

    container(body)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .style(theme::waiting_page)
        .into()
}

fn time_card<'a>(value: i64, label: &'a str) -> Element<'a, Message> {
    let digits = text(format!("{value:02}")).size(40).color(theme::DEEP_RED);
    let unit = text(label).size(12).color(theme::ROSE_GOLD);

    container(column![digits, unit].spacing(4).align_x(Alignment::Center))
        .padding([18, 8])
        .style(theme::time_card)
        .center_x(Length::Fixed(110.0))
        .into()
}
