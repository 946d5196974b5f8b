//! gui/view/modal.rs
//! Secret message overlay. The outer mouse_area covers the whole
//! window and closes on press; the panel is wrapped in its own
//! `opaque` so clicks inside it never reach that area.

use iced::mouse::Interaction;
use iced::widget::{button, column, container, mouse_area, opaque, row, text};
use iced::{Alignment, Element, Length};

use super::super::state::Message;
use super::super::theme;
use crate::content;

pub(crate) fn secret_overlay() -> Element<'static, Message> {
    let close = button(text("✕").size(14))
        .padding([4, 8])
        .style(theme::ghost_button)
        .on_press(Message::CloseSecret);

    let header = row![
        text(content::SECRET_TITLE)
            .size(20)
            .color(theme::DEEP_RED)
            .width(Length::Fill),
        close,
    ]
    .align_y(Alignment::Center);

    let panel = container(
        column![
            header,
            text(content::SECRET_BODY)
                .size(15)
                .color(theme::INK_SOFT)
                .width(Length::Fill)
                .align_x(Alignment::Center),
            text(content::SECRET_FOOTNOTE)
                .size(12)
                .color(theme::TEXT_FAINT)
                .width(Length::Fill)
                .align_x(Alignment::Center),
        ]
        .spacing(18)
        .width(Length::Fixed(380.0)),
    )
    .padding(28)
    .style(theme::secret_panel);

    let backdrop = container(opaque(panel))
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .style(theme::modal_backdrop);

    opaque(
        mouse_area(backdrop)
            .interaction(Interaction::Idle)
            .on_press(Message::CloseSecret),
    )
}
