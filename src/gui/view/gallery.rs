//! gui/view/gallery.rs
//! The photo wall. Slots mirror `content::PHOTOS`; a slot that never
//! loaded keeps a framed placeholder so the wall stays balanced.

use iced::widget::{column, container, image, row, text};
use iced::{Alignment, ContentFit, Element, Length};

use super::super::state::{Keepsake, Message};
use super::super::theme;
use crate::content;

const PHOTO_W: f32 = 230.0;
const PHOTO_H: f32 = 180.0;

pub(crate) fn section(state: &Keepsake) -> Element<'_, Message> {
    let header = column![
        text(content::GALLERY_TITLE).size(26).color(theme::DEEP_RED),
        container(text(""))
            .width(Length::Fixed(56.0))
            .height(Length::Fixed(3.0))
            .style(theme::accent_bar),
    ]
    .spacing(10)
    .align_x(Alignment::Center);

    let mut cards = row![].spacing(24);
    for (photo, slot) in content::PHOTOS.iter().zip(&state.photos) {
        cards = cards.push(photo_card(slot.as_ref(), photo.caption));
    }

    column![header, cards]
        .spacing(28)
        .align_x(Alignment::Center)
        .into()
}

fn photo_card(handle: Option<&image::Handle>, caption: &'static str) -> Element<'static, Message> {
    let picture: Element<'static, Message> = match handle {
        Some(h) => container(
            image(h.clone())
                .width(Length::Fixed(PHOTO_W))
                .height(Length::Fixed(PHOTO_H))
                .content_fit(ContentFit::Cover),
        )
        .style(theme::photo_frame)
        .into(),
        None => placeholder(),
    };

    container(
        column![picture, text(caption).size(13).color(theme::INK_SOFT)]
            .spacing(12)
            .align_x(Alignment::Center),
    )
    .padding(14)
    .style(theme::photo_card)
    .into()
}

fn placeholder() -> Element<'static, Message> {
    container(
        column![
            text("♥").size(30).color(theme::ROSE_GOLD),
            text("photo").size(12).color(theme::TEXT_FAINT),
        ]
        .spacing(6)
        .align_x(Alignment::Center),
    )
    .center_x(Length::Fixed(PHOTO_W))
    .center_y(Length::Fixed(PHOTO_H))
    .style(theme::photo_frame)
    .into()
}
