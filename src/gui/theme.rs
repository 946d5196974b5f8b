//! gui/theme.rs
//! Palette + widget styles: rose gold and blush stationery tones.
//! All colors live here; view modules never hardcode one.

use iced::color;
use iced::gradient::Linear;
use iced::widget::{button, container};
use iced::{Background, Border, Color, Gradient, Shadow, Theme, Vector};

// Palette

pub(crate) const SOFT_PINK: Color = color!(0xffd1dc);
pub(crate) const PETAL: Color = color!(0xfbcfe8);
pub(crate) const ROSE_GOLD: Color = color!(0xb76e79);
pub(crate) const DEEP_RED: Color = color!(0x800020);
pub(crate) const DEEP_RED_PRESSED: Color = color!(0x60081c);
pub(crate) const BLUSH: Color = color!(0xfff0f5);
pub(crate) const CREAM: Color = color!(0xfffdf0);

pub(crate) const INK: Color = color!(0x1f2937);
pub(crate) const INK_SOFT: Color = color!(0x4b5563);
pub(crate) const TEXT_FAINT: Color = color!(0x9ca3af);

const PALE_BORDER: Color = color!(0xfce7f3);
const STONE_BORDER: Color = color!(0xe7e5e4);

/// Confetti paper colors, in spawn-index order.
pub(crate) const CONFETTI: [Color; 3] = [ROSE_GOLD, SOFT_PINK, Color::WHITE];

pub(crate) fn confetti_color(index: usize, a: f32) -> Color {
    alpha(CONFETTI[index % CONFETTI.len()], a)
}

pub(crate) fn alpha(color: Color, a: f32) -> Color {
    Color { a, ..color }
}

// Page backgrounds

pub(crate) fn waiting_page(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Gradient(Gradient::Linear(
            Linear::new(std::f32::consts::PI * 0.75)
                .add_stop(0.0, SOFT_PINK)
                .add_stop(0.55, PETAL)
                .add_stop(1.0, ROSE_GOLD),
        ))),
        text_color: Some(Color::WHITE),
        ..Default::default()
    }
}

pub(crate) fn celebration_page(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Gradient(Gradient::Linear(
            Linear::new(std::f32::consts::PI)
                .add_stop(0.0, alpha(ROSE_GOLD, 0.25))
                .add_stop(0.35, BLUSH)
                .add_stop(1.0, BLUSH),
        ))),
        text_color: Some(INK),
        ..Default::default()
    }
}

// Cards

pub(crate) fn time_card(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(alpha(Color::WHITE, 0.9))),
        border: Border {
            radius: 12.0.into(),
            width: 2.0,
            color: PALE_BORDER,
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.15),
            offset: Vector::new(0.0, 4.0),
            blur_radius: 10.0,
        },
        ..Default::default()
    }
}

pub(crate) fn photo_card(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color::WHITE)),
        border: Border {
            radius: 14.0.into(),
            ..Default::default()
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.12),
            offset: Vector::new(0.0, 6.0),
            blur_radius: 14.0,
        },
        ..Default::default()
    }
}

pub(crate) fn photo_frame(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(BLUSH)),
        border: Border {
            radius: 10.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Asymmetric corners, like a pressed-flower page from a scrapbook.
pub(crate) fn poem_card(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(alpha(Color::WHITE, 0.65))),
        border: Border {
            radius: iced::border::Radius {
                top_left: 64.0,
                top_right: 12.0,
                bottom_right: 64.0,
                bottom_left: 12.0,
            },
            width: 1.0,
            color: Color::WHITE,
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.14),
            offset: Vector::new(0.0, 8.0),
            blur_radius: 20.0,
        },
        ..Default::default()
    }
}

pub(crate) fn letter_card(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(CREAM)),
        border: Border {
            radius: 10.0.into(),
            width: 1.0,
            color: STONE_BORDER,
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.08),
            offset: Vector::new(0.0, 2.0),
            blur_radius: 8.0,
        },
        ..Default::default()
    }
}

pub(crate) fn accent_bar(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(ROSE_GOLD)),
        border: Border {
            radius: 2.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

// Music pill + modal

pub(crate) fn music_pill(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(alpha(Color::WHITE, 0.92))),
        border: Border {
            radius: 28.0.into(),
            width: 1.0,
            color: SOFT_PINK,
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.18),
            offset: Vector::new(0.0, 4.0),
            blur_radius: 12.0,
        },
        ..Default::default()
    }
}

pub(crate) fn modal_backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color::from_rgba(0.0, 0.0, 0.0, 0.6))),
        ..Default::default()
    }
}

pub(crate) fn secret_panel(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color::WHITE)),
        border: Border {
            radius: 20.0.into(),
            width: 3.0,
            color: ROSE_GOLD,
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.35),
            offset: Vector::new(0.0, 10.0),
            blur_radius: 30.0,
        },
        ..Default::default()
    }
}

// Buttons

/// The deep-red pill used to skip the countdown.
pub(crate) fn skip_button(_theme: &Theme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(Background::Color(DEEP_RED)),
        text_color: Color::WHITE,
        border: Border {
            radius: 24.0.into(),
            ..Default::default()
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.25),
            offset: Vector::new(0.0, 3.0),
            blur_radius: 8.0,
        },
        ..Default::default()
    };

    match status {
        button::Status::Hovered | button::Status::Pressed => button::Style {
            background: Some(Background::Color(DEEP_RED_PRESSED)),
            ..base
        },
        _ => base,
    }
}

/// Rose-gold circle, used for play/pause.
pub(crate) fn play_button(_theme: &Theme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(Background::Color(ROSE_GOLD)),
        text_color: Color::WHITE,
        border: Border {
            radius: 50.0.into(),
            ..Default::default()
        },
        ..Default::default()
    };

    match status {
        button::Status::Hovered | button::Status::Pressed => button::Style {
            background: Some(Background::Color(DEEP_RED)),
            ..base
        },
        _ => base,
    }
}

/// Translucent white with a rose-gold outline; fills in on hover.
pub(crate) fn outline_button(_theme: &Theme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(Background::Color(alpha(Color::WHITE, 0.8))),
        text_color: ROSE_GOLD,
        border: Border {
            radius: 24.0.into(),
            width: 2.0,
            color: ROSE_GOLD,
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.15),
            offset: Vector::new(0.0, 3.0),
            blur_radius: 8.0,
        },
        ..Default::default()
    };

    match status {
        button::Status::Hovered | button::Status::Pressed => button::Style {
            background: Some(Background::Color(ROSE_GOLD)),
            text_color: Color::WHITE,
            ..base
        },
        _ => base,
    }
}

/// Bare text that warms up on hover (mute toggle, modal close).
pub(crate) fn ghost_button(_theme: &Theme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(Background::Color(Color::TRANSPARENT)),
        text_color: ROSE_GOLD,
        border: Border::default(),
        ..Default::default()
    };

    match status {
        button::Status::Hovered | button::Status::Pressed => button::Style {
            text_color: DEEP_RED,
            ..base
        },
        _ => base,
    }
}
