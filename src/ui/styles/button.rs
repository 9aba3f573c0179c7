// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Primary action button.
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(palette::PRIMARY_500)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_600,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(palette::PRIMARY_400)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_500,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::MD,
            snap: true,
        },
        _ => button::Style::default(),
    }
}

/// Status icon: flat, borderless, identical in every state.
///
/// No highlight and no shadow, so the icon never reads as clickable.
pub fn status_icon(background: Color) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, _status: button::Status| button::Style {
        background: Some(Background::Color(background)),
        text_color: palette::BLACK,
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: radius::NONE.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Clickable image; `highlighted` draws the hover highlight.
pub fn image_button(highlighted: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let background = match status {
            button::Status::Pressed => Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::PRIMARY_500
            },
            button::Status::Hovered if highlighted => palette::PRIMARY_100,
            _ => Color::TRANSPARENT,
        };
        let border_color = if highlighted {
            palette::PRIMARY_500
        } else {
            Color::TRANSPARENT
        };

        button::Style {
            background: Some(Background::Color(background)),
            text_color: palette::GRAY_900,
            border: Border {
                color: border_color,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}
