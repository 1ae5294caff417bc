// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{palette, radius, shadow};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Primary action button (save, new client).
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(palette::PRIMARY_500)),
            text_color: palette::WHITE,
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
            text_color: palette::WHITE,
            border: Border {
                color: palette::PRIMARY_500,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::MD,
            snap: true,
        },
        button::Status::Disabled => button::Style {
            background: Some(Background::Color(palette::GRAY_200)),
            text_color: palette::GRAY_400,
            border: Border {
                color: palette::GRAY_400,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

/// Secondary button (cancel, back). Adapts to light/dark theme.
pub fn secondary(theme: &Theme, status: button::Status) -> button::Style {
    let is_light = matches!(theme, Theme::Light);

    let (bg_color, text_color) = if is_light {
        (palette::GRAY_100, palette::GRAY_900)
    } else {
        (palette::GRAY_700, palette::WHITE)
    };

    match status {
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(palette::GRAY_200)),
            text_color: palette::GRAY_900,
            border: Border {
                color: palette::GRAY_400,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
        _ => button::Style {
            background: Some(Background::Color(bg_color)),
            text_color,
            border: Border {
                color: palette::GRAY_400,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

/// Destructive action button (deactivate client).
pub fn danger(_theme: &Theme, status: button::Status) -> button::Style {
    let bg = match status {
        button::Status::Hovered => Color {
            a: 0.85,
            ..palette::ERROR_500
        },
        _ => palette::ERROR_500,
    };

    button::Style {
        background: Some(Background::Color(bg)),
        text_color: palette::WHITE,
        border: Border {
            radius: radius::SM.into(),
            ..Border::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Borderless icon-only button used for alert and toast dismissal.
pub fn dismiss(theme: &Theme, status: button::Status) -> button::Style {
    let base_text = theme.extended_palette().background.base.text;

    let background = match status {
        button::Status::Hovered | button::Status::Pressed => Some(Background::Color(Color {
            a: 0.2,
            ..palette::GRAY_400
        })),
        _ => None,
    };

    button::Style {
        background,
        text_color: base_text,
        border: Border {
            radius: radius::SM.into(),
            ..Border::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_disabled_is_grayed_out() {
        let style = primary(&Theme::Light, button::Status::Disabled);
        assert_eq!(style.text_color, palette::GRAY_400);
    }

    #[test]
    fn danger_uses_error_color() {
        let style = danger(&Theme::Light, button::Status::Active);
        assert_eq!(
            style.background,
            Some(Background::Color(palette::ERROR_500))
        );
    }

    #[test]
    fn dismiss_is_transparent_at_rest() {
        let style = dismiss(&Theme::Light, button::Status::Active);
        assert!(style.background.is_none());
    }
}
