// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{opacity, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Generic panel surface used for the form and list sections.
///
/// The color is derived from the active Iced `Theme` background, with a
/// slight opacity, so panels stay readable in both light and dark modes
/// without hard-coding colors.
pub fn panel(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    let base = palette.background.base.color;

    container::Style {
        background: Some(Background::Color(Color::from_rgba(
            base.r,
            base.g,
            base.b,
            opacity::SURFACE,
        ))),
        border: Border {
            radius: radius::LG.into(),
            ..Border::default()
        },
        ..Default::default()
    }
}

/// Card surface for a client entry, with opacity driven by the entry
/// animation progress.
pub fn card(theme: &Theme, progress: f32) -> container::Style {
    let palette = theme.extended_palette();
    let base = palette.background.weak.color;

    container::Style {
        background: Some(Background::Color(Color {
            a: progress,
            ..base
        })),
        border: Border {
            radius: radius::MD.into(),
            ..Border::default()
        },
        shadow: shadow::SM,
        text_color: Some(Color {
            a: progress,
            ..palette.background.base.text
        }),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panel_has_background() {
        assert!(panel(&Theme::Light).background.is_some());
        assert!(panel(&Theme::Dark).background.is_some());
    }

    #[test]
    fn card_opacity_follows_progress() {
        let hidden = card(&Theme::Light, 0.0);
        let Some(Background::Color(bg)) = hidden.background else {
            panic!("expected color background");
        };
        assert_eq!(bg.a, 0.0);

        let settled = card(&Theme::Light, 1.0);
        let Some(Background::Color(bg)) = settled.background else {
            panic!("expected color background");
        };
        assert_eq!(bg.a, 1.0);
    }
}
