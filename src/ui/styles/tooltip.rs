// SPDX-License-Identifier: MPL-2.0
//! Tooltip styles with improved visibility.
//!
//! Provides styled tooltips with proper contrast, shadows, and rounded
//! corners for the list's action buttons.

use crate::ui::design_tokens::{radius, spacing, typography};
use iced::widget::{container, tooltip, Container, Text};
use iced::{Background, Border, Color, Element, Shadow, Theme, Vector};

/// Style for the tooltip container with good contrast and shadow.
///
/// Automatically adapts to light/dark theme for optimal visibility.
pub fn tooltip_container(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    // Determine if we're in dark mode by checking the background luminance
    let bg = palette.background.base.color;
    let is_dark = (bg.r + bg.g + bg.b) / 3.0 < 0.5;

    let (bg_color, text_color, border_color) = if is_dark {
        // Dark theme: light tooltip for contrast
        (
            Color::from_rgba(0.95, 0.95, 0.95, 0.98),
            Color::from_rgb(0.1, 0.1, 0.1),
            Color::from_rgba(0.7, 0.7, 0.7, 0.3),
        )
    } else {
        // Light theme: dark tooltip for contrast
        (
            Color::from_rgba(0.15, 0.15, 0.15, 0.98),
            Color::from_rgb(0.95, 0.95, 0.95),
            Color::from_rgba(0.3, 0.3, 0.3, 0.3),
        )
    };

    container::Style {
        background: Some(Background::Color(bg_color)),
        border: Border {
            radius: radius::SM.into(),
            width: 1.0,
            color: border_color,
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.25),
            offset: Vector::new(0.0, 2.0),
            blur_radius: 8.0,
        },
        text_color: Some(text_color),
        ..Default::default()
    }
}

/// Wraps a control in a styled tooltip carrying its configured text.
///
/// Controls without a tooltip simply aren't wrapped; there is no failure
/// mode here.
pub fn styled<'a, Message: 'a>(
    content: impl Into<Element<'a, Message>>,
    tip: impl Into<String>,
    position: tooltip::Position,
) -> tooltip::Tooltip<'a, Message, Theme, iced::Renderer> {
    let tip_container = Container::new(Text::new(tip.into()).size(typography::BODY_SM))
        .padding(spacing::XS)
        .style(tooltip_container);

    tooltip(content, tip_container, position).gap(spacing::XS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tooltip_container_has_background_and_text_color() {
        for theme in [Theme::Light, Theme::Dark] {
            let style = tooltip_container(&theme);
            assert!(style.background.is_some());
            assert!(style.text_color.is_some());
        }
    }

    #[test]
    fn light_theme_uses_dark_tooltip() {
        let style = tooltip_container(&Theme::Light);
        let Some(Background::Color(bg)) = style.background else {
            panic!("Expected color background")
        };
        assert!(bg.r < 0.5);
    }

    #[test]
    fn dark_theme_uses_light_tooltip() {
        let style = tooltip_container(&Theme::Dark);
        let Some(Background::Color(bg)) = style.background else {
            panic!("Expected color background")
        };
        assert!(bg.r > 0.5);
    }
}
