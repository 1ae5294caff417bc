// SPDX-License-Identifier: MPL-2.0
//! Text input styles, including the validated form states.

use crate::ui::design_tokens::{border, palette};
use iced::widget::text_input;
use iced::Theme;

/// Per-field validity as shown once a form enters the validated state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validity {
    /// The form has not been submitted yet; no indicator.
    Unchecked,
    /// Field passed its constraint check.
    Valid,
    /// Field failed its constraint check.
    Invalid,
}

/// Default input style plus a colored validity border once the owning form
/// has been validated.
pub fn validated(validity: Validity) -> impl Fn(&Theme, text_input::Status) -> text_input::Style {
    move |theme, status| {
        let mut style = text_input::default(theme, status);
        match validity {
            Validity::Unchecked => {}
            Validity::Valid => {
                style.border.color = palette::SUCCESS_500;
                style.border.width = border::WIDTH_SM;
            }
            Validity::Invalid => {
                style.border.color = palette::ERROR_500;
                style.border.width = border::WIDTH_MD;
            }
        }
        style
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_fields_get_error_border() {
        let style = validated(Validity::Invalid)(&Theme::Light, text_input::Status::Active);
        assert_eq!(style.border.color, palette::ERROR_500);
    }

    #[test]
    fn valid_fields_get_success_border() {
        let style = validated(Validity::Valid)(&Theme::Light, text_input::Status::Active);
        assert_eq!(style.border.color, palette::SUCCESS_500);
    }

    #[test]
    fn unchecked_fields_keep_the_default_border() {
        let plain = text_input::default(&Theme::Light, text_input::Status::Active);
        let unchecked = validated(Validity::Unchecked)(&Theme::Light, text_input::Status::Active);
        assert_eq!(unchecked.border.color, plain.border.color);
    }
}
