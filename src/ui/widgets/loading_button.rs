// SPDX-License-Identifier: MPL-2.0
//! Button with a toggleable loading state.
//!
//! While loading, the button parks its original label, shows a spinner with
//! the loading text, and ignores presses. Restoring reads the parked label
//! back and re-enables the button. The two calls must pair: a button left in
//! the loading state keeps its label parked and stays non-interactive.

use super::AnimatedSpinner;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Row, Text};
use iced::{alignment, Element};

#[derive(Debug, Clone)]
pub struct LoadingButton {
    etiqueta: String,
    etiqueta_original: Option<String>,
}

impl LoadingButton {
    #[must_use]
    pub fn new(etiqueta: impl Into<String>) -> Self {
        Self {
            etiqueta: etiqueta.into(),
            etiqueta_original: None,
        }
    }

    /// Parks the current label and swaps in the loading text. A button
    /// already loading keeps its parked label untouched.
    pub fn comenzar_carga(&mut self, texto_carga: impl Into<String>) {
        if self.etiqueta_original.is_none() {
            self.etiqueta_original = Some(std::mem::replace(
                &mut self.etiqueta,
                texto_carga.into(),
            ));
        }
    }

    /// Restores the parked label and re-enables the button. A no-op when the
    /// button is not loading.
    pub fn terminar_carga(&mut self) {
        if let Some(original) = self.etiqueta_original.take() {
            self.etiqueta = original;
        }
    }

    #[must_use]
    pub fn esta_cargando(&self) -> bool {
        self.etiqueta_original.is_some()
    }

    /// The text currently displayed on the button.
    #[must_use]
    pub fn etiqueta(&self) -> &str {
        &self.etiqueta
    }

    /// Renders the button. `rotation` drives the spinner while loading;
    /// `on_press` is only honored when the button is interactive.
    pub fn view<Message: Clone + 'static>(
        &self,
        rotation: f32,
        on_press: Message,
    ) -> Element<'_, Message> {
        let mut fila = Row::new()
            .spacing(spacing::XS)
            .align_y(alignment::Vertical::Center);

        if self.esta_cargando() {
            fila = fila.push(
                AnimatedSpinner::new(palette::WHITE, rotation, sizing::SPINNER_SM).into_element(),
            );
        }
        fila = fila.push(Text::new(self.etiqueta.clone()).size(typography::BODY));

        let mut boton = button(fila)
            .padding([spacing::XS, spacing::MD])
            .style(styles::button::primary);

        if !self.esta_cargando() {
            boton = boton.on_press(on_press);
        }

        boton.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_restores_exact_original_label() {
        let mut boton = LoadingButton::new("Submit");
        boton.comenzar_carga("Cargando...");
        assert_eq!(boton.etiqueta(), "Cargando...");
        boton.terminar_carga();
        assert_eq!(boton.etiqueta(), "Submit");
        assert!(!boton.esta_cargando());
    }

    #[test]
    fn loading_state_is_reported() {
        let mut boton = LoadingButton::new("Guardar");
        assert!(!boton.esta_cargando());
        boton.comenzar_carga("Cargando...");
        assert!(boton.esta_cargando());
    }

    #[test]
    fn double_start_does_not_lose_the_original() {
        let mut boton = LoadingButton::new("Guardar");
        boton.comenzar_carga("Cargando...");
        boton.comenzar_carga("Cargando...");
        boton.terminar_carga();
        assert_eq!(boton.etiqueta(), "Guardar");
    }

    #[test]
    fn terminar_without_comenzar_is_a_no_op() {
        let mut boton = LoadingButton::new("Guardar");
        boton.terminar_carga();
        assert_eq!(boton.etiqueta(), "Guardar");
    }
}
