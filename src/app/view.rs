// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Renders the active screen with the flash alerts above it and the toast
//! overlay stacked on top.

use super::{App, Message, Screen};
use crate::ui::design_tokens::spacing;
use crate::ui::notifications::Toast;
use iced::widget::{Column, Container, Stack};
use iced::{Element, Length};

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        // Animated views progress against the last processed tick, so
        // rendering itself never samples the clock.
        let now = self.ultimo_tick;

        let contenido: Element<'_, Message> = match self.screen {
            Screen::Clientes => self
                .lista
                .view(&self.directorio, &self.i18n, now)
                .map(Message::Lista),
            Screen::Formulario => match &self.form {
                Some(estado) => estado.view(&self.i18n, now).map(Message::Form),
                // A missing form state falls back to the list
                None => self
                    .lista
                    .view(&self.directorio, &self.i18n, now)
                    .map(Message::Lista),
            },
        };

        let mut columna = Column::new();
        if !self.alerts.is_empty() {
            columna = columna.push(
                Container::new(self.alerts.view(&self.i18n, now).map(Message::Alert))
                    .padding([spacing::SM, spacing::LG]),
            );
        }
        columna = columna.push(
            Container::new(contenido)
                .width(Length::Fill)
                .height(Length::Fill),
        );

        let base = Container::new(columna)
            .width(Length::Fill)
            .height(Length::Fill);

        let toasts = Toast::view_overlay(&self.notifications, &self.i18n).map(Message::Notification);

        Stack::new().push(base).push(toasts).into()
    }
}
