// SPDX-License-Identifier: MPL-2.0
//! Client directory listing.
//!
//! Hosts the live-search field with its trailing debounce, the active-client
//! counter, and one card per client with tooltip-wrapped row actions. Cards
//! play a one-shot entry animation the first time they join the rendered
//! list.

use crate::domain::{formato, Cliente, Directorio};
use crate::i18n::I18n;
use crate::ui::animation::EntryAnimation;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::search::Debounce;
use crate::ui::styles;
use iced::widget::{button, scrollable, text_input, tooltip, Column, Container, Row, Text};
use iced::{alignment, Element, Length, Padding};
use std::collections::HashMap;
use std::time::Instant;

#[derive(Debug, Clone)]
pub enum Message {
    /// A keystroke in the search field.
    BuscarCambiado(String),
    Nuevo,
    Editar(u64),
    Eliminar(u64),
}

/// What the parent should do after an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    Nuevo,
    Editar(u64),
    Eliminar(u64),
}

#[derive(Debug, Default)]
pub struct State {
    /// Raw contents of the search field.
    buscar: String,
    debounce: Debounce,
    /// The last emitted search term, applied as the list filter.
    filtro: String,
    /// One-shot entry animations, keyed by client id. An id stays tracked
    /// even while the filter hides it, so re-revealing never re-animates.
    entradas: HashMap<u64, EntryAnimation>,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, message: Message, now: Instant) -> Event {
        match message {
            Message::BuscarCambiado(valor) => {
                self.buscar = valor.clone();
                self.debounce.input(valor, now);
                Event::None
            }
            Message::Nuevo => Event::Nuevo,
            Message::Editar(id) => Event::Editar(id),
            Message::Eliminar(id) => Event::Eliminar(id),
        }
    }

    /// Drives the debounce from the periodic tick. When the quiet period
    /// elapses the emitted term becomes the list filter.
    pub fn poll_busqueda(&mut self, now: Instant) -> Option<&str> {
        if let Some(termino) = self.debounce.poll(now) {
            tracing::debug!(termino = %termino, "buscando");
            self.filtro = termino;
            Some(&self.filtro)
        } else {
            None
        }
    }

    #[must_use]
    pub fn filtro(&self) -> &str {
        &self.filtro
    }

    #[must_use]
    pub fn busqueda_pendiente(&self) -> bool {
        self.debounce.armado()
    }

    /// Arms entry animations for clients appearing for the first time.
    pub fn sincronizar_entradas(&mut self, directorio: &Directorio, now: Instant) {
        for cliente in directorio.buscar(&self.filtro) {
            self.entradas
                .entry(cliente.id)
                .or_insert_with(|| EntryAnimation::comenzar(now));
        }
    }

    #[must_use]
    pub fn tiene_animaciones_activas(&self, now: Instant) -> bool {
        self.entradas.values().any(|a| !a.terminada(now))
    }

    pub fn view<'a>(
        &'a self,
        directorio: &'a Directorio,
        i18n: &'a I18n,
        now: Instant,
    ) -> Element<'a, Message> {
        let titulo = Text::new(i18n.tr("clientes-titulo")).size(typography::TITLE_LG);

        let contador = Text::new(i18n.tr_with_args(
            "clientes-contador",
            &[("cantidad", &formato::miles(directorio.contar_activos() as i64))],
        ))
        .size(typography::CAPTION);

        let nuevo = button(Text::new(i18n.tr("boton-nuevo-cliente")).size(typography::BODY))
            .on_press(Message::Nuevo)
            .padding([spacing::XS, spacing::MD])
            .style(styles::button::primary);

        let cabecera = Row::new()
            .spacing(spacing::MD)
            .align_y(alignment::Vertical::Center)
            .push(Column::new().push(titulo).push(contador).spacing(spacing::XXS))
            .push(Container::new(nuevo).width(Length::Fill).align_x(alignment::Horizontal::Right));

        let busqueda = text_input(&i18n.tr("buscar-placeholder"), &self.buscar)
            .on_input(Message::BuscarCambiado)
            .padding(spacing::XS)
            .size(typography::BODY);

        let visibles = directorio.buscar(&self.filtro);

        let cuerpo: Element<'a, Message> = if visibles.is_empty() {
            Container::new(Text::new(i18n.tr("lista-vacia")).size(typography::BODY))
                .width(Length::Fill)
                .padding(spacing::LG)
                .align_x(alignment::Horizontal::Center)
                .into()
        } else {
            let mut tarjetas = Column::new().spacing(spacing::SM);
            for cliente in visibles {
                tarjetas = tarjetas.push(self.view_tarjeta(cliente, i18n, now));
            }
            scrollable(tarjetas).height(Length::Fill).into()
        };

        Column::new()
            .spacing(spacing::MD)
            .padding(spacing::LG)
            .push(cabecera)
            .push(busqueda)
            .push(cuerpo)
            .into()
    }

    fn view_tarjeta<'a>(
        &self,
        cliente: &'a Cliente,
        i18n: &'a I18n,
        now: Instant,
    ) -> Element<'a, Message> {
        // A card missing its animation entry renders settled.
        let (progreso, offset) = self
            .entradas
            .get(&cliente.id)
            .map(|a| (a.progress(now), a.offset(now)))
            .unwrap_or((1.0, 0.0));

        let datos = Column::new()
            .spacing(spacing::XXS)
            .push(Text::new(cliente.nombre.as_str()).size(typography::TITLE_SM))
            .push(
                Text::new(format!(
                    "DNI {}  ·  Tel. {}",
                    cliente.dni.as_str(),
                    cliente.telefono.as_str()
                ))
                .size(typography::BODY_SM),
            );

        let editar = styles::tooltip::styled(
            button(Text::new("✎").size(typography::BODY))
                .on_press(Message::Editar(cliente.id))
                .padding(spacing::XXS)
                .style(styles::button::secondary),
            i18n.tr("tooltip-editar"),
            tooltip::Position::Top,
        );

        let eliminar = styles::tooltip::styled(
            button(Text::new("✕").size(typography::BODY))
                .on_press(Message::Eliminar(cliente.id))
                .padding(spacing::XXS)
                .style(styles::button::danger),
            i18n.tr("tooltip-eliminar"),
            tooltip::Position::Top,
        );

        let fila = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(Container::new(datos).width(Length::Fill))
            .push(editar)
            .push(eliminar);

        Container::new(
            Container::new(fila)
                .width(Length::Fill)
                .padding(spacing::SM)
                .style(move |theme| styles::container::card(theme, progreso)),
        )
        .padding(Padding {
            top: offset,
            ..Padding::ZERO
        })
        .into()
    }
}
