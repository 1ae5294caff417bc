// SPDX-License-Identifier: MPL-2.0
//! Client registration/edit form.
//!
//! Submission is intercepted: when any constraint fails the submit is
//! cancelled and the form enters the validated visual state, which reveals
//! the per-field indicators. Whatever the outcome, the validated state is
//! applied, and fields that pass show as valid from then on.
//!
//! The DNI and teléfono fields are coerced on every keystroke: digits only,
//! truncated to their fixed lengths. Masking never blocks submission by
//! itself; the exact-length rule is the constraint check's job.

use crate::domain::{Cliente, Dni, Telefono};
use crate::i18n::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles::text_input::Validity;
use crate::ui::styles::{self, text_input as estilos_input};
use crate::ui::widgets::LoadingButton;
use iced::widget::{button, text, text_input, Column, Container, Row, Text};
use iced::{alignment, Element, Length};
use std::f32::consts::TAU;
use std::time::Instant;

/// Spinner revolutions per second while saving.
const VELOCIDAD_SPINNER: f32 = 1.5;

/// Minimum time the saving state stays visible, so the feedback registers
/// even though the directory write is instantaneous.
pub const CARGA_MINIMA: std::time::Duration = std::time::Duration::from_millis(400);

#[derive(Debug, Clone)]
pub enum Message {
    NombreCambiado(String),
    DniCambiado(String),
    TelefonoCambiado(String),
    Enviar,
    Cancelar,
}

/// What the parent should do after an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    /// The form passed its constraints and wants to be saved.
    Enviar,
    Cancelar,
}

#[derive(Debug)]
pub struct State {
    id: Option<u64>,
    nombre: String,
    dni: String,
    telefono: String,
    /// Whether the validated visual state has been applied.
    validado: bool,
    guardar: LoadingButton,
    guardando_desde: Option<Instant>,
}

impl State {
    /// Empty form for registering a new client.
    #[must_use]
    pub fn nuevo(i18n: &I18n) -> Self {
        Self {
            id: None,
            nombre: String::new(),
            dni: String::new(),
            telefono: String::new(),
            validado: false,
            guardar: LoadingButton::new(i18n.tr("boton-guardar")),
            guardando_desde: None,
        }
    }

    /// Form pre-filled from an existing client.
    #[must_use]
    pub fn editar(cliente: &Cliente, i18n: &I18n) -> Self {
        Self {
            id: Some(cliente.id),
            nombre: cliente.nombre.clone(),
            dni: cliente.dni.as_str().to_string(),
            telefono: cliente.telefono.as_str().to_string(),
            validado: false,
            guardar: LoadingButton::new(i18n.tr("boton-guardar")),
            guardando_desde: None,
        }
    }

    pub fn update(&mut self, message: Message) -> Event {
        if self.guardando_desde.is_some() {
            // The form is inert while the save is in flight.
            return Event::None;
        }

        match message {
            Message::NombreCambiado(valor) => {
                self.nombre = valor;
                Event::None
            }
            Message::DniCambiado(valor) => {
                self.dni = Dni::mask(&valor);
                Event::None
            }
            Message::TelefonoCambiado(valor) => {
                self.telefono = Telefono::mask(&valor);
                Event::None
            }
            Message::Enviar => {
                // The validated state applies regardless of the outcome.
                self.validado = true;
                if self.es_valido() {
                    Event::Enviar
                } else {
                    Event::None
                }
            }
            Message::Cancelar => Event::Cancelar,
        }
    }

    /// Puts the save button into its loading state.
    pub fn comenzar_guardado(&mut self, i18n: &I18n, now: Instant) {
        self.guardar.comenzar_carga(i18n.tr("boton-cargando"));
        self.guardando_desde = Some(now);
    }

    /// Restores the save button. Must pair with [`Self::comenzar_guardado`].
    pub fn terminar_guardado(&mut self) {
        self.guardar.terminar_carga();
        self.guardando_desde = None;
    }

    /// When the in-flight save has been visible long enough, returns the
    /// values to persist.
    pub fn guardado_listo(&self, now: Instant) -> Option<(Option<u64>, Dni, String, Telefono)> {
        let desde = self.guardando_desde?;
        if now.saturating_duration_since(desde) < CARGA_MINIMA {
            return None;
        }
        let dni = Dni::parse(&self.dni)?;
        let telefono = Telefono::parse(&self.telefono)?;
        Some((self.id, dni, self.nombre.trim().to_string(), telefono))
    }

    #[must_use]
    pub fn esta_guardando(&self) -> bool {
        self.guardando_desde.is_some()
    }

    #[must_use]
    pub fn es_edicion(&self) -> bool {
        self.id.is_some()
    }

    #[must_use]
    pub fn es_valido(&self) -> bool {
        !self.nombre.trim().is_empty()
            && Dni::parse(&self.dni).is_some()
            && Telefono::parse(&self.telefono).is_some()
    }

    #[must_use]
    pub fn dni(&self) -> &str {
        &self.dni
    }

    #[must_use]
    pub fn telefono(&self) -> &str {
        &self.telefono
    }

    fn validez(&self, valido: bool) -> Validity {
        if !self.validado {
            Validity::Unchecked
        } else if valido {
            Validity::Valid
        } else {
            Validity::Invalid
        }
    }

    fn validez_nombre(&self) -> Validity {
        self.validez(!self.nombre.trim().is_empty())
    }

    fn validez_dni(&self) -> Validity {
        self.validez(Dni::parse(&self.dni).is_some())
    }

    fn validez_telefono(&self) -> Validity {
        self.validez(Telefono::parse(&self.telefono).is_some())
    }

    pub fn view<'a>(&'a self, i18n: &'a I18n, now: Instant) -> Element<'a, Message> {
        let titulo_key = if self.es_edicion() {
            "form-titulo-editar"
        } else {
            "form-titulo-nuevo"
        };
        let titulo = Text::new(i18n.tr(titulo_key)).size(typography::TITLE_LG);

        let campos = Column::new()
            .spacing(spacing::MD)
            .push(campo(
                i18n.tr("campo-nombre"),
                text_input("", &self.nombre).on_input(Message::NombreCambiado),
                self.validez_nombre(),
                i18n.tr("error-campo-obligatorio"),
            ))
            .push(campo(
                i18n.tr("campo-dni"),
                text_input("", &self.dni).on_input(Message::DniCambiado),
                self.validez_dni(),
                i18n.tr("error-dni-longitud"),
            ))
            .push(campo(
                i18n.tr("campo-telefono"),
                text_input("", &self.telefono).on_input(Message::TelefonoCambiado),
                self.validez_telefono(),
                i18n.tr("error-telefono-longitud"),
            ));

        let rotacion = self
            .guardando_desde
            .map(|desde| now.saturating_duration_since(desde).as_secs_f32() * TAU * VELOCIDAD_SPINNER)
            .unwrap_or(0.0);

        let cancelar = button(Text::new(i18n.tr("boton-cancelar")).size(typography::BODY))
            .on_press(Message::Cancelar)
            .padding([spacing::XS, spacing::MD])
            .style(styles::button::secondary);

        let acciones = Row::new()
            .spacing(spacing::SM)
            .push(cancelar)
            .push(self.guardar.view(rotacion, Message::Enviar));

        let panel = Container::new(
            Column::new()
                .spacing(spacing::LG)
                .push(titulo)
                .push(campos)
                .push(acciones),
        )
        .width(Length::Fixed(sizing::FORM_WIDTH))
        .padding(spacing::LG)
        .style(styles::container::panel);

        Container::new(panel)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .into()
    }
}

/// A labeled input with its validity border and, when invalid, the field's
/// error caption.
fn campo<'a>(
    etiqueta: String,
    input: text_input::TextInput<'a, Message>,
    validez: Validity,
    mensaje_error: String,
) -> Element<'a, Message> {
    let mut columna = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(etiqueta).size(typography::BODY_SM))
        .push(
            input
                .padding(spacing::XS)
                .size(typography::BODY)
                .style(estilos_input::validated(validez)),
        );

    if validez == Validity::Invalid {
        columna = columna.push(
            Text::new(mensaje_error)
                .size(typography::CAPTION)
                .style(|_theme| text::Style {
                    color: Some(palette::ERROR_500),
                }),
        );
    }

    columna.into()
}
