// SPDX-License-Identifier: MPL-2.0
//! Flash alert stack with automatic dismissal.
//!
//! Alerts carry the outcome of an operation (save, deactivate, errors) and
//! disappear on their own after a fixed delay, mirroring transient flash
//! messages. An alert can be marked permanent, in which case it is never
//! scheduled for removal and only a manual dismissal clears it. The expiry
//! pass tolerates alerts that were already dismissed by hand: it simply no
//! longer finds them.

use crate::config::ALERT_TIMEOUT_MS;
use crate::i18n::I18n;
use crate::ui::animation::EntryAnimation;
use crate::ui::design_tokens::{border, opacity, radius, spacing, typography};
use crate::ui::notifications::Severity;
use crate::ui::styles;
use iced::widget::{button, container, text, Column, Container, Row, Text};
use iced::{alignment, Background, Color, Element, Length, Theme};
use std::time::{Duration, Instant};

/// Unique identifier for an alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AlertId(u64);

impl AlertId {
    fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

/// Messages for alert state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Manually dismiss an alert by ID.
    Dismiss(AlertId),
}

/// A transient flash message.
#[derive(Debug, Clone)]
pub struct Alert {
    id: AlertId,
    severity: Severity,
    message_key: String,
    message_args: Vec<(String, String)>,
    created_at: Instant,
    permanente: bool,
    entrada: EntryAnimation,
}

impl Alert {
    pub fn new(severity: Severity, message_key: impl Into<String>) -> Self {
        let now = Instant::now();
        Self {
            id: AlertId::new(),
            severity,
            message_key: message_key.into(),
            message_args: Vec::new(),
            created_at: now,
            permanente: false,
            entrada: EntryAnimation::comenzar(now),
        }
    }

    pub fn success(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Success, message_key)
    }

    pub fn danger(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Error, message_key)
    }

    /// Marks the alert as permanent: it is never scheduled for removal.
    #[must_use]
    pub fn permanente(mut self) -> Self {
        self.permanente = true;
        self
    }

    /// Adds an argument for message interpolation.
    #[must_use]
    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.message_args.push((key.into(), value.into()));
        self
    }

    #[must_use]
    pub fn id(&self) -> AlertId {
        self.id
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn message_key(&self) -> &str {
        &self.message_key
    }

    #[must_use]
    pub fn es_permanente(&self) -> bool {
        self.permanente
    }

    #[must_use]
    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    fn expirada(&self, now: Instant) -> bool {
        !self.permanente
            && now.saturating_duration_since(self.created_at)
                >= Duration::from_millis(ALERT_TIMEOUT_MS)
    }
}

/// Holds the alerts currently on screen.
#[derive(Debug, Default)]
pub struct Stack {
    alertas: Vec<Alert>,
}

impl Stack {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, alert: Alert) {
        self.alertas.push(alert);
    }

    /// Manually dismisses an alert. Unknown ids are a silent no-op.
    pub fn dismiss(&mut self, id: AlertId) -> bool {
        let before = self.alertas.len();
        self.alertas.retain(|a| a.id != id);
        self.alertas.len() != before
    }

    /// Removes every non-permanent alert whose delay has elapsed as of `now`.
    pub fn tick(&mut self, now: Instant) {
        self.alertas.retain(|a| !a.expirada(now));
    }

    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Alert> {
        self.alertas.iter()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.alertas.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.alertas.len()
    }

    /// True while any alert is still playing its entry animation.
    #[must_use]
    pub fn tiene_animaciones_activas(&self, now: Instant) -> bool {
        self.alertas.iter().any(|a| !a.entrada.terminada(now))
    }

    /// Renders the alert stack.
    pub fn view<'a>(&'a self, i18n: &'a I18n, now: Instant) -> Element<'a, Message> {
        if self.alertas.is_empty() {
            return Container::new(text("")).height(Length::Shrink).into();
        }

        let mut columna = Column::new().spacing(spacing::XS);
        for alerta in &self.alertas {
            columna = columna.push(view_alert(alerta, i18n, now));
        }
        columna.into()
    }
}

fn view_alert<'a>(alerta: &'a Alert, i18n: &'a I18n, now: Instant) -> Element<'a, Message> {
    let accent = alerta.severity().color();
    let progreso = alerta.entrada.progress(now);
    let offset = alerta.entrada.offset(now);

    let message_text = if alerta.message_args.is_empty() {
        i18n.tr(alerta.message_key())
    } else {
        let args: Vec<(&str, &str)> = alerta
            .message_args
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        i18n.tr_with_args(alerta.message_key(), &args)
    };

    let dismiss_button = button(Text::new("✕").size(typography::BODY_SM))
        .on_press(Message::Dismiss(alerta.id()))
        .padding(spacing::XXS)
        .style(styles::button::dismiss);

    let fila = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(
            Container::new(Text::new(message_text).size(typography::BODY)).width(Length::Fill),
        )
        .push(dismiss_button);

    // The remaining offset is rendered as extra top padding; opacity fades
    // the tinted surface in as the entry animation progresses.
    Container::new(
        Container::new(fila)
            .width(Length::Fill)
            .padding(spacing::SM)
            .style(move |_theme: &Theme| alert_container_style(accent, progreso)),
    )
    .padding(iced::Padding {
        top: offset,
        ..iced::Padding::ZERO
    })
    .into()
}

fn alert_container_style(accent: Color, progreso: f32) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::ALERT_TINT * progreso,
            ..accent
        })),
        border: iced::Border {
            color: Color {
                a: progreso,
                ..accent
            },
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        text_color: Some(Color {
            a: progreso,
            ..accent
        }),
        ..Default::default()
    }
}
