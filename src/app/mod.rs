// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the list and form views.
//!
//! The `App` struct wires together the domains (client directory,
//! localization, page behaviors) and translates messages into state changes.
//! Policy decisions (window sizing, which behaviors keep the tick alive,
//! flash-alert routing) stay close to the main update loop so user-facing
//! behavior is easy to audit.

mod message;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::config;
use crate::domain::Directorio;
use crate::i18n::I18n;
use crate::ui::alerts;
use crate::ui::clientes::{form, lista};
use crate::ui::confirm::{Confirmador, ConfirmadorNativo};
use crate::ui::notifications;
use iced::{window, Subscription, Task, Theme};
use std::fmt;
use std::time::Instant;

pub const WINDOW_DEFAULT_WIDTH: u32 = 800;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 650;
pub const MIN_WINDOW_WIDTH: u32 = 560;
pub const MIN_WINDOW_HEIGHT: u32 = 480;

/// Root Iced application state bridging UI components, localization, and the
/// client directory.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    directorio: Directorio,
    lista: lista::State,
    form: Option<form::State>,
    /// Flash alerts with automatic dismissal.
    alerts: alerts::Stack,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
    /// Blocking confirmation dialog provider.
    confirmador: Box<dyn Confirmador>,
    /// Clock of the last processed tick, used by animated views.
    ultimo_tick: Instant,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("clientes_activos", &self.directorio.contar_activos())
            .finish()
    }
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            screen: Screen::Clientes,
            directorio: Directorio::con_datos_de_ejemplo(),
            lista: lista::State::new(),
            form: None,
            alerts: alerts::Stack::new(),
            notifications: notifications::Manager::new(),
            confirmador: Box::new(ConfirmadorNativo),
            ultimo_tick: Instant::now(),
        }
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state from CLI flags and the settings file.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang, &config);

        let mut app = App {
            i18n,
            ..Self::default()
        };

        // Arm the entry animations for the cards visible at startup
        let now = Instant::now();
        app.lista.sincronizar_entradas(&app.directorio, now);
        app.ultimo_tick = now;

        if let Some(key) = config_warning {
            app.notifications
                .push(notifications::Notification::warning(key));
        }

        (app, Task::none())
    }

    fn title(&self) -> String {
        self.i18n.tr("app-title")
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(self.necesita_tick())
    }

    /// Whether any timed behavior is pending: alert expiry, toast expiry, a
    /// pending search emission, a running entry animation, or an in-flight
    /// save.
    fn necesita_tick(&self) -> bool {
        let now = Instant::now();
        !self.alerts.is_empty()
            || self.notifications.has_notifications()
            || self.lista.busqueda_pendiente()
            || self.lista.tiene_animaciones_activas(now)
            || self.alerts.tiene_animaciones_activas(now)
            || self.form.as_ref().is_some_and(form::State::esta_guardando)
    }

    /// Replaces the confirmation dialog provider.
    pub fn set_confirmador(&mut self, confirmador: Box<dyn Confirmador>) {
        self.confirmador = confirmador;
    }
}
