// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::alerts;
use crate::ui::clientes::{form, lista};
use crate::ui::notifications;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Lista(lista::Message),
    Form(form::Message),
    Alert(alerts::Message),
    Notification(notifications::NotificationMessage),
    /// Periodic tick driving every timed behavior.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `es-PE`, `en`).
    pub lang: Option<String>,
}
