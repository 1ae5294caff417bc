// SPDX-License-Identifier: MPL-2.0
//! `sabor_gourmet` is the desktop front-end for the Sabor Gourmet restaurant
//! management suite, built with the Iced GUI framework.
//!
//! It covers the client directory: live search with a trailing debounce,
//! digit-masked identity fields with constraint validation, flash alerts
//! with automatic dismissal, toast notifications, confirmation of
//! destructive actions, and entry animations, all localized with Fluent.

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod ui;
