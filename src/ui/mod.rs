// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based
//! architecture with the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`clientes`] - Client directory listing and registration/edit form
//!
//! # Shared Infrastructure
//!
//! - [`alerts`] - Flash alert stack with automatic dismissal
//! - [`animation`] - One-shot entry animation for cards and alerts
//! - [`confirm`] - Blocking confirmation dialog seam
//! - [`notifications`] - Toast notification system for user feedback
//! - [`search`] - Trailing debounce for the live search field
//! - [`styles`] - Centralized styling (buttons, containers, inputs, tooltips)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`widgets`] - Custom Iced widgets (spinner, loading button)

pub mod alerts;
pub mod animation;
pub mod clientes;
pub mod confirm;
pub mod design_tokens;
pub mod notifications;
pub mod search;
pub mod styles;
pub mod widgets;
