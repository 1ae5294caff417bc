// SPDX-License-Identifier: MPL-2.0
//! Custom Iced widgets.

pub mod animated_spinner;
pub mod loading_button;

pub use animated_spinner::AnimatedSpinner;
pub use loading_button::LoadingButton;
