// SPDX-License-Identifier: MPL-2.0
//! Client management screens.
//!
//! - [`lista`] - Directory listing with live search, tooltips, and entry
//!   animations
//! - [`form`] - Registration/edit form with constraint validation and digit
//!   masking

pub mod form;
pub mod lista;
