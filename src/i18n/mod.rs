// SPDX-License-Identifier: MPL-2.0
//! Localization via Fluent.
//!
//! Catalogs are embedded `.ftl` files, one per locale. `es-PE` is the primary
//! catalog; `en` is the fallback for unresolved locales.

pub mod fluent;

pub use fluent::I18n;
