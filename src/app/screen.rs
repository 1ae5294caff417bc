// SPDX-License-Identifier: MPL-2.0
//! The screens the application can display.

/// Active screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// Client directory listing with live search.
    #[default]
    Clientes,
    /// Registration/edit form.
    Formulario,
}
