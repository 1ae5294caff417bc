// SPDX-License-Identifier: MPL-2.0
//! Client record and identity field newtypes.
//!
//! DNI and teléfono are digit-only fields with fixed maximum lengths. The
//! newtypes own both rules: `mask` is the per-keystroke coercion applied
//! while typing, `parse` is the exact-length check applied on submission.
//! Masking never rejects input on its own; it only strips and truncates.

use std::fmt;

/// National identity document: exactly 8 digits when complete.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Dni(String);

/// Peruvian mobile phone number: exactly 9 digits when complete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Telefono(String);

/// Strips every non-digit character and truncates to `max` digits.
fn solo_digitos(input: &str, max: usize) -> String {
    input.chars().filter(char::is_ascii_digit).take(max).collect()
}

impl Dni {
    pub const LONGITUD: usize = 8;

    /// Per-keystroke coercion: digits only, capped at 8 characters.
    #[must_use]
    pub fn mask(input: &str) -> String {
        solo_digitos(input, Self::LONGITUD)
    }

    /// Accepts only a complete, already-masked value.
    pub fn parse(input: &str) -> Option<Self> {
        let masked = Self::mask(input);
        (masked.len() == Self::LONGITUD && masked == input).then(|| Self(masked))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Telefono {
    pub const LONGITUD: usize = 9;

    /// Per-keystroke coercion: digits only, capped at 9 characters.
    #[must_use]
    pub fn mask(input: &str) -> String {
        solo_digitos(input, Self::LONGITUD)
    }

    /// Accepts only a complete, already-masked value.
    pub fn parse(input: &str) -> Option<Self> {
        let masked = Self::mask(input);
        (masked.len() == Self::LONGITUD && masked == input).then(|| Self(masked))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Dni {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for Telefono {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A client of the restaurant. Deletion is logical: `estado` goes false.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cliente {
    pub id: u64,
    pub dni: Dni,
    pub nombre: String,
    pub telefono: Telefono,
    pub estado: bool,
}

impl Cliente {
    pub fn nuevo(id: u64, dni: Dni, nombre: impl Into<String>, telefono: Telefono) -> Self {
        Self {
            id,
            dni,
            nombre: nombre.into(),
            telefono,
            estado: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dni_mask_strips_letters() {
        assert_eq!(Dni::mask("abc123de456"), "123456");
    }

    #[test]
    fn dni_mask_truncates_to_eight() {
        assert_eq!(Dni::mask("123456789"), "12345678");
    }

    #[test]
    fn dni_mask_is_idempotent() {
        let once = Dni::mask("4x5y8z7-1236");
        assert_eq!(Dni::mask(&once), once);
    }

    #[test]
    fn telefono_mask_strips_letters() {
        assert_eq!(Telefono::mask("9a8b7c6d5e4f"), "987654");
    }

    #[test]
    fn telefono_mask_truncates_to_nine() {
        assert_eq!(Telefono::mask("123456789X1"), "123456789");
    }

    #[test]
    fn dni_parse_requires_exact_length() {
        assert!(Dni::parse("1234567").is_none());
        assert!(Dni::parse("12345678").is_some());
    }

    #[test]
    fn dni_parse_rejects_unmasked_input() {
        // Parsing is submission-time validation; it does not coerce.
        assert!(Dni::parse("1234567a").is_none());
    }

    #[test]
    fn telefono_parse_requires_exact_length() {
        assert!(Telefono::parse("98765432").is_none());
        assert!(Telefono::parse("987654321").is_some());
    }

    #[test]
    fn cliente_nuevo_starts_active() {
        let cliente = Cliente::nuevo(
            1,
            Dni::parse("45871236").unwrap(),
            "María Torres",
            Telefono::parse("987654321").unwrap(),
        );
        assert!(cliente.estado);
    }
}
