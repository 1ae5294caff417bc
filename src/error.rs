// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    Io(String),
    Config(String),
    Directorio(DirectorioError),
}

/// Errors raised by the in-memory client directory.
/// Each variant maps to a localized, user-facing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectorioError {
    /// Another client is already registered with this DNI.
    DniDuplicado(String),

    /// No client exists with the requested id.
    NoEncontrado(u64),
}

impl DirectorioError {
    /// Returns the i18n message key for this error.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            DirectorioError::DniDuplicado(_) => "error-dni-duplicado",
            DirectorioError::NoEncontrado(_) => "error-cliente-no-encontrado",
        }
    }
}

impl fmt::Display for DirectorioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DirectorioError::DniDuplicado(dni) => {
                write!(f, "Ya existe un cliente con el DNI: {}", dni)
            }
            DirectorioError::NoEncontrado(id) => {
                write!(f, "Cliente no encontrado con ID: {}", id)
            }
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Directorio(e) => write!(f, "{}", e),
        }
    }
}

impl From<DirectorioError> for Error {
    fn from(err: DirectorioError) -> Self {
        Error::Directorio(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
