// SPDX-License-Identifier: MPL-2.0
//! In-memory client registry.
//!
//! Mirrors the service-layer rules of the management suite: DNI uniqueness
//! across distinct clients, logical deletion, and case-insensitive term
//! search over name and DNI. Nothing here touches disk or network.

use super::cliente::{Cliente, Dni, Telefono};
use crate::error::DirectorioError;

#[derive(Debug, Default)]
pub struct Directorio {
    clientes: Vec<Cliente>,
    siguiente_id: u64,
}

impl Directorio {
    #[must_use]
    pub fn new() -> Self {
        Self {
            clientes: Vec::new(),
            siguiente_id: 1,
        }
    }

    /// A small seed so the screen has content on first launch.
    #[must_use]
    pub fn con_datos_de_ejemplo() -> Self {
        let mut directorio = Self::new();
        let ejemplos = [
            ("45871236", "María Torres Quispe", "987654321"),
            ("07712345", "Jorge Luis Paredes", "912345678"),
            ("10293847", "Ana Lucía Fernández", "998877665"),
        ];
        for (dni, nombre, telefono) in ejemplos {
            let dni = Dni::parse(dni).expect("seed DNI is valid");
            let telefono = Telefono::parse(telefono).expect("seed phone is valid");
            directorio
                .registrar(dni, nombre, telefono)
                .expect("seed data has unique DNIs");
        }
        directorio
    }

    pub fn listar_todos(&self) -> impl Iterator<Item = &Cliente> {
        self.clientes.iter()
    }

    pub fn listar_activos(&self) -> impl Iterator<Item = &Cliente> {
        self.clientes.iter().filter(|c| c.estado)
    }

    pub fn buscar_por_id(&self, id: u64) -> Option<&Cliente> {
        self.clientes.iter().find(|c| c.id == id)
    }

    /// Blank terms list the active clients; otherwise matches name or DNI,
    /// case-insensitively, among active clients.
    pub fn buscar<'a>(&'a self, termino: &str) -> Vec<&'a Cliente> {
        let termino = termino.trim();
        if termino.is_empty() {
            return self.listar_activos().collect();
        }
        let termino = termino.to_lowercase();
        self.listar_activos()
            .filter(|c| {
                c.nombre.to_lowercase().contains(&termino) || c.dni.as_str().contains(&termino)
            })
            .collect()
    }

    /// Registers a new client, enforcing DNI uniqueness.
    pub fn registrar(
        &mut self,
        dni: Dni,
        nombre: impl Into<String>,
        telefono: Telefono,
    ) -> Result<u64, DirectorioError> {
        if self.clientes.iter().any(|c| c.dni == dni) {
            return Err(DirectorioError::DniDuplicado(dni.as_str().to_string()));
        }
        let id = self.siguiente_id;
        self.siguiente_id += 1;
        self.clientes.push(Cliente::nuevo(id, dni, nombre, telefono));
        Ok(id)
    }

    /// Updates an existing client. The DNI may change, but never to one held
    /// by a different client.
    pub fn actualizar(
        &mut self,
        id: u64,
        dni: Dni,
        nombre: impl Into<String>,
        telefono: Telefono,
    ) -> Result<(), DirectorioError> {
        if self.clientes.iter().any(|c| c.dni == dni && c.id != id) {
            return Err(DirectorioError::DniDuplicado(dni.as_str().to_string()));
        }
        let cliente = self
            .clientes
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(DirectorioError::NoEncontrado(id))?;
        cliente.dni = dni;
        cliente.nombre = nombre.into();
        cliente.telefono = telefono;
        Ok(())
    }

    /// Logical deletion: the client is deactivated, never removed.
    pub fn eliminar(&mut self, id: u64) -> Result<(), DirectorioError> {
        self.cambiar_estado(id, false)
    }

    pub fn activar(&mut self, id: u64) -> Result<(), DirectorioError> {
        self.cambiar_estado(id, true)
    }

    fn cambiar_estado(&mut self, id: u64, estado: bool) -> Result<(), DirectorioError> {
        let cliente = self
            .clientes
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(DirectorioError::NoEncontrado(id))?;
        cliente.estado = estado;
        Ok(())
    }

    #[must_use]
    pub fn contar_activos(&self) -> usize {
        self.listar_activos().count()
    }
}
