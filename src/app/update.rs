// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.

use super::{App, Message, Screen};
use crate::error::DirectorioError;
use crate::ui::alerts::Alert;
use crate::ui::clientes::{form, lista};
use iced::Task;
use std::time::Instant;

impl App {
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Lista(m) => {
                let evento = self.lista.update(m, Instant::now());
                self.handle_lista_event(evento);
            }
            Message::Form(m) => {
                if let Some(estado) = &mut self.form {
                    match estado.update(m) {
                        form::Event::Enviar => {
                            estado.comenzar_guardado(&self.i18n, Instant::now());
                        }
                        form::Event::Cancelar => {
                            self.cerrar_formulario();
                        }
                        form::Event::None => {}
                    }
                }
            }
            Message::Alert(m) => {
                self.alerts.handle_message(&m);
            }
            Message::Notification(m) => {
                self.notifications.handle_message(&m);
            }
            Message::Tick(now) => {
                self.tick(now);
            }
        }

        Task::none()
    }

    fn handle_lista_event(&mut self, evento: lista::Event) {
        match evento {
            lista::Event::None => {}
            lista::Event::Nuevo => {
                self.form = Some(form::State::nuevo(&self.i18n));
                self.screen = Screen::Formulario;
            }
            lista::Event::Editar(id) => {
                // An id that vanished between render and click is a no-op
                if let Some(cliente) = self.directorio.buscar_por_id(id) {
                    self.form = Some(form::State::editar(cliente, &self.i18n));
                    self.screen = Screen::Formulario;
                }
            }
            lista::Event::Eliminar(id) => {
                self.confirmar_eliminacion(id);
            }
        }
    }

    /// Presents the blocking confirmation dialog and, on acceptance,
    /// performs the logical deletion. Declining cancels the action entirely.
    fn confirmar_eliminacion(&mut self, id: u64) {
        let titulo = self.i18n.tr("confirm-titulo");
        let mensaje = self.i18n.tr("confirm-eliminar");

        if !self.confirmador.confirmar(&titulo, &mensaje) {
            return;
        }

        match self.directorio.eliminar(id) {
            Ok(()) => {
                self.alerts.push(Alert::success("alerta-cliente-desactivado"));
            }
            Err(err) => {
                self.alerts.push(Alert::danger(err.i18n_key()));
            }
        }
    }

    /// One pass of every timed behavior.
    fn tick(&mut self, now: Instant) {
        self.ultimo_tick = now;

        self.alerts.tick(now);
        self.notifications.tick(now);

        if self.lista.poll_busqueda(now).is_some() {
            self.lista.sincronizar_entradas(&self.directorio, now);
        }

        self.completar_guardado(now);
    }

    /// Finishes an in-flight save once its feedback window has elapsed.
    fn completar_guardado(&mut self, now: Instant) {
        let Some(estado) = &mut self.form else {
            return;
        };
        let Some((id, dni, nombre, telefono)) = estado.guardado_listo(now) else {
            return;
        };

        estado.terminar_guardado();

        let resultado = match id {
            None => self
                .directorio
                .registrar(dni, nombre, telefono)
                .map(|_| "alerta-cliente-registrado"),
            Some(id) => self
                .directorio
                .actualizar(id, dni, nombre, telefono)
                .map(|()| "alerta-cliente-actualizado"),
        };

        match resultado {
            Ok(clave) => {
                self.alerts.push(Alert::success(clave));
                self.cerrar_formulario();
                self.lista.sincronizar_entradas(&self.directorio, now);
            }
            Err(err) => {
                let mut alerta = Alert::danger(err.i18n_key());
                if let DirectorioError::DniDuplicado(dni) = &err {
                    alerta = alerta.with_arg("dni", dni);
                }
                self.alerts.push(alerta);
            }
        }
    }

    fn cerrar_formulario(&mut self) {
        self.form = None;
        self.screen = Screen::Clientes;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::clientes::form::CARGA_MINIMA;
    use crate::ui::confirm::stub::ConfirmadorFijo;
    use std::time::Duration;

    fn app_con_confirmacion(respuesta: bool) -> App {
        let mut app = App::default();
        app.set_confirmador(Box::new(ConfirmadorFijo::new(respuesta)));
        app
    }

    fn primer_id(app: &App) -> u64 {
        app.directorio.listar_activos().next().unwrap().id
    }

    #[test]
    fn declining_the_dialog_cancels_the_deletion() {
        let mut app = app_con_confirmacion(false);
        let id = primer_id(&app);
        let activos = app.directorio.contar_activos();

        let _ = app.update(Message::Lista(lista::Message::Eliminar(id)));

        assert_eq!(app.directorio.contar_activos(), activos);
        assert!(app.alerts.is_empty());
    }

    #[test]
    fn accepting_the_dialog_deactivates_and_flashes() {
        let mut app = app_con_confirmacion(true);
        let id = primer_id(&app);
        let activos = app.directorio.contar_activos();

        let _ = app.update(Message::Lista(lista::Message::Eliminar(id)));

        assert_eq!(app.directorio.contar_activos(), activos - 1);
        assert_eq!(app.alerts.len(), 1);
        // Logical deletion: the record is still there, inactive
        assert!(!app.directorio.buscar_por_id(id).unwrap().estado);
    }

    #[test]
    fn deleting_an_unknown_id_flashes_an_error() {
        let mut app = app_con_confirmacion(true);

        let _ = app.update(Message::Lista(lista::Message::Eliminar(9999)));

        assert_eq!(app.alerts.len(), 1);
        let alerta = app.alerts.iter().next().unwrap();
        assert_eq!(alerta.message_key(), "error-cliente-no-encontrado");
    }

    #[test]
    fn nuevo_opens_the_form_screen() {
        let mut app = app_con_confirmacion(true);
        let _ = app.update(Message::Lista(lista::Message::Nuevo));
        assert_eq!(app.screen, Screen::Formulario);
        assert!(app.form.is_some());
    }

    #[test]
    fn save_flow_registers_the_client_and_returns_to_the_list() {
        let mut app = app_con_confirmacion(true);
        let antes = app.directorio.contar_activos();

        let _ = app.update(Message::Lista(lista::Message::Nuevo));
        let _ = app.update(Message::Form(form::Message::NombreCambiado(
            "Nuevo Cliente".into(),
        )));
        let _ = app.update(Message::Form(form::Message::DniCambiado("87654321".into())));
        let _ = app.update(Message::Form(form::Message::TelefonoCambiado(
            "912312312".into(),
        )));
        let _ = app.update(Message::Form(form::Message::Enviar));
        assert!(app.form.as_ref().unwrap().esta_guardando());

        // The save completes on the first tick past the feedback window
        let _ = app.update(Message::Tick(Instant::now() + CARGA_MINIMA));

        assert_eq!(app.screen, Screen::Clientes);
        assert!(app.form.is_none());
        assert_eq!(app.directorio.contar_activos(), antes + 1);
        assert_eq!(app.alerts.len(), 1);
    }

    #[test]
    fn duplicate_dni_keeps_the_form_open_with_an_error() {
        let mut app = app_con_confirmacion(true);
        let dni_existente = app
            .directorio
            .listar_activos()
            .next()
            .unwrap()
            .dni
            .as_str()
            .to_string();

        let _ = app.update(Message::Lista(lista::Message::Nuevo));
        let _ = app.update(Message::Form(form::Message::NombreCambiado("Alguien".into())));
        let _ = app.update(Message::Form(form::Message::DniCambiado(dni_existente)));
        let _ = app.update(Message::Form(form::Message::TelefonoCambiado(
            "912312312".into(),
        )));
        let _ = app.update(Message::Form(form::Message::Enviar));
        let _ = app.update(Message::Tick(Instant::now() + CARGA_MINIMA));

        assert_eq!(app.screen, Screen::Formulario);
        assert!(app.form.is_some());
        // The failed save released the loading state
        assert!(!app.form.as_ref().unwrap().esta_guardando());
        let alerta = app.alerts.iter().next().unwrap();
        assert_eq!(alerta.message_key(), "error-dni-duplicado");
    }

    #[test]
    fn invalid_form_never_reaches_the_directory() {
        let mut app = app_con_confirmacion(true);
        let antes = app.directorio.contar_activos();

        let _ = app.update(Message::Lista(lista::Message::Nuevo));
        let _ = app.update(Message::Form(form::Message::DniCambiado("12".into())));
        let _ = app.update(Message::Form(form::Message::Enviar));
        let _ = app.update(Message::Tick(
            Instant::now() + CARGA_MINIMA + Duration::from_secs(1),
        ));

        assert_eq!(app.screen, Screen::Formulario);
        assert_eq!(app.directorio.contar_activos(), antes);
    }

    #[test]
    fn cancel_returns_to_the_list_without_saving() {
        let mut app = app_con_confirmacion(true);
        let antes = app.directorio.contar_activos();

        let _ = app.update(Message::Lista(lista::Message::Nuevo));
        let _ = app.update(Message::Form(form::Message::Cancelar));

        assert_eq!(app.screen, Screen::Clientes);
        assert!(app.form.is_none());
        assert_eq!(app.directorio.contar_activos(), antes);
    }
}
