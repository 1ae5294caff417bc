// SPDX-License-Identifier: MPL-2.0
//! Integration tests for the page behaviors: masking, debounce, alert
//! expiry, loading pairing, toast lifecycle, and the directory rules.

use sabor_gourmet::config::ALERT_TIMEOUT_MS;
use sabor_gourmet::domain::{formato, Directorio, Dni, Telefono};
use sabor_gourmet::ui::alerts::{Alert, Stack};
use sabor_gourmet::ui::notifications::{Manager, Notification, Severity};
use sabor_gourmet::ui::search::{Debounce, QUIET_PERIOD};
use sabor_gourmet::ui::widgets::LoadingButton;
use std::time::{Duration, Instant};

#[test]
fn dni_field_masks_to_digits_capped_at_eight() {
    assert_eq!(Dni::mask("abc123de456"), "123456");
    assert_eq!(Dni::mask("123456789"), "12345678");
}

#[test]
fn telefono_field_masks_to_digits_capped_at_nine() {
    assert_eq!(Telefono::mask("9a8b7c6d5e4f"), "987654");
    assert_eq!(Telefono::mask("123456789X1"), "123456789");
}

#[test]
fn masking_does_not_validate_length() {
    // Six digits survive the mask untouched; only parse enforces length
    let masked = Telefono::mask("987654");
    assert_eq!(masked, "987654");
    assert!(Telefono::parse(&masked).is_none());
}

#[test]
fn two_keystrokes_within_the_quiet_period_emit_once() {
    let t0 = Instant::now();
    let mut debounce = Debounce::new();

    debounce.input("pa", t0);
    debounce.input("par", t0 + Duration::from_millis(300));

    let mut emisiones = Vec::new();
    let mut reloj = t0;
    while reloj < t0 + Duration::from_secs(2) {
        if let Some(valor) = debounce.poll(reloj) {
            emisiones.push(valor);
        }
        reloj += Duration::from_millis(100);
    }

    assert_eq!(emisiones, vec!["par".to_string()]);
}

#[test]
fn alerts_expire_within_a_bounded_window() {
    let mut stack = Stack::new();
    let alerta = Alert::success("alerta-cliente-registrado");
    let creada = alerta.created_at();
    stack.push(alerta);

    // Simulated 100ms tick cadence: gone no later than one tick past expiry
    let mut reloj = creada;
    let limite = creada + Duration::from_millis(ALERT_TIMEOUT_MS + 100);
    while !stack.is_empty() && reloj <= limite {
        reloj += Duration::from_millis(100);
        stack.tick(reloj);
    }

    assert!(stack.is_empty());
    assert!(reloj <= limite);
}

#[test]
fn permanent_alerts_outlive_the_window() {
    let mut stack = Stack::new();
    let alerta = Alert::danger("error-cliente-no-encontrado").permanente();
    let creada = alerta.created_at();
    stack.push(alerta);

    stack.tick(creada + Duration::from_secs(120));
    assert_eq!(stack.len(), 1);
}

#[test]
fn loading_toggle_restores_the_exact_label() {
    let mut boton = LoadingButton::new("Submit");

    boton.comenzar_carga("Cargando...");
    assert!(boton.esta_cargando());
    assert_eq!(boton.etiqueta(), "Cargando...");

    boton.terminar_carga();
    assert!(!boton.esta_cargando());
    assert_eq!(boton.etiqueta(), "Submit");
}

#[test]
fn toast_without_explicit_severity_is_info_and_self_removes() {
    let notification = Notification::new(Severity::default(), "alerta-cliente-registrado");
    assert_eq!(notification.severity(), Severity::Info);

    let mut manager = Manager::new();
    let expiry = notification.created_at() + Duration::from_secs(3);
    manager.push(notification);
    assert_eq!(manager.visible_count(), 1);

    manager.tick(expiry);
    assert_eq!(manager.visible_count(), 0);
    assert!(!manager.has_notifications());
}

#[test]
fn directory_search_matches_name_and_dni() {
    let dir = Directorio::con_datos_de_ejemplo();

    assert_eq!(dir.buscar("torres").len(), 1);
    assert_eq!(dir.buscar("0771").len(), 1);
    assert!(dir.buscar("no-existe").is_empty());
    assert_eq!(dir.buscar("").len(), dir.contar_activos());
}

#[test]
fn directory_enforces_dni_uniqueness_across_clients() {
    let mut dir = Directorio::con_datos_de_ejemplo();
    let dni = Dni::parse("45871236").expect("valid dni");
    let telefono = Telefono::parse("900000000").expect("valid phone");

    assert!(dir.registrar(dni, "Duplicado", telefono).is_err());
}

#[test]
fn counter_formats_with_peruvian_separators() {
    assert_eq!(formato::miles(1_234_567), "1,234,567");
    assert_eq!(formato::miles(999), "999");
}
