// SPDX-License-Identifier: MPL-2.0
//! Trailing debounce for the live search field.
//!
//! A single-slot cancellable delayed task: every keystroke re-arms the slot
//! with the latest value, implicitly cancelling whatever was pending. The
//! slot fires once the quiet period elapses, so a burst of keystrokes
//! produces exactly one emission carrying the final value.

use crate::config::SEARCH_DEBOUNCE_MS;
use std::time::{Duration, Instant};

/// Quiet period after the last keystroke before the value is emitted.
pub const QUIET_PERIOD: Duration = Duration::from_millis(SEARCH_DEBOUNCE_MS);

#[derive(Debug, Clone)]
struct Pending {
    valor: String,
    armado_en: Instant,
}

/// Single-slot trailing debounce.
#[derive(Debug, Clone, Default)]
pub struct Debounce {
    pendiente: Option<Pending>,
}

impl Debounce {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a keystroke: the slot is re-armed with the new value and the
    /// previous pending emission, if any, is discarded.
    pub fn input(&mut self, valor: impl Into<String>, now: Instant) {
        self.pendiente = Some(Pending {
            valor: valor.into(),
            armado_en: now,
        });
    }

    /// Emits the pending value when the quiet period has elapsed as of
    /// `now`. At most one emission per armed slot.
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        let elapsed = now.saturating_duration_since(self.pendiente.as_ref()?.armado_en);
        if elapsed >= QUIET_PERIOD {
            self.pendiente.take().map(|p| p.valor)
        } else {
            None
        }
    }

    /// True while an emission is pending.
    #[must_use]
    pub fn armado(&self) -> bool {
        self.pendiente.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emits_after_the_quiet_period() {
        let t0 = Instant::now();
        let mut debounce = Debounce::new();
        debounce.input("mar", t0);

        assert_eq!(debounce.poll(t0 + QUIET_PERIOD), Some("mar".to_string()));
        assert!(!debounce.armado());
    }

    #[test]
    fn does_not_emit_early() {
        let t0 = Instant::now();
        let mut debounce = Debounce::new();
        debounce.input("mar", t0);

        assert_eq!(debounce.poll(t0 + QUIET_PERIOD / 2), None);
        assert!(debounce.armado());
    }

    #[test]
    fn second_keystroke_supersedes_the_first() {
        let t0 = Instant::now();
        let mut debounce = Debounce::new();
        debounce.input("mar", t0);
        debounce.input("mari", t0 + Duration::from_millis(200));

        // The first slot's deadline passes without an emission
        assert_eq!(debounce.poll(t0 + QUIET_PERIOD), None);

        // Exactly one emission, carrying the value at the second keystroke
        let fired = debounce.poll(t0 + Duration::from_millis(200) + QUIET_PERIOD);
        assert_eq!(fired, Some("mari".to_string()));
        assert_eq!(debounce.poll(t0 + Duration::from_secs(10)), None);
    }

    #[test]
    fn poll_without_input_is_quiet() {
        let mut debounce = Debounce::new();
        assert_eq!(debounce.poll(Instant::now()), None);
    }
}
