// SPDX-License-Identifier: MPL-2.0
//! One-shot entry animation for cards and alerts.
//!
//! An element entering the rendered list starts invisible and offset
//! downward, holds for a short delay, then transitions to visible and
//! settled over half a second. The animation never re-triggers for the same
//! element, including when a filter hides and re-reveals it.

use std::time::{Duration, Instant};

/// Hold time before the transition starts.
pub const RETRASO: Duration = Duration::from_millis(100);

/// Length of the transition itself.
pub const DURACION: Duration = Duration::from_millis(500);

/// Initial downward offset, in logical pixels.
pub const DESPLAZAMIENTO: f32 = 20.0;

/// Progress of one element's entry, measured against a caller-provided clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryAnimation {
    inicio: Instant,
}

impl EntryAnimation {
    /// Arms the animation at the moment the element first appears.
    #[must_use]
    pub fn comenzar(now: Instant) -> Self {
        Self { inicio: now }
    }

    #[must_use]
    pub fn inicio(&self) -> Instant {
        self.inicio
    }

    /// Eased progress in `[0, 1]`: 0 through the delay, 1 once settled.
    #[must_use]
    pub fn progress(&self, now: Instant) -> f32 {
        let transcurrido = now.saturating_duration_since(self.inicio);
        if transcurrido <= RETRASO {
            return 0.0;
        }
        let avance = transcurrido - RETRASO;
        if avance >= DURACION {
            return 1.0;
        }
        ease(avance.as_secs_f32() / DURACION.as_secs_f32())
    }

    /// Current opacity of the element.
    #[must_use]
    pub fn opacity(&self, now: Instant) -> f32 {
        self.progress(now)
    }

    /// Remaining downward offset of the element.
    #[must_use]
    pub fn offset(&self, now: Instant) -> f32 {
        (1.0 - self.progress(now)) * DESPLAZAMIENTO
    }

    /// True once the element is fully settled.
    #[must_use]
    pub fn terminada(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.inicio) >= RETRASO + DURACION
    }
}

/// Smooth acceleration/deceleration curve, approximating the browser's
/// default `ease` timing function.
fn ease(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ahora() -> Instant {
        Instant::now()
    }

    #[test]
    fn hidden_during_delay() {
        let t0 = ahora();
        let anim = EntryAnimation::comenzar(t0);
        assert_eq!(anim.opacity(t0), 0.0);
        assert_eq!(anim.opacity(t0 + Duration::from_millis(50)), 0.0);
        assert_eq!(anim.offset(t0), DESPLAZAMIENTO);
    }

    #[test]
    fn partially_visible_mid_transition() {
        let t0 = ahora();
        let anim = EntryAnimation::comenzar(t0);
        let mid = t0 + RETRASO + DURACION / 2;
        let opacity = anim.opacity(mid);
        assert!(opacity > 0.0 && opacity < 1.0);
        let offset = anim.offset(mid);
        assert!(offset > 0.0 && offset < DESPLAZAMIENTO);
    }

    #[test]
    fn settled_after_delay_plus_duration() {
        let t0 = ahora();
        let anim = EntryAnimation::comenzar(t0);
        let end = t0 + RETRASO + DURACION;
        assert_eq!(anim.opacity(end), 1.0);
        assert_eq!(anim.offset(end), 0.0);
        assert!(anim.terminada(end));
    }

    #[test]
    fn progress_is_monotonic() {
        let t0 = ahora();
        let anim = EntryAnimation::comenzar(t0);
        let mut previo = -1.0f32;
        for ms in (0..700).step_by(50) {
            let p = anim.progress(t0 + Duration::from_millis(ms));
            assert!(p >= previo);
            previo = p;
        }
    }

    #[test]
    fn ease_endpoints() {
        assert_eq!(ease(0.0), 0.0);
        assert_eq!(ease(1.0), 1.0);
    }
}
