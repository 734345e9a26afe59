//! Haptic feedback
//!
//! Vibration patterns are alternating on/off durations in milliseconds,
//! starting with "on", the shape both wrist devices and `navigator.vibrate`
//! accept.

use crate::sim::GameEvent;

/// Haptic effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Haptic {
    /// Two short buzzes
    DoublePulse,
}

impl Haptic {
    pub fn pattern(&self) -> &'static [u32] {
        match self {
            Haptic::DoublePulse => &[100, 100, 100],
        }
    }

    /// Effect for a game event, if any
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::GameOver { .. } => Some(Haptic::DoublePulse),
            _ => None,
        }
    }
}

/// Vibrate through `navigator.vibrate` (WASM only)
#[cfg(target_arch = "wasm32")]
pub fn vibrate_web(pattern: &[u32]) {
    let Some(window) = web_sys::window() else { return };
    let array = js_sys::Array::new();
    for ms in pattern {
        array.push(&wasm_bindgen::JsValue::from(*ms));
    }
    if !window.navigator().vibrate_with_pattern(&array) {
        log::warn!("Vibration unavailable");
    }
}
