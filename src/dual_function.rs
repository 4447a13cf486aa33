//! Custom keycode dispatch.
//!
//! The framework's tap/hold resolver decides whether a dual-function key was
//! tapped or held and reports the outcome on the event record; this module
//! only looks up the configured output pair and forwards the chosen code to
//! the HID layer. No timing or debounce happens here.

use crate::action::{Action, KeyAction};
use crate::event::KeyRecord;
use crate::keycode::{CustomKey, KeyCode};
use crate::light::{HSV_BLUE, HSV_GREEN, HSV_RED, RgbMatrix};
use crate::modifier::ModifierCombination;

/// The framework's HID report primitives.
pub trait KeyRegistrar {
    /// Add a keycode (plus modifiers) to the active report.
    fn register(&mut self, key: KeyCode, modifiers: ModifierCombination);
    /// Remove a keycode (plus modifiers) from the active report.
    fn unregister(&mut self, key: KeyCode, modifiers: ModifierCombination);
}

/// The two outputs of a dual-function key.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DualFunction {
    /// Emitted when the key was tapped.
    pub tap: Action,
    /// Emitted when the key was held.
    pub hold: Action,
}

const fn key(code: KeyCode) -> Action {
    Action::Key(code)
}

const fn shifted(code: KeyCode) -> Action {
    Action::KeyWithModifier(code, ModifierCombination::new_from(false, false, false, true, false))
}

const fn pair(tap: Action, hold: Action) -> DualFunction {
    DualFunction { tap, hold }
}

/// The (tap, hold) output pair of every dual-function identifier.
pub const DUAL_FUNCTIONS: [(CustomKey, DualFunction); 9] = [
    (CustomKey::DualFunc0, pair(shifted(KeyCode::Kc9), key(KeyCode::LeftBracket))),
    (CustomKey::DualFunc1, pair(shifted(KeyCode::Kc0), key(KeyCode::RightBracket))),
    (CustomKey::DualFunc2, pair(shifted(KeyCode::LeftBracket), shifted(KeyCode::Comma))),
    (CustomKey::DualFunc3, pair(shifted(KeyCode::RightBracket), shifted(KeyCode::Dot))),
    (CustomKey::DualFunc4, pair(key(KeyCode::Quote), shifted(KeyCode::Quote))),
    (CustomKey::DualFunc5, pair(key(KeyCode::Home), key(KeyCode::End))),
    (CustomKey::DualFunc6, pair(key(KeyCode::PageUp), key(KeyCode::PageDown))),
    (CustomKey::DualFunc7, pair(key(KeyCode::MediaPlayPause), key(KeyCode::MediaNextTrack))),
    (CustomKey::DualFunc8, pair(key(KeyCode::Insert), key(KeyCode::Delete))),
];

/// Look up the output pair of a dual-function identifier.
pub fn dual_function_of(key: CustomKey) -> Option<DualFunction> {
    DUAL_FUNCTIONS
        .iter()
        .find(|(candidate, _)| *candidate == key)
        .map(|(_, outputs)| *outputs)
}

fn output_codes(action: Action) -> (KeyCode, ModifierCombination) {
    match action {
        Action::Key(code) => (code, ModifierCombination::new()),
        Action::KeyWithModifier(code, modifiers) => (code, modifiers),
        // Dual-function outputs are plain or modified keycodes only.
        _ => (KeyCode::No, ModifierCombination::new()),
    }
}

/// Keycode-event hook.
///
/// Returns whether the framework's default keycode handling should still
/// run: `false` suppresses it. Anything that is not one of this keyboard's
/// custom keycodes falls through untouched.
pub fn process_key_record<R: KeyRegistrar, M: RgbMatrix>(record: &KeyRecord, hid: &mut R, rgb: &mut M) -> bool {
    let KeyAction::Single(Action::Custom(custom)) = record.action else {
        return true;
    };

    match custom {
        CustomKey::RgbSolid => {
            if record.pressed {
                rgb.set_solid_effect();
            }
            false
        }
        CustomKey::HsvRed => {
            if record.pressed {
                rgb.set_hsv(HSV_RED);
            }
            false
        }
        CustomKey::HsvGreen => {
            if record.pressed {
                rgb.set_hsv(HSV_GREEN);
            }
            false
        }
        CustomKey::HsvBlue => {
            if record.pressed {
                rgb.set_hsv(HSV_BLUE);
            }
            false
        }
        dual => {
            let Some(outputs) = dual_function_of(dual) else {
                // Not dispatched here, let the framework have it.
                return true;
            };
            // The press edge emits nothing; resolution waits for the release
            // edge, which carries the final tap/hold classification.
            if !record.pressed {
                let selected = if record.tap_count > 0 { outputs.tap } else { outputs.hold };
                let (code, modifiers) = output_codes(selected);
                debug!("dual-function key {}: tap_count={}", dual as u16, record.tap_count);
                hid.register(code, modifiers);
                hid.unregister(code, modifiers);
            }
            false
        }
    }
}
