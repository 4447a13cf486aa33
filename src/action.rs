//! Keyboard actions.
//!
//! [`Action`] is a single operation the keyboard can execute; [`KeyAction`]
//! is what a keymap position stores, which may compose two actions (tap
//! and hold). Both are immutable data: all resolution (layer stack, tap/hold
//! classification) happens in the firmware framework.

use crate::keycode::{CustomKey, KeyCode};
use crate::modifier::ModifierCombination;

/// A single basic action that the keyboard can execute.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Action {
    /// Default action, no action.
    No,
    /// Transparent action, next active layer will be checked.
    Transparent,
    /// A normal key stroke.
    Key(KeyCode),
    /// Key stroke with modifier combination triggered.
    KeyWithModifier(KeyCode, ModifierCombination),
    /// Modifier combination, used for modifier-hold actions.
    Modifier(ModifierCombination),
    /// Activate a layer while held.
    LayerOn(u8),
    /// Toggle a layer.
    LayerToggle(u8),
    /// Activate a layer and deactivate all other layers (except the default
    /// layer).
    LayerToggleOnly(u8),
    /// Set the default layer.
    DefaultLayer(u8),
    /// Oneshot modifier, kept active until the next key is triggered.
    OneShotModifier(ModifierCombination),
    /// A keyboard-specific keycode, resolved by this crate's keycode hook.
    Custom(CustomKey),
}

/// A KeyAction is the action at a keyboard position, stored in the keymap.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeyAction {
    /// No action.
    No,
    /// Transparent action, the next active layer will be checked.
    Transparent,
    /// A single action, triggered when pressed and cancelled when released.
    Single(Action),
    /// Tap action when tapped, hold action when held; classification is done
    /// by the framework's tap/hold resolver.
    TapHold(Action, Action),
}

impl KeyAction {
    /// Convert `KeyAction` to the inner `Action`.
    /// Only valid for the `Single` variant, returns `Action::No` otherwise.
    pub fn to_action(self) -> Action {
        match self {
            KeyAction::Single(a) => a,
            _ => Action::No,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, KeyAction::No)
    }
}
