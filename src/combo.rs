//! Combo declarations.
//!
//! Combos are data only: the chord detection itself runs in the framework,
//! this crate just declares which chords exist and what they emit.

use heapless::Vec;

use crate::action::KeyAction;

/// Max number of combos.
pub const COMBO_MAX_NUM: usize = 4;
/// Max number of keys in a single combo.
pub const COMBO_MAX_LENGTH: usize = 4;

#[derive(Clone, Debug)]
pub struct Combo {
    /// The keymap actions that have to be pressed together.
    pub actions: Vec<KeyAction, COMBO_MAX_LENGTH>,
    /// The action emitted when the chord completes.
    pub output: KeyAction,
    /// Restrict the combo to one layer, `None` means any layer.
    pub layer: Option<u8>,
}

impl Default for Combo {
    fn default() -> Self {
        Self::empty()
    }
}

impl Combo {
    pub fn new<I: IntoIterator<Item = KeyAction>>(actions: I, output: KeyAction, layer: Option<u8>) -> Self {
        Self {
            actions: Vec::from_iter(actions),
            output,
            layer,
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::<KeyAction, COMBO_MAX_LENGTH>::new(), KeyAction::No, None)
    }
}
