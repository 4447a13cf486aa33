pub mod common;

use voyager_keymap::action::{Action, KeyAction};
use voyager_keymap::keycode::KeyCode;
use voyager_keymap::keymap::{self, COL, NUM_KEYS, NUM_LAYER, ROW, get_default_combos, get_default_keymap};
use voyager_keymap::modifier::{GUI, SHIFT};
use voyager_keymap::{k, lt, mt, shifted};

/// Row 4 only carries the four thumb keys per half; everything else is
/// padding and must stay `No` so the framework never renders a phantom key.
fn is_thumb(col: usize) -> bool {
    (4..8).contains(&col)
}

#[test]
fn keymap_shape_matches_the_wiring() {
    let keymap = get_default_keymap();
    assert_eq!(keymap.len(), NUM_LAYER);
    for layer in &keymap {
        assert_eq!(layer.len(), ROW);
        for row in layer {
            assert_eq!(row.len(), COL);
        }
    }
}

#[test]
fn every_layer_has_exactly_the_physical_keys() {
    for (i, layer) in get_default_keymap().iter().enumerate() {
        let mut populated = 0;
        for (r, row) in layer.iter().enumerate() {
            for (c, action) in row.iter().enumerate() {
                if r == ROW - 1 && !is_thumb(c) {
                    assert_eq!(*action, KeyAction::No, "layer {i} row {r} col {c} is not a physical key");
                } else {
                    populated += 1;
                }
            }
        }
        assert_eq!(populated, NUM_KEYS, "layer {i}");
    }
}

#[test]
fn base_layer_home_row_mods() {
    let base = &get_default_keymap()[keymap::BASE as usize];
    assert_eq!(base[2][1], mt!(A, GUI));
    assert_eq!(base[2][4], mt!(F, SHIFT));
    // Mirrored on the right half.
    assert_eq!(base[2][7], mt!(J, SHIFT));
    assert_eq!(base[2][10], mt!(Semicolon, GUI));
}

#[test]
fn base_layer_thumbs_are_layer_taps() {
    let base = &get_default_keymap()[keymap::BASE as usize];
    assert_eq!(base[4][4], lt!(1, Backspace));
    assert_eq!(base[4][5], lt!(2, Space));
    assert_eq!(base[4][6], lt!(3, Enter));
    assert_eq!(base[4][7], lt!(4, Delete));
}

#[test]
fn system_layer_is_reached_from_the_grave_key() {
    let base = &get_default_keymap()[keymap::BASE as usize];
    assert_eq!(base[2][0], lt!(5, Grave));
}

#[test]
fn layer_switch_targets_exist() {
    for layer in get_default_keymap() {
        for row in layer {
            for action in row {
                let (first, second) = match action {
                    KeyAction::Single(a) => (a, Action::No),
                    KeyAction::TapHold(tap, hold) => (tap, hold),
                    _ => continue,
                };
                for inner in [first, second] {
                    if let Action::LayerOn(n) | Action::LayerToggle(n) | Action::LayerToggleOnly(n) | Action::DefaultLayer(n) = inner {
                        assert!((n as usize) < NUM_LAYER, "{action:?} targets a missing layer");
                    }
                }
            }
        }
    }
}

#[test]
fn combos_chord_base_layer_keys() {
    let config = get_default_combos();
    assert_eq!(config.combos.len(), 4);

    let base = &get_default_keymap()[keymap::BASE as usize];
    for combo in &config.combos {
        assert_eq!(combo.layer, Some(keymap::BASE));
        for action in &combo.actions {
            assert!(
                base.iter().flatten().any(|a| a == action),
                "{action:?} is not on the base layer"
            );
        }
    }

    assert_eq!(config.combos[0].output, k!(Escape));
    assert_eq!(config.combos[3].output, shifted!(Minus));
}

#[test]
fn shifted_macro_carries_the_shift_modifier() {
    let KeyAction::Single(Action::KeyWithModifier(code, modifiers)) = shifted!(Kc9) else {
        panic!("shifted! should expand to a modified key");
    };
    assert_eq!(code, KeyCode::Kc9);
    assert!(modifiers.shift());
    assert!(!modifiers.ctrl() && !modifiers.alt() && !modifiers.gui());
}
