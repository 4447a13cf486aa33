pub mod common;

use common::{HidOp, MockHid, MockRgb, RgbOp};
use voyager_keymap::action::{Action, KeyAction};
use voyager_keymap::dual_function::{DUAL_FUNCTIONS, dual_function_of, process_key_record};
use voyager_keymap::event::KeyRecord;
use voyager_keymap::keycode::{CustomKey, KeyCode};
use voyager_keymap::keymap::get_default_keymap;
use voyager_keymap::modifier::ModifierCombination;
use voyager_keymap::{custom, k};

fn codes_of(action: Action) -> (KeyCode, ModifierCombination) {
    match action {
        Action::Key(code) => (code, ModifierCombination::new()),
        Action::KeyWithModifier(code, modifiers) => (code, modifiers),
        other => panic!("dual-function output is not a keycode: {other:?}"),
    }
}

fn run_press_release(key: CustomKey, tap_count: u8) -> (MockHid, bool, bool) {
    let mut hid = MockHid::default();
    let mut rgb = MockRgb::default();
    let action = KeyAction::Single(Action::Custom(key));
    let pressed = process_key_record(&KeyRecord::press(action, tap_count), &mut hid, &mut rgb);
    assert!(hid.ops.is_empty(), "the press edge of {key:?} must emit nothing");
    let released = process_key_record(&KeyRecord::release(action, tap_count), &mut hid, &mut rgb);
    assert!(rgb.ops.is_empty(), "dual-function keys must not touch the matrix");
    (hid, pressed, released)
}

#[test]
fn tap_registers_and_unregisters_the_tap_code() {
    for (key, outputs) in DUAL_FUNCTIONS {
        let (hid, pressed, released) = run_press_release(key, 1);
        let (code, modifiers) = codes_of(outputs.tap);
        assert_eq!(
            hid.ops,
            vec![HidOp::Register(code, modifiers), HidOp::Unregister(code, modifiers)],
            "wrong tap output for {key:?}"
        );
        assert!(!pressed, "press of {key:?} must suppress default handling");
        assert!(!released, "release of {key:?} must suppress default handling");
    }
}

#[test]
fn hold_registers_and_unregisters_the_hold_code() {
    for (key, outputs) in DUAL_FUNCTIONS {
        let (hid, pressed, released) = run_press_release(key, 0);
        let (code, modifiers) = codes_of(outputs.hold);
        assert_eq!(
            hid.ops,
            vec![HidOp::Register(code, modifiers), HidOp::Unregister(code, modifiers)],
            "wrong hold output for {key:?}"
        );
        assert!(!pressed);
        assert!(!released);
    }
}

#[test]
fn paired_bracket_key_tap_is_shifted_nine() {
    let outputs = dual_function_of(CustomKey::DualFunc0).unwrap();
    let (code, modifiers) = codes_of(outputs.tap);
    assert_eq!(code, KeyCode::Kc9);
    assert!(modifiers.shift());
    let (code, modifiers) = codes_of(outputs.hold);
    assert_eq!(code, KeyCode::LeftBracket);
    assert!(modifiers.is_empty());
}

#[test]
fn non_custom_keys_fall_through() {
    let mut hid = MockHid::default();
    let mut rgb = MockRgb::default();
    for action in [k!(A), k!(Space), KeyAction::No, KeyAction::Transparent] {
        assert!(process_key_record(&KeyRecord::press(action, 0), &mut hid, &mut rgb));
        assert!(process_key_record(&KeyRecord::release(action, 1), &mut hid, &mut rgb));
    }
    assert!(hid.ops.is_empty());
    assert!(rgb.ops.is_empty());
}

#[test]
fn rgb_custom_keys_drive_the_matrix_on_press_only() {
    let cases = [
        (custom!(RgbSolid), RgbOp::SolidEffect),
        (custom!(HsvRed), RgbOp::SetHsv(0, 255, 255)),
        (custom!(HsvGreen), RgbOp::SetHsv(74, 255, 255)),
        (custom!(HsvBlue), RgbOp::SetHsv(169, 255, 255)),
    ];
    for (action, expected) in cases {
        let mut hid = MockHid::default();
        let mut rgb = MockRgb::default();
        assert!(!process_key_record(&KeyRecord::press(action, 0), &mut hid, &mut rgb));
        assert!(!process_key_record(&KeyRecord::release(action, 0), &mut hid, &mut rgb));
        assert_eq!(rgb.ops, vec![expected]);
        assert!(hid.ops.is_empty(), "RGB keys must not emit HID codes");
    }
}

#[test]
fn every_dual_function_key_in_the_keymap_has_an_output_pair() {
    let mut seen = 0;
    for layer in get_default_keymap() {
        for row in layer {
            for position in row {
                if let KeyAction::Single(Action::Custom(key)) = position
                    && key.is_dual_function()
                {
                    assert!(
                        dual_function_of(key).is_some(),
                        "{key:?} is in the keymap but has no dispatch entry"
                    );
                    seen += 1;
                }
            }
        }
    }
    assert_eq!(seen, DUAL_FUNCTIONS.len(), "every identifier should be placed exactly once");
}
