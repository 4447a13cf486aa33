//! The layer tables for this keyboard.
//!
//! The Voyager has 52 physical keys: per half, four rows of six columns plus
//! two thumb keys. They are arranged here on a 5x12 grid; the thumb keys sit
//! on row 4, columns 4-7, and the unused row-4 cells are `KeyAction::No`.
//!
//! Layers:
//! - 0 `BASE`: QWERTY with home row mods and layer taps on the thumbs
//! - 1 `SYM`: symbols and brackets, including the paired dual-function keys
//! - 2 `NAV`: arrows, Home/End and paging
//! - 3 `NUM`: function keys and a number pad
//! - 4 `MEDIA`: volume, transport and screen brightness
//! - 5 `SYS`: RGB control and layer switches, reached by holding the
//!   backtick key
//! - 6 `MOUSE`: mouse cursor, wheel and acceleration keys

use crate::action::KeyAction;
use crate::combo::Combo;
use crate::config::CombosConfig;
use crate::modifier::{ALT, CTRL, GUI, SHIFT};
use crate::{a, custom, k, layer, lt, mt, osm, shifted, tg, to};

pub const ROW: usize = 5;
pub const COL: usize = 12;
pub const NUM_LAYER: usize = 7;
/// Number of physical keys (and LEDs).
pub const NUM_KEYS: usize = 52;

pub const BASE: u8 = 0;
pub const SYM: u8 = 1;
pub const NAV: u8 = 2;
pub const NUM: u8 = 3;
pub const MEDIA: u8 = 4;
pub const SYS: u8 = 5;
pub const MOUSE: u8 = 6;

#[rustfmt::skip]
pub const fn get_default_keymap() -> [[[KeyAction; COL]; ROW]; NUM_LAYER] {
    [
        // Layer 0: BASE
        layer!([
            [k!(Escape), k!(Kc1), k!(Kc2), k!(Kc3), k!(Kc4), k!(Kc5), k!(Kc6), k!(Kc7), k!(Kc8), k!(Kc9), k!(Kc0), k!(Minus)],
            [k!(Tab), k!(Q), k!(W), k!(E), k!(R), k!(T), k!(Y), k!(U), k!(I), k!(O), k!(P), k!(Backslash)],
            [lt!(5, Grave), mt!(A, GUI), mt!(S, ALT), mt!(D, CTRL), mt!(F, SHIFT), k!(G), k!(H), mt!(J, SHIFT), mt!(K, CTRL), mt!(L, ALT), mt!(Semicolon, GUI), k!(Quote)],
            [k!(LShift), k!(Z), k!(X), k!(C), k!(V), k!(B), k!(N), k!(M), k!(Comma), k!(Dot), k!(Slash), k!(RShift)],
            [a!(No), a!(No), a!(No), a!(No), lt!(1, Backspace), lt!(2, Space), lt!(3, Enter), lt!(4, Delete), a!(No), a!(No), a!(No), a!(No)]
        ]),
        // Layer 1: SYM
        layer!([
            [a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent)],
            [a!(Transparent), shifted!(Kc1), shifted!(Kc2), shifted!(Kc3), shifted!(Kc4), shifted!(Kc5), shifted!(Kc6), shifted!(Kc7), shifted!(Kc8), custom!(DualFunc0), custom!(DualFunc1), a!(Transparent)],
            [a!(Transparent), custom!(DualFunc2), custom!(DualFunc3), custom!(DualFunc4), k!(Minus), shifted!(Minus), k!(Equal), shifted!(Equal), k!(LeftBracket), k!(RightBracket), k!(Semicolon), a!(Transparent)],
            [a!(Transparent), k!(Grave), shifted!(Grave), k!(Backslash), shifted!(Backslash), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(Transparent)],
            [a!(No), a!(No), a!(No), a!(No), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(No), a!(No), a!(No), a!(No)]
        ]),
        // Layer 2: NAV
        layer!([
            [a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent)],
            [a!(Transparent), a!(No), a!(No), a!(No), a!(No), a!(No), custom!(DualFunc6), custom!(DualFunc5), custom!(DualFunc8), a!(No), a!(No), a!(Transparent)],
            [a!(Transparent), k!(LGui), k!(LAlt), k!(LCtrl), k!(LShift), a!(No), k!(Left), k!(Down), k!(Up), k!(Right), a!(No), a!(Transparent)],
            [a!(Transparent), osm!(SHIFT), a!(No), a!(No), a!(No), tg!(6), a!(No), a!(No), a!(No), a!(No), a!(No), a!(Transparent)],
            [a!(No), a!(No), a!(No), a!(No), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(No), a!(No), a!(No), a!(No)]
        ]),
        // Layer 3: NUM
        layer!([
            [a!(Transparent), k!(F1), k!(F2), k!(F3), k!(F4), k!(F5), k!(F6), k!(F7), k!(F8), k!(F9), k!(F10), a!(Transparent)],
            [a!(Transparent), k!(F11), k!(F12), a!(No), a!(No), a!(No), a!(No), k!(Kc7), k!(Kc8), k!(Kc9), a!(No), a!(Transparent)],
            [a!(Transparent), k!(LGui), k!(LAlt), k!(LCtrl), k!(LShift), a!(No), a!(No), k!(Kc4), k!(Kc5), k!(Kc6), k!(Kc0), a!(Transparent)],
            [a!(Transparent), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), k!(Kc1), k!(Kc2), k!(Kc3), k!(Dot), a!(Transparent)],
            [a!(No), a!(No), a!(No), a!(No), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(No), a!(No), a!(No), a!(No)]
        ]),
        // Layer 4: MEDIA
        layer!([
            [a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent)],
            [a!(Transparent), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), k!(AudioVolDown), k!(AudioVolUp), k!(AudioMute), a!(No), a!(Transparent)],
            [a!(Transparent), a!(No), a!(No), a!(No), a!(No), a!(No), k!(MediaPrevTrack), custom!(DualFunc7), k!(MediaNextTrack), a!(No), a!(No), a!(Transparent)],
            [a!(Transparent), k!(BrightnessDown), k!(BrightnessUp), a!(No), a!(No), a!(No), a!(No), k!(MediaStop), a!(No), a!(No), a!(No), a!(Transparent)],
            [a!(No), a!(No), a!(No), a!(No), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(No), a!(No), a!(No), a!(No)]
        ]),
        // Layer 5: SYS
        layer!([
            [a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No)],
            [a!(No), custom!(RgbSolid), custom!(HsvRed), custom!(HsvGreen), custom!(HsvBlue), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No)],
            [a!(No), to!(0), tg!(6), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No)],
            [a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No)],
            [a!(No), a!(No), a!(No), a!(No), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(No), a!(No), a!(No), a!(No)]
        ]),
        // Layer 6: MOUSE
        layer!([
            [a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No)],
            [a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), k!(MouseBtn1), k!(MouseUp), k!(MouseBtn2), k!(MouseWheelUp), a!(No)],
            [a!(No), k!(MouseAccel0), k!(MouseAccel1), k!(MouseAccel2), a!(No), a!(No), a!(No), k!(MouseLeft), k!(MouseDown), k!(MouseRight), k!(MouseWheelDown), a!(No)],
            [a!(No), tg!(6), a!(No), a!(No), a!(No), a!(No), a!(No), k!(MouseBtn3), a!(No), a!(No), a!(No), a!(No)],
            [a!(No), a!(No), a!(No), a!(No), k!(MouseBtn1), k!(MouseBtn2), to!(0), a!(No), a!(No), a!(No), a!(No), a!(No)]
        ]),
    ]
}

/// The four chords this keyboard defines, all on the base layer.
pub fn get_default_combos() -> CombosConfig {
    CombosConfig {
        combos: heapless::Vec::from_iter([
            Combo::new([k!(Q), k!(W)], k!(Escape), Some(BASE)),
            Combo::new([k!(C), k!(V)], k!(Tab), Some(BASE)),
            Combo::new([k!(N), k!(M)], k!(Enter), Some(BASE)),
            Combo::new([k!(Comma), k!(Dot)], shifted!(Minus), Some(BASE)),
        ]),
        ..CombosConfig::default()
    }
}
