//! Per-layer LED color tables.
//!
//! LED indices follow the Voyager's wiring: the left half is 0-25 (rows top
//! to bottom, six per row, thumb keys at 24 and 25), the right half is 26-51
//! in the same order (thumb keys at 50 and 51).
//!
//! An all-zero entry is the "LED off" sentinel, not a rendered black: the
//! colorizer skips the HSV conversion for it entirely.

use smart_leds::hsv::Hsv;

use crate::keymap;

/// Number of LEDs in the matrix, one per key.
pub const LED_COUNT: usize = keymap::NUM_KEYS;

const fn hsv(hue: u8, sat: u8, val: u8) -> Hsv {
    Hsv { hue, sat, val }
}

/// "LED off" sentinel.
pub const OFF: Hsv = hsv(0, 0, 0);

// Base layer: home row mods in amber, thumb cluster in blue.
const HOME_ROW: Hsv = hsv(35, 255, 255);
const THUMB: Hsv = hsv(169, 255, 255);

// Symbol layer accents.
const NUM_ROW: Hsv = hsv(139, 237, 161);
const SYMBOL: Hsv = hsv(85, 203, 158);
const DUAL: Hsv = hsv(14, 255, 255);

// System layer: each RGB key shows the color it applies.
const WHITE: Hsv = hsv(0, 0, 255);
const RED: Hsv = hsv(0, 255, 255);
const GREEN: Hsv = hsv(74, 255, 255);
const BLUE: Hsv = hsv(169, 255, 255);
const YELLOW: Hsv = hsv(43, 255, 255);
const PURPLE: Hsv = hsv(210, 255, 255);

#[rustfmt::skip]
static BASE_COLORS: [Hsv; LED_COUNT] = [
    // left half
    OFF,      OFF,      OFF,      OFF,      OFF,      OFF,
    OFF,      OFF,      OFF,      OFF,      OFF,      OFF,
    OFF,      HOME_ROW, HOME_ROW, HOME_ROW, HOME_ROW, OFF,
    OFF,      OFF,      OFF,      OFF,      OFF,      OFF,
    THUMB,    THUMB,
    // right half
    OFF,      OFF,      OFF,      OFF,      OFF,      OFF,
    OFF,      OFF,      OFF,      OFF,      OFF,      OFF,
    OFF,      HOME_ROW, HOME_ROW, HOME_ROW, HOME_ROW, OFF,
    OFF,      OFF,      OFF,      OFF,      OFF,      OFF,
    THUMB,    THUMB,
];

#[rustfmt::skip]
static SYM_COLORS: [Hsv; LED_COUNT] = [
    // left half
    OFF,      NUM_ROW,  NUM_ROW,  NUM_ROW,  NUM_ROW,  NUM_ROW,
    OFF,      SYMBOL,   SYMBOL,   SYMBOL,   SYMBOL,   SYMBOL,
    OFF,      DUAL,     DUAL,     DUAL,     SYMBOL,   SYMBOL,
    OFF,      SYMBOL,   SYMBOL,   SYMBOL,   SYMBOL,   OFF,
    OFF,      OFF,
    // right half
    NUM_ROW,  NUM_ROW,  NUM_ROW,  NUM_ROW,  NUM_ROW,  OFF,
    SYMBOL,   SYMBOL,   SYMBOL,   DUAL,     DUAL,     OFF,
    SYMBOL,   SYMBOL,   SYMBOL,   SYMBOL,   SYMBOL,   OFF,
    OFF,      OFF,      OFF,      OFF,      OFF,      OFF,
    OFF,      OFF,
];

#[rustfmt::skip]
static SYS_COLORS: [Hsv; LED_COUNT] = [
    // left half
    OFF,      OFF,      OFF,      OFF,      OFF,      OFF,
    OFF,      WHITE,    RED,      GREEN,    BLUE,     OFF,
    OFF,      YELLOW,   PURPLE,   OFF,      OFF,      OFF,
    OFF,      OFF,      OFF,      OFF,      OFF,      OFF,
    OFF,      OFF,
    // right half
    OFF,      OFF,      OFF,      OFF,      OFF,      OFF,
    OFF,      OFF,      OFF,      OFF,      OFF,      OFF,
    OFF,      OFF,      OFF,      OFF,      OFF,      OFF,
    OFF,      OFF,      OFF,      OFF,      OFF,      OFF,
    OFF,      OFF,
];

/// The color table for a layer, `None` for layers without one.
pub fn layer_colors(layer: u8) -> Option<&'static [Hsv; LED_COUNT]> {
    match layer {
        keymap::BASE => Some(&BASE_COLORS),
        keymap::SYM => Some(&SYM_COLORS),
        keymap::SYS => Some(&SYS_COLORS),
        _ => None,
    }
}

/// Whether a table entry is the "LED off" sentinel.
pub fn is_off(color: &Hsv) -> bool {
    color.hue == 0 && color.sat == 0 && color.val == 0
}
