#![allow(dead_code)]

use voyager_keymap::dual_function::KeyRegistrar;
use voyager_keymap::keycode::KeyCode;
use voyager_keymap::light::{Hsv, RGB8, RgbMatrix};
use voyager_keymap::modifier::ModifierCombination;

// Init logger for tests
#[ctor::ctor]
pub fn init_log() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .is_test(true)
        .try_init();
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HidOp {
    Register(KeyCode, ModifierCombination),
    Unregister(KeyCode, ModifierCombination),
}

/// Records every register/unregister the hook forwards to the HID layer.
#[derive(Debug, Default)]
pub struct MockHid {
    pub ops: Vec<HidOp>,
}

impl KeyRegistrar for MockHid {
    fn register(&mut self, key: KeyCode, modifiers: ModifierCombination) {
        self.ops.push(HidOp::Register(key, modifiers));
    }

    fn unregister(&mut self, key: KeyCode, modifiers: ModifierCombination) {
        self.ops.push(HidOp::Unregister(key, modifiers));
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RgbOp {
    Enable,
    SetColor(u8, RGB8),
    SetColorAll(RGB8),
    SolidEffect,
    // Hsv has no PartialEq upstream, store the triplet.
    SetHsv(u8, u8, u8),
}

/// Records every write the colorizer performs on the matrix.
#[derive(Debug, Default)]
pub struct MockRgb {
    pub ops: Vec<RgbOp>,
}

impl RgbMatrix for MockRgb {
    fn enable(&mut self) {
        self.ops.push(RgbOp::Enable);
    }

    fn set_color(&mut self, index: u8, color: RGB8) {
        self.ops.push(RgbOp::SetColor(index, color));
    }

    fn set_color_all(&mut self, color: RGB8) {
        self.ops.push(RgbOp::SetColorAll(color));
    }

    fn set_solid_effect(&mut self) {
        self.ops.push(RgbOp::SolidEffect);
    }

    fn set_hsv(&mut self, color: Hsv) {
        self.ops.push(RgbOp::SetHsv(color.hue, color.sat, color.val));
    }
}

pub const OFF_RGB: RGB8 = RGB8 { r: 0, g: 0, b: 0 };
