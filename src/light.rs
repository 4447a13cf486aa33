//! Layer-based LED coloring.
//!
//! The framework owns the RGB driver, its animations and the user's
//! brightness setting; this module only decides what the indicator LEDs
//! should show for the active layer. It is called synchronously from the
//! framework's RGB refresh tick through [`paint_layer_indicators`], and once
//! at boot through [`keyboard_post_init`].

pub use smart_leds::RGB8;
pub use smart_leds::hsv::{Hsv, hsv2rgb};

use crate::ledmap;

/// Fixed colors applied by the `Hsv*` custom keycodes.
pub const HSV_RED: Hsv = Hsv {
    hue: 0,
    sat: 255,
    val: 255,
};
pub const HSV_GREEN: Hsv = Hsv {
    hue: 74,
    sat: 255,
    val: 255,
};
pub const HSV_BLUE: Hsv = Hsv {
    hue: 169,
    sat: 255,
    val: 255,
};

/// The framework's RGB matrix driver seam.
///
/// Writes go straight to the driver's frame buffer; nothing here blocks or
/// allocates.
pub trait RgbMatrix {
    /// Turn the matrix on.
    fn enable(&mut self);
    /// Write one LED.
    fn set_color(&mut self, index: u8, color: RGB8);
    /// Write every LED.
    fn set_color_all(&mut self, color: RGB8);
    /// Switch to the static solid-color effect.
    fn set_solid_effect(&mut self);
    /// Set the matrix's global color.
    fn set_hsv(&mut self, color: Hsv);
}

/// Snapshot of the framework-owned RGB state, taken by the caller at each
/// refresh tick.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RgbState {
    /// The user's global brightness setting (the configured HSV value),
    /// 0-255.
    pub brightness: u8,
    /// Keep the framework's own animation running on layers without a color
    /// table instead of blanking them.
    pub default_animation: bool,
    /// An external subsystem owns the LEDs right now; the colorizer must not
    /// touch them.
    pub external_override: bool,
}

/// Boot-time initialization hook.
pub fn keyboard_post_init<M: RgbMatrix>(rgb: &mut M) {
    rgb.enable();
    info!("rgb matrix enabled");
}

/// Scale an RGB color by `brightness / 255`.
pub fn brightness_scaled(color: RGB8, brightness: u8) -> RGB8 {
    let scale = |c: u8| ((c as u16 * brightness as u16) / 255) as u8;
    RGB8 {
        r: scale(color.r),
        g: scale(color.g),
        b: scale(color.b),
    }
}

/// Per-refresh LED coloring hook.
///
/// Returns whether the framework's default indicator handling should still
/// run: `false` suppresses it. When `external_override` is set nothing is
/// written and `false` is returned, leaving the LEDs to their external
/// owner. Layers without a color table are blanked unless
/// `default_animation` is set, in which case the framework's animation keeps
/// the frame.
pub fn paint_layer_indicators<M: RgbMatrix>(state: &RgbState, active_layer: u8, rgb: &mut M) -> bool {
    if state.external_override {
        return false;
    }

    match ledmap::layer_colors(active_layer) {
        Some(colors) => {
            for (i, color) in colors.iter().enumerate() {
                if ledmap::is_off(color) {
                    rgb.set_color(i as u8, RGB8 { r: 0, g: 0, b: 0 });
                } else {
                    rgb.set_color(i as u8, brightness_scaled(hsv2rgb(*color), state.brightness));
                }
            }
        }
        None => {
            if !state.default_animation {
                rgb.set_color_all(RGB8 { r: 0, g: 0, b: 0 });
            }
        }
    }
    true
}
