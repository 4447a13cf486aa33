//! Key event records delivered by the framework.

use crate::action::KeyAction;

/// A single keycode event handed to the keycode hook.
///
/// `tap_count` is the framework resolver's tap/hold classification for the
/// key this event belongs to: greater than zero means the press was
/// classified as a tap, zero means it was held past the tap window. The same
/// classification is present on both the press and the release edge.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyRecord {
    /// The keymap action the event was resolved from.
    pub action: KeyAction,
    /// True on the press edge, false on the release edge.
    pub pressed: bool,
    /// Tap/hold classification supplied by the framework resolver.
    pub tap_count: u8,
}

impl KeyRecord {
    pub const fn press(action: KeyAction, tap_count: u8) -> Self {
        Self {
            action,
            pressed: true,
            tap_count,
        }
    }

    pub const fn release(action: KeyAction, tap_count: u8) -> Self {
        Self {
            action,
            pressed: false,
            tap_count,
        }
    }
}
