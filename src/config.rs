//! Build-time configuration for the keyboard.
//!
//! All of these values are consumed by the firmware framework's input-timing
//! and USB subsystems; nothing in this crate reads a clock. Defaults carry
//! the tuned values for this keyboard.

use embassy_time::Duration;
use heapless::Vec;

use crate::combo::{Combo, COMBO_MAX_NUM};

/// Config for configurable action behavior
#[derive(Clone, Debug, Default)]
pub struct BehaviorConfig {
    pub tap_hold: TapHoldConfig,
    pub one_shot: OneShotConfig,
    pub leader: LeaderConfig,
    pub mouse_key: MouseKeyConfig,
    pub combo: CombosConfig,
}

/// Configurations for tap hold behavior
///
/// The tap/hold decision itself is made by the framework resolver; these
/// constants parameterize its windows.
#[derive(Clone, Copy, Debug)]
pub struct TapHoldConfig {
    /// Treat home row modifier keys with the stricter flavor of resolution.
    pub enable_hrm: bool,
    /// Resolve to hold as soon as another key is pressed and released while
    /// this key is down, before the timeout.
    pub permissive_hold: bool,
    /// The tap window: releases inside it are taps, anything longer is a
    /// hold.
    pub hold_timeout: Duration,
    /// Pressing the same key again within this window after a tap repeats
    /// the tap instead of resolving to hold.
    pub quick_tap_time: Duration,
}

impl Default for TapHoldConfig {
    fn default() -> Self {
        Self {
            enable_hrm: true,
            permissive_hold: true,
            hold_timeout: Duration::from_millis(200),
            quick_tap_time: Duration::from_millis(200),
        }
    }
}

/// Config for one shot behavior
#[derive(Clone, Copy, Debug)]
pub struct OneShotConfig {
    pub timeout: Duration,
}

impl Default for OneShotConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(5),
        }
    }
}

/// Config for the leader key
#[derive(Clone, Copy, Debug)]
pub struct LeaderConfig {
    /// Timeout for each key of a leader sequence.
    pub timeout: Duration,
    /// Restart the timeout on every key instead of once for the whole
    /// sequence.
    pub per_key_timing: bool,
    /// Don't time out before the first key of a sequence is pressed.
    pub no_initial_timeout: bool,
}

impl Default for LeaderConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_millis(250),
            per_key_timing: true,
            no_initial_timeout: true,
        }
    }
}

/// Configurations for mouse key acceleration
///
/// Cursor values are tuned for responsive movement (60 Hz updates, instant
/// start), wheel values for slower, readable scrolling.
#[derive(Clone, Copy, Debug)]
pub struct MouseKeyConfig {
    /// Delay in ms before the cursor starts moving
    pub delay: u32,
    /// Time interval in ms between cursor movements
    pub interval: u32,
    /// Base cursor movement distance per interval
    pub move_delta: u8,
    /// Maximum speed multiplier
    pub max_speed: u8,
    /// Number of intervals until max speed is reached
    pub time_to_max: u8,
    /// Delay in ms before wheel scrolling starts
    pub wheel_delay: u32,
    /// Time interval in ms between scroll events
    pub wheel_interval: u32,
    /// Scroll wheel movement per event
    pub wheel_delta: u8,
    /// Maximum scroll speed multiplier
    pub wheel_max_speed: u8,
    /// Number of intervals until max scroll speed is reached
    pub wheel_time_to_max: u8,
}

impl Default for MouseKeyConfig {
    fn default() -> Self {
        Self {
            delay: 0,
            interval: 16,
            move_delta: 8,
            max_speed: 10,
            time_to_max: 30,
            wheel_delay: 0,
            wheel_interval: 80,
            wheel_delta: 1,
            wheel_max_speed: 8,
            wheel_time_to_max: 40,
        }
    }
}

/// Config for combo behavior
#[derive(Clone, Debug)]
pub struct CombosConfig {
    pub combos: Vec<Combo, COMBO_MAX_NUM>,
    pub timeout: Duration,
}

impl Default for CombosConfig {
    fn default() -> Self {
        Self {
            combos: Vec::new(),
            timeout: Duration::from_millis(50),
        }
    }
}

/// USB identification and timing for this keyboard
#[derive(Clone, Copy, Debug)]
pub struct UsbHidConfig<'a> {
    pub pid: u16,
    pub vid: u16,
    pub manufacturer: &'a str,
    pub product: &'a str,
    pub serial_number: &'a str,
    /// HID polling interval
    pub polling_interval: Duration,
    /// Extra delay after waking the host from suspend
    pub suspend_wakeup_delay: Duration,
}

impl Default for UsbHidConfig<'_> {
    fn default() -> Self {
        Self {
            pid: 0x1977,
            vid: 0x3297,
            manufacturer: "ZSA Technology Labs",
            product: "Voyager",
            serial_number: "vrMEr/wONV7n",
            polling_interval: Duration::from_millis(10),
            suspend_wakeup_delay: Duration::from_millis(0),
        }
    }
}
