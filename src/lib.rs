//! # Voyager keymap
//!
//! Per-keyboard customization for a ZSA Voyager: the layer tables, timing
//! configuration, per-layer LED coloring and dual-function key dispatch.
//! Everything heavy (matrix scanning, debounce, the tap/hold resolver, the
//! layer stack, USB HID and the RGB driver) lives in the firmware framework;
//! this crate plugs into its extension points.
//!
//! ## Modules
//!
//! - [`keymap`] - the layer tables and combo declarations
//! - [`config`] - timing and USB configuration consumed by the framework
//! - [`dual_function`] - the keycode hook resolving dual-function and RGB
//!   custom keycodes
//! - [`light`] - the boot hook and the per-layer LED colorizer
//! - [`ledmap`] - per-layer LED color tables
//! - [`keycode`], [`modifier`], [`action`], [`event`], [`combo`] - the data
//!   types the tables and hooks are built from

#![no_std]

// This mod MUST go first, so that the others see its macros.
mod fmt;

pub mod action;
pub mod combo;
pub mod config;
pub mod dual_function;
pub mod event;
pub mod keycode;
pub mod keymap;
pub mod layout_macro;
pub mod ledmap;
pub mod light;
pub mod modifier;
