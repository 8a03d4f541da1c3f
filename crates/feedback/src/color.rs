//! CLI color functions on a fixed night palette.
//!
//! All functions respect `NO_COLOR`, `FORCE_COLOR`, and TTY detection via
//! `owo-colors`' `if_supports_color()`. The `--no-color` flag sets an internal
//! flag that bypasses owo-colors entirely.

use std::sync::atomic::{AtomicBool, Ordering};

use owo_colors::OwoColorize;
use owo_colors::Stream::{Stderr, Stdout};

/// Global override: when true, forces color off (set by `--no-color` flag).
static NO_COLOR_FLAG: AtomicBool = AtomicBool::new(false);

/// Call once from main.rs when `--no-color` is passed.
pub fn set_no_color() {
    NO_COLOR_FLAG.store(true, Ordering::Relaxed);
}

#[derive(Debug, Clone, Copy)]
struct Rgb {
    r: u8,
    g: u8,
    b: u8,
}

impl Rgb {
    const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as u8,
            g: ((hex >> 8) & 0xFF) as u8,
            b: (hex & 0xFF) as u8,
        }
    }
}

const ICE: Rgb = Rgb::from_hex(0x7CB4C8); // Primary accent
const AURORA: Rgb = Rgb::from_hex(0x6B8F5E); // Success, high scores
const COPPER: Rgb = Rgb::from_hex(0xC49A5C); // Warning, middling scores
const EMBER: Rgb = Rgb::from_hex(0xB87060); // Error, low scores
const KIRI: Rgb = Rgb::from_hex(0xA088B0); // Course names
const MUTED: Rgb = Rgb::from_hex(0x5C6370); // Secondary info

fn no_color() -> bool {
    NO_COLOR_FLAG.load(Ordering::Relaxed)
}

fn paint(text: &str, rgb: Rgb) -> String {
    if no_color() {
        return text.to_string();
    }
    text.if_supports_color(Stdout, |t| t.truecolor(rgb.r, rgb.g, rgb.b))
        .to_string()
}

fn paint_stderr(text: &str, rgb: Rgb) -> String {
    if no_color() {
        return text.to_string();
    }
    text.if_supports_color(Stderr, |t| t.truecolor(rgb.r, rgb.g, rgb.b))
        .to_string()
}

/// Ice blue (student names, primary accent).
pub fn ice(text: &str) -> String {
    paint(text, ICE)
}

/// Aurora green (success).
pub fn aurora(text: &str) -> String {
    paint(text, AURORA)
}

pub fn copper(text: &str) -> String {
    paint(text, COPPER)
}

pub fn ember(text: &str) -> String {
    paint(text, EMBER)
}

/// Kiri purple (course names).
pub fn kiri(text: &str) -> String {
    paint(text, KIRI)
}

pub fn bold(text: &str) -> String {
    if no_color() {
        return text.to_string();
    }
    text.if_supports_color(Stdout, |t| t.bold()).to_string()
}

/// Muted gray (borders, ids, dates).
pub fn muted(text: &str) -> String {
    paint(text, MUTED)
}

/// Color text by a 1-5 score: 4-5 green, 3 amber, 1-2 red.
pub fn score(text: &str, value: u8) -> String {
    match value {
        4..=5 => aurora(text),
        3 => copper(text),
        _ => ember(text),
    }
}

/// Error styling for stderr messages.
pub fn error(text: &str) -> String {
    paint_stderr(text, EMBER)
}

/// Warning styling for stderr messages.
pub fn warning(text: &str) -> String {
    paint_stderr(text, COPPER)
}

/// Hint styling for secondary info on stderr.
pub fn hint(text: &str) -> String {
    paint_stderr(text, MUTED)
}
