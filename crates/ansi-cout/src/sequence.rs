//! Pure formatting of the escape sequences the emitter writes.
//!
//! Each function returns exactly the bytes the matching
//! [`Emitter`](crate::Emitter) method writes, so sequences can be built into
//! strings without a sink.

use std::fmt::Write;

use crate::types::ColorBase;
use crate::types::ScreenMode;
use crate::types::TextAttribute;

/// Control Sequence Introducer.
pub const CSI: &str = "\x1b[";

/// SGR base added by [`foreground`].
pub const FOREGROUND_BASE: u16 = 40;
/// SGR base added by [`background`].
pub const BACKGROUND_BASE: u16 = 30;

/// Semicolon-joined decimal list, no trailing separator.
pub fn join_params(values: &[u16]) -> String {
    let mut out = String::with_capacity(values.len() * 3);
    for (idx, value) in values.iter().enumerate() {
        if idx > 0 {
            out.push(';');
        }
        // Writing into a String cannot fail.
        let _ = write!(out, "{value}");
    }
    out
}

/// `ESC[x;y`. No final byte is emitted.
pub fn position(x: u32, y: u32) -> String {
    format!("{CSI}{x};{y}")
}

pub fn cursor_up(n: u32) -> String {
    format!("{CSI}{n}A")
}

pub fn cursor_down(n: u32) -> String {
    format!("{CSI}{n}B")
}

pub fn cursor_forward(n: u32) -> String {
    format!("{CSI}{n}C")
}

pub fn cursor_backward(n: u32) -> String {
    format!("{CSI}{n}D")
}

pub fn cursor_save() -> String {
    format!("{CSI}s")
}

pub fn cursor_restore() -> String {
    format!("{CSI}u")
}

pub fn erase_display() -> String {
    format!("{CSI}2J")
}

pub fn erase_line() -> String {
    format!("{CSI}K")
}

/// `ESC[v0;v1;...m`; an empty list gives `ESC[m`.
pub fn set_graphics_mode(values: &[u16]) -> String {
    format!("{CSI}{}m", join_params(values))
}

/// SGR `color + 40`.
pub fn foreground(color: ColorBase) -> String {
    set_graphics_mode(&[color.code() + FOREGROUND_BASE])
}

/// SGR `color + 30`.
pub fn background(color: ColorBase) -> String {
    set_graphics_mode(&[color.code() + BACKGROUND_BASE])
}

/// SGR with the attribute codes in the order given.
pub fn attribute(attrs: &[TextAttribute]) -> String {
    let codes: Vec<u16> = attrs.iter().map(|attr| attr.code()).collect();
    set_graphics_mode(&codes)
}

pub fn set_mode(mode: ScreenMode) -> String {
    format!("{CSI}={}h", mode.code())
}

pub fn reset_mode(mode: ScreenMode) -> String {
    format!("{CSI}={}l", mode.code())
}
