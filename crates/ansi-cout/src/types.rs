use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// The eight base colors, 0-7.
///
/// SGR color codes are this value plus a fixed base; see
/// [`Emitter::foreground`](crate::Emitter::foreground) and
/// [`Emitter::background`](crate::Emitter::background) for which base each
/// one adds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum ColorBase {
    Black = 0,
    Red = 1,
    Green = 2,
    Yellow = 3,
    Blue = 4,
    Magenta = 5,
    Cyan = 6,
    White = 7,
}

impl ColorBase {
    pub const ALL: [ColorBase; 8] = [
        ColorBase::Black,
        ColorBase::Red,
        ColorBase::Green,
        ColorBase::Yellow,
        ColorBase::Blue,
        ColorBase::Magenta,
        ColorBase::Cyan,
        ColorBase::White,
    ];

    pub fn code(self) -> u16 {
        self as u16
    }

    pub fn name(self) -> &'static str {
        match self {
            ColorBase::Black => "black",
            ColorBase::Red => "red",
            ColorBase::Green => "green",
            ColorBase::Yellow => "yellow",
            ColorBase::Blue => "blue",
            ColorBase::Magenta => "magenta",
            ColorBase::Cyan => "cyan",
            ColorBase::White => "white",
        }
    }
}

impl fmt::Display for ColorBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for ColorBase {
    type Err = ParseNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize_name(s);
        ColorBase::ALL
            .into_iter()
            .find(|color| color.name() == wanted)
            .ok_or_else(|| ParseNameError::new("color", s))
    }
}

/// Text attributes, one-to-one with their SGR codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum TextAttribute {
    Normal = 0,
    Bold = 1,
    Underscore = 4,
    Blink = 5,
    ReverseVideo = 7,
    Concealed = 8,
}

impl TextAttribute {
    pub const ALL: [TextAttribute; 6] = [
        TextAttribute::Normal,
        TextAttribute::Bold,
        TextAttribute::Underscore,
        TextAttribute::Blink,
        TextAttribute::ReverseVideo,
        TextAttribute::Concealed,
    ];

    pub fn code(self) -> u16 {
        self as u16
    }

    pub fn name(self) -> &'static str {
        match self {
            TextAttribute::Normal => "normal",
            TextAttribute::Bold => "bold",
            TextAttribute::Underscore => "underscore",
            TextAttribute::Blink => "blink",
            TextAttribute::ReverseVideo => "reverse-video",
            TextAttribute::Concealed => "concealed",
        }
    }
}

impl fmt::Display for TextAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for TextAttribute {
    type Err = ParseNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize_name(s);
        TextAttribute::ALL
            .into_iter()
            .find(|attr| attr.name() == wanted)
            .ok_or_else(|| ParseNameError::new("attribute", s))
    }
}

/// ANSI.SYS screen modes for Set Mode (`ESC[=<v>h`) and Reset Mode
/// (`ESC[=<v>l`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum ScreenMode {
    Monochrome40x25 = 0,
    Color40x25 = 1,
    Monochrome80x25 = 2,
    Color80x25 = 3,
    Graphics320x200FourColor = 4,
    Graphics320x200Monochrome = 5,
    Graphics640x200Monochrome = 6,
    /// Not a screen mode: enables line wrapping.
    LineWrapping = 7,
    Graphics320x200Color = 13,
    Graphics640x200Color = 14,
    Graphics640x350Monochrome = 15,
    Graphics640x350Color = 16,
    Graphics640x480Monochrome = 17,
    Graphics640x480Color = 18,
    Graphics320x200Color256 = 19,
}

impl ScreenMode {
    pub const ALL: [ScreenMode; 15] = [
        ScreenMode::Monochrome40x25,
        ScreenMode::Color40x25,
        ScreenMode::Monochrome80x25,
        ScreenMode::Color80x25,
        ScreenMode::Graphics320x200FourColor,
        ScreenMode::Graphics320x200Monochrome,
        ScreenMode::Graphics640x200Monochrome,
        ScreenMode::LineWrapping,
        ScreenMode::Graphics320x200Color,
        ScreenMode::Graphics640x200Color,
        ScreenMode::Graphics640x350Monochrome,
        ScreenMode::Graphics640x350Color,
        ScreenMode::Graphics640x480Monochrome,
        ScreenMode::Graphics640x480Color,
        ScreenMode::Graphics320x200Color256,
    ];

    pub fn code(self) -> u16 {
        self as u16
    }

    /// Looks a mode up by its numeric value.
    pub fn from_code(code: u16) -> Option<Self> {
        ScreenMode::ALL.into_iter().find(|mode| mode.code() == code)
    }
}

/// A color or attribute name that matches no known value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown {kind} '{name}'")]
pub struct ParseNameError {
    kind: &'static str,
    name: String,
}

impl ParseNameError {
    fn new(kind: &'static str, name: &str) -> Self {
        Self {
            kind,
            name: name.to_string(),
        }
    }

    /// What was being parsed: `"color"` or `"attribute"`.
    pub fn kind(&self) -> &'static str {
        self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

fn normalize_name(s: &str) -> String {
    s.trim().to_ascii_lowercase().replace('_', "-")
}
