//! Hex color parsing and packing into the compositor's color word.
//!
//! The compositor expects a `COLORREF`-style word laid out as
//! `0x00BBGGRR`: red in the lowest byte, blue in the third, and the top
//! byte zero. A non-zero top byte is reserved for sentinels such as
//! [`crate::compositor::DWMWA_COLOR_DEFAULT`], so a parsed color can never
//! collide with one.

use std::fmt;

/// Color used when configured text is missing or malformed (`#0078D4`).
pub const FALLBACK: Color = Color::new(0x00, 0x78, 0xD4);

/// Opaque RGB color parsed from a hex string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses a hex color string like "#0078d4" or "0078D4".
    ///
    /// Only the first six characters after the optional `#` are read, so
    /// a trailing alpha pair (`#RRGGBBAA`) is ignored rather than rejected.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        let digits = hex.get(..6)?;
        // `from_str_radix` accepts a leading sign, so check the digits first.
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        Some(Self {
            r: u8::from_str_radix(&digits[0..2], 16).ok()?,
            g: u8::from_str_radix(&digits[2..4], 16).ok()?,
            b: u8::from_str_radix(&digits[4..6], 16).ok()?,
        })
    }

    /// Parses configured text, substituting [`FALLBACK`] when the text is
    /// absent or malformed. Never fails.
    pub fn parse(text: Option<&str>) -> Self {
        match text.and_then(Self::from_hex) {
            Some(color) => {
                crate::log_debug!(
                    "parsed RGB color: R={:02X} G={:02X} B={:02X}",
                    color.r,
                    color.g,
                    color.b
                );
                color
            }
            None => {
                crate::log_warn!(
                    "invalid hex color format: {}, using {FALLBACK}",
                    text.unwrap_or("NULL")
                );
                FALLBACK
            }
        }
    }

    /// Packs the color into the compositor's `0x00BBGGRR` word.
    pub const fn to_colorref(self) -> u32 {
        ((self.b as u32) << 16) | ((self.g as u32) << 8) | self.r as u32
    }
}

impl Default for Color {
    fn default() -> Self {
        FALLBACK
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}
