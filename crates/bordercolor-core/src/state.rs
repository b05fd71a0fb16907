//! Process-wide active/inactive border colors.
//!
//! Written once at startup and again on each configuration change; read
//! on every activation event from whatever thread delivers it. Reads and
//! reloads go through a reader-writer lock so a reader sees either the
//! old pair or the new pair, never one of each.

use std::borrow::Cow;
use std::sync::{PoisonError, RwLock};

use crate::color::{Color, FALLBACK};

/// Default text of the active border color setting.
pub const DEFAULT_ACTIVE: &str = "#0078D4";

/// Default text of the inactive border color setting.
pub const DEFAULT_INACTIVE: &str = "#808080";

/// A parsed color together with the text it was parsed from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfiguredColor {
    pub color: Color,
    pub source: Cow<'static, str>,
}

impl ConfiguredColor {
    fn parse(text: Option<&str>) -> Self {
        Self {
            color: Color::parse(text),
            source: Cow::Owned(text.unwrap_or_default().to_string()),
        }
    }
}

#[derive(Debug, Clone)]
struct Palette {
    active: ConfiguredColor,
    inactive: ConfiguredColor,
}

/// The two configured border colors.
#[derive(Debug)]
pub struct ColorState {
    palette: RwLock<Palette>,
}

impl ColorState {
    /// Creates the state holding the built-in defaults.
    pub const fn new() -> Self {
        Self {
            palette: RwLock::new(Palette {
                active: ConfiguredColor {
                    color: FALLBACK,
                    source: Cow::Borrowed(DEFAULT_ACTIVE),
                },
                inactive: ConfiguredColor {
                    color: Color::new(0x80, 0x80, 0x80),
                    source: Cow::Borrowed(DEFAULT_INACTIVE),
                },
            }),
        }
    }

    /// Parses both texts and replaces the current pair.
    ///
    /// Malformed or missing text falls back to the codec fallback color.
    pub fn reload(&self, active_text: Option<&str>, inactive_text: Option<&str>) {
        let palette = Palette {
            active: ConfiguredColor::parse(active_text),
            inactive: ConfiguredColor::parse(inactive_text),
        };
        crate::log_info!(
            "colors loaded - active: {} (0x{:08X}), inactive: {} (0x{:08X})",
            palette.active.source,
            palette.active.color.to_colorref(),
            palette.inactive.source,
            palette.inactive.color.to_colorref()
        );
        *self
            .palette
            .write()
            .unwrap_or_else(PoisonError::into_inner) = palette;
    }

    pub fn active_color(&self) -> Color {
        self.read(|p| p.active.color)
    }

    pub fn inactive_color(&self) -> Color {
        self.read(|p| p.inactive.color)
    }

    /// Returns the color for the given activation state.
    pub fn color_for(&self, activating: bool) -> Color {
        self.read(|p| {
            if activating {
                p.active.color
            } else {
                p.inactive.color
            }
        })
    }

    /// Returns copies of both configured colors with their source text.
    pub fn snapshot(&self) -> (ConfiguredColor, ConfiguredColor) {
        self.read(|p| (p.active.clone(), p.inactive.clone()))
    }

    fn read<T>(&self, f: impl FnOnce(&Palette) -> T) -> T {
        f(&self.palette.read().unwrap_or_else(PoisonError::into_inner))
    }
}

impl Default for ColorState {
    fn default() -> Self {
        Self::new()
    }
}
