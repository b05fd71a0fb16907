//! The single path through which a border color is ever written.

use crate::classify;
use crate::compositor::{Compositor, DWMWA_COLOR_DEFAULT, succeeded};
use crate::state::ColorState;

/// Applies the configured colors to windows through a [`Compositor`].
///
/// Holds no per-window state: every decision re-reads the window's
/// styles and the current colors, so the engine can be shared by all
/// hooked entry points on all threads.
#[derive(Debug)]
pub struct Engine<C> {
    compositor: C,
    colors: ColorState,
}

impl<C: Compositor> Engine<C> {
    /// Creates an engine holding the built-in default colors.
    pub const fn new(compositor: C) -> Self {
        Self {
            compositor,
            colors: ColorState::new(),
        }
    }

    pub fn compositor(&self) -> &C {
        &self.compositor
    }

    pub fn colors(&self) -> &ColorState {
        &self.colors
    }

    /// Writes the active or inactive color to `hwnd`.
    ///
    /// Ineligible windows are skipped silently. A failed write is logged
    /// and dropped: the caller's own operation must never fail because
    /// of a cosmetic border.
    pub fn apply(&self, hwnd: usize, activating: bool) {
        if !classify::is_eligible(&self.compositor, hwnd) {
            return;
        }

        let color = self.colors.color_for(activating).to_colorref();
        let hr = self.compositor.write_border_color(hwnd, color);

        if succeeded(hr) {
            crate::log_debug!(
                "set border color for window 0x{hwnd:X} - active: {activating}, color: 0x{color:08X}"
            );
        } else {
            crate::log_warn!(
                "failed to set border color for window 0x{hwnd:X} - HRESULT: 0x{:08X}",
                hr as u32
            );
        }
    }

    /// Applies colors to every window owned by this process.
    ///
    /// The foreground window gets the active color, all others the
    /// inactive one. Returns the number of windows visited.
    pub fn apply_all(&self) -> usize {
        let windows = self.compositor.owned_windows();
        let foreground = self.compositor.foreground_window();
        for &hwnd in &windows {
            self.apply(hwnd, hwnd == foreground);
        }
        crate::log_debug!("applied border colors to {} owned windows", windows.len());
        windows.len()
    }

    /// Hands the border of every eligible owned window back to the
    /// compositor by writing the default sentinel.
    ///
    /// Returns the number of windows reset.
    pub fn reset_all(&self) -> usize {
        let mut reset = 0;
        for hwnd in self.compositor.owned_windows() {
            if !classify::is_eligible(&self.compositor, hwnd) {
                continue;
            }
            let hr = self
                .compositor
                .write_border_color(hwnd, DWMWA_COLOR_DEFAULT);
            if !succeeded(hr) {
                crate::log_warn!(
                    "failed to reset border color for window 0x{hwnd:X} - HRESULT: 0x{:08X}",
                    hr as u32
                );
            }
            reset += 1;
        }
        crate::log_debug!("reset border colors on {reset} owned windows");
        reset
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
