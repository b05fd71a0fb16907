//! What each hooked entry point does around its original implementation.
//!
//! The platform crate owns the actual `extern "system"` detours; each one
//! forwards here with a `forward` closure that calls the saved trampoline.
//! Keeping the decisions here lets them be tested without a real window
//! manager.

use crate::classify;
use crate::compositor::{
    Compositor, DWMWA_BORDER_COLOR, S_OK, WA_INACTIVE, WM_ACTIVATE, WM_NCACTIVATE,
};
use crate::engine::Engine;

/// Returns the activation flag carried by an activation message, or
/// `None` if `msg` is not one of the messages `allowed` to trigger a
/// recolor.
///
/// `WM_ACTIVATE` packs the minimized state into the high word of
/// `wParam`, so only the low word is compared against `WA_INACTIVE`.
fn activation_flag(msg: u32, wparam: usize, allowed: &[u32]) -> Option<bool> {
    if !allowed.contains(&msg) {
        return None;
    }
    match msg {
        WM_ACTIVATE => Some((wparam & 0xFFFF) != WA_INACTIVE),
        WM_NCACTIVATE => Some(wparam != 0),
        _ => None,
    }
}

/// Messages that recolor a top-level window from its default procedure.
const WINDOW_ACTIVATION: &[u32] = &[WM_ACTIVATE, WM_NCACTIVATE];

/// Dialogs only react to non-client activation.
const DIALOG_ACTIVATION: &[u32] = &[WM_NCACTIVATE];

impl<C: Compositor> Engine<C> {
    /// Decides the fate of an attribute-set call.
    ///
    /// Border color writes aimed at an eligible window are swallowed and
    /// reported as `S_OK`, so no other code in the process (the window
    /// manager's own accent re-assertion included) can overwrite the
    /// configured color. Everything else is forwarded unchanged.
    pub fn set_attribute(
        &self,
        hwnd: usize,
        attribute: u32,
        forward: impl FnOnce() -> i32,
    ) -> i32 {
        if attribute == DWMWA_BORDER_COLOR && classify::is_eligible(self.compositor(), hwnd) {
            crate::log_debug!("blocked border color change on window 0x{hwnd:X}");
            return S_OK;
        }
        forward()
    }

    /// Runs a default window procedure, then re-imposes the border color
    /// on activation changes.
    ///
    /// The original result is returned untouched.
    pub fn window_proc(
        &self,
        hwnd: usize,
        msg: u32,
        wparam: usize,
        forward: impl FnOnce() -> isize,
    ) -> isize {
        self.after_default_proc(hwnd, msg, wparam, WINDOW_ACTIVATION, forward)
    }

    /// Dialog counterpart of [`Engine::window_proc`].
    pub fn dialog_proc(
        &self,
        hwnd: usize,
        msg: u32,
        wparam: usize,
        forward: impl FnOnce() -> isize,
    ) -> isize {
        self.after_default_proc(hwnd, msg, wparam, DIALOG_ACTIVATION, forward)
    }

    fn after_default_proc(
        &self,
        hwnd: usize,
        msg: u32,
        wparam: usize,
        allowed: &[u32],
        forward: impl FnOnce() -> isize,
    ) -> isize {
        // The original must run first so any frame repaint it triggers
        // lands before our write.
        let result = forward();
        if let Some(activating) = activation_flag(msg, wparam, allowed) {
            self.apply(hwnd, activating);
        }
        result
    }
}

#[cfg(test)]
#[path = "intercept_tests.rs"]
mod tests;
