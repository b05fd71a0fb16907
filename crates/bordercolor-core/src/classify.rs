use crate::compositor::Compositor;

/// Resizable frame style bit.
pub const WS_THICKFRAME: u32 = 0x0004_0000;

/// Title bar style (`WS_BORDER | WS_DLGFRAME`).
pub const WS_CAPTION: u32 = 0x00C0_0000;

/// Returns whether a window with these style bits gets a colored border.
///
/// Windows with a resizable frame or a full caption qualify. Borderless
/// popups, tooltips and most context menus have neither.
pub const fn is_eligible_style(style: u32) -> bool {
    (style & WS_THICKFRAME) == WS_THICKFRAME || (style & WS_CAPTION) == WS_CAPTION
}

/// Returns whether `hwnd` is eligible for border recoloring.
///
/// Styles are read fresh on every call because they can change over a
/// window's lifetime. A handle that has become invalid is not eligible.
pub fn is_eligible(compositor: &impl Compositor, hwnd: usize) -> bool {
    compositor.window_style(hwnd).is_some_and(is_eligible_style)
}
