//! The platform capabilities the enforcement engine is written against.
//!
//! Each platform crate (e.g. `bordercolor-windows`) provides its own
//! implementation. Window handles are carried as pointer-sized integers.

/// `DWMWINDOWATTRIBUTE` value of the border color attribute.
pub const DWMWA_BORDER_COLOR: u32 = 34;

/// Sentinel color word that hands the border back to the compositor.
pub const DWMWA_COLOR_DEFAULT: u32 = 0xFFFF_FFFF;

/// Sent to a window when it is being activated or deactivated.
pub const WM_ACTIVATE: u32 = 0x0006;

/// Sent when the non-client area needs to reflect a new activation state.
pub const WM_NCACTIVATE: u32 = 0x0086;

/// Low word of `WM_ACTIVATE`'s `wParam` meaning "deactivated".
pub const WA_INACTIVE: usize = 0;

/// `S_OK`.
pub const S_OK: i32 = 0;

/// Window manager and compositor operations needed to enforce a border color.
pub trait Compositor {
    /// Returns the window's `GWL_STYLE` bits, or `None` if the handle is
    /// no longer valid.
    fn window_style(&self, hwnd: usize) -> Option<u32>;

    /// Writes the border color attribute through the original, unhooked
    /// implementation and returns its `HRESULT`.
    fn write_border_color(&self, hwnd: usize, color: u32) -> i32;

    /// Returns the current foreground window, or `0` if there is none.
    fn foreground_window(&self) -> usize;

    /// Returns the top-level windows owned by the current process.
    fn owned_windows(&self) -> Vec<usize>;
}

/// Returns `true` if an `HRESULT` denotes success.
pub const fn succeeded(hr: i32) -> bool {
    hr >= 0
}
