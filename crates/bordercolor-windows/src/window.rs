use bordercolor_core::classify;

use windows::Win32::Foundation::HWND;
use windows::Win32::UI::WindowsAndMessaging::{
    GWL_STYLE, GetWindowLongPtrW, GetWindowTextLengthW, GetWindowTextW,
    GetWindowThreadProcessId, IsWindow, IsWindowVisible, RealGetWindowClassW,
};

/// A window on the Windows platform, wrapping a Win32 `HWND`.
///
/// `HWND` is an opaque handle: a number that identifies a window to the
/// OS. This struct holds that handle and queries the OS lazily, so any
/// query may observe a window that has since been destroyed.
#[derive(Debug, Clone, Copy)]
pub struct Window {
    hwnd: HWND,
}

impl Window {
    /// Creates a new `Window` from a raw `HWND`.
    pub fn new(hwnd: HWND) -> Self {
        Self { hwnd }
    }

    /// Creates a new `Window` from a raw handle value (pointer-sized integer).
    pub fn from_raw(handle: usize) -> Self {
        Self {
            hwnd: HWND(handle as *mut _),
        }
    }

    /// Returns the raw window handle.
    pub fn hwnd(&self) -> HWND {
        self.hwnd
    }

    /// Returns the handle as a pointer-sized integer.
    pub fn raw(&self) -> usize {
        self.hwnd.0 as usize
    }

    /// Returns the `GWL_STYLE` bits, or `None` if the handle is stale.
    pub fn style(&self) -> Option<u32> {
        // SAFETY: IsWindow and GetWindowLongPtrW accept any handle value;
        // an invalid one yields FALSE / 0 rather than faulting.
        unsafe {
            if !IsWindow(Some(self.hwnd)).as_bool() {
                return None;
            }
            Some(GetWindowLongPtrW(self.hwnd, GWL_STYLE) as u32)
        }
    }

    /// Returns whether this window gets a colored border.
    pub fn is_eligible(&self) -> bool {
        self.style().is_some_and(classify::is_eligible_style)
    }

    /// Returns the id of the process that created the window, or `0` if
    /// the handle is stale.
    pub fn process_id(&self) -> u32 {
        let mut pid = 0u32;
        // SAFETY: the out pointer is a live local.
        unsafe {
            GetWindowThreadProcessId(self.hwnd, Some(&mut pid as *mut u32));
        }
        pid
    }

    pub fn is_visible(&self) -> bool {
        // SAFETY: IsWindowVisible is a simple query that returns a BOOL.
        unsafe { IsWindowVisible(self.hwnd).as_bool() }
    }

    pub fn title(&self) -> String {
        // SAFETY: GetWindowTextLengthW and GetWindowTextW read window text
        // into a buffer we own.
        unsafe {
            let length = GetWindowTextLengthW(self.hwnd);
            if length == 0 {
                return String::new();
            }

            // +1 for the null terminator that Windows requires
            let mut buffer = vec![0u16; (length + 1) as usize];
            let copied = GetWindowTextW(self.hwnd, &mut buffer);
            String::from_utf16_lossy(&buffer[..copied as usize])
        }
    }

    pub fn class(&self) -> String {
        // SAFETY: RealGetWindowClassW reads the window class name.
        // 256 is the maximum class name length in Win32.
        unsafe {
            let mut buffer = [0u16; 256];
            let length = RealGetWindowClassW(self.hwnd, &mut buffer);
            String::from_utf16_lossy(&buffer[..length as usize])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_handle_has_no_style() {
        // Arrange
        let window = Window::from_raw(0);

        // Act / Assert
        assert_eq!(window.style(), None);
        assert!(!window.is_eligible());
        assert_eq!(window.process_id(), 0);
    }

    #[test]
    fn raw_round_trips_handle_value() {
        assert_eq!(Window::from_raw(0x1234).raw(), 0x1234);
    }
}
