use bordercolor_core::Compositor;
use windows::Win32::UI::WindowsAndMessaging::GetForegroundWindow;

use crate::enumerate;
use crate::hooks;
use crate::window::Window;

/// The live Win32 window manager and DWM.
#[derive(Debug, Clone, Copy, Default)]
pub struct Win32Compositor;

impl Compositor for Win32Compositor {
    fn window_style(&self, hwnd: usize) -> Option<u32> {
        Window::from_raw(hwnd).style()
    }

    fn write_border_color(&self, hwnd: usize, color: u32) -> i32 {
        hooks::write_border_color(Window::from_raw(hwnd).hwnd(), color).0
    }

    fn foreground_window(&self) -> usize {
        // SAFETY: GetForegroundWindow takes no arguments and may return null.
        unsafe { GetForegroundWindow() }.0 as usize
    }

    fn owned_windows(&self) -> Vec<usize> {
        enumerate::process_windows(std::process::id())
            .iter()
            .map(Window::raw)
            .collect()
    }
}
