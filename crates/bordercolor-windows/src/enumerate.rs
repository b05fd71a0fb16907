use windows::Win32::Foundation::{HWND, LPARAM};
use windows::Win32::UI::WindowsAndMessaging::EnumWindows;
use windows::core::BOOL;

use crate::window::Window;

/// Which top-level windows an enumeration keeps.
enum Filter {
    All,
    Process(u32),
}

struct Collector {
    filter: Filter,
    windows: Vec<Window>,
}

/// Enumerates every top-level window on the desktop.
pub fn enumerate_windows() -> Vec<Window> {
    collect(Filter::All)
}

/// Enumerates the top-level windows created by process `pid`.
///
/// Used for the load, settings-change and unload passes with the
/// current process id.
pub fn process_windows(pid: u32) -> Vec<Window> {
    collect(Filter::Process(pid))
}

fn collect(filter: Filter) -> Vec<Window> {
    let mut collector = Collector {
        filter,
        windows: Vec::new(),
    };

    // SAFETY: EnumWindows calls our callback for each top-level window.
    // We pass a pointer to our Collector as LPARAM (user data). This is
    // safe because EnumWindows runs synchronously and the Collector
    // outlives the call.
    let result = unsafe {
        EnumWindows(
            Some(enum_window_callback),
            LPARAM(&mut collector as *mut _ as isize),
        )
    };
    if let Err(e) = result {
        bordercolor_core::log_warn!("EnumWindows failed: {e}");
    }

    collector.windows
}

/// Callback invoked by `EnumWindows` for each top-level window.
///
/// Always returns `TRUE`: no pass ever needs to stop early.
unsafe extern "system" fn enum_window_callback(hwnd: HWND, lparam: LPARAM) -> BOOL {
    // SAFETY: lparam is a pointer to our Collector, cast from collect().
    let collector = unsafe { &mut *(lparam.0 as *mut Collector) };

    let window = Window::new(hwnd);
    let keep = match collector.filter {
        Filter::All => true,
        Filter::Process(pid) => window.process_id() == pid,
    };
    if keep {
        collector.windows.push(window);
    }

    BOOL(1) // TRUE: keep enumerating
}
