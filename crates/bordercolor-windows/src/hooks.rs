//! The five intercepted entry points and their saved originals.
//!
//! Each [`Binding`] names an exported function and, once installed,
//! holds the trampoline to its original implementation. Trampolines are
//! written once during module init and never change afterwards, so the
//! hooked entry points read them without locking.
//!
//! A hooked entry point never calls its own public symbol: every
//! "call the original" goes through the binding's trampoline.

use std::ffi::{CStr, c_void};
use std::mem;
use std::sync::OnceLock;

use bordercolor_core::compositor::DWMWA_BORDER_COLOR;
use bordercolor_core::{Compositor, Engine};
use windows::Win32::Foundation::{E_FAIL, HWND, LPARAM, LRESULT, WPARAM};
use windows::Win32::Graphics::Dwm::{self, DwmSetWindowAttribute};
use windows::Win32::System::LibraryLoader::{GetModuleHandleW, GetProcAddress, LoadLibraryW};
use windows::core::{HRESULT, HSTRING, PCSTR};

use crate::host::HookInstaller;
use crate::module::ENGINE;

type SetWindowAttributeFn = unsafe extern "system" fn(HWND, u32, *const c_void, u32) -> HRESULT;
type DefProcFn = unsafe extern "system" fn(HWND, u32, WPARAM, LPARAM) -> LRESULT;

/// An intercepted entry point.
pub struct Binding {
    module: &'static str,
    name: &'static CStr,
    trampoline: OnceLock<usize>,
}

impl Binding {
    const fn new(module: &'static str, name: &'static CStr) -> Self {
        Self {
            module,
            name,
            trampoline: OnceLock::new(),
        }
    }

    /// Returns the exported function name.
    pub fn name(&self) -> &'static str {
        self.name.to_str().unwrap_or("?")
    }

    /// Returns whether the hook is installed.
    pub fn is_installed(&self) -> bool {
        self.trampoline.get().is_some()
    }

    /// Looks up the function's address in its module, loading the module
    /// if it is not mapped yet.
    fn resolve(&self) -> Option<*mut c_void> {
        let module = HSTRING::from(self.module);
        // SAFETY: both calls take a null-terminated name we keep alive
        // for the duration of the call.
        unsafe {
            let handle = GetModuleHandleW(&module)
                .or_else(|_| LoadLibraryW(&module))
                .ok()?;
            let address = GetProcAddress(handle, PCSTR(self.name.as_ptr().cast()))?;
            Some(address as *mut c_void)
        }
    }

    /// Installs the hook once. A second call leaves the first trampoline
    /// in place and never reaches the installer.
    fn install(&self, installer: &impl HookInstaller, detour: *mut c_void) -> bool {
        if self.is_installed() {
            bordercolor_core::log_warn!("{}: already hooked", self.name());
            return false;
        }
        let Some(target) = self.resolve() else {
            bordercolor_core::log_error!("{}: not found in {}", self.name(), self.module);
            return false;
        };
        let Some(original) = installer.install(target, detour) else {
            bordercolor_core::log_error!("{}: hook installation failed", self.name());
            return false;
        };
        self.trampoline.set(original as usize).is_ok()
    }

    fn original_set_attribute(&self) -> Option<SetWindowAttributeFn> {
        // SAFETY: only the attribute-set binding calls this, and its
        // trampoline points at a function with the SetWindowAttributeFn ABI.
        self.trampoline
            .get()
            .map(|&addr| unsafe { mem::transmute::<usize, SetWindowAttributeFn>(addr) })
    }

    fn original_def_proc(&self) -> Option<DefProcFn> {
        // SAFETY: only this module's def-proc bindings call this, and
        // their trampolines point at functions with the DefProcFn ABI.
        self.trampoline
            .get()
            .map(|&addr| unsafe { mem::transmute::<usize, DefProcFn>(addr) })
    }

    /// Writes a border color through this binding's trampoline, or through
    /// the public function while it is not hooked.
    fn write_border_color(&self, hwnd: HWND, color: u32) -> HRESULT {
        let value = &color as *const u32 as *const c_void;
        let size = mem::size_of::<u32>() as u32;

        match self.original_set_attribute() {
            // SAFETY: `value` points at a live u32 of `size` bytes.
            Some(original) => unsafe { original(hwnd, DWMWA_BORDER_COLOR, value, size) },
            None => {
                // SAFETY: as above.
                let result =
                    unsafe { DwmSetWindowAttribute(hwnd, Dwm::DWMWA_BORDER_COLOR, value, size) };
                result.map_or_else(|e| e.code(), |()| HRESULT(0))
            }
        }
    }

    /// Forwards a message to a default procedure's original implementation.
    ///
    /// # Safety
    ///
    /// `self` must be a default window or dialog procedure binding.
    unsafe fn forward(&self, hwnd: HWND, msg: u32, wparam: WPARAM, lparam: LPARAM) -> isize {
        match self.original_def_proc() {
            // SAFETY: forwards the caller's own arguments unchanged.
            Some(original) => unsafe { original(hwnd, msg, wparam, lparam).0 },
            None => 0,
        }
    }
}

pub static SET_WINDOW_ATTRIBUTE: Binding = Binding::new("dwmapi.dll", c"DwmSetWindowAttribute");
pub static DEF_WINDOW_PROC_W: Binding = Binding::new("user32.dll", c"DefWindowProcW");
pub static DEF_WINDOW_PROC_A: Binding = Binding::new("user32.dll", c"DefWindowProcA");
pub static DEF_DLG_PROC_W: Binding = Binding::new("user32.dll", c"DefDlgProcW");
pub static DEF_DLG_PROC_A: Binding = Binding::new("user32.dll", c"DefDlgProcA");

/// Installs all five hooks. A failed hook is logged and left out; its
/// calls keep reaching the original unmodified.
///
/// Returns the number of hooks installed.
pub fn install_all(installer: &impl HookInstaller) -> usize {
    let table: [(&Binding, *mut c_void); 5] = [
        (
            &SET_WINDOW_ATTRIBUTE,
            set_window_attribute_hook as SetWindowAttributeFn as *mut c_void,
        ),
        (
            &DEF_WINDOW_PROC_W,
            def_window_proc_w_hook as DefProcFn as *mut c_void,
        ),
        (
            &DEF_WINDOW_PROC_A,
            def_window_proc_a_hook as DefProcFn as *mut c_void,
        ),
        (&DEF_DLG_PROC_W, def_dlg_proc_w_hook as DefProcFn as *mut c_void),
        (&DEF_DLG_PROC_A, def_dlg_proc_a_hook as DefProcFn as *mut c_void),
    ];

    let installed = table
        .into_iter()
        .filter(|(binding, detour)| binding.install(installer, *detour))
        .count();
    bordercolor_core::log_info!("installed {installed} of 5 hooks");
    installed
}

/// Writes a border color through the original attribute-set function.
///
/// Without an installed hook the public function is still the original,
/// so it is safe to call directly.
pub fn write_border_color(hwnd: HWND, color: u32) -> HRESULT {
    SET_WINDOW_ATTRIBUTE.write_border_color(hwnd, color)
}

/// # Safety
///
/// `value` and `size` are the caller's arguments to the attribute-set
/// function and are passed on unchecked.
unsafe fn set_attribute_detour<C: Compositor>(
    engine: &Engine<C>,
    binding: &Binding,
    hwnd: HWND,
    attribute: u32,
    value: *const c_void,
    size: u32,
) -> HRESULT {
    let hr = engine.set_attribute(hwnd.0 as usize, attribute, || {
        match binding.original_set_attribute() {
            // SAFETY: forwards the caller's own arguments unchanged.
            Some(original) => unsafe { original(hwnd, attribute, value, size).0 },
            None => E_FAIL.0,
        }
    });
    HRESULT(hr)
}

/// # Safety
///
/// `binding` must be a default window procedure binding.
unsafe fn window_proc_detour<C: Compositor>(
    engine: &Engine<C>,
    binding: &Binding,
    hwnd: HWND,
    msg: u32,
    wparam: WPARAM,
    lparam: LPARAM,
) -> LRESULT {
    LRESULT(engine.window_proc(hwnd.0 as usize, msg, wparam.0, || unsafe {
        binding.forward(hwnd, msg, wparam, lparam)
    }))
}

/// # Safety
///
/// `binding` must be a default dialog procedure binding.
unsafe fn dialog_proc_detour<C: Compositor>(
    engine: &Engine<C>,
    binding: &Binding,
    hwnd: HWND,
    msg: u32,
    wparam: WPARAM,
    lparam: LPARAM,
) -> LRESULT {
    LRESULT(engine.dialog_proc(hwnd.0 as usize, msg, wparam.0, || unsafe {
        binding.forward(hwnd, msg, wparam, lparam)
    }))
}

unsafe extern "system" fn set_window_attribute_hook(
    hwnd: HWND,
    attribute: u32,
    value: *const c_void,
    size: u32,
) -> HRESULT {
    unsafe { set_attribute_detour(&ENGINE, &SET_WINDOW_ATTRIBUTE, hwnd, attribute, value, size) }
}

unsafe extern "system" fn def_window_proc_w_hook(
    hwnd: HWND,
    msg: u32,
    wparam: WPARAM,
    lparam: LPARAM,
) -> LRESULT {
    unsafe { window_proc_detour(&ENGINE, &DEF_WINDOW_PROC_W, hwnd, msg, wparam, lparam) }
}

unsafe extern "system" fn def_window_proc_a_hook(
    hwnd: HWND,
    msg: u32,
    wparam: WPARAM,
    lparam: LPARAM,
) -> LRESULT {
    unsafe { window_proc_detour(&ENGINE, &DEF_WINDOW_PROC_A, hwnd, msg, wparam, lparam) }
}

unsafe extern "system" fn def_dlg_proc_w_hook(
    hwnd: HWND,
    msg: u32,
    wparam: WPARAM,
    lparam: LPARAM,
) -> LRESULT {
    unsafe { dialog_proc_detour(&ENGINE, &DEF_DLG_PROC_W, hwnd, msg, wparam, lparam) }
}

unsafe extern "system" fn def_dlg_proc_a_hook(
    hwnd: HWND,
    msg: u32,
    wparam: WPARAM,
    lparam: LPARAM,
) -> LRESULT {
    unsafe { dialog_proc_detour(&ENGINE, &DEF_DLG_PROC_A, hwnd, msg, wparam, lparam) }
}

#[cfg(test)]
#[path = "hooks_tests.rs"]
mod tests;
