//! The narrow C interface shared with the hosting runtime.
//!
//! The host loads this module into a target process, hands over a
//! [`HostApi`] table in `bordercolor_init`, and later calls the other
//! exported lifecycle functions (see [`crate::module`]). Any entry of the
//! table may be null; the module then degrades as documented on each
//! field.

use std::ffi::c_void;
use std::ptr;

use bordercolor_core::config::{self, Config, SettingsSource};
use bordercolor_core::log::{self, Level};
use windows::core::{BOOL, HSTRING, PCWSTR};

/// Installs a function hook.
pub trait HookInstaller {
    /// Redirects calls to `target` into `detour` and returns a pointer
    /// through which the original implementation stays callable, or
    /// `None` if the hook could not be installed.
    fn install(&self, target: *mut c_void, detour: *mut c_void) -> Option<*mut c_void>;
}

/// Function table supplied by the hosting runtime. All strings are
/// null-terminated UTF-16.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default)]
pub struct HostApi {
    /// Hooks `target` with `detour`, storing the trampoline to the
    /// original in `*original`. Hooks must not take effect before
    /// `bordercolor_init` returns. Null: no hooks, nothing is intercepted.
    pub install_hook: Option<
        unsafe extern "C" fn(target: *mut c_void, detour: *mut c_void, original: *mut *mut c_void) -> BOOL,
    >,
    /// Returns the value of a named string setting, or null. Null: the
    /// settings are read from `config.toml` instead.
    pub get_string_setting: Option<unsafe extern "C" fn(name: PCWSTR) -> PCWSTR>,
    /// Releases a value returned by `get_string_setting`.
    pub free_string_setting: Option<unsafe extern "C" fn(value: PCWSTR)>,
    /// Writes one diagnostic line. Null: file logging per `config.toml`.
    pub log: Option<unsafe extern "C" fn(message: PCWSTR)>,
}

impl HookInstaller for HostApi {
    fn install(&self, target: *mut c_void, detour: *mut c_void) -> Option<*mut c_void> {
        let install_hook = self.install_hook?;
        let mut original = ptr::null_mut();
        // SAFETY: the host contract; `original` is a live local.
        let ok = unsafe { install_hook(target, detour, &mut original) };
        (ok.as_bool() && !original.is_null()).then_some(original)
    }
}

impl SettingsSource for HostApi {
    fn string_setting(&self, name: &str) -> Option<String> {
        let get = self.get_string_setting?;
        let wide_name: Vec<u16> = name.encode_utf16().chain(std::iter::once(0)).collect();

        // SAFETY: `wide_name` is null-terminated and outlives the call.
        let value = unsafe { get(PCWSTR(wide_name.as_ptr())) };
        if value.is_null() {
            return None;
        }

        // Ill-formed UTF-16 is still a value; the codec decides whether
        // it is a color.
        // SAFETY: the host returned a null-terminated string that stays
        // valid until we free it below.
        let text = String::from_utf16_lossy(unsafe { value.as_wide() });
        if let Some(free) = self.free_string_setting {
            // SAFETY: `value` came from `get_string_setting`.
            unsafe { free(value) };
        }
        Some(text)
    }
}

/// Where color settings are read from on load and on every change.
pub enum Settings<'a> {
    Host(&'a HostApi),
    File(Config),
}

impl<'a> Settings<'a> {
    /// Prefers the host's settings; falls back to `config.toml`.
    pub fn resolve(api: &'a HostApi) -> Self {
        if api.get_string_setting.is_some() {
            Self::Host(api)
        } else {
            Self::File(config::load())
        }
    }
}

impl SettingsSource for Settings<'_> {
    fn string_setting(&self, name: &str) -> Option<String> {
        match self {
            Self::Host(api) => api.string_setting(name),
            Self::File(config) => config.string_setting(name),
        }
    }
}

/// Routes logging to the host, or to the file logger if the host has
/// no logging function.
pub fn init_logging(api: &HostApi) {
    let Some(host_log) = api.log else {
        log::init(&config::load().logging);
        return;
    };
    log::init_host(
        Level::Debug,
        Box::new(move |level, line| {
            let message = HSTRING::from(format!("[{}] {line}", level.as_str()));
            // SAFETY: `message` is null-terminated and outlives the call.
            unsafe { host_log(PCWSTR(message.as_ptr())) };
        }),
    );
}
