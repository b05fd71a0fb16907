//! Entry points the hosting runtime calls, in this order:
//! `bordercolor_init`, `bordercolor_after_init`, any number of
//! `bordercolor_settings_changed`, then `bordercolor_before_uninit`
//! before the host removes the hooks and unloads the module.

use std::sync::OnceLock;

use bordercolor_core::Engine;
use windows::core::BOOL;

use crate::compositor::Win32Compositor;
use crate::hooks;
use crate::host::{self, HostApi, Settings};

/// The process-wide engine every hooked entry point goes through.
pub(crate) static ENGINE: Engine<Win32Compositor> = Engine::new(Win32Compositor);

static HOST: OnceLock<HostApi> = OnceLock::new();

fn host_api() -> &'static HostApi {
    HOST.get_or_init(HostApi::default)
}

/// Loads settings and installs the hooks.
///
/// Always succeeds: a hook that fails to install is logged and the
/// module keeps running without it.
///
/// # Safety
///
/// `api` must be null or point at a valid [`HostApi`].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn bordercolor_init(api: *const HostApi) -> BOOL {
    // SAFETY: caller guarantees `api` is null or valid.
    let api = unsafe { api.as_ref() }.copied().unwrap_or_default();
    let api = HOST.get_or_init(|| api);

    host::init_logging(api);
    ENGINE.on_init(&Settings::resolve(api));
    hooks::install_all(api);

    BOOL(1)
}

/// Colors every window this process already has.
#[unsafe(no_mangle)]
pub extern "C" fn bordercolor_after_init() {
    ENGINE.on_after_init();
}

/// Reloads colors and re-applies them to every window of this process.
#[unsafe(no_mangle)]
pub extern "C" fn bordercolor_settings_changed() {
    ENGINE.on_settings_changed(&Settings::resolve(host_api()));
}

/// Hands every border back to the compositor's default.
#[unsafe(no_mangle)]
pub extern "C" fn bordercolor_before_uninit() {
    ENGINE.on_before_uninit();
}
