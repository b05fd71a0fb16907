//! Module load, configuration change and unload.
//!
//! The host drives these in order: [`Engine::on_init`] before hooks are
//! installed, [`Engine::on_after_init`] once they are live,
//! [`Engine::on_settings_changed`] whenever the user edits settings, and
//! [`Engine::on_before_uninit`] before the hooks are removed.

use crate::compositor::Compositor;
use crate::config::{ACTIVE_SETTING, INACTIVE_SETTING, SettingsSource};
use crate::engine::Engine;
use crate::state::{DEFAULT_ACTIVE, DEFAULT_INACTIVE};

impl<C: Compositor> Engine<C> {
    /// Reads both color settings and reloads the color state.
    ///
    /// An unset setting takes its own default text; a malformed one
    /// falls back to the codec fallback.
    pub fn load_settings(&self, settings: &impl SettingsSource) {
        let active = settings.string_setting(ACTIVE_SETTING);
        let inactive = settings.string_setting(INACTIVE_SETTING);
        self.colors().reload(
            Some(active.as_deref().unwrap_or(DEFAULT_ACTIVE)),
            Some(inactive.as_deref().unwrap_or(DEFAULT_INACTIVE)),
        );
    }

    pub fn on_init(&self, settings: &impl SettingsSource) {
        crate::log_info!("init");
        self.load_settings(settings);
    }

    pub fn on_after_init(&self) {
        crate::log_info!("after init");
        self.apply_all();
    }

    /// Reloads colors and re-applies them to every owned window.
    pub fn on_settings_changed(&self, settings: &impl SettingsSource) {
        crate::log_info!("settings changed, reloading");
        self.load_settings(settings);
        self.apply_all();
    }

    pub fn on_before_uninit(&self) {
        crate::log_info!("before uninit");
        self.reset_all();
    }
}
