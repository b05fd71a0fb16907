mod loader;
pub mod template;

use serde::{Deserialize, Serialize};

use crate::log::LogConfig;
use crate::state::{DEFAULT_ACTIVE, DEFAULT_INACTIVE};

pub use loader::{config_dir, config_path, load, try_load};

/// Host setting name of the active border color.
pub const ACTIVE_SETTING: &str = "activeBorderColor";

/// Host setting name of the inactive border color.
pub const INACTIVE_SETTING: &str = "inactiveBorderColor";

/// Where string settings come from.
///
/// The hosting runtime provides one; a [`Config`] loaded from disk is
/// another.
pub trait SettingsSource {
    /// Returns the value of the named setting, or `None` if it is unset.
    fn string_setting(&self, name: &str) -> Option<String>;
}

/// Top-level file configuration.
///
/// Loaded from `~/.config/bordercolor/config.toml`. Missing sections
/// fall back to defaults thanks to `#[serde(default)]`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Border color settings.
    pub borders: BorderConfig,
    /// File logging settings.
    pub logging: LogConfig,
}

/// Border color configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BorderConfig {
    /// Hex color for the focused window border (e.g. "#0078D4").
    pub active: String,
    /// Hex color for unfocused window borders (e.g. "#808080").
    pub inactive: String,
}

impl Default for BorderConfig {
    fn default() -> Self {
        Self {
            active: DEFAULT_ACTIVE.into(),
            inactive: DEFAULT_INACTIVE.into(),
        }
    }
}

impl SettingsSource for Config {
    fn string_setting(&self, name: &str) -> Option<String> {
        match name {
            ACTIVE_SETTING => Some(self.borders.active.clone()),
            INACTIVE_SETTING => Some(self.borders.inactive.clone()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_expected_values() {
        // Arrange / Act
        let config = Config::default();

        // Assert
        assert_eq!(config.borders.active, "#0078D4");
        assert_eq!(config.borders.inactive, "#808080");
        assert!(!config.logging.enabled);
    }

    #[test]
    fn partial_toml_uses_defaults_for_missing_sections() {
        // Arrange
        let toml_str = "[borders]\nactive = \"#ff0000\"\n";

        // Act
        let config: Config = toml::from_str(toml_str).unwrap();

        // Assert
        assert_eq!(config.borders.active, "#ff0000");
        assert_eq!(config.borders.inactive, "#808080");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn config_answers_host_setting_names() {
        // Arrange
        let config = Config {
            borders: BorderConfig {
                active: "#112233".into(),
                inactive: "#445566".into(),
            },
            ..Default::default()
        };

        // Act / Assert
        assert_eq!(
            config.string_setting(ACTIVE_SETTING).as_deref(),
            Some("#112233")
        );
        assert_eq!(
            config.string_setting(INACTIVE_SETTING).as_deref(),
            Some("#445566")
        );
        assert_eq!(config.string_setting("titlebarColor"), None);
    }
}
