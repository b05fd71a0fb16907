/// Generates the default `config.toml` contents with explanatory comments.
///
/// This is used by `bordercolor init` to create a starter config file
/// that users can immediately edit.
pub fn generate_config() -> String {
    r##"# Border color configuration
# Location: ~/.config/bordercolor/config.toml
#
# Used when the hosting runtime does not provide its own settings.

[borders]
# Colors are hexadecimal RGB: "#RRGGBB". The leading "#" is optional.
# Transparency is not supported; any alpha digits after the first six
# are ignored. Invalid values fall back to "#0078D4".
#
# Border of the focused window.
active = "#0078D4"
# Border of every other window.
inactive = "#808080"

[logging]
# Enable file logging to ~/.config/bordercolor/logs/bordercolor.log.
enabled = false
# Minimum log level: "debug", "info", "warn", or "error".
level = "info"
# Maximum log file size in MB before rotation.
max_file_mb = 10
"##
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn generated_config_parses_to_defaults() {
        // Arrange
        let content = generate_config();

        // Act
        let config: Config = toml::from_str(&content).unwrap();

        // Assert
        let defaults = Config::default();
        assert_eq!(config.borders.active, defaults.borders.active);
        assert_eq!(config.borders.inactive, defaults.borders.inactive);
        assert_eq!(config.logging.max_file_mb, defaults.logging.max_file_mb);
    }
}
