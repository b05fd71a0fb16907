use bordercolor_core::config::{self, ACTIVE_SETTING, Config, INACTIVE_SETTING, SettingsSource};
use bordercolor_core::state::ConfiguredColor;
use bordercolor_core::{Color, ColorState};

/// ANSI escape helpers for doctor output.
const OK: &str = "\x1b[32m[ok]\x1b[0m";
const WARN: &str = "\x1b[33m[warn]\x1b[0m";
const FAIL: &str = "\x1b[31m[fail]\x1b[0m";

pub fn execute() {
    println!();
    check_config_dir();
    let config = check_config_file();
    check_colors(&config);
    println!();
}

fn check_config_dir() {
    match config::config_dir() {
        Some(dir) if dir.is_dir() => {
            println!("  {OK} Config directory exists ({})", dir.display());
        }
        Some(dir) => {
            println!("  {WARN} Config directory missing ({})", dir.display());
        }
        None => {
            println!("  {FAIL} Could not determine home directory");
        }
    }
}

fn check_config_file() -> Config {
    let Some(path) = config::config_path() else {
        println!("  {FAIL} Could not determine config path");
        return Config::default();
    };
    if !path.exists() {
        println!("  {WARN} config.toml not found (using defaults)");
        return Config::default();
    }
    match config::try_load() {
        Ok(config) => {
            println!("  {OK} config.toml is valid");
            config
        }
        Err(e) => {
            println!("  {FAIL} config.toml: {e}");
            Config::default()
        }
    }
}

/// Loads the colors the same way the module does on init and reports
/// what each setting resolves to.
fn check_colors(config: &Config) {
    let state = ColorState::new();
    state.reload(
        config.string_setting(ACTIVE_SETTING).as_deref(),
        config.string_setting(INACTIVE_SETTING).as_deref(),
    );
    let (active, inactive) = state.snapshot();
    check_color(ACTIVE_SETTING, &active);
    check_color(INACTIVE_SETTING, &inactive);
}

fn check_color(name: &str, configured: &ConfiguredColor) {
    let text = &configured.source;
    let word = configured.color.to_colorref();
    if Color::from_hex(text).is_some() {
        println!("  {OK} {name} = {text:?} -> 0x{word:08X}");
    } else {
        println!(
            "  {FAIL} {name} = {text:?} is not #RRGGBB, falls back to {} (0x{word:08X})",
            configured.color
        );
    }
}
