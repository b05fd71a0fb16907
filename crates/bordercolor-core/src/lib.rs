pub mod classify;
pub mod color;
pub mod compositor;
pub mod config;
pub mod engine;
pub mod intercept;
pub mod lifecycle;
pub mod log;
pub mod state;

pub use color::Color;
pub use compositor::Compositor;
pub use config::SettingsSource;
pub use engine::Engine;
pub use state::ColorState;
