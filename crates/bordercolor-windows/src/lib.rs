//! Windows binding of `bordercolor-core`.
//!
//! Built as a `cdylib` loaded into a target process by a hosting runtime
//! that installs function hooks on our behalf (see [`host::HostApi`]).
#![cfg(windows)]

/// Win32 implementation of the core `Compositor` trait.
pub mod compositor;

/// Top-level window enumeration.
pub mod enumerate;

/// Hook binding table and the hooked entry points.
pub mod hooks;

/// The C ABI shared with the hosting runtime.
pub mod host;

/// Exported module lifecycle entry points.
pub mod module;

/// Window type wrapping a Win32 `HWND`.
pub mod window;

pub use compositor::Win32Compositor;
pub use enumerate::{enumerate_windows, process_windows};
pub use window::Window;
