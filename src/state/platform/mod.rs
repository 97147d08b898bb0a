//! Platform-specific abstractions.
//!
//! - [`clipboard`] - Cross-platform clipboard access (X11, Wayland, macOS, Windows)

pub mod clipboard;
