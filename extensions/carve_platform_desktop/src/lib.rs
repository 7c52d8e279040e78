//! Carve Desktop Platform
//!
//! Safe-area host for macOS, Windows, and Linux windows.

pub mod window;

pub use window::DesktopSafeAreaHost;
