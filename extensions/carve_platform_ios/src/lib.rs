//! Carve iOS Platform
//!
//! UIKit safe-area integration.

pub mod window;

pub use window::IosSafeAreaHost;
