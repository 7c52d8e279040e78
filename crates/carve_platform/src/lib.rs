//! Carve Platform
//!
//! This crate provides the platform-agnostic contract for safe-area
//! (display-cutout) delivery:
//!
//! - **Inset model**: normalized, non-negative safe-area insets
//! - **Host contract**: how a windowing backend reports cutout geometry
//! - **Bridge**: turns host lifecycle callbacks into consumer notifications
//! - **Mailbox**: latest-value-wins hand-off to consumers on another thread
//!
//! Platform backends live in their own crates (`carve_platform_android`,
//! `carve_platform_desktop`, `carve_platform_ios`) and implement
//! [`CutoutHost`]; render/layout engines implement [`SafeAreaSink`].
//!
//! # Example
//!
//! ```rust
//! use carve_platform::{inset_mailbox, SafeAreaBridge, SurfaceLifecycle};
//! use carve_platform::{CutoutHost, SafeAreaInsets};
//!
//! struct NoCutoutHost;
//!
//! impl CutoutHost for NoCutoutHost {
//!     fn supports_cutout(&self) -> bool {
//!         false
//!     }
//!     fn cutout_insets(&self) -> Option<SafeAreaInsets> {
//!         None
//!     }
//!     fn extend_into_cutout(&mut self) {}
//! }
//!
//! let (sender, mut receiver) = inset_mailbox();
//! let mut bridge = SafeAreaBridge::new(NoCutoutHost, sender);
//!
//! bridge.on_create();
//! assert_eq!(receiver.take_latest(), Some(SafeAreaInsets::ZERO));
//!
//! bridge.on_attach();
//! assert_eq!(receiver.take_latest(), None);
//! ```

pub mod bridge;
pub mod error;
pub mod host;
pub mod insets;
pub mod mailbox;
pub mod sink;

pub use bridge::SafeAreaBridge;
pub use error::{PlatformError, Result};
pub use host::{CutoutHost, SurfaceLifecycle};
pub use insets::{SafeAreaInsets, SafeRect};
pub use mailbox::{inset_mailbox, InsetReceiver, InsetSender};
pub use sink::{InsetStore, RawCallbackSink, RawSafeAreaFn, SafeAreaSink, SinkFn};
