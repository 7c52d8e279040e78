//! iOS safe-area host over UIKit
//!
//! Reads the key window's `safeAreaInsets` on the main thread. UIKit
//! already lays content out edge to edge, so there is no display mode to
//! toggle. Inset values are UIKit points, rounded to whole units.

use carve_platform::{CutoutHost, SafeAreaInsets};

/// iOS host backed by the application's key window.
///
/// Queries must run on the main thread; a query from any other thread
/// reports no geometry.
#[derive(Debug, Default)]
pub struct IosSafeAreaHost;

impl IosSafeAreaHost {
    /// Create a host for the shared application.
    pub fn new() -> Self {
        Self
    }
}

#[cfg(target_os = "ios")]
fn key_window_insets() -> Option<SafeAreaInsets> {
    use objc2::MainThreadMarker;
    use objc2_ui_kit::UIApplication;

    let Some(mtm) = MainThreadMarker::new() else {
        tracing::debug!("safe-area query off the main thread, reporting no geometry");
        return None;
    };
    let app = UIApplication::sharedApplication(mtm);
    let window = app.keyWindow()?;
    let raw = window.safeAreaInsets();
    let insets = SafeAreaInsets::from_raw(
        raw.left.round() as i32,
        raw.top.round() as i32,
        raw.right.round() as i32,
        raw.bottom.round() as i32,
    );
    if insets.is_zero() {
        // Nothing occluded; the creation-time baseline already covers it.
        None
    } else {
        Some(insets)
    }
}

impl CutoutHost for IosSafeAreaHost {
    fn supports_cutout(&self) -> bool {
        cfg!(target_os = "ios")
    }

    fn cutout_insets(&self) -> Option<SafeAreaInsets> {
        #[cfg(target_os = "ios")]
        {
            key_window_insets()
        }
        #[cfg(not(target_os = "ios"))]
        {
            None
        }
    }

    fn extend_into_cutout(&mut self) {
        // UIKit windows already extend under the cutout.
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stub_host_reports_no_geometry_off_device() {
        #[cfg(not(target_os = "ios"))]
        {
            let host = IosSafeAreaHost::new();
            assert!(!host.supports_cutout());
            assert_eq!(host.cutout_insets(), None);
        }
    }
}
