//! Desktop safe-area host over winit
//!
//! Desktop displays carry no cutout hardware, so the entire window is
//! safe: the host never reports insets and the creation-time zero
//! baseline stays authoritative for the life of the window. This also
//! makes desktop builds a convenient place to debug safe-area-dependent
//! layout against the full window rectangle.

use std::sync::Arc;

use carve_platform::{CutoutHost, SafeAreaInsets};
use winit::window::Window as WinitWindow;

/// Desktop host wrapping a winit window.
pub struct DesktopSafeAreaHost {
    window: Arc<WinitWindow>,
}

impl DesktopSafeAreaHost {
    /// Create a host over the given window.
    pub fn new(window: Arc<WinitWindow>) -> Self {
        Self { window }
    }

    /// Get the underlying winit window.
    pub fn winit_window(&self) -> &WinitWindow {
        &self.window
    }

    /// Current drawable surface size in physical pixels.
    ///
    /// With the zero baseline, the safe rectangle is exactly this size.
    pub fn surface_size(&self) -> (u32, u32) {
        let size = self.window.inner_size();
        (size.width, size.height)
    }
}

impl CutoutHost for DesktopSafeAreaHost {
    fn supports_cutout(&self) -> bool {
        false
    }

    fn cutout_insets(&self) -> Option<SafeAreaInsets> {
        None
    }

    fn extend_into_cutout(&mut self) {
        // No display mode to toggle on desktop.
    }
}
