//! Host-side window geometry contract.

use crate::insets::SafeAreaInsets;

/// A host window that can be queried for display-cutout geometry.
///
/// Implemented by platform backends; the bridge only ever sees this
/// trait. All methods are synchronous and must be called on the host
/// UI/event thread.
pub trait CutoutHost {
    /// Whether the platform can report cutout geometry at all.
    ///
    /// Hosts on platform versions that predate the first cutout API
    /// return false, and the bridge will never query them.
    fn supports_cutout(&self) -> bool;

    /// The current cutout insets.
    ///
    /// Returns `None` while the window has no computable geometry yet,
    /// or when the display has no cutout. A `Some` value is always a
    /// real, reported cutout.
    fn cutout_insets(&self) -> Option<SafeAreaInsets>;

    /// Ask the host to lay content out underneath the cutout area.
    ///
    /// Purely a display-mode side effect with no data-model consequence.
    /// Hosts without such a mode ignore the request; failures are logged
    /// and swallowed.
    fn extend_into_cutout(&mut self);
}

/// The two lifecycle hook points a host environment drives.
///
/// Platform glue invokes these in response to its own surface callbacks
/// instead of the bridge subclassing anything host-specific.
pub trait SurfaceLifecycle {
    /// The rendering surface (application) has been created.
    ///
    /// Invoked once at startup, before any attach event can arrive.
    fn on_create(&mut self);

    /// The rendering surface has been attached to the host window.
    ///
    /// May be invoked again whenever the host re-attaches or re-lays-out
    /// the surface; each invocation re-queries geometry.
    fn on_attach(&mut self);
}
