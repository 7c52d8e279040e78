//! Consumer-side delivery contract.

use crate::insets::{SafeAreaInsets, SafeRect};

/// Downstream consumer of safe-area updates.
///
/// Delivery is one-way and fire-and-forget: no return value, no
/// acknowledgment, no retry. Implementations must not panic back into the
/// caller; the bridge treats the hand-off as infallible. The newest value
/// is always authoritative, so implementations may discard any value they
/// previously retained.
pub trait SafeAreaSink {
    /// Receive the latest safe-area insets.
    fn safe_area_changed(&mut self, insets: SafeAreaInsets);
}

/// Wraps a closure as a [`SafeAreaSink`].
pub struct SinkFn<F>(F);

impl<F: FnMut(SafeAreaInsets)> SinkFn<F> {
    /// Wrap the given closure.
    pub fn new(f: F) -> Self {
        Self(f)
    }
}

impl<F: FnMut(SafeAreaInsets)> SafeAreaSink for SinkFn<F> {
    fn safe_area_changed(&mut self, insets: SafeAreaInsets) {
        (self.0)(insets)
    }
}

/// Four-integer notification signature crossing a foreign-function
/// boundary, in fixed `(left, top, right, bottom)` order.
pub type RawSafeAreaFn = extern "C" fn(left: i32, top: i32, right: i32, bottom: i32);

/// Adapts a raw foreign callback into a [`SafeAreaSink`].
///
/// The callee must not unwind back across the boundary; the call carries
/// no result and is never retried.
pub struct RawCallbackSink {
    notify: RawSafeAreaFn,
}

impl RawCallbackSink {
    /// Wrap the given foreign notification function.
    pub const fn new(notify: RawSafeAreaFn) -> Self {
        Self { notify }
    }
}

impl SafeAreaSink for RawCallbackSink {
    fn safe_area_changed(&mut self, insets: SafeAreaInsets) {
        (self.notify)(
            insets.left as i32,
            insets.top as i32,
            insets.right as i32,
            insets.bottom as i32,
        );
    }
}

/// Retained consumer state: the latest delivered insets.
///
/// Engines that poll each frame rather than react to pushes can hold one
/// of these as their sink and query the safe rectangle against the
/// current surface size.
#[derive(Clone, Copy, Debug, Default)]
pub struct InsetStore {
    insets: SafeAreaInsets,
}

impl InsetStore {
    /// Create a store holding the zero baseline.
    pub const fn new() -> Self {
        Self {
            insets: SafeAreaInsets::ZERO,
        }
    }

    /// The most recently delivered insets.
    pub const fn insets(&self) -> SafeAreaInsets {
        self.insets
    }

    /// Safe drawing rectangle for the current surface size.
    pub fn safe_rect(&self, width: u32, height: u32) -> SafeRect {
        self.insets.safe_rect(width, height)
    }
}

impl SafeAreaSink for InsetStore {
    fn safe_area_changed(&mut self, insets: SafeAreaInsets) {
        self.insets = insets;
    }
}
