//! Safe-area bridge: host geometry in, consumer notifications out.

use crate::host::{CutoutHost, SurfaceLifecycle};
use crate::insets::SafeAreaInsets;
use crate::sink::SafeAreaSink;

/// Translates host cutout geometry into consumer notifications.
///
/// The bridge owns its host handle and sink; platform glue drives it
/// through [`SurfaceLifecycle`]. Delivery is exactly once per relevant
/// event: a `(0,0,0,0)` baseline at creation, then the reported insets on
/// each successful attach-time query. Unavailable geometry (unsupported
/// platform version, window not laid out yet, no cutout present) is a
/// silent no-op rather than a partial or sentinel delivery, and the next
/// host callback is the only recovery path.
pub struct SafeAreaBridge<H, S> {
    host: H,
    sink: S,
}

impl<H: CutoutHost, S: SafeAreaSink> SafeAreaBridge<H, S> {
    /// Create a bridge over the given host, delivering into the given
    /// sink.
    pub fn new(host: H, sink: S) -> Self {
        Self { host, sink }
    }

    /// The host handle.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable access to the host handle.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Consume the bridge, returning the sink.
    pub fn into_sink(self) -> S {
        self.sink
    }
}

impl<H: CutoutHost, S: SafeAreaSink> SurfaceLifecycle for SafeAreaBridge<H, S> {
    fn on_create(&mut self) {
        self.host.extend_into_cutout();

        // Baseline before any cutout-specific event can arrive: the
        // consumer always has a defined inset value.
        self.sink.safe_area_changed(SafeAreaInsets::ZERO);
    }

    fn on_attach(&mut self) {
        if !self.host.supports_cutout() {
            tracing::trace!("host cannot report cutout geometry, keeping last insets");
            return;
        }
        match self.host.cutout_insets() {
            Some(insets) => {
                tracing::debug!("safe area changed: {:?}", insets);
                self.sink.safe_area_changed(insets);
            }
            // Window not laid out yet, or no cutout present. The value
            // delivered previously (or the creation-time baseline) stays
            // authoritative.
            None => tracing::trace!("no cutout geometry available, keeping last insets"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct RecordingSink {
        delivered: Rc<RefCell<Vec<SafeAreaInsets>>>,
    }

    impl RecordingSink {
        fn delivered(&self) -> Vec<SafeAreaInsets> {
            self.delivered.borrow().clone()
        }
    }

    impl SafeAreaSink for RecordingSink {
        fn safe_area_changed(&mut self, insets: SafeAreaInsets) {
            self.delivered.borrow_mut().push(insets);
        }
    }

    struct FakeHost {
        supported: bool,
        insets: Option<SafeAreaInsets>,
        extend_calls: usize,
    }

    impl FakeHost {
        fn new(supported: bool) -> Self {
            Self {
                supported,
                insets: None,
                extend_calls: 0,
            }
        }
    }

    impl CutoutHost for FakeHost {
        fn supports_cutout(&self) -> bool {
            self.supported
        }

        fn cutout_insets(&self) -> Option<SafeAreaInsets> {
            self.insets
        }

        fn extend_into_cutout(&mut self) {
            self.extend_calls += 1;
        }
    }

    #[test]
    fn create_delivers_exactly_one_zero_baseline() {
        for supported in [false, true] {
            let sink = RecordingSink::default();
            let mut bridge = SafeAreaBridge::new(FakeHost::new(supported), sink.clone());
            bridge.on_create();
            assert_eq!(sink.delivered(), vec![SafeAreaInsets::ZERO]);
        }
    }

    #[test]
    fn create_requests_cutout_display_mode() {
        let sink = RecordingSink::default();
        let mut bridge = SafeAreaBridge::new(FakeHost::new(true), sink);
        bridge.on_create();
        assert_eq!(bridge.host().extend_calls, 1);
    }

    #[test]
    fn attach_on_unsupported_host_delivers_nothing() {
        let sink = RecordingSink::default();
        let mut bridge = SafeAreaBridge::new(FakeHost::new(false), sink.clone());
        // Even with geometry present, an unsupported host is never queried.
        bridge.host_mut().insets = Some(SafeAreaInsets::new(0, 48, 0, 0));
        bridge.on_attach();
        assert!(sink.delivered().is_empty());
    }

    #[test]
    fn attach_delivers_reported_insets_exactly_once() {
        let sink = RecordingSink::default();
        let mut bridge = SafeAreaBridge::new(FakeHost::new(true), sink.clone());
        bridge.host_mut().insets = Some(SafeAreaInsets::new(10, 48, 20, 30));
        bridge.on_attach();
        assert_eq!(sink.delivered(), vec![SafeAreaInsets::new(10, 48, 20, 30)]);
    }

    #[test]
    fn attach_without_geometry_is_a_no_op() {
        let sink = RecordingSink::default();
        let mut bridge = SafeAreaBridge::new(FakeHost::new(true), sink.clone());
        bridge.on_attach();
        bridge.on_attach();
        assert!(sink.delivered().is_empty());
    }

    #[test]
    fn missing_geometry_never_overwrites_a_known_value() {
        let sink = RecordingSink::default();
        let mut bridge = SafeAreaBridge::new(FakeHost::new(true), sink.clone());

        // Startup on a supported device.
        bridge.on_create();
        assert_eq!(sink.delivered(), vec![SafeAreaInsets::ZERO]);

        // Device reports a cutout on attach.
        bridge.host_mut().insets = Some(SafeAreaInsets::new(0, 48, 0, 0));
        bridge.on_attach();

        // A later attach reports no cutout; the last known value stands.
        bridge.host_mut().insets = None;
        bridge.on_attach();

        let delivered = sink.delivered();
        assert_eq!(delivered.len(), 2);
        assert_eq!(delivered.last(), Some(&SafeAreaInsets::new(0, 48, 0, 0)));
    }
}
