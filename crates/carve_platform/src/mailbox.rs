//! Cross-thread inset delivery.
//!
//! The bridge runs synchronously on the host UI thread. When the consumer
//! lives on another thread, deliveries are marshalled through this mailbox
//! with latest-value-wins semantics: a value superseded before the
//! consumer drains it is dropped, and a monotonic sequence number keeps a
//! publish that lost the race from regressing the slot.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use crate::insets::SafeAreaInsets;
use crate::sink::SafeAreaSink;

#[derive(Default)]
struct Slot {
    seq: u64,
    pending: Option<SafeAreaInsets>,
}

struct Shared {
    slot: Mutex<Slot>,
    next_seq: AtomicU64,
}

/// Create a connected sender/receiver pair.
pub fn inset_mailbox() -> (InsetSender, InsetReceiver) {
    let shared = Arc::new(Shared {
        slot: Mutex::new(Slot::default()),
        next_seq: AtomicU64::new(0),
    });
    (
        InsetSender {
            shared: Arc::clone(&shared),
            wake: None,
        },
        InsetReceiver { shared },
    )
}

/// Publishing half of the mailbox.
///
/// Implements [`SafeAreaSink`], so it can sit directly behind a
/// [`SafeAreaBridge`](crate::SafeAreaBridge). Cheap to clone; clones share
/// the same slot and sequence counter.
pub struct InsetSender {
    shared: Arc<Shared>,
    wake: Option<Arc<dyn Fn() + Send + Sync>>,
}

impl Clone for InsetSender {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
            wake: self.wake.clone(),
        }
    }
}

impl InsetSender {
    /// Install a callback invoked after every publish, so the consumer's
    /// event loop can be nudged out of a wait.
    pub fn set_wake_callback(&mut self, wake: impl Fn() + Send + Sync + 'static) {
        self.wake = Some(Arc::new(wake));
    }

    fn publish(&self, insets: SafeAreaInsets) {
        let seq = self.shared.next_seq.fetch_add(1, Ordering::Relaxed) + 1;
        self.publish_with_seq(seq, insets);
    }

    fn publish_with_seq(&self, seq: u64, insets: SafeAreaInsets) {
        {
            let mut slot = self.shared.slot.lock().unwrap();
            // A publish that acquired its sequence earlier but the lock
            // later is stale; it must not replace a newer value.
            if seq > slot.seq {
                slot.seq = seq;
                slot.pending = Some(insets);
            }
        }
        if let Some(wake) = &self.wake {
            wake();
        }
    }
}

impl SafeAreaSink for InsetSender {
    fn safe_area_changed(&mut self, insets: SafeAreaInsets) {
        self.publish(insets);
    }
}

/// Consuming half of the mailbox. Single consumer.
pub struct InsetReceiver {
    shared: Arc<Shared>,
}

impl InsetReceiver {
    /// Drain the newest undelivered value, if any.
    ///
    /// Values superseded between calls are never observed; the drained
    /// value is always the latest one published.
    pub fn take_latest(&mut self) -> Option<SafeAreaInsets> {
        self.shared.slot.lock().unwrap().pending.take()
    }

    /// Sequence number of the most recent publish, for observability.
    pub fn latest_seq(&self) -> u64 {
        self.shared.slot.lock().unwrap().seq
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;
    use std::thread;

    #[test]
    fn publish_then_take_returns_the_value_once() {
        let (mut sender, mut receiver) = inset_mailbox();
        sender.safe_area_changed(SafeAreaInsets::new(0, 48, 0, 0));
        assert_eq!(receiver.take_latest(), Some(SafeAreaInsets::new(0, 48, 0, 0)));
        assert_eq!(receiver.take_latest(), None);
    }

    #[test]
    fn intermediate_values_are_superseded() {
        let (mut sender, mut receiver) = inset_mailbox();
        sender.safe_area_changed(SafeAreaInsets::new(0, 10, 0, 0));
        sender.safe_area_changed(SafeAreaInsets::new(0, 20, 0, 0));
        sender.safe_area_changed(SafeAreaInsets::new(0, 30, 0, 0));
        assert_eq!(receiver.take_latest(), Some(SafeAreaInsets::new(0, 30, 0, 0)));
        assert_eq!(receiver.take_latest(), None);
        assert_eq!(receiver.latest_seq(), 3);
    }

    #[test]
    fn stale_publish_does_not_regress_the_slot() {
        let (sender, mut receiver) = inset_mailbox();
        sender.publish_with_seq(2, SafeAreaInsets::new(0, 20, 0, 0));
        sender.publish_with_seq(1, SafeAreaInsets::new(0, 10, 0, 0));
        assert_eq!(receiver.take_latest(), Some(SafeAreaInsets::new(0, 20, 0, 0)));
        assert_eq!(receiver.latest_seq(), 2);
    }

    #[test]
    fn wake_callback_fires_on_every_publish() {
        let (mut sender, _receiver) = inset_mailbox();
        let wakes = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&wakes);
        sender.set_wake_callback(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        sender.safe_area_changed(SafeAreaInsets::ZERO);
        sender.safe_area_changed(SafeAreaInsets::new(0, 48, 0, 0));
        assert_eq!(wakes.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn cross_thread_publishes_deliver_the_latest_value() {
        let (sender, mut receiver) = inset_mailbox();
        let publisher = thread::spawn(move || {
            let mut sender = sender;
            for top in 1..=100u32 {
                sender.safe_area_changed(SafeAreaInsets::new(0, top, 0, 0));
            }
        });
        publisher.join().unwrap();
        assert_eq!(receiver.take_latest(), Some(SafeAreaInsets::new(0, 100, 0, 0)));
        assert_eq!(receiver.latest_seq(), 100);
    }
}
