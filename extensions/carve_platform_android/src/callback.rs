//! Inbound JNI notification entry point.
//!
//! Hosts that keep a Java activity (rather than NativeActivity) forward
//! the four inset values from their UI thread through a declared native
//! method:
//!
//! ```java
//! public class CarveActivity extends Activity {
//!     private static native void nativeSafeAreaChanged(
//!             int left, int top, int right, int bottom);
//! }
//! ```
//!
//! The exported symbol publishes into a process-wide installed
//! [`InsetSender`], so the consumer side looks the same for Java-activity
//! and native-activity hosts.

use std::sync::{Mutex, OnceLock};

use carve_platform::{InsetSender, SafeAreaInsets, SafeAreaSink};

static JNI_SINK: OnceLock<Mutex<InsetSender>> = OnceLock::new();

/// Install the process-wide sender fed by the exported JNI symbol.
///
/// Returns false if a sender was already installed; the first one wins.
pub fn install_jni_sink(sender: InsetSender) -> bool {
    let installed = JNI_SINK.set(Mutex::new(sender)).is_ok();
    if !installed {
        tracing::warn!("JNI safe-area sink already installed, ignoring replacement");
    }
    installed
}

/// Forward a raw notification into the installed sink.
///
/// Values are clamped to the non-negative range; with no sink installed
/// the notification is dropped.
#[cfg_attr(not(target_os = "android"), allow(dead_code))]
fn deliver(left: i32, top: i32, right: i32, bottom: i32) {
    let insets = SafeAreaInsets::from_raw(left, top, right, bottom);
    match JNI_SINK.get() {
        Some(sink) => {
            if let Ok(mut sender) = sink.lock() {
                sender.safe_area_changed(insets);
            }
        }
        None => tracing::debug!(
            "safe-area notification dropped, no sink installed: {:?}",
            insets
        ),
    }
}

/// JNI entry point for `CarveActivity.nativeSafeAreaChanged`.
#[cfg(target_os = "android")]
#[no_mangle]
pub extern "system" fn Java_dev_carve_host_CarveActivity_nativeSafeAreaChanged(
    _env: jni::JNIEnv,
    _class: jni::objects::JClass,
    left: jni::sys::jint,
    top: jni::sys::jint,
    right: jni::sys::jint,
    bottom: jni::sys::jint,
) {
    deliver(left, top, right, bottom);
}

#[cfg(test)]
mod tests {
    use super::*;
    use carve_platform::inset_mailbox;

    // One test function on purpose: the installed sink is process-wide.
    #[test]
    fn deliveries_flow_into_the_installed_mailbox() {
        let (sender, mut receiver) = inset_mailbox();
        assert!(install_jni_sink(sender));

        deliver(0, 48, 0, 0);
        assert_eq!(receiver.take_latest(), Some(SafeAreaInsets::new(0, 48, 0, 0)));

        // Negative values are clamped at the process boundary.
        deliver(-3, 12, -1, 0);
        assert_eq!(receiver.take_latest(), Some(SafeAreaInsets::new(0, 12, 0, 0)));

        // A second install is rejected; deliveries keep flowing to the
        // first sink.
        let (other, mut other_rx) = inset_mailbox();
        assert!(!install_jni_sink(other));
        deliver(7, 7, 7, 7);
        assert_eq!(receiver.take_latest(), Some(SafeAreaInsets::new(7, 7, 7, 7)));
        assert_eq!(other_rx.take_latest(), None);
    }
}
