//! Carve Android Platform
//!
//! Display-cutout queries over JNI, the inbound notification symbol for
//! Java-activity hosts, and Android logging setup.

pub mod activity;
pub mod callback;

pub use activity::AndroidCutoutHost;
pub use callback::install_jni_sink;

#[cfg(target_os = "android")]
pub use activity::on_main_event;

/// Initialize Android logging for `log` crate macros.
///
/// Safe to call more than once; only the first call takes effect.
#[cfg(target_os = "android")]
pub fn init_logging() {
    android_logger::init_once(
        android_logger::Config::default()
            .with_max_level(log::LevelFilter::Debug)
            .with_tag("Carve"),
    );
}
