//! Android cutout host
//!
//! Queries the activity window's DisplayCutout through JNI and configures
//! the layout-in-cutout display mode.

use carve_platform::{CutoutHost, SafeAreaInsets};

#[cfg(target_os = "android")]
use android_activity::{AndroidApp, MainEvent};
#[cfg(target_os = "android")]
use carve_platform::SurfaceLifecycle;
#[cfg(target_os = "android")]
use ndk::native_window::NativeWindow;

/// First SDK level with the DisplayCutout API (Android 9).
pub const SDK_FIRST_CUTOUT: i32 = 28;
/// First SDK level allowing always-draw-into-cutout (Android 11).
pub const SDK_CUTOUT_ALWAYS: i32 = 30;

// WindowManager.LayoutParams constants.
const LAYOUT_IN_DISPLAY_CUTOUT_MODE_SHORT_EDGES: i32 = 1;
const LAYOUT_IN_DISPLAY_CUTOUT_MODE_ALWAYS: i32 = 3;

/// Layout-in-cutout mode for an SDK level, if any applies.
///
/// SHORT_EDGES only covers some cutouts; ALWAYS needs Android 11.
fn cutout_mode_for_sdk(sdk_int: i32) -> Option<i32> {
    if sdk_int >= SDK_CUTOUT_ALWAYS {
        Some(LAYOUT_IN_DISPLAY_CUTOUT_MODE_ALWAYS)
    } else if sdk_int >= SDK_FIRST_CUTOUT {
        Some(LAYOUT_IN_DISPLAY_CUTOUT_MODE_SHORT_EDGES)
    } else {
        None
    }
}

/// Android host window backed by the activity's decor view.
///
/// Inset queries walk `getWindow().getDecorView().getRootWindowInsets()`
/// to the `DisplayCutout`; a missing link anywhere along that chain means
/// the geometry is not available yet and the query reports `None`.
pub struct AndroidCutoutHost {
    #[cfg(target_os = "android")]
    app: AndroidApp,
    sdk_int: i32,
}

#[cfg(target_os = "android")]
impl AndroidCutoutHost {
    /// Create a host for the given activity.
    ///
    /// The device SDK level is queried once and cached; if the query
    /// fails the host behaves as an unsupported platform.
    pub fn new(app: AndroidApp) -> Self {
        let sdk_int = jni_glue::device_sdk_int(&app).unwrap_or_else(|e| {
            tracing::warn!("Failed to query Build.VERSION.SDK_INT: {}", e);
            0
        });
        Self { app, sdk_int }
    }

    /// Current drawable surface size in physical pixels, once the native
    /// window exists.
    pub fn surface_size(&self) -> Option<(u32, u32)> {
        let window: NativeWindow = self.app.native_window()?;
        Some((window.width() as u32, window.height() as u32))
    }
}

// Stub constructor for non-Android builds (for cross-compilation checks)
#[cfg(not(target_os = "android"))]
impl AndroidCutoutHost {
    /// Create a placeholder host (reports nothing off-device).
    pub fn new() -> Self {
        Self { sdk_int: 0 }
    }
}

#[cfg(not(target_os = "android"))]
impl Default for AndroidCutoutHost {
    fn default() -> Self {
        Self::new()
    }
}

impl AndroidCutoutHost {
    /// The cached `android.os.Build.VERSION.SDK_INT` value.
    pub fn sdk_int(&self) -> i32 {
        self.sdk_int
    }
}

impl CutoutHost for AndroidCutoutHost {
    fn supports_cutout(&self) -> bool {
        self.sdk_int >= SDK_FIRST_CUTOUT
    }

    fn cutout_insets(&self) -> Option<SafeAreaInsets> {
        #[cfg(target_os = "android")]
        {
            match jni_glue::query_cutout_insets(&self.app) {
                Ok(insets) => insets,
                Err(e) => {
                    // Unavailable geometry is a normal no-op, not a fault.
                    tracing::debug!("Cutout query failed: {}", e);
                    None
                }
            }
        }
        #[cfg(not(target_os = "android"))]
        {
            None
        }
    }

    fn extend_into_cutout(&mut self) {
        let Some(mode) = cutout_mode_for_sdk(self.sdk_int) else {
            return;
        };
        #[cfg(target_os = "android")]
        if let Err(e) = jni_glue::set_cutout_mode(&self.app, mode) {
            tracing::warn!("Failed to set cutout display mode: {}", e);
        }
        #[cfg(not(target_os = "android"))]
        let _ = mode;
    }
}

/// Drive the bridge's lifecycle hooks from android-activity main events.
///
/// `InitWindow` is the first point the decor view can answer inset
/// queries; `ContentRectChanged` re-queries after any later layout
/// change. Call [`SurfaceLifecycle::on_create`] once yourself before
/// entering the poll loop.
#[cfg(target_os = "android")]
pub fn on_main_event(bridge: &mut impl SurfaceLifecycle, event: &MainEvent<'_>) {
    match event {
        MainEvent::InitWindow { .. } | MainEvent::ContentRectChanged => bridge.on_attach(),
        _ => {}
    }
}

#[cfg(target_os = "android")]
mod jni_glue {
    use android_activity::AndroidApp;
    use carve_platform::{PlatformError, Result, SafeAreaInsets};
    use jni::objects::{JObject, JValue};
    use jni::{JNIEnv, JavaVM};

    fn host_err(e: jni::errors::Error) -> PlatformError {
        PlatformError::Host(e.to_string())
    }

    /// Run a closure with an attached JNI environment and the activity
    /// object. A pending Java exception from a failed call is cleared so
    /// it cannot leak back into the host thread.
    fn with_activity<F, R>(app: &AndroidApp, f: F) -> Result<R>
    where
        for<'j> F: FnOnce(&mut JNIEnv<'j>, &JObject<'j>) -> jni::errors::Result<R>,
    {
        let vm = unsafe { JavaVM::from_raw(app.vm_as_ptr() as *mut jni::sys::JavaVM) }
            .map_err(host_err)?;
        let mut env = vm.attach_current_thread().map_err(host_err)?;
        let activity = unsafe { JObject::from_raw(app.activity_as_ptr() as jni::sys::jobject) };
        let result = f(&mut env, &activity);
        if result.is_err() {
            let _ = env.exception_clear();
        }
        result.map_err(host_err)
    }

    pub(super) fn device_sdk_int(app: &AndroidApp) -> Result<i32> {
        with_activity(app, |env, _activity| {
            let version = env.find_class("android/os/Build$VERSION")?;
            env.get_static_field(version, "SDK_INT", "I")?.i()
        })
    }

    pub(super) fn query_cutout_insets(app: &AndroidApp) -> Result<Option<SafeAreaInsets>> {
        with_activity(app, |env, activity| {
            let window = env
                .call_method(activity, "getWindow", "()Landroid/view/Window;", &[])?
                .l()?;
            let decor = env
                .call_method(&window, "getDecorView", "()Landroid/view/View;", &[])?
                .l()?;
            let insets = env
                .call_method(
                    &decor,
                    "getRootWindowInsets",
                    "()Landroid/view/WindowInsets;",
                    &[],
                )?
                .l()?;
            if insets.is_null() {
                return Ok(None);
            }
            let cutout = env
                .call_method(
                    &insets,
                    "getDisplayCutout",
                    "()Landroid/view/DisplayCutout;",
                    &[],
                )?
                .l()?;
            if cutout.is_null() {
                return Ok(None);
            }

            let left = env.call_method(&cutout, "getSafeInsetLeft", "()I", &[])?.i()?;
            let top = env.call_method(&cutout, "getSafeInsetTop", "()I", &[])?.i()?;
            let right = env
                .call_method(&cutout, "getSafeInsetRight", "()I", &[])?
                .i()?;
            let bottom = env
                .call_method(&cutout, "getSafeInsetBottom", "()I", &[])?
                .i()?;

            Ok(Some(SafeAreaInsets::from_raw(left, top, right, bottom)))
        })
    }

    pub(super) fn set_cutout_mode(app: &AndroidApp, mode: i32) -> Result<()> {
        with_activity(app, |env, activity| {
            let window = env
                .call_method(activity, "getWindow", "()Landroid/view/Window;", &[])?
                .l()?;
            let attrs = env
                .call_method(
                    &window,
                    "getAttributes",
                    "()Landroid/view/WindowManager$LayoutParams;",
                    &[],
                )?
                .l()?;
            env.set_field(&attrs, "layoutInDisplayCutoutMode", "I", JValue::Int(mode))?;
            env.call_method(
                &window,
                "setAttributes",
                "(Landroid/view/WindowManager$LayoutParams;)V",
                &[JValue::Object(&attrs)],
            )?;
            Ok(())
        })
    }
}
