//! Logs the safe-area values a desktop window reports.
//!
//! Run with `cargo run -p carve_platform_desktop --example log_insets`.
//! Desktop windows have no cutout, so the only delivery is the zero
//! baseline at creation; the safe rectangle tracks the window size.

use std::sync::Arc;

use carve_platform::{
    inset_mailbox, InsetReceiver, InsetSender, SafeAreaBridge, SurfaceLifecycle,
};
use carve_platform_desktop::DesktopSafeAreaHost;
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

struct App {
    bridge: Option<SafeAreaBridge<DesktopSafeAreaHost, InsetSender>>,
    sender: Option<InsetSender>,
    receiver: InsetReceiver,
}

impl App {
    fn drain(&mut self) {
        let Some(bridge) = &self.bridge else { return };
        let (width, height) = bridge.host().surface_size();
        while let Some(insets) = self.receiver.take_latest() {
            let rect = insets.safe_rect(width, height);
            tracing::info!(
                "safe area insets {:?} -> rect {}x{} at ({}, {})",
                insets,
                rect.width(),
                rect.height(),
                rect.left,
                rect.top
            );
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.bridge.is_none() {
            let window = Arc::new(
                event_loop
                    .create_window(Window::default_attributes().with_title("carve safe area"))
                    .expect("failed to create window"),
            );
            let host = DesktopSafeAreaHost::new(window);
            let sender = self.sender.take().expect("resumed twice without a window");
            let mut bridge = SafeAreaBridge::new(host, sender);
            bridge.on_create();
            bridge.on_attach();
            self.bridge = Some(bridge);
            self.drain();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(_) => {
                // Re-query after layout changes; on desktop this is a
                // no-op and the baseline stays in effect.
                if let Some(bridge) = &mut self.bridge {
                    bridge.on_attach();
                }
                self.drain();
            }
            _ => {}
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let (sender, receiver) = inset_mailbox();
    let mut app = App {
        bridge: None,
        sender: Some(sender),
        receiver,
    };

    let event_loop = EventLoop::new().expect("failed to create event loop");
    event_loop.set_control_flow(ControlFlow::Wait);
    event_loop.run_app(&mut app).expect("event loop failed");
}
