//! Desktop window backend (winit + pixels).
//!
//! The frame scheduler owns the loop, so the winit event loop is pumped
//! rather than run: once per frame, the first `poll_event` call drains
//! whatever the OS has queued. Closing the window or pressing Escape
//! produces `HostEvent::Quit`.

use std::collections::VecDeque;
use std::process;
use std::sync::Arc;
use std::time::{Duration, Instant};

use emu_core::Cpu;
use pixels::{Pixels, SurfaceTexture};
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::keyboard::{KeyCode as WinitKeyCode, PhysicalKey};
use winit::platform::pump_events::{EventLoopExtPumpEvents, PumpStatus};
use winit::window::{Window, WindowId};

use crate::config::Zx81Config;
use crate::constants::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::host::{Host, HostError, HostEvent};
use crate::keyboard_map::convert_keycode;
use crate::scheduler::FrameScheduler;
use crate::zx81::Zx81;

const TITLE: &str = "ZX81";

/// Event wait per pump while the window is being created.
const STARTUP_POLL: Duration = Duration::from_millis(10);

/// Winit application state: the window, its pixel surface, and the input
/// collected since the last frame.
struct WindowApp {
    window: Option<Arc<Window>>,
    pixels: Option<Pixels<'static>>,
    events: VecDeque<HostEvent>,
    error: Option<HostError>,
}

impl WindowApp {
    fn new() -> Self {
        Self {
            window: None,
            pixels: None,
            events: VecDeque::new(),
            error: None,
        }
    }

    fn create_surface(&mut self, event_loop: &ActiveEventLoop) -> Result<(), HostError> {
        let size = LogicalSize::new(SCREEN_WIDTH as u32, SCREEN_HEIGHT as u32);
        let window = Arc::new(
            event_loop
                .create_window(
                    Window::default_attributes()
                        .with_title(TITLE)
                        .with_inner_size(size)
                        .with_resizable(false),
                )
                .map_err(|e| HostError::Window(e.to_string()))?,
        );

        let size = window.inner_size();
        let surface = SurfaceTexture::new(size.width, size.height, Arc::clone(&window));
        let pixels = Pixels::new(SCREEN_WIDTH as u32, SCREEN_HEIGHT as u32, surface)
            .map_err(|e| HostError::Surface(e.to_string()))?;

        self.window = Some(window);
        self.pixels = Some(pixels);
        Ok(())
    }
}

impl ApplicationHandler for WindowApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(e) = self.create_surface(event_loop) {
            self.error = Some(e);
            event_loop.exit();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                self.events.push_back(HostEvent::Quit);
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if size.width > 0
                    && size.height > 0
                    && let Some(pixels) = &mut self.pixels
                    && let Err(e) = pixels.resize_surface(size.width, size.height)
                {
                    log::warn!("surface resize failed: {e}");
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                let PhysicalKey::Code(keycode) = event.physical_key else {
                    return;
                };
                if keycode == WinitKeyCode::Escape {
                    if event.state == ElementState::Pressed {
                        self.events.push_back(HostEvent::Quit);
                    }
                    return;
                }
                let Some(key) = convert_keycode(keycode) else {
                    return;
                };
                match event.state {
                    ElementState::Pressed if !event.repeat => {
                        self.events.push_back(HostEvent::KeyDown(key));
                    }
                    ElementState::Pressed => {}
                    ElementState::Released => self.events.push_back(HostEvent::KeyUp(key)),
                }
            }

            _ => {}
        }
    }
}

/// `Host` backed by a desktop window.
pub struct WindowHost {
    event_loop: EventLoop<()>,
    app: WindowApp,
    pumped: bool,
    closed: bool,
}

impl WindowHost {
    /// Open the window. Fails if no window or pixel surface can be created.
    pub fn new() -> Result<Self, HostError> {
        let event_loop = EventLoop::new().map_err(|e| HostError::EventLoop(e.to_string()))?;
        let mut host = Self {
            event_loop,
            app: WindowApp::new(),
            pumped: false,
            closed: false,
        };

        // The window is created in `resumed`, which some platforms deliver
        // only after several pumps.
        loop {
            let status = host
                .event_loop
                .pump_app_events(Some(STARTUP_POLL), &mut host.app);
            if let Some(ready) = startup_state(&mut host.app, &status) {
                ready?;
                break;
            }
        }
        Ok(host)
    }

    fn pump(&mut self) {
        let status = self
            .event_loop
            .pump_app_events(Some(Duration::ZERO), &mut self.app);
        if let PumpStatus::Exit(code) = status
            && !self.closed
        {
            log::debug!("event loop exited with status {code}");
            self.closed = true;
            self.app.events.push_back(HostEvent::Quit);
        }
        self.pumped = true;
    }
}

/// Startup progress after one pump: `None` to keep pumping, `Some(Ok)`
/// once the surface exists, `Some(Err)` if it never will.
fn startup_state(app: &mut WindowApp, status: &PumpStatus) -> Option<Result<(), HostError>> {
    if let Some(e) = app.error.take() {
        return Some(Err(e));
    }
    if app.pixels.is_some() {
        return Some(Ok(()));
    }
    match status {
        PumpStatus::Exit(_) => Some(Err(HostError::Closed)),
        PumpStatus::Continue => None,
    }
}

impl Host for WindowHost {
    fn poll_event(&mut self) -> Option<HostEvent> {
        if !self.pumped && !self.closed {
            self.pump();
        }
        self.app.events.pop_front()
    }

    fn present(&mut self, framebuffer: &[u32]) -> Result<(), HostError> {
        self.pumped = false;
        if let Some(e) = self.app.error.take() {
            return Err(e);
        }
        if self.closed {
            // Dropping the surface before the window releases both.
            self.app.pixels = None;
            self.app.window = None;
            return Ok(());
        }
        let Some(pixels) = &mut self.app.pixels else {
            return Err(HostError::Closed);
        };

        for (dst, &argb) in pixels.frame_mut().chunks_exact_mut(4).zip(framebuffer) {
            dst[0] = (argb >> 16) as u8;
            dst[1] = (argb >> 8) as u8;
            dst[2] = argb as u8;
            dst[3] = (argb >> 24) as u8;
        }

        pixels
            .render()
            .map_err(|e| HostError::Render(e.to_string()))
    }

    fn now(&self) -> Instant {
        Instant::now()
    }

    fn sleep(&mut self, duration: Duration) {
        spin_sleep::sleep(duration);
    }
}

/// Run a session in a desktop window until the user quits.
///
/// Returns the number of frames run.
pub fn run<C: Cpu>(zx81: &mut Zx81<C>, config: &Zx81Config) -> Result<u64, HostError> {
    let mut host = WindowHost::new()?;
    FrameScheduler::new(config).run(zx81, &mut host)
}

/// Build a session around `cpu` and run it in a window.
///
/// Any failure is fatal: the error goes to stderr and the process exits
/// with status 1.
pub fn run_or_exit<C: Cpu>(cpu: C, config: &Zx81Config) {
    let mut zx81 = match Zx81::new(cpu, config) {
        Ok(zx81) => zx81,
        Err(e) => {
            eprintln!("Failed to start ZX81: {e}");
            process::exit(1);
        }
    };

    if let Err(e) = run(&mut zx81, config) {
        eprintln!("ZX81 window error: {e}");
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn startup_waits_for_surface() {
        let mut app = WindowApp::new();
        assert_eq!(startup_state(&mut app, &PumpStatus::Continue), None);
    }

    #[test]
    fn startup_fails_if_loop_exits_first() {
        let mut app = WindowApp::new();
        assert_eq!(
            startup_state(&mut app, &PumpStatus::Exit(0)),
            Some(Err(HostError::Closed))
        );
    }

    #[test]
    fn startup_reports_creation_error() {
        let mut app = WindowApp::new();
        app.error = Some(HostError::Window("no display".into()));
        assert_eq!(
            startup_state(&mut app, &PumpStatus::Continue),
            Some(Err(HostError::Window("no display".into())))
        );
        assert!(app.error.is_none());
    }
}
