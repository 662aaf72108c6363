//! Presentation backend interface.
//!
//! The frame scheduler talks to the outside world only through [`Host`]:
//! it polls input events, hands over finished frames, and asks for the time
//! and for pacing sleeps. The window backend implements it on top of winit;
//! tests implement it with a virtual clock.

use std::fmt;
use std::time::{Duration, Instant};

use emu_core::KeyCode;

/// Input delivered by a host between frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostEvent {
    KeyDown(KeyCode),
    KeyUp(KeyCode),
    /// The user asked to stop. The current frame still completes.
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostError {
    /// The event loop could not be created.
    EventLoop(String),
    /// The window could not be created.
    Window(String),
    /// The pixel surface could not be created.
    Surface(String),
    /// Presenting a frame failed.
    Render(String),
    /// The window went away before a frame could be presented.
    Closed,
}

impl fmt::Display for HostError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EventLoop(msg) => write!(f, "failed to create event loop: {msg}"),
            Self::Window(msg) => write!(f, "failed to create window: {msg}"),
            Self::Surface(msg) => write!(f, "failed to create pixel surface: {msg}"),
            Self::Render(msg) => write!(f, "failed to present frame: {msg}"),
            Self::Closed => write!(f, "window closed"),
        }
    }
}

impl std::error::Error for HostError {}

/// Presentation backend.
pub trait Host {
    /// Next pending input event, or `None` once the queue is drained.
    fn poll_event(&mut self) -> Option<HostEvent>;

    /// Show a finished frame (ARGB32, `SCREEN_WIDTH` × `SCREEN_HEIGHT`).
    fn present(&mut self, framebuffer: &[u32]) -> Result<(), HostError>;

    /// Current wall-clock instant.
    fn now(&self) -> Instant;

    /// Block for `duration`.
    fn sleep(&mut self, duration: Duration);
}
