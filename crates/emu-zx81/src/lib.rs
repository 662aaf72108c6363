//! Sinclair ZX81 machine harness.
//!
//! Everything around the Z80 except the Z80 itself: the 64K memory image
//! with its mirrored 8K ROM, the keyboard matrix and its row-scan port, a
//! glyph atlas built from the ROM character set, a display-file decoder
//! that redraws the 32×24 text screen every frame, and a scheduler that
//! runs 65,000 T-states per 20 ms frame.
//!
//! The CPU is supplied by the caller through `emu_core::Cpu`. The desktop
//! window backend is behind the `native` feature.

pub mod bus;
mod config;
pub mod constants;
mod font;
mod host;
pub mod input;
mod keyboard;
#[cfg(feature = "native")]
pub mod keyboard_map;
mod memory;
mod scheduler;
mod video;
#[cfg(feature = "native")]
pub mod window;
mod zx81;

pub use bus::Zx81Bus;
pub use config::{FRAME_PERIOD, Zx81Config};
pub use font::{FontAtlas, FontError, INK, PAPER};
pub use host::{Host, HostError, HostEvent};
pub use input::{ERASE_KEY, KeyTable, Zx81Key};
pub use keyboard::{KeyPosition, KeyboardMatrix};
pub use memory::Memory;
pub use scheduler::{FrameOutcome, FramePacer, FrameScheduler};
pub use video::{FRAMEBUFFER_PIXELS, render_display};
pub use zx81::{Zx81, Zx81Error};
