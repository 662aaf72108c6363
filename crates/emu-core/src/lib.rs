//! Core traits and types for instruction-stepped machine emulation.
//!
//! Machine crates own their memory and peripherals and expose them to an
//! external CPU interpreter through [`Bus`] and [`IoBus`]. The CPU reports
//! elapsed time as [`Ticks`] of its own clock; frame budgets derive from a
//! [`MasterClock`].

mod bus;
mod clock;
mod cpu;
mod keys;
mod observable;
mod ticks;

pub use bus::{Bus, IoBus};
pub use clock::MasterClock;
pub use cpu::Cpu;
pub use keys::KeyCode;
pub use observable::{Observable, Value};
pub use ticks::Ticks;
