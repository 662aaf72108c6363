//! CPU core trait.

use crate::{IoBus, Ticks};

/// An instruction-stepped CPU core.
///
/// The CPU does not own memory: the bus is passed in on every step so the
/// machine can inspect and modify it between instructions (rendering,
/// keyboard updates).
pub trait Cpu {
    /// Execute exactly one instruction, accessing memory and ports through
    /// `bus`.
    ///
    /// Implementations must advance [`Cpu::total_ticks`] by the instruction's
    /// cost. A step that never advances the counter stalls any caller that
    /// runs to a cycle budget.
    fn step<B: IoBus>(&mut self, bus: &mut B);

    /// Total T-states executed since the CPU was created or reset.
    fn total_ticks(&self) -> Ticks;

    /// Returns the current program counter.
    fn pc(&self) -> u16;

    /// Reset the CPU to its power-on state.
    fn reset(&mut self);
}
