//! Memory and I/O bus interface.

/// Memory bus interface.
///
/// The CPU reaches memory through this trait. The bus handles address
/// decoding, including any write protection.
pub trait Bus {
    /// Read a byte from the given address.
    fn read(&mut self, address: u16) -> u8;

    /// Write a byte to the given address.
    fn write(&mut self, address: u16, value: u8);
}

/// A bus that also has a separate I/O port space.
///
/// The Z80 drives a full 16-bit address during `IN`/`OUT`: the low byte is
/// the port number and the high byte comes from the instruction's register
/// operand (B for `IN r,(C)`, A for `IN A,(n)`). Machines decode whichever
/// lines they wire up.
pub trait IoBus: Bus {
    /// Read a byte from the given I/O port address.
    fn io_read(&mut self, port: u16) -> u8;

    /// Write a byte to the given I/O port address.
    fn io_write(&mut self, port: u16, value: u8);
}
