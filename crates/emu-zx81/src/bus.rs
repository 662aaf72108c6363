//! ZX81 bus: memory and I/O routing.
//!
//! The bus connects the Z80 CPU to the memory image and the keyboard. Only
//! the keyboard is wired to the I/O space: any even port reads a keyboard
//! row, odd ports float high, and there is nothing to write to.

use emu_core::{Bus, IoBus};

use crate::keyboard::KeyboardMatrix;
use crate::memory::Memory;

/// The ZX81 bus, implementing `emu_core::Bus` and `emu_core::IoBus`.
///
/// Owns the memory and keyboard matrix. The CPU reaches both through the
/// traits; the session reaches them through the public fields.
pub struct Zx81Bus {
    pub memory: Memory,
    pub keyboard: KeyboardMatrix,
}

impl Zx81Bus {
    #[must_use]
    pub fn new(memory: Memory) -> Self {
        Self {
            memory,
            keyboard: KeyboardMatrix::new(),
        }
    }

    /// Port read with the row selector given explicitly.
    ///
    /// `port` is the low address byte; `selector` is the high byte (the B
    /// register when the ROM executes `IN A,(C)`).
    #[must_use]
    pub fn port_in(&self, port: u8, selector: u8) -> u8 {
        if port & 0x01 == 0 {
            self.keyboard.scan(selector)
        } else {
            0xFF
        }
    }

    /// Port write. No output peripherals are emulated.
    pub fn port_out(&mut self, _port: u8, _value: u8) {}
}

impl Bus for Zx81Bus {
    fn read(&mut self, address: u16) -> u8 {
        self.memory.read(address)
    }

    fn write(&mut self, address: u16, value: u8) {
        self.memory.write(address, value);
    }
}

impl IoBus for Zx81Bus {
    fn io_read(&mut self, port: u16) -> u8 {
        self.port_in(port as u8, (port >> 8) as u8)
    }

    fn io_write(&mut self, port: u16, value: u8) {
        self.port_out(port as u8, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::ROM_SIZE;
    use crate::keyboard::KeyPosition;

    fn make_bus() -> Zx81Bus {
        let mut rom = Box::new([0u8; ROM_SIZE]);
        rom[0] = 0xD3;
        rom[0x1FFF] = 0x42;
        Zx81Bus::new(Memory::new(&rom))
    }

    #[test]
    fn write_below_boundary_ignored() {
        let mut bus = make_bus();
        bus.write(0x0000, 0x00);
        bus.write(0x3FFF, 0x11);
        assert_eq!(bus.read(0x0000), 0xD3);
        assert_eq!(bus.read(0x3FFF), 0x42);
    }

    #[test]
    fn write_at_boundary_stored() {
        let mut bus = make_bus();
        bus.write(0x4000, 0x5A);
        bus.write(0xFFFF, 0xA5);
        assert_eq!(bus.read(0x4000), 0x5A);
        assert_eq!(bus.read(0xFFFF), 0xA5);
    }

    #[test]
    fn even_port_scans_selected_row() {
        let mut bus = make_bus();
        bus.keyboard.press(KeyPosition::new(3, 1));

        assert_eq!(bus.port_in(0xFE, 0xF7), 0xFD);
        assert_eq!(bus.port_in(0xFE, 0xFE), 0xFF);
        // Any even port works, not just $FE
        assert_eq!(bus.port_in(0x00, 0xF7), 0xFD);
    }

    #[test]
    fn selector_all_ones_reads_ff() {
        let mut bus = make_bus();
        bus.keyboard.press(KeyPosition::new(0, 0));
        assert_eq!(bus.port_in(0xFE, 0xFF), 0xFF);
    }

    #[test]
    fn odd_port_floats_high() {
        let mut bus = make_bus();
        for row in 0..8 {
            bus.keyboard.press(KeyPosition::new(row, 0));
        }
        for port in [0x01u8, 0xFF, 0x7F] {
            assert_eq!(bus.port_in(port, 0x00), 0xFF);
            assert_eq!(bus.port_in(port, 0xFE), 0xFF);
        }
    }

    #[test]
    fn io_read_splits_port_address() {
        let mut bus = make_bus();
        bus.keyboard.press(KeyPosition::new(6, 0));
        // B = $BF selects row 6, C = $FE
        assert_eq!(bus.io_read(0xBFFE), 0xFE);
        assert_eq!(bus.io_read(0xBFFF), 0xFF);
    }

    #[test]
    fn port_writes_change_nothing() {
        let mut bus = make_bus();
        bus.io_write(0x00FE, 0x00);
        bus.io_write(0x40FD, 0xFF);
        assert_eq!(bus.keyboard, KeyboardMatrix::new());
        assert_eq!(bus.read(0x4000), 0x00);
    }
}
