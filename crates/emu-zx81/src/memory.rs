//! ZX81 memory image.
//!
//! A flat 64K array covering the whole Z80 address space:
//!
//! - $0000-$1FFF: 8K ROM
//! - $2000-$3FFF: ROM mirror (incomplete address decoding)
//! - $4000-$FFFF: RAM (the unexpanded machine only has 1K, but the image
//!   backs all of it so every 16-bit address is in bounds)
//!
//! Writes below `RAM_START` are silently ignored, which keeps the ROM and its
//! mirror identical for the life of the session.

use crate::constants::{RAM_START, ROM_MIRROR, ROM_SIZE};

const ADDRESS_SPACE: usize = 0x1_0000;

pub struct Memory {
    data: Box<[u8]>,
}

impl Memory {
    /// Create the memory image with `rom` at $0000 and at the mirror.
    #[must_use]
    pub fn new(rom: &[u8; ROM_SIZE]) -> Self {
        let mut data = vec![0u8; ADDRESS_SPACE].into_boxed_slice();
        let mirror = ROM_MIRROR as usize;
        data[..ROM_SIZE].copy_from_slice(rom);
        data[mirror..mirror + ROM_SIZE].copy_from_slice(rom);
        Self { data }
    }

    /// Read a byte. Every address is backed, so this never fails.
    #[must_use]
    pub fn read(&self, addr: u16) -> u8 {
        self.data[addr as usize]
    }

    /// Write a byte. ROM writes are silently ignored.
    pub fn write(&mut self, addr: u16, value: u8) {
        if addr >= RAM_START {
            self.data[addr as usize] = value;
        }
    }

    /// Read a little-endian word. The high byte wraps to $0000 after $FFFF.
    #[must_use]
    pub fn read_word(&self, addr: u16) -> u16 {
        let lo = self.read(addr);
        let hi = self.read(addr.wrapping_add(1));
        u16::from(lo) | (u16::from(hi) << 8)
    }

    /// Patch a ROM byte in both the ROM and its mirror.
    ///
    /// Only used while setting the machine up; the emulated program cannot
    /// reach ROM through `write`.
    pub(crate) fn patch_rom(&mut self, offset: u16, value: u8) {
        let offset = offset as usize % ROM_SIZE;
        self.data[offset] = value;
        self.data[ROM_MIRROR as usize + offset] = value;
    }

    /// The ROM as mapped at $0000.
    #[must_use]
    pub fn rom(&self) -> &[u8] {
        &self.data[..ROM_SIZE]
    }

    /// The ROM as mapped at the mirror address.
    #[must_use]
    pub fn rom_mirror(&self) -> &[u8] {
        let start = ROM_MIRROR as usize;
        &self.data[start..start + ROM_SIZE]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_rom() -> Box<[u8; ROM_SIZE]> {
        let mut rom = Box::new([0u8; ROM_SIZE]);
        for (i, b) in rom.iter_mut().enumerate() {
            *b = (i * 7 + 3) as u8;
        }
        rom
    }

    #[test]
    fn rom_and_mirror_match_after_init() {
        let mem = Memory::new(&test_rom());
        assert_eq!(mem.rom(), mem.rom_mirror());
        assert_eq!(mem.read(0x0001), mem.read(0x2001));
    }

    #[test]
    fn rom_writes_ignored() {
        let mut mem = Memory::new(&test_rom());
        for addr in [0x0000u16, 0x1234, 0x2000, 0x3FFF] {
            let before = mem.read(addr);
            mem.write(addr, before.wrapping_add(1));
            assert_eq!(mem.read(addr), before, "write to {addr:#06X} should be ignored");
        }
    }

    #[test]
    fn ram_writes_stored() {
        let mut mem = Memory::new(&test_rom());
        for addr in [0x4000u16, 0x400C, 0x7FFF, 0xFFFF] {
            mem.write(addr, 0xA5);
            assert_eq!(mem.read(addr), 0xA5);
        }
    }

    #[test]
    fn read_word_little_endian_with_wrap() {
        let mut mem = Memory::new(&test_rom());
        mem.write(0x400C, 0x34);
        mem.write(0x400D, 0x12);
        assert_eq!(mem.read_word(0x400C), 0x1234);

        mem.write(0xFFFF, 0xCD);
        assert_eq!(mem.read_word(0xFFFF), (u16::from(mem.read(0x0000)) << 8) | 0xCD);
    }

    #[test]
    fn patch_rom_hits_both_copies() {
        let mut mem = Memory::new(&test_rom());
        mem.patch_rom(0x02B5, 0xC9);
        assert_eq!(mem.read(0x02B5), 0xC9);
        assert_eq!(mem.read(0x22B5), 0xC9);
        assert_eq!(mem.rom(), mem.rom_mirror());
    }
}
