//! Display file decoder.
//!
//! The ZX81 screen is a character map. D_FILE points at the display file,
//! which starts with a NEWLINE ($76) byte followed by 24 lines of 32
//! character codes, each line terminated by another $76. This decoder
//! assumes an expanded (full-length) display file.
//!
//! The whole screen is redrawn every frame. The emulated program can move
//! the display file or rewrite it at any time, so nothing is cached between
//! frames. A corrupt pointer draws garbage but cannot fault: addresses wrap
//! at 16 bits and every byte value has an atlas tile.

use crate::constants::{CELL_SIZE, D_FILE, SCREEN_WIDTH, TEXT_COLUMNS, TEXT_ROWS};
use crate::font::FontAtlas;
use crate::memory::Memory;

/// Framebuffer length in pixels.
pub const FRAMEBUFFER_PIXELS: usize = SCREEN_WIDTH * TEXT_ROWS * CELL_SIZE;

/// Render the display file into `framebuffer` (ARGB32, `SCREEN_WIDTH` wide).
///
/// # Panics
///
/// Panics if `framebuffer` holds fewer than `FRAMEBUFFER_PIXELS` pixels.
pub fn render_display(memory: &Memory, font: &FontAtlas, framebuffer: &mut [u32]) {
    let mut cursor = memory.read_word(D_FILE);

    for row in 0..TEXT_ROWS {
        for col in 0..TEXT_COLUMNS {
            cursor = cursor.wrapping_add(1);
            let code = memory.read(cursor);
            blit_tile(font.tile(code), framebuffer, col * CELL_SIZE, row * CELL_SIZE);
        }
        // Step over the line's NEWLINE marker
        cursor = cursor.wrapping_add(1);
    }
}

/// Copy a CELL_SIZE×CELL_SIZE tile to pixel position (`x`, `y`).
fn blit_tile(tile: &[u32], framebuffer: &mut [u32], x: usize, y: usize) {
    for (line, src) in tile.chunks_exact(CELL_SIZE).enumerate() {
        let start = (y + line) * SCREEN_WIDTH + x;
        framebuffer[start..start + CELL_SIZE].copy_from_slice(src);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{CHARSET, END_OF_LINE, ROM_SIZE};
    use crate::font::{INK, PAPER};

    /// ROM with glyph 0 blank and glyph 1 solid.
    fn make_rom() -> Box<[u8; ROM_SIZE]> {
        let mut rom = Box::new([0u8; ROM_SIZE]);
        rom[CHARSET + 8..CHARSET + 16].fill(0xFF);
        rom
    }

    fn cell(framebuffer: &[u32], row: usize, col: usize) -> Vec<u32> {
        let mut out = Vec::with_capacity(CELL_SIZE * CELL_SIZE);
        for line in 0..CELL_SIZE {
            let start = (row * CELL_SIZE + line) * SCREEN_WIDTH + col * CELL_SIZE;
            out.extend_from_slice(&framebuffer[start..start + CELL_SIZE]);
        }
        out
    }

    /// Lay out a display file at `base` with every cell set to `code`.
    fn fill_display(memory: &mut Memory, base: u16, code: u8) {
        memory.write(D_FILE, base as u8);
        memory.write(D_FILE + 1, (base >> 8) as u8);
        let mut addr = base;
        memory.write(addr, END_OF_LINE);
        for _ in 0..TEXT_ROWS {
            for _ in 0..TEXT_COLUMNS {
                addr = addr.wrapping_add(1);
                memory.write(addr, code);
            }
            addr = addr.wrapping_add(1);
            memory.write(addr, END_OF_LINE);
        }
    }

    #[test]
    fn uniform_display_fills_every_cell() {
        let rom = make_rom();
        let font = FontAtlas::from_rom(&rom[..]).expect("atlas");
        let mut memory = Memory::new(&rom);
        fill_display(&mut memory, 0x4400, 1);

        let mut fb = vec![0u32; FRAMEBUFFER_PIXELS];
        render_display(&memory, &font, &mut fb);
        assert!(fb.iter().all(|&p| p == INK));
    }

    #[test]
    fn cells_follow_line_layout() {
        let rom = make_rom();
        let font = FontAtlas::from_rom(&rom[..]).expect("atlas");
        let mut memory = Memory::new(&rom);
        fill_display(&mut memory, 0x4400, 0);

        // Row 2, column 5: skip the leading NEWLINE, two full lines of
        // 33 bytes, then five cells.
        memory.write(0x4400 + 1 + 2 * 33 + 5, 1);
        // Inverse blank on the last cell of the screen.
        memory.write(0x4400 + 23 * 33 + 32, 128);

        let mut fb = vec![0u32; FRAMEBUFFER_PIXELS];
        render_display(&memory, &font, &mut fb);

        assert_eq!(cell(&fb, 2, 5), font.tile(1));
        assert_eq!(cell(&fb, 2, 4), font.tile(0));
        assert_eq!(cell(&fb, 2, 6), font.tile(0));
        assert_eq!(cell(&fb, 3, 5), font.tile(0));
        assert_eq!(cell(&fb, 23, 31), font.tile(128));
        assert!(cell(&fb, 0, 0).iter().all(|&p| p == PAPER));
    }

    #[test]
    fn pointer_read_fresh_each_frame() {
        let rom = make_rom();
        let font = FontAtlas::from_rom(&rom[..]).expect("atlas");
        let mut memory = Memory::new(&rom);
        fill_display(&mut memory, 0x4400, 0);
        fill_display(&mut memory, 0x6000, 1);

        let mut fb = vec![0u32; FRAMEBUFFER_PIXELS];
        render_display(&memory, &font, &mut fb);
        assert!(fb.iter().all(|&p| p == INK));

        memory.write(D_FILE, 0x00);
        memory.write(D_FILE + 1, 0x44);
        render_display(&memory, &font, &mut fb);
        assert!(fb.iter().all(|&p| p == PAPER));
    }

    #[test]
    fn pointer_near_top_of_memory_wraps() {
        let rom = make_rom();
        let font = FontAtlas::from_rom(&rom[..]).expect("atlas");
        let mut memory = Memory::new(&rom);
        memory.write(D_FILE, 0xF0);
        memory.write(D_FILE + 1, 0xFF);

        // Must not panic; wraps into ROM.
        let mut fb = vec![0u32; FRAMEBUFFER_PIXELS];
        render_display(&memory, &font, &mut fb);
    }
}
