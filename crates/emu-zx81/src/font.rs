//! Glyph atlas built from the ROM character set.
//!
//! The ZX81 ROM holds 64 glyphs of 8×8 pixels at $1E00. Display file bytes
//! 0-63 show a glyph normally, bytes 128-191 show it in inverse video. The
//! atlas pre-renders every one of the 256 possible byte values as a 16×16
//! tile (each source pixel becomes a 2×2 block), so the display decoder can
//! index it with any byte without a bounds check.
//!
//! Byte values with no glyph (64-127, 192-255) get a solid black tile.

use std::fmt;

use crate::constants::{CELL_SIZE, CHARSET, CHARSET_GLYPHS, GLYPH_SIZE, SCALE};

/// Ink colour (ARGB32): set bits in a normal glyph.
pub const INK: u32 = 0xFF00_0000;

/// Paper colour (ARGB32): clear bits in a normal glyph.
pub const PAPER: u32 = 0xFFFF_FFFF;

/// Colour of tiles with no glyph.
pub const BLANK: u32 = 0xFF00_0000;

/// Pixels in one 16×16 tile.
pub const TILE_PIXELS: usize = CELL_SIZE * CELL_SIZE;

/// One tile per display byte value.
pub const TILE_COUNT: usize = 256;

/// Tile offset of the inverse-video copy of each glyph.
pub const INVERSE_OFFSET: usize = 128;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FontError {
    /// The ROM ends before the character table does.
    RomTooShort { len: usize, needed: usize },
}

impl fmt::Display for FontError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RomTooShort { len, needed } => write!(
                f,
                "ROM too short for character set: {len} bytes (need at least {needed})"
            ),
        }
    }
}

impl std::error::Error for FontError {}

/// Pre-rendered glyph tiles, one per byte value.
///
/// Tiles are stored back to back, each 16 rows of 16 ARGB32 pixels.
#[derive(Clone, PartialEq, Eq)]
pub struct FontAtlas {
    pixels: Vec<u32>,
}

impl FontAtlas {
    /// Rasterize the character table found in `rom`.
    pub fn from_rom(rom: &[u8]) -> Result<Self, FontError> {
        let needed = CHARSET + CHARSET_GLYPHS * GLYPH_SIZE;
        let Some(table) = rom.get(CHARSET..needed) else {
            return Err(FontError::RomTooShort {
                len: rom.len(),
                needed,
            });
        };

        let mut pixels = vec![BLANK; TILE_COUNT * TILE_PIXELS];
        for (code, glyph) in table.chunks_exact(GLYPH_SIZE).enumerate() {
            let normal = code * TILE_PIXELS;
            let inverse = (code + INVERSE_OFFSET) * TILE_PIXELS;
            for (row, &bits) in glyph.iter().enumerate() {
                for col in 0..GLYPH_SIZE {
                    let set = bits & (0x80 >> col) != 0;
                    let (fg, bg) = if set { (INK, PAPER) } else { (PAPER, INK) };
                    paint_block(&mut pixels[normal..normal + TILE_PIXELS], row, col, fg);
                    paint_block(&mut pixels[inverse..inverse + TILE_PIXELS], row, col, bg);
                }
            }
        }

        Ok(Self { pixels })
    }

    /// The 16×16 tile for display byte `code`.
    #[must_use]
    pub fn tile(&self, code: u8) -> &[u32] {
        let start = code as usize * TILE_PIXELS;
        &self.pixels[start..start + TILE_PIXELS]
    }

    /// All tiles, back to back.
    #[must_use]
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }
}

impl fmt::Debug for FontAtlas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FontAtlas")
            .field("tiles", &TILE_COUNT)
            .finish_non_exhaustive()
    }
}

/// Fill the SCALE×SCALE block for source pixel (`row`, `col`) of a tile.
fn paint_block(tile: &mut [u32], row: usize, col: usize, colour: u32) {
    for dy in 0..SCALE {
        let line = (row * SCALE + dy) * CELL_SIZE;
        let x = col * SCALE;
        tile[line + x..line + x + SCALE].fill(colour);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::ROM_SIZE;

    fn rom_with_glyph(code: usize, glyph: [u8; 8]) -> Vec<u8> {
        let mut rom = vec![0u8; ROM_SIZE];
        let start = CHARSET + code * GLYPH_SIZE;
        rom[start..start + GLYPH_SIZE].copy_from_slice(&glyph);
        rom
    }

    #[test]
    fn empty_glyph_is_paper_and_inverse_is_ink() {
        let atlas = FontAtlas::from_rom(&vec![0u8; ROM_SIZE]).expect("atlas");
        assert!(atlas.tile(0).iter().all(|&p| p == PAPER));
        assert!(atlas.tile(128).iter().all(|&p| p == INK));
    }

    #[test]
    fn solid_glyph_is_ink() {
        let atlas = FontAtlas::from_rom(&rom_with_glyph(5, [0xFF; 8])).expect("atlas");
        assert!(atlas.tile(5).iter().all(|&p| p == INK));
        assert!(atlas.tile(5 + 128).iter().all(|&p| p == PAPER));
    }

    #[test]
    fn pixels_are_doubled() {
        // Top-left source pixel only.
        let atlas =
            FontAtlas::from_rom(&rom_with_glyph(1, [0x80, 0, 0, 0, 0, 0, 0, 0])).expect("atlas");
        let tile = atlas.tile(1);
        assert_eq!(tile[0], INK);
        assert_eq!(tile[1], INK);
        assert_eq!(tile[CELL_SIZE], INK);
        assert_eq!(tile[CELL_SIZE + 1], INK);
        assert_eq!(tile[2], PAPER);
        assert_eq!(tile[2 * CELL_SIZE], PAPER);
        assert_eq!(tile.iter().filter(|&&p| p == INK).count(), 4);
    }

    #[test]
    fn bottom_right_pixel_lands_in_corner() {
        let atlas =
            FontAtlas::from_rom(&rom_with_glyph(63, [0, 0, 0, 0, 0, 0, 0, 0x01])).expect("atlas");
        let tile = atlas.tile(63);
        assert_eq!(tile[TILE_PIXELS - 1], INK);
        assert_eq!(tile[TILE_PIXELS - 2], INK);
        assert_eq!(tile[TILE_PIXELS - 1 - CELL_SIZE], INK);
        assert_eq!(tile[0], PAPER);

        let inverse = atlas.tile(63 + 128);
        assert_eq!(inverse[TILE_PIXELS - 1], PAPER);
        assert_eq!(inverse[0], INK);
    }

    #[test]
    fn codes_without_glyph_are_blank() {
        let atlas = FontAtlas::from_rom(&rom_with_glyph(0, [0xAA; 8])).expect("atlas");
        for code in [64u8, 100, 127, 192, 255] {
            assert!(atlas.tile(code).iter().all(|&p| p == BLANK), "code {code}");
        }
    }

    #[test]
    fn every_byte_has_a_tile() {
        let atlas = FontAtlas::from_rom(&vec![0u8; ROM_SIZE]).expect("atlas");
        assert_eq!(atlas.pixels().len(), TILE_COUNT * TILE_PIXELS);
        assert_eq!(atlas.tile(255).len(), TILE_PIXELS);
    }

    #[test]
    fn rasterizing_twice_is_identical() {
        let rom: Vec<u8> = (0..ROM_SIZE).map(|i| (i * 31 + 7) as u8).collect();
        let a = FontAtlas::from_rom(&rom).expect("atlas");
        let b = FontAtlas::from_rom(&rom).expect("atlas");
        assert_eq!(a.pixels(), b.pixels());
    }

    #[test]
    fn short_rom_rejected() {
        let err = FontAtlas::from_rom(&[0u8; 0x1000]).expect_err("too short");
        assert_eq!(
            err,
            FontError::RomTooShort {
                len: 0x1000,
                needed: 0x2000
            }
        );
    }
}
