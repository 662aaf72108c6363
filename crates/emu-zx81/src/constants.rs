//! ZX81 hardware constants.
//!
//! Fixed addresses and sizes of the emulated machine. Every component that
//! needs one of these imports it from here.

/// Size of the ROM image (8 KiB).
pub const ROM_SIZE: usize = 0x2000;

/// Second placement of the ROM. Address line A13 is not decoded in the
/// lower 16K, so the ROM answers at $2000-$3FFF as well.
pub const ROM_MIRROR: u16 = 0x2000;

/// First writable address. Everything below is ROM (and its mirror).
pub const RAM_START: u16 = 0x4000;

/// System variable D_FILE: little-endian pointer to the display file.
pub const D_FILE: u16 = 0x400C;

/// Start of the 64-glyph character bitmap table in ROM.
pub const CHARSET: usize = 0x1E00;

/// Number of glyphs stored in the ROM character table.
pub const CHARSET_GLYPHS: usize = 64;

/// ROM address of the DISPLAY-5 routine entry.
pub const DISPLAY_ROUTINE: u16 = 0x02B5;

/// Z80 `RET` opcode.
pub const OPCODE_RET: u8 = 0xC9;

/// Display file end-of-line marker (HALT opcode).
pub const END_OF_LINE: u8 = 0x76;

/// Character columns per display line.
pub const TEXT_COLUMNS: usize = 32;

/// Character rows on screen.
pub const TEXT_ROWS: usize = 24;

/// Native glyph size (8×8).
pub const GLYPH_SIZE: usize = 8;

/// Output scale factor.
pub const SCALE: usize = 2;

/// Rendered cell size in pixels (2× the native 8×8 glyph).
pub const CELL_SIZE: usize = GLYPH_SIZE * SCALE;

/// Framebuffer width in pixels (512).
pub const SCREEN_WIDTH: usize = TEXT_COLUMNS * CELL_SIZE;

/// Framebuffer height in pixels (384).
pub const SCREEN_HEIGHT: usize = TEXT_ROWS * CELL_SIZE;

/// CPU clock (3.25 MHz).
pub const CPU_FREQUENCY: u64 = 3_250_000;

/// PAL field rate.
pub const FIELD_RATE: u64 = 50;
