//! ZX81 keyboard matrix.
//!
//! The keyboard is an 8×5 matrix read through any even I/O port. The high
//! byte of the port address selects the row: the ROM always uses
//! `IN A,(C)` with B holding a byte that has one bit clear.
//!
//! | Sel bit | Row | Keys (bit 0-4)                |
//! |---------|-----|-------------------------------|
//! | 0       | 0   | Shift, Z, X, C, V             |
//! | 1       | 1   | A, S, D, F, G                 |
//! | 2       | 2   | Q, W, E, R, T                 |
//! | 3       | 3   | 1, 2, 3, 4, 5                 |
//! | 4       | 4   | 0, 9, 8, 7, 6                 |
//! | 5       | 5   | P, O, I, U, Y                 |
//! | 6       | 6   | NewLine, L, K, J, H           |
//! | 7       | 7   | Space, ., M, N, B             |
//!
//! Rows are stored exactly as the port reports them: a pressed key reads
//! as 0 (active low), everything else as 1.

/// Number of hardware rows.
pub const ROWS: usize = 8;

/// Index of the spare slot that unmapped table entries point at.
pub const DUMMY_ROW: usize = ROWS;

/// Where a key sits in the matrix: a row index and a column mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPosition {
    pub row: u8,
    pub mask: u8,
}

impl KeyPosition {
    /// Table default: points at the dummy row with an empty mask.
    pub const UNMAPPED: Self = Self {
        row: DUMMY_ROW as u8,
        mask: 0,
    };

    /// Position for `row` (0-7) and column `bit` (0-4).
    #[must_use]
    pub const fn new(row: u8, bit: u8) -> Self {
        Self {
            row,
            mask: 1 << bit,
        }
    }

    /// Does this position reach a real row?
    #[must_use]
    pub const fn is_mapped(self) -> bool {
        (self.row as usize) < ROWS && self.mask != 0
    }
}

/// Keyboard matrix state: 8 active-low rows plus the dummy slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyboardMatrix {
    rows: [u8; ROWS + 1],
}

impl KeyboardMatrix {
    /// All keys released.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rows: [0xFF; ROWS + 1],
        }
    }

    /// Clear the key's bit. Pressing a held key again changes nothing.
    pub fn press(&mut self, pos: KeyPosition) {
        if pos.is_mapped() {
            self.rows[pos.row as usize] &= !pos.mask;
        }
    }

    /// Set the key's bit back to 1.
    pub fn release(&mut self, pos: KeyPosition) {
        if pos.is_mapped() {
            self.rows[pos.row as usize] |= pos.mask;
        }
    }

    /// Current byte for `row` (0-7). Out-of-range rows read as released.
    #[must_use]
    pub fn row(&self, row: usize) -> u8 {
        if row < ROWS { self.rows[row] } else { 0xFF }
    }

    /// The eight hardware rows.
    #[must_use]
    pub fn rows(&self) -> &[u8] {
        &self.rows[..ROWS]
    }

    /// Row scan: report the row picked by the lowest clear bit of
    /// `selector`, or $FF when no bit is clear.
    ///
    /// Only the first clear bit counts. The ROM never selects more than one
    /// row at a time, and a selector with several clear bits reports the
    /// lowest of them.
    #[must_use]
    pub fn scan(&self, selector: u8) -> u8 {
        let mut bits = selector;
        for row in 0..ROWS {
            if bits & 1 == 0 {
                return self.rows[row];
            }
            bits >>= 1;
        }
        0xFF
    }

    /// Release all keys.
    pub fn release_all(&mut self) {
        self.rows = [0xFF; ROWS + 1];
    }
}

impl Default for KeyboardMatrix {
    fn default() -> Self {
        Self::new()
    }
}
