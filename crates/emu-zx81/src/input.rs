//! Input handling for the ZX81.
//!
//! Two layers:
//! 1. `Zx81Key`: the 40 keys of the ZX81 keyboard, each with a fixed matrix
//!    position.
//! 2. `KeyTable`: maps host `KeyCode`s onto matrix positions, including the
//!    RUBOUT combination on Backspace.

use emu_core::KeyCode;

use crate::keyboard::{KeyPosition, KeyboardMatrix};

/// Logical key on the ZX81 keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Zx81Key {
    // Row 0
    Shift,
    Z,
    X,
    C,
    V,
    // Row 1
    A,
    S,
    D,
    F,
    G,
    // Row 2
    Q,
    W,
    E,
    R,
    T,
    // Row 3
    N1,
    N2,
    N3,
    N4,
    N5,
    // Row 4
    N0,
    N9,
    N8,
    N7,
    N6,
    // Row 5
    P,
    O,
    I,
    U,
    Y,
    // Row 6
    NewLine,
    L,
    K,
    J,
    H,
    // Row 7
    Space,
    Period,
    M,
    N,
    B,
}

impl Zx81Key {
    /// Return the (row, bit) position of this key in the matrix.
    #[must_use]
    pub const fn position(self) -> KeyPosition {
        let (row, bit) = match self {
            Self::Shift => (0, 0),
            Self::Z => (0, 1),
            Self::X => (0, 2),
            Self::C => (0, 3),
            Self::V => (0, 4),

            Self::A => (1, 0),
            Self::S => (1, 1),
            Self::D => (1, 2),
            Self::F => (1, 3),
            Self::G => (1, 4),

            Self::Q => (2, 0),
            Self::W => (2, 1),
            Self::E => (2, 2),
            Self::R => (2, 3),
            Self::T => (2, 4),

            Self::N1 => (3, 0),
            Self::N2 => (3, 1),
            Self::N3 => (3, 2),
            Self::N4 => (3, 3),
            Self::N5 => (3, 4),

            Self::N0 => (4, 0),
            Self::N9 => (4, 1),
            Self::N8 => (4, 2),
            Self::N7 => (4, 3),
            Self::N6 => (4, 4),

            Self::P => (5, 0),
            Self::O => (5, 1),
            Self::I => (5, 2),
            Self::U => (5, 3),
            Self::Y => (5, 4),

            Self::NewLine => (6, 0),
            Self::L => (6, 1),
            Self::K => (6, 2),
            Self::J => (6, 3),
            Self::H => (6, 4),

            Self::Space => (7, 0),
            Self::Period => (7, 1),
            Self::M => (7, 2),
            Self::N => (7, 3),
            Self::B => (7, 4),
        };
        KeyPosition::new(row, bit)
    }
}

/// Host key that produces RUBOUT (SHIFT + 0).
pub const ERASE_KEY: KeyCode = KeyCode::Backspace;

/// Keys held down for the erase alias.
const ERASE_COMBO: [Zx81Key; 2] = [Zx81Key::Shift, Zx81Key::N0];

/// Host key → matrix position table.
///
/// Every `KeyCode` has an entry; keys with no ZX81 counterpart hold
/// `KeyPosition::UNMAPPED` and leave the matrix alone.
#[derive(Debug, Clone)]
pub struct KeyTable {
    entries: [KeyPosition; KeyCode::COUNT],
}

impl KeyTable {
    /// The standard PC layout: letters, digits, Enter for NEWLINE, either
    /// Shift for SHIFT, Space and full stop.
    #[must_use]
    pub fn new() -> Self {
        let mut table = Self {
            entries: [KeyPosition::UNMAPPED; KeyCode::COUNT],
        };
        for &(host, key) in DEFAULT_LAYOUT {
            table.bind(host, key);
        }
        table
    }

    /// Point `host` at `key`, replacing any previous binding.
    pub fn bind(&mut self, host: KeyCode, key: Zx81Key) {
        self.entries[host as usize] = key.position();
    }

    /// Remove the binding for `host`.
    pub fn unbind(&mut self, host: KeyCode) {
        self.entries[host as usize] = KeyPosition::UNMAPPED;
    }

    /// Matrix position for `host`, `UNMAPPED` if it has none.
    #[must_use]
    pub fn lookup(&self, host: KeyCode) -> KeyPosition {
        self.entries[host as usize]
    }

    /// Apply a host key press to the matrix.
    pub fn key_down(&self, matrix: &mut KeyboardMatrix, host: KeyCode) {
        if host == ERASE_KEY {
            for key in ERASE_COMBO {
                matrix.press(key.position());
            }
        } else {
            matrix.press(self.lookup(host));
        }
    }

    /// Apply a host key release to the matrix.
    pub fn key_up(&self, matrix: &mut KeyboardMatrix, host: KeyCode) {
        if host == ERASE_KEY {
            for key in ERASE_COMBO {
                matrix.release(key.position());
            }
        } else {
            matrix.release(self.lookup(host));
        }
    }
}

impl Default for KeyTable {
    fn default() -> Self {
        Self::new()
    }
}

const DEFAULT_LAYOUT: &[(KeyCode, Zx81Key)] = &[
    // Row 0
    (KeyCode::ShiftLeft, Zx81Key::Shift),
    (KeyCode::ShiftRight, Zx81Key::Shift),
    (KeyCode::KeyZ, Zx81Key::Z),
    (KeyCode::KeyX, Zx81Key::X),
    (KeyCode::KeyC, Zx81Key::C),
    (KeyCode::KeyV, Zx81Key::V),
    // Row 1
    (KeyCode::KeyA, Zx81Key::A),
    (KeyCode::KeyS, Zx81Key::S),
    (KeyCode::KeyD, Zx81Key::D),
    (KeyCode::KeyF, Zx81Key::F),
    (KeyCode::KeyG, Zx81Key::G),
    // Row 2
    (KeyCode::KeyQ, Zx81Key::Q),
    (KeyCode::KeyW, Zx81Key::W),
    (KeyCode::KeyE, Zx81Key::E),
    (KeyCode::KeyR, Zx81Key::R),
    (KeyCode::KeyT, Zx81Key::T),
    // Row 3
    (KeyCode::Digit1, Zx81Key::N1),
    (KeyCode::Digit2, Zx81Key::N2),
    (KeyCode::Digit3, Zx81Key::N3),
    (KeyCode::Digit4, Zx81Key::N4),
    (KeyCode::Digit5, Zx81Key::N5),
    // Row 4
    (KeyCode::Digit0, Zx81Key::N0),
    (KeyCode::Digit9, Zx81Key::N9),
    (KeyCode::Digit8, Zx81Key::N8),
    (KeyCode::Digit7, Zx81Key::N7),
    (KeyCode::Digit6, Zx81Key::N6),
    // Row 5
    (KeyCode::KeyP, Zx81Key::P),
    (KeyCode::KeyO, Zx81Key::O),
    (KeyCode::KeyI, Zx81Key::I),
    (KeyCode::KeyU, Zx81Key::U),
    (KeyCode::KeyY, Zx81Key::Y),
    // Row 6
    (KeyCode::Enter, Zx81Key::NewLine),
    (KeyCode::KeyL, Zx81Key::L),
    (KeyCode::KeyK, Zx81Key::K),
    (KeyCode::KeyJ, Zx81Key::J),
    (KeyCode::KeyH, Zx81Key::H),
    // Row 7
    (KeyCode::Space, Zx81Key::Space),
    (KeyCode::Period, Zx81Key::Period),
    (KeyCode::KeyM, Zx81Key::M),
    (KeyCode::KeyN, Zx81Key::N),
    (KeyCode::KeyB, Zx81Key::B),
];
