//! Host-agnostic key identifiers.

/// Key codes delivered by a presentation backend.
///
/// A subset of the physical keys a PC keyboard reports, named after winit's
/// `KeyCode` so the window backend maps one-to-one. Machines decide which
/// of these reach their keyboard matrix; the rest are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    // Letters
    KeyA,
    KeyB,
    KeyC,
    KeyD,
    KeyE,
    KeyF,
    KeyG,
    KeyH,
    KeyI,
    KeyJ,
    KeyK,
    KeyL,
    KeyM,
    KeyN,
    KeyO,
    KeyP,
    KeyQ,
    KeyR,
    KeyS,
    KeyT,
    KeyU,
    KeyV,
    KeyW,
    KeyX,
    KeyY,
    KeyZ,

    // Numbers
    Digit0,
    Digit1,
    Digit2,
    Digit3,
    Digit4,
    Digit5,
    Digit6,
    Digit7,
    Digit8,
    Digit9,

    // Modifiers
    ShiftLeft,
    ShiftRight,
    ControlLeft,
    ControlRight,
    AltLeft,
    AltRight,

    // Special
    Enter,
    Space,
    Backspace,
    Tab,
    Escape,

    // Arrow keys
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,

    // Punctuation
    Comma,
    Period,
    Slash,
    Semicolon,
    Quote,
    Minus,
    Equal,
}

impl KeyCode {
    /// Number of variants, for tables indexed by `key as usize`.
    pub const COUNT: usize = Self::Equal as usize + 1;
}
