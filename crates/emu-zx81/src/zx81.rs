//! Top-level ZX81 session.
//!
//! A session owns everything one emulated machine needs: the external CPU
//! core, the bus (memory + keyboard), the glyph atlas and the framebuffer.
//! Nothing is global, so several sessions can run side by side.
//!
//! # Frame model
//!
//! `run_frame()` steps the CPU until at least the frame budget of T-states
//! has elapsed. The last instruction may overshoot the budget; the overshoot
//! is not carried into the next frame.

use std::fmt;

use emu_core::{Cpu, KeyCode, Observable, Ticks, Value};

use crate::bus::Zx81Bus;
use crate::config::Zx81Config;
use crate::constants::{D_FILE, DISPLAY_ROUTINE, OPCODE_RET, ROM_SIZE};
use crate::font::{FontAtlas, FontError};
use crate::input::{KeyTable, Zx81Key};
use crate::keyboard::ROWS;
use crate::memory::Memory;
use crate::video::{FRAMEBUFFER_PIXELS, render_display};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Zx81Error {
    /// The ROM image is not 8 KiB.
    InvalidRomSize(usize),
    /// The glyph atlas could not be built.
    Font(FontError),
}

impl fmt::Display for Zx81Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRomSize(size) => write!(
                f,
                "invalid ZX81 ROM size: {size} bytes (expected {ROM_SIZE})"
            ),
            Self::Font(e) => write!(f, "failed to build character set: {e}"),
        }
    }
}

impl std::error::Error for Zx81Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Font(e) => Some(e),
            Self::InvalidRomSize(_) => None,
        }
    }
}

impl From<FontError> for Zx81Error {
    fn from(e: FontError) -> Self {
        Self::Font(e)
    }
}

/// ZX81 machine session.
pub struct Zx81<C> {
    cpu: C,
    bus: Zx81Bus,
    font: FontAtlas,
    keys: KeyTable,
    /// ARGB32, `SCREEN_WIDTH` × `SCREEN_HEIGHT`.
    framebuffer: Vec<u32>,
    /// Completed frame counter.
    frame_count: u64,
}

impl<C: Cpu> Zx81<C> {
    /// Create a session around `cpu` from the given configuration.
    ///
    /// Builds the glyph atlas, maps the ROM at $0000 and $2000, and applies
    /// the display routine patch if enabled. The keyboard starts with every
    /// key released.
    pub fn new(cpu: C, config: &Zx81Config) -> Result<Self, Zx81Error> {
        let rom: &[u8; ROM_SIZE] = config
            .rom
            .as_slice()
            .try_into()
            .map_err(|_| Zx81Error::InvalidRomSize(config.rom.len()))?;

        let font = FontAtlas::from_rom(rom)?;

        let mut memory = Memory::new(rom);
        if config.patch_display {
            memory.patch_rom(DISPLAY_ROUTINE, OPCODE_RET);
        }

        log::info!(
            "ZX81 session ready ({} byte ROM, display patch {})",
            rom.len(),
            if config.patch_display { "on" } else { "off" }
        );

        Ok(Self {
            cpu,
            bus: Zx81Bus::new(memory),
            font,
            keys: KeyTable::new(),
            framebuffer: vec![0; FRAMEBUFFER_PIXELS],
            frame_count: 0,
        })
    }

    /// Step the CPU until `budget` T-states have elapsed.
    ///
    /// Returns the number of T-states actually executed (at least `budget`).
    pub fn run_frame(&mut self, budget: Ticks) -> Ticks {
        let start = self.cpu.total_ticks();
        let target = start + budget;
        while self.cpu.total_ticks() < target {
            self.cpu.step(&mut self.bus);
        }
        self.frame_count += 1;
        self.cpu.total_ticks() - start
    }

    /// Redraw the whole screen from the display file.
    pub fn render(&mut self) {
        render_display(&self.bus.memory, &self.font, &mut self.framebuffer);
    }

    /// Reset the CPU and release every key. Memory is left as is.
    pub fn reset(&mut self) {
        self.cpu.reset();
        self.bus.keyboard.release_all();
    }
}

impl<C> Zx81<C> {
    /// Host key press, routed through the key table.
    pub fn key_down(&mut self, key: KeyCode) {
        self.keys.key_down(&mut self.bus.keyboard, key);
    }

    /// Host key release, routed through the key table.
    pub fn key_up(&mut self, key: KeyCode) {
        self.keys.key_up(&mut self.bus.keyboard, key);
    }

    /// Press a ZX81 key directly (stays pressed until released).
    pub fn press_key(&mut self, key: Zx81Key) {
        self.bus.keyboard.press(key.position());
    }

    /// Release a ZX81 key.
    pub fn release_key(&mut self, key: Zx81Key) {
        self.bus.keyboard.release(key.position());
    }

    /// Release all keys.
    pub fn release_all_keys(&mut self) {
        self.bus.keyboard.release_all();
    }

    /// Reference to the framebuffer (ARGB32).
    #[must_use]
    pub fn framebuffer(&self) -> &[u32] {
        &self.framebuffer
    }

    /// Current value of the D_FILE system variable.
    #[must_use]
    pub fn display_file(&self) -> u16 {
        self.bus.memory.read_word(D_FILE)
    }

    /// Reference to the CPU.
    #[must_use]
    pub fn cpu(&self) -> &C {
        &self.cpu
    }

    /// Mutable reference to the CPU.
    pub fn cpu_mut(&mut self) -> &mut C {
        &mut self.cpu
    }

    /// Reference to the bus.
    #[must_use]
    pub fn bus(&self) -> &Zx81Bus {
        &self.bus
    }

    /// Mutable reference to the bus.
    pub fn bus_mut(&mut self) -> &mut Zx81Bus {
        &mut self.bus
    }

    /// Reference to the glyph atlas.
    #[must_use]
    pub fn font(&self) -> &FontAtlas {
        &self.font
    }

    /// Mutable reference to the host key table, for rebinding.
    pub fn key_table_mut(&mut self) -> &mut KeyTable {
        &mut self.keys
    }

    /// Completed frame count.
    #[must_use]
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}

impl<C: Cpu> Observable for Zx81<C> {
    fn query(&self, path: &str) -> Option<Value> {
        if let Some(rest) = path.strip_prefix("memory.") {
            let hex = rest
                .strip_prefix("0x")
                .or_else(|| rest.strip_prefix("0X"))
                .or_else(|| rest.strip_prefix('$'));
            let addr = match hex {
                Some(digits) => u16::from_str_radix(digits, 16).ok(),
                None => rest.parse().ok(),
            };
            addr.map(|a| Value::U8(self.bus.memory.read(a)))
        } else if let Some(rest) = path.strip_prefix("keyboard.") {
            let row: usize = rest.parse().ok()?;
            (row < ROWS).then(|| Value::U8(self.bus.keyboard.row(row)))
        } else {
            match path {
                "keyboard" => Some(Value::Array(
                    self.bus.keyboard.rows().iter().map(|&r| Value::U8(r)).collect(),
                )),
                "cycles" => Some(self.cpu.total_ticks().get().into()),
                "pc" => Some(self.cpu.pc().into()),
                "frame" => Some(self.frame_count.into()),
                "d_file" => Some(self.display_file().into()),
                _ => None,
            }
        }
    }

    fn query_paths(&self) -> &'static [&'static str] {
        &[
            "memory.<address>",
            "keyboard",
            "keyboard.<row>",
            "cycles",
            "pc",
            "frame",
            "d_file",
        ]
    }
}
