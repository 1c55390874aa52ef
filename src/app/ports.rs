//! Port traits: the hexagonal boundary between direct-mode logic and the
//! rest of the keyboard firmware.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ DirectModeService / ReportEngine
//! ```
//!
//! The RGB matrix engine, the persistent word storage and the event sink
//! are all owned by the surrounding firmware. The domain core consumes them
//! via generics, so it never touches hardware directly and every path can
//! be exercised with mock adapters on the host.
//!
//! The transport port lives next to the dispatcher in
//! [`rpc::transport`](crate::rpc::transport).

use core::fmt;

use crate::app::events::AppEvent;
use crate::Rgb;

// ───────────────────────────────────────────────────────────────
// Storage port (driven adapter: domain ↔ EEPROM)
// ───────────────────────────────────────────────────────────────

/// Word-addressed persistent storage (EEPROM or emulated EEPROM).
///
/// Writes are assumed atomic at word granularity: a reader observes either
/// the old or the new word, never a torn mixture. Implementations that
/// cannot guarantee this must serialize writes themselves.
pub trait WordStorage {
    /// Read the 16-bit word at byte address `addr`.
    fn read_word(&self, addr: u16) -> Result<u16, StorageError>;

    /// Write the 16-bit word at byte address `addr`.
    fn write_word(&mut self, addr: u16, value: u16) -> Result<(), StorageError>;
}

// ───────────────────────────────────────────────────────────────
// RGB matrix port (driven adapter: domain → rendering engine)
// ───────────────────────────────────────────────────────────────

/// Rendering-engine flags selecting which LEDs the engine paints each frame.
///
/// Mirrors the engine's own flag byte; only the two extremes matter here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LedFlags(pub u8);

impl LedFlags {
    /// Nothing is painted by the engine; indicators and direct writes only.
    pub const NONE: Self = Self(0x00);
    /// The whole matrix is painted from the active source.
    pub const ALL: Self = Self(0xFF);

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub const fn is_none(self) -> bool {
        self.0 == 0
    }
}

/// The RGB-matrix rendering engine as seen by the direct-mode core.
pub trait RgbMatrix {
    /// Whether the engine is currently enabled.
    fn is_enabled(&self) -> bool;

    /// Enable the engine.
    fn enable(&mut self);

    /// Current engine flags.
    fn flags(&self) -> LedFlags;

    /// Replace the engine flags.
    fn set_flags(&mut self, flags: LedFlags);

    /// Immediately set one LED. Indices past the matrix are ignored.
    fn set_color(&mut self, index: usize, color: Rgb);

    /// Immediately set every LED.
    fn set_color_all(&mut self, color: Rgb);

    /// Run one render frame synchronously.
    fn render_frame(&mut self);
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging / telemetry)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`]s through this port.
pub trait EventSink {
    fn emit(&mut self, event: &AppEvent);
}

// ───────────────────────────────────────────────────────────────
// Error types
// ───────────────────────────────────────────────────────────────

/// Errors from [`WordStorage`] operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageError {
    /// The word at this address does not fit inside the storage.
    OutOfRange(u16),
    /// Generic I/O error from the storage backend.
    Io,
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange(addr) => write!(f, "address {addr:#06x} out of range"),
            Self::Io => write!(f, "I/O error"),
        }
    }
}

impl std::error::Error for StorageError {}
