//! Mock adapters for integration tests.
//!
//! Records every engine call so tests can assert on the full command
//! history without a real LED driver.

use rgbdirect::Rgb;
use rgbdirect::adapters::eeprom::MemoryEeprom;
use rgbdirect::app::events::AppEvent;
use rgbdirect::app::ports::{EventSink, LedFlags, RgbMatrix, StorageError, WordStorage};
use rgbdirect::rpc::transport::ReportTransport;

// ── Engine call record ────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum MatrixCall {
    Enable,
    SetFlags(LedFlags),
    SetColor(usize, Rgb),
    SetColorAll(Rgb),
    RenderFrame,
}

// ── MockMatrix ────────────────────────────────────────────────

pub struct MockMatrix {
    pub enabled: bool,
    pub flags: LedFlags,
    pub leds: Vec<Rgb>,
    pub calls: Vec<MatrixCall>,
}

#[allow(dead_code)]
impl MockMatrix {
    /// A disabled engine painting everything, all LEDs off.
    pub fn new(led_count: usize) -> Self {
        Self {
            enabled: false,
            flags: LedFlags::ALL,
            leds: vec![Rgb::default(); led_count],
            calls: Vec::new(),
        }
    }

    pub fn new_enabled(led_count: usize) -> Self {
        Self {
            enabled: true,
            ..Self::new(led_count)
        }
    }

    pub fn renders(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| **c == MatrixCall::RenderFrame)
            .count()
    }

    pub fn color_writes(&self) -> Vec<(usize, Rgb)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                MatrixCall::SetColor(i, rgb) => Some((*i, *rgb)),
                _ => None,
            })
            .collect()
    }
}

impl RgbMatrix for MockMatrix {
    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn enable(&mut self) {
        self.enabled = true;
        self.calls.push(MatrixCall::Enable);
    }

    fn flags(&self) -> LedFlags {
        self.flags
    }

    fn set_flags(&mut self, flags: LedFlags) {
        self.flags = flags;
        self.calls.push(MatrixCall::SetFlags(flags));
    }

    fn set_color(&mut self, index: usize, color: Rgb) {
        if let Some(led) = self.leds.get_mut(index) {
            *led = color;
        }
        self.calls.push(MatrixCall::SetColor(index, color));
    }

    fn set_color_all(&mut self, color: Rgb) {
        self.leds.iter_mut().for_each(|led| *led = color);
        self.calls.push(MatrixCall::SetColorAll(color));
    }

    fn render_frame(&mut self) {
        self.calls.push(MatrixCall::RenderFrame);
    }
}

// ── MockTransport ─────────────────────────────────────────────

#[derive(Default)]
pub struct MockTransport {
    pub sent: Vec<Vec<u8>>,
    pub fail: bool,
}

impl ReportTransport for MockTransport {
    type Error = &'static str;

    fn send(&mut self, report: &[u8]) -> Result<(), Self::Error> {
        if self.fail {
            return Err("endpoint busy");
        }
        self.sent.push(report.to_vec());
        Ok(())
    }
}

// ── RecordingSink ─────────────────────────────────────────────

#[derive(Default)]
pub struct RecordingSink {
    pub events: Vec<AppEvent>,
}

#[allow(dead_code)]
impl RecordingSink {
    pub fn count(&self, event: &AppEvent) -> usize {
        self.events.iter().filter(|e| *e == event).count()
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push(*event);
    }
}

// ── FlakyEeprom ───────────────────────────────────────────────

/// EEPROM whose writes can be switched off to simulate a worn cell.
#[derive(Default)]
pub struct FlakyEeprom {
    pub inner: MemoryEeprom<64>,
    pub fail_writes: bool,
}

impl WordStorage for FlakyEeprom {
    fn read_word(&self, addr: u16) -> Result<u16, StorageError> {
        self.inner.read_word(addr)
    }

    fn write_word(&mut self, addr: u16, value: u16) -> Result<(), StorageError> {
        if self.fail_writes {
            return Err(StorageError::Io);
        }
        self.inner.write_word(addr, value)
    }
}
