//! Report codec.
//!
//! Wire format (one fixed-capacity report per message):
//! ```text
//! ┌─────────┬───────────────────────────────┐
//! │ Tag (1B)│ Payload (command specific)    │
//! └─────────┴───────────────────────────────┘
//!
//! 0x00  in   N × [R G B]            bulk direct color set
//! 0x01  in   –                      force an immediate render
//! 0x02  in   –                      release to native mode
//! 0x03  in   –                      acquire external mode
//! 0x04  in   –                      status query
//! 0x04  out  32 bytes, see below    status reply
//! ```
//!
//! Status reply layout:
//! ```text
//! ┌──────┬──────────────┬──────────┬───────┬───────┬────────────┐
//! │ 0x04 │ LED count LE │ external │ major │ minor │ 26 × 0x00  │
//! │  0   │    1..=2     │    3     │   4   │   5   │   6..32    │
//! └──────┴──────────────┴──────────┴───────┴───────┴────────────┘
//! ```
//!
//! Decoding never fails loudly: too-short reports decode to `None`, unknown
//! tags to [`Command::Unknown`], and a trailing partial triple is dropped.

use crate::Rgb;

/// Size of every outbound report.
pub const REPORT_LEN: usize = 32;

/// Reports shorter than this carry no command.
pub const MIN_REPORT_LEN: usize = 2;

pub const CMD_DIRECT_COLORS: u8 = 0x00;
pub const CMD_COMMIT: u8 = 0x01;
pub const CMD_RELEASE: u8 = 0x02;
pub const CMD_ACQUIRE: u8 = 0x03;
pub const CMD_STATUS: u8 = 0x04;

/// A decoded inbound report, borrowing its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command<'a> {
    DirectColors(ColorTriples<'a>),
    Commit,
    Release,
    Acquire,
    StatusQuery,
    Unknown(u8),
}

/// Decode one inbound report. `None` when it is too short to carry a command.
pub fn decode(report: &[u8]) -> Option<Command<'_>> {
    if report.len() < MIN_REPORT_LEN {
        return None;
    }
    let (&tag, payload) = report.split_first()?;
    Some(match tag {
        CMD_DIRECT_COLORS => Command::DirectColors(ColorTriples { payload }),
        CMD_COMMIT => Command::Commit,
        CMD_RELEASE => Command::Release,
        CMD_ACQUIRE => Command::Acquire,
        CMD_STATUS => Command::StatusQuery,
        other => Command::Unknown(other),
    })
}

/// The RGB triples of a direct color report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorTriples<'a> {
    payload: &'a [u8],
}

impl<'a> ColorTriples<'a> {
    /// Number of complete triples, i.e. `floor((len - 1) / 3)` of the report.
    pub fn len(&self) -> usize {
        self.payload.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(self) -> impl Iterator<Item = Rgb> + 'a {
        self.payload
            .chunks_exact(3)
            .map(|c| Rgb::new(c[0], c[1], c[2]))
    }
}

/// Status reply contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusReport {
    pub led_count: u16,
    pub external: bool,
    pub version_major: u8,
    pub version_minor: u8,
}

impl StatusReport {
    /// Serialize into a zero-padded 32-byte report.
    pub fn encode(&self) -> [u8; REPORT_LEN] {
        let mut out = [0u8; REPORT_LEN];
        out[0] = CMD_STATUS;
        out[1..3].copy_from_slice(&self.led_count.to_le_bytes());
        out[3] = u8::from(self.external);
        out[4] = self.version_major;
        out[5] = self.version_minor;
        out
    }

    /// Parse a status reply. `None` on a wrong length or tag.
    pub fn decode(report: &[u8]) -> Option<Self> {
        if report.len() != REPORT_LEN || report[0] != CMD_STATUS {
            return None;
        }
        Some(Self {
            led_count: u16::from_le_bytes([report[1], report[2]]),
            external: report[3] != 0,
            version_major: report[4],
            version_minor: report[5],
        })
    }
}
