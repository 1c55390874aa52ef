//! Report engine: dispatches inbound reports to the direct-mode service.
//!
//! **Transport-decoupled**: the engine does not own a transport. Callers
//! feed one report at a time via [`ReportEngine::dispatch`] and get the
//! reply bytes back, or use [`ReportEngine::on_report`] to have the reply
//! sent straight away.
//!
//! Every branch runs to completion in time proportional to the payload,
//! allocates nothing and never waits. Malformed input (short reports,
//! unknown tags, surplus triples) is absorbed without a reply or a log line.

use log::warn;

use crate::app::direct_buffer::FallbackPolicy;
use crate::app::events::AppEvent;
use crate::app::ports::{EventSink, LedFlags, RgbMatrix, WordStorage};
use crate::app::service::DirectModeService;
use crate::config::{PROTOCOL_VERSION_MAJOR, PROTOCOL_VERSION_MINOR};

use super::codec::{self, ColorTriples, Command, REPORT_LEN, StatusReport};
use super::transport::ReportTransport;

/// Counters kept by the engine for diagnostics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchStats {
    /// Reports carrying a known command.
    pub handled: u32,
    /// Reports that were too short or carried an unknown tag.
    pub ignored: u32,
    /// Status replies handed to the transport successfully.
    pub status_replies: u32,
}

/// Report dispatcher. Holds nothing but counters.
#[derive(Debug, Default)]
pub struct ReportEngine {
    stats: DispatchStats,
}

impl ReportEngine {
    pub const fn new() -> Self {
        Self {
            stats: DispatchStats {
                handled: 0,
                ignored: 0,
                status_replies: 0,
            },
        }
    }

    pub fn stats(&self) -> DispatchStats {
        self.stats
    }

    /// Receive callback: dispatch `report` and send the reply, if any.
    ///
    /// Send failures are dropped after a warning; the host simply sees no
    /// reply and may ask again.
    pub fn on_report<S: WordStorage, F: FallbackPolicy, const N: usize>(
        &mut self,
        report: &[u8],
        app: &mut DirectModeService<S, F, N>,
        matrix: &mut impl RgbMatrix,
        transport: &mut impl ReportTransport,
        sink: &mut impl EventSink,
    ) {
        let Some(reply) = self.dispatch(report, app, matrix, sink) else {
            return;
        };
        match transport.send(&reply) {
            Ok(()) => self.stats.status_replies = self.stats.status_replies.wrapping_add(1),
            Err(e) => warn!("ReportEngine: status reply dropped: {:?}", e),
        }
    }

    /// Dispatch one report. Returns the reply for a status query.
    pub fn dispatch<S: WordStorage, F: FallbackPolicy, const N: usize>(
        &mut self,
        report: &[u8],
        app: &mut DirectModeService<S, F, N>,
        matrix: &mut impl RgbMatrix,
        sink: &mut impl EventSink,
    ) -> Option<[u8; REPORT_LEN]> {
        let command = match codec::decode(report) {
            Some(Command::Unknown(_)) | None => {
                self.stats.ignored = self.stats.ignored.wrapping_add(1);
                return None;
            }
            Some(command) => command,
        };
        self.stats.handled = self.stats.handled.wrapping_add(1);

        match command {
            Command::DirectColors(triples) => {
                Self::apply_direct_colors(triples, app, matrix);
                None
            }
            Command::Commit => {
                matrix.render_frame();
                sink.emit(&AppEvent::Committed);
                None
            }
            Command::Release => {
                app.release(sink);
                None
            }
            Command::Acquire => {
                app.acquire(sink);
                None
            }
            Command::StatusQuery => Some(Self::build_status(app).encode()),
            Command::Unknown(_) => None,
        }
    }

    /// Writes each color to the buffer and straight to the engine.
    fn apply_direct_colors<S: WordStorage, F: FallbackPolicy, const N: usize>(
        triples: ColorTriples<'_>,
        app: &mut DirectModeService<S, F, N>,
        matrix: &mut impl RgbMatrix,
    ) {
        for (index, color) in triples.iter().take(N).enumerate() {
            app.set_direct_color(index, color);
            matrix.set_color(index, color);
        }
        if !matrix.is_enabled() {
            matrix.enable();
        }
        matrix.set_flags(LedFlags::ALL);
    }

    fn build_status<S: WordStorage, F: FallbackPolicy, const N: usize>(
        app: &DirectModeService<S, F, N>,
    ) -> StatusReport {
        StatusReport {
            led_count: u16::try_from(N).unwrap_or(u16::MAX),
            external: app.mode().is_external(),
            version_major: PROTOCOL_VERSION_MAJOR,
            version_minor: PROTOCOL_VERSION_MINOR,
        }
    }
}
