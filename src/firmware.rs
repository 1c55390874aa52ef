//! Composition root: the hooks a keyboard build wires into its main loop.
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                   Adapters (outer ring)                    │
//! │  MemoryEeprom / board EEPROM    LogEventSink   Transport   │
//! │                                                            │
//! │  ─────────────── Port Trait Boundary ─────────────────     │
//! │                                                            │
//! │  ┌──────────────────────────────────────────────────────┐  │
//! │  │  DirectModeService (mode · buffer · fallback)        │  │
//! │  │  ReportEngine      (dispatch · stats)                │  │
//! │  └──────────────────────────────────────────────────────┘  │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! Hook order on the keyboard side:
//!
//! 1. `keyboard_post_init` → [`Firmware::boot`]
//! 2. raw report receive   → [`enqueue_report`](crate::rpc::channels::enqueue_report)
//! 3. main loop task       → [`Firmware::poll_reports`]
//! 4. key processing       → [`Firmware::on_key`]
//! 5. direct effect frame  → [`Firmware::on_frame`]
//! 6. indicator pass       → [`Firmware::on_indicators`]

use anyhow::{Context, Result};
use log::info;

use crate::app::direct_buffer::FallbackPolicy;
use crate::app::keys::KeyEvent;
use crate::app::ports::{EventSink, RgbMatrix, WordStorage};
use crate::app::service::DirectModeService;
use crate::config::DirectModeConfig;
use crate::rpc::channels::{ReportChannel, drain_reports};
use crate::rpc::engine::{DispatchStats, ReportEngine};
use crate::rpc::transport::ReportTransport;

/// Direct-mode service plus the report dispatcher, for a matrix of `N` LEDs.
pub struct Firmware<S: WordStorage, F: FallbackPolicy, const N: usize> {
    app: DirectModeService<S, F, N>,
    engine: ReportEngine,
}

impl<S: WordStorage, F: FallbackPolicy, const N: usize> Firmware<S, F, N> {
    /// Post-init hook. Storage or config errors abort the boot.
    ///
    /// `fallback` is the only source of the colors shown when the host
    /// takes over.
    pub fn boot(
        storage: S,
        fallback: F,
        config: DirectModeConfig,
        matrix: &mut impl RgbMatrix,
        sink: &mut impl EventSink,
    ) -> Result<Self> {
        info!("rgbdirect v{} ({} LEDs)", env!("CARGO_PKG_VERSION"), N);
        let app = DirectModeService::boot(storage, fallback, config, matrix, sink)
            .context("direct mode boot failed")?;
        Ok(Self {
            app,
            engine: ReportEngine::new(),
        })
    }

    /// Handle one report straight from the receive callback.
    pub fn on_report(
        &mut self,
        report: &[u8],
        matrix: &mut impl RgbMatrix,
        transport: &mut impl ReportTransport,
        sink: &mut impl EventSink,
    ) {
        self.engine
            .on_report(report, &mut self.app, matrix, transport, sink);
    }

    /// Drain queued reports in arrival order. Returns how many ran.
    pub fn poll_reports(
        &mut self,
        channel: &ReportChannel,
        matrix: &mut impl RgbMatrix,
        transport: &mut impl ReportTransport,
        sink: &mut impl EventSink,
    ) -> usize {
        let Self { app, engine } = self;
        drain_reports(channel, |report| {
            engine.on_report(report, app, matrix, transport, sink);
        })
    }

    /// Key hook. `false` means the key was consumed.
    pub fn on_key(&mut self, event: KeyEvent, matrix: &mut impl RgbMatrix) -> bool {
        self.app.handle_key(event, matrix)
    }

    /// Direct effect body, run once per frame.
    pub fn on_frame(&self, matrix: &mut impl RgbMatrix) -> bool {
        self.app.paint_direct(matrix)
    }

    /// Indicator overlay, run after the frame.
    pub fn on_indicators(&self, caps_lock: bool, matrix: &mut impl RgbMatrix) {
        self.app.render_indicators(caps_lock, matrix);
    }

    pub fn app(&self) -> &DirectModeService<S, F, N> {
        &self.app
    }

    pub fn stats(&self) -> DispatchStats {
        self.engine.stats()
    }

    /// Tear down and hand back the storage adapter.
    pub fn into_storage(self) -> S {
        self.app.into_storage()
    }
}
