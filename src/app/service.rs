//! Direct-mode service: the hexagonal core.
//!
//! [`DirectModeService`] owns the ownership mode, its persistent store, the
//! direct-color buffer and the fallback policy. The rendering engine and
//! the event sink are injected at call sites, so the whole service runs
//! against mock adapters on the host.
//!
//! ```text
//!  WordStorage ──▶ ┌──────────────────────────┐ ──▶ EventSink
//!                  │    DirectModeService     │
//!  RgbMatrix   ◀── │ mode · buffer · fallback │
//!                  └──────────────────────────┘
//! ```
//!
//! Execution is single-threaded and run-to-completion: the report
//! dispatcher, the key handler and the frame hooks all take `&mut self`
//! in turn from the same cooperative loop, so buffer writes and frame
//! reads never interleave.

use log::{info, warn};

use crate::Rgb;
use crate::config::{ConfigError, DirectModeConfig};
use crate::error::Result;

use super::direct_buffer::{DirectColorBuffer, FallbackPolicy};
use super::events::AppEvent;
use super::keys::{KeyEvent, Keycode};
use super::mode::{ModeStore, OwnershipMode};
use super::ports::{EventSink, LedFlags, RgbMatrix, WordStorage};

const WHITE: Rgb = Rgb::new(255, 255, 255);
const BLACK: Rgb = Rgb::new(0, 0, 0);

// ───────────────────────────────────────────────────────────────
// DirectModeService
// ───────────────────────────────────────────────────────────────

/// Owner of the LED-matrix ownership state. `N` is the LED count.
pub struct DirectModeService<S: WordStorage, F: FallbackPolicy, const N: usize> {
    mode: OwnershipMode,
    store: ModeStore<S>,
    buffer: DirectColorBuffer<N>,
    fallback: F,
    config: DirectModeConfig,
}

impl<S: WordStorage, F: FallbackPolicy, const N: usize> DirectModeService<S, F, N> {
    // ── Lifecycle ─────────────────────────────────────────────

    /// Boot sequencing: resolve the initial mode from storage under the
    /// configured [`BootPolicy`](crate::config::BootPolicy), persist it,
    /// and prepare the engine.
    ///
    /// Booting external runs the fallback initializer once and switches the
    /// engine to paint the whole matrix. Any storage error here is fatal.
    pub fn boot(
        storage: S,
        fallback: F,
        config: DirectModeConfig,
        matrix: &mut impl RgbMatrix,
        sink: &mut impl EventSink,
    ) -> Result<Self> {
        config.validate(N)?;
        let addr = config.mode_word_addr().ok_or(ConfigError::ValidationFailed(
            "eeprom_user_base + mode_word_offset overflows the address space",
        ))?;

        let mut store = ModeStore::new(storage, addr);
        let mode = store.load_with_policy(config.boot_policy)?;
        store.store(mode)?;

        let mut svc = Self {
            mode,
            store,
            buffer: DirectColorBuffer::new(),
            fallback,
            config,
        };

        if mode.is_external() {
            svc.apply_fallback(sink);
            matrix.set_flags(LedFlags::ALL);
        }

        info!(
            "DirectModeService booted {:?} (policy {:?}, {} LEDs)",
            mode, svc.config.boot_policy, N
        );
        sink.emit(&AppEvent::Booted {
            mode,
            policy: svc.config.boot_policy,
        });
        Ok(svc)
    }

    // ── Mode transitions ──────────────────────────────────────

    /// Hand the matrix to the external host.
    ///
    /// Resets the buffer to the fallback every time, even when already
    /// external, then persists the mode.
    pub fn acquire(&mut self, sink: &mut impl EventSink) {
        let from = self.mode;
        self.mode = OwnershipMode::ExternalOwned;
        self.apply_fallback(sink);
        self.persist(sink);
        self.announce(from, sink);
    }

    /// Give the matrix back to native per-key logic and persist the mode.
    pub fn release(&mut self, sink: &mut impl EventSink) {
        let from = self.mode;
        self.mode = OwnershipMode::ViaOwned;
        self.persist(sink);
        self.announce(from, sink);
    }

    // ── Direct colors ─────────────────────────────────────────

    /// Write one buffer entry. Out-of-range indices are ignored.
    pub fn set_direct_color(&mut self, index: usize, color: Rgb) {
        self.buffer.set(index, color);
    }

    /// Per-frame direct effect body: push the whole buffer to the engine
    /// while the host owns the matrix.
    ///
    /// Returns `false` (and paints nothing) in VIA-owned mode.
    pub fn paint_direct(&self, matrix: &mut impl RgbMatrix) -> bool {
        if !self.mode.is_external() {
            return false;
        }
        for (index, color) in self.buffer.as_slice().iter().enumerate() {
            matrix.set_color(index, *color);
        }
        true
    }

    // ── Keyboard interop ──────────────────────────────────────

    /// Key hook. Returns `false` when the key was consumed.
    ///
    /// The toggle key flips the engine between painting the whole matrix
    /// and painting nothing (LEDs cleared), and always leaves the engine
    /// enabled.
    pub fn handle_key(&mut self, event: KeyEvent, matrix: &mut impl RgbMatrix) -> bool {
        match event.keycode {
            Keycode::RgbToggle => {
                if event.pressed {
                    if matrix.flags() == LedFlags::ALL {
                        matrix.set_flags(LedFlags::NONE);
                        matrix.set_color_all(BLACK);
                    } else {
                        matrix.set_flags(LedFlags::ALL);
                    }
                }
                if !matrix.is_enabled() {
                    matrix.set_flags(LedFlags::ALL);
                    matrix.enable();
                }
                false
            }
            Keycode::Other(_) => true,
        }
    }

    /// Indicator overlay, run after every frame.
    ///
    /// Caps lock forces the configured LED white in any mode. With caps
    /// lock off the LED is cleared only when the engine paints nothing,
    /// otherwise the frame's own color stays.
    pub fn render_indicators(&self, caps_lock: bool, matrix: &mut impl RgbMatrix) {
        let Some(led) = self.config.caps_lock_led else {
            return;
        };
        let led = usize::from(led);
        if caps_lock {
            matrix.set_color(led, WHITE);
        } else if matrix.flags().is_none() {
            matrix.set_color(led, BLACK);
        }
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn mode(&self) -> OwnershipMode {
        self.mode
    }

    pub fn buffer(&self) -> &DirectColorBuffer<N> {
        &self.buffer
    }

    pub fn config(&self) -> &DirectModeConfig {
        &self.config
    }

    pub fn store(&self) -> &ModeStore<S> {
        &self.store
    }

    pub const fn led_count(&self) -> usize {
        N
    }

    /// Tear down and hand back the storage adapter (reboot simulation).
    pub fn into_storage(self) -> S {
        self.store.into_storage()
    }

    // ── Internal ──────────────────────────────────────────────

    fn apply_fallback(&mut self, sink: &mut impl EventSink) {
        self.buffer.initialize_fallback(&mut self.fallback);
        sink.emit(&AppEvent::FallbackApplied);
    }

    /// Runtime persistence is best effort: the RAM mode stays authoritative.
    fn persist(&mut self, sink: &mut impl EventSink) {
        if let Err(e) = self.store.store(self.mode) {
            warn!("DirectModeService: failed to persist {:?}: {}", self.mode, e);
            sink.emit(&AppEvent::PersistFailed(self.mode));
        }
    }

    fn announce(&self, from: OwnershipMode, sink: &mut impl EventSink) {
        if from == self.mode {
            return;
        }
        info!("DirectModeService: {:?} -> {:?}", from, self.mode);
        sink.emit(&AppEvent::ModeChanged { from, to: self.mode });
    }
}
