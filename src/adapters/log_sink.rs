//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing application events through the
//! `log` facade, which the board's logger routes to the debug console.

use log::{info, warn};

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`AppEvent`].
#[derive(Debug, Default)]
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Booted { mode, policy } => {
                info!("BOOT  | mode={:?} policy={:?}", mode, policy);
            }
            AppEvent::ModeChanged { from, to } => {
                info!("MODE  | {:?} -> {:?}", from, to);
            }
            AppEvent::FallbackApplied => {
                info!("FILL  | fallback colors applied");
            }
            AppEvent::PersistFailed(mode) => {
                warn!("STORE | {:?} kept in RAM only", mode);
            }
            AppEvent::Committed => {
                info!("FRAME | host commit");
            }
        }
    }
}
