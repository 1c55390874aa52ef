//! Inbound report queue.
//!
//! The transport receive callback may run in interrupt context, while the
//! dispatcher must run on the cooperative main loop. Reports are copied
//! into an `embassy-sync` bounded channel and drained from the loop, so no
//! dispatcher code ever runs inside the callback.
//!
//! ```text
//! ┌──────────────────┐  InboundReport  ┌──────────────┐
//! │ receive callback │───────────────▶│  Main loop   │
//! │ (USB / BT irq)   │                 │ ReportEngine │
//! └──────────────────┘                 └──────────────┘
//! ```

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use heapless::Vec;

/// Largest report the queue accepts (full-speed USB interrupt endpoint).
pub const MAX_REPORT_LEN: usize = 64;

/// Channel depth for inbound reports.
pub const REPORT_DEPTH: usize = 8;

/// One inbound report, copied out of the transport buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboundReport {
    pub data: Vec<u8, MAX_REPORT_LEN>,
}

impl InboundReport {
    /// Copy `bytes`. `None` if they exceed [`MAX_REPORT_LEN`].
    pub fn from_slice(bytes: &[u8]) -> Option<Self> {
        Vec::from_slice(bytes).ok().map(|data| Self { data })
    }
}

/// Receive callback → main loop.
pub type ReportChannel = Channel<CriticalSectionRawMutex, InboundReport, REPORT_DEPTH>;

/// Queue a report from the receive callback.
///
/// Returns `false` if the report was dropped (queue full or oversized).
/// Never blocks, so it is safe to call from interrupt context.
pub fn enqueue_report(channel: &ReportChannel, bytes: &[u8]) -> bool {
    let Some(report) = InboundReport::from_slice(bytes) else {
        return false;
    };
    channel.try_send(report).is_ok()
}

/// Drain every pending report into `handler`, in FIFO order.
/// Returns how many were handled.
pub fn drain_reports(channel: &ReportChannel, mut handler: impl FnMut(&[u8])) -> usize {
    let mut count = 0;
    while let Ok(report) = channel.try_receive() {
        handler(&report.data);
        count += 1;
    }
    count
}
