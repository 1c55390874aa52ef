//! Transport abstraction for the outbound half of the raw report channel.
//!
//! Concrete implementations:
//! - USB raw HID endpoint
//! - Bluetooth HID vendor report
//!
//! Inbound reports arrive through the receive callback and are handed to
//! [`ReportEngine::on_report`](super::engine::ReportEngine::on_report), so
//! the transport only needs to send.

/// Fixed-size report sender.
pub trait ReportTransport {
    /// Error type for this transport.
    type Error: core::fmt::Debug;

    /// Send one report. Must not block for longer than one endpoint poll.
    fn send(&mut self, report: &[u8]) -> Result<(), Self::Error>;
}

/// A null transport that discards all writes.
/// Useful as a default when no host is connected.
pub struct NullTransport;

impl ReportTransport for NullTransport {
    type Error = ();

    fn send(&mut self, _report: &[u8]) -> Result<(), ()> {
        Ok(())
    }
}
