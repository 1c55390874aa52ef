//! rgbdirect: direct host control of a keyboard's addressable LED matrix.
//!
//! A host takes exclusive ownership of the matrix through raw reports,
//! streams colors for every LED, and hands control back to the native
//! VIA-driven lighting. The ownership mode survives power cycles.
//!
//! Everything that touches hardware goes through the port traits in
//! [`app::ports`], so the whole crate runs against in-memory adapters on
//! the host.

#![deny(unused_must_use)]

pub mod adapters;
pub mod app;
pub mod config;
pub mod error;
pub mod firmware;
pub mod rpc;

/// One LED color.
pub type Rgb = smart_leds::RGB8;

pub use app::mode::OwnershipMode;
pub use app::service::DirectModeService;
pub use config::{BootPolicy, DirectModeConfig};
pub use firmware::Firmware;
