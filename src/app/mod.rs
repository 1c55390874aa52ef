//! Application core: pure ownership logic, zero I/O.
//!
//! The ownership mode, its persistence, the direct-color buffer and the
//! keyboard interop hooks live here. All interaction with storage and the
//! LED engine happens through **port traits** defined in [`ports`].

pub mod direct_buffer;
pub mod events;
pub mod keys;
pub mod mode;
pub mod ports;
pub mod service;
