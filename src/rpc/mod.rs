//! Raw report protocol.
//!
//! ```text
//! ┌───────────┐   ┌──────────┐   ┌──────────┐   ┌─────────────────────┐
//! │ receive   │──▶│ channels │──▶│  codec   │──▶│ engine (dispatcher) │
//! │ callback  │   │ (queue)  │   │ (decode) │   │ → DirectModeService │
//! └───────────┘   └──────────┘   └──────────┘   └─────────────────────┘
//!                                                        │
//!                  ┌───────────┐      status reply       │
//!                  │ transport │◀────────────────────────┘
//!                  └───────────┘
//! ```

pub mod channels;
pub mod codec;
pub mod engine;
pub mod transport;
