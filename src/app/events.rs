//! Outbound application events.
//!
//! The [`DirectModeService`](super::service::DirectModeService) emits these
//! through the [`EventSink`](super::ports::EventSink) port. Adapters on the
//! other side decide what to do with them (serial log, debug console, etc.).

use crate::config::BootPolicy;

use super::mode::OwnershipMode;

/// Structured events emitted by the direct-mode core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// Boot sequencing finished; carries the resolved mode and the policy
    /// that produced it.
    Booted {
        mode: OwnershipMode,
        policy: BootPolicy,
    },

    /// Ownership of the LED matrix moved between controllers.
    ModeChanged {
        from: OwnershipMode,
        to: OwnershipMode,
    },

    /// The direct-color buffer was reset by the fallback policy.
    FallbackApplied,

    /// The mode changed in RAM but could not be written to storage.
    PersistFailed(OwnershipMode),

    /// The host forced an immediate render.
    Committed,
}
