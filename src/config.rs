//! Direct-mode configuration parameters
//!
//! Everything the surrounding keyboard build can tune. LED count is not
//! here: it is a hardware constant and travels as a const generic. The
//! fallback color is not here either: it belongs to the injected
//! [`FallbackPolicy`](crate::app::direct_buffer::FallbackPolicy).

use core::fmt;

use serde::{Deserialize, Serialize};

/// Protocol version reported in the status reply.
pub const PROTOCOL_VERSION_MAJOR: u8 = 1;
pub const PROTOCOL_VERSION_MINOR: u8 = 0;

/// How the persisted mode word is interpreted at boot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BootPolicy {
    /// Boot external only when the stored word is the external magic;
    /// anything else (VIA magic, erased, garbage) boots VIA-owned.
    #[default]
    Persisted,
    /// Always boot external, whatever the stored word says.
    ForceExternal,
}

/// Core direct-mode configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DirectModeConfig {
    /// Boot-time interpretation of the persisted mode word
    pub boot_policy: BootPolicy,
    /// LED used as the caps-lock indicator, if any
    pub caps_lock_led: Option<u8>,

    // --- Storage layout ---
    /// Base byte address of the user configuration block
    pub eeprom_user_base: u16,
    /// Byte offset of the mode word past `eeprom_user_base`
    pub mode_word_offset: u16,
}

impl Default for DirectModeConfig {
    fn default() -> Self {
        Self {
            boot_policy: BootPolicy::Persisted,
            caps_lock_led: None,

            eeprom_user_base: 32,
            mode_word_offset: 4, // one 32-bit user word past the base
        }
    }
}

impl DirectModeConfig {
    /// Absolute byte address of the persisted mode word.
    ///
    /// `None` when base + offset leaves the 16-bit address space.
    pub fn mode_word_addr(&self) -> Option<u16> {
        self.eeprom_user_base.checked_add(self.mode_word_offset)
    }

    /// Range-check the configuration against the matrix size.
    pub fn validate(&self, led_count: usize) -> Result<(), ConfigError> {
        if self.mode_word_addr().is_none() {
            return Err(ConfigError::ValidationFailed(
                "eeprom_user_base + mode_word_offset overflows the address space",
            ));
        }
        if let Some(led) = self.caps_lock_led {
            if usize::from(led) >= led_count {
                return Err(ConfigError::ValidationFailed(
                    "caps_lock_led must be below the LED count",
                ));
            }
        }
        Ok(())
    }
}

/// Errors from configuration validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// A config field failed range validation.
    /// The `&'static str` describes which field and why.
    ValidationFailed(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ValidationFailed(msg) => write!(f, "validation failed: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}
