//! Key events delivered by the keycode dispatcher.
//!
//! Only the RGB toggle key is interpreted by the direct-mode core; every
//! other key is passed through untouched.

/// Keycodes the direct-mode core cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keycode {
    /// Toggle between engine-painted and direct/indicator-only output.
    RgbToggle,
    /// Any other key, by raw keycode.
    Other(u16),
}

/// A single press or release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub keycode: Keycode,
    pub pressed: bool,
}

impl KeyEvent {
    pub const fn press(keycode: Keycode) -> Self {
        Self {
            keycode,
            pressed: true,
        }
    }

    pub const fn release(keycode: Keycode) -> Self {
        Self {
            keycode,
            pressed: false,
        }
    }
}
