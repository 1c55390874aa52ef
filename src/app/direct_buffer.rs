//! Direct-color buffer and fallback policies.
//!
//! The buffer mirrors the last color the host set for every LED. It is
//! written by the report dispatcher and by the fallback initializer, and
//! read by the per-frame direct painter and the status responder.

use crate::Rgb;

/// Fallback color used when nothing else is configured.
pub const FALLBACK_WHITE: Rgb = Rgb::new(255, 255, 255);

/// Strategy that fills the buffer when the host takes control, before it
/// has sent any real colors.
pub trait FallbackPolicy {
    fn fill(&mut self, colors: &mut [Rgb]);
}

/// Fill every LED with white.
#[derive(Debug, Clone, Copy, Default)]
pub struct WhiteFallback;

impl FallbackPolicy for WhiteFallback {
    fn fill(&mut self, colors: &mut [Rgb]) {
        colors.fill(FALLBACK_WHITE);
    }
}

/// Fill every LED with one configured color.
#[derive(Debug, Clone, Copy)]
pub struct SolidFallback(pub Rgb);

impl FallbackPolicy for SolidFallback {
    fn fill(&mut self, colors: &mut [Rgb]) {
        colors.fill(self.0);
    }
}

/// One color per LED, `N` = LED count of the matrix.
#[derive(Debug, Clone)]
pub struct DirectColorBuffer<const N: usize> {
    colors: [Rgb; N],
}

impl<const N: usize> DirectColorBuffer<N> {
    /// All LEDs off.
    pub const fn new() -> Self {
        Self {
            colors: [Rgb::new(0, 0, 0); N],
        }
    }

    pub const fn len(&self) -> usize {
        N
    }

    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Reset every entry through `policy`.
    pub fn initialize_fallback(&mut self, policy: &mut impl FallbackPolicy) {
        policy.fill(&mut self.colors);
    }

    /// Bounds-checked write. Indices past the matrix are silently ignored.
    pub fn set(&mut self, index: usize, color: Rgb) {
        if let Some(slot) = self.colors.get_mut(index) {
            *slot = color;
        }
    }

    pub fn get(&self, index: usize) -> Option<Rgb> {
        self.colors.get(index).copied()
    }

    pub fn as_slice(&self) -> &[Rgb] {
        &self.colors
    }
}

impl<const N: usize> Default for DirectColorBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}
