//! In-memory EEPROM adapter.
//!
//! Implements [`WordStorage`] over a fixed byte array that starts in the
//! erased state (`0xFF` everywhere), exactly like a blank EEPROM or an
//! emulated-EEPROM flash page. Words are little-endian.
//!
//! Used as the host/test backend and as the RAM mirror on targets whose
//! EEPROM driver flushes a shadow copy.

use crate::app::ports::{StorageError, WordStorage};

/// Value every byte holds before it is first written.
pub const ERASED_BYTE: u8 = 0xFF;

pub struct MemoryEeprom<const SIZE: usize> {
    bytes: [u8; SIZE],
    writes: u32,
}

impl<const SIZE: usize> MemoryEeprom<SIZE> {
    /// A blank, fully erased EEPROM.
    pub const fn new() -> Self {
        Self {
            bytes: [ERASED_BYTE; SIZE],
            writes: 0,
        }
    }

    /// Erase every byte (factory reset).
    pub fn erase(&mut self) {
        self.bytes = [ERASED_BYTE; SIZE];
    }

    /// Number of word writes performed since construction.
    pub fn write_count(&self) -> u32 {
        self.writes
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    fn range(addr: u16) -> Result<core::ops::Range<usize>, StorageError> {
        let start = usize::from(addr);
        let end = start + 2;
        if end > SIZE {
            return Err(StorageError::OutOfRange(addr));
        }
        Ok(start..end)
    }
}

impl<const SIZE: usize> Default for MemoryEeprom<SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const SIZE: usize> WordStorage for MemoryEeprom<SIZE> {
    fn read_word(&self, addr: u16) -> Result<u16, StorageError> {
        let range = Self::range(addr)?;
        let word = &self.bytes[range];
        Ok(u16::from_le_bytes([word[0], word[1]]))
    }

    fn write_word(&mut self, addr: u16, value: u16) -> Result<(), StorageError> {
        let range = Self::range(addr)?;
        self.bytes[range].copy_from_slice(&value.to_le_bytes());
        self.writes = self.writes.wrapping_add(1);
        Ok(())
    }
}
