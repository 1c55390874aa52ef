//! Ownership mode and its persistent store.
//!
//! The mode is a single 16-bit word in EEPROM. Two magic values name the
//! two owners; every other value (including the erased `0xFFFF`) means
//! "never written".

use log::info;

use crate::config::BootPolicy;

use super::ports::{StorageError, WordStorage};

/// Magic word persisted for [`OwnershipMode::ViaOwned`].
pub const VIA_MAGIC: u16 = 0x0172;

/// Magic word persisted for [`OwnershipMode::ExternalOwned`].
pub const EXTERNAL_MAGIC: u16 = 0x0173;

/// Which controller owns the LED matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OwnershipMode {
    /// Native per-key logic and the VIA configuration protocol.
    #[default]
    ViaOwned,
    /// An external host application writing colors directly.
    ExternalOwned,
}

impl OwnershipMode {
    /// Map a persisted word to a mode. Unknown words map to `ViaOwned`.
    pub const fn from_word(word: u16) -> Self {
        match word {
            EXTERNAL_MAGIC => Self::ExternalOwned,
            _ => Self::ViaOwned,
        }
    }

    pub const fn to_word(self) -> u16 {
        match self {
            Self::ViaOwned => VIA_MAGIC,
            Self::ExternalOwned => EXTERNAL_MAGIC,
        }
    }

    pub const fn is_external(self) -> bool {
        matches!(self, Self::ExternalOwned)
    }
}

/// Persistent store for the ownership mode.
///
/// Owns the storage adapter and the address of the mode word.
pub struct ModeStore<S: WordStorage> {
    storage: S,
    addr: u16,
}

impl<S: WordStorage> ModeStore<S> {
    pub fn new(storage: S, addr: u16) -> Self {
        Self { storage, addr }
    }

    /// Read the persisted mode.
    pub fn load(&self) -> Result<OwnershipMode, StorageError> {
        let word = self.storage.read_word(self.addr)?;
        Ok(OwnershipMode::from_word(word))
    }

    /// Resolve the boot mode under `policy`.
    ///
    /// `ForceExternal` never touches storage.
    pub fn load_with_policy(&self, policy: BootPolicy) -> Result<OwnershipMode, StorageError> {
        match policy {
            BootPolicy::Persisted => self.load(),
            BootPolicy::ForceExternal => Ok(OwnershipMode::ExternalOwned),
        }
    }

    /// Persist `mode`. The word is only written when it differs from what
    /// storage already holds.
    pub fn store(&mut self, mode: OwnershipMode) -> Result<(), StorageError> {
        let word = mode.to_word();
        if self.storage.read_word(self.addr)? == word {
            return Ok(());
        }
        self.storage.write_word(self.addr, word)?;
        info!("ModeStore: persisted {:?} ({:#06x}) at {:#06x}", mode, word, self.addr);
        Ok(())
    }

    /// Raw word currently in storage (diagnostics).
    pub fn raw_word(&self) -> Result<u16, StorageError> {
        self.storage.read_word(self.addr)
    }

    pub fn addr(&self) -> u16 {
        self.addr
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Give the storage adapter back (e.g. to simulate a reboot).
    pub fn into_storage(self) -> S {
        self.storage
    }
}
