use sha2::{Digest, Sha256};

/// Maps strings onto the ring's slot space.
///
/// The slot is the first 8 bytes of the SHA-256 digest, read big-endian,
/// reduced modulo the slot space size. Node names and data keys go through
/// the same hasher so that both land in the same space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotHasher {
    slot_space_size: u64,
}

impl SlotHasher {
    /// `slot_space_size` must be non-zero; the ring checks this before building one.
    pub(crate) fn new(slot_space_size: u64) -> Self {
        debug_assert!(slot_space_size > 0);
        Self { slot_space_size }
    }

    pub fn slot_space_size(&self) -> u64 {
        self.slot_space_size
    }

    pub fn slot_for(&self, key: &str) -> u64 {
        let digest = Sha256::digest(key.as_bytes());
        let mut prefix = [0u8; 8];
        prefix.copy_from_slice(&digest[..8]);
        u64::from_be_bytes(prefix) % self.slot_space_size
    }
}
