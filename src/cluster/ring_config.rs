use crate::error::ring_error::RingError;

pub const DEFAULT_SLOT_SPACE_SIZE: u64 = 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RingConfig {
    /// Number of positions in the ring's modular space, fixed for the ring's lifetime.
    pub slot_space_size: u64,
}

impl RingConfig {
    pub fn new(slot_space_size: u64) -> Self {
        Self { slot_space_size }
    }

    pub fn new_default() -> Self {
        Self {
            slot_space_size: DEFAULT_SLOT_SPACE_SIZE,
        }
    }

    pub fn validate(&self) -> Result<(), RingError> {
        if self.slot_space_size == 0 {
            return Err(RingError::InvalidSlotSpace);
        }
        Ok(())
    }
}

impl Default for RingConfig {
    fn default() -> Self {
        Self::new_default()
    }
}
