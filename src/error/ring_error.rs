use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RingError {
    #[error("Invalid argument: {0} cannot be empty")]
    InvalidArgument(&'static str),

    #[error("Hash ring is empty")]
    EmptyRing,

    #[error("Collision occurred for node {node} at slot {slot}")]
    Collision { node: String, slot: u64 },

    #[error("Node {node} doesn't exist in the ring")]
    NotFound { node: String },

    #[error("Slot space size must be greater than zero")]
    InvalidSlotSpace,
}

impl RingError {
    /// Errors caused by the caller's input rather than the ring's current membership.
    pub fn is_argument_error(&self) -> bool {
        matches!(self, RingError::InvalidArgument(_) | RingError::InvalidSlotSpace)
    }
}
