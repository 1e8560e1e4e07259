//! A consistent hashing ring mapping string keys onto a dynamic set of named nodes.
//!
//! Each node occupies a single slot in a fixed-size modular space. Adding or
//! removing a node only remaps the keys between it and its predecessor.
//!
//! ```
//! use slotring::HashRing;
//!
//! let ring = HashRing::new(1024)?;
//! ring.add_node("cache-a")?;
//! ring.add_node("cache-b")?;
//! let owner = ring.get_node("user:42")?;
//! assert!(owner == "cache-a" || owner == "cache-b");
//! # Ok::<(), slotring::RingError>(())
//! ```

pub mod cluster {
    pub mod hashing;
    pub mod node;
    pub mod ring;
    pub mod ring_config;
}

pub mod error {
    pub mod ring_error;
}

pub use crate::cluster::hashing::SlotHasher;
pub use crate::cluster::node::RingEntry;
pub use crate::cluster::ring::HashRing;
pub use crate::cluster::ring_config::{RingConfig, DEFAULT_SLOT_SPACE_SIZE};
pub use crate::error::ring_error::RingError;
