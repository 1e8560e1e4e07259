//! Contains the implementation for assigning hashed data to nodes.
//!
//! Every node occupies exactly one slot in a fixed-size modular space. A key is
//! owned by the first node whose slot is at or after the key's slot, wrapping
//! back to the lowest node when the key lies past the highest one.
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::{debug, trace};

use crate::cluster::hashing::SlotHasher;
use crate::cluster::node::RingEntry;
use crate::cluster::ring_config::RingConfig;
use crate::error::ring_error::RingError;

pub struct HashRing {
    // sorted by position, no duplicate positions
    entries: RwLock<Vec<RingEntry>>,
    hasher: SlotHasher,
}

impl HashRing {
    pub fn new(slot_space_size: u64) -> Result<Self, RingError> {
        Self::with_config(RingConfig::new(slot_space_size))
    }

    pub fn with_config(config: RingConfig) -> Result<Self, RingError> {
        config.validate()?;
        Ok(Self {
            entries: RwLock::new(Vec::new()),
            hasher: SlotHasher::new(config.slot_space_size),
        })
    }

    /// Adds a node to the ring at the slot its name hashes to.
    /// Fails with `Collision` if that slot is already taken, including by the same name.
    pub fn add_node(&self, name: &str) -> Result<(), RingError> {
        if name.is_empty() {
            return Err(RingError::InvalidArgument("node name"));
        }
        let slot = self.hasher.slot_for(name);

        let mut entries = self.write_entries();
        let index = insertion_point(&entries, slot);
        if entries.get(index).is_some_and(|e| e.position == slot) {
            debug!(node = name, slot, "slot already occupied, rejecting node");
            return Err(RingError::Collision {
                node: name.to_string(),
                slot,
            });
        }

        entries.insert(index, RingEntry::new(slot, name));
        debug!(node = name, slot, nodes = entries.len(), "added node to ring");
        Ok(())
    }

    /// Removes a node from the ring, freeing its slot.
    pub fn remove_node(&self, name: &str) -> Result<(), RingError> {
        if name.is_empty() {
            return Err(RingError::InvalidArgument("node name"));
        }

        let mut entries = self.write_entries();
        if entries.is_empty() {
            return Err(RingError::EmptyRing);
        }

        let slot = self.hasher.slot_for(name);
        let index = insertion_point(&entries, slot);
        // A different node sitting on the same slot is not this node.
        match entries.get(index) {
            Some(entry) if entry.position == slot && entry.node == name => {}
            _ => {
                debug!(node = name, slot, "node not present in ring");
                return Err(RingError::NotFound {
                    node: name.to_string(),
                });
            }
        }

        entries.remove(index);
        debug!(node = name, slot, nodes = entries.len(), "removed node from ring");
        Ok(())
    }

    /// Returns the node owning `key`.
    pub fn get_node(&self, key: &str) -> Result<String, RingError> {
        if key.is_empty() {
            return Err(RingError::InvalidArgument("data key"));
        }

        let entries = self.read_entries();
        if entries.is_empty() {
            return Err(RingError::EmptyRing);
        }

        let slot = self.hasher.slot_for(key);
        let mut index = insertion_point(&entries, slot);
        if index == entries.len() {
            // past the highest node, wrap around
            index = 0;
        }

        let owner = &entries[index];
        trace!(key, slot, node = %owner.node, "resolved key owner");
        Ok(owner.node.clone())
    }

    pub fn len(&self) -> usize {
        self.read_entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read_entries().is_empty()
    }

    pub fn slot_space_size(&self) -> u64 {
        self.hasher.slot_space_size()
    }

    /// Slot that `key` hashes to. Node names and data keys share the same space.
    pub fn slot_for(&self, key: &str) -> u64 {
        self.hasher.slot_for(key)
    }

    pub fn contains_node(&self, name: &str) -> bool {
        if name.is_empty() {
            return false;
        }
        let slot = self.hasher.slot_for(name);
        let entries = self.read_entries();
        entries
            .get(insertion_point(&entries, slot))
            .is_some_and(|e| e.position == slot && e.node == name)
    }

    /// Node names in ring order, lowest slot first.
    pub fn nodes(&self) -> Vec<String> {
        self.read_entries().iter().map(|e| e.node.clone()).collect()
    }

    /// Snapshot of the ring's entries in ring order.
    pub fn entries(&self) -> Vec<RingEntry> {
        self.read_entries().clone()
    }

    // Mutations validate before touching the vector, so a panic while the lock
    // is held cannot leave it half-updated. Recovering a poisoned lock is safe.
    fn read_entries(&self) -> RwLockReadGuard<'_, Vec<RingEntry>> {
        self.entries.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_entries(&self) -> RwLockWriteGuard<'_, Vec<RingEntry>> {
        self.entries.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl std::fmt::Debug for HashRing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HashRing")
            .field("slot_space_size", &self.hasher.slot_space_size())
            .field("entries", &*self.read_entries())
            .finish()
    }
}

/// Smallest index whose position is `>= target`, or `entries.len()` if there is none.
fn insertion_point(entries: &[RingEntry], target: u64) -> usize {
    entries.partition_point(|e| e.position < target)
}
