/// A ring entry bundles a node's name with the slot it occupies.
/// Keeping both in one record means the ring can never hold a position without its owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RingEntry {
    pub position: u64,
    pub node: String,
}

impl RingEntry {
    pub fn new(position: u64, node: impl Into<String>) -> RingEntry {
        Self {
            position,
            node: node.into(),
        }
    }
}

impl std::fmt::Display for RingEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}@{}", self.node, self.position)
    }
}
