use serde::{Deserialize, Serialize};

/// Progress sample taken while a simulation runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub cycle: u64,
    /// Length of the shortest route found so far, 0 when none.
    pub route_length: usize,
    pub agent_count: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotCollection {
    pub snapshots: Vec<Snapshot>,
}

impl SnapshotCollection {
    pub fn push(&mut self, snapshot: Snapshot) {
        self.snapshots.push(snapshot);
    }

    /// Drops samples that repeat the previous cycle and route length.
    pub fn dedup(&mut self) {
        self.snapshots
            .dedup_by(|b, a| a.cycle == b.cycle && a.route_length == b.route_length);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}
