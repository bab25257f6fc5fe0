//! In-memory fleet roster.

use super::status::TrainStatus;

/// The full set of train statuses for one viewing session.
///
/// The roster is fixed at construction: entries are never added or
/// removed, only their mutable fields change. Line filtering happens at
/// read time, so a mutation always covers every entry regardless of which
/// line is currently on screen.
#[derive(Debug, Clone)]
pub struct FleetStore {
    seed: Vec<TrainStatus>,
    roster: Vec<TrainStatus>,
}

impl FleetStore {
    /// Create a store from the initial roster.
    pub fn new(seed: Vec<TrainStatus>) -> Self {
        Self {
            roster: seed.clone(),
            seed,
        }
    }

    /// Returns the entries on `line`, in roster order.
    ///
    /// An unknown line is not an error: it simply has no trains.
    pub fn roster_for(&self, line: &str) -> Vec<TrainStatus> {
        self.roster
            .iter()
            .filter(|t| t.line == line)
            .cloned()
            .collect()
    }

    /// Returns every entry, in roster order.
    pub fn roster(&self) -> &[TrainStatus] {
        &self.roster
    }

    /// Replace every entry with `update(entry)`.
    ///
    /// Vehicle id and owning line are identity, so they are restored on
    /// the result even if `update` rewrote them.
    pub fn apply<F>(&mut self, mut update: F)
    where
        F: FnMut(&TrainStatus) -> TrainStatus,
    {
        for entry in &mut self.roster {
            let mut next = update(entry);
            next.id = std::mem::take(&mut entry.id);
            next.line = std::mem::take(&mut entry.line);
            *entry = next;
        }
    }

    /// Restore every entry on `line` to its seed value.
    ///
    /// Returns the number of entries reset.
    pub fn reset_line(&mut self, line: &str) -> usize {
        let mut count = 0;
        for (entry, seed) in self.roster.iter_mut().zip(&self.seed) {
            if seed.line == line {
                *entry = seed.clone();
                count += 1;
            }
        }
        count
    }

    /// Returns the number of entries in the roster.
    pub fn len(&self) -> usize {
        self.roster.len()
    }

    /// Returns true if the roster has no entries.
    pub fn is_empty(&self) -> bool {
        self.roster.is_empty()
    }
}
