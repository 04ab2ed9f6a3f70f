//! Rebalancing statistics
//!
//! Tracks how often each rotation fires so callers can verify the
//! "at most one rotation per insertion" bound empirically.

use crate::tree::Rotation;

/// Counters collected during insertion
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RotationStats {
    /// One slot per [`Rotation`] kind, indexed by `Rotation::index`
    rotations: [u64; 4],

    /// Keys that created a new node
    inserted: u64,

    /// Keys that matched an existing node
    duplicates: u64,

    /// Largest number of rotations fired by one insertion
    max_per_insert: u32,
}

impl RotationStats {
    /// Create empty counters
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one rotation
    pub(crate) fn record_rotation(&mut self, kind: Rotation) {
        self.rotations[kind.index()] += 1;
    }

    /// Record the end of a successful insertion
    pub(crate) fn record_insert(&mut self, rotations_fired: u32) {
        self.inserted += 1;
        self.max_per_insert = self.max_per_insert.max(rotations_fired);
    }

    /// Record an insertion that hit an existing key
    pub(crate) fn record_duplicate(&mut self) {
        self.duplicates += 1;
    }

    /// Number of times `kind` fired
    pub fn count(&self, kind: Rotation) -> u64 {
        self.rotations[kind.index()]
    }

    /// Total rotations of all kinds (a double rotation counts once)
    pub fn total_rotations(&self) -> u64 {
        self.rotations.iter().sum()
    }

    /// Single rotations only
    pub fn single_rotations(&self) -> u64 {
        self.count(Rotation::Left) + self.count(Rotation::Right)
    }

    /// Double rotations only
    pub fn double_rotations(&self) -> u64 {
        self.count(Rotation::LeftRight) + self.count(Rotation::RightLeft)
    }

    /// Keys inserted as new nodes
    pub fn inserted(&self) -> u64 {
        self.inserted
    }

    /// Keys that were already present
    pub fn duplicates(&self) -> u64 {
        self.duplicates
    }

    /// Most rotations observed during a single insertion
    pub fn max_rotations_per_insert(&self) -> u32 {
        self.max_per_insert
    }

    /// Reset all counters
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Generate report
    pub fn report(&self) -> String {
        format!(
            "Inserted: {}\nDuplicates: {}\nRotations: {}\n  Left: {}\n  Right: {}\n  Left-right: {}\n  Right-left: {}\nMax per insert: {}",
            self.inserted,
            self.duplicates,
            self.total_rotations(),
            self.count(Rotation::Left),
            self.count(Rotation::Right),
            self.count(Rotation::LeftRight),
            self.count(Rotation::RightLeft),
            self.max_per_insert
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_by_kind() {
        let mut stats = RotationStats::new();
        stats.record_rotation(Rotation::Left);
        stats.record_rotation(Rotation::Left);
        stats.record_rotation(Rotation::RightLeft);
        stats.record_insert(1);
        stats.record_insert(0);
        stats.record_duplicate();

        assert_eq!(stats.count(Rotation::Left), 2);
        assert_eq!(stats.count(Rotation::Right), 0);
        assert_eq!(stats.single_rotations(), 2);
        assert_eq!(stats.double_rotations(), 1);
        assert_eq!(stats.total_rotations(), 3);
        assert_eq!(stats.inserted(), 2);
        assert_eq!(stats.duplicates(), 1);
        assert_eq!(stats.max_rotations_per_insert(), 1);
    }

    #[test]
    fn test_reset_and_report() {
        let mut stats = RotationStats::new();
        stats.record_rotation(Rotation::Right);
        stats.record_insert(1);
        assert!(stats.report().contains("Right: 1"));

        stats.reset();
        assert_eq!(stats, RotationStats::default());
        assert!(stats.report().starts_with("Inserted: 0"));
    }
}
