//! Tree configuration
//!
//! - Equal-key policy
//! - Node budget (stands in for allocation failure)
//! - Rotation statistics toggle

use crate::TreeError;

/// What to do when an inserted key is already present
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum DuplicatePolicy {
    /// Leave the tree unchanged and report `Ok(false)`
    #[default]
    Ignore,

    /// Leave the tree unchanged and report [`TreeError::DuplicateKey`]
    Reject,
}

/// Configuration parameters for an [`AvlTree`](crate::AvlTree)
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TreeConfig {
    /// Equal-key policy
    pub duplicate_policy: DuplicatePolicy,

    /// Maximum number of nodes (None = unbounded)
    pub capacity: Option<usize>,

    /// Count rotations in [`RotationStats`](crate::RotationStats)
    pub track_rotations: bool,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            duplicate_policy: DuplicatePolicy::Ignore,
            capacity: None,
            track_rotations: true,
        }
    }
}

impl TreeConfig {
    /// Default configuration: ignore duplicates, unbounded, tracking on
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the equal-key policy
    pub fn with_duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicate_policy = policy;
        self
    }

    /// Cap the number of nodes
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = Some(capacity);
        self
    }

    /// Enable or disable rotation statistics
    pub fn with_rotation_tracking(mut self, enabled: bool) -> Self {
        self.track_rotations = enabled;
        self
    }

    /// Reject configurations no tree could use
    pub fn validate(&self) -> Result<(), TreeError> {
        if self.capacity == Some(0) {
            return Err(TreeError::InvalidConfig(
                "capacity must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// True if `len` nodes leave no room for another
    pub(crate) fn is_full(&self, len: usize) -> bool {
        self.capacity.is_some_and(|cap| len >= cap)
    }
}
