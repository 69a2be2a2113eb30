// episodic-data/src/samplers/traits.rs

use episodic_core::EpisodicError;
use std::fmt::Debug;

/// One batch of dataset indices, or the reason it could not be produced.
pub type BatchResult = Result<Vec<usize>, EpisodicError>;

/// A BatchSampler trait that defines how to iterate over batches of dataset indices.
///
/// Unlike a per-index sampler, each item is a complete batch. A data loader
/// pulls one batch per training iteration and maps the indices to samples.
pub trait BatchSampler: Debug + Send + Sync {
    /// Returns an iterator over one epoch of index batches.
    ///
    /// Every call starts a fresh, independently randomized epoch.
    fn iter(&self) -> Box<dyn Iterator<Item = BatchResult> + Send + '_>;

    /// Returns the number of batches one epoch yields.
    fn len(&self) -> usize;

    /// Returns true if an epoch yields no batches.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
