//! Episodic batch samplers for few-shot training loops.
//!
//! An [`EpisodicBatchSampler`] groups dataset positions by label once, then
//! yields one batch of indices per training iteration. A data loader maps the
//! indices to samples; this crate never touches the samples themselves.
//!
//! ```rust
//! use episodic_data::{BatchSampler, EpisodicBatchSampler};
//!
//! let labels = vec![0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 2, 2, 2, 2, 2];
//! let sampler = EpisodicBatchSampler::new(labels, 3, 2, 10).expect("valid configuration");
//! assert_eq!(sampler.len(), 10);
//! for batch in sampler.iter() {
//!     let batch = batch.expect("every class holds enough samples");
//!     assert_eq!(batch.len(), 7);
//! }
//! ```

pub mod samplers;

// Re-export main components
pub use samplers::{BatchResult, BatchSampler, EpisodeIter, EpisodicBatchSampler};
pub use episodic_core::{ClassIndexTable, EpisodeConfig, EpisodicError, OffsetPolicy};
