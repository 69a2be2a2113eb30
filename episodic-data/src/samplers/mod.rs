pub mod traits;
pub mod episodic_batch_sampler;

pub use traits::{BatchResult, BatchSampler};
pub use episodic_batch_sampler::{EpisodeIter, EpisodicBatchSampler};
