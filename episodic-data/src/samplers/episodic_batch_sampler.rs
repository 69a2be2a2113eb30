// episodic-data/src/samplers/episodic_batch_sampler.rs

use super::traits::{BatchResult, BatchSampler};
use episodic_core::{ClassIndexTable, EpisodeConfig, EpisodicError};
use log::{debug, trace};
use rand::rngs::StdRng;
use rand::seq::{index, SliceRandom};
use rand::{Rng, SeedableRng};
use std::fmt::Debug;
use std::hash::Hash;

/// A batch sampler that yields N-way K-shot episodes.
///
/// Each batch covers `classes_per_episode` random classes. For every selected
/// class `samples_per_class + 1` distinct samples are drawn and interleaved
/// class by class (position `i + row * classes_per_episode` holds row `row` of
/// the i-th selected class). A window of `samples_per_class * classes_per_episode + 1`
/// indices is cut from that raw batch at a random offset, and every element of
/// the window except the last is shuffled.
///
/// The sampler never stores a random number generator: each epoch owns its own,
/// so a shared sampler can serve several epochs independently.
#[derive(Debug, Clone)]
pub struct EpisodicBatchSampler<L> {
    table: ClassIndexTable<L>,
    config: EpisodeConfig,
}

impl<L: Ord + Hash + Clone> EpisodicBatchSampler<L> {
    /// Creates a new `EpisodicBatchSampler`.
    ///
    /// # Arguments
    ///
    /// * `labels`: One label per dataset sample; sample `i` has label `labels[i]`.
    /// * `classes_per_episode`: Number of random classes in each episode.
    /// * `samples_per_class`: Number of samples per class (support + query).
    /// * `iterations`: Number of episodes per epoch.
    ///
    /// # Errors
    ///
    /// Returns `EpisodicError::InsufficientClasses` if the labels contain fewer than
    /// `classes_per_episode` distinct classes, or `InvalidConfiguration` for zero values.
    pub fn new<I>(
        labels: I,
        classes_per_episode: usize,
        samples_per_class: usize,
        iterations: usize,
    ) -> Result<Self, EpisodicError>
    where
        I: IntoIterator<Item = L>,
    {
        Self::from_config(
            labels,
            EpisodeConfig::new(classes_per_episode, samples_per_class, iterations),
        )
    }

    /// Creates a sampler from a full `EpisodeConfig`.
    pub fn from_config<I>(labels: I, config: EpisodeConfig) -> Result<Self, EpisodicError>
    where
        I: IntoIterator<Item = L>,
    {
        let labels: Vec<L> = labels.into_iter().collect();
        Self::from_table(ClassIndexTable::build(&labels), config)
    }
}

impl<L> EpisodicBatchSampler<L> {
    /// Creates a sampler over an already built class table.
    pub fn from_table(table: ClassIndexTable<L>, config: EpisodeConfig) -> Result<Self, EpisodicError> {
        config.validate(table.num_classes())?;
        debug!(
            "EpisodicBatchSampler: {}-way {}-shot over {} classes, {} iterations, batch size {}, offsets up to {} ({:?})",
            config.classes_per_episode,
            config.samples_per_class,
            table.num_classes(),
            config.iterations,
            config.batch_size(),
            config.max_offset(),
            config.offset_policy
        );
        Ok(EpisodicBatchSampler { table, config })
    }

    pub fn config(&self) -> &EpisodeConfig {
        &self.config
    }

    pub fn table(&self) -> &ClassIndexTable<L> {
        &self.table
    }

    /// Length of every batch this sampler yields.
    pub fn batch_size(&self) -> usize {
        self.config.batch_size()
    }

    pub fn iterations(&self) -> usize {
        self.config.iterations
    }

    /// Samples a single episode.
    ///
    /// # Errors
    ///
    /// * `InsufficientClasses` if fewer classes exist than requested.
    /// * `InsufficientSamples` if a selected class holds fewer than
    ///   `samples_per_class + 1` samples.
    /// * `WindowOutOfRange` if the drawn offset pushes the window past the raw batch
    ///   (only possible with `OffsetPolicy::Reference`).
    pub fn sample_episode<R: Rng>(&self, rng: &mut R) -> BatchResult {
        let classes_per_episode = self.config.classes_per_episode;
        let samples_drawn = self.config.samples_drawn_per_class();
        let num_classes = self.table.num_classes();

        if classes_per_episode > num_classes {
            return Err(EpisodicError::InsufficientClasses {
                requested: classes_per_episode,
                available: num_classes,
            });
        }

        let selected = index::sample(rng, num_classes, classes_per_episode);
        let mut columns = Vec::with_capacity(classes_per_episode);
        for class_index in selected.iter() {
            let positions = self.table.indices(class_index).unwrap_or_default();
            if positions.len() < samples_drawn {
                return Err(EpisodicError::InsufficientSamples {
                    class_index,
                    available: positions.len(),
                    required: samples_drawn,
                });
            }
            let draws = index::sample(rng, positions.len(), samples_drawn);
            columns.push(draws.iter().map(|d| positions[d]).collect::<Vec<usize>>());
        }

        let raw = interleave(&columns, samples_drawn);
        let offset = rng.gen_range(0..=self.config.max_offset());
        let mut batch = window(&raw, offset, self.config.batch_size())?;

        // The last element keeps its place.
        if let Some((_, head)) = batch.split_last_mut() {
            head.shuffle(rng);
        }

        trace!(
            "EpisodicBatchSampler: episode over classes {:?}, offset {}",
            selected.into_vec(),
            offset
        );
        Ok(batch)
    }

    /// Returns one epoch driven by the given random number generator.
    pub fn iter_with_rng<R: Rng>(&self, rng: R) -> EpisodeIter<'_, L, R> {
        EpisodeIter {
            sampler: self,
            rng,
            remaining: self.config.iterations,
        }
    }

    /// Returns one reproducible epoch seeded with `seed`.
    pub fn iter_seeded(&self, seed: u64) -> EpisodeIter<'_, L, StdRng> {
        self.iter_with_rng(StdRng::seed_from_u64(seed))
    }
}

impl<L: Debug + Send + Sync> BatchSampler for EpisodicBatchSampler<L> {
    fn iter(&self) -> Box<dyn Iterator<Item = BatchResult> + Send + '_> {
        Box::new(self.iter_with_rng(StdRng::from_entropy()))
    }

    fn len(&self) -> usize {
        self.config.iterations
    }
}

/// Iterator over the episodes of one epoch.
#[derive(Debug)]
pub struct EpisodeIter<'a, L, R> {
    sampler: &'a EpisodicBatchSampler<L>,
    rng: R,
    remaining: usize,
}

impl<'a, L, R: Rng> Iterator for EpisodeIter<'a, L, R> {
    type Item = BatchResult;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        Some(self.sampler.sample_episode(&mut self.rng))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, L, R: Rng> ExactSizeIterator for EpisodeIter<'a, L, R> {}

/// Lays `columns` out column-major: row `r` of column `i` lands at `i + r * columns.len()`.
fn interleave(columns: &[Vec<usize>], rows: usize) -> Vec<usize> {
    let stride = columns.len();
    let mut raw = vec![0; rows * stride];
    for (i, column) in columns.iter().enumerate() {
        for (row, &sample) in column.iter().take(rows).enumerate() {
            raw[i + row * stride] = sample;
        }
    }
    raw
}

fn window(raw: &[usize], offset: usize, len: usize) -> BatchResult {
    raw.get(offset..offset + len)
        .map(<[usize]>::to_vec)
        .ok_or(EpisodicError::WindowOutOfRange {
            offset,
            len,
            available: raw.len(),
        })
}

#[cfg(test)]
#[path = "episodic_batch_sampler_test.rs"]
mod tests;
