use crate::error::EpisodicError;
use log::warn;

/// Largest offset the reference windowing step ever draws.
pub const REFERENCE_MAX_OFFSET: usize = 4;

/// How the random window offset is drawn for each episode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OffsetPolicy {
    /// Draws from `0..=min(4, window_slack)`, so the window always fits.
    #[default]
    Clamped,
    /// Draws from `0..=4` regardless of the batch geometry. Episodes whose
    /// window overruns the raw batch fail with `WindowOutOfRange`.
    Reference,
}

/// Hyperparameters of an N-way K-shot episode sampler.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EpisodeConfig {
    /// Number of classes drawn per episode (N-way).
    pub classes_per_episode: usize,
    /// Number of samples kept per class (K-shot, support + query).
    pub samples_per_class: usize,
    /// Number of episodes per epoch.
    pub iterations: usize,
    pub offset_policy: OffsetPolicy,
}

impl EpisodeConfig {
    /// Creates a new configuration with the default `OffsetPolicy::Clamped`.
    pub fn new(classes_per_episode: usize, samples_per_class: usize, iterations: usize) -> Self {
        EpisodeConfig {
            classes_per_episode,
            samples_per_class,
            iterations,
            offset_policy: OffsetPolicy::default(),
        }
    }

    /// Creates a configuration whose per-class sample count covers both the
    /// support and the query split of an episode.
    pub fn from_support_query(
        classes_per_episode: usize,
        n_support: usize,
        n_query: usize,
        iterations: usize,
    ) -> Self {
        Self::new(classes_per_episode, n_support + n_query, iterations)
    }

    pub fn with_offset_policy(mut self, offset_policy: OffsetPolicy) -> Self {
        self.offset_policy = offset_policy;
        self
    }

    /// Samples drawn per class before trimming (one more than kept).
    pub fn samples_drawn_per_class(&self) -> usize {
        self.samples_per_class + 1
    }

    /// Length of the interleaved batch before windowing.
    pub fn raw_batch_size(&self) -> usize {
        self.samples_drawn_per_class() * self.classes_per_episode
    }

    /// Length of every yielded episode batch.
    pub fn batch_size(&self) -> usize {
        self.samples_per_class * self.classes_per_episode + 1
    }

    /// Room left for the window offset, `classes_per_episode - 1`.
    pub fn window_slack(&self) -> usize {
        self.raw_batch_size().saturating_sub(self.batch_size())
    }

    /// Largest offset the configured policy may draw.
    pub fn max_offset(&self) -> usize {
        match self.offset_policy {
            OffsetPolicy::Clamped => REFERENCE_MAX_OFFSET.min(self.window_slack()),
            OffsetPolicy::Reference => REFERENCE_MAX_OFFSET,
        }
    }

    /// Checks the configuration against the number of distinct classes.
    ///
    /// # Errors
    ///
    /// * `InvalidConfiguration` if `classes_per_episode` or `samples_per_class` is zero.
    /// * `InsufficientClasses` if more classes are requested than exist.
    pub fn validate(&self, num_classes: usize) -> Result<(), EpisodicError> {
        if self.classes_per_episode == 0 {
            return Err(EpisodicError::InvalidConfiguration(
                "classes_per_episode must be at least 1".to_string(),
            ));
        }
        if self.samples_per_class == 0 {
            return Err(EpisodicError::InvalidConfiguration(
                "samples_per_class must be at least 1".to_string(),
            ));
        }
        if self.classes_per_episode > num_classes {
            return Err(EpisodicError::InsufficientClasses {
                requested: self.classes_per_episode,
                available: num_classes,
            });
        }
        if self.offset_policy == OffsetPolicy::Reference && self.window_slack() < REFERENCE_MAX_OFFSET {
            warn!(
                "EpisodeConfig: reference offsets up to {} exceed the window slack of {} (classes_per_episode = {}); \
                 episodes may fail with WindowOutOfRange. Use at least {} classes per episode or OffsetPolicy::Clamped.",
                REFERENCE_MAX_OFFSET,
                self.window_slack(),
                self.classes_per_episode,
                REFERENCE_MAX_OFFSET + 1
            );
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
