use thiserror::Error;

/// Custom error type for episodic sampling.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum EpisodicError {
    #[error("Insufficient classes: episode requests {requested} classes but only {available} are available")]
    InsufficientClasses { requested: usize, available: usize },

    #[error("Insufficient samples for class {class_index}: {available} stored, {required} required")]
    InsufficientSamples {
        class_index: usize,
        available: usize,
        required: usize,
    },

    #[error("Window out of range: offset {offset} + length {len} exceeds raw batch of {available}")]
    WindowOutOfRange {
        offset: usize,
        len: usize,
        available: usize,
    },

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}
