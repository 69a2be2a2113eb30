pub mod class_table;
pub mod config;
pub mod error;

pub use class_table::ClassIndexTable;
pub use config::{EpisodeConfig, OffsetPolicy};
pub use error::EpisodicError;
