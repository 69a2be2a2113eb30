//! Example of drawing few-shot episodes with EpisodicBatchSampler
//!
//! Shows how a training loop pulls index batches and splits them per class.

use episodic_data::{BatchSampler, EpisodeConfig, EpisodicBatchSampler, OffsetPolicy};
use std::collections::BTreeMap;

fn main() {
    // Synthetic labels: 6 classes with 8 samples each, shuffled across the dataset
    let class_names = ["bull", "bear", "range", "breakout", "squeeze", "reversal"];
    let labels: Vec<&str> = (0..48).map(|i| class_names[(i * 5) % class_names.len()]).collect();

    // 5-way episodes, 1 support + 2 query samples per class, 4 episodes per epoch
    let config = EpisodeConfig::from_support_query(5, 1, 2, 4);
    let sampler = EpisodicBatchSampler::from_config(labels.clone(), config).expect("Valid configuration");

    println!("\n--- {} episodes of {} indices ---", sampler.len(), sampler.batch_size());
    for (i, batch) in sampler.iter().enumerate() {
        let batch = batch.expect("No error expected");
        let mut per_class: BTreeMap<&str, Vec<usize>> = BTreeMap::new();
        for &idx in &batch {
            per_class.entry(labels[idx]).or_default().push(idx);
        }
        println!("Episode {i} : {:?}", batch);
        for (class, indices) in &per_class {
            println!("  {class:>9} : {:?}", indices);
        }
    }

    // Reproducible epoch with the reference offset range
    let reference = EpisodicBatchSampler::from_config(
        labels,
        EpisodeConfig::new(5, 3, 2).with_offset_policy(OffsetPolicy::Reference),
    )
    .expect("Valid configuration");
    println!("\n--- Seeded epoch, reference offsets ---");
    for (i, batch) in reference.iter_seeded(7).enumerate() {
        match batch {
            Ok(batch) => println!("Episode {i} : {:?}", batch),
            Err(e) => println!("Episode {i} failed : {e}"),
        }
    }
}
