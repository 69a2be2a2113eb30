use std::collections::HashMap;

// Labels `0..num_classes`, each repeated `per_class` times, grouped by class.
#[allow(dead_code)]
pub(crate) fn balanced_labels(num_classes: usize, per_class: usize) -> Vec<usize> {
    (0..num_classes)
        .flat_map(|c| std::iter::repeat(c).take(per_class))
        .collect()
}

// Number of batch entries carrying each label.
#[allow(dead_code)]
pub(crate) fn label_counts<L>(batch: &[usize], labels: &[L]) -> HashMap<L, usize>
where
    L: Clone + Eq + std::hash::Hash,
{
    let mut counts = HashMap::new();
    for &i in batch {
        *counts.entry(labels[i].clone()).or_insert(0) += 1;
    }
    counts
}
