use log::debug;
use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;

/// Groups dataset positions by class.
///
/// Distinct labels form the class registry and get a dense index in sorted
/// label order. For every class the table keeps the positions carrying that
/// label, in the order they appear in the label sequence. Each position
/// `0..num_samples` belongs to exactly one class list.
#[derive(Debug, Clone)]
pub struct ClassIndexTable<L> {
    classes: Vec<L>,
    lookup: HashMap<L, usize>,
    indices: Vec<Vec<usize>>,
    num_samples: usize,
}

impl<L: Ord + Hash + Clone> ClassIndexTable<L> {
    /// Builds the table with a single pass over `labels`.
    pub fn build(labels: &[L]) -> Self {
        let mut counts: BTreeMap<&L, usize> = BTreeMap::new();
        for label in labels {
            *counts.entry(label).or_insert(0) += 1;
        }

        let mut classes = Vec::with_capacity(counts.len());
        let mut lookup = HashMap::with_capacity(counts.len());
        let mut indices = Vec::with_capacity(counts.len());
        for (class_index, (label, count)) in counts.into_iter().enumerate() {
            classes.push(label.clone());
            lookup.insert(label.clone(), class_index);
            indices.push(Vec::with_capacity(count));
        }

        for (position, label) in labels.iter().enumerate() {
            // Every label was registered above.
            if let Some(&class_index) = lookup.get(label) {
                indices[class_index].push(position);
            }
        }

        debug!(
            "ClassIndexTable: indexed {} samples into {} classes",
            labels.len(),
            classes.len()
        );

        ClassIndexTable {
            classes,
            lookup,
            indices,
            num_samples: labels.len(),
        }
    }

    /// Returns the class index of `label`, if it occurs in the dataset.
    pub fn class_of(&self, label: &L) -> Option<usize> {
        self.lookup.get(label).copied()
    }
}

impl<L> ClassIndexTable<L> {
    /// Number of distinct classes.
    pub fn num_classes(&self) -> usize {
        self.classes.len()
    }

    /// Number of labels the table was built from.
    pub fn num_samples(&self) -> usize {
        self.num_samples
    }

    /// Registry labels, indexed by class index.
    pub fn classes(&self) -> &[L] {
        &self.classes
    }

    /// Dataset positions of class `class_index`, in encounter order.
    pub fn indices(&self, class_index: usize) -> Option<&[usize]> {
        self.indices.get(class_index).map(Vec::as_slice)
    }

    /// Occurrence count of class `class_index` (0 for an unknown class).
    pub fn count(&self, class_index: usize) -> usize {
        self.indices.get(class_index).map_or(0, Vec::len)
    }

    pub fn counts(&self) -> Vec<usize> {
        self.indices.iter().map(Vec::len).collect()
    }

    /// Smallest class count, `None` for an empty table.
    pub fn min_count(&self) -> Option<usize> {
        self.indices.iter().map(Vec::len).min()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

#[cfg(test)]
#[path = "class_table_test.rs"]
mod tests;
