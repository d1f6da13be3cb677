//! Core type definitions: sparse features, samples, and packed problems

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Sparse feature vector: an ordered mapping from feature index to value.
///
/// Indices are unique and iterate in ascending order, which is what
/// solvers expect for positional comparisons and precomputed kernels.
/// Zero values are never stored: inserting 0.0 is a no-op, and inserting
/// an index that is already present overwrites the old value.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SparseVector {
    entries: BTreeMap<u32, f64>,
}

impl SparseVector {
    /// Create an empty sparse vector
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a vector from (index, value) pairs.
    ///
    /// Later pairs overwrite earlier ones on duplicate indices; zero
    /// values are dropped.
    pub fn from_pairs<I: IntoIterator<Item = (u32, f64)>>(pairs: I) -> Self {
        let mut v = Self::new();
        for (index, value) in pairs {
            v.insert(index, value);
        }
        v
    }

    /// Build a vector from a dense slice, skipping zero entries.
    pub fn from_dense(values: &[f64]) -> Self {
        Self::from_pairs(
            values
                .iter()
                .enumerate()
                .map(|(i, &value)| (i as u32, value)),
        )
    }

    /// Insert a feature value. Inserting 0.0 is a no-op; inserting an
    /// existing index overwrites.
    pub fn insert(&mut self, index: u32, value: f64) {
        if value != 0.0 {
            self.entries.insert(index, value);
        }
    }

    /// Get the value at a specific index (0 if not present)
    pub fn get(&self, index: u32) -> f64 {
        self.entries.get(&index).copied().unwrap_or(0.0)
    }

    /// Number of non-zero elements
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    /// Check if the vector has no non-zero entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in ascending index order
    pub fn iter(&self) -> impl Iterator<Item = (u32, f64)> + '_ {
        self.entries.iter().map(|(&i, &v)| (i, v))
    }
}

/// One labeled example: sparse features plus a real target.
///
/// For classification the target is a class label encoded as a real
/// number; for regression it is the regression target; for one-class
/// training it is carried along but ignored by the solver.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// Feature vector (sparse representation)
    pub features: SparseVector,
    /// Target value
    pub target: f64,
}

impl Sample {
    /// Create a new sample
    pub fn new(features: SparseVector, target: f64) -> Self {
        Self { features, target }
    }
}

/// A packed collection of samples ready for the solver.
///
/// Feature vectors and targets are parallel arrays of equal length,
/// index-aligned with the sample collection they were packed from. A
/// `Problem` is built once per train/cross-validate call and does not
/// outlive it.
#[derive(Clone, Debug)]
pub struct Problem {
    features: Vec<SparseVector>,
    targets: Vec<f64>,
}

impl Problem {
    /// Pack a sample slice, assigning slot `i` to the i-th sample.
    pub fn pack(samples: &[Sample]) -> Self {
        let mut features = Vec::with_capacity(samples.len());
        let mut targets = Vec::with_capacity(samples.len());
        for sample in samples {
            features.push(sample.features.clone());
            targets.push(sample.target);
        }
        Self { features, targets }
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    /// Check if the problem holds no samples
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Feature vectors, index-aligned with `targets()`
    pub fn features(&self) -> &[SparseVector] {
        &self.features
    }

    /// Target values, index-aligned with `features()`
    pub fn targets(&self) -> &[f64] {
        &self.targets
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_keeps_ascending_order() {
        let mut v = SparseVector::new();
        v.insert(4, 3.0);
        v.insert(0, 1.0);
        v.insert(2, 2.0);

        let entries: Vec<_> = v.iter().collect();
        assert_eq!(entries, vec![(0, 1.0), (2, 2.0), (4, 3.0)]);
    }

    #[test]
    fn test_insert_zero_is_noop() {
        let mut v = SparseVector::new();
        v.insert(1, 0.0);
        assert!(v.is_empty());
        assert_eq!(v.get(1), 0.0);

        v.insert(1, 2.5);
        assert_eq!(v.nnz(), 1);
    }

    #[test]
    fn test_insert_duplicate_overwrites() {
        let mut v = SparseVector::new();
        v.insert(3, 1.0);
        v.insert(3, -2.0);
        assert_eq!(v.nnz(), 1);
        assert_eq!(v.get(3), -2.0);
    }

    #[test]
    fn test_get_absent_index() {
        let v = SparseVector::from_pairs([(1, 1.0), (5, 2.0)]);
        assert_eq!(v.get(0), 0.0);
        assert_eq!(v.get(1), 1.0);
        assert_eq!(v.get(4), 0.0);
        assert_eq!(v.get(5), 2.0);
    }

    #[test]
    fn test_from_dense_skips_zeros() {
        let v = SparseVector::from_dense(&[0.0, 1.5, 0.0, -2.0]);
        assert_eq!(v.nnz(), 2);
        assert_eq!(v.get(1), 1.5);
        assert_eq!(v.get(3), -2.0);
    }

    #[test]
    fn test_pack_preserves_order_and_alignment() {
        let samples = vec![
            Sample::new(SparseVector::from_pairs([(0, 1.0)]), 1.0),
            Sample::new(SparseVector::from_pairs([(1, -1.0)]), -1.0),
            Sample::new(SparseVector::from_pairs([(0, 0.5), (1, 0.5)]), 1.0),
        ];

        let problem = Problem::pack(&samples);
        assert_eq!(problem.len(), 3);
        assert_eq!(problem.targets(), &[1.0, -1.0, 1.0]);
        for (i, sample) in samples.iter().enumerate() {
            assert_eq!(problem.features()[i], sample.features);
        }
    }

    #[test]
    fn test_pack_empty() {
        let problem = Problem::pack(&[]);
        assert!(problem.is_empty());
        assert_eq!(problem.len(), 0);
    }
}
