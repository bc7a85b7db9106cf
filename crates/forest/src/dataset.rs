//! Iris dataset loading and stratified splitting.

use iris_core::ClassIndex;
use iris_core::Measurement;
use iris_core::N_CLASSES;
use linfa::Dataset;
use ndarray::Axis;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

/// The 150-sample labeled dataset: 4 measurements, 3 species.
pub type IrisData = Dataset<Measurement, ClassIndex, ndarray::Ix1>;

/// Load the full dataset into memory. Immutable thereafter.
pub fn load() -> IrisData {
    linfa_datasets::iris()
}

/// Split into train/validation sets, stratified by class.
///
/// Per-class index lists are shuffled with a seeded RNG and the first
/// `ratio` of each class goes to the training split, so both splits keep
/// the original class balance exactly.
pub fn split(data: &IrisData, ratio: f64, seed: u64) -> (IrisData, IrisData) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut train = Vec::new();
    let mut valid = Vec::new();
    for class in 0..N_CLASSES {
        let mut indices = data
            .targets
            .iter()
            .enumerate()
            .filter(|&(_, &target)| target == class)
            .map(|(index, _)| index)
            .collect::<Vec<_>>();
        indices.shuffle(&mut rng);
        let cut = (indices.len() as f64 * ratio).round() as usize;
        train.extend_from_slice(&indices[..cut]);
        valid.extend_from_slice(&indices[cut..]);
    }
    (subset(data, &train), subset(data, &valid))
}

/// Materialize the rows at `indices` as an owned dataset.
pub(crate) fn subset(data: &IrisData, indices: &[usize]) -> IrisData {
    Dataset::new(
        data.records.select(Axis(0), indices),
        data.targets.select(Axis(0), indices),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use iris_core::SEED;
    use iris_core::TRAIN_RATIO;

    #[test]
    fn full_dataset_shape() {
        let data = load();
        assert_eq!(data.records.nrows(), 150);
        assert_eq!(data.records.ncols(), iris_core::N_FEATURES);
        for class in 0..N_CLASSES {
            let count = data.targets.iter().filter(|&&t| t == class).count();
            assert_eq!(count, 50);
        }
    }

    #[test]
    fn split_preserves_class_balance() {
        let data = load();
        let (train, valid) = split(&data, TRAIN_RATIO, SEED);
        assert_eq!(train.records.nrows(), 120);
        assert_eq!(valid.records.nrows(), 30);
        for class in 0..N_CLASSES {
            assert_eq!(train.targets.iter().filter(|&&t| t == class).count(), 40);
            assert_eq!(valid.targets.iter().filter(|&&t| t == class).count(), 10);
        }
    }

    #[test]
    fn split_is_deterministic() {
        let data = load();
        let (a, _) = split(&data, TRAIN_RATIO, SEED);
        let (b, _) = split(&data, TRAIN_RATIO, SEED);
        assert_eq!(a.records, b.records);
        assert_eq!(a.targets, b.targets);
    }
}
