//! Bagged decision-tree ensemble.

use crate::dataset;
use crate::dataset::IrisData;
use anyhow::Result;
use iris_core::ClassIndex;
use iris_core::MAX_DEPTH;
use iris_core::Measurement;
use iris_core::N_CLASSES;
use iris_core::N_FEATURES;
use iris_core::N_TREES;
use iris_core::SEED;
use iris_core::Species;
use linfa::prelude::*;
use linfa_trees::DecisionTree;
use ndarray::Array1;
use ndarray::Array2;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Deserialize;
use serde::Serialize;

/// Ensemble hyperparameters. Fixed constants in practice; the trainer
/// never exposes them as inputs.
#[derive(Debug, Clone, Copy)]
pub struct ForestParams {
    /// Number of trees in the ensemble.
    pub trees: usize,
    /// Maximum depth of each tree.
    pub depth: usize,
    /// Seed for bootstrap sampling.
    pub seed: u64,
}

impl Default for ForestParams {
    fn default() -> Self {
        Self {
            trees: N_TREES,
            depth: MAX_DEPTH,
            seed: SEED,
        }
    }
}

/// A bagged ensemble of decision trees.
///
/// Each tree is fit on a bootstrap resample of the training split; the
/// ensemble classifies by majority vote. Tree construction is deterministic
/// given its sample, so a fixed seed reproduces the whole ensemble.
#[derive(Serialize, Deserialize)]
pub struct Forest {
    trees: Vec<DecisionTree<Measurement, ClassIndex>>,
}

impl Forest {
    /// Fit the ensemble on the training split.
    pub fn fit(params: ForestParams, data: &IrisData) -> Result<Self> {
        anyhow::ensure!(params.trees > 0, "ensemble requires at least one tree");
        let mut rng = StdRng::seed_from_u64(params.seed);
        let n = data.records.nrows();
        let mut trees = Vec::with_capacity(params.trees);
        for _ in 0..params.trees {
            let indices = (0..n).map(|_| rng.gen_range(0..n)).collect::<Vec<_>>();
            let sample = dataset::subset(data, &indices);
            let tree = DecisionTree::params()
                .max_depth(Some(params.depth))
                .fit(&sample)?;
            trees.push(tree);
        }
        Ok(Self { trees })
    }

    /// Majority-vote class indices for a batch of feature vectors.
    /// Ties break toward the lowest class index.
    pub fn predict(&self, records: &Array2<Measurement>) -> Array1<ClassIndex> {
        let mut votes = Array2::<usize>::zeros((records.nrows(), N_CLASSES));
        for tree in &self.trees {
            for (row, &class) in tree.predict(records.clone()).targets.iter().enumerate() {
                votes[[row, class]] += 1;
            }
        }
        votes
            .rows()
            .into_iter()
            .map(|row| {
                let mut best = 0;
                for (class, &count) in row.iter().enumerate() {
                    if count > row[best] {
                        best = class;
                    }
                }
                best
            })
            .collect()
    }

    /// Classify a single feature vector into a species label.
    pub fn classify(&self, features: [Measurement; N_FEATURES]) -> Result<Species> {
        let records = Array2::from_shape_vec((1, N_FEATURES), features.to_vec())?;
        let class = self.predict(&records)[0];
        Species::try_from(class).map_err(anyhow::Error::msg)
    }
}
