//! Held-out evaluation metrics.

use iris_core::ClassIndex;
use iris_core::Species;
use ndarray::Array1;
use std::fmt;

/// Accuracy and per-class metrics for one evaluation pass.
#[derive(Debug, Clone)]
pub struct Evaluation {
    /// Fraction of held-out samples classified correctly.
    pub accuracy: f64,
    /// One report per species, in target order.
    pub classes: Vec<ClassReport>,
}

/// Precision, recall, and F1 for a single species.
#[derive(Debug, Clone, Copy)]
pub struct ClassReport {
    pub species: Species,
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
    /// Number of held-out samples with this true label.
    pub support: usize,
}

impl Evaluation {
    /// Score predictions against true labels.
    pub fn compute(truth: &Array1<ClassIndex>, pred: &Array1<ClassIndex>) -> Self {
        assert_eq!(truth.len(), pred.len());
        let correct = truth
            .iter()
            .zip(pred.iter())
            .filter(|(t, p)| t == p)
            .count();
        let accuracy = correct as f64 / truth.len().max(1) as f64;
        let classes = Species::ALL
            .iter()
            .map(|&species| {
                let class = species.index();
                let tp = count(truth, pred, |t, p| t == class && p == class);
                let fp = count(truth, pred, |t, p| t != class && p == class);
                let fal = count(truth, pred, |t, p| t == class && p != class);
                let precision = ratio(tp, tp + fp);
                let recall = ratio(tp, tp + fal);
                let f1 = if precision + recall > 0.0 {
                    2.0 * precision * recall / (precision + recall)
                } else {
                    0.0
                };
                ClassReport {
                    species,
                    precision,
                    recall,
                    f1,
                    support: tp + fal,
                }
            })
            .collect();
        Self { accuracy, classes }
    }
}

fn count<F>(truth: &Array1<ClassIndex>, pred: &Array1<ClassIndex>, which: F) -> usize
where
    F: Fn(ClassIndex, ClassIndex) -> bool,
{
    truth
        .iter()
        .zip(pred.iter())
        .filter(|&(&t, &p)| which(t, p))
        .count()
}

fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:>12}  {:>9}  {:>9}  {:>9}  {:>7}",
            "", "precision", "recall", "f1-score", "support"
        )?;
        for report in &self.classes {
            writeln!(
                f,
                "{:>12}  {:>9.4}  {:>9.4}  {:>9.4}  {:>7}",
                report.species, report.precision, report.recall, report.f1, report.support
            )?;
        }
        write!(f, "{:>12}  {:>31.4}", "accuracy", self.accuracy)
    }
}
