//! Trainer Binary
//!
//! Fits the ensemble on the fixed dataset, reports held-out metrics,
//! and writes the model artifact to MODEL_PATH (default iris_model.bin).

fn main() {
    iris_core::log();
    iris_forest::train::run().unwrap();
}
