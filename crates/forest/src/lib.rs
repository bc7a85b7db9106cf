//! Bagged decision-tree classification for the iris dataset.
//!
//! This crate owns everything between the raw dataset and the serialized
//! model artifact: loading and splitting the data, fitting the ensemble,
//! scoring it on the held-out split, and persisting it to disk.
//!
//! ## Core Types
//!
//! - [`Forest`] — a bagged ensemble of decision trees with majority voting
//! - [`ForestParams`] — tree count, depth, and RNG seed hyperparameters
//! - [`Evaluation`] — held-out accuracy and per-class metrics
//! - [`Artifact`] — persistence to and from the opaque model file
//!
//! ## Usage
//!
//! The [`train`] module wires these together into the one-shot pipeline the
//! trainer binary runs: load, split, fit, evaluate, save.
pub mod dataset;
pub mod train;

mod artifact;
mod forest;
mod metrics;

pub use artifact::*;
pub use forest::*;
pub use metrics::*;
