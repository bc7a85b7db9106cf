//! Core type aliases, constants, and configuration for the iris classifier.
//!
//! This crate provides the foundational types and fixed parameters used
//! throughout the workspace: the species label table, training
//! hyperparameters, and environment-backed configuration accessors.

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// A single continuous measurement, in centimeters.
pub type Measurement = f64;
/// Dataset target index identifying a species.
pub type ClassIndex = usize;

// ============================================================================
// SPECIES
// ============================================================================
use std::fmt::Display;
use std::fmt::Formatter;

/// The three iris species, in dataset target order.
///
/// The discriminants are exactly the target indices the dataset ships with,
/// and [`Display`] produces exactly the label strings the API returns. All
/// index-to-label conversion in the workspace goes through this type, so the
/// mapping used at serving time cannot drift from the one used at training
/// time.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Species {
    Setosa,
    Versicolor,
    Virginica,
}

impl Species {
    /// All species in target order.
    pub const ALL: [Species; N_CLASSES] = [
        Species::Setosa,
        Species::Versicolor,
        Species::Virginica,
    ];

    /// The dataset target index for this species.
    pub fn index(&self) -> ClassIndex {
        match self {
            Species::Setosa => 0,
            Species::Versicolor => 1,
            Species::Virginica => 2,
        }
    }

    /// The lowercase label string returned to API callers.
    pub fn name(&self) -> &'static str {
        match self {
            Species::Setosa => "setosa",
            Species::Versicolor => "versicolor",
            Species::Virginica => "virginica",
        }
    }
}

impl TryFrom<ClassIndex> for Species {
    type Error = String;
    fn try_from(index: ClassIndex) -> Result<Self, Self::Error> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or_else(|| format!("class index out of range: {}", index))
    }
}

impl Display for Species {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.pad(self.name())
    }
}

// ============================================================================
// DATASET PARAMETERS
// ============================================================================
/// Number of measurements per sample.
pub const N_FEATURES: usize = 4;
/// Number of species labels.
pub const N_CLASSES: usize = 3;

// ============================================================================
// TRAINING PARAMETERS
// ============================================================================
/// RNG seed for the split shuffle and bootstrap sampling.
pub const SEED: u64 = 42;
/// Fraction of each class assigned to the training split.
pub const TRAIN_RATIO: f64 = 0.8;
/// Number of trees in the ensemble.
pub const N_TREES: usize = 100;
/// Maximum depth of each tree.
pub const MAX_DEPTH: usize = 5;

// ============================================================================
// CONFIGURATION
// ============================================================================
/// Model artifact location, from MODEL_PATH (default `iris_model.bin`).
pub fn model_path() -> String {
    std::env::var("MODEL_PATH").unwrap_or_else(|_| "iris_model.bin".to_string())
}

/// Server bind address, from BIND_ADDR (default `127.0.0.1:8000`).
pub fn bind_addr() -> String {
    std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:8000".to_string())
}

// ============================================================================
// LOGGING & SHUTDOWN
// ============================================================================
/// Initialize combined terminal + file logging.
#[cfg(feature = "server")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}

/// Register Ctrl+C handler for immediate termination.
#[cfg(feature = "server")]
pub fn kys() {
    tokio::spawn(async move {
        tokio::signal::ctrl_c().await.unwrap();
        println!();
        log::warn!("interrupt received, exiting immediately");
        std::process::exit(0);
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_index() {
        for species in Species::ALL {
            assert_eq!(species, Species::try_from(species.index()).unwrap());
        }
    }

    #[test]
    fn labels_in_target_order() {
        let labels = Species::ALL.map(|s| s.to_string());
        assert_eq!(labels, ["setosa", "versicolor", "virginica"]);
    }

    #[test]
    fn out_of_range_index_is_rejected() {
        assert!(Species::try_from(N_CLASSES).is_err());
    }
}
