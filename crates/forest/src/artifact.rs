//! Artifact persistence for fitted models.

use anyhow::Result;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::BufReader;
use std::io::BufWriter;
use std::path::Path;
use std::path::PathBuf;

/// for types that can be written to and loaded from disk as a single
/// opaque serialized file. compatibility holds only between producer and
/// consumer builds that share serialization library versions.
pub trait Artifact: Serialize + DeserializeOwned {
    /// resolved artifact location from configuration
    fn path() -> PathBuf {
        PathBuf::from(iris_core::model_path())
    }
    /// check if the artifact exists on disk
    fn done() -> bool {
        std::fs::metadata(Self::path()).is_ok()
    }
    /// write to disk
    fn save(&self, path: &Path) -> Result<()> {
        let file = BufWriter::new(File::create(path)?);
        bincode::serialize_into(file, self)?;
        Ok(())
    }
    /// read from disk
    fn load(path: &Path) -> Result<Self> {
        let file = BufReader::new(File::open(path)?);
        Ok(bincode::deserialize_from(file)?)
    }
}

impl Artifact for crate::Forest {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Forest;
    use crate::ForestParams;
    use crate::dataset;

    #[test]
    fn saved_and_loaded_models_predict_identically() {
        let data = dataset::load();
        let params = ForestParams {
            trees: 8,
            ..ForestParams::default()
        };
        let forest = Forest::fit(params, &data).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.bin");
        forest.save(&path).unwrap();
        let loaded = Forest::load(&path).unwrap();
        assert_eq!(forest.predict(&data.records), loaded.predict(&data.records));
    }

    #[test]
    fn corrupt_artifact_fails_to_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.bin");
        std::fs::write(&path, b"not a model").unwrap();
        assert!(Forest::load(&path).is_err());
    }

    #[test]
    fn missing_artifact_fails_to_load() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Forest::load(&dir.path().join("absent.bin")).is_err());
    }
}
