//! Artifact location configuration parsing from environment variables.

use std::path::PathBuf;

/// Paths of the serialized model and encoders
#[derive(Debug, Clone, PartialEq)]
pub struct ArtifactEnvConfig {
    pub model_path: PathBuf,
    pub encoders_path: PathBuf,
}

impl Default for ArtifactEnvConfig {
    fn default() -> Self {
        Self {
            model_path: PathBuf::from("electricity_model.json"),
            encoders_path: PathBuf::from("encoders.json"),
        }
    }
}

impl ArtifactEnvConfig {
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            model_path: lookup("MODEL_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.model_path),
            encoders_path: lookup("ENCODERS_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.encoders_path),
        }
    }
}
