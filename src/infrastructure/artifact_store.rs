//! Loading of the trained model and categorical encoders.
//!
//! Both artifacts are JSON files produced by the offline training pipeline.
//! They are read once at startup; any failure here is fatal for the server.

use crate::application::ml::{RegressionModel, SmartCorePredictor};
use crate::domain::errors::ArtifactError;
use crate::domain::ml::encoder::EncoderSet;
use crate::domain::ml::feature_registry::CATEGORICAL_FIELDS;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Location of the two artifact files.
#[derive(Debug, Clone)]
pub struct ArtifactStore {
    model_path: PathBuf,
    encoders_path: PathBuf,
}

/// Everything the server needs from disk, loaded and validated.
pub struct Artifacts {
    pub predictor: SmartCorePredictor,
    pub encoders: EncoderSet,
}

impl ArtifactStore {
    pub fn new(model_path: impl Into<PathBuf>, encoders_path: impl Into<PathBuf>) -> Self {
        Self {
            model_path: model_path.into(),
            encoders_path: encoders_path.into(),
        }
    }

    pub fn load(&self) -> Result<Artifacts, ArtifactError> {
        let model: RegressionModel = read_json(&self.model_path)?;
        info!(
            "Loaded {} model from {:?}",
            model.kind(),
            self.model_path
        );

        let encoders: EncoderSet = read_json(&self.encoders_path)?;
        encoders.require(CATEGORICAL_FIELDS)?;
        for field in CATEGORICAL_FIELDS {
            if let Some(encoder) = encoders.get(field) {
                info!("Encoder '{}' has {} classes", field, encoder.len());
            }
        }

        Ok(Artifacts {
            predictor: SmartCorePredictor::new(model),
            encoders,
        })
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, ArtifactError> {
    let content = fs::read(path).map_err(|source| ArtifactError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_slice(&content).map_err(|source| ArtifactError::Decode {
        path: path.to_path_buf(),
        source,
    })
}
