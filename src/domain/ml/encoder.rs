use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domain::errors::ArtifactError;

/// Index <-> name mapping for one categorical field, fixed at training time.
///
/// The position of a name in `classes` is the integer the model was trained on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelEncoder {
    classes: Vec<String>,
}

impl LabelEncoder {
    pub fn new(classes: Vec<String>) -> Self {
        Self { classes }
    }

    /// Category names in index order
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    pub fn name_of(&self, index: usize) -> Option<&str> {
        self.classes.get(index).map(String::as_str)
    }
}

/// Encoders keyed by field name, as written by the training pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EncoderSet {
    encoders: HashMap<String, LabelEncoder>,
}

impl EncoderSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_encoder(mut self, field: &str, encoder: LabelEncoder) -> Self {
        self.encoders.insert(field.to_string(), encoder);
        self
    }

    pub fn get(&self, field: &str) -> Option<&LabelEncoder> {
        self.encoders.get(field)
    }

    /// Ensures every listed field has a non-empty encoder.
    pub fn require(&self, fields: &[&str]) -> Result<(), ArtifactError> {
        for field in fields {
            match self.encoders.get(*field) {
                None => {
                    return Err(ArtifactError::MissingEncoder {
                        field: field.to_string(),
                    });
                }
                Some(encoder) if encoder.is_empty() => {
                    return Err(ArtifactError::EmptyEncoder {
                        field: field.to_string(),
                    });
                }
                Some(_) => {}
            }
        }
        Ok(())
    }
}
