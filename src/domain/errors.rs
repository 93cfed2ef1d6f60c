use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while turning a submitted form into a feature vector
#[derive(Debug, Error, PartialEq)]
pub enum InputError {
    #[error("missing required field '{field}'")]
    MissingField { field: String },

    #[error("field '{field}' must be a number, got '{value}'")]
    NotNumeric { field: String, value: String },

    #[error("unknown {field} index {index} (expected 0..{known})")]
    UnknownCategory {
        field: String,
        index: String,
        known: usize,
    },
}

impl InputError {
    /// Short kind label, free of submitted values
    pub fn kind(&self) -> &'static str {
        match self {
            InputError::MissingField { .. } => "missing_field",
            InputError::NotNumeric { .. } => "not_numeric",
            InputError::UnknownCategory { .. } => "unknown_category",
        }
    }

    pub fn field(&self) -> &str {
        match self {
            InputError::MissingField { field }
            | InputError::NotNumeric { field, .. }
            | InputError::UnknownCategory { field, .. } => field,
        }
    }
}

/// Errors raised while producing a prediction for a single request
#[derive(Debug, Error, PartialEq)]
pub enum PredictionError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error("model scoring failed: {0}")]
    Model(String),

    #[error("model returned a non-finite value ({0})")]
    NonFinite(f64),
}

impl PredictionError {
    /// Short kind label, free of submitted values
    pub fn kind(&self) -> &'static str {
        match self {
            PredictionError::Input(e) => e.kind(),
            PredictionError::Model(_) => "model",
            PredictionError::NonFinite(_) => "non_finite",
        }
    }
}

/// Errors raised while loading the serialized model or encoders at startup
#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("failed to read artifact {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode artifact {path:?}")]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("encoder set has no encoder for '{field}'")]
    MissingEncoder { field: String },

    #[error("encoder for '{field}' has no classes")]
    EmptyEncoder { field: String },
}
