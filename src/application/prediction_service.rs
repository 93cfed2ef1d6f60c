//! Turns a submitted form into a rounded bill prediction.
//!
//! Holds the loaded model and encoders for the lifetime of the process. Both
//! are read-only after startup, so the service is shared across requests
//! without locking.

use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

use crate::application::ml::BillPredictor;
use crate::domain::errors::PredictionError;
use crate::domain::ml::encoder::EncoderSet;
use crate::domain::ml::feature_registry;

/// Result of one prediction request: the bill rounded to cents, or why it failed.
pub type PredictionOutcome = Result<f64, PredictionError>;

pub struct PredictionService {
    predictor: Arc<dyn BillPredictor>,
    encoders: EncoderSet,
}

impl PredictionService {
    pub fn new(predictor: Arc<dyn BillPredictor>, encoders: EncoderSet) -> Self {
        Self {
            predictor,
            encoders,
        }
    }

    pub fn predict(&self, form: &HashMap<String, String>) -> PredictionOutcome {
        let outcome = self.score(form);
        match &outcome {
            Ok(value) => debug!("Prediction succeeded: {:.2}", value),
            Err(PredictionError::Input(e)) => {
                debug!(kind = e.kind(), field = e.field(), "Prediction failed")
            }
            Err(e) => debug!(kind = e.kind(), "Prediction failed"),
        }
        outcome
    }

    fn score(&self, form: &HashMap<String, String>) -> PredictionOutcome {
        let features = feature_registry::assemble(form, &self.encoders)?;
        let raw = self.predictor.predict(&features)?;
        let rounded = round_to_cents(raw);
        if !rounded.is_finite() {
            return Err(PredictionError::NonFinite(raw));
        }
        Ok(rounded)
    }

    pub fn encoders(&self) -> &EncoderSet {
        &self.encoders
    }

    pub fn model_name(&self) -> &str {
        self.predictor.name()
    }
}

/// Beyond this magnitude an `f64` has no fractional digits left to round.
const WHOLE_NUMBER_LIMIT: f64 = 1e15;

/// Rounds half away from zero to two decimals; never returns `-0.0`.
pub fn round_to_cents(value: f64) -> f64 {
    if !value.is_finite() || value.abs() >= WHOLE_NUMBER_LIMIT {
        return value;
    }
    (value * 100.0).round() / 100.0 + 0.0
}
