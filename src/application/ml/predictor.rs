use crate::domain::errors::PredictionError;
use crate::domain::ml::feature_registry::FeatureVector;

/// Interface for the regression model that prices a month of usage
pub trait BillPredictor: Send + Sync {
    /// Predict the bill amount for one feature vector
    fn predict(&self, features: &FeatureVector) -> Result<f64, PredictionError>;

    /// Get model name/type
    fn name(&self) -> &str;
}
