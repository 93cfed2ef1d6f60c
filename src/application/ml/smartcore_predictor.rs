use super::predictor::BillPredictor;
use crate::domain::errors::PredictionError;
use crate::domain::ml::feature_registry::FeatureVector;
use serde::{Deserialize, Serialize};
use smartcore::ensemble::random_forest_regressor::RandomForestRegressor;
use smartcore::linalg::basic::matrix::DenseMatrix;
use smartcore::linear::linear_regression::LinearRegression;

pub type ForestModel = RandomForestRegressor<f64, f64, DenseMatrix<f64>, Vec<f64>>;
pub type LinearModel = LinearRegression<f64, f64, DenseMatrix<f64>, Vec<f64>>;

/// Serialized model artifact.
///
/// On disk: `{"kind": "random_forest", "model": {...}}` where `model` is the
/// smartcore serde representation.
#[derive(Serialize, Deserialize)]
#[serde(tag = "kind", content = "model", rename_all = "snake_case")]
pub enum RegressionModel {
    RandomForest(ForestModel),
    Linear(LinearModel),
}

impl RegressionModel {
    pub fn kind(&self) -> &'static str {
        match self {
            RegressionModel::RandomForest(_) => "random_forest",
            RegressionModel::Linear(_) => "linear",
        }
    }
}

pub struct SmartCorePredictor {
    model: RegressionModel,
}

impl SmartCorePredictor {
    pub fn new(model: RegressionModel) -> Self {
        Self { model }
    }
}

impl BillPredictor for SmartCorePredictor {
    fn predict(&self, features: &FeatureVector) -> Result<f64, PredictionError> {
        let input_matrix = DenseMatrix::from_2d_vec(&vec![features.as_slice().to_vec()])
            .map_err(|e| PredictionError::Model(format!("Matrix creation failed: {}", e)))?;

        let predictions = match &self.model {
            RegressionModel::RandomForest(model) => model.predict(&input_matrix),
            RegressionModel::Linear(model) => model.predict(&input_matrix),
        }
        .map_err(|e| PredictionError::Model(e.to_string()))?;

        predictions
            .first()
            .copied()
            .ok_or_else(|| PredictionError::Model("No prediction returned".to_string()))
    }

    fn name(&self) -> &str {
        match self.model {
            RegressionModel::RandomForest(_) => "SmartCore Random Forest",
            RegressionModel::Linear(_) => "SmartCore Linear Regression",
        }
    }
}
