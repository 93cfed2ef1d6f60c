pub mod predictor;
pub mod smartcore_predictor;

pub use predictor::BillPredictor;
pub use smartcore_predictor::{RegressionModel, SmartCorePredictor};
