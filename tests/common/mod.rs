use billcast::application::ml::RegressionModel;
use billcast::application::prediction_service::PredictionService;
use billcast::domain::ml::encoder::{EncoderSet, LabelEncoder};
use billcast::domain::ml::feature_registry::FIELD_NAMES;
use billcast::infrastructure::ArtifactStore;
use billcast::interfaces::AppState;
use smartcore::ensemble::random_forest_regressor::{
    RandomForestRegressor, RandomForestRegressorParameters,
};
use smartcore::linalg::basic::matrix::DenseMatrix;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

pub const CITIES: &[&str] = &["Ahmedabad", "Chennai", "Hyderabad", "Mumbai", "New Delhi"];
pub const COMPANIES: &[&str] = &["Adani Power", "BSES", "Tata Power"];

/// Temp copies of both artifacts, removed on drop.
pub struct ArtifactFiles {
    pub model: PathBuf,
    pub encoders: PathBuf,
}

impl Drop for ArtifactFiles {
    fn drop(&mut self) {
        fs::remove_file(&self.model).ok();
        fs::remove_file(&self.encoders).ok();
    }
}

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("billcast-it-{}-{}", uuid::Uuid::new_v4(), name))
}

/// Fits a small forest on synthetic bills: hours times tariff plus a per-appliance charge.
pub fn fit_forest() -> RegressionModel {
    let width = FIELD_NAMES.len();
    let rows: Vec<Vec<f64>> = (0..60)
        .map(|i| {
            (0..width)
                .map(|j| match FIELD_NAMES[j] {
                    "City" => (i % CITIES.len()) as f64,
                    "Company" => (i % COMPANIES.len()) as f64,
                    "Month" => (i % 12 + 1) as f64,
                    "Monthly Hours" => (100 + (i * 13) % 300) as f64,
                    "Tariff Rate" => 5.0 + (i % 6) as f64 * 0.5,
                    _ => ((i + j) % 4) as f64,
                })
                .collect()
        })
        .collect();
    let targets: Vec<f64> = rows
        .iter()
        .map(|r| r[9] * r[10] + 40.0 * r[..6].iter().sum::<f64>())
        .collect();

    let x = DenseMatrix::from_2d_vec(&rows).unwrap();
    let forest =
        RandomForestRegressor::fit(&x, &targets, RandomForestRegressorParameters::default())
            .unwrap();
    RegressionModel::RandomForest(forest)
}

pub fn encoder_set() -> EncoderSet {
    let encoder = |names: &[&str]| LabelEncoder::new(names.iter().map(|n| n.to_string()).collect());
    EncoderSet::new()
        .with_encoder("City", encoder(CITIES))
        .with_encoder("Company", encoder(COMPANIES))
}

pub fn write_artifacts() -> ArtifactFiles {
    let files = ArtifactFiles {
        model: temp_path("model.json"),
        encoders: temp_path("encoders.json"),
    };
    fs::write(&files.model, serde_json::to_vec(&fit_forest()).unwrap()).unwrap();
    fs::write(&files.encoders, serde_json::to_vec(&encoder_set()).unwrap()).unwrap();
    files
}

/// Loads state the same way the server binary does.
pub fn load_state() -> Arc<AppState> {
    let files = write_artifacts();
    let artifacts = ArtifactStore::new(&files.model, &files.encoders)
        .load()
        .expect("fixture artifacts load");
    let service = PredictionService::new(Arc::new(artifacts.predictor), artifacts.encoders);
    Arc::new(AppState { service })
}

pub fn example_form() -> Vec<(&'static str, &'static str)> {
    vec![
        ("Fan", "2"),
        ("Refrigerator", "1"),
        ("Air Conditioner", "1"),
        ("Television", "1"),
        ("Monitor", "1"),
        ("MotorPump", "0"),
        ("Month", "6"),
        ("City", "3"),
        ("Company", "1"),
        ("Monthly Hours", "200"),
        ("Tariff Rate", "7.5"),
    ]
}

/// Encodes pairs as `application/x-www-form-urlencoded`.
pub fn urlencode(pairs: &[(&str, &str)]) -> String {
    url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs)
        .finish()
}
