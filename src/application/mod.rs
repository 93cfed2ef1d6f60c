// Model adapters
pub mod ml;

// Request-level prediction flow
pub mod prediction_service;
