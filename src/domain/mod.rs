// Domain-specific error types
pub mod errors;

// Feature layout and categorical encoders
pub mod ml;
