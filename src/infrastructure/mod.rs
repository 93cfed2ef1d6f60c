pub mod artifact_store;

pub use artifact_store::{ArtifactStore, Artifacts};
