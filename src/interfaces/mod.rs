pub mod http;
pub mod view;

pub use http::{AppState, create_router, start_server};
