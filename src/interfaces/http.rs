//! HTTP surface for the prediction form.
//!
//! # Routes
//! - `GET /` - Empty form
//! - `POST /` - Score the submitted form and render it with the result
//! - `GET /health` - JSON liveness document

use axum::{
    Json, Router,
    extract::{Form, State, rejection::FormRejection},
    response::{Html, IntoResponse},
    routing::get,
};
use serde_json::json;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use super::view::{PageContext, render_page};
use crate::application::prediction_service::{PredictionOutcome, PredictionService};

/// Application state shared across handlers; read-only after startup
pub struct AppState {
    pub service: PredictionService,
}

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(form_handler).post(predict_handler))
        .route("/health", get(health_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind `addr` and serve until Ctrl+C.
pub async fn start_server(state: Arc<AppState>, addr: SocketAddr) -> anyhow::Result<()> {
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Serving prediction form on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received. Exiting...");
}

async fn form_handler(State(state): State<Arc<AppState>>) -> Html<String> {
    render(&state, None, None)
}

async fn predict_handler(
    State(state): State<Arc<AppState>>,
    form: Result<Form<HashMap<String, String>>, FormRejection>,
) -> Html<String> {
    match form {
        Ok(Form(values)) => {
            let outcome = state.service.predict(&values);
            render(&state, Some(&values), Some(&outcome))
        }
        Err(rejection) => {
            // An unreadable body is scored like a submission with no fields
            warn!("Rejected form submission: {}", rejection);
            let outcome = state.service.predict(&HashMap::new());
            render(&state, None, Some(&outcome))
        }
    }
}

async fn health_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "model": state.service.model_name(),
    }))
}

fn render(
    state: &AppState,
    submitted: Option<&HashMap<String, String>>,
    outcome: Option<&PredictionOutcome>,
) -> Html<String> {
    Html(render_page(&PageContext {
        encoders: state.service.encoders(),
        submitted,
        outcome,
    }))
}
