pub mod animation;
pub mod images;
pub mod prompts;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Structured failure envelope returned for both validation errors and
/// request-level failures. Never carries internal detail beyond the message.
#[derive(Debug)]
pub struct ApiFailure {
    status: StatusCode,
    message: String,
}

impl ApiFailure {
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiFailure {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        ApiFailure {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.into(),
        }
    }
}

#[derive(Serialize)]
struct FailureBody {
    success: bool,
    error: String,
}

impl IntoResponse for ApiFailure {
    fn into_response(self) -> Response {
        let body = FailureBody {
            success: false,
            error: self.message,
        };
        (self.status, Json(body)).into_response()
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse { status: "healthy" })
}

pub fn router(state: AppState) -> Router {
    let static_dir = state.config.static_dir.clone();

    Router::new()
        .route("/api/generate-prompt", post(prompts::generate_prompt_handler))
        .route("/api/generate-ad-copy", post(prompts::ad_copy_handler))
        .route("/api/generate-images", post(images::generate_images_handler))
        .route(
            "/api/generate-animation",
            post(animation::generate_animation_handler),
        )
        .route("/health", get(health_handler))
        // UI and logo assets
        .fallback_service(ServeDir::new(static_dir))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
