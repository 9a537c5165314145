//! HTTP surface: one generation endpoint plus liveness probes.
//!
//! All domain failures flow through [`ApiError`], which maps the error
//! taxonomy to status codes: client-caused problems (bad schema, empty
//! name) become 400, provider failures become 500. The body is always
//! `{"detail": <reason>}`.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;
use tracing::{error, info};

use crate::error::Error;
use crate::generator::ArtifactGenerator;
use crate::model::{AgentSpec, GeneratedArtifact};
use crate::schema::validate_schema;

pub struct AppState {
    pub generator: ArtifactGenerator,
}

pub type SharedState = Arc<AppState>;

#[derive(Debug, Serialize)]
pub struct ExecuteResponse {
    pub files: Vec<GeneratedArtifact>,
    pub status: String,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    detail: String,
}

/// Domain error carried out of a handler.
#[derive(Debug)]
pub struct ApiError(pub Error);

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        Self(err)
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self.0 {
            Error::InvalidSchema(_) | Error::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            Error::Generation { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        error!("Request failed ({}): {}", status, self.0);
        (
            status,
            Json(ErrorBody {
                detail: self.0.to_string(),
            }),
        )
            .into_response()
    }
}

pub fn router(state: SharedState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/v1/health", get(health))
        .route("/api/v1/execute", post(execute))
        .with_state(state)
}

/// Liveness probe. No dependencies, always healthy.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "healthy" })
}

/// Generate the four scaffold files for the described agent.
pub async fn execute(
    State(state): State<SharedState>,
    Json(spec): Json<AgentSpec>,
) -> Result<Json<ExecuteResponse>, ApiError> {
    info!("Received generation request for agent '{}'", spec.name);

    if spec.name.trim().is_empty() {
        return Err(Error::InvalidRequest("agent_name must not be empty".to_string()).into());
    }

    // Fail fast: no provider call is issued unless both schemas pass.
    validate_schema("input_schema", &spec.input_schema)?;
    validate_schema("output_schema", &spec.output_schema)?;

    let files = state.generator.generate_all(&spec).await?;

    let message = format!("Generated {} files for agent '{}'", files.len(), spec.name);
    Ok(Json(ExecuteResponse {
        files,
        status: "success".to_string(),
        message,
    }))
}
