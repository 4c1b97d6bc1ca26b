use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, HeaderName, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use picsheet_client::ExportService;
use picsheet_core::ExportError;
use picsheet_core::contracts::{ErrorResponse, ExportResponse};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub const ALLOWED_HEADERS: &str = "authorization, x-client-info, apikey, content-type";

const CORRELATION_HEADER: &str = "x-request-id";

pub struct AppState {
    pub export_service: ExportService,
}

pub fn create_app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", post(handle_export))
        .route("/export-to-sheets", post(handle_export))
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Every OPTIONS request is answered here as a preflight, before routing.
fn cors_layer() -> CorsLayer {
    let headers: Vec<HeaderName> = ALLOWED_HEADERS
        .split(", ")
        .map(HeaderName::from_static)
        .collect();

    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers(headers)
}

/// Wraps [`ExportError`] so failures render as `{ "error": ... }`.
pub struct ApiError(pub ExportError);

impl From<ExportError> for ApiError {
    fn from(err: ExportError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let body = ErrorResponse {
            error: self.0.public_message(),
        };
        (status, Json(body)).into_response()
    }
}

async fn handle_export(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<ExportResponse>, ApiError> {
    let correlation_id = headers
        .get(CORRELATION_HEADER)
        .and_then(|value| value.to_str().ok());

    let result = state.export_service.export_body(&body, correlation_id).await?;
    Ok(Json(ExportResponse::from(result)))
}
