use crate::core::lookup::LookupService;
use crate::domain::model::{ErrorEnvelope, HealthStatus, LookupRequest};
use crate::domain::ports::Fetcher;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;

pub async fn lookup_handler<F: Fetcher + 'static>(
    State(service): State<Arc<LookupService<F>>>,
    payload: Result<Json<LookupRequest>, JsonRejection>,
) -> Response {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            tracing::warn!("❌ Unreadable lookup body: {}", rejection.body_text());
            let envelope = ErrorEnvelope {
                message: rejection.body_text(),
            };
            return (rejection.status(), Json(envelope)).into_response();
        }
    };

    match service.lookup(request).await {
        Ok(envelope) => (StatusCode::OK, Json(envelope)).into_response(),
        Err(e) => {
            let status = StatusCode::from_u16(e.status_code())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            (status, Json(ErrorEnvelope::from(&e))).into_response()
        }
    }
}

pub async fn health_handler() -> Json<HealthStatus> {
    Json(HealthStatus::now())
}
