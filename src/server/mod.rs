//! HTTP surface for the lookup service.
//!
//! - `POST /api/whois` runs one lookup and answers with the result envelope,
//!   or `{ "error": ... }` with 400 (client-correctable) or 500.
//! - `GET /api/health` reports liveness with the current timestamp.

mod handlers;

use crate::core::lookup::LookupService;
use crate::domain::ports::Fetcher;
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use handlers::{health_handler, lookup_handler};

pub fn router<F: Fetcher + 'static>(service: Arc<LookupService<F>>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/whois", post(lookup_handler::<F>))
        .route("/api/health", get(health_handler))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(service)
}

/// Binds `addr` and serves until the process is stopped.
pub async fn serve<F: Fetcher + 'static>(
    addr: &str,
    service: Arc<LookupService<F>>,
) -> Result<(), anyhow::Error> {
    let app = router(service);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind WHOIS server to {}: {}", addr, e))?;

    tracing::info!("WHOIS proxy listening on http://{}", addr);
    tracing::info!("  - POST /api/whois  - Domain WHOIS lookup");
    tracing::info!("  - GET  /api/health - Health check");

    axum::serve(listener, app)
        .await
        .map_err(|e| anyhow::anyhow!("WHOIS server error: {}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::FetchError;
    use async_trait::async_trait;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use std::time::Duration;
    use tower::ServiceExt;

    struct StaticFetcher(std::result::Result<Value, FetchError>);

    #[async_trait]
    impl Fetcher for StaticFetcher {
        async fn fetch_json(&self, _url: &str) -> std::result::Result<Value, FetchError> {
            self.0.clone()
        }
    }

    fn app(response: std::result::Result<Value, FetchError>) -> Router {
        let service = LookupService::new(
            StaticFetcher(response),
            "https://provider.test/whoisserver/WhoisService",
            Duration::from_secs(10),
        );
        router(Arc::new(service))
    }

    async fn post_lookup(app: Router, body: Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri("/api/whois")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_lookup_success_envelope() {
        let app = app(Ok(json!({
            "WhoisRecord": { "registryData": { "registrarName": "Example Registrar" } }
        })));

        let (status, body) = post_lookup(
            app,
            json!({ "domain": "example.com", "type": "domain", "apiKey": "k" }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["type"], "domain");
        assert_eq!(body["domain"], "example.com");
        assert_eq!(body["data"]["registrar"], "Example Registrar");
        assert_eq!(body["data"]["hostnames"], "None");
    }

    #[tokio::test]
    async fn test_missing_parameters_is_bad_request() {
        let (status, body) = post_lookup(app(Ok(json!({}))), json!({ "domain": "example.com" })).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body["error"],
            "Missing required parameters: domain, type, and apiKey"
        );
    }

    #[tokio::test]
    async fn test_non_string_kind_is_invalid_kind() {
        let (status, body) = post_lookup(
            app(Ok(json!({}))),
            json!({ "domain": "example.com", "type": 5, "apiKey": "k" }),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Type must be either \"domain\" or \"contact\"");
    }

    #[tokio::test]
    async fn test_provider_error_is_bad_request() {
        let app = app(Ok(json!({ "ErrorMessage": { "msg": "Invalid API key" } })));

        let (status, body) = post_lookup(
            app,
            json!({ "domain": "example.com", "type": "contact", "apiKey": "nope" }),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Invalid API key");
    }

    #[tokio::test]
    async fn test_fetch_failure_is_internal_error() {
        let (status, body) = post_lookup(
            app(Err(FetchError::InvalidResponse)),
            json!({ "domain": "example.com", "type": "domain", "apiKey": "k" }),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body["error"],
            "Failed to lookup domain information: Invalid JSON response"
        );
    }

    #[tokio::test]
    async fn test_unreadable_body_gets_error_envelope() {
        let request = Request::builder()
            .method("POST")
            .uri("/api/whois")
            .header("content-type", "application/json")
            .body(Body::from("{not json"))
            .unwrap();

        let response = app(Ok(json!({}))).oneshot(request).await.unwrap();
        assert!(response.status().is_client_error());

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let request = Request::builder()
            .uri("/api/health")
            .body(Body::empty())
            .unwrap();

        let response = app(Ok(json!({}))).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "OK");
        assert!(chrono::DateTime::parse_from_rfc3339(body["timestamp"].as_str().unwrap()).is_ok());
    }
}
