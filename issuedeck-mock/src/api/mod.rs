//! API Module
//!
//! HTTP API layer for the mock issue source.

pub mod health;
pub mod issues;

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

/// Create the API router with all endpoints
pub fn create_router() -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Issue endpoints
        .route("/api/issues", get(issues::list_issues))
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::net::TcpListener;

    async fn serve() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, create_router()).await.unwrap();
        });
        format!("http://{}", addr)
    }

    #[tokio::test]
    async fn test_issues_endpoint_serves_dataset() {
        let base = serve().await;
        let response = reqwest::get(format!("{}/api/issues", base)).await.unwrap();

        assert_eq!(response.status().as_u16(), 200);
        let body: serde_json::Value = response.json().await.unwrap();
        let items = body.as_array().unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(items[0]["id"], 1);
        assert_eq!(items[0]["name"], "Outdated dependency");
        assert_eq!(items[1]["severity"], "high");
        assert_eq!(items[2]["updatedAt"], "2025-08-22T12:45:00Z");
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let base = serve().await;
        let response = reqwest::get(format!("{}/health", base)).await.unwrap();

        assert_eq!(response.status().as_u16(), 200);
        assert_eq!(response.text().await.unwrap(), "OK");
    }

    #[tokio::test]
    async fn test_unknown_route_is_not_found() {
        let base = serve().await;
        let response = reqwest::get(format!("{}/api/unknown", base)).await.unwrap();

        assert_eq!(response.status().as_u16(), 404);
    }
}
