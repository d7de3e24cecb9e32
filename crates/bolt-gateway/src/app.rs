use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers::{
    health_handler, list_urls_handler, resolve_url_handler, shorten_url_handler,
};
use crate::state::AppState;

pub struct App {}

impl App {
    pub fn router(state: AppState) -> Router {
        Router::new()
            .route("/health", get(health_handler))
            .nest(
                "/api",
                Router::new()
                    .route("/shorturl", post(shorten_url_handler))
                    .route("/shorturl/{code}", get(resolve_url_handler))
                    .route("/urls", get(list_urls_handler))
                    .layer(CorsLayer::permissive()),
            )
            .layer(TraceLayer::new_for_http())
            .with_state(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use bolt_core::error::ResolveError;
    use bolt_core::HostResolver;
    use bolt_registry::RegistryService;
    use bolt_storage::InMemoryStore;
    use std::sync::Arc;
    use tower::ServiceExt;

    struct AlwaysResolves;

    #[async_trait]
    impl HostResolver for AlwaysResolves {
        async fn resolve(&self, _host: &str) -> Result<(), ResolveError> {
            Ok(())
        }
    }

    fn test_router() -> Router {
        let registry = RegistryService::new(InMemoryStore::new(), AlwaysResolves);
        App::router(AppState::new(Arc::new(registry)))
    }

    fn shorten_request(url: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/shorturl")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(format!("url={url}")))
            .unwrap()
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    async fn body_json(resp: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(resp.into_body(), 1024 * 1024)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn shorten_returns_wire_record() {
        let router = test_router();

        let resp = router
            .oneshot(shorten_request("https://example.com/page"))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let json = body_json(resp).await;
        assert_eq!(json["original_url"], "https://example.com/page");
        assert_eq!(json["short_url"], 1);
    }

    #[tokio::test]
    async fn shorten_repeats_return_the_same_code() {
        let router = test_router();

        let first = router
            .clone()
            .oneshot(shorten_request("https://example.com/page"))
            .await
            .unwrap();
        let second = router
            .oneshot(shorten_request("https://example.com/page"))
            .await
            .unwrap();

        assert_eq!(body_json(first).await["short_url"], 1);
        assert_eq!(body_json(second).await["short_url"], 1);
    }

    #[tokio::test]
    async fn shorten_rejects_invalid_url_with_error_body() {
        let router = test_router();

        let resp = router
            .oneshot(shorten_request("ftp://example.com"))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let json = body_json(resp).await;
        assert_eq!(json["error"], "invalid url");
    }

    #[tokio::test]
    async fn resolve_redirects_to_original() {
        let router = test_router();

        router
            .clone()
            .oneshot(shorten_request("https://example.com/page"))
            .await
            .unwrap();

        let resp = router
            .oneshot(get_request("/api/shorturl/1"))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::FOUND);
        assert_eq!(
            resp.headers().get(header::LOCATION).unwrap(),
            "https://example.com/page"
        );
    }

    #[tokio::test]
    async fn resolve_unknown_code_reports_not_found() {
        let router = test_router();

        let resp = router
            .oneshot(get_request("/api/shorturl/99"))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let json = body_json(resp).await;
        assert_eq!(json["error"], "No short URL found for the given input");
    }

    #[tokio::test]
    async fn resolve_non_numeric_code_reports_wrong_format() {
        let router = test_router();

        let resp = router
            .oneshot(get_request("/api/shorturl/abc"))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let json = body_json(resp).await;
        assert_eq!(json["error"], "Wrong format");
    }

    #[tokio::test]
    async fn list_urls_reports_count_and_records_newest_first() {
        let router = test_router();

        for url in ["https://example.com/a", "https://example.com/b"] {
            router.clone().oneshot(shorten_request(url)).await.unwrap();
        }

        let resp = router.oneshot(get_request("/api/urls")).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let json = body_json(resp).await;
        assert_eq!(json["count"], 2);
        assert_eq!(json["urls"][0]["short_url"], 2);
        assert_eq!(json["urls"][1]["short_url"], 1);
    }

    #[tokio::test]
    async fn health_reports_operational() {
        let router = test_router();

        let resp = router.oneshot(get_request("/health")).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let json = body_json(resp).await;
        assert_eq!(json["status"], "operational");
    }
}
