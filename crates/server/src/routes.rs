//! JSON API handlers.

use std::sync::Arc;

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use credence_core::{
    AnalysisConfig, AnalysisResult, Analyzer, CredenceError, CredibilityResult, ExtractedArticle,
    ExtractionMethod, FetchConfig, SummaryStrategy, extract_article, fetch_url, is_valid_url, score_credibility,
};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::error::ApiError;

/// Shared per-process state.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub fetch: FetchConfig,
    pub analysis: AnalysisConfig,
}

#[derive(Debug, Default, Deserialize)]
pub struct SummarizeRequest {
    pub text: Option<String>,
    pub url: Option<String>,
    pub strategy: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct UrlRequest {
    pub url: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummarizeResponse {
    #[serde(flatten)]
    pub result: AnalysisResult,
    pub original_text: String,
}

#[derive(Debug, Serialize)]
pub struct ExtractResponse {
    pub title: Option<String>,
    pub text: String,
    pub method: ExtractionMethod,
    pub success: bool,
}

pub fn router(config: &ServerConfig) -> Router {
    let state = AppState { fetch: config.fetch.clone(), analysis: AnalysisConfig::default() };
    api(state)
        .layer(TimeoutLayer::with_status_code(StatusCode::REQUEST_TIMEOUT, config.request_timeout))
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// Routes without middleware.
pub fn api(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/summarize", post(summarize))
        .route("/api/analyze", post(analyze))
        .route("/api/extract-url", post(extract_url))
        .with_state(Arc::new(state))
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok", "message": "Server is running" }))
}

async fn summarize(
    State(state): State<Arc<AppState>>, payload: Result<Json<SummarizeRequest>, JsonRejection>,
) -> Result<Json<SummarizeResponse>, ApiError> {
    let Json(request) = payload?;

    let config = match request.strategy.as_deref() {
        Some(name) => {
            let strategy: SummaryStrategy = name.parse().map_err(ApiError::BadRequest)?;
            AnalysisConfig { strategy, ..state.analysis.clone() }
        }
        None => state.analysis.clone(),
    };

    let text = match (non_empty(request.url), non_empty(request.text)) {
        (Some(url), _) => {
            tracing::info!(%url, strategy = %config.strategy, "summarizing article from URL");
            fetch_article(&url, &state.fetch).await?.analysis_text()
        }
        (None, Some(text)) => {
            tracing::info!(chars = text.len(), strategy = %config.strategy, "summarizing submitted text");
            text
        }
        (None, None) => return Err(ApiError::bad_request("No text or URL provided")),
    };

    let result = Analyzer::with_config(config).analyze(&text);
    Ok(Json(SummarizeResponse { result, original_text: text }))
}

async fn analyze(
    State(state): State<Arc<AppState>>, payload: Result<Json<SummarizeRequest>, JsonRejection>,
) -> Result<Json<CredibilityResult>, ApiError> {
    let Json(request) = payload?;

    let text = match (non_empty(request.url), request.text) {
        (Some(url), _) => {
            tracing::info!(%url, "scoring article from URL");
            fetch_article(&url, &state.fetch).await?.text
        }
        (None, Some(text)) => text,
        (None, None) => return Err(ApiError::bad_request("No text or URL provided")),
    };

    Ok(Json(score_credibility(&text)))
}

async fn extract_url(
    State(state): State<Arc<AppState>>, payload: Result<Json<UrlRequest>, JsonRejection>,
) -> Result<Json<ExtractResponse>, ApiError> {
    let Json(request) = payload?;
    let url = non_empty(request.url).ok_or_else(|| ApiError::bad_request("No URL provided"))?;

    tracing::info!(%url, "extracting article");
    let article = fetch_article(&url, &state.fetch).await?;

    Ok(Json(ExtractResponse { title: article.title, text: article.text, method: article.method, success: true }))
}

async fn fetch_article(url: &str, config: &FetchConfig) -> Result<ExtractedArticle, ApiError> {
    if !is_valid_url(url) {
        return Err(ApiError::bad_request("Invalid URL format"));
    }

    let html = fetch_url(url, config).await.map_err(extraction_failed)?;
    extract_article(&html).map_err(extraction_failed)
}

fn extraction_failed(err: CredenceError) -> ApiError {
    ApiError::bad_request(format!("Failed to extract article from URL: {}", err))
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Resolves when the process receives Ctrl-C.
pub async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, header};
    use tower::ServiceExt;

    fn app() -> Router {
        api(AppState::default())
    }

    async fn send(app: Router, method: &str, uri: &str, body: Option<&str>) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(body.map(|b| Body::from(b.to_string())).unwrap_or_else(Body::empty))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = send(app(), "GET", "/api/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "status": "ok", "message": "Server is running" }));
    }

    #[tokio::test]
    async fn test_summarize_text() {
        let payload = r#"{"text": "He said \"this is true\". Officials confirmed it. Nobody objected."}"#;
        let (status, body) = send(app(), "POST", "/api/summarize", Some(payload)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["credibilityScore"], 63);
        assert_eq!(body["originalText"], "He said \"this is true\". Officials confirmed it. Nobody objected.");
        assert!(body["summary"].as_str().unwrap().starts_with("He said"));
        assert_eq!(body["credibilityFactors"].as_array().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_summarize_with_lead_strategy() {
        let payload = r#"{"text": "One. Two. Three. Four. Five. Six.", "strategy": "lead"}"#;
        let (status, body) = send(app(), "POST", "/api/summarize", Some(payload)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["summary"], "One. Two. Three. Four. Five.");
    }

    #[tokio::test]
    async fn test_summarize_unknown_strategy() {
        let payload = r#"{"text": "Some text.", "strategy": "bart"}"#;
        let (status, body) = send(app(), "POST", "/api/summarize", Some(payload)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("Invalid strategy"));
    }

    #[tokio::test]
    async fn test_summarize_requires_input() {
        for payload in [r#"{}"#, r#"{"text": ""}"#, r#"{"text": "   ", "url": ""}"#] {
            let (status, body) = send(app(), "POST", "/api/summarize", Some(payload)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(body["error"], "No text or URL provided");
        }
    }

    #[tokio::test]
    async fn test_summarize_invalid_url() {
        let payload = r#"{"url": "not a url", "text": "ignored"}"#;
        let (status, body) = send(app(), "POST", "/api/summarize", Some(payload)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Invalid URL format");
    }

    #[tokio::test]
    async fn test_malformed_json_is_bad_request() {
        let (status, body) = send(app(), "POST", "/api/summarize", Some("{not json")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn test_analyze_text() {
        let (status, body) = send(app(), "POST", "/api/analyze", Some(r#"{"text": "shocking news today"}"#)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["score"], 35);
        assert!(body.get("summary").is_none());
        assert_eq!(body["factors"][0]["type"], "negative");
    }

    #[tokio::test]
    async fn test_analyze_empty_text_is_scored() {
        let (status, body) = send(app(), "POST", "/api/analyze", Some(r#"{"text": ""}"#)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["score"], 45);
    }

    #[tokio::test]
    async fn test_analyze_requires_input() {
        let (status, body) = send(app(), "POST", "/api/analyze", Some("{}")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "No text or URL provided");
    }

    #[tokio::test]
    async fn test_extract_url_validation() {
        let (status, body) = send(app(), "POST", "/api/extract-url", Some("{}")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "No URL provided");

        let (status, body) = send(app(), "POST", "/api/extract-url", Some(r#"{"url": "ftp://example.com"}"#)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Invalid URL format");
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let request = Request::builder().uri("/api/missing").body(Body::empty()).unwrap();
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_router_with_middleware() {
        let request = Request::builder()
            .uri("/api/health")
            .header(header::ORIGIN, "http://localhost:3000")
            .body(Body::empty())
            .unwrap();
        let response = router(&ServerConfig::default()).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
    }
}
