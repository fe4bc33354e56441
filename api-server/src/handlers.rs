//! Endpoint handlers.

use crate::{ApiError, AppState};
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use chrono::Utc;
use pulse_core::{AnalysisResult, HealthStatus, SentimentTestResult};
use serde::Deserialize;
use tracing::{debug, info};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AnalyzeRequest {
    pub keyword: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct TestSentimentRequest {
    pub text: Option<String>,
}

/// POST /api/analyze
pub async fn analyze(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<AnalysisResult>, ApiError> {
    let request = body_or_default(payload);
    let keyword = request.keyword.unwrap_or_default();

    let result = state
        .service
        .analyze_keyword(&keyword)
        .await
        .map_err(ApiError::from_analysis)?;

    info!(
        "Returning {} analyzed posts for \"{}\"",
        result.total_posts, result.keyword
    );
    Ok(Json(result))
}

/// POST /api/test-sentiment
pub async fn test_sentiment(
    State(state): State<AppState>,
    payload: Result<Json<TestSentimentRequest>, JsonRejection>,
) -> Result<Json<SentimentTestResult>, ApiError> {
    let request = body_or_default(payload);
    let text = request.text.unwrap_or_default();

    let result = state
        .service
        .classify_text(&text)
        .await
        .map_err(ApiError::from_classification)?;
    Ok(Json(result))
}

/// GET /api/health
pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "OK".to_string(),
        message: "Reddit Sentiment Analysis API is running".to_string(),
        timestamp: Utc::now(),
    })
}

/// A missing or unparseable body is treated as a body without the required field.
fn body_or_default<T: Default>(payload: Result<Json<T>, JsonRejection>) -> T {
    match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            debug!("Ignoring unreadable request body: {}", rejection);
            T::default()
        }
    }
}
