use crate::SentimentClassifier;
use async_trait::async_trait;
use pulse_core::{
    CoreError, ErrorExt, InferenceConfig, InferenceError, Prediction, Sentiment,
    SentimentVerdict, VerdictDetails,
};
use reqwest::{Client, StatusCode};
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, error, info};

/// Scores at or below this are too weak to call positive or negative.
pub const MIN_POLAR_CONFIDENCE: f64 = 0.4;

// Three-class scheme of twitter-roberta-base-sentiment.
pub const NEGATIVE_LABEL: &str = "LABEL_0";
pub const NEUTRAL_LABEL: &str = "LABEL_1";
pub const POSITIVE_LABEL: &str = "LABEL_2";

#[derive(Debug, Serialize)]
struct InferenceRequest<'a> {
    inputs: &'a str,
}

/// Prediction entry as it arrives, before validation.
#[derive(Debug, Clone, PartialEq)]
struct RawPrediction {
    label: Option<String>,
    score: Option<f64>,
}

impl RawPrediction {
    fn from_value(value: &Value) -> Self {
        Self {
            label: value
                .get("label")
                .and_then(Value::as_str)
                .map(str::to_string),
            score: value.get("score").and_then(Value::as_f64),
        }
    }
}

/// Client for a hosted text-classification model.
#[derive(Debug, Clone)]
pub struct HuggingFaceClassifier {
    http_client: Client,
    api_url: String,
    api_key: String,
    model: String,
    timeout: Duration,
}

impl HuggingFaceClassifier {
    /// Build the adapter. Fails with [`InferenceError::MissingApiKey`] when no key is
    /// configured so callers can run heuristic-only.
    pub fn new(config: &InferenceConfig) -> Result<Self, CoreError> {
        let model = config.model_name();
        let api_key = config
            .api_key
            .clone()
            .ok_or_else(|| InferenceError::MissingApiKey {
                model: model.clone(),
            })?;

        let http_client = Client::builder().timeout(config.timeout()).build()?;

        Ok(Self {
            http_client,
            api_url: config.api_url.clone(),
            api_key,
            model,
            timeout: config.timeout(),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    async fn request_predictions(&self, text: &str) -> Result<Value, InferenceError> {
        debug!("Requesting inference from {} for {} chars", self.model, text.len());

        let response = self
            .http_client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .timeout(self.timeout)
            .json(&InferenceRequest { inputs: text })
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    InferenceError::RequestTimeout {
                        model: self.model.clone(),
                    }
                } else {
                    InferenceError::Transport {
                        model: self.model.clone(),
                        reason: e.to_string(),
                    }
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let error = InferenceError::from_status(&self.model, status.as_u16());
            log_status_failure(status, &error);
            return Err(error);
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| InferenceError::MalformedResponse {
                details: format!("body is not JSON: {}", e),
            })
    }
}

#[async_trait]
impl SentimentClassifier for HuggingFaceClassifier {
    fn name(&self) -> &str {
        &self.model
    }

    async fn classify(&self, text: &str) -> Result<SentimentVerdict, CoreError> {
        let payload = self.request_predictions(text).await?;
        let verdict = verdict_from_payload(&payload)?;

        if let VerdictDetails::Predictions(predictions) = &verdict.details {
            if let Some(top) = predictions.first() {
                info!(
                    "Sentiment: \"{}...\" -> {} ({:.1}% {})",
                    text.chars().take(30).collect::<String>(),
                    verdict.sentiment,
                    verdict.confidence * 100.0,
                    top.label
                );
            }
        }
        Ok(verdict)
    }
}

fn log_status_failure(status: StatusCode, error: &InferenceError) {
    match status.as_u16() {
        429 => error!("Rate limit exceeded"),
        403 => error!("API quota exceeded or invalid API key"),
        503 => error!("Model is loading, please wait"),
        404 => error!("Model not found - using fallback sentiment analysis"),
        _ => {
            error.log_error();
        }
    }
}

/// Turn an inference payload into a verdict.
///
/// Accepts `[[{label, score}, ...]]` and `[{label, score}, ...]`; any other shape, an empty
/// list, or a winning entry without a label or score is an error.
pub fn verdict_from_payload(payload: &Value) -> Result<SentimentVerdict, InferenceError> {
    let entries = match payload {
        Value::Array(outer) => match outer.first() {
            Some(Value::Array(inner)) => inner,
            _ => outer,
        },
        other => {
            return Err(InferenceError::MalformedResponse {
                details: format!("expected an array of predictions, got {}", other),
            })
        }
    };

    if entries.is_empty() {
        return Err(InferenceError::EmptyPredictions);
    }

    let mut predictions: Vec<RawPrediction> = entries.iter().map(RawPrediction::from_value).collect();
    // Stable, so equal scores keep their original order.
    predictions.sort_by(|a, b| {
        let a_score = a.score.unwrap_or(0.0);
        let b_score = b.score.unwrap_or(0.0);
        b_score.total_cmp(&a_score)
    });

    let winner = &predictions[0];
    let (label, score) = match (&winner.label, winner.score) {
        (Some(label), Some(score)) if !label.is_empty() => (label.as_str(), score),
        _ => {
            return Err(InferenceError::InvalidPrediction {
                details: format!("{:?}", winner),
            })
        }
    };

    let sentiment = map_label(label, score);
    let details = predictions
        .iter()
        .map(|p| Prediction {
            label: p.label.clone().unwrap_or_default(),
            score: p.score.unwrap_or(0.0),
        })
        .collect();

    Ok(SentimentVerdict {
        sentiment,
        confidence: score,
        details: VerdictDetails::Predictions(details),
    })
}

/// Map the winning label and its score to a sentiment.
pub fn map_label(label: &str, score: f64) -> Sentiment {
    match label {
        POSITIVE_LABEL if score > MIN_POLAR_CONFIDENCE => Sentiment::Positive,
        NEGATIVE_LABEL if score > MIN_POLAR_CONFIDENCE => Sentiment::Negative,
        _ => Sentiment::Neutral,
    }
}
