use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Id prefix carried by posts synthesized when Reddit is unavailable.
pub const SYNTHETIC_ID_PREFIX: &str = "fallback_";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub title: String,
    pub text: String,
    /// Title and body joined, the text that gets classified.
    pub content: String,
    pub score: i64,
    pub author: String,
    pub subreddit: String,
    /// Unix seconds.
    pub created: i64,
    pub url: String,
    pub num_comments: u64,
}

impl Post {
    /// Title followed by ". " and the body, or the bare title when there is no body.
    pub fn combine_content(title: &str, text: &str) -> String {
        if text.is_empty() {
            title.to_string()
        } else {
            format!("{}. {}", title, text)
        }
    }

    pub fn is_synthetic(&self) -> bool {
        self.id.starts_with(SYNTHETIC_ID_PREFIX)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Sentiment::Positive => "POSITIVE",
            Sentiment::Negative => "NEGATIVE",
            Sentiment::Neutral => "NEUTRAL",
        };
        f.write_str(label)
    }
}

/// A single `{label, score}` entry returned by the inference service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub label: String,
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeuristicDetails {
    pub method: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub positive_score: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub negative_score: Option<usize>,
}

/// Auxiliary information attached to a verdict by whichever classifier produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VerdictDetails {
    /// Full prediction list from the inference service, highest score first.
    /// Empty when the text was too short to classify.
    Predictions(Vec<Prediction>),
    Heuristic(HeuristicDetails),
}

impl VerdictDetails {
    pub fn empty() -> Self {
        VerdictDetails::Predictions(Vec::new())
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, VerdictDetails::Predictions(predictions) if predictions.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentVerdict {
    pub sentiment: Sentiment,
    pub confidence: f64,
    pub details: VerdictDetails,
}

impl SentimentVerdict {
    /// Terminal verdict for text too short to classify.
    pub fn unclassifiable() -> Self {
        Self {
            sentiment: Sentiment::Neutral,
            confidence: 0.0,
            details: VerdictDetails::empty(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzedPost {
    #[serde(flatten)]
    pub post: Post,
    pub sentiment: Sentiment,
    pub confidence: f64,
    pub analyzed: bool,
}

impl AnalyzedPost {
    pub fn new(post: Post, verdict: &SentimentVerdict) -> Self {
        Self {
            post,
            sentiment: verdict.sentiment,
            confidence: verdict.confidence,
            analyzed: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SentimentDistribution {
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
    pub positive_percentage: u32,
    pub negative_percentage: u32,
    pub neutral_percentage: u32,
}

impl SentimentDistribution {
    pub fn total(&self) -> usize {
        self.positive + self.negative + self.neutral
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub keyword: String,
    pub total_posts: usize,
    pub sentiment_distribution: SentimentDistribution,
    pub insight: String,
    pub posts: Vec<AnalyzedPost>,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentTestResult {
    pub text: String,
    pub result: SentimentVerdict,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}
