//! Normalize, classify remotely, and substitute the keyword heuristic on any failure.

use crate::heuristic::HeuristicClassifier;
use crate::normalize::{is_too_short, normalize_text};
use crate::remote::HuggingFaceClassifier;
use crate::SentimentClassifier;
use pulse_core::{
    CoreError, ErrorExt, ErrorRecovery, InferenceConfig, InferenceError, RecoveryResult,
    SentimentVerdict,
};
use std::sync::Arc;
use tracing::{debug, warn};

#[derive(Clone)]
pub struct SentimentPipeline {
    primary: Option<Arc<dyn SentimentClassifier>>,
    fallback: HeuristicClassifier,
}

impl SentimentPipeline {
    pub fn new(primary: Arc<dyn SentimentClassifier>) -> Self {
        Self {
            primary: Some(primary),
            fallback: HeuristicClassifier::new(),
        }
    }

    /// Pipeline that never leaves the process.
    pub fn heuristic_only() -> Self {
        Self {
            primary: None,
            fallback: HeuristicClassifier::new(),
        }
    }

    /// Remote model when an API key is configured, heuristic-only otherwise.
    pub fn from_config(config: &InferenceConfig) -> Result<Self, CoreError> {
        match HuggingFaceClassifier::new(config) {
            Ok(classifier) => Ok(Self::new(Arc::new(classifier))),
            Err(CoreError::Inference(InferenceError::MissingApiKey { model })) => {
                warn!("No API key for {}, using keyword analysis only", model);
                Ok(Self::heuristic_only())
            }
            Err(e) => Err(e),
        }
    }

    pub fn is_remote_enabled(&self) -> bool {
        self.primary.is_some()
    }

    /// Classify raw text. Never fails: text too short to classify yields a zero-confidence
    /// neutral verdict, and any remote failure is replaced wholesale by the heuristic verdict
    /// on the same cleaned text.
    pub async fn analyze(&self, text: &str) -> SentimentVerdict {
        let cleaned = normalize_text(text);
        if is_too_short(&cleaned) {
            debug!("Text too short to classify ({} chars)", cleaned.len());
            return SentimentVerdict::unclassifiable();
        }

        let primary = match &self.primary {
            Some(primary) => primary,
            None => return self.fallback.score(&cleaned),
        };

        let result = primary.classify(&cleaned).await;
        match ErrorRecovery::recover_with(result, |_| self.fallback.score(&cleaned)) {
            RecoveryResult::Recovered(verdict) | RecoveryResult::Degraded(verdict) => verdict,
            RecoveryResult::Rejected(error) | RecoveryResult::Failed(error) => {
                error.log_error();
                self.fallback.score(&cleaned)
            }
        }
    }
}

impl std::fmt::Debug for SentimentPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SentimentPipeline")
            .field("primary", &self.primary.as_ref().map(|p| p.name().to_string()))
            .finish()
    }
}
