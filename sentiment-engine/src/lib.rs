pub mod heuristic;
pub mod normalize;
pub mod pipeline;
pub mod remote;

use async_trait::async_trait;
use pulse_core::{CoreError, SentimentVerdict};

pub use heuristic::HeuristicClassifier;
pub use normalize::{is_too_short, normalize_text};
pub use pipeline::SentimentPipeline;
pub use remote::HuggingFaceClassifier;

/// Anything that can turn normalized text into a verdict.
#[async_trait]
pub trait SentimentClassifier: Send + Sync {
    fn name(&self) -> &str;

    async fn classify(&self, text: &str) -> Result<SentimentVerdict, CoreError>;
}
