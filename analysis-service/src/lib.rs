pub mod distribution;
pub mod insight;

use chrono::Utc;
use futures::stream::{self, StreamExt};
use pulse_core::{
    AnalysisResult, AnalyzedPost, AppConfig, CoreError, SentimentTestResult,
};
use reddit_client::RedditClient;
use sentiment_engine::SentimentPipeline;
use tracing::{debug, info};

pub use distribution::tally;
pub use insight::generate_insight;

/// Fetches posts for a keyword, classifies each one, and summarizes the result.
#[derive(Debug, Clone)]
pub struct AnalysisService {
    source: RedditClient,
    pipeline: SentimentPipeline,
    post_limit: usize,
    max_concurrency: usize,
}

impl AnalysisService {
    pub fn new(
        source: RedditClient,
        pipeline: SentimentPipeline,
        post_limit: usize,
        max_concurrency: usize,
    ) -> Self {
        Self {
            source,
            pipeline,
            post_limit,
            max_concurrency: max_concurrency.max(1),
        }
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, CoreError> {
        let source = RedditClient::new(&config.reddit)?;
        let pipeline = SentimentPipeline::from_config(&config.inference)?;
        Ok(Self::new(
            source,
            pipeline,
            config.reddit.post_limit,
            config.analysis.max_concurrency,
        ))
    }

    pub fn pipeline(&self) -> &SentimentPipeline {
        &self.pipeline
    }

    /// Analyze the current Reddit sentiment around `keyword`.
    ///
    /// Classification runs at most `max_concurrency` posts at a time; the returned posts keep
    /// the order the source produced them in.
    pub async fn analyze_keyword(&self, keyword: &str) -> Result<AnalysisResult, CoreError> {
        if keyword.trim().is_empty() {
            return Err(CoreError::InvalidInput {
                message: "Keyword is required".to_string(),
            });
        }

        info!("Analyzing sentiment for keyword: {}", keyword);
        let posts = self.source.fetch_posts(keyword, self.post_limit).await?;
        if posts.is_empty() {
            return Err(CoreError::NotFound {
                resource: format!("posts for keyword \"{}\"", keyword),
            });
        }

        let total = posts.len();
        info!("Found {} posts, analyzing sentiment...", total);

        let analyzed: Vec<AnalyzedPost> = stream::iter(posts.into_iter().enumerate())
            .map(|(index, post)| async move {
                let verdict = self.pipeline.analyze(&post.content).await;
                debug!(
                    "Post {}/{} classified as {} ({:.2})",
                    index + 1,
                    total,
                    verdict.sentiment,
                    verdict.confidence
                );
                AnalyzedPost::new(post, &verdict)
            })
            .buffered(self.max_concurrency)
            .collect()
            .await;

        let sentiment_distribution = tally(&analyzed);
        let insight = generate_insight(keyword, &sentiment_distribution);

        info!(
            "Analysis for \"{}\" complete: {} positive, {} negative, {} neutral",
            keyword,
            sentiment_distribution.positive,
            sentiment_distribution.negative,
            sentiment_distribution.neutral
        );

        Ok(AnalysisResult {
            keyword: keyword.to_string(),
            total_posts: analyzed.len(),
            sentiment_distribution,
            insight,
            posts: analyzed,
            timestamp: Utc::now(),
        })
    }

    /// Classify a single piece of text through the same pipeline posts go through.
    pub async fn classify_text(&self, text: &str) -> Result<SentimentTestResult, CoreError> {
        if text.is_empty() {
            return Err(CoreError::InvalidInput {
                message: "Text is required".to_string(),
            });
        }

        let result = self.pipeline.analyze(text).await;
        info!(
            "Test classification: {} ({:.2})",
            result.sentiment, result.confidence
        );

        Ok(SentimentTestResult {
            text: text.to_string(),
            result,
            timestamp: Utc::now(),
        })
    }
}
