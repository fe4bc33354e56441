pub mod api;
pub mod fallback;

use api::{RedditApiClient, SearchQuery, MAX_RETURNED_POSTS};
use pulse_core::{CoreError, ErrorExt, ErrorRecovery, Post, RedditApiError, RedditConfig};
use tracing::info;

pub use fallback::synthesize_posts;

/// Post source that always yields posts for a keyword: real search results when Reddit
/// cooperates, synthesized placeholders when it does not.
#[derive(Debug, Clone)]
pub struct RedditClient {
    api: RedditApiClient,
}

impl RedditClient {
    pub fn new(config: &RedditConfig) -> Result<Self, CoreError> {
        Ok(Self {
            api: RedditApiClient::new(config)?,
        })
    }

    /// Fetch up to `limit` posts about `keyword`.
    ///
    /// Source failures, invalid payloads, and empty results are absorbed by substituting
    /// synthesized posts; only errors outside that taxonomy reach the caller.
    pub async fn fetch_posts(&self, keyword: &str, limit: usize) -> Result<Vec<Post>, CoreError> {
        let query = SearchQuery::hot_this_week(keyword, limit);

        let result = match self.api.search_posts(&query).await {
            Ok(posts) if posts.is_empty() && limit > 0 => {
                info!("No usable posts for \"{}\", using fallback data", keyword);
                Ok(synthesize_posts(keyword, limit.min(MAX_RETURNED_POSTS)))
            }
            other => other,
        };

        ErrorRecovery::recover_with(result, |error| {
            error.log_warn();
            info!("Using fallback data due to error: {}", error);
            synthesize_posts(keyword, fallback_count(error, limit))
        })
        .into_result()
    }
}

/// Blocked, rate-limited, and malformed responses are replaced one-for-one; transport and
/// other status failures are capped at [`MAX_RETURNED_POSTS`].
fn fallback_count(error: &CoreError, limit: usize) -> usize {
    match error {
        CoreError::RedditApi(
            RedditApiError::RateLimitExceeded
            | RedditApiError::Forbidden { .. }
            | RedditApiError::InvalidResponse { .. },
        ) => limit,
        _ => limit.min(MAX_RETURNED_POSTS),
    }
}
