use pulse_core::{CoreError, Post, RedditApiError, RedditConfig};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, error, info};

const SEARCH_ENDPOINT: &str = "/search.json";

/// Reddit refuses larger page sizes.
pub const MAX_SEARCH_LIMIT: usize = 100;
/// Posts kept from one search after filtering.
pub const MAX_RETURNED_POSTS: usize = 20;
/// Posts whose combined content is this short or shorter carry no signal.
pub const MIN_CONTENT_CHARS: usize = 20;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedditListing<T> {
    #[serde(default)]
    pub kind: String,
    pub data: RedditListingData<T>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedditListingData<T> {
    pub children: Vec<RedditListingChild<T>>,
    #[serde(default)]
    pub after: Option<String>,
    #[serde(default)]
    pub before: Option<String>,
    #[serde(default)]
    pub dist: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedditListingChild<T> {
    #[serde(default)]
    pub kind: String,
    pub data: T,
}

/// Post fields Reddit may omit or send as `null` fall back to their defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RedditPostData {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub selftext: String,
    #[serde(deserialize_with = "null_as_default")]
    pub author: String,
    #[serde(deserialize_with = "null_as_default")]
    pub subreddit: String,
    #[serde(deserialize_with = "null_as_default")]
    pub permalink: String,
    #[serde(deserialize_with = "null_as_default")]
    pub created_utc: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub score: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub num_comments: u64,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Search parameters sent to `/search.json`.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchQuery {
    pub keyword: String,
    pub limit: usize,
    pub sort: &'static str,
    pub timeframe: &'static str,
}

impl SearchQuery {
    /// Hot posts from the past week.
    pub fn hot_this_week(keyword: &str, limit: usize) -> Self {
        Self {
            keyword: keyword.to_string(),
            limit: limit.min(MAX_SEARCH_LIMIT),
            sort: "hot",
            timeframe: "week",
        }
    }

    fn params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("q", self.keyword.clone()),
            ("limit", self.limit.to_string()),
            ("sort", self.sort.to_string()),
            ("t", self.timeframe.to_string()),
            ("type", "link".to_string()),
            ("raw_json", "1".to_string()),
        ]
    }
}

#[derive(Debug, Clone)]
pub struct RedditApiClient {
    http_client: Client,
    base_url: String,
    timeout: Duration,
}

impl RedditApiClient {
    pub fn new(config: &RedditConfig) -> Result<Self, CoreError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json, text/plain, */*"));
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.9"));

        let http_client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .default_headers(headers)
            .timeout(config.timeout())
            .build()?;

        Ok(Self {
            http_client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            timeout: config.timeout(),
        })
    }

    /// Search Reddit and return the filtered posts. Every failure is reported as an error;
    /// callers decide whether to substitute synthesized posts.
    pub async fn search_posts(&self, query: &SearchQuery) -> Result<Vec<Post>, CoreError> {
        let url = format!("{}{}", self.base_url, SEARCH_ENDPOINT);
        info!("Fetching Reddit posts for keyword: \"{}\"", query.keyword);

        let response = self
            .http_client
            .get(&url)
            .query(&query.params())
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| {
                error!("Network error for GET {}: {}", SEARCH_ENDPOINT, e);
                if e.is_timeout() {
                    CoreError::RedditApi(RedditApiError::RequestTimeout)
                } else {
                    CoreError::Network(e)
                }
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            error!("Reddit API returned status {}", status);
            return Err(CoreError::RedditApi(status_error(status)));
        }

        // Only the envelope is structural; a malformed child is skipped on its own.
        let listing: RedditListing<Value> = response.json().await.map_err(|e| {
            error!("Invalid Reddit API response structure: {}", e);
            CoreError::RedditApi(RedditApiError::InvalidResponse {
                details: "missing data.children".to_string(),
            })
        })?;

        let fetched = listing.data.children.len();
        let posts: Vec<Post> = listing
            .data
            .children
            .into_iter()
            .filter_map(|child| match serde_json::from_value::<RedditPostData>(child.data) {
                Ok(post_data) => Some(Post::from(post_data)),
                Err(e) => {
                    debug!("Skipping unreadable post: {}", e);
                    None
                }
            })
            .filter(is_quality_post)
            .take(MAX_RETURNED_POSTS)
            .collect();

        info!(
            "Successfully fetched {} posts, kept {} for keyword: {}",
            fetched,
            posts.len(),
            query.keyword
        );
        Ok(posts)
    }
}

fn status_error(status: StatusCode) -> RedditApiError {
    match status.as_u16() {
        429 => RedditApiError::RateLimitExceeded,
        403 => RedditApiError::Forbidden {
            resource: SEARCH_ENDPOINT.to_string(),
        },
        code if status.is_server_error() => RedditApiError::ServerError { status_code: code },
        code => RedditApiError::UnexpectedStatus { status_code: code },
    }
}

/// Drop short posts, AutoModerator posts, and removed or deleted posts.
pub fn is_quality_post(post: &Post) -> bool {
    let title = post.title.to_lowercase();
    let keep = post.content.trim().chars().count() > MIN_CONTENT_CHARS
        && !post.author.contains("AutoModerator")
        && !title.contains("[removed]")
        && !title.contains("[deleted]");

    if !keep {
        debug!("Filtered out post {}", post.id);
    }
    keep
}

impl From<RedditPostData> for Post {
    fn from(post_data: RedditPostData) -> Self {
        let content = Post::combine_content(&post_data.title, &post_data.selftext);
        Self {
            id: post_data.id,
            title: post_data.title,
            text: post_data.selftext,
            content,
            score: post_data.score,
            author: post_data.author,
            subreddit: post_data.subreddit,
            created: post_data.created_utc as i64,
            url: format!("https://reddit.com{}", post_data.permalink),
            num_comments: post_data.num_comments,
        }
    }
}
