use crate::error::*;
use tracing::{error, warn};

pub trait ErrorExt {
    fn log_error(&self) -> &Self;
    fn log_warn(&self) -> &Self;
    /// Whether a same-layer fallback may absorb this error instead of surfacing it.
    fn is_recoverable(&self) -> bool;
    fn user_friendly_message(&self) -> String;
    fn error_code(&self) -> String;
}

impl ErrorExt for CoreError {
    fn log_error(&self) -> &Self {
        error!("CoreError: {}", self);
        match self {
            CoreError::RedditApi(e) => {
                error!("Reddit API error details: {:?}", e);
            }
            CoreError::Inference(e) => {
                error!("Inference error details: {:?}", e);
            }
            CoreError::Config(e) => {
                error!("Configuration error details: {:?}", e);
            }
            _ => {}
        }
        self
    }

    fn log_warn(&self) -> &Self {
        warn!("CoreError (warning): {}", self);
        self
    }

    fn is_recoverable(&self) -> bool {
        match self {
            CoreError::RedditApi(e) => e.is_recoverable(),
            CoreError::Inference(e) => e.is_recoverable(),
            CoreError::Config(e) => e.is_recoverable(),
            CoreError::Network(_) => true,
            CoreError::Io(_) | CoreError::InvalidInput { .. } | CoreError::NotFound { .. } => false,
        }
    }

    fn user_friendly_message(&self) -> String {
        match self {
            CoreError::RedditApi(e) => e.user_friendly_message(),
            CoreError::Inference(e) => e.user_friendly_message(),
            CoreError::Config(e) => e.user_friendly_message(),
            CoreError::Network(_) => {
                "Network connection error. Please check your internet connection.".to_string()
            }
            CoreError::InvalidInput { message } => message.clone(),
            CoreError::NotFound { resource } => format!("Could not find: {}", resource),
            CoreError::Io(_) => "A local I/O operation failed.".to_string(),
        }
    }

    fn error_code(&self) -> String {
        match self {
            CoreError::RedditApi(_) => "REDDIT_API".to_string(),
            CoreError::Inference(_) => "INFERENCE".to_string(),
            CoreError::Config(_) => "CONFIG".to_string(),
            CoreError::Io(_) => "IO".to_string(),
            CoreError::Network(_) => "NETWORK".to_string(),
            CoreError::InvalidInput { .. } => "INVALID_INPUT".to_string(),
            CoreError::NotFound { .. } => "NOT_FOUND".to_string(),
        }
    }
}

impl ErrorExt for RedditApiError {
    fn log_error(&self) -> &Self {
        error!("RedditApiError: {}", self);
        self
    }

    fn log_warn(&self) -> &Self {
        warn!("RedditApiError (warning): {}", self);
        self
    }

    fn is_recoverable(&self) -> bool {
        // Every source failure degrades to synthesized posts.
        true
    }

    fn user_friendly_message(&self) -> String {
        match self {
            RedditApiError::RateLimitExceeded => {
                "Too many requests to Reddit. Please wait before trying again.".to_string()
            }
            RedditApiError::Forbidden { resource } => format!(
                "Access denied to {}. Reddit may be blocking anonymous requests.",
                resource
            ),
            RedditApiError::RequestTimeout => {
                "Request to Reddit timed out. Please try again.".to_string()
            }
            RedditApiError::InvalidResponse { .. } => {
                "Reddit returned a response that could not be understood.".to_string()
            }
            _ => "Reddit API error occurred. Please try again later.".to_string(),
        }
    }

    fn error_code(&self) -> String {
        match self {
            RedditApiError::RateLimitExceeded => "REDDIT_RATE_LIMIT".to_string(),
            RedditApiError::Forbidden { .. } => "REDDIT_FORBIDDEN".to_string(),
            RedditApiError::RequestTimeout => "REDDIT_TIMEOUT".to_string(),
            RedditApiError::InvalidResponse { .. } => "REDDIT_INVALID_RESPONSE".to_string(),
            RedditApiError::UnexpectedStatus { .. } => "REDDIT_UNEXPECTED_STATUS".to_string(),
            RedditApiError::ServerError { .. } => "REDDIT_SERVER_ERROR".to_string(),
        }
    }
}

impl ErrorExt for InferenceError {
    fn log_error(&self) -> &Self {
        error!("InferenceError: {}", self);
        self
    }

    fn log_warn(&self) -> &Self {
        warn!("InferenceError (warning): {}", self);
        self
    }

    fn is_recoverable(&self) -> bool {
        // The keyword heuristic absorbs every inference failure.
        true
    }

    fn user_friendly_message(&self) -> String {
        match self {
            InferenceError::MissingApiKey { .. } => {
                "No inference API key configured. Using keyword analysis.".to_string()
            }
            InferenceError::RateLimitExceeded { .. } => "Rate limit exceeded".to_string(),
            InferenceError::QuotaExceeded { .. } => {
                "API quota exceeded or invalid API key".to_string()
            }
            InferenceError::ModelLoading { .. } => "Model is loading, please wait".to_string(),
            InferenceError::ModelNotFound { .. } => {
                "Model not found - using fallback sentiment analysis".to_string()
            }
            InferenceError::RequestTimeout { .. } => {
                "Sentiment service timed out. Using keyword analysis.".to_string()
            }
            _ => "Sentiment service error occurred. Using keyword analysis.".to_string(),
        }
    }

    fn error_code(&self) -> String {
        match self {
            InferenceError::MissingApiKey { .. } => "INFERENCE_MISSING_API_KEY".to_string(),
            InferenceError::RateLimitExceeded { .. } => "INFERENCE_RATE_LIMIT".to_string(),
            InferenceError::QuotaExceeded { .. } => "INFERENCE_QUOTA_EXCEEDED".to_string(),
            InferenceError::ModelLoading { .. } => "INFERENCE_MODEL_LOADING".to_string(),
            InferenceError::ModelNotFound { .. } => "INFERENCE_MODEL_NOT_FOUND".to_string(),
            InferenceError::UnexpectedStatus { .. } => "INFERENCE_UNEXPECTED_STATUS".to_string(),
            InferenceError::RequestTimeout { .. } => "INFERENCE_TIMEOUT".to_string(),
            InferenceError::Transport { .. } => "INFERENCE_TRANSPORT".to_string(),
            InferenceError::MalformedResponse { .. } => "INFERENCE_MALFORMED_RESPONSE".to_string(),
            InferenceError::EmptyPredictions => "INFERENCE_EMPTY_PREDICTIONS".to_string(),
            InferenceError::InvalidPrediction { .. } => "INFERENCE_INVALID_PREDICTION".to_string(),
        }
    }
}

impl ErrorExt for ConfigError {
    fn log_error(&self) -> &Self {
        error!("ConfigError: {}", self);
        self
    }

    fn log_warn(&self) -> &Self {
        warn!("ConfigError (warning): {}", self);
        self
    }

    fn is_recoverable(&self) -> bool {
        false // Config errors need user intervention
    }

    fn user_friendly_message(&self) -> String {
        match self {
            ConfigError::FileNotFound { path } => {
                format!("Configuration file '{}' not found.", path)
            }
            ConfigError::InvalidValue { field, .. } => {
                format!("Invalid value for configuration field '{}'.", field)
            }
            ConfigError::Parse(_) => {
                "Configuration file format is invalid. Please check the settings.".to_string()
            }
            _ => "Configuration error occurred. Please check your settings.".to_string(),
        }
    }

    fn error_code(&self) -> String {
        match self {
            ConfigError::FileNotFound { .. } => "CONFIG_FILE_NOT_FOUND".to_string(),
            ConfigError::Unreadable { .. } => "CONFIG_UNREADABLE".to_string(),
            ConfigError::InvalidValue { .. } => "CONFIG_INVALID_VALUE".to_string(),
            ConfigError::ValidationFailed { .. } => "CONFIG_VALIDATION_FAILED".to_string(),
            ConfigError::Parse(_) => "CONFIG_PARSE_ERROR".to_string(),
        }
    }
}
