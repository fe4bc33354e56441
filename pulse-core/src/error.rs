use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Reddit API error: {0}")]
    RedditApi(#[from] RedditApiError),

    #[error("Inference error: {0}")]
    Inference(#[from] InferenceError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    #[error("Resource not found: {resource}")]
    NotFound { resource: String },
}

#[derive(Error, Debug, Clone)]
pub enum RedditApiError {
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    #[error("Forbidden access to resource: {resource}")]
    Forbidden { resource: String },

    #[error("Request timeout")]
    RequestTimeout,

    #[error("Invalid API response: {details}")]
    InvalidResponse { details: String },

    #[error("Unexpected status: {status_code}")]
    UnexpectedStatus { status_code: u16 },

    #[error("Server error: {status_code}")]
    ServerError { status_code: u16 },
}

#[derive(Error, Debug, Clone)]
pub enum InferenceError {
    #[error("No API key configured for {model}")]
    MissingApiKey { model: String },

    #[error("Rate limit exceeded for {model}")]
    RateLimitExceeded { model: String },

    #[error("API quota exceeded or invalid API key for {model}")]
    QuotaExceeded { model: String },

    #[error("Model is loading: {model}")]
    ModelLoading { model: String },

    #[error("Model not found: {model}")]
    ModelNotFound { model: String },

    #[error("Unexpected status {status_code} from {model}")]
    UnexpectedStatus { model: String, status_code: u16 },

    #[error("Request timeout for {model}")]
    RequestTimeout { model: String },

    #[error("Transport failure for {model}: {reason}")]
    Transport { model: String, reason: String },

    #[error("Unexpected response format: {details}")]
    MalformedResponse { details: String },

    #[error("Empty prediction list")]
    EmptyPredictions,

    #[error("Invalid prediction: {details}")]
    InvalidPrediction { details: String },
}

impl InferenceError {
    /// Classify a non-success HTTP status returned by the inference service.
    pub fn from_status(model: &str, status_code: u16) -> Self {
        let model = model.to_string();
        match status_code {
            429 => InferenceError::RateLimitExceeded { model },
            403 => InferenceError::QuotaExceeded { model },
            503 => InferenceError::ModelLoading { model },
            404 => InferenceError::ModelNotFound { model },
            _ => InferenceError::UnexpectedStatus { model, status_code },
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    FileNotFound { path: String },

    #[error("Configuration file unreadable: {path}: {reason}")]
    Unreadable { path: String, reason: String },

    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },

    #[error("Configuration validation failed: {reason}")]
    ValidationFailed { reason: String },

    #[error("Configuration parsing error: {0}")]
    Parse(#[from] toml::de::Error),
}
