use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use pulse_core::{CoreError, ErrorExt};
use serde::Serialize;

const ANALYSIS_FAILED: &str = "Failed to analyze sentiment";

/// JSON error body: `{error}` or `{error, message}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    body: ErrorBody,
}

impl ApiError {
    pub fn bad_request(error: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            body: ErrorBody {
                error: error.into(),
                message: None,
            },
        }
    }

    pub fn no_posts() -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            body: ErrorBody {
                error: "No posts found for this keyword".to_string(),
                message: Some("Try a different keyword or check spelling".to_string()),
            },
        }
    }

    /// Map an analysis failure onto its response.
    pub fn from_analysis(error: CoreError) -> Self {
        match error {
            CoreError::InvalidInput { message } => Self::bad_request(message),
            CoreError::NotFound { .. } => Self::no_posts(),
            other => {
                other.log_error();
                Self {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    body: ErrorBody {
                        error: ANALYSIS_FAILED.to_string(),
                        message: Some(other.to_string()),
                    },
                }
            }
        }
    }

    /// Like [`ApiError::from_analysis`], but internal failures carry no message.
    pub fn from_classification(error: CoreError) -> Self {
        match error {
            CoreError::InvalidInput { message } => Self::bad_request(message),
            other => {
                other.log_error();
                Self {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    body: ErrorBody {
                        error: ANALYSIS_FAILED.to_string(),
                        message: None,
                    },
                }
            }
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn body(&self) -> &ErrorBody {
        &self.body
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pulse_core::ConfigError;

    #[test]
    fn test_analysis_error_mapping() {
        let invalid = ApiError::from_analysis(CoreError::InvalidInput {
            message: "Keyword is required".to_string(),
        });
        assert_eq!(invalid.status(), StatusCode::BAD_REQUEST);
        assert_eq!(invalid.body().error, "Keyword is required");
        assert!(invalid.body().message.is_none());

        let missing = ApiError::from_analysis(CoreError::NotFound {
            resource: "posts".to_string(),
        });
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            missing.body().message.as_deref(),
            Some("Try a different keyword or check spelling")
        );

        let internal = ApiError::from_analysis(CoreError::Config(ConfigError::ValidationFailed {
            reason: "bad".to_string(),
        }));
        assert_eq!(internal.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(internal.body().error, ANALYSIS_FAILED);
        assert!(internal.body().message.is_some());
    }

    #[test]
    fn test_classification_error_hides_message() {
        let internal = ApiError::from_classification(CoreError::Io(std::io::Error::new(
            std::io::ErrorKind::Other,
            "boom",
        )));
        assert_eq!(internal.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(internal.body().message.is_none());

        let serialized = serde_json::to_value(internal.body()).unwrap();
        assert_eq!(serialized, serde_json::json!({ "error": ANALYSIS_FAILED }));
    }
}
