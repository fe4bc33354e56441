use pulse_core::{
    ConfigError, CoreError, ErrorExt, ErrorRecovery, InferenceError,
    RecoveryStrategy, RedditApiError,
};

#[test]
fn test_error_codes() {
    let reddit_error = CoreError::RedditApi(RedditApiError::RateLimitExceeded);
    assert_eq!(reddit_error.error_code(), "REDDIT_API");

    let inference_error = CoreError::Inference(InferenceError::EmptyPredictions);
    assert_eq!(inference_error.error_code(), "INFERENCE");

    let config_error = CoreError::Config(ConfigError::ValidationFailed {
        reason: "bad".to_string(),
    });
    assert_eq!(config_error.error_code(), "CONFIG");

    let input_error = CoreError::InvalidInput {
        message: "Keyword is required".to_string(),
    };
    assert_eq!(input_error.error_code(), "INVALID_INPUT");
}

#[test]
fn test_inference_status_mapping() {
    let cases = [
        (429, "INFERENCE_RATE_LIMIT"),
        (403, "INFERENCE_QUOTA_EXCEEDED"),
        (503, "INFERENCE_MODEL_LOADING"),
        (404, "INFERENCE_MODEL_NOT_FOUND"),
        (500, "INFERENCE_UNEXPECTED_STATUS"),
        (401, "INFERENCE_UNEXPECTED_STATUS"),
    ];

    for (status, code) in cases {
        let error = InferenceError::from_status("test-model", status);
        assert_eq!(error.error_code(), code, "status {}", status);
    }
}

#[test]
fn test_upstream_errors_are_recoverable() {
    let errors = [
        CoreError::RedditApi(RedditApiError::Forbidden {
            resource: "/search.json".to_string(),
        }),
        CoreError::RedditApi(RedditApiError::InvalidResponse {
            details: "missing data.children".to_string(),
        }),
        CoreError::Inference(InferenceError::ModelLoading {
            model: "roberta".to_string(),
        }),
        CoreError::RedditApi(RedditApiError::RequestTimeout),
    ];

    for error in &errors {
        assert!(error.is_recoverable(), "{} should be recoverable", error);
        assert_eq!(
            ErrorRecovery::determine_strategy(error),
            RecoveryStrategy::Fallback
        );
    }
}

#[test]
fn test_terminal_errors_are_not_recoverable() {
    let error = CoreError::Io(std::io::Error::new(
        std::io::ErrorKind::AddrInUse,
        "address already in use",
    ));
    assert!(!error.is_recoverable());
    assert_eq!(error.error_code(), "IO");
    assert_eq!(
        ErrorRecovery::determine_strategy(&error),
        RecoveryStrategy::Fail
    );

    let config_error = CoreError::Config(ConfigError::FileNotFound {
        path: "pulse.toml".to_string(),
    });
    assert!(!config_error.is_recoverable());
    assert_eq!(
        ErrorRecovery::determine_strategy(&config_error),
        RecoveryStrategy::Fail
    );
}

#[test]
fn test_user_friendly_messages() {
    let inference_error = CoreError::Inference(InferenceError::QuotaExceeded {
        model: "roberta".to_string(),
    });
    let message = inference_error.user_friendly_message();
    assert!(message.contains("quota exceeded"));

    let input_error = CoreError::InvalidInput {
        message: "Keyword is required".to_string(),
    };
    assert_eq!(input_error.user_friendly_message(), "Keyword is required");
}

#[test]
fn test_rejected_errors() {
    for error in [
        CoreError::InvalidInput {
            message: "Text is required".to_string(),
        },
        CoreError::NotFound {
            resource: "posts".to_string(),
        },
    ] {
        assert!(!error.is_recoverable());
        assert_eq!(
            ErrorRecovery::determine_strategy(&error),
            RecoveryStrategy::Reject
        );
    }
}
