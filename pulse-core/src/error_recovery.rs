//! Error recovery strategies for the different error classes.
//!
//! Upstream failures are absorbed as close to their source as possible by substituting a
//! cheaper deterministic result. Nothing here retries: a failed call resolves straight to its
//! fallback or to the caller.

use crate::{CoreError, ErrorExt};
use tracing::warn;

/// Recovery strategy for handling errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecoveryStrategy {
    /// Replace the failed result with a same-layer substitute
    Fallback,
    /// Report the error to the caller as a client problem
    Reject,
    /// Surface the error as a terminal failure
    Fail,
}

/// Outcome of running an operation under its recovery strategy
#[derive(Debug)]
pub enum RecoveryResult<T> {
    /// The primary operation succeeded
    Recovered(T),
    /// The primary operation failed and the fallback value was substituted
    Degraded(T),
    /// The error is a client error and must be reported as such
    Rejected(CoreError),
    /// The error is terminal
    Failed(CoreError),
}

impl<T> RecoveryResult<T> {
    /// Returns true if the primary operation succeeded
    pub fn is_recovered(&self) -> bool {
        matches!(self, RecoveryResult::Recovered(_))
    }

    /// Returns true if the fallback value was substituted
    pub fn is_degraded(&self) -> bool {
        matches!(self, RecoveryResult::Degraded(_))
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, RecoveryResult::Rejected(_))
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, RecoveryResult::Failed(_))
    }

    /// Collapse into a plain result, dropping the recovered/degraded distinction
    pub fn into_result(self) -> Result<T, CoreError> {
        match self {
            RecoveryResult::Recovered(value) | RecoveryResult::Degraded(value) => Ok(value),
            RecoveryResult::Rejected(error) | RecoveryResult::Failed(error) => Err(error),
        }
    }
}

/// Error recovery handler that maps error classes to strategies
pub struct ErrorRecovery;

impl ErrorRecovery {
    /// Determine the appropriate recovery strategy for a given error
    pub fn determine_strategy(error: &CoreError) -> RecoveryStrategy {
        match error {
            // Bad caller input or nothing to analyze
            CoreError::InvalidInput { .. } | CoreError::NotFound { .. } => {
                RecoveryStrategy::Reject
            }

            // Configuration problems need user intervention
            CoreError::Config(_) => RecoveryStrategy::Fail,

            _ if error.is_recoverable() => RecoveryStrategy::Fallback,

            _ => RecoveryStrategy::Fail,
        }
    }

    /// Resolve `result` under the strategy its error calls for.
    ///
    /// `fallback` only runs when the error's strategy is [`RecoveryStrategy::Fallback`]; it
    /// receives the error so the substitute can depend on the failure cause.
    pub fn recover_with<T, F>(result: Result<T, CoreError>, fallback: F) -> RecoveryResult<T>
    where
        F: FnOnce(&CoreError) -> T,
    {
        let error = match result {
            Ok(value) => return RecoveryResult::Recovered(value),
            Err(error) => error,
        };

        match Self::determine_strategy(&error) {
            RecoveryStrategy::Fallback => {
                warn!(
                    "Falling back after {}: {}",
                    error.error_code(),
                    error.user_friendly_message()
                );
                RecoveryResult::Degraded(fallback(&error))
            }
            RecoveryStrategy::Reject => RecoveryResult::Rejected(error),
            RecoveryStrategy::Fail => RecoveryResult::Failed(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ConfigError, InferenceError, RedditApiError};
    use std::io;

    #[test]
    fn test_recover_with_success() {
        let result = ErrorRecovery::recover_with(Ok::<_, CoreError>(7), |_| 0);
        assert!(result.is_recovered());
        assert_eq!(result.into_result().unwrap(), 7);
    }

    #[test]
    fn test_recover_with_fallback() {
        let error = CoreError::Inference(InferenceError::ModelLoading {
            model: "test".to_string(),
        });
        let result = ErrorRecovery::recover_with(Err(error), |e| {
            assert_eq!(e.error_code(), "INFERENCE");
            42
        });

        assert!(result.is_degraded());
        assert_eq!(result.into_result().unwrap(), 42);
    }

    #[test]
    fn test_invalid_input_is_rejected_without_fallback() {
        let error = CoreError::InvalidInput {
            message: "Keyword is required".to_string(),
        };
        let result: RecoveryResult<i32> =
            ErrorRecovery::recover_with(Err(error), |_| panic!("fallback must not run"));

        assert!(result.is_rejected());
    }

    #[test]
    fn test_determine_strategy() {
        let source_error = CoreError::RedditApi(RedditApiError::RateLimitExceeded);
        assert_eq!(
            ErrorRecovery::determine_strategy(&source_error),
            RecoveryStrategy::Fallback
        );

        let config_error = CoreError::Config(ConfigError::ValidationFailed {
            reason: "test".to_string(),
        });
        assert_eq!(
            ErrorRecovery::determine_strategy(&config_error),
            RecoveryStrategy::Fail
        );

        let io_error = CoreError::Io(io::Error::new(io::ErrorKind::Other, "test"));
        assert_eq!(
            ErrorRecovery::determine_strategy(&io_error),
            RecoveryStrategy::Fail
        );

        let not_found = CoreError::NotFound {
            resource: "posts".to_string(),
        };
        assert_eq!(
            ErrorRecovery::determine_strategy(&not_found),
            RecoveryStrategy::Reject
        );
    }
}
