//! AWS SDK integration: STS and IAM calls, error classification.

/// iam calls
pub(crate) mod iam;

/// sts calls
pub(crate) mod sts;

use aws_sdk_sts::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use thiserror::Error;

#[derive(Error, Debug)]
/// AWS Errors from AWS SDK calls
pub enum AwsError {
    #[error("AWS API error ({code}): {message}")]
    /// modeled service error carrying its error code
    ApiError {
        /// service error code, e.g. `AccessDenied`
        code: String,
        /// service error message
        message: String,
    },
    #[error("AWS SDK error: {0}")]
    /// transport failures and everything else from the SDK
    SdkError(String),
}

impl AwsError {
    /// True when this is a modeled API error carrying the given error code.
    pub fn is_code(&self, code: &str) -> bool {
        matches!(self, Self::ApiError { code: c, .. } if c == code)
    }

    /// The most specific human-readable text available for this error.
    pub fn text(&self) -> String {
        match self {
            Self::ApiError { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

/// Type of AWS Result extending Result
pub(crate) type AwsResult<T> = Result<T, AwsError>;

/// Map an SDK error into [`AwsError`], keeping the service error code when
/// the service returned one.
pub(crate) fn classify_sdk_error<E, R>(err: SdkError<E, R>) -> AwsError
where
    E: ProvideErrorMetadata + std::error::Error + Send + Sync + 'static,
    R: std::fmt::Debug,
{
    if let Some(service_err) = err.as_service_error() {
        if let Some(code) = service_err.code() {
            let message = service_err
                .message()
                .map_or_else(|| err.to_string(), str::to_string);
            return AwsError::ApiError {
                code: code.to_string(),
                message,
            };
        }
    }
    AwsError::SdkError(format!("{}", DisplayErrorContext(&err)))
}
