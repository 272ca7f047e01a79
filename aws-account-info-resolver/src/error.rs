use thiserror::Error;

use crate::aws::AwsError;

/// Result type alias for identity resolution
pub type IdentityResult<T> = std::result::Result<T, IdentityResolutionError>;

/// Raised when no resolution path yields both the account ID and partition.
///
/// Every fatal path reports the same guidance; the underlying SDK failure is
/// kept as the source for diagnostics.
#[derive(Error, Debug)]
#[error("Failed to get AWS account information, Try allowing sts:GetCallerIdentity or iam:GetUser permissions.")]
pub struct IdentityResolutionError {
    /// The SDK failure that exhausted the fallback chain, when one exists
    #[source]
    pub source: Option<AwsError>,
}

impl IdentityResolutionError {
    pub(crate) fn new() -> Self {
        Self { source: None }
    }

    pub(crate) fn with_source(source: AwsError) -> Self {
        Self {
            source: Some(source),
        }
    }
}
