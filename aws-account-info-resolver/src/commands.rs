use async_trait::async_trait;
use aws_config::retry::RetryConfig;
use aws_config::SdkConfig;
use aws_sdk_iam::Client as IamClient;
use aws_sdk_sts::Client as StsClient;
use log::debug;

use crate::arn::Arn;
use crate::aws::sts::CallerIdentity;
use crate::aws::{iam, sts, AwsResult};
use crate::error::{IdentityResolutionError, IdentityResult};
use crate::parsing::identity_from_denial;
use crate::types::AccountIdentity;

/// Attempts per identity call, retried by the SDK with jittered exponential
/// backoff.
const MAX_ATTEMPTS: u32 = 5;

/// Main service struct that holds AWS clients and resolves the account
/// identity.
pub struct AccountInfoService {
    pub(crate) sts_client: StsClient,
    pub(crate) iam_client: IamClient,
}

impl AccountInfoService {
    /// Create a service instance from an already-loaded SDK configuration.
    pub fn new(config: &SdkConfig) -> Self {
        Self {
            sts_client: StsClient::new(config),
            iam_client: IamClient::new(config),
        }
    }

    /// Create a service instance using the standard credential provider
    /// chain, with retries enabled on every call.
    pub async fn from_env() -> Self {
        // Load AWS configuration using the standard credential provider chain.
        let config = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .retry_config(RetryConfig::standard().with_max_attempts(MAX_ATTEMPTS))
            .load()
            .await;
        Self::new(&config)
    }

    /// Resolve the account ID and partition of the active credentials.
    ///
    /// Tries sts:GetCallerIdentity, then iam:GetUser, then the caller ARN
    /// embedded in the AccessDenied message iam:GetUser produces. Giving
    /// either STS or IAM privileges to the credentials is enough.
    pub async fn resolve_account_identity(&self) -> IdentityResult<AccountIdentity> {
        resolve_with(self).await
    }

    /// Resolve just the account ID of the active credentials.
    pub async fn resolve_account_id(&self) -> IdentityResult<String> {
        Ok(self.resolve_account_identity().await?.account_id)
    }
}

/// The two identity calls the fallback chain is built on.
#[async_trait]
pub(crate) trait AccountApi {
    async fn caller_identity(&self) -> AwsResult<CallerIdentity>;
    async fn user_arn(&self) -> AwsResult<String>;
}

#[async_trait]
impl AccountApi for AccountInfoService {
    async fn caller_identity(&self) -> AwsResult<CallerIdentity> {
        sts::caller_identity(&self.sts_client).await
    }

    async fn user_arn(&self) -> AwsResult<String> {
        iam::current_user_arn(&self.iam_client).await
    }
}

/// Ordered fallback over decreasing levels of privilege, short-circuiting on
/// the first path that yields both values.
pub(crate) async fn resolve_with(api: &impl AccountApi) -> IdentityResult<AccountIdentity> {
    let identity = match api.caller_identity().await {
        Ok(caller) => {
            // ARN format: arn:partition:service:region:account-id:resource
            let partition = caller.arn.split(':').nth(1).unwrap_or_default().to_string();
            AccountIdentity {
                account_id: caller.account,
                partition,
            }
        }
        Err(e) => {
            debug!("sts:GetCallerIdentity failed ({e}), falling back to iam:GetUser");
            match api.user_arn().await {
                Ok(user_arn) => match Arn::parse(&user_arn) {
                    Some(arn) => AccountIdentity {
                        account_id: arn.account_id,
                        partition: arn.partition,
                    },
                    None => return Err(IdentityResolutionError::new()),
                },
                Err(e) if e.is_code("AccessDenied") => {
                    debug!("iam:GetUser denied, scanning the denial message for the caller ARN");
                    match identity_from_denial(&e.text()) {
                        Some(identity) => identity,
                        None => return Err(IdentityResolutionError::with_source(e)),
                    }
                }
                Err(e) => return Err(IdentityResolutionError::with_source(e)),
            }
        }
    };

    if identity.account_id.is_empty() || identity.partition.is_empty() {
        return Err(IdentityResolutionError::new());
    }
    Ok(identity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aws::AwsError;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Scripted stand-in for the two identity calls. `Err` payloads carry an
    /// optional service error code plus the message text.
    struct FakeApi {
        caller: Result<CallerIdentity, String>,
        user: Result<String, (Option<String>, String)>,
        caller_calls: AtomicUsize,
        user_calls: AtomicUsize,
    }

    impl FakeApi {
        fn new(
            caller: Result<CallerIdentity, String>,
            user: Result<String, (Option<String>, String)>,
        ) -> Self {
            Self {
                caller,
                user,
                caller_calls: AtomicUsize::new(0),
                user_calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl AccountApi for FakeApi {
        async fn caller_identity(&self) -> AwsResult<CallerIdentity> {
            self.caller_calls.fetch_add(1, Ordering::SeqCst);
            self.caller.clone().map_err(AwsError::SdkError)
        }

        async fn user_arn(&self) -> AwsResult<String> {
            self.user_calls.fetch_add(1, Ordering::SeqCst);
            self.user.clone().map_err(|(code, message)| match code {
                Some(code) => AwsError::ApiError { code, message },
                None => AwsError::SdkError(message),
            })
        }
    }

    fn denied(message: &str) -> Result<String, (Option<String>, String)> {
        Err((Some("AccessDenied".to_string()), message.to_string()))
    }

    #[tokio::test]
    async fn test_caller_identity_short_circuits() {
        let api = FakeApi::new(
            Ok(CallerIdentity {
                account: "123456789012".to_string(),
                arn: "arn:aws:sts::123456789012:assumed-role/X/Y".to_string(),
            }),
            denied("unreached"),
        );
        let identity = resolve_with(&api).await.expect("should resolve");
        assert_eq!(identity.account_id, "123456789012");
        assert_eq!(identity.partition, "aws");
        assert_eq!(api.user_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_falls_back_to_get_user() {
        let api = FakeApi::new(
            Err("connection reset".to_string()),
            Ok("arn:aws-cn:iam::111122223333:user/bob".to_string()),
        );
        let identity = resolve_with(&api).await.expect("should resolve");
        assert_eq!(identity.account_id, "111122223333");
        assert_eq!(identity.partition, "aws-cn");
    }

    #[tokio::test]
    async fn test_scrapes_denial_message() {
        let api = FakeApi::new(
            Err("connection reset".to_string()),
            denied("User: arn:aws-us-gov:iam::999988887777:user/carol is not authorized to perform: iam:GetUser on resource: user carol"),
        );
        let identity = resolve_with(&api).await.expect("should resolve");
        assert_eq!(identity.account_id, "999988887777");
        assert_eq!(identity.partition, "aws-us-gov");
    }

    #[tokio::test]
    async fn test_denial_with_non_iam_arn_fails() {
        let api = FakeApi::new(
            Err("connection reset".to_string()),
            denied("Access denied on resource: arn:aws:s3:::somebucket"),
        );
        let err = resolve_with(&api).await.expect_err("should fail");
        assert!(err.source.is_some());
    }

    #[tokio::test]
    async fn test_denial_without_arn_fails() {
        let api = FakeApi::new(Err("connection reset".to_string()), denied("Access Denied"));
        assert!(resolve_with(&api).await.is_err());
    }

    #[tokio::test]
    async fn test_non_denial_get_user_error_fails() {
        let api = FakeApi::new(
            Err("connection reset".to_string()),
            Err((
                Some("ValidationError".to_string()),
                // An ARN in the message must not rescue a non-AccessDenied
                // failure.
                "arn:aws:iam::123456789012:user/x triggered a validation error".to_string(),
            )),
        );
        let err = resolve_with(&api).await.expect_err("should fail");
        assert!(err.source.expect("keeps source").is_code("ValidationError"));
    }

    #[tokio::test]
    async fn test_transport_error_from_get_user_fails() {
        let api = FakeApi::new(
            Err("connection reset".to_string()),
            Err((None, "dns lookup failed".to_string())),
        );
        assert!(resolve_with(&api).await.is_err());
    }

    #[tokio::test]
    async fn test_repeated_calls_agree() {
        let api = FakeApi::new(
            Ok(CallerIdentity {
                account: "123456789012".to_string(),
                arn: "arn:aws:iam::123456789012:user/bob".to_string(),
            }),
            denied("unreached"),
        );
        let first = resolve_with(&api).await.expect("should resolve");
        let second = resolve_with(&api).await.expect("should resolve");
        assert_eq!(first, second);
        assert_eq!(api.caller_calls.load(Ordering::SeqCst), 2);
    }
}
