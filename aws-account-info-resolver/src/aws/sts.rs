use aws_sdk_sts::Client as StsClient;

use crate::aws::{classify_sdk_error, AwsError, AwsResult};

/// Account ID and caller ARN as reported by STS.
#[derive(Debug, Clone)]
pub(crate) struct CallerIdentity {
    pub(crate) account: String,
    pub(crate) arn: String,
}

/// Return the current caller identity using STS GetCallerIdentity.
///
/// # Arguments
///
/// * `client` - STS client to use for the API call
pub(crate) async fn caller_identity(client: &StsClient) -> AwsResult<CallerIdentity> {
    let out = client
        .get_caller_identity()
        .send()
        .await
        .map_err(classify_sdk_error)?;
    let account = out
        .account()
        .map(str::to_string)
        .ok_or_else(|| AwsError::SdkError("STS GetCallerIdentity missing Account".to_string()))?;
    let arn = out
        .arn()
        .map(str::to_string)
        .ok_or_else(|| AwsError::SdkError("STS GetCallerIdentity missing Arn".to_string()))?;
    Ok(CallerIdentity { account, arn })
}
