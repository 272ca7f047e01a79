use aws_sdk_iam::Client as IamClient;

use crate::aws::{classify_sdk_error, AwsError, AwsResult};

/// Return the ARN of the current IAM user using IAM GetUser.
///
/// Requires the credentials to belong to an IAM user; role credentials get a
/// ValidationError from the service.
///
/// # Arguments
///
/// * `client` - IAM client to use for the API call
pub(crate) async fn current_user_arn(client: &IamClient) -> AwsResult<String> {
    let out = client.get_user().send().await.map_err(classify_sdk_error)?;
    let user = out
        .user()
        .ok_or_else(|| AwsError::SdkError("IAM GetUser missing User".to_string()))?;
    Ok(user.arn().to_string())
}
