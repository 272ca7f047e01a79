use serde::{Deserialize, Serialize};

/// The identity of the AWS account the active credentials operate against.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct AccountIdentity {
    /// Account ID, e.g. `123456789012`
    pub account_id: String,
    /// Partition the account lives in, e.g. `aws`, `aws-cn`, `aws-us-gov`
    pub partition: String,
}
