use crate::arn::Arn;
use crate::types::AccountIdentity;

/// Extract the caller's account identity from an AccessDenied message.
///
/// Many AWS services embed the denied caller's own ARN in the error text
/// ("User: arn:...:user/x is not authorized to perform iam:GetUser"). The
/// embedded ARN counts only when its service component is `iam` — the ARN
/// names the caller, not the resource the call targeted.
pub(crate) fn identity_from_denial(message: &str) -> Option<AccountIdentity> {
    let arn = Arn::find_in_text(message)?;
    if arn.service != "iam" {
        return None;
    }
    Some(AccountIdentity {
        account_id: arn.account_id,
        partition: arn.partition,
    })
}
