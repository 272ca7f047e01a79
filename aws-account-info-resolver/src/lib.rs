//! This crate resolves the identity of the AWS account the active credentials
//! operate against: its account ID and partition.
//!
//! Not every credential has every permission, so resolution degrades through
//! decreasing levels of privilege:
//! - sts:GetCallerIdentity
//! - iam:GetUser
//! - the caller ARN embedded in the AccessDenied message iam:GetUser produces
//!

mod arn;
mod aws;
mod commands;
mod error;
mod parsing;
mod types;

// Re-exports for a small, focused public API
pub use arn::Arn;
pub use aws::AwsError;
pub use commands::AccountInfoService;
pub use error::{IdentityResolutionError, IdentityResult};
pub use types::AccountIdentity;
