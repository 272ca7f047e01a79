use once_cell::sync::Lazy;
use regex::Regex;

// Narrow on purpose: AccessDenied wording varies across services, the ARN
// shape does not.
static ARN_IN_TEXT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"arn:(aws|aws-[a-z-]+):([a-z0-9-]+):([a-z0-9-]*):(\d*):([^\s"',]+)"#)
        .expect("embedded-ARN pattern is valid")
});

/// An Amazon Resource Name split into its colon-delimited components:
/// `arn:partition:service:region:account-id:resource`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Arn {
    /// Partition, e.g. `aws`, `aws-cn`, `aws-us-gov`
    pub partition: String,
    /// Service namespace, e.g. `iam`, `sts`, `s3`
    pub service: String,
    /// Region, empty for global services
    pub region: String,
    /// Owning account ID, empty for some service ARNs
    pub account_id: String,
    /// Resource part; keeps any embedded colons
    pub resource: String,
}

impl Arn {
    /// Parse a full ARN string positionally. Returns `None` when the string
    /// is not an ARN.
    pub fn parse(arn: &str) -> Option<Self> {
        let mut parts = arn.splitn(6, ':');
        if parts.next()? != "arn" {
            return None;
        }
        let partition = parts.next()?;
        let service = parts.next()?;
        let region = parts.next()?;
        let account_id = parts.next()?;
        let resource = parts.next()?;
        if partition.is_empty() || service.is_empty() {
            return None;
        }
        Some(Self {
            partition: partition.to_string(),
            service: service.to_string(),
            region: region.to_string(),
            account_id: account_id.to_string(),
            resource: resource.to_string(),
        })
    }

    /// Find the first ARN embedded in free-form text, such as an AccessDenied
    /// error message. Returns `None` when the text contains no recognizable
    /// ARN.
    pub fn find_in_text(text: &str) -> Option<Self> {
        let caps = ARN_IN_TEXT.captures(text)?;
        Some(Self {
            partition: caps[1].to_string(),
            service: caps[2].to_string(),
            region: caps[3].to_string(),
            account_id: caps[4].to_string(),
            resource: caps[5].to_string(),
        })
    }
}
