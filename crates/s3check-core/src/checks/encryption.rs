//! Server-side encryption check.

use std::io::Write;

use tracing::warn;

use crate::error::{CheckError, CheckResult, ProbeError};
use crate::probe::BucketProbe;
use crate::report::Report;
use crate::types::{BucketName, EncryptionRule, render_rules};

/// Error code S3 returns for a bucket without any encryption configuration.
pub const ENCRYPTION_NOT_FOUND_CODE: &str = "ServerSideEncryptionConfigurationNotFoundError";

/// Outcome of reading a bucket's encryption configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncryptionCheckResult {
    /// A configuration exists; the rule list may be empty.
    Configured(Vec<EncryptionRule>),
    /// The provider reports no encryption configuration at all.
    NotConfigured,
}

impl EncryptionCheckResult {
    /// Classify a provider response. Only the not-found code is absorbed.
    pub fn classify(
        response: Result<Vec<EncryptionRule>, ProbeError>,
    ) -> Result<Self, ProbeError> {
        match response {
            Ok(rules) => Ok(Self::Configured(rules)),
            Err(e) if e.has_code(ENCRYPTION_NOT_FOUND_CODE) => Ok(Self::NotConfigured),
            Err(e) => Err(e),
        }
    }
}

/// Check that `bucket` has server-side encryption rules.
///
/// Writes one line: `[OK]` with the rules, `[WARN]` for an empty rule list,
/// or `[FAIL]` when no configuration exists. Any other provider error is
/// reported as `[ERROR]` and returned.
pub async fn check_encryption<P, W>(
    probe: &P,
    bucket: &BucketName,
    report: &mut Report<W>,
) -> CheckResult<EncryptionCheckResult>
where
    P: BucketProbe + ?Sized,
    W: Write,
{
    let response = probe.get_bucket_encryption(bucket.as_str()).await;

    let result = match EncryptionCheckResult::classify(response) {
        Ok(result) => result,
        Err(e) => {
            report.error(format_args!("Could not get encryption info: {e}"))?;
            return Err(CheckError::Encryption(e));
        }
    };

    match &result {
        EncryptionCheckResult::Configured(rules) if rules.is_empty() => {
            report.warn(format_args!("Bucket {bucket} has no SSE rules."))?;
        }
        EncryptionCheckResult::Configured(rules) => {
            report.ok(format_args!(
                "Bucket {bucket} has server-side encryption configured: {}",
                render_rules(rules)
            ))?;
        }
        EncryptionCheckResult::NotConfigured => {
            warn!(bucket = %bucket, "bucket has no server-side encryption configuration");
            report.fail(format_args!(
                "Bucket {bucket} has no server-side encryption configured."
            ))?;
        }
    }

    Ok(result)
}
