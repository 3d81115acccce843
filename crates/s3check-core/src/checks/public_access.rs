//! Public access block check.

use std::io::Write;

use tracing::warn;

use crate::error::{CheckError, CheckResult, ProbeError};
use crate::probe::BucketProbe;
use crate::report::Report;
use crate::types::{BucketName, PublicAccessBlockConfig};

/// Error code S3 returns for a bucket without a public access block.
pub const PUBLIC_ACCESS_BLOCK_NOT_FOUND_CODE: &str = "NoSuchPublicAccessBlockConfiguration";

/// Outcome of reading a bucket's public access block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublicAccessCheckResult {
    /// The block exists with these flags.
    Configured(PublicAccessBlockConfig),
    /// The provider reports no public access block at all.
    NotConfigured,
}

impl PublicAccessCheckResult {
    /// Classify a provider response. Only the not-found code is absorbed.
    pub fn classify(
        response: Result<PublicAccessBlockConfig, ProbeError>,
    ) -> Result<Self, ProbeError> {
        match response {
            Ok(config) => Ok(Self::Configured(config)),
            Err(e) if e.has_code(PUBLIC_ACCESS_BLOCK_NOT_FOUND_CODE) => Ok(Self::NotConfigured),
            Err(e) => Err(e),
        }
    }
}

/// Check the public access block of `bucket`.
///
/// A fetched configuration is always reported as `[OK]` with its flags,
/// followed by `[WARN]` if any flag is off. Every failure to fetch, including
/// a missing configuration, is reported as `[ERROR]` and returned; a missing
/// configuration is returned as [`CheckError::PublicAccessBlockNotConfigured`].
pub async fn check_public_access_block<P, W>(
    probe: &P,
    bucket: &BucketName,
    report: &mut Report<W>,
) -> CheckResult<PublicAccessBlockConfig>
where
    P: BucketProbe + ?Sized,
    W: Write,
{
    let response = probe.get_public_access_block(bucket.as_str()).await;

    let config = match PublicAccessCheckResult::classify(response) {
        Ok(PublicAccessCheckResult::Configured(config)) => config,
        Ok(PublicAccessCheckResult::NotConfigured) => {
            warn!(bucket = %bucket, "bucket has no public access block configuration");
            report.error(format_args!(
                "Could not get public access block: bucket {bucket} has no public access \
                 block configuration"
            ))?;
            return Err(CheckError::PublicAccessBlockNotConfigured {
                bucket: bucket.to_string(),
            });
        }
        Err(e) => {
            report.error(format_args!("Could not get public access block: {e}"))?;
            return Err(CheckError::PublicAccessBlock(e));
        }
    };

    report.ok(format_args!("PublicAccessBlock for {bucket}: {config}"))?;
    if !config.is_fully_blocked() {
        report.warn("Not all public access block settings are enabled.")?;
    }

    Ok(config)
}
