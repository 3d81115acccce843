//! The three bucket checks and the sequence that runs them.
//!
//! Checks are independent: none reads another's outcome. A check returns
//! `Err` only for failures it does not recognize, and [`run_all`] stops at the
//! first such error.

mod encryption;
mod public_access;
mod roundtrip;

use std::io::Write;

use tracing::info;

pub use encryption::{ENCRYPTION_NOT_FOUND_CODE, EncryptionCheckResult, check_encryption};
pub use public_access::{
    PUBLIC_ACCESS_BLOCK_NOT_FOUND_CODE, PublicAccessCheckResult, check_public_access_block,
};
pub use roundtrip::{RoundtripOutcome, roundtrip_test};

use crate::config::CheckConfig;
use crate::error::CheckResult;
use crate::probe::BucketProbe;
use crate::report::Report;
use crate::types::{BucketName, PublicAccessBlockConfig};

/// Results of a full run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckSummary {
    /// Encryption check outcome.
    pub encryption: EncryptionCheckResult,
    /// Public access block flags.
    pub public_access: PublicAccessBlockConfig,
    /// Round-trip outcome.
    pub roundtrip: RoundtripOutcome,
}

/// Run encryption, public access block and round-trip checks in order.
pub async fn run_all<P, W>(
    probe: &P,
    bucket: &BucketName,
    config: &CheckConfig,
    report: &mut Report<W>,
) -> CheckResult<CheckSummary>
where
    P: BucketProbe + ?Sized,
    W: Write,
{
    info!(bucket = %bucket, "running bucket checks");

    let encryption = check_encryption(probe, bucket, report).await?;
    let public_access = check_public_access_block(probe, bucket, report).await?;
    let roundtrip = roundtrip_test(probe, bucket, &config.test_object(), report).await?;

    Ok(CheckSummary {
        encryption,
        public_access,
        roundtrip,
    })
}
