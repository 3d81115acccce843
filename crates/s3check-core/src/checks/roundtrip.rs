//! Data-plane write/read/delete round-trip.

use std::io::Write;

use tracing::{debug, warn};

use crate::error::{CheckError, CheckResult, ProbeError};
use crate::probe::BucketProbe;
use crate::report::Report;
use crate::types::{BucketName, TestObject};

/// Outcome of a completed round-trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundtripOutcome {
    /// Whether the downloaded bytes equal the uploaded bytes.
    pub content_matches: bool,
}

/// Put `object`, read it back, compare, then delete it.
///
/// A content mismatch is reported as `[FAIL]` and does not stop the cleanup.
/// A failed put, get or delete is reported as `[ERROR]` and returned
/// immediately; no further step is attempted.
pub async fn roundtrip_test<P, W>(
    probe: &P,
    bucket: &BucketName,
    object: &TestObject,
    report: &mut Report<W>,
) -> CheckResult<RoundtripOutcome>
where
    P: BucketProbe + ?Sized,
    W: Write,
{
    match run_steps(probe, bucket, object, report).await? {
        Ok(outcome) => Ok(outcome),
        Err(e) => {
            report.error(format_args!("S3 roundtrip failed: {e}"))?;
            Err(CheckError::Roundtrip(e))
        }
    }
}

/// The three steps. The outer result carries report write failures, the
/// inner one provider failures.
async fn run_steps<P, W>(
    probe: &P,
    bucket: &BucketName,
    object: &TestObject,
    report: &mut Report<W>,
) -> CheckResult<Result<RoundtripOutcome, ProbeError>>
where
    P: BucketProbe + ?Sized,
    W: Write,
{
    let key = object.key.as_str();

    if let Err(e) = probe
        .put_object(bucket.as_str(), key, object.body.clone())
        .await
    {
        return Ok(Err(e));
    }
    report.ok(format_args!("Uploaded test object {key} to {bucket}"))?;

    let content = match probe.get_object(bucket.as_str(), key).await {
        Ok(content) => content,
        Err(e) => return Ok(Err(e)),
    };

    let content_matches = content == object.body;
    if content_matches {
        report.ok("Downloaded content matches uploaded content")?;
    } else {
        warn!(
            bucket = %bucket,
            key,
            expected = object.body.len(),
            actual = content.len(),
            "downloaded content differs from upload"
        );
        report.fail("Content mismatch")?;
    }

    if let Err(e) = probe.delete_object(bucket.as_str(), key).await {
        return Ok(Err(e));
    }
    report.ok("Cleaned up test object")?;

    debug!(bucket = %bucket, key, content_matches, "roundtrip completed");
    Ok(Ok(RoundtripOutcome { content_matches }))
}
