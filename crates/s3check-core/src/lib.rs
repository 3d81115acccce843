//! Bucket compliance checks for S3.
//!
//! This crate runs three independent diagnostics against a single bucket:
//!
//! - [`check_encryption`]: is a server-side encryption configuration present?
//! - [`check_public_access_block`]: are all four public access block flags on?
//! - [`roundtrip_test`]: can an object be written, read back intact, and deleted?
//!
//! Every check talks to the bucket through a [`BucketProbe`] and writes its
//! status lines to a [`Report`]. [`S3BucketProbe`] is the production probe,
//! backed by an already-constructed `aws_sdk_s3::Client`; credential and
//! region resolution stay with the caller.

pub mod checks;
pub mod config;
pub mod error;
pub mod probe;
pub mod report;
pub mod types;

#[cfg(test)]
pub(crate) mod testing;

pub use checks::{
    CheckSummary, EncryptionCheckResult, PublicAccessCheckResult, RoundtripOutcome,
    check_encryption, check_public_access_block, roundtrip_test, run_all,
};
pub use config::CheckConfig;
pub use error::{CheckError, CheckResult, ProbeError};
pub use probe::{BucketProbe, S3BucketProbe};
pub use report::{Report, Status};
pub use types::{BucketName, EncryptionRule, PublicAccessBlockConfig, TestObject};
