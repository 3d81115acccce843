//! Error types for bucket checks.
//!
//! Provider failures arrive as [`ProbeError`], which keeps the S3 error code
//! so the checks can tell an expected negative-compliance signal (for example
//! `ServerSideEncryptionConfigurationNotFoundError`) apart from a genuine
//! failure. Anything a check does not recognize becomes a [`CheckError`] and
//! aborts the run.

use std::fmt;

use aws_sdk_s3::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};

/// A failed provider call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeError {
    /// Provider operation name, e.g. `GetBucketEncryption`.
    pub operation: &'static str,
    /// S3 error code, when the provider returned one.
    pub code: Option<String>,
    /// Human-readable detail.
    pub message: String,
}

impl ProbeError {
    /// A provider error with an S3 error code.
    #[must_use]
    pub fn service(
        operation: &'static str,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            operation,
            code: Some(code.into()),
            message: message.into(),
        }
    }

    /// A failure with no S3 error code (transport, body read, ...).
    #[must_use]
    pub fn other(operation: &'static str, message: impl Into<String>) -> Self {
        Self {
            operation,
            code: None,
            message: message.into(),
        }
    }

    /// Convert an SDK error, extracting the S3 error code from its metadata.
    pub fn from_sdk<E, R>(operation: &'static str, err: &SdkError<E, R>) -> Self
    where
        E: ProvideErrorMetadata + std::error::Error + 'static,
        R: fmt::Debug,
    {
        Self {
            operation,
            code: err.code().map(ToOwned::to_owned),
            message: err
                .message()
                .map_or_else(|| DisplayErrorContext(err).to_string(), ToOwned::to_owned),
        }
    }

    /// Whether the provider reported exactly this error code.
    #[must_use]
    pub fn has_code(&self, code: &str) -> bool {
        self.code.as_deref() == Some(code)
    }
}

impl fmt::Display for ProbeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.code {
            Some(code) => write!(f, "{} returned {code}: {}", self.operation, self.message),
            None => write!(f, "{} failed: {}", self.operation, self.message),
        }
    }
}

impl std::error::Error for ProbeError {}

/// Error that aborts a check run.
#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    /// Reading the encryption configuration failed unexpectedly.
    #[error("encryption check failed: {0}")]
    Encryption(#[source] ProbeError),

    /// Reading the public access block failed unexpectedly.
    #[error("public access block check failed: {0}")]
    PublicAccessBlock(#[source] ProbeError),

    /// The bucket has no public access block configuration at all.
    #[error("bucket {bucket} has no public access block configuration")]
    PublicAccessBlockNotConfigured {
        /// Bucket name.
        bucket: String,
    },

    /// A put, get or delete in the round-trip test failed.
    #[error("roundtrip test failed: {0}")]
    Roundtrip(#[source] ProbeError),

    /// Writing a status line failed.
    #[error("failed to write report: {0}")]
    Report(#[from] std::io::Error),
}

/// Convenience result type for check operations.
pub type CheckResult<T> = Result<T, CheckError>;
