//! Request-scoped values passed between the probe and the checks.

use std::fmt;

use bytes::Bytes;

/// Name of the bucket under inspection.
///
/// Opaque: no validation beyond being supplied.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BucketName(String);

impl BucketName {
    /// Create a bucket name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the bucket name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BucketName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One server-side encryption rule as reported by the provider.
///
/// The checks only care whether the rule set is empty; the fields exist so
/// the rules can be shown to the operator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EncryptionRule {
    /// Default SSE algorithm (`AES256`, `aws:kms`, ...), if the rule sets one.
    pub sse_algorithm: Option<String>,
    /// KMS key used for `aws:kms` encryption.
    pub kms_master_key_id: Option<String>,
    /// Whether an S3 Bucket Key is enabled.
    pub bucket_key_enabled: Option<bool>,
}

impl EncryptionRule {
    /// A rule applying `algorithm` by default.
    #[must_use]
    pub fn with_algorithm(algorithm: impl Into<String>) -> Self {
        Self {
            sse_algorithm: Some(algorithm.into()),
            ..Self::default()
        }
    }
}

impl fmt::Display for EncryptionRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        match &self.sse_algorithm {
            Some(alg) => write!(f, "SSEAlgorithm={alg}")?,
            None => f.write_str("SSEAlgorithm=<none>")?,
        }
        if let Some(key) = &self.kms_master_key_id {
            write!(f, ", KMSMasterKeyID={key}")?;
        }
        if let Some(enabled) = self.bucket_key_enabled {
            write!(f, ", BucketKeyEnabled={enabled}")?;
        }
        f.write_str("}")
    }
}

/// Render a rule list as `[{...}, {...}]`.
#[must_use]
pub fn render_rules(rules: &[EncryptionRule]) -> String {
    let inner = rules
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{inner}]")
}

/// The four public access block flags.
///
/// A flag the provider omits is recorded as `false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct PublicAccessBlockConfig {
    /// Reject PUTs carrying public ACLs.
    pub block_public_acls: bool,
    /// Reject bucket policies granting public access.
    pub block_public_policy: bool,
    /// Ignore public ACLs on the bucket and its objects.
    pub ignore_public_acls: bool,
    /// Restrict access to buckets with public policies.
    pub restrict_public_buckets: bool,
}

impl PublicAccessBlockConfig {
    /// Configuration with every flag enabled.
    #[must_use]
    pub fn all_enabled() -> Self {
        Self {
            block_public_acls: true,
            block_public_policy: true,
            ignore_public_acls: true,
            restrict_public_buckets: true,
        }
    }

    /// Whether all four protective settings are active.
    #[must_use]
    pub fn is_fully_blocked(&self) -> bool {
        self.block_public_acls
            && self.block_public_policy
            && self.ignore_public_acls
            && self.restrict_public_buckets
    }
}

impl fmt::Display for PublicAccessBlockConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{BlockPublicAcls={}, IgnorePublicAcls={}, BlockPublicPolicy={}, RestrictPublicBuckets={}}}",
            self.block_public_acls,
            self.ignore_public_acls,
            self.block_public_policy,
            self.restrict_public_buckets,
        )
    }
}

/// The object written and removed by the round-trip test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestObject {
    /// Object key.
    pub key: String,
    /// Object payload.
    pub body: Bytes,
}

impl TestObject {
    /// Key used when none is configured.
    pub const DEFAULT_KEY: &str = "lab-test-object.txt";

    /// Payload used when none is configured.
    pub const DEFAULT_BODY: &[u8] = b"hello from s3_check_secure";

    /// Create a test object.
    #[must_use]
    pub fn new(key: impl Into<String>, body: impl Into<Bytes>) -> Self {
        Self {
            key: key.into(),
            body: body.into(),
        }
    }
}

impl Default for TestObject {
    fn default() -> Self {
        Self {
            key: Self::DEFAULT_KEY.to_owned(),
            body: Bytes::from_static(Self::DEFAULT_BODY),
        }
    }
}
