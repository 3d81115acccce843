//! Access to the bucket under inspection.
//!
//! [`BucketProbe`] is the seam between the checks and the storage provider.
//! The checks only see domain types ([`EncryptionRule`],
//! [`PublicAccessBlockConfig`], [`Bytes`]) and [`ProbeError`]s that carry the
//! provider's error code.

use async_trait::async_trait;
use aws_sdk_s3::Client;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::types::{PublicAccessBlockConfiguration, ServerSideEncryptionRule};
use bytes::Bytes;
use tracing::debug;

use crate::error::ProbeError;
use crate::types::{EncryptionRule, PublicAccessBlockConfig};

/// The five provider calls the checks need.
#[async_trait]
pub trait BucketProbe: Send + Sync {
    /// Fetch the bucket's server-side encryption rules.
    ///
    /// A configuration without rules yields an empty list; a bucket with no
    /// configuration at all is reported by the provider as an error.
    async fn get_bucket_encryption(&self, bucket: &str) -> Result<Vec<EncryptionRule>, ProbeError>;

    /// Fetch the bucket's public access block flags.
    async fn get_public_access_block(
        &self,
        bucket: &str,
    ) -> Result<PublicAccessBlockConfig, ProbeError>;

    /// Write `body` under `key`.
    async fn put_object(&self, bucket: &str, key: &str, body: Bytes) -> Result<(), ProbeError>;

    /// Read the full body stored under `key`.
    async fn get_object(&self, bucket: &str, key: &str) -> Result<Bytes, ProbeError>;

    /// Delete the object stored under `key`.
    async fn delete_object(&self, bucket: &str, key: &str) -> Result<(), ProbeError>;
}

/// [`BucketProbe`] backed by the AWS SDK.
///
/// Takes an already-configured client: credentials, region and endpoint are
/// the caller's business.
#[derive(Debug, Clone)]
pub struct S3BucketProbe {
    client: Client,
}

impl S3BucketProbe {
    /// Wrap an S3 client.
    #[must_use]
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl BucketProbe for S3BucketProbe {
    async fn get_bucket_encryption(&self, bucket: &str) -> Result<Vec<EncryptionRule>, ProbeError> {
        debug!(bucket, "get_bucket_encryption");
        let output = self
            .client
            .get_bucket_encryption()
            .bucket(bucket)
            .send()
            .await
            .map_err(|e| ProbeError::from_sdk("GetBucketEncryption", &e))?;

        let rules = output
            .server_side_encryption_configuration()
            .map(|config| config.rules().iter().map(encryption_rule).collect())
            .unwrap_or_default();
        Ok(rules)
    }

    async fn get_public_access_block(
        &self,
        bucket: &str,
    ) -> Result<PublicAccessBlockConfig, ProbeError> {
        debug!(bucket, "get_public_access_block");
        let output = self
            .client
            .get_public_access_block()
            .bucket(bucket)
            .send()
            .await
            .map_err(|e| ProbeError::from_sdk("GetPublicAccessBlock", &e))?;

        Ok(output
            .public_access_block_configuration()
            .map(public_access_block)
            .unwrap_or_default())
    }

    async fn put_object(&self, bucket: &str, key: &str, body: Bytes) -> Result<(), ProbeError> {
        debug!(bucket, key, size = body.len(), "put_object");
        self.client
            .put_object()
            .bucket(bucket)
            .key(key)
            .body(ByteStream::from(body))
            .send()
            .await
            .map_err(|e| ProbeError::from_sdk("PutObject", &e))?;
        Ok(())
    }

    async fn get_object(&self, bucket: &str, key: &str) -> Result<Bytes, ProbeError> {
        debug!(bucket, key, "get_object");
        let output = self
            .client
            .get_object()
            .bucket(bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| ProbeError::from_sdk("GetObject", &e))?;

        let data = output
            .body
            .collect()
            .await
            .map_err(|e| ProbeError::other("GetObject", format!("failed to read body: {e}")))?;
        Ok(data.into_bytes())
    }

    async fn delete_object(&self, bucket: &str, key: &str) -> Result<(), ProbeError> {
        debug!(bucket, key, "delete_object");
        self.client
            .delete_object()
            .bucket(bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| ProbeError::from_sdk("DeleteObject", &e))?;
        Ok(())
    }
}

fn encryption_rule(rule: &ServerSideEncryptionRule) -> EncryptionRule {
    let default = rule.apply_server_side_encryption_by_default();
    EncryptionRule {
        sse_algorithm: default.map(|d| d.sse_algorithm().as_str().to_owned()),
        kms_master_key_id: default
            .and_then(|d| d.kms_master_key_id())
            .map(ToOwned::to_owned),
        bucket_key_enabled: rule.bucket_key_enabled(),
    }
}

fn public_access_block(config: &PublicAccessBlockConfiguration) -> PublicAccessBlockConfig {
    PublicAccessBlockConfig {
        block_public_acls: config.block_public_acls().unwrap_or(false),
        block_public_policy: config.block_public_policy().unwrap_or(false),
        ignore_public_acls: config.ignore_public_acls().unwrap_or(false),
        restrict_public_buckets: config.restrict_public_buckets().unwrap_or(false),
    }
}
