//! In-memory [`BucketProbe`] for unit tests.

use std::collections::HashMap;

use async_trait::async_trait;
use bytes::Bytes;
use parking_lot::Mutex;

use crate::error::ProbeError;
use crate::probe::BucketProbe;
use crate::report::Report;
use crate::types::{EncryptionRule, PublicAccessBlockConfig};

/// Scripted probe. Objects live in a map; each operation can be forced to fail.
#[derive(Debug)]
pub(crate) struct FakeProbe {
    pub encryption: Result<Vec<EncryptionRule>, ProbeError>,
    pub public_access: Result<PublicAccessBlockConfig, ProbeError>,
    pub put_error: Option<ProbeError>,
    pub get_error: Option<ProbeError>,
    pub delete_error: Option<ProbeError>,
    /// Returned by `get_object` instead of the stored body.
    pub corrupt_read: Option<Bytes>,
    pub objects: Mutex<HashMap<String, Bytes>>,
    pub calls: Mutex<Vec<&'static str>>,
}

impl Default for FakeProbe {
    fn default() -> Self {
        Self {
            encryption: Ok(vec![EncryptionRule::with_algorithm("AES256")]),
            public_access: Ok(PublicAccessBlockConfig::all_enabled()),
            put_error: None,
            get_error: None,
            delete_error: None,
            corrupt_read: None,
            objects: Mutex::new(HashMap::new()),
            calls: Mutex::new(Vec::new()),
        }
    }
}

impl FakeProbe {
    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().clone()
    }

    fn record(&self, op: &'static str) {
        self.calls.lock().push(op);
    }
}

#[async_trait]
impl BucketProbe for FakeProbe {
    async fn get_bucket_encryption(&self, _bucket: &str) -> Result<Vec<EncryptionRule>, ProbeError> {
        self.record("GetBucketEncryption");
        self.encryption.clone()
    }

    async fn get_public_access_block(
        &self,
        _bucket: &str,
    ) -> Result<PublicAccessBlockConfig, ProbeError> {
        self.record("GetPublicAccessBlock");
        self.public_access.clone()
    }

    async fn put_object(&self, _bucket: &str, key: &str, body: Bytes) -> Result<(), ProbeError> {
        self.record("PutObject");
        if let Some(err) = &self.put_error {
            return Err(err.clone());
        }
        self.objects.lock().insert(key.to_owned(), body);
        Ok(())
    }

    async fn get_object(&self, _bucket: &str, key: &str) -> Result<Bytes, ProbeError> {
        self.record("GetObject");
        if let Some(err) = &self.get_error {
            return Err(err.clone());
        }
        if let Some(body) = &self.corrupt_read {
            return Ok(body.clone());
        }
        self.objects
            .lock()
            .get(key)
            .cloned()
            .ok_or_else(|| ProbeError::service("GetObject", "NoSuchKey", "key does not exist"))
    }

    async fn delete_object(&self, _bucket: &str, key: &str) -> Result<(), ProbeError> {
        self.record("DeleteObject");
        if let Some(err) = &self.delete_error {
            return Err(err.clone());
        }
        self.objects.lock().remove(key);
        Ok(())
    }
}

/// Report writing into memory.
pub(crate) fn capture() -> Report<Vec<u8>> {
    Report::new(Vec::new())
}

/// Lines written to a captured report.
pub(crate) fn lines(report: Report<Vec<u8>>) -> Vec<String> {
    String::from_utf8(report.into_inner())
        .expect("report output is utf8")
        .lines()
        .map(ToOwned::to_owned)
        .collect()
}
