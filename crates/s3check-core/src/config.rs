//! Check configuration.
//!
//! The round-trip object is fixed; only the log level is read from the
//! environment. AWS credentials, region and endpoint are resolved by the SDK
//! and never pass through here.

use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

use crate::types::TestObject;

/// Configuration for a check run.
///
/// # Examples
///
/// ```
/// use s3check_core::config::CheckConfig;
///
/// let config = CheckConfig::default();
/// assert_eq!(config.test_object_key, "lab-test-object.txt");
/// assert_eq!(config.log_level, "warn");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase")]
pub struct CheckConfig {
    /// Key of the object written by the round-trip test.
    #[builder(default = String::from(TestObject::DEFAULT_KEY))]
    pub test_object_key: String,

    /// Payload written by the round-trip test.
    #[builder(default = String::from_utf8_lossy(TestObject::DEFAULT_BODY).into_owned())]
    pub test_object_body: String,

    /// Log level filter string (e.g. `"warn"`, `"debug"`).
    #[builder(default = String::from("warn"))]
    pub log_level: String,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl CheckConfig {
    /// Load configuration from environment variables.
    ///
    /// | Variable | Default |
    /// |----------|---------|
    /// | `LOG_LEVEL` | `warn` |
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Overlay variables resolved by `lookup` onto the defaults.
    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(v) = lookup("LOG_LEVEL") {
            config.log_level = v;
        }

        config
    }

    /// The object the round-trip test writes, reads and deletes.
    #[must_use]
    pub fn test_object(&self) -> TestObject {
        TestObject::new(
            self.test_object_key.clone(),
            self.test_object_body.clone().into_bytes(),
        )
    }
}
