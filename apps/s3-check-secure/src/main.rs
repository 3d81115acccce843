//! s3-check-secure - encryption, public access and round-trip checks for one bucket.
//!
//! Runs three checks in order and prints one tagged line per finding
//! (`[OK]`, `[WARN]`, `[FAIL]`, `[ERROR]`) to standard output. FAIL and WARN
//! findings still exit 0; an `[ERROR]` aborts the remaining checks and exits
//! non-zero.
//!
//! # Usage
//!
//! ```text
//! s3-check-secure <bucket-name>
//! ```
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `LOG_LEVEL` | `warn` | Log level filter |
//! | `RUST_LOG` | *(unset)* | Fine-grained tracing filter (overrides `LOG_LEVEL`) |
//!
//! Credentials, region and endpoint come from the standard AWS provider chain
//! (`AWS_PROFILE`, `AWS_REGION`, `AWS_ENDPOINT_URL`, ...).

use std::ffi::OsString;

use anyhow::{Context, Result};
use aws_config::BehaviorVersion;
use tracing::info;
use tracing_subscriber::EnvFilter;

use s3check_core::{BucketName, CheckConfig, Report, S3BucketProbe, run_all};

/// Tool version, logged at startup.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Exit status for a malformed command line.
const USAGE_EXIT_CODE: i32 = 2;

const USAGE: &str = "Usage: s3-check-secure <bucket-name>";

/// Initialize the tracing subscriber.
///
/// Uses `RUST_LOG` if set, otherwise falls back to the `LOG_LEVEL` config value.
/// Logs go to stderr; stdout carries only status lines.
fn init_tracing(log_level: &str) -> Result<()> {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::try_new(log_level)
            .with_context(|| format!("invalid log level filter: {log_level}"))?
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    Ok(())
}

/// Extract the single positional bucket argument (program name excluded).
///
/// Any count other than one, or a bucket name that is not valid UTF-8, is a
/// usage error.
fn parse_bucket<I>(args: I) -> Option<BucketName>
where
    I: IntoIterator<Item = OsString>,
{
    let mut args = args.into_iter();
    let bucket = args.next()?;
    if args.next().is_some() {
        return None;
    }
    bucket.into_string().ok().map(BucketName::new)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let Some(bucket) = parse_bucket(std::env::args_os().skip(1)) else {
        println!("{USAGE}");
        std::process::exit(USAGE_EXIT_CODE);
    };

    let config = CheckConfig::from_env();

    init_tracing(&config.log_level)?;

    info!(bucket = %bucket, version = VERSION, "starting s3-check-secure");

    let sdk_config = aws_config::load_defaults(BehaviorVersion::latest()).await;
    let probe = S3BucketProbe::new(aws_sdk_s3::Client::new(&sdk_config));

    let mut report = Report::new(std::io::stdout().lock());
    run_all(&probe, &bucket, &config, &mut report)
        .await
        .with_context(|| format!("checks against bucket {bucket} aborted"))?;

    Ok(())
}
