use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{anyhow, Context, Result};

/// What an upload request does when the resume row cannot be written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StoreFailurePolicy {
    /// Log the failure and still render the recommendation.
    #[default]
    Degrade,
    /// Log the failure and render the error page for this request.
    Abort,
}

impl FromStr for StoreFailurePolicy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "degrade" => Ok(StoreFailurePolicy::Degrade),
            "abort" => Ok(StoreFailurePolicy::Abort),
            other => Err(anyhow!(
                "unknown resume store failure policy '{other}' (expected 'degrade' or 'abort')"
            )),
        }
    }
}

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub database_max_connections: u32,
    pub port: u16,
    pub rust_log: String,
    pub upload_dir: PathBuf,
    pub max_upload_bytes: usize,
    pub store_failure_policy: StoreFailurePolicy,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            database_max_connections: optional_env("DATABASE_MAX_CONNECTIONS", "10")
                .parse::<u32>()
                .context("DATABASE_MAX_CONNECTIONS must be a positive integer")?,
            port: optional_env("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: optional_env("RUST_LOG", "info"),
            upload_dir: PathBuf::from(optional_env("UPLOAD_DIR", "uploads")),
            max_upload_bytes: optional_env("MAX_UPLOAD_BYTES", "10485760")
                .parse::<usize>()
                .context("MAX_UPLOAD_BYTES must be a byte count")?,
            store_failure_policy: optional_env("RESUME_STORE_FAILURE", "degrade")
                .parse()
                .context("RESUME_STORE_FAILURE is invalid")?,
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn optional_env(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_parses_case_insensitively() {
        assert_eq!(
            "Abort".parse::<StoreFailurePolicy>().unwrap(),
            StoreFailurePolicy::Abort
        );
        assert_eq!(
            " degrade ".parse::<StoreFailurePolicy>().unwrap(),
            StoreFailurePolicy::Degrade
        );
    }

    #[test]
    fn test_policy_rejects_unknown_value() {
        assert!("retry".parse::<StoreFailurePolicy>().is_err());
    }

    #[test]
    fn test_policy_default_is_degrade() {
        assert_eq!(StoreFailurePolicy::default(), StoreFailurePolicy::Degrade);
    }
}
