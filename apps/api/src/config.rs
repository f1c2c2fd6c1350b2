use anyhow::{Context, Result};

/// Where content documents are read from.
#[derive(Debug, Clone)]
pub enum ContentSource {
    /// A local directory laid out like the bucket (`docs/`, `galleries/`).
    Filesystem { root: String },
    S3(S3Settings),
}

impl ContentSource {
    pub fn label(&self) -> &'static str {
        match self {
            ContentSource::Filesystem { .. } => "filesystem",
            ContentSource::S3(_) => "s3",
        }
    }
}

#[derive(Debug, Clone)]
pub struct S3Settings {
    pub bucket: String,
    pub endpoint: String,
    pub region: String,
    pub access_key_id: String,
    pub secret_access_key: String,
}

/// Application configuration loaded from environment variables.
/// Startup fails if a required variable is missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub content: ContentSource,
    /// Enables the Redis read-through cache when set.
    pub redis_url: Option<String>,
    pub cache_ttl_secs: u64,
    /// Upper bound on each Redis connect or command before falling back.
    pub cache_timeout_ms: u64,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let content = match optional_env("CONTENT_DIR") {
            Some(root) => ContentSource::Filesystem { root },
            None => ContentSource::S3(S3Settings {
                bucket: require_env("S3_BUCKET")?,
                endpoint: require_env("S3_ENDPOINT")?,
                region: optional_env("S3_REGION").unwrap_or_else(|| "us-east-1".to_string()),
                access_key_id: require_env("AWS_ACCESS_KEY_ID")?,
                secret_access_key: require_env("AWS_SECRET_ACCESS_KEY")?,
            }),
        };

        Ok(Config {
            content,
            redis_url: optional_env("REDIS_URL"),
            cache_ttl_secs: std::env::var("CACHE_TTL_SECS")
                .unwrap_or_else(|_| "3600".to_string())
                .parse::<u64>()
                .context("CACHE_TTL_SECS must be a whole number of seconds")?,
            cache_timeout_ms: std::env::var("CACHE_TIMEOUT_MS")
                .unwrap_or_else(|_| "250".to_string())
                .parse::<u64>()
                .context("CACHE_TIMEOUT_MS must be a whole number of milliseconds")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
