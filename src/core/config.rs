//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables (optionally via a `.env` file) or
//! defaults.

use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};

/// Default documentation site.
pub const DEFAULT_DOCS_BASE_URL: &str = "https://docs.zkverify.io/";

/// Default relayer API documentation (mainnet).
pub const DEFAULT_RELAYER_DOCS_URL: &str = "https://relayer-api.horizenlabs.io/docs";

/// Default relayer API documentation (testnet).
pub const DEFAULT_RELAYER_TESTNET_DOCS_URL: &str = "https://relayer-api-testnet.horizenlabs.io/docs";

/// Main configuration structure for the MCP server.
///
/// This struct contains all configurable aspects of the server, organized
/// by domain for clarity and maintainability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Documentation sources and fetch behaviour.
    pub docs: DocsConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Where documentation is fetched from and how.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocsConfig {
    /// Base URL of the documentation site. Always ends with `/`.
    pub base_url: String,

    /// Relayer API documentation (mainnet).
    pub relayer_docs_url: String,

    /// Relayer API documentation (testnet).
    pub relayer_testnet_docs_url: String,

    /// Default per-request timeout in seconds.
    pub fetch_timeout_secs: u64,

    /// Per-request timeout for the documentation section tool.
    pub section_timeout_secs: u64,

    /// Maximum number of redirects followed per request.
    pub max_redirects: usize,

    /// User agent sent with every request.
    pub user_agent: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,

    /// Whether to include timestamps in log output.
    pub with_timestamps: bool,
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_DOCS_BASE_URL.to_string(),
            relayer_docs_url: DEFAULT_RELAYER_DOCS_URL.to_string(),
            relayer_testnet_docs_url: DEFAULT_RELAYER_TESTNET_DOCS_URL.to_string(),
            fetch_timeout_secs: 10,
            section_timeout_secs: 15,
            max_redirects: 10,
            user_agent: format!("zkverify-mcp-server/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl DocsConfig {
    /// Join a path onto the documentation base URL.
    pub fn page(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "zkverify".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            docs: DocsConfig::default(),
            logging: LoggingConfig {
                level: "info".to_string(),
                with_timestamps: true,
            },
            transport: TransportConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Environment variables are expected to be prefixed with `ZKVERIFY_`.
    /// For example: `ZKVERIFY_SERVER_NAME`, `ZKVERIFY_LOG_LEVEL`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("ZKVERIFY_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("ZKVERIFY_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(flag) = std::env::var("ZKVERIFY_LOG_TIMESTAMPS") {
            config.logging.with_timestamps = !matches!(flag.trim(), "0" | "false");
        }

        config.transport = TransportConfig::from_env();

        if let Ok(base_url) = std::env::var("ZKVERIFY_DOCS_BASE_URL") {
            config.docs.base_url = normalize_base_url(&base_url);
        }

        if let Ok(url) = std::env::var("ZKVERIFY_RELAYER_DOCS_URL") {
            config.docs.relayer_docs_url = url;
        }

        if let Ok(url) = std::env::var("ZKVERIFY_RELAYER_TESTNET_DOCS_URL") {
            config.docs.relayer_testnet_docs_url = url;
        }

        config.docs.fetch_timeout_secs =
            positive_secs("ZKVERIFY_FETCH_TIMEOUT_SECS", config.docs.fetch_timeout_secs);
        config.docs.section_timeout_secs =
            positive_secs("ZKVERIFY_DOCS_TIMEOUT_SECS", config.docs.section_timeout_secs);

        config
    }
}

/// Ensure the base URL ends with exactly one `/`.
fn normalize_base_url(raw: &str) -> String {
    format!("{}/", raw.trim().trim_end_matches('/'))
}

/// Read a timeout in seconds, ignoring zero and unparsable values.
fn positive_secs(var: &str, default: u64) -> u64 {
    std::env::var(var)
        .ok()
        .and_then(|v| v.trim().parse::<u64>().ok())
        .filter(|secs| *secs > 0)
        .unwrap_or(default)
}

// Env var tests across modules run serially
#[cfg(test)]
pub(crate) static ENV_TEST_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_docs_defaults() {
        let config = Config::default();
        assert_eq!(config.docs.base_url, "https://docs.zkverify.io/");
        assert_eq!(config.docs.fetch_timeout_secs, 10);
        assert_eq!(config.docs.section_timeout_secs, 15);
        assert_eq!(config.server.name, "zkverify");
    }

    #[test]
    fn test_page_joins_without_double_slash() {
        let docs = DocsConfig::default();
        assert_eq!(
            docs.page("architecture/core-architecture"),
            "https://docs.zkverify.io/architecture/core-architecture"
        );
        assert_eq!(docs.page("/tutorials"), "https://docs.zkverify.io/tutorials");
        assert_eq!(docs.page(""), "https://docs.zkverify.io/");
    }

    #[test]
    fn test_normalize_base_url() {
        assert_eq!(normalize_base_url("https://example.org"), "https://example.org/");
        assert_eq!(normalize_base_url("https://example.org///"), "https://example.org/");
    }

    #[test]
    fn test_base_url_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("ZKVERIFY_DOCS_BASE_URL", "https://mirror.example.org/docs");
        }
        let config = Config::from_env();
        assert_eq!(config.docs.base_url, "https://mirror.example.org/docs/");
        unsafe {
            std::env::remove_var("ZKVERIFY_DOCS_BASE_URL");
        }
    }

    #[test]
    fn test_invalid_timeout_keeps_default() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("ZKVERIFY_FETCH_TIMEOUT_SECS", "0");
            std::env::set_var("ZKVERIFY_DOCS_TIMEOUT_SECS", "soon");
        }
        let config = Config::from_env();
        assert_eq!(config.docs.fetch_timeout_secs, 10);
        assert_eq!(config.docs.section_timeout_secs, 15);
        unsafe {
            std::env::remove_var("ZKVERIFY_FETCH_TIMEOUT_SECS");
            std::env::remove_var("ZKVERIFY_DOCS_TIMEOUT_SECS");
        }
    }

    #[test]
    fn test_timeout_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("ZKVERIFY_FETCH_TIMEOUT_SECS", "4");
        }
        let config = Config::from_env();
        assert_eq!(config.docs.fetch_timeout_secs, 4);
        unsafe {
            std::env::remove_var("ZKVERIFY_FETCH_TIMEOUT_SECS");
        }
    }
}
