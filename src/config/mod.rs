//! Configuration module for the directory backend.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Number of profiles per page when nothing else is configured. Matches the
/// listing grid of the reference frontend.
pub const DEFAULT_PAGE_SIZE: usize = 8;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Admin login email (required for the admin surface)
    pub admin_email: Option<String>,
    /// Admin login password (required for the admin surface)
    pub admin_password: Option<String>,
    /// Path to SQLite database file
    pub db_path: PathBuf,
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Profiles per page on the public listing
    pub page_size: usize,
    /// Profiles per page on the embed surface
    pub embed_page_size: usize,
    /// Origins allowed to call the embed endpoints (comma-separated).
    /// Empty means any origin, for local development only.
    pub embed_origins: Vec<String>,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let admin_email = env::var("TEAMDIR_ADMIN_EMAIL").ok();
        let admin_password = env::var("TEAMDIR_ADMIN_PASSWORD").ok();

        let db_path = env::var("TEAMDIR_DB_PATH")
            .unwrap_or_else(|_| "./data/app.sqlite".to_string())
            .into();

        let bind_addr = env::var("TEAMDIR_BIND_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:8080".to_string())
            .parse()
            .expect("Invalid TEAMDIR_BIND_ADDR format");

        let log_level = env::var("TEAMDIR_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let page_size = env::var("TEAMDIR_PAGE_SIZE")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|&v| v > 0)
            .unwrap_or(DEFAULT_PAGE_SIZE);

        let embed_page_size = env::var("TEAMDIR_EMBED_PAGE_SIZE")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|&v| v > 0)
            .unwrap_or(page_size);

        let embed_origins = env::var("TEAMDIR_EMBED_ORIGINS")
            .map(|v| {
                v.split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Self {
            admin_email,
            admin_password,
            db_path,
            bind_addr,
            log_level,
            page_size,
            embed_page_size,
            embed_origins,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        // Clear any existing env vars
        env::remove_var("TEAMDIR_ADMIN_EMAIL");
        env::remove_var("TEAMDIR_ADMIN_PASSWORD");
        env::remove_var("TEAMDIR_DB_PATH");
        env::remove_var("TEAMDIR_BIND_ADDR");
        env::remove_var("TEAMDIR_LOG_LEVEL");
        env::remove_var("TEAMDIR_PAGE_SIZE");
        env::remove_var("TEAMDIR_EMBED_PAGE_SIZE");
        env::remove_var("TEAMDIR_EMBED_ORIGINS");

        let config = Config::from_env();

        assert!(config.admin_password.is_none());
        assert_eq!(config.db_path, PathBuf::from("./data/app.sqlite"));
        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:8080");
        assert_eq!(config.log_level, "info");
        assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(config.embed_page_size, DEFAULT_PAGE_SIZE);
        assert!(config.embed_origins.is_empty());
    }
}
