// src/config/mod.rs
// Process configuration: listen address, storage directory, organizer page

use std::path::PathBuf;
use std::str::FromStr;

use tracing::{debug, warn};

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_STORAGE_DIR: &str = "storage";
pub const DEFAULT_PAGE_PATH: &str = "public/index.html";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    // ── Server
    pub host: String,
    pub port: u16,

    // ── Storage
    pub storage_dir: PathBuf,

    // ── Frontend
    pub page_path: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            storage_dir: PathBuf::from(DEFAULT_STORAGE_DIR),
            page_path: PathBuf::from(DEFAULT_PAGE_PATH),
        }
    }
}

// Tolerates trailing comments and whitespace in values coming from .env files.
fn env_var_or<T>(key: &str, default: T) -> T
where
    T: FromStr,
{
    match std::env::var(key) {
        Ok(val) => {
            let clean_val = val.split('#').next().unwrap_or("").trim();
            match clean_val.parse::<T>() {
                Ok(parsed) => {
                    debug!("Config: {} = {} (from environment)", key, clean_val);
                    parsed
                }
                Err(_) => {
                    warn!("Config: {} = '{}' (parse failed, using default)", key, val);
                    default
                }
            }
        }
        Err(_) => default,
    }
}

// Paths are taken verbatim: `#` is a legal path character, not a comment.
fn env_path_or(key: &str, default: &str) -> PathBuf {
    match std::env::var(key) {
        Ok(val) if !val.trim().is_empty() => {
            debug!("Config: {} = {} (from environment)", key, val.trim());
            PathBuf::from(val.trim())
        }
        _ => PathBuf::from(default),
    }
}

impl ServerConfig {
    /// Build the configuration from the environment, loading `.env` first if present.
    pub fn from_env() -> Self {
        if dotenvy::dotenv().is_err() {
            debug!(".env file not found, using environment variables and defaults");
        }

        Self {
            host: env_var_or("ORGANIZER_HOST", DEFAULT_HOST.to_string()),
            port: env_var_or("ORGANIZER_PORT", DEFAULT_PORT),
            storage_dir: env_path_or("ORGANIZER_STORAGE_DIR", DEFAULT_STORAGE_DIR),
            page_path: env_path_or("ORGANIZER_PAGE_PATH", DEFAULT_PAGE_PATH),
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
