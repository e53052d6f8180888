use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};

const DEFAULT_API_URL: &str = "http://127.0.0.1:5000";
const DEFAULT_TOKEN_FILE: &str = ".hbnb_token";

#[derive(Debug, Clone)]
pub struct Settings {
    pub api_url: String,
    pub token_file: PathBuf,
    pub log_level: String,
    pub request_timeout_secs: u64,
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        let api_url =
            std::env::var("HBNB_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let token_file = std::env::var("HBNB_TOKEN_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_TOKEN_FILE));
        let log_level = std::env::var("LOG_LEVEL")
            .or_else(|_| std::env::var("RUST_LOG"))
            .unwrap_or_else(|_| "warn".to_string());
        let request_timeout_secs = parse_u64_env("HBNB_REQUEST_TIMEOUT_SECS", 15)?;

        Ok(Self {
            api_url: normalize_server(api_url),
            token_file,
            log_level,
            request_timeout_secs,
        })
    }

    /// `--server` перекрывает `HBNB_API_URL`.
    pub fn with_server(mut self, server: Option<String>) -> Self {
        if let Some(server) = server {
            self.api_url = normalize_server(server);
        }
        self
    }
}

pub fn normalize_server(server: String) -> String {
    let server = server.trim().to_string();
    if server.starts_with("http://") || server.starts_with("https://") {
        return server;
    }

    format!("http://{server}")
}

fn parse_u64_env(key: &str, default: u64) -> Result<u64> {
    let value = std::env::var(key)
        .unwrap_or_else(|_| default.to_string())
        .parse::<u64>()
        .with_context(|| format!("Failed to parse {key}, expecting positive integer"))?;

    if value == 0 {
        return Err(anyhow!("{key} must be > 0"));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_server_keeps_scheme() {
        let s = normalize_server("https://example.com:8443".to_string());
        assert_eq!(s, "https://example.com:8443");
    }

    #[test]
    fn normalize_server_adds_http_scheme() {
        let s = normalize_server(" 127.0.0.1:5000 ".to_string());
        assert_eq!(s, "http://127.0.0.1:5000");
    }

    #[test]
    fn with_server_overrides_env_value() {
        let settings = Settings {
            api_url: DEFAULT_API_URL.to_string(),
            token_file: PathBuf::from(DEFAULT_TOKEN_FILE),
            log_level: "warn".to_string(),
            request_timeout_secs: 15,
        }
        .with_server(Some("localhost:8000".to_string()));

        assert_eq!(settings.api_url, "http://localhost:8000");
    }
}
