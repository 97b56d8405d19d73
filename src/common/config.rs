use std::path::PathBuf;
use std::time::Duration;

use url::Url;

use crate::common::ConfigError;
use crate::models::Lang;

pub const DEFAULT_API_URL: &str = "http://localhost:5000";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_CACHE_SECS: u64 = 60;
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

/// Runtime configuration shared by the host binary and native clients.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Origin of the REST backend (`VITE_API_URL`).
    pub api_url: Url,
    pub bind_addr: String,
    /// How long public reads stay fresh.
    pub cache_ttl: Duration,
    pub http_timeout: Duration,
    /// Where the native session store keeps token and admin.
    pub session_file: Option<PathBuf>,
    pub default_lang: Lang,
}

impl AppConfig {
    /// Every setting at its default except the backend origin.
    pub fn with_api_url(api_url: Url) -> Self {
        Self {
            api_url,
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            cache_ttl: Duration::from_secs(DEFAULT_CACHE_SECS),
            http_timeout: Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
            session_file: None,
            default_lang: Lang::default(),
        }
    }

    /// Load `.env` (if present) and read configuration from the environment.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from any key lookup; `load` uses the process env.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let api_url = get("VITE_API_URL")
            .or_else(|| get("AFFPRESS_API_URL"))
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let api_url = Url::parse(&api_url)?;
        if !matches!(api_url.scheme(), "http" | "https") {
            return Err(ConfigError::Invalid {
                name: "VITE_API_URL",
                reason: format!("unsupported scheme '{}'", api_url.scheme()),
            });
        }

        let cache_secs = parse_secs(get("AFFPRESS_CACHE_SECS"), "AFFPRESS_CACHE_SECS", DEFAULT_CACHE_SECS)?;
        let timeout_secs = parse_secs(
            get("AFFPRESS_HTTP_TIMEOUT_SECS"),
            "AFFPRESS_HTTP_TIMEOUT_SECS",
            DEFAULT_HTTP_TIMEOUT_SECS,
        )?;
        if timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                name: "AFFPRESS_HTTP_TIMEOUT_SECS",
                reason: "must be greater than 0".into(),
            });
        }

        let default_lang = match get("AFFPRESS_DEFAULT_LANG") {
            Some(v) => v.parse::<Lang>().map_err(|reason| ConfigError::Invalid {
                name: "AFFPRESS_DEFAULT_LANG",
                reason,
            })?,
            None => Lang::default(),
        };

        let mut config = Self::with_api_url(api_url);
        if let Some(addr) = get("BIND_ADDR") {
            config.bind_addr = addr;
        }
        config.cache_ttl = Duration::from_secs(cache_secs);
        config.http_timeout = Duration::from_secs(timeout_secs);
        config.session_file = get("AFFPRESS_SESSION_FILE").map(PathBuf::from);
        config.default_lang = default_lang;
        Ok(config)
    }
}

fn parse_secs(raw: Option<String>, name: &'static str, default: u64) -> Result<u64, ConfigError> {
    match raw {
        Some(v) => v.parse::<u64>().map_err(|e| ConfigError::Invalid {
            name,
            reason: e.to_string(),
        }),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_env_is_empty() {
        let cfg = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(cfg, AppConfig::with_api_url(Url::parse(DEFAULT_API_URL).unwrap()));
        assert_eq!(cfg.bind_addr, DEFAULT_BIND_ADDR);
        assert_eq!(cfg.cache_ttl, Duration::from_secs(DEFAULT_CACHE_SECS));
    }

    #[test]
    fn vite_url_wins_over_affpress_url() {
        let cfg = AppConfig::from_lookup(lookup(&[
            ("VITE_API_URL", "https://api.example.com"),
            ("AFFPRESS_API_URL", "https://other.example.com"),
            ("AFFPRESS_CACHE_SECS", "15"),
            ("AFFPRESS_DEFAULT_LANG", "en"),
        ]))
        .unwrap();

        assert_eq!(cfg.api_url.as_str(), "https://api.example.com/");
        assert_eq!(cfg.cache_ttl, Duration::from_secs(15));
        assert_eq!(cfg.default_lang, Lang::En);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(AppConfig::from_lookup(lookup(&[("VITE_API_URL", "ftp://x.y")])).is_err());
        assert!(AppConfig::from_lookup(lookup(&[("AFFPRESS_CACHE_SECS", "soon")])).is_err());
        assert!(AppConfig::from_lookup(lookup(&[("AFFPRESS_HTTP_TIMEOUT_SECS", "0")])).is_err());
        assert!(AppConfig::from_lookup(lookup(&[("AFFPRESS_DEFAULT_LANG", "fr")])).is_err());
    }
}
