use std::env;

use tracing::Level;

const DEFAULT_API_URL: &str = "http://localhost:8080/api";
const DEFAULT_STORE_PATH: &str = "recruitment.db";

/// Startup settings, read from `RECRUIT_*` environment variables.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub api_base_url: String,
    pub id_token: String,
    pub store_path: String,
    pub log_level: Level,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            id_token: String::new(),
            store_path: DEFAULT_STORE_PATH.to_string(),
            log_level: Level::INFO,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            api_base_url: lookup("RECRUIT_API_URL").unwrap_or(defaults.api_base_url),
            id_token: lookup("RECRUIT_ID_TOKEN").unwrap_or(defaults.id_token),
            store_path: lookup("RECRUIT_STORE_PATH").unwrap_or(defaults.store_path),
            log_level: lookup("RECRUIT_LOG")
                .and_then(|level| level.parse().ok())
                .unwrap_or(defaults.log_level),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(|_| None);
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_overrides_and_bad_level() {
        let vars: HashMap<&str, &str> = [
            ("RECRUIT_API_URL", "https://api.example.com"),
            ("RECRUIT_ID_TOKEN", "secret"),
            ("RECRUIT_LOG", "loud"),
        ]
        .into_iter()
        .collect();

        let config = Config::from_lookup(|key| vars.get(key).map(|v| v.to_string()));
        assert_eq!(config.api_base_url, "https://api.example.com");
        assert_eq!(config.id_token, "secret");
        assert_eq!(config.store_path, DEFAULT_STORE_PATH);
        assert_eq!(config.log_level, Level::INFO);

        let config = Config::from_lookup(|key| (key == "RECRUIT_LOG").then(|| "debug".to_string()));
        assert_eq!(config.log_level, Level::DEBUG);
    }
}
