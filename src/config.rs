use std::env;
use std::time::Duration;

use crate::scoring::ScoringWeights;

const DEFAULT_BASE_URL: &str = "https://api.football-data.org/v4";
const DEFAULT_COMPETITION: &str = "BSA";
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5000";
const DEFAULT_TIMEOUT_SECS: u64 = 15;
const DEFAULT_SCORERS_LIMIT: u32 = 5;

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub api_key: Option<String>,
    pub timeout: Duration,
    // Zero disables the response cache.
    pub cache_ttl: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            cache_ttl: Duration::ZERO,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub competition_code: String,
    pub scorers_limit: u32,
    pub bind_addr: String,
    pub weights: ScoringWeights,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            competition_code: DEFAULT_COMPETITION.to_string(),
            scorers_limit: DEFAULT_SCORERS_LIMIT,
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            weights: ScoringWeights::default(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        let string = |key: &str| {
            get(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };
        let number = |key: &str| string(key).and_then(|v| v.parse::<u64>().ok());

        let base_url = string("FOOTBALL_DATA_BASE_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let api_key = string("FOOTBALL_DATA_API_KEY");
        let timeout_secs = number("FETCH_TIMEOUT_SECS")
            .unwrap_or(DEFAULT_TIMEOUT_SECS)
            .clamp(1, 120);
        let cache_ttl_secs = number("CACHE_TTL_SECS").unwrap_or(0).min(3600);
        let competition_code = string("COMPETITION_CODE")
            .map(|code| code.to_ascii_uppercase())
            .unwrap_or_else(|| DEFAULT_COMPETITION.to_string());
        let scorers_limit = number("SCORERS_LIMIT")
            .map(|v| v.clamp(1, 50) as u32)
            .unwrap_or(DEFAULT_SCORERS_LIMIT);
        let bind_addr = string("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());

        Self {
            api: ApiConfig {
                base_url,
                api_key,
                timeout: Duration::from_secs(timeout_secs),
                cache_ttl: Duration::from_secs(cache_ttl_secs),
            },
            competition_code,
            scorers_limit,
            bind_addr,
            weights: ScoringWeights::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(pairs: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_point_at_brasileirao_without_cache() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.competition_code, "BSA");
        assert_eq!(cfg.scorers_limit, 5);
        assert_eq!(cfg.api.base_url, "https://api.football-data.org/v4");
        assert_eq!(cfg.api.timeout, Duration::from_secs(15));
        assert!(cfg.api.cache_ttl.is_zero());
        assert_eq!(cfg.weights, ScoringWeights::default());
    }

    #[test]
    fn empty_lookup_matches_defaults() {
        let cfg = config_from(&[]);
        let defaults = AppConfig::default();
        assert_eq!(cfg.api.base_url, defaults.api.base_url);
        assert_eq!(cfg.api.api_key, None);
        assert_eq!(cfg.api.timeout, defaults.api.timeout);
        assert_eq!(cfg.competition_code, defaults.competition_code);
        assert_eq!(cfg.bind_addr, defaults.bind_addr);
    }

    #[test]
    fn numeric_values_are_clamped() {
        let low = config_from(&[("FETCH_TIMEOUT_SECS", "0"), ("SCORERS_LIMIT", "0")]);
        assert_eq!(low.api.timeout, Duration::from_secs(1));
        assert_eq!(low.scorers_limit, 1);

        let high = config_from(&[
            ("FETCH_TIMEOUT_SECS", "999"),
            ("SCORERS_LIMIT", "500"),
            ("CACHE_TTL_SECS", "99999"),
        ]);
        assert_eq!(high.api.timeout, Duration::from_secs(120));
        assert_eq!(high.scorers_limit, 50);
        assert_eq!(high.api.cache_ttl, Duration::from_secs(3600));
    }

    #[test]
    fn blank_or_unparsable_values_fall_back() {
        let cfg = config_from(&[
            ("FETCH_TIMEOUT_SECS", "abc"),
            ("SCORERS_LIMIT", "  "),
            ("FOOTBALL_DATA_API_KEY", "   "),
            ("COMPETITION_CODE", ""),
        ]);
        assert_eq!(cfg.api.timeout, Duration::from_secs(15));
        assert_eq!(cfg.scorers_limit, 5);
        assert_eq!(cfg.api.api_key, None);
        assert_eq!(cfg.competition_code, "BSA");
    }

    #[test]
    fn strings_are_normalized() {
        let cfg = config_from(&[
            ("COMPETITION_CODE", " bsa "),
            ("FOOTBALL_DATA_BASE_URL", "http://localhost:8080/v4/"),
            ("FOOTBALL_DATA_API_KEY", " secret "),
            ("CACHE_TTL_SECS", "30"),
        ]);
        assert_eq!(cfg.competition_code, "BSA");
        assert_eq!(cfg.api.base_url, "http://localhost:8080/v4");
        assert_eq!(cfg.api.api_key.as_deref(), Some("secret"));
        assert_eq!(cfg.api.cache_ttl, Duration::from_secs(30));
    }
}
