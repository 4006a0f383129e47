//! Application settings with compile-time overrides.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Prefix for every API endpoint
    pub api_base_url: String,
    pub items_per_page: usize,
    pub request_timeout_ms: u32,
    pub upload_timeout_ms: u32,
    pub toast_duration_ms: u32,
    pub session_max_age_secs: u64,
    /// `log` level name for the browser console
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: "/api".to_string(),
            items_per_page: crate::table::DEFAULT_PAGE_SIZE,
            request_timeout_ms: 30_000,
            upload_timeout_ms: 60_000,
            toast_duration_ms: 5_000,
            session_max_age_secs: 86_400,
            log_level: "debug".to_string(),
        }
    }
}

impl AppConfig {
    /// Defaults overlaid with whichever overrides are present.
    ///
    /// Unknown keys and unparsable numbers are skipped with a warning.
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, Option<&'a str>)>,
    {
        let mut config = Self::default();
        for (key, value) in pairs {
            let Some(value) = value.map(str::trim).filter(|v| !v.is_empty()) else {
                continue;
            };
            let applied = match key {
                "api_base_url" => {
                    config.api_base_url = value.trim_end_matches('/').to_string();
                    true
                }
                "log_level" => {
                    config.log_level = value.to_lowercase();
                    true
                }
                "items_per_page" => parse_into(value, &mut config.items_per_page),
                "request_timeout_ms" => parse_into(value, &mut config.request_timeout_ms),
                "upload_timeout_ms" => parse_into(value, &mut config.upload_timeout_ms),
                "toast_duration_ms" => parse_into(value, &mut config.toast_duration_ms),
                "session_max_age_secs" => parse_into(value, &mut config.session_max_age_secs),
                _ => false,
            };
            if !applied {
                log::warn!("ignoring config override {}={}", key, value);
            }
        }
        config
    }

    /// Parsed console level, `Info` when the name is not recognised
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}

fn parse_into<T: std::str::FromStr>(value: &str, slot: &mut T) -> bool {
    match value.parse() {
        Ok(parsed) => {
            *slot = parsed;
            true
        }
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.api_base_url, "/api");
        assert_eq!(config.items_per_page, 10);
        assert_eq!(config.request_timeout_ms, 30_000);
        assert_eq!(config.upload_timeout_ms, 60_000);
        assert_eq!(config.toast_duration_ms, 5_000);
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_pairs([
            ("api_base_url", Some("https://bank.example/api/")),
            ("items_per_page", Some("25")),
            ("request_timeout_ms", Some("not-a-number")),
            ("log_level", Some("WARN")),
            ("toast_duration_ms", None),
            ("mystery", Some("1")),
        ]);
        assert_eq!(config.api_base_url, "https://bank.example/api");
        assert_eq!(config.items_per_page, 25);
        assert_eq!(config.request_timeout_ms, 30_000);
        assert_eq!(config.toast_duration_ms, 5_000);
        assert_eq!(config.log_level(), log::Level::Warn);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: AppConfig = serde_json::from_str(r#"{"items_per_page": 5}"#).unwrap();
        assert_eq!(config.items_per_page, 5);
        assert_eq!(config.api_base_url, "/api");
    }
}
