use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::env;

/// Submission deadline used when `END_TIME` is not set.
pub const DEFAULT_END_TIME: &str = "2025-05-10T23:59:00Z";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(skip_serializing, default)]
    pub discord_token: String,
    pub application_id: u64,
    pub guild_id: u64,
    pub end_time: DateTime<Utc>,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from any key/value source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let discord_token = lookup("TOKEN")
            .ok_or_else(|| anyhow::anyhow!("TOKEN environment variable not set"))?;
        let application_id = parse_id(&lookup, "CLIENT_ID")?;
        let guild_id = parse_id(&lookup, "GUILD_ID")?;

        let end_time_raw = lookup("END_TIME").unwrap_or_else(|| DEFAULT_END_TIME.to_string());
        let end_time = DateTime::parse_from_rfc3339(end_time_raw.trim())
            .map_err(|e| anyhow::anyhow!("END_TIME '{}' is not an RFC 3339 timestamp: {}", end_time_raw, e))?
            .with_timezone(&Utc);

        Ok(Config {
            discord_token,
            application_id,
            guild_id,
            end_time,
            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
        })
    }
}

fn parse_id<F>(lookup: &F, key: &str) -> Result<u64>
where
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(key).ok_or_else(|| anyhow::anyhow!("{} environment variable not set", key))?;
    raw.trim()
        .parse::<u64>()
        .map_err(|_| anyhow::anyhow!("{} must be a numeric Discord id, got '{}'", key, raw))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_config_missing_token() {
        let result = Config::from_lookup(lookup_from(&[("CLIENT_ID", "1"), ("GUILD_ID", "2")]));
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("TOKEN"));
    }

    #[test]
    fn test_config_rejects_non_numeric_ids() {
        let result = Config::from_lookup(lookup_from(&[
            ("TOKEN", "t"),
            ("CLIENT_ID", "abc"),
            ("GUILD_ID", "2"),
        ]));
        assert!(result.unwrap_err().to_string().contains("CLIENT_ID"));
    }

    #[test]
    fn test_config_with_defaults() {
        let config = Config::from_lookup(lookup_from(&[
            ("TOKEN", "test_discord_token"),
            ("CLIENT_ID", "1234"),
            ("GUILD_ID", "5678"),
        ]))
        .unwrap();

        assert_eq!(config.discord_token, "test_discord_token");
        assert_eq!(config.application_id, 1234);
        assert_eq!(config.guild_id, 5678);
        assert_eq!(config.end_time, Utc.with_ymd_and_hms(2025, 5, 10, 23, 59, 0).unwrap());
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_config_custom_end_time_with_offset() {
        let config = Config::from_lookup(lookup_from(&[
            ("TOKEN", "t"),
            ("CLIENT_ID", "1"),
            ("GUILD_ID", "2"),
            ("END_TIME", "2026-01-01T01:00:00+01:00"),
            ("LOG_LEVEL", "debug"),
        ]))
        .unwrap();

        assert_eq!(config.end_time, Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap());
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_config_invalid_end_time() {
        let result = Config::from_lookup(lookup_from(&[
            ("TOKEN", "t"),
            ("CLIENT_ID", "1"),
            ("GUILD_ID", "2"),
            ("END_TIME", "tomorrow"),
        ]));
        assert!(result.unwrap_err().to_string().contains("END_TIME"));
    }

    #[test]
    fn test_config_serialization_omits_token() {
        let config = Config::from_lookup(lookup_from(&[
            ("TOKEN", "secret_token"),
            ("CLIENT_ID", "1"),
            ("GUILD_ID", "2"),
        ]))
        .unwrap();

        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("secret_token"));
        assert!(!json.contains("discord_token"));

        let restored: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.discord_token, "");
        assert_eq!(restored.application_id, 1);
        assert_eq!(restored.guild_id, 2);
        assert_eq!(restored.end_time, config.end_time);
        assert_eq!(restored.log_level, "info");
    }
}
