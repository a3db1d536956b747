use std::env;
use std::path::PathBuf;

use chrono::{DateTime, FixedOffset, Locale};

use crate::error::{Result, TrackerError};
use crate::model::Deadline;

/// Membership sales close at 5 PM Pacific.
pub const MEMBERSHIP_DEADLINE: &str = "2026-04-18T17:00:00-07:00";
/// Voting day, midnight Pacific.
pub const VOTING_DAY: &str = "2026-05-30T00:00:00-07:00";

/// Settings for one site build, read from environment variables (a `.env`
/// file is honoured).
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// Directory holding one `.md` source unit per candidate
    pub content_dir: PathBuf,
    /// Directory the rendered site is written to
    pub output_dir: PathBuf,
    /// Locale for human-readable deadline dates
    pub locale: Locale,
    /// Keep re-rendering the page every minute
    pub watch: bool,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    pub deadlines: Vec<Deadline>,
}

impl SiteConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from any key lookup, e.g. a map in tests.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let content_dir = lookup("TRACKER_CONTENT_DIR")
            .unwrap_or_else(|| "content/candidates".to_string())
            .into();

        let output_dir = lookup("TRACKER_OUTPUT_DIR")
            .unwrap_or_else(|| "dist".to_string())
            .into();

        let locale = match lookup("TRACKER_LOCALE") {
            Some(value) => {
                Locale::try_from(value.as_str()).map_err(|_| TrackerError::InvalidConfig {
                    key: "TRACKER_LOCALE",
                    value,
                })?
            }
            None => Locale::en_CA,
        };

        let watch = match lookup("TRACKER_WATCH") {
            Some(value) => parse_flag("TRACKER_WATCH", value)?,
            None => false,
        };

        let log_level = lookup("TRACKER_LOG_LEVEL").unwrap_or_else(|| "info".to_string());

        let deadlines = vec![
            Deadline {
                title: "Membership Deadline".to_string(),
                target: parse_instant(&lookup, "TRACKER_MEMBERSHIP_DEADLINE", MEMBERSHIP_DEADLINE)?,
                show_time: true,
            },
            Deadline {
                title: "Voting Day".to_string(),
                target: parse_instant(&lookup, "TRACKER_VOTING_DAY", VOTING_DAY)?,
                show_time: false,
            },
        ];

        Ok(Self {
            content_dir,
            output_dir,
            locale,
            watch,
            log_level,
            deadlines,
        })
    }
}

fn parse_flag(key: &'static str, value: String) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(TrackerError::InvalidConfig { key, value }),
    }
}

fn parse_instant<F>(
    lookup: &F,
    key: &'static str,
    default: &str,
) -> Result<DateTime<FixedOffset>>
where
    F: Fn(&str) -> Option<String>,
{
    let value = lookup(key).unwrap_or_else(|| default.to_string());
    DateTime::parse_from_rfc3339(&value).map_err(|_| TrackerError::InvalidConfig { key, value })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(pairs: &[(&str, &str)]) -> Result<SiteConfig> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        SiteConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_default_config() {
        let config = config_from(&[]).unwrap();

        assert_eq!(config.content_dir, PathBuf::from("content/candidates"));
        assert_eq!(config.output_dir, PathBuf::from("dist"));
        assert_eq!(config.locale, Locale::en_CA);
        assert!(!config.watch);
        assert_eq!(config.log_level, "info");

        assert_eq!(config.deadlines.len(), 2);
        assert!(config.deadlines[0].show_time);
        assert!(!config.deadlines[1].show_time);
        assert_eq!(
            config.deadlines[1].target.to_rfc3339(),
            "2026-05-30T00:00:00-07:00"
        );
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("TRACKER_CONTENT_DIR", "/srv/content"),
            ("TRACKER_LOCALE", "fr_CA"),
            ("TRACKER_WATCH", "yes"),
            ("TRACKER_VOTING_DAY", "2026-06-01T09:00:00-07:00"),
        ])
        .unwrap();

        assert_eq!(config.content_dir, PathBuf::from("/srv/content"));
        assert_eq!(config.locale, Locale::fr_CA);
        assert!(config.watch);
        assert_eq!(
            config.deadlines[1].target.to_rfc3339(),
            "2026-06-01T09:00:00-07:00"
        );
    }

    #[test]
    fn test_invalid_values() {
        let err = config_from(&[("TRACKER_LOCALE", "xx_YY")]).unwrap_err();
        assert!(matches!(
            err,
            TrackerError::InvalidConfig {
                key: "TRACKER_LOCALE",
                ..
            }
        ));

        let err = config_from(&[("TRACKER_WATCH", "sometimes")]).unwrap_err();
        assert!(matches!(
            err,
            TrackerError::InvalidConfig {
                key: "TRACKER_WATCH",
                ..
            }
        ));

        let err = config_from(&[("TRACKER_MEMBERSHIP_DEADLINE", "April 18")]).unwrap_err();
        assert!(matches!(
            err,
            TrackerError::InvalidConfig {
                key: "TRACKER_MEMBERSHIP_DEADLINE",
                ..
            }
        ));
    }
}
