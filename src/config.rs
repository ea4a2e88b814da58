//! Worker configuration.
//!
//! Holds the fallback values a push falls back to when the payload leaves a
//! field out, plus the fixed parts of every notification (vibration pattern,
//! action labels). The JS shim passes a partial object to the worker
//! constructor; anything it omits keeps the default below.

use serde::{Deserialize, Serialize};

use crate::error::WorkerError;

/// Configuration for the push worker.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct WorkerConfig {
    /// Title shown when the payload has none.
    pub default_title: String,
    /// Body shown when the payload has none.
    pub default_body: String,
    /// Icon path used when the payload has none.
    pub default_icon: String,
    /// Badge path used when the payload has no icon.
    pub default_badge: String,
    /// Tag used for grouping when the payload has none.
    pub default_tag: String,
    /// Vibration pattern in milliseconds (on, off, on, ...).
    pub vibrate: Vec<u32>,
    /// Label of the `open` action button.
    pub open_action_label: String,
    /// Label of the `close` action button.
    pub close_action_label: String,
    /// URL opened on click when the notification stored no target.
    pub fallback_url: String,
    /// Log level name (`error`, `warn`, `info`, `debug`, `trace`, `off`).
    pub log_level: String,
}

impl Default for WorkerConfig {
    fn default() -> Self {
        Self {
            default_title: "新通知".to_string(),
            default_body: "您有一条新消息".to_string(),
            default_icon: "/static/icon.png".to_string(),
            default_badge: "/static/icon.png".to_string(),
            default_tag: "vapid-demo".to_string(),
            vibrate: vec![200, 100, 200],
            open_action_label: "Open".to_string(),
            close_action_label: "Close".to_string(),
            fallback_url: "/".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl WorkerConfig {
    /// Parse a (possibly partial) JSON config and validate it.
    pub fn from_json(json: &str) -> Result<Self, WorkerError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| WorkerError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the config can drive a notification.
    pub fn validate(&self) -> Result<(), WorkerError> {
        if self.default_title.is_empty() {
            return Err(WorkerError::Config(
                "defaultTitle must not be empty".to_string(),
            ));
        }
        if self.fallback_url.is_empty() {
            return Err(WorkerError::Config(
                "fallbackUrl must not be empty".to_string(),
            ));
        }
        self.level_filter()?;
        Ok(())
    }

    /// The configured log level as a [`log::LevelFilter`].
    pub fn level_filter(&self) -> Result<log::LevelFilter, WorkerError> {
        self.log_level
            .parse::<log::LevelFilter>()
            .map_err(|_| WorkerError::Config(format!("unknown logLevel: {}", self.log_level)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = WorkerConfig::default();
        assert_eq!(config.default_title, "新通知");
        assert_eq!(config.default_body, "您有一条新消息");
        assert_eq!(config.default_icon, "/static/icon.png");
        assert_eq!(config.default_badge, "/static/icon.png");
        assert_eq!(config.default_tag, "vapid-demo");
        assert_eq!(config.vibrate, vec![200, 100, 200]);
        assert_eq!(config.fallback_url, "/");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = WorkerConfig::from_json(r#"{"defaultTag":"news","vibrate":[50]}"#)
            .expect("valid config");
        assert_eq!(config.default_tag, "news");
        assert_eq!(config.vibrate, vec![50]);
        assert_eq!(config.default_title, "新通知");
        assert_eq!(config.open_action_label, "Open");
    }

    #[test]
    fn test_empty_object_is_default() {
        let config = WorkerConfig::from_json("{}").expect("valid config");
        assert_eq!(config, WorkerConfig::default());
    }

    #[test]
    fn test_rejects_empty_title() {
        let err = WorkerConfig::from_json(r#"{"defaultTitle":""}"#).unwrap_err();
        assert!(matches!(err, WorkerError::Config(_)));
    }

    #[test]
    fn test_rejects_empty_fallback_url() {
        let err = WorkerConfig::from_json(r#"{"fallbackUrl":""}"#).unwrap_err();
        assert!(matches!(err, WorkerError::Config(_)));
    }

    #[test]
    fn test_rejects_unknown_log_level() {
        let err = WorkerConfig::from_json(r#"{"logLevel":"chatty"}"#).unwrap_err();
        assert_eq!(err, WorkerError::Config("unknown logLevel: chatty".to_string()));
    }

    #[test]
    fn test_level_filter_is_case_insensitive() {
        let config = WorkerConfig::from_json(r#"{"logLevel":"DEBUG"}"#).expect("valid config");
        assert_eq!(config.level_filter(), Ok(log::LevelFilter::Debug));
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(WorkerConfig::from_json("not json").is_err());
    }
}
