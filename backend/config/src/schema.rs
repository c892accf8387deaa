//! cronlens configuration schema.
//!
//! Every section and field is optional in the file; `defaults` fills the
//! gaps and the accessors below read the effective values.

use serde::{Deserialize, Serialize};

use crate::defaults::{
    DEFAULT_LOG_LEVEL, DEFAULT_OUTPUT_FORMAT, DEFAULT_PREVIEW_COUNT, DEFAULT_TIMEZONE,
};

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CronlensConfig {
    /// Next-run preview settings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview: Option<PreviewConfig>,

    /// Command output settings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<OutputConfig>,

    /// Logging configuration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>, // "local" | "utc"
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>, // "text" | "json"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoggingConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    /// Directory for rolling NDJSON log files; console only when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<String>,
}

impl CronlensConfig {
    pub fn preview_count(&self) -> usize {
        self.preview
            .as_ref()
            .and_then(|p| p.count)
            .unwrap_or(DEFAULT_PREVIEW_COUNT)
    }

    pub fn timezone(&self) -> &str {
        self.preview
            .as_ref()
            .and_then(|p| p.timezone.as_deref())
            .unwrap_or(DEFAULT_TIMEZONE)
    }

    pub fn output_format(&self) -> &str {
        self.output
            .as_ref()
            .and_then(|o| o.format.as_deref())
            .unwrap_or(DEFAULT_OUTPUT_FORMAT)
    }

    /// Colour is on unless explicitly disabled.
    pub fn color(&self) -> bool {
        self.output.as_ref().and_then(|o| o.color).unwrap_or(true)
    }

    pub fn log_level(&self) -> &str {
        self.logging
            .as_ref()
            .and_then(|l| l.level.as_deref())
            .unwrap_or(DEFAULT_LOG_LEVEL)
    }

    /// Directory for the JSON log file; blank values disable file logging.
    pub fn log_dir(&self) -> Option<&str> {
        self.logging
            .as_ref()
            .and_then(|l| l.dir.as_deref())
            .filter(|dir| !dir.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_fall_back_to_defaults() {
        let cfg = CronlensConfig::default();
        assert_eq!(cfg.preview_count(), 5);
        assert_eq!(cfg.timezone(), "local");
        assert_eq!(cfg.output_format(), "text");
        assert!(cfg.color());
        assert_eq!(cfg.log_level(), "info");
        assert_eq!(cfg.log_dir(), None);
    }

    #[test]
    fn blank_log_dir_disables_file_logging() {
        for dir in ["", "   "] {
            let cfg = CronlensConfig {
                logging: Some(LoggingConfig {
                    level: None,
                    dir: Some(dir.into()),
                }),
                ..Default::default()
            };
            assert_eq!(cfg.log_dir(), None);
        }
    }

    #[test]
    fn parses_camel_case_yaml() {
        let yaml = "preview:\n  count: 10\n  timezone: utc\noutput:\n  format: json\n  color: false\n";
        let cfg: CronlensConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(cfg.preview_count(), 10);
        assert_eq!(cfg.timezone(), "utc");
        assert_eq!(cfg.output_format(), "json");
        assert!(!cfg.color());
    }
}
