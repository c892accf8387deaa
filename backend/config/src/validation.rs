//! Config validation with field paths in every message.

use crate::schema::CronlensConfig;
use thiserror::Error;

pub const MAX_PREVIEW_COUNT: usize = 100;

const TIMEZONES: &[&str] = &["local", "utc"];
const OUTPUT_FORMATS: &[&str] = &["text", "json"];
const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// A config validation error with field path and message.
#[derive(Debug, Error)]
#[error("Config validation error at '{path}': {message}")]
pub struct ConfigValidationError {
    pub path: String,
    pub message: String,
}

/// All errors and warnings found in one pass.
#[derive(Debug, Default)]
pub struct ValidationReport {
    pub errors: Vec<ConfigValidationError>,
    pub warnings: Vec<ConfigValidationError>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    fn error(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.errors.push(ConfigValidationError {
            path: path.into(),
            message: message.into(),
        });
    }

    fn warn(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(ConfigValidationError {
            path: path.into(),
            message: message.into(),
        });
    }
}

pub fn validate(config: &CronlensConfig) -> ValidationReport {
    let mut report = ValidationReport::default();
    validate_preview(config, &mut report);
    validate_output(config, &mut report);
    validate_logging(config, &mut report);
    report
}

fn validate_preview(config: &CronlensConfig, report: &mut ValidationReport) {
    let Some(preview) = &config.preview else { return };
    if let Some(count) = preview.count {
        if count == 0 || count > MAX_PREVIEW_COUNT {
            report.error(
                "preview.count",
                format!("must be between 1 and {MAX_PREVIEW_COUNT}, got {count}"),
            );
        }
    }
    if let Some(tz) = &preview.timezone {
        if !TIMEZONES.contains(&tz.as_str()) {
            report.error(
                "preview.timezone",
                format!("unknown timezone \"{tz}\"; expected one of: local, utc"),
            );
        }
    }
}

fn validate_output(config: &CronlensConfig, report: &mut ValidationReport) {
    let Some(output) = &config.output else { return };
    if let Some(format) = &output.format {
        if !OUTPUT_FORMATS.contains(&format.as_str()) {
            report.error(
                "output.format",
                format!("unknown format \"{format}\"; expected one of: text, json"),
            );
        }
        if format == "json" && output.color == Some(true) {
            report.warn("output.color", "colour is ignored for JSON output");
        }
    }
}

fn validate_logging(config: &CronlensConfig, report: &mut ValidationReport) {
    let Some(logging) = &config.logging else { return };
    if let Some(level) = &logging.level {
        if !LOG_LEVELS.contains(&level.to_ascii_lowercase().as_str()) {
            report.error(
                "logging.level",
                format!("unknown level \"{level}\"; expected trace, debug, info, warn or error"),
            );
        }
    }
    if let Some(dir) = &logging.dir {
        if dir.trim().is_empty() {
            report.warn("logging.dir", "empty directory; file logging disabled");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults::apply_all_defaults;
    use crate::schema::{LoggingConfig, OutputConfig, PreviewConfig};

    #[test]
    fn defaults_are_valid() {
        let report = validate(&apply_all_defaults(CronlensConfig::default()));
        assert!(report.is_valid());
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn rejects_out_of_range_count() {
        for count in [0, MAX_PREVIEW_COUNT + 1] {
            let cfg = CronlensConfig {
                preview: Some(PreviewConfig {
                    count: Some(count),
                    ..Default::default()
                }),
                ..Default::default()
            };
            let report = validate(&cfg);
            assert!(!report.is_valid());
            assert_eq!(report.errors[0].path, "preview.count");
        }
    }

    #[test]
    fn rejects_unknown_enums() {
        let cfg = CronlensConfig {
            preview: Some(PreviewConfig {
                timezone: Some("Mars/Olympus".into()),
                ..Default::default()
            }),
            output: Some(OutputConfig {
                format: Some("xml".into()),
                color: None,
            }),
            logging: Some(LoggingConfig {
                level: Some("loud".into()),
                dir: None,
            }),
        };
        let report = validate(&cfg);
        let paths: Vec<_> = report.errors.iter().map(|e| e.path.as_str()).collect();
        assert_eq!(paths, ["preview.timezone", "output.format", "logging.level"]);
    }

    #[test]
    fn warns_on_color_with_json() {
        let cfg = CronlensConfig {
            output: Some(OutputConfig {
                format: Some("json".into()),
                color: Some(true),
            }),
            ..Default::default()
        };
        let report = validate(&cfg);
        assert!(report.is_valid());
        assert_eq!(report.warnings.len(), 1);
    }
}
