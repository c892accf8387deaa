//! Config defaults: fills unset fields of a freshly loaded config.

use crate::schema::{CronlensConfig, LoggingConfig, OutputConfig, PreviewConfig};

/// Number of upcoming runs shown by `preview`.
pub const DEFAULT_PREVIEW_COUNT: usize = 5;

/// Reference clock for previews.
pub const DEFAULT_TIMEZONE: &str = "local";

pub const DEFAULT_OUTPUT_FORMAT: &str = "text";

pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Apply all defaults to a freshly loaded config.
pub fn apply_all_defaults(config: CronlensConfig) -> CronlensConfig {
    let config = apply_preview_defaults(config);
    let config = apply_output_defaults(config);
    apply_logging_defaults(config)
}

fn apply_preview_defaults(mut config: CronlensConfig) -> CronlensConfig {
    let preview = config.preview.get_or_insert_with(PreviewConfig::default);
    if preview.count.is_none() {
        preview.count = Some(DEFAULT_PREVIEW_COUNT);
    }
    if preview.timezone.is_none() {
        preview.timezone = Some(DEFAULT_TIMEZONE.to_string());
    }
    config
}

fn apply_output_defaults(mut config: CronlensConfig) -> CronlensConfig {
    let output = config.output.get_or_insert_with(OutputConfig::default);
    if output.format.is_none() {
        output.format = Some(DEFAULT_OUTPUT_FORMAT.to_string());
    }
    config
}

fn apply_logging_defaults(mut config: CronlensConfig) -> CronlensConfig {
    let logging = config.logging.get_or_insert_with(LoggingConfig::default);
    if logging.level.is_none() {
        logging.level = Some(DEFAULT_LOG_LEVEL.to_string());
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fills_empty_config() {
        let cfg = apply_all_defaults(CronlensConfig::default());
        let preview = cfg.preview.unwrap();
        assert_eq!(preview.count, Some(DEFAULT_PREVIEW_COUNT));
        assert_eq!(preview.timezone.as_deref(), Some("local"));
        assert_eq!(cfg.output.unwrap().format.as_deref(), Some("text"));
        assert_eq!(cfg.logging.unwrap().level.as_deref(), Some("info"));
    }

    #[test]
    fn does_not_override_user_values() {
        let cfg = CronlensConfig {
            preview: Some(PreviewConfig {
                count: Some(12),
                ..Default::default()
            }),
            ..Default::default()
        };
        let cfg = apply_all_defaults(cfg);
        let preview = cfg.preview.unwrap();
        assert_eq!(preview.count, Some(12));
        assert_eq!(preview.timezone.as_deref(), Some("local"));
    }
}
