use chrono::{DateTime, Local, NaiveDateTime, Utc};
use cronlens_config::CronlensConfig;
use cronlens_core::CronlensError;

use crate::terminal_output::supports_color;

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Which wall clock next-run previews are computed against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Clock {
    Local,
    Utc,
}

impl Clock {
    pub fn from_name(name: &str) -> Result<Self, CronlensError> {
        match name.to_ascii_lowercase().as_str() {
            "local" => Ok(Clock::Local),
            "utc" => Ok(Clock::Utc),
            other => Err(CronlensError::Config(format!(
                "unknown timezone \"{other}\"; expected local or utc"
            ))),
        }
    }

    pub fn now(self) -> NaiveDateTime {
        match self {
            Clock::Local => Local::now().naive_local(),
            Clock::Utc => Utc::now().naive_utc(),
        }
    }

    fn convert(self, t: DateTime<chrono::FixedOffset>) -> NaiveDateTime {
        match self {
            Clock::Local => t.with_timezone(&Local).naive_local(),
            Clock::Utc => t.naive_utc(),
        }
    }
}

/// Parse a `--at` reference instant.
///
/// Naive forms are taken as wall-clock time on `clock`; RFC 3339 values
/// carry their own offset and are converted onto `clock`.
pub fn parse_reference_time(text: &str, clock: Clock) -> Result<NaiveDateTime, CronlensError> {
    let text = text.trim();
    for format in NAIVE_FORMATS {
        if let Ok(t) = NaiveDateTime::parse_from_str(text, format) {
            return Ok(t);
        }
    }
    DateTime::parse_from_rfc3339(text)
        .map(|t| clock.convert(t))
        .map_err(|_| CronlensError::InvalidReferenceTime(text.to_string()))
}

/// Effective settings for one invocation: config file values overridden by
/// command-line flags.
#[derive(Debug, Clone)]
pub struct Settings {
    pub now: NaiveDateTime,
    pub preview_count: usize,
    pub json: bool,
    pub color: bool,
}

impl Settings {
    pub fn resolve(
        config: &CronlensConfig,
        at: Option<&str>,
        json: bool,
    ) -> Result<Self, CronlensError> {
        let clock = Clock::from_name(config.timezone())?;
        let now = match at {
            Some(text) => parse_reference_time(text, clock)?,
            None => clock.now(),
        };
        let json = json || config.output_format() == "json";
        Ok(Self {
            now,
            preview_count: config.preview_count(),
            json,
            color: !json && config.color() && supports_color(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use cronlens_config::{OutputConfig, PreviewConfig};

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, 1)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    #[test]
    fn parses_naive_forms() {
        for text in ["2025-01-01T00:02:00", "2025-01-01 00:02:00", "2025-01-01T00:02"] {
            assert_eq!(parse_reference_time(text, Clock::Utc).unwrap(), at(0, 2, 0));
        }
    }

    #[test]
    fn rfc3339_converts_to_utc_clock() {
        let t = parse_reference_time("2025-01-01T02:02:00+02:00", Clock::Utc).unwrap();
        assert_eq!(t, at(0, 2, 0));
    }

    #[test]
    fn rejects_garbage() {
        let err = parse_reference_time("tomorrow", Clock::Local).unwrap_err();
        assert!(matches!(err, CronlensError::InvalidReferenceTime(_)));
    }

    #[test]
    fn clock_names() {
        assert_eq!(Clock::from_name("UTC").unwrap(), Clock::Utc);
        assert_eq!(Clock::from_name("local").unwrap(), Clock::Local);
        assert!(Clock::from_name("mars").is_err());
    }

    #[test]
    fn resolve_prefers_flags() {
        let config = CronlensConfig {
            preview: Some(PreviewConfig {
                count: Some(8),
                timezone: Some("utc".into()),
            }),
            ..Default::default()
        };
        let settings = Settings::resolve(&config, Some("2025-01-01T00:02:00"), true).unwrap();
        assert_eq!(settings.now, at(0, 2, 0));
        assert_eq!(settings.preview_count, 8);
        assert!(settings.json);
        assert!(!settings.color);
    }

    #[test]
    fn json_format_from_config() {
        let config = CronlensConfig {
            output: Some(OutputConfig {
                format: Some("json".into()),
                color: Some(true),
            }),
            ..Default::default()
        };
        let settings = Settings::resolve(&config, None, false).unwrap();
        assert!(settings.json);
        assert!(!settings.color);
    }
}
