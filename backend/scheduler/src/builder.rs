//! Compose expressions field by field, plus a catalog of common presets.

use cronlens_core::{CronSyntaxError, FieldKind, ParsedCron};
use serde::Serialize;

use crate::cron_parser::{parse_expression, parse_field};

/// A named, ready-made expression.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Preset {
    pub name: &'static str,
    pub expression: &'static str,
}

pub const PRESETS: &[Preset] = &[
    Preset {
        name: "Every minute",
        expression: "* * * * *",
    },
    Preset {
        name: "Every 30 seconds",
        expression: "*/30 * * * * *",
    },
    Preset {
        name: "Every 5 minutes",
        expression: "*/5 * * * *",
    },
    Preset {
        name: "Every 15 minutes",
        expression: "*/15 * * * *",
    },
    Preset {
        name: "Hourly",
        expression: "0 * * * *",
    },
    Preset {
        name: "Daily at midnight",
        expression: "0 0 * * *",
    },
    Preset {
        name: "Weekdays at 09:00",
        expression: "0 9 * * 1-5",
    },
    Preset {
        name: "Weekly on Sunday",
        expression: "0 0 * * 0",
    },
    Preset {
        name: "Monthly on the 1st",
        expression: "0 0 1 * *",
    },
    Preset {
        name: "Yearly on January 1st",
        expression: "0 0 1 1 *",
    },
];

/// Look up a preset by name, ignoring case.
pub fn find_preset(name: &str) -> Option<&'static Preset> {
    PRESETS.iter().find(|p| p.name.eq_ignore_ascii_case(name.trim()))
}

/// Builds an expression from per-field tokens. Unset fields default to `*`;
/// the seconds field is only emitted when set.
#[derive(Debug, Clone, Default)]
pub struct CronBuilder {
    second: Option<String>,
    minute: Option<String>,
    hour: Option<String>,
    day_of_month: Option<String>,
    month: Option<String>,
    day_of_week: Option<String>,
}

impl CronBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, kind: FieldKind, token: impl Into<String>) -> Self {
        let token = Some(token.into());
        match kind {
            FieldKind::Second => self.second = token,
            FieldKind::Minute => self.minute = token,
            FieldKind::Hour => self.hour = token,
            FieldKind::DayOfMonth => self.day_of_month = token,
            FieldKind::Month => self.month = token,
            FieldKind::DayOfWeek => self.day_of_week = token,
        }
        self
    }

    pub fn second(self, token: impl Into<String>) -> Self {
        self.set(FieldKind::Second, token)
    }

    pub fn minute(self, token: impl Into<String>) -> Self {
        self.set(FieldKind::Minute, token)
    }

    pub fn hour(self, token: impl Into<String>) -> Self {
        self.set(FieldKind::Hour, token)
    }

    pub fn day_of_month(self, token: impl Into<String>) -> Self {
        self.set(FieldKind::DayOfMonth, token)
    }

    pub fn month(self, token: impl Into<String>) -> Self {
        self.set(FieldKind::Month, token)
    }

    pub fn day_of_week(self, token: impl Into<String>) -> Self {
        self.set(FieldKind::DayOfWeek, token)
    }

    fn token(&self, kind: FieldKind) -> Option<&str> {
        match kind {
            FieldKind::Second => self.second.as_deref(),
            FieldKind::Minute => self.minute.as_deref(),
            FieldKind::Hour => self.hour.as_deref(),
            FieldKind::DayOfMonth => self.day_of_month.as_deref(),
            FieldKind::Month => self.month.as_deref(),
            FieldKind::DayOfWeek => self.day_of_week.as_deref(),
        }
    }

    /// Assemble the expression, checking each supplied field on the way.
    pub fn build(&self) -> Result<String, CronSyntaxError> {
        let mut parts = Vec::with_capacity(6);
        for kind in FieldKind::ALL {
            let token = match self.token(kind) {
                Some(token) => token.trim(),
                None if kind == FieldKind::Second => continue,
                None => "*",
            };
            if token.contains(char::is_whitespace) {
                return Err(CronSyntaxError::UnsupportedToken {
                    label: kind.label(),
                    token: token.to_string(),
                });
            }
            parse_field(token, kind)?;
            parts.push(token);
        }
        Ok(parts.join(" "))
    }

    /// Assemble and parse in one step.
    pub fn parse(&self) -> Result<ParsedCron, CronSyntaxError> {
        parse_expression(&self.build()?)
    }
}
