use chrono::NaiveDateTime;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::cron::ParsedCron;

/// Everything derived from one valid expression.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CronReport {
    pub parsed: ParsedCron,
    pub summary: String,
    pub next_runs: Vec<NaiveDateTime>,
}

/// Outcome of validating an expression: all or nothing.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationResult {
    Valid(CronReport),
    Invalid { error: String },
}

impl ValidationResult {
    pub fn is_ok(&self) -> bool {
        matches!(self, ValidationResult::Valid(_))
    }

    pub fn report(&self) -> Option<&CronReport> {
        match self {
            ValidationResult::Valid(report) => Some(report),
            ValidationResult::Invalid { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ValidationResult::Valid(_) => None,
            ValidationResult::Invalid { error } => Some(error),
        }
    }
}

impl Serialize for ValidationResult {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            ValidationResult::Valid(report) => {
                let mut s = serializer.serialize_struct("ValidationResult", 4)?;
                s.serialize_field("ok", &true)?;
                s.serialize_field("parsed", &report.parsed)?;
                s.serialize_field("summary", &report.summary)?;
                s.serialize_field("nextRuns", &report.next_runs)?;
                s.end()
            }
            ValidationResult::Invalid { error } => {
                let mut s = serializer.serialize_struct("ValidationResult", 2)?;
                s.serialize_field("ok", &false)?;
                s.serialize_field("error", error)?;
                s.end()
            }
        }
    }
}
