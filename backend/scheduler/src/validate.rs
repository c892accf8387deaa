//! Top-level entry point: parse, describe and preview in one call.

use chrono::{Local, NaiveDateTime};
use cronlens_core::{CronReport, CronSyntaxError, ValidationResult};
use tracing::debug;

use crate::cron_parser::parse_expression;
use crate::describe::describe;
use crate::next_run::next_runs;

/// Number of upcoming runs included in a report.
pub const DEFAULT_PREVIEW_COUNT: usize = 5;

/// Validate `expression` against the local wall clock.
pub fn validate_cron(expression: &str) -> ValidationResult {
    validate_cron_at(expression, Local::now().naive_local())
}

/// Validate `expression`, computing next runs relative to `now`.
pub fn validate_cron_at(expression: &str, now: NaiveDateTime) -> ValidationResult {
    match build_report(expression, now, DEFAULT_PREVIEW_COUNT) {
        Ok(report) => ValidationResult::Valid(report),
        Err(e) => {
            debug!(expression, error = %e, "Rejected cron expression");
            ValidationResult::Invalid {
                error: e.to_string(),
            }
        }
    }
}

/// Parse, describe and preview `count` runs, propagating the parse error.
pub fn build_report(
    expression: &str,
    now: NaiveDateTime,
    count: usize,
) -> Result<CronReport, CronSyntaxError> {
    let parsed = parse_expression(expression)?;
    let summary = describe(&parsed);
    let next_runs = next_runs(&parsed, now, count);
    Ok(CronReport {
        parsed,
        summary,
        next_runs,
    })
}
