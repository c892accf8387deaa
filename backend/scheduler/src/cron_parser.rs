//! Cron expression parsing.
//!
//! Supports 5-field (min hour dom mon dow) and 6-field (sec min hour dom mon
//! dow) syntax. Each field accepts `*`, `*/n`, `a`, `a-b`, `a-b/n` and comma
//! lists of the non-`*` forms.

use std::collections::{BTreeMap, BTreeSet};

use cronlens_core::{CronSyntaxError, FieldKind, ParsedCron, ParsedField};
use once_cell::sync::Lazy;
use regex::Regex;

static WILDCARD_STEP: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\*/(.*)$").unwrap());
static SINGLE_VALUE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+$").unwrap());
static RANGE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([0-9]+)-([0-9]+)(?:/(.*))?$").unwrap());

/// Seconds field implied by a 5-field expression.
const IMPLICIT_SECOND: &str = "0";

/// Parse one field of a cron expression into its resolved value set.
pub fn parse_field(text: &str, kind: FieldKind) -> Result<ParsedField, CronSyntaxError> {
    let cfg = kind.config();
    let label = cfg.label;
    let text = text.trim();

    if text.is_empty() {
        return Err(CronSyntaxError::EmptyField { label });
    }
    if text == "*" {
        return Ok(ParsedField::wildcard(kind));
    }

    let mut values = BTreeSet::new();
    for segment in text.split(',') {
        let segment = segment.trim();
        if segment.is_empty() {
            return Err(CronSyntaxError::EmptySegment { label });
        }
        parse_segment(segment, kind, &mut values)?;
    }

    if values.is_empty() {
        return Err(CronSyntaxError::NoValues { label });
    }
    Ok(ParsedField::new(values, false))
}

fn parse_segment(
    segment: &str,
    kind: FieldKind,
    values: &mut BTreeSet<u32>,
) -> Result<(), CronSyntaxError> {
    let cfg = kind.config();

    if let Some(caps) = WILDCARD_STEP.captures(segment) {
        let step = parse_step(&caps[1], kind)?;
        values.extend((cfg.min..=cfg.max).step_by(step));
        return Ok(());
    }

    if SINGLE_VALUE.is_match(segment) {
        let value = parse_bounded(segment, kind)?;
        values.insert(fold_value(value, kind));
        return Ok(());
    }

    if let Some(caps) = RANGE.captures(segment) {
        let start = parse_bounded(&caps[1], kind)?;
        let end = parse_bounded(&caps[2], kind)?;
        if start > end {
            return Err(CronSyntaxError::InvertedRange { label: cfg.label });
        }
        let step = match caps.get(3) {
            Some(step) => parse_step(step.as_str(), kind)?,
            None => 1,
        };
        values.extend((start..=end).step_by(step).map(|v| fold_value(v, kind)));
        return Ok(());
    }

    Err(CronSyntaxError::UnsupportedToken {
        label: cfg.label,
        token: segment.to_string(),
    })
}

/// Parse a numeric token and check it against the field's accepted range.
fn parse_bounded(token: &str, kind: FieldKind) -> Result<u32, CronSyntaxError> {
    let cfg = kind.config();
    let max = cfg.accepted_max();
    match token.parse::<u32>() {
        Ok(value) if (cfg.min..=max).contains(&value) => Ok(value),
        _ => Err(CronSyntaxError::OutOfRange {
            label: cfg.label,
            value: token.to_string(),
            range: format!("{}-{}", cfg.min, max),
        }),
    }
}

fn parse_step(token: &str, kind: FieldKind) -> Result<usize, CronSyntaxError> {
    match token.parse::<usize>() {
        Ok(step) if step > 0 => Ok(step),
        _ => Err(CronSyntaxError::InvalidStep {
            label: kind.config().label,
        }),
    }
}

/// Day-of-week 7 is Sunday; store it as 0.
fn fold_value(value: u32, kind: FieldKind) -> u32 {
    if kind == FieldKind::DayOfWeek && value == 7 {
        0
    } else {
        value
    }
}

/// Split an expression into fields and parse each one.
pub fn parse_expression(expr: &str) -> Result<ParsedCron, CronSyntaxError> {
    let tokens: Vec<&str> = expr.split_whitespace().collect();

    let (has_seconds, second_token, rest) = match tokens.len() {
        5 => (false, IMPLICIT_SECOND, &tokens[..]),
        6 => (true, tokens[0], &tokens[1..]),
        n => return Err(CronSyntaxError::FieldCount(n)),
    };

    let mut raw = BTreeMap::new();
    if has_seconds {
        raw.insert(FieldKind::Second, second_token.to_string());
    }
    for (kind, token) in FieldKind::WITHOUT_SECONDS.iter().zip(rest) {
        raw.insert(*kind, token.to_string());
    }

    Ok(ParsedCron {
        second: parse_field(second_token, FieldKind::Second)?,
        minute: parse_field(rest[0], FieldKind::Minute)?,
        hour: parse_field(rest[1], FieldKind::Hour)?,
        day_of_month: parse_field(rest[2], FieldKind::DayOfMonth)?,
        month: parse_field(rest[3], FieldKind::Month)?,
        day_of_week: parse_field(rest[4], FieldKind::DayOfWeek)?,
        has_seconds,
        raw,
    })
}
