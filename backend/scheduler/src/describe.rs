//! Plain-English summaries of parsed cron expressions.

use std::collections::BTreeSet;

use cronlens_core::{FieldKind, ParsedCron, ParsedField};

const WEEKDAYS: [u32; 5] = [1, 2, 3, 4, 5];
const WEEKEND: [u32; 2] = [0, 6];

/// English ordinal suffix: 1st, 2nd, 3rd, 4th, 11th, 12th, 13th, 21st.
pub fn to_ordinal(n: u32) -> String {
    let suffix = match (n % 100, n % 10) {
        (11..=13, _) => "th",
        (_, 1) => "st",
        (_, 2) => "nd",
        (_, 3) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}

/// Common difference of an arithmetic progression of two or more values.
fn uniform_step(values: &BTreeSet<u32>) -> Option<u32> {
    let sorted: Vec<u32> = values.iter().copied().collect();
    let step = sorted.get(1)? - sorted[0];
    sorted
        .windows(2)
        .all(|pair| pair[1] - pair[0] == step)
        .then_some(step)
}

/// Step of a progression that starts at the domain minimum.
fn anchored_step(field: &ParsedField, kind: FieldKind) -> Option<u32> {
    if field.first() != Some(kind.config().min) {
        return None;
    }
    uniform_step(&field.values)
}

fn format_list(field: &ParsedField, kind: FieldKind) -> Vec<String> {
    let cfg = kind.config();
    field.values.iter().map(|v| cfg.format_value(*v)).collect()
}

/// Generic description of a single field.
pub fn describe_field(field: &ParsedField, kind: FieldKind) -> String {
    let cfg = kind.config();
    if field.covers_domain(kind) {
        return format!("every {}", cfg.unit_singular);
    }
    if let Some(value) = field.single() {
        return format!("{} {}", cfg.unit_singular, cfg.format_value(value));
    }
    match uniform_step(&field.values) {
        Some(1) => {
            let first = field.values.first().copied().unwrap_or(cfg.min);
            let last = field.values.last().copied().unwrap_or(cfg.max);
            format!(
                "every {} from {} through {}",
                cfg.unit_singular,
                cfg.format_value(first),
                cfg.format_value(last)
            )
        }
        Some(step) => format!("every {step} {}", cfg.unit_plural),
        None => format!("{} [{}]", cfg.unit_plural, format_list(field, kind).join(", ")),
    }
}

fn describe_seconds_of_minute(second: &ParsedField) -> String {
    if uniform_step(&second.values).is_some() {
        describe_field(second, FieldKind::Second)
    } else {
        format!(
            "at {} of every minute",
            describe_field(second, FieldKind::Second)
        )
    }
}

fn append_seconds(base: String, parsed: &ParsedCron) -> String {
    if !parsed.has_seconds {
        return base;
    }
    match parsed.second.single() {
        Some(second) => format!("{base}, at second {second}"),
        None => format!("{base}, {}", describe_field(&parsed.second, FieldKind::Second)),
    }
}

/// Time-of-day part of the summary.
pub fn describe_time(parsed: &ParsedCron) -> String {
    let minute_full = parsed.minute.covers_domain(FieldKind::Minute);
    let hour_full = parsed.hour.covers_domain(FieldKind::Hour);
    let minute = parsed.minute.single();
    let hour = parsed.hour.single();

    match (minute_full, hour_full, minute, hour) {
        (true, true, _, _) => {
            if !parsed.has_seconds {
                "every minute".to_string()
            } else if parsed.second.covers_domain(FieldKind::Second) {
                "every second".to_string()
            } else if let Some(second) = parsed.second.single() {
                format!("at second {second} of every minute")
            } else {
                describe_seconds_of_minute(&parsed.second)
            }
        }
        (false, true, Some(m), _) => append_seconds(format!("at minute {m} of every hour"), parsed),
        (true, false, _, Some(h)) => {
            append_seconds(format!("every minute during the {h:02}:00 hour"), parsed)
        }
        (false, false, Some(m), Some(h)) => match parsed.second.single() {
            Some(s) if parsed.has_seconds => format!("at {h:02}:{m:02}:{s:02}"),
            _ => append_seconds(format!("at {h:02}:{m:02}"), parsed),
        },
        _ => {
            let mut parts = Vec::with_capacity(3);
            if parsed.has_seconds {
                parts.push(describe_field(&parsed.second, FieldKind::Second));
            }
            parts.push(describe_field(&parsed.minute, FieldKind::Minute));
            if !hour_full {
                parts.push(describe_field(&parsed.hour, FieldKind::Hour));
            }
            parts.join(" and ")
        }
    }
}

pub fn describe_day_of_month(field: &ParsedField) -> String {
    let kind = FieldKind::DayOfMonth;
    if field.covers_domain(kind) {
        return "every day of the month".to_string();
    }
    if let Some(day) = field.single() {
        return format!("on the {} day of the month", to_ordinal(day));
    }
    match anchored_step(field, kind) {
        Some(1) => {
            let last = field.values.last().copied().unwrap_or(1);
            format!("on the 1st through the {} day of the month", to_ordinal(last))
        }
        Some(step) => format!("every {} day of the month", to_ordinal(step)),
        None => {
            let days: Vec<String> = field.values.iter().map(|d| to_ordinal(*d)).collect();
            format!("on the {} day of the month", days.join(", "))
        }
    }
}

pub fn describe_month(field: &ParsedField) -> String {
    let kind = FieldKind::Month;
    if field.covers_domain(kind) {
        return "every month".to_string();
    }
    if let Some(month) = field.single() {
        return format!("in {}", kind.config().format_value(month));
    }
    match anchored_step(field, kind) {
        Some(step) if step > 1 => format!("every {step} months"),
        _ => format!("in {}", format_list(field, kind).join(", ")),
    }
}

pub fn describe_day_of_week(field: &ParsedField) -> String {
    let kind = FieldKind::DayOfWeek;
    if field.covers_domain(kind) {
        return "every day of the week".to_string();
    }
    if let Some(day) = field.single() {
        return format!("on {}", kind.config().format_value(day));
    }
    if field.values.iter().eq(WEEKDAYS.iter()) {
        return "on weekdays".to_string();
    }
    if field.values.iter().eq(WEEKEND.iter()) {
        return "on weekends".to_string();
    }
    format!("on {}", format_list(field, kind).join(", "))
}

/// One-sentence summary of when the expression fires.
///
/// Day-of-month and day-of-week are only mentioned when restricted; when
/// both are, either one matching is enough (classic cron semantics).
pub fn describe(parsed: &ParsedCron) -> String {
    let time = describe_time(parsed);
    let month = describe_month(&parsed.month);

    let day = match (parsed.day_of_month.is_wildcard, parsed.day_of_week.is_wildcard) {
        (true, true) => None,
        (false, true) => Some(describe_day_of_month(&parsed.day_of_month)),
        (true, false) => Some(describe_day_of_week(&parsed.day_of_week)),
        (false, false) => Some(format!(
            "{} and {}",
            describe_day_of_month(&parsed.day_of_month),
            describe_day_of_week(&parsed.day_of_week)
        )),
    };

    match day {
        Some(day) => format!("It runs {time}, {day}, {month}."),
        None => format!("It runs {time}, {month}."),
    }
}
