use std::fmt;

use serde::{Deserialize, Serialize};

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const WEEKDAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

fn month_name(value: u32) -> &'static str {
    MONTH_NAMES
        .get(value.wrapping_sub(1) as usize)
        .copied()
        .unwrap_or("?")
}

fn weekday_name(value: u32) -> &'static str {
    // 7 is an alias for Sunday on input; it is folded before storage but
    // callers formatting raw values still get a sensible name.
    WEEKDAY_NAMES
        .get((value % 7) as usize)
        .copied()
        .unwrap_or("?")
}

/// Static description of one cron field's domain and wording.
#[derive(Debug, Clone, Copy)]
pub struct FieldConfig {
    pub key: &'static str,
    pub label: &'static str,
    pub min: u32,
    /// Largest value stored after normalization.
    pub max: u32,
    pub unit_singular: &'static str,
    pub unit_plural: &'static str,
    pub display_name: Option<fn(u32) -> &'static str>,
}

impl FieldConfig {
    /// Largest value accepted on input. Day-of-week accepts `7` as Sunday.
    pub fn accepted_max(&self) -> u32 {
        if self.key == "dayOfWeek" {
            7
        } else {
            self.max
        }
    }

    /// Number of distinct values in the normalized domain.
    pub fn domain_size(&self) -> usize {
        (self.max - self.min + 1) as usize
    }

    /// Render a value with its display name when the field has one.
    pub fn format_value(&self, value: u32) -> String {
        match self.display_name {
            Some(name) => name(value).to_string(),
            None => value.to_string(),
        }
    }
}

static SECOND: FieldConfig = FieldConfig {
    key: "second",
    label: "Second",
    min: 0,
    max: 59,
    unit_singular: "second",
    unit_plural: "seconds",
    display_name: None,
};

static MINUTE: FieldConfig = FieldConfig {
    key: "minute",
    label: "Minute",
    min: 0,
    max: 59,
    unit_singular: "minute",
    unit_plural: "minutes",
    display_name: None,
};

static HOUR: FieldConfig = FieldConfig {
    key: "hour",
    label: "Hour",
    min: 0,
    max: 23,
    unit_singular: "hour",
    unit_plural: "hours",
    display_name: None,
};

static DAY_OF_MONTH: FieldConfig = FieldConfig {
    key: "dayOfMonth",
    label: "Day of month",
    min: 1,
    max: 31,
    unit_singular: "day",
    unit_plural: "days",
    display_name: None,
};

static MONTH: FieldConfig = FieldConfig {
    key: "month",
    label: "Month",
    min: 1,
    max: 12,
    unit_singular: "month",
    unit_plural: "months",
    display_name: Some(month_name),
};

static DAY_OF_WEEK: FieldConfig = FieldConfig {
    key: "dayOfWeek",
    label: "Day of week",
    min: 0,
    max: 6,
    unit_singular: "weekday",
    unit_plural: "weekdays",
    display_name: Some(weekday_name),
};

/// The six logical cron fields, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldKind {
    Second,
    Minute,
    Hour,
    DayOfMonth,
    Month,
    DayOfWeek,
}

impl FieldKind {
    pub const ALL: [FieldKind; 6] = [
        FieldKind::Second,
        FieldKind::Minute,
        FieldKind::Hour,
        FieldKind::DayOfMonth,
        FieldKind::Month,
        FieldKind::DayOfWeek,
    ];

    /// Field order of a 5-field expression.
    pub const WITHOUT_SECONDS: [FieldKind; 5] = [
        FieldKind::Minute,
        FieldKind::Hour,
        FieldKind::DayOfMonth,
        FieldKind::Month,
        FieldKind::DayOfWeek,
    ];

    pub fn config(self) -> &'static FieldConfig {
        match self {
            FieldKind::Second => &SECOND,
            FieldKind::Minute => &MINUTE,
            FieldKind::Hour => &HOUR,
            FieldKind::DayOfMonth => &DAY_OF_MONTH,
            FieldKind::Month => &MONTH,
            FieldKind::DayOfWeek => &DAY_OF_WEEK,
        }
    }

    pub fn key(self) -> &'static str {
        self.config().key
    }

    pub fn label(self) -> &'static str {
        self.config().label
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
