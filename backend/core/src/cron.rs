use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::types::FieldKind;

/// The resolved set of values one cron field matches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedField {
    pub values: BTreeSet<u32>,
    /// True only when the token was the bare `*`. A token such as `0-59`
    /// covers the whole domain but is not a wildcard.
    pub is_wildcard: bool,
}

impl ParsedField {
    pub fn new(values: BTreeSet<u32>, is_wildcard: bool) -> Self {
        Self {
            values,
            is_wildcard,
        }
    }

    /// The full domain of `kind`, flagged as a wildcard.
    pub fn wildcard(kind: FieldKind) -> Self {
        let cfg = kind.config();
        Self::new((cfg.min..=cfg.max).collect(), true)
    }

    pub fn contains(&self, value: u32) -> bool {
        self.values.contains(&value)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn first(&self) -> Option<u32> {
        self.values.first().copied()
    }

    /// The single value, when exactly one is matched.
    pub fn single(&self) -> Option<u32> {
        if self.values.len() == 1 {
            self.first()
        } else {
            None
        }
    }

    /// Whether every value of the field's domain is matched.
    pub fn covers_domain(&self, kind: FieldKind) -> bool {
        self.values.len() == kind.config().domain_size()
    }
}

/// The normalized form of one cron expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedCron {
    pub second: ParsedField,
    pub minute: ParsedField,
    pub hour: ParsedField,
    pub day_of_month: ParsedField,
    pub month: ParsedField,
    pub day_of_week: ParsedField,
    pub has_seconds: bool,
    /// Tokens exactly as supplied, keyed by field. A 5-field expression has
    /// no `second` entry.
    pub raw: BTreeMap<FieldKind, String>,
}

impl ParsedCron {
    pub fn field(&self, kind: FieldKind) -> &ParsedField {
        match kind {
            FieldKind::Second => &self.second,
            FieldKind::Minute => &self.minute,
            FieldKind::Hour => &self.hour,
            FieldKind::DayOfMonth => &self.day_of_month,
            FieldKind::Month => &self.month,
            FieldKind::DayOfWeek => &self.day_of_week,
        }
    }

    pub fn raw_token(&self, kind: FieldKind) -> Option<&str> {
        self.raw.get(&kind).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wildcard_spans_domain() {
        let field = ParsedField::wildcard(FieldKind::DayOfMonth);
        assert!(field.is_wildcard);
        assert_eq!(field.first(), Some(1));
        assert_eq!(field.len(), 31);
        assert!(field.covers_domain(FieldKind::DayOfMonth));
        assert_eq!(field.single(), None);
    }

    #[test]
    fn single_value() {
        let field = ParsedField::new([7].into_iter().collect(), false);
        assert_eq!(field.single(), Some(7));
        assert!(field.contains(7));
        assert!(!field.contains(8));
        assert!(!field.covers_domain(FieldKind::Hour));
    }
}
