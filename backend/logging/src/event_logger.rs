//! Action Event Logger
//!
//! One structured event per validate/explain/preview action, routed
//! through `tracing` under the `cron_actions` target.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    Validate,
    Explain,
    Preview,
    Build,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ActionOutcome {
    Valid { next_runs: usize },
    Invalid { error: String },
}

#[derive(Debug, Serialize)]
pub struct ActionEvent {
    pub action: ActionKind,
    pub expression: String,
    pub timestamp: DateTime<Utc>,
    #[serde(flatten)]
    pub outcome: ActionOutcome,
}

impl ActionEvent {
    pub fn new(action: ActionKind, expression: &str, outcome: ActionOutcome) -> Self {
        Self {
            action,
            expression: expression.to_string(),
            timestamp: Utc::now(),
            outcome,
        }
    }
}

/// Record one engine action.
pub fn log_action(event: &ActionEvent) {
    let payload = serde_json::to_string(event).unwrap_or_default();
    info!(target: "cron_actions", action = ?event.action, payload = %payload, "Cron action");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_serializes_flat() {
        let event = ActionEvent::new(
            ActionKind::Preview,
            "*/5 * * * *",
            ActionOutcome::Valid { next_runs: 5 },
        );
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["action"], "preview");
        assert_eq!(json["status"], "valid");
        assert_eq!(json["next_runs"], 5);
        assert_eq!(json["expression"], "*/5 * * * *");
        log_action(&event);
    }

    #[test]
    fn invalid_outcome_carries_error() {
        let event = ActionEvent::new(
            ActionKind::Validate,
            "* * * *",
            ActionOutcome::Invalid {
                error: "Cron must have 5 or 6 fields. Received 4.".into(),
            },
        );
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["status"], "invalid");
        assert!(json["error"].as_str().unwrap().contains("Received 4"));
    }
}
