//! Validate / Explain / Preview and the builder commands.
//!
//! Each command re-parses the expression from scratch and renders either
//! text or JSON; `main` decides where the output goes.

use anyhow::Result;
use chrono::NaiveDateTime;
use cronlens_core::{FieldKind, ParsedCron};
use cronlens_logging::{log_action, ActionEvent, ActionKind, ActionOutcome};
use cronlens_scheduler::{
    build_report, describe, parse_expression, validate_cron_at, CronBuilder, PRESETS,
};
use serde_json::{json, Value};

use crate::settings::Settings;
use crate::terminal_output::{render_table, Column, Styler};

const RUN_FORMAT: &str = "%Y-%m-%d %H:%M:%S (%a)";

/// Rendered command output and whether the command succeeded.
#[derive(Debug)]
pub struct Output {
    pub text: String,
    pub ok: bool,
}

impl Output {
    fn ok(text: String) -> Self {
        Self { text, ok: true }
    }

    fn failed(text: String) -> Self {
        Self { text, ok: false }
    }
}

fn to_json(value: &Value) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

fn record(action: ActionKind, expression: &str, outcome: ActionOutcome) {
    log_action(&ActionEvent::new(action, expression, outcome));
}

fn invalid(
    action: ActionKind,
    expression: &str,
    error: &str,
    settings: &Settings,
    styler: &Styler,
) -> Result<Output> {
    record(
        action,
        expression,
        ActionOutcome::Invalid {
            error: error.to_string(),
        },
    );
    let text = if settings.json {
        to_json(&json!({ "ok": false, "error": error }))?
    } else {
        styler.error(error)
    };
    Ok(Output::failed(text))
}

fn render_runs(runs: &[NaiveDateTime], styler: &Styler) -> String {
    if runs.is_empty() {
        return styler.warning("No matching time within the next three years.");
    }
    runs.iter()
        .enumerate()
        .map(|(i, run)| format!("  {}. {}", i + 1, run.format(RUN_FORMAT)))
        .collect::<Vec<_>>()
        .join("\n")
}

fn field_table(parsed: &ParsedCron, styler: &Styler) -> String {
    let columns = [
        Column::left("Field"),
        Column::left("Token"),
        Column::left("Values").max_width(48),
    ];
    let rows: Vec<Vec<String>> = FieldKind::ALL
        .iter()
        .map(|kind| {
            let field = parsed.field(*kind);
            let token = match parsed.raw_token(*kind) {
                Some(token) => token.to_string(),
                None => styler.dim("0 (implicit)"),
            };
            let values = if field.is_wildcard {
                "any".to_string()
            } else {
                field
                    .values
                    .iter()
                    .map(u32::to_string)
                    .collect::<Vec<_>>()
                    .join(", ")
            };
            vec![kind.label().to_string(), token, values]
        })
        .collect();
    render_table(styler, &columns, &rows)
}

pub fn validate(expression: &str, settings: &Settings, styler: &Styler) -> Result<Output> {
    let result = validate_cron_at(expression, settings.now);
    let Some(report) = result.report() else {
        let error = result.error().unwrap_or_default();
        return invalid(ActionKind::Validate, expression, error, settings, styler);
    };

    record(
        ActionKind::Validate,
        expression,
        ActionOutcome::Valid {
            next_runs: report.next_runs.len(),
        },
    );
    if settings.json {
        return Ok(Output::ok(to_json(&serde_json::to_value(&result)?)?));
    }
    Ok(Output::ok(format!(
        "{}\n{}\n\n{}\n{}",
        styler.success("Valid cron expression"),
        report.summary,
        styler.bold("Next runs:"),
        render_runs(&report.next_runs, styler)
    )))
}

pub fn explain(expression: &str, settings: &Settings, styler: &Styler) -> Result<Output> {
    let parsed = match parse_expression(expression) {
        Ok(parsed) => parsed,
        Err(e) => {
            return invalid(ActionKind::Explain, expression, &e.to_string(), settings, styler)
        }
    };
    let summary = describe(&parsed);

    record(
        ActionKind::Explain,
        expression,
        ActionOutcome::Valid { next_runs: 0 },
    );
    if settings.json {
        return Ok(Output::ok(to_json(&json!({
            "ok": true,
            "expression": expression.trim(),
            "summary": summary,
            "parsed": parsed,
        }))?));
    }
    Ok(Output::ok(format!(
        "{}\n\n{}",
        styler.bold(&summary),
        field_table(&parsed, styler).trim_end()
    )))
}

pub fn preview(
    expression: &str,
    count: usize,
    settings: &Settings,
    styler: &Styler,
) -> Result<Output> {
    let report = match build_report(expression, settings.now, count) {
        Ok(report) => report,
        Err(e) => {
            return invalid(ActionKind::Preview, expression, &e.to_string(), settings, styler)
        }
    };

    record(
        ActionKind::Preview,
        expression,
        ActionOutcome::Valid {
            next_runs: report.next_runs.len(),
        },
    );
    if settings.json {
        return Ok(Output::ok(to_json(&json!({
            "ok": true,
            "expression": expression.trim(),
            "reference": settings.now,
            "nextRuns": report.next_runs,
        }))?));
    }
    let header = format!(
        "Next {} run(s) after {}",
        count,
        settings.now.format("%Y-%m-%d %H:%M:%S")
    );
    Ok(Output::ok(format!(
        "{}\n{}",
        styler.info(&header),
        render_runs(&report.next_runs, styler)
    )))
}

pub fn presets(settings: &Settings, styler: &Styler) -> Result<Output> {
    let entries: Vec<(&str, &str, String)> = PRESETS
        .iter()
        .map(|preset| {
            let summary = match parse_expression(preset.expression) {
                Ok(parsed) => describe(&parsed),
                Err(e) => e.to_string(),
            };
            (preset.name, preset.expression, summary)
        })
        .collect();

    if settings.json {
        let list: Vec<Value> = entries
            .iter()
            .map(|(name, expression, summary)| {
                json!({ "name": name, "expression": expression, "summary": summary })
            })
            .collect();
        return Ok(Output::ok(to_json(&Value::Array(list))?));
    }

    let columns = [
        Column::left("Name"),
        Column::left("Expression"),
        Column::left("Summary"),
    ];
    let rows: Vec<Vec<String>> = entries
        .into_iter()
        .map(|(name, expression, summary)| {
            vec![name.to_string(), expression.to_string(), summary]
        })
        .collect();
    Ok(Output::ok(
        render_table(styler, &columns, &rows).trim_end().to_string(),
    ))
}

pub fn build(builder: &CronBuilder, settings: &Settings, styler: &Styler) -> Result<Output> {
    let expression = match builder.build() {
        Ok(expression) => expression,
        Err(e) => return invalid(ActionKind::Build, "", &e.to_string(), settings, styler),
    };
    let parsed = match parse_expression(&expression) {
        Ok(parsed) => parsed,
        Err(e) => {
            return invalid(ActionKind::Build, &expression, &e.to_string(), settings, styler)
        }
    };
    let summary = describe(&parsed);

    record(
        ActionKind::Build,
        &expression,
        ActionOutcome::Valid { next_runs: 0 },
    );
    if settings.json {
        return Ok(Output::ok(to_json(&json!({
            "ok": true,
            "expression": expression,
            "summary": summary,
        }))?));
    }
    Ok(Output::ok(format!(
        "{}\n{}",
        styler.bold(&expression),
        summary
    )))
}
