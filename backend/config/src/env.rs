//! Environment variable substitution for config values.
//!
//! Supports `${VAR_NAME}` in string values, resolved at load time. Only
//! uppercase `[A-Z_][A-Z0-9_]*` names are matched. `$${VAR}` escapes to a
//! literal `${VAR}`.

use anyhow::{bail, Result};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde_json::Value;
use std::collections::HashMap;

/// A reference, optionally preceded by the `$` escape.
static ENV_VAR_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\$?)\$\{([A-Z_][A-Z0-9_]*)\}").unwrap());

/// Error returned for missing env vars.
#[derive(Debug, thiserror::Error)]
#[error("Missing env var \"{var_name}\" referenced at config path: {config_path}")]
pub struct MissingEnvVarError {
    pub var_name: String,
    pub config_path: String,
}

/// Substitute `${VAR}` references using the process environment.
pub fn resolve_env_vars(value: &Value) -> Result<Value> {
    substitute_value(value, &std::env::vars().collect(), "")
}

/// Substitute env vars using a provided map.
pub fn resolve_env_vars_with(value: &Value, env: &HashMap<String, String>) -> Result<Value> {
    substitute_value(value, env, "")
}

fn substitute_value(value: &Value, env: &HashMap<String, String>, path: &str) -> Result<Value> {
    match value {
        Value::String(s) => Ok(Value::String(substitute_string(s, env, path)?)),
        Value::Array(arr) => arr
            .iter()
            .enumerate()
            .map(|(i, v)| substitute_value(v, env, &format!("{path}[{i}]")))
            .collect::<Result<Vec<_>>>()
            .map(Value::Array),
        Value::Object(map) => {
            let mut result = serde_json::Map::new();
            for (k, v) in map {
                let child_path = if path.is_empty() {
                    k.clone()
                } else {
                    format!("{path}.{k}")
                };
                result.insert(k.clone(), substitute_value(v, env, &child_path)?);
            }
            Ok(Value::Object(result))
        }
        other => Ok(other.clone()),
    }
}

fn substitute_string(s: &str, env: &HashMap<String, String>, path: &str) -> Result<String> {
    if !s.contains('$') {
        return Ok(s.to_string());
    }

    let mut missing: Option<MissingEnvVarError> = None;
    let substituted = ENV_VAR_PATTERN.replace_all(s, |caps: &Captures| {
        let var_name = &caps[2];
        if !caps[1].is_empty() {
            return format!("${{{var_name}}}");
        }
        match env.get(var_name) {
            Some(val) if !val.is_empty() => val.clone(),
            _ => {
                if missing.is_none() {
                    missing = Some(MissingEnvVarError {
                        var_name: var_name.to_string(),
                        config_path: path.to_string(),
                    });
                }
                String::new()
            }
        }
    });

    if let Some(err) = missing {
        bail!(err);
    }
    Ok(substituted.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn substitutes_simple_var() {
        let v = json!({"logging": {"dir": "${LOG_ROOT}/cronlens"}});
        let result = resolve_env_vars_with(&v, &env(&[("LOG_ROOT", "/var/log")])).unwrap();
        assert_eq!(result["logging"]["dir"], "/var/log/cronlens");
    }

    #[test]
    fn error_on_missing_var() {
        let v = json!({"preview": {"timezone": "${CRONLENS_TZ}"}});
        let err = resolve_env_vars_with(&v, &HashMap::new()).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("CRONLENS_TZ"));
        assert!(message.contains("preview.timezone"));
    }

    #[test]
    fn empty_var_counts_as_missing() {
        let v = json!({"a": "${EMPTY}"});
        assert!(resolve_env_vars_with(&v, &env(&[("EMPTY", "")])).is_err());
    }

    #[test]
    fn escaped_reference_is_literal() {
        let v = json!({"a": "$${HOME} and ${USER_NAME}"});
        let result = resolve_env_vars_with(&v, &env(&[("USER_NAME", "ops")])).unwrap();
        assert_eq!(result["a"], "${HOME} and ops");
    }

    #[test]
    fn passthrough_non_strings_and_lowercase_names() {
        let v = json!({"count": 7, "color": true, "s": "${lower}"});
        let result = resolve_env_vars_with(&v, &HashMap::new()).unwrap();
        assert_eq!(result, v);
    }

    #[test]
    fn substitutes_inside_arrays() {
        let v = json!({"list": ["${A_VAR}", "x"]});
        let result = resolve_env_vars_with(&v, &env(&[("A_VAR", "1")])).unwrap();
        assert_eq!(result["list"][0], "1");
    }
}
