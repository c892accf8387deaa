//! The cronlens engine: parse cron expressions, explain them in English and
//! preview upcoming runs.

pub mod builder;
pub mod cron_parser;
pub mod describe;
pub mod next_run;
pub mod validate;

pub use builder::{find_preset, CronBuilder, Preset, PRESETS};
pub use cron_parser::{parse_expression, parse_field};
pub use describe::describe;
pub use next_run::{matches, matches_without_second, next_runs, MAX_SWEEP_ITERATIONS};
pub use validate::{build_report, validate_cron, validate_cron_at, DEFAULT_PREVIEW_COUNT};
