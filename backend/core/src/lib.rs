pub mod cron;
pub mod error;
pub mod report;
pub mod types;

pub use cron::{ParsedCron, ParsedField};
pub use error::{CronSyntaxError, CronlensError};
pub use report::{CronReport, ValidationResult};
pub use types::{FieldConfig, FieldKind};
