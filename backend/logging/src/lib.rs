//! Structured logging for cronlens.
//!
//! Console output on stderr, optional rolling NDJSON files, and a typed
//! record of each engine action.

pub mod event_logger;
pub mod logger;

pub use event_logger::{log_action, ActionEvent, ActionKind, ActionOutcome};
pub use logger::init_logger;
