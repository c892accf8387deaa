use thiserror::Error;

/// A cron expression that cannot be parsed.
///
/// The `Display` text of every variant is the user-facing message and is
/// stable; callers may surface it verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CronSyntaxError {
    #[error("Cron must have 5 or 6 fields. Received {0}.")]
    FieldCount(usize),

    #[error("{label}: field is empty.")]
    EmptyField { label: &'static str },

    #[error("{label}: empty list segment found.")]
    EmptySegment { label: &'static str },

    #[error("{label}: step must be a positive integer.")]
    InvalidStep { label: &'static str },

    #[error("{label}: value \"{value}\" is out of range ({range}).")]
    OutOfRange {
        label: &'static str,
        value: String,
        range: String,
    },

    #[error("{label}: range start must be <= range end.")]
    InvertedRange { label: &'static str },

    #[error("{label}: unsupported token \"{token}\". Use *, */n, a, a-b, a-b/n, or comma lists.")]
    UnsupportedToken { label: &'static str, token: String },

    #[error("{label}: no valid values resolved.")]
    NoValues { label: &'static str },
}

/// Top-level error type for the cronlens tooling around the engine.
#[derive(Debug, Error)]
pub enum CronlensError {
    #[error(transparent)]
    Syntax(#[from] CronSyntaxError),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("invalid reference time \"{0}\": expected YYYY-MM-DDTHH:MM:SS or RFC 3339")]
    InvalidReferenceTime(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
