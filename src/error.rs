use std::time::Duration;

use thiserror::Error;

use crate::domain::error::DomainError;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Solver failures unrelated to problem structure.
///
/// Infeasibility is not an error: it is a legitimate outcome reported through
/// [`crate::domain::SolveOutcome`]. These variants cover faults that should
/// never occur for a well-formed transportation model.
#[derive(Error, Debug)]
pub enum SolverError {
    /// The solve did not finish within the configured wall-clock budget.
    #[error("solve exceeded the time budget of {limit:?}")]
    Timeout { limit: Duration },

    /// The objective is unbounded. Every variable in the transportation
    /// model is capacity-constrained, so this indicates a broken formulation
    /// or a solver fault rather than a property of the input.
    #[error("objective reported unbounded; formulation or solver fault")]
    Unbounded,

    /// The backend failed for reasons other than the problem itself.
    #[error("solver backend failure: {0}")]
    Backend(String),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Solver(#[from] SolverError),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),

    #[error("connection error: {0}")]
    Connection(String),

    #[error("database error: {0}")]
    Database(String),

    #[error("routing error: {0}")]
    Routing(String),

    #[error("no client is configured; run `haulplan client set` or pass --plan")]
    MissingClient,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
