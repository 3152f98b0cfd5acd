//! Error types for the goal pipeline.
//!
//! [`GoalsError`] is the central error type of the crate. Only hard
//! failures are represented here: per-request HTTP failures and games
//! without scoring data are absorbed where they happen and never surface
//! as a [`GoalsError`].

/// Hard failure raised by the pipeline or its collaborators.
///
/// # Categories
///
/// | Variant          | Caused by                               |
/// |------------------|-----------------------------------------|
/// | `InvalidDate`    | Caller input (date arguments)           |
/// | `Config`         | Caller input (environment)              |
/// | `InvalidClock`   | Upstream contract (goal clock)          |
/// | `Schema`         | Upstream contract (document shape)      |
/// | `HttpClient`     | Local environment (TLS, client setup)   |
/// | `Runtime`        | Local environment (blocking bridge)     |
/// | `Io`             | Local environment (CSV output)          |
#[derive(Debug, thiserror::Error)]
pub enum GoalsError {
    /// A date argument was not in `YYYY-MM-DD` form.
    #[error("invalid date {input:?}: expected YYYY-MM-DD")]
    InvalidDate {
        /// The rejected input.
        input: String,
        /// Underlying chrono parse error.
        #[source]
        source: chrono::ParseError,
    },

    /// A goal clock was not in `MM:SS` form.
    #[error("invalid time in period {0:?}: expected MM:SS")]
    InvalidClock(String),

    /// A fetched document did not have the expected structure.
    #[error("unexpected {context} document shape: {source}")]
    Schema {
        /// Which document kind failed (e.g. `"schedule"`).
        context: &'static str,
        /// Underlying deserialization error.
        #[source]
        source: serde_json::Error,
    },

    /// The HTTP client could not be constructed.
    #[error("http client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// Invalid configuration value.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// The isolated runtime could not be built or its worker panicked.
    #[error("runtime error: {0}")]
    Runtime(String),

    /// Output could not be written.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl GoalsError {
    /// Builds a [`GoalsError::Schema`] for the given document kind.
    #[must_use]
    pub const fn schema(context: &'static str, source: serde_json::Error) -> Self {
        Self::Schema { context, source }
    }

    /// Returns `true` when the error was caused by caller input rather
    /// than by the upstream API or the local environment.
    #[must_use]
    pub const fn is_input_error(&self) -> bool {
        matches!(self, Self::InvalidDate { .. } | Self::Config(_))
    }
}
