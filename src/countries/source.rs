use std::fmt;

use async_trait::async_trait;

use super::types::CountryRecord;

/// Shown for every failure that isn't a clean "no match".
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong with fetching countries";
/// Shown when the service says nothing matched the term.
pub const NOT_FOUND_MESSAGE: &str = "Country not Found";

/// Errors that can occur while looking countries up.
/// Only `NotFound` gets its own user-facing text; the rest collapse into one.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchError {
    /// Client misconfigured (unparseable base URL).
    Config(String),
    /// Network-level failure (timeout, DNS, connection refused).
    Transport(String),
    /// Service answered with a non-success status.
    Status { status: u16, message: String },
    /// Body wasn't a country list or a recognisable envelope.
    Decode(String),
    /// Service answered with its "no match" envelope.
    NotFound,
}

impl FetchError {
    /// The one-line message the search screen shows for this failure.
    pub fn user_message(&self) -> &'static str {
        match self {
            FetchError::NotFound => NOT_FOUND_MESSAGE,
            _ => GENERIC_FAILURE_MESSAGE,
        }
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Config(msg) => write!(f, "config error: {msg}"),
            FetchError::Transport(msg) => write!(f, "transport error: {msg}"),
            FetchError::Status { status, message } => {
                write!(f, "service error (HTTP {status}): {message}")
            }
            FetchError::Decode(msg) => write!(f, "decode error: {msg}"),
            FetchError::NotFound => write!(f, "no country matched"),
        }
    }
}

impl std::error::Error for FetchError {}

#[async_trait]
pub trait CountrySource: Send + Sync {
    /// Returns the name of the source (for logs).
    fn name(&self) -> &str;

    /// Looks up every country whose name matches `term`.
    async fn search_by_name(&self, term: &str) -> Result<Vec<CountryRecord>, FetchError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_has_its_own_message() {
        assert_eq!(FetchError::NotFound.user_message(), "Country not Found");
    }

    #[test]
    fn everything_else_collapses_to_generic_message() {
        let errors = [
            FetchError::Config("bad url".into()),
            FetchError::Transport("connection refused".into()),
            FetchError::Status { status: 500, message: "boom".into() },
            FetchError::Decode("expected value".into()),
        ];
        for err in errors {
            assert_eq!(
                err.user_message(),
                "Something went wrong with fetching countries",
                "{err}"
            );
        }
    }

    #[test]
    fn display_includes_status() {
        let err = FetchError::Status { status: 503, message: "unavailable".into() };
        assert_eq!(err.to_string(), "service error (HTTP 503): unavailable");
    }
}
