//! Error types for the fake registry.
//!
//! Fakes themselves never fail: a "failure" of a faked collaborator is a
//! programmed status code or a `None` buffer. `FakeError` only covers misuse of
//! the registry by test code (reading a call that never happened) and problems
//! loading a [`FakeConfig`](crate::FakeConfig).

use thiserror::Error;

/// Convenience alias for results using the registry error type.
pub type Result<T> = std::result::Result<T, FakeError>;

/// Errors reported by the fake registry.
#[derive(Error, Debug)]
pub enum FakeError {
    /// A test asked for call `index` but the fake was only invoked `call_count` times.
    #[error("fake '{fake}' has no call #{index} (call_count = {call_count})")]
    CallOutOfRange {
        /// Name of the faked symbol.
        fake: &'static str,
        /// Requested call index.
        index: usize,
        /// Calls recorded since the last reset.
        call_count: usize,
    },

    /// The call happened, but its arguments were discarded by the history bound.
    #[error("arguments of call #{index} to fake '{fake}' were dropped (history holds {retained})")]
    HistoryDropped {
        /// Name of the faked symbol.
        fake: &'static str,
        /// Requested call index.
        index: usize,
        /// Number of argument sets still held.
        retained: usize,
    },

    /// Configuration source could not be read or parsed.
    #[error("Configuration error: {0}")]
    Config(#[from] Box<figment::Error>),

    /// Configuration parsed but holds values the registry cannot honour.
    #[error("Configuration validation error: {0}")]
    Configuration(String),
}

impl From<figment::Error> for FakeError {
    fn from(err: figment::Error) -> Self {
        FakeError::Config(Box::new(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_message() {
        let err = FakeError::CallOutOfRange {
            fake: "bt_rand",
            index: 3,
            call_count: 1,
        };
        assert_eq!(
            err.to_string(),
            "fake 'bt_rand' has no call #3 (call_count = 1)"
        );
    }

    #[test]
    fn test_validation_message() {
        let err = FakeError::Configuration("call_history_len must be non-zero".into());
        assert!(err.to_string().starts_with("Configuration validation error"));
    }
}
