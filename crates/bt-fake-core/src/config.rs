//! Registry configuration using Figment.
//!
//! The registry keeps every argument set by default. A bound can be set so long
//! running tests do not grow histories without limit, mirroring the fixed
//! history arrays of C fake-function frameworks.
//!
//! ```toml
//! # fakes.toml
//! arg_history_len = 50
//! call_history_len = 50
//! ```
//!
//! Configuration is process-wide and survives [`reset`](crate::FakeControl::reset)
//! of individual fakes.

use std::path::Path;

use figment::{
    providers::{Format, Toml},
    Figment,
};
use parking_lot::{const_rwlock, RwLock};
use serde::Deserialize;
use tracing::debug;

use crate::error::{FakeError, Result};

/// Default bound of the global call history.
pub const DEFAULT_CALL_HISTORY_LEN: usize = 50;

/// Bounds applied to fake bookkeeping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FakeConfig {
    /// Maximum argument sets (and return values) kept per fake; `None` keeps all.
    pub arg_history_len: Option<usize>,
    /// Maximum entries in the global call history.
    pub call_history_len: usize,
}

impl FakeConfig {
    /// Unbounded argument history, 50 call history entries.
    pub const DEFAULT: FakeConfig = FakeConfig {
        arg_history_len: None,
        call_history_len: DEFAULT_CALL_HISTORY_LEN,
    };

    /// Parse configuration from TOML text, filling missing keys with defaults.
    pub fn from_toml_str(toml: &str) -> Result<Self> {
        let config: FakeConfig = Figment::new().merge(Toml::string(toml)).extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file. A missing file yields the defaults.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let config: FakeConfig = Figment::new().merge(Toml::file(path.as_ref())).extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Reject bounds that would make the registry unable to record anything.
    pub fn validate(&self) -> Result<()> {
        if self.arg_history_len == Some(0) {
            return Err(FakeError::Configuration(
                "arg_history_len must be at least 1 (omit it to keep every call)".into(),
            ));
        }
        if self.call_history_len == 0 {
            return Err(FakeError::Configuration(
                "call_history_len must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// Install this configuration for every fake in the process.
    pub fn apply(self) -> Result<()> {
        self.validate()?;
        debug!(
            arg_history_len = ?self.arg_history_len,
            call_history_len = self.call_history_len,
            "applying fake registry configuration"
        );
        *ACTIVE.write() = self;
        Ok(())
    }
}

impl Default for FakeConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

static ACTIVE: RwLock<FakeConfig> = const_rwlock(FakeConfig::DEFAULT);

/// Configuration currently in force.
pub fn active() -> FakeConfig {
    *ACTIVE.read()
}

/// Restore the default configuration.
pub fn restore_default() {
    *ACTIVE.write() = FakeConfig::DEFAULT;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = FakeConfig::default();
        assert_eq!(config.arg_history_len, None);
        assert_eq!(config.call_history_len, DEFAULT_CALL_HISTORY_LEN);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() -> anyhow::Result<()> {
        let config = FakeConfig::from_toml_str("arg_history_len = 8")?;
        assert_eq!(config.arg_history_len, Some(8));
        assert_eq!(config.call_history_len, DEFAULT_CALL_HISTORY_LEN);
        Ok(())
    }

    #[test]
    fn test_zero_bounds_rejected() {
        let err = FakeConfig::from_toml_str("call_history_len = 0").unwrap_err();
        assert!(matches!(err, FakeError::Configuration(_)));

        let err = FakeConfig::from_toml_str("arg_history_len = 0").unwrap_err();
        assert!(matches!(err, FakeError::Configuration(_)));
    }

    #[test]
    fn test_malformed_toml() {
        let err = FakeConfig::from_toml_str("arg_history_len = \"many\"").unwrap_err();
        assert!(matches!(err, FakeError::Config(_)));
    }

    #[test]
    fn test_load_from_file() -> anyhow::Result<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        writeln!(file, "arg_history_len = 4")?;
        writeln!(file, "call_history_len = 10")?;

        let config = FakeConfig::load_from(file.path())?;
        assert_eq!(
            config,
            FakeConfig {
                arg_history_len: Some(4),
                call_history_len: 10,
            }
        );
        Ok(())
    }

    #[test]
    #[serial]
    fn test_apply_and_restore() -> anyhow::Result<()> {
        FakeConfig {
            arg_history_len: Some(2),
            call_history_len: 3,
        }
        .apply()?;
        assert_eq!(active().arg_history_len, Some(2));

        restore_default();
        assert_eq!(active(), FakeConfig::DEFAULT);
        Ok(())
    }
}
