//! `bt-fake-core`
//!
//! Bookkeeping for fake functions used by Bluetooth host unit tests.
//!
//! Each faked symbol owns a [`Fake`] record that counts invocations, captures
//! arguments, and returns whatever the test programmed: a fixed value, a
//! sequence whose last value latches, or the result of a custom closure.
//! Records are process-wide statics and are reset between tests, either one at
//! a time or as a group through [`reset_fakes`].
//!
//! ## Modules
//!
//! - **`fake`**: the [`Fake`] record and the [`FakeControl`] group view
//! - **`capture`**: how live arguments become recorded values
//! - **`history`**: ordered log of which fakes ran
//! - **`scenario`**: canned return programs ([`ReturnScenario`])
//! - **`config`**: history bounds loaded from TOML ([`FakeConfig`])
//! - **`error`**: [`FakeError`]

pub mod capture;
pub mod config;
pub mod error;
pub mod fake;
pub mod history;
mod macros;
pub mod scenario;

pub use capture::{Addr, Capture, Ref};
pub use config::FakeConfig;
pub use error::{FakeError, Result};
pub use fake::{reset_fakes, Fake, FakeControl, Outcome};
pub use history::{call_history, call_history_dropped, reset_call_history};
pub use scenario::ReturnScenario;
