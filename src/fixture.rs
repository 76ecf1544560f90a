//! Global fixture state.
//!
//! All fake records are process-wide statics. Tests share them, so each test
//! starts from [`reset_all`] (or holds a [`Fixture`]) and tests touching the
//! fakes run one at a time (`#[serial]`).

use bt_fake_core::reset_call_history;
use bt_host_mock::{fake_groups, reset_bt_dev};
use tracing::debug;

use crate::logging;

/// Reset every fake record, the global call history and the device surrogate.
///
/// Repeated calls are equivalent to a single one.
pub fn reset_all() {
    let mut fakes = 0;
    for (_, group) in fake_groups() {
        bt_fake_core::reset_fakes(group);
        fakes += group.len();
    }
    reset_call_history();
    reset_bt_dev();
    debug!(fakes, "fixture reset");
}

/// Total invocations across every fake since the last reset.
pub fn total_calls() -> usize {
    fake_groups()
        .iter()
        .flat_map(|(_, group)| group.iter())
        .map(|fake| fake.call_count())
        .sum()
}

/// Names of the fakes that ran at least once since the last reset.
pub fn called_fakes() -> Vec<&'static str> {
    fake_groups()
        .iter()
        .flat_map(|(_, group)| group.iter())
        .filter(|fake| fake.call_count() > 0)
        .map(|fake| fake.name())
        .collect()
}

/// Resets the fixture when created and again when dropped.
#[derive(Debug)]
#[must_use = "the fixture resets the fakes when dropped"]
pub struct Fixture {
    _private: (),
}

/// Start a test: set up logging and reset the fixture.
pub fn setup() -> Fixture {
    logging::init_test_logging();
    reset_all();
    Fixture { _private: () }
}

impl Drop for Fixture {
    fn drop(&mut self) {
        reset_all();
    }
}
