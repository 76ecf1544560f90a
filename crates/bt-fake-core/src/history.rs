//! Process-wide call history.
//!
//! Records the name of every fake in invocation order so tests can assert the
//! ordering of calls across different collaborators, e.g. that advertising is
//! disabled before the random address is written.

use parking_lot::{const_mutex, Mutex};
use tracing::warn;

use crate::config;

#[derive(Debug)]
struct CallHistory {
    names: Vec<&'static str>,
    dropped: usize,
}

static CALL_HISTORY: Mutex<CallHistory> = const_mutex(CallHistory {
    names: Vec::new(),
    dropped: 0,
});

pub(crate) fn push(name: &'static str) {
    let bound = config::active().call_history_len;
    let mut history = CALL_HISTORY.lock();
    if history.names.len() < bound {
        history.names.push(name);
    } else {
        history.dropped += 1;
        if history.dropped == 1 {
            warn!(bound, fake = name, "global call history full, dropping further calls");
        }
    }
}

/// Names of the fakes invoked since the last reset, oldest first.
pub fn call_history() -> Vec<&'static str> {
    CALL_HISTORY.lock().names.clone()
}

/// Calls that happened after the history filled up.
pub fn call_history_dropped() -> usize {
    CALL_HISTORY.lock().dropped
}

/// Clear the global call history.
pub fn reset_call_history() {
    let mut history = CALL_HISTORY.lock();
    history.names.clear();
    history.dropped = 0;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FakeConfig;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_order_is_preserved() {
        reset_call_history();
        push("bt_le_adv_set_enable");
        push("bt_hci_cmd_create");
        push("bt_hci_cmd_send_sync");
        assert_eq!(
            call_history(),
            vec![
                "bt_le_adv_set_enable",
                "bt_hci_cmd_create",
                "bt_hci_cmd_send_sync"
            ]
        );
        reset_call_history();
        assert!(call_history().is_empty());
    }

    #[test]
    #[serial]
    fn test_bound_counts_dropped_calls() -> anyhow::Result<()> {
        reset_call_history();
        FakeConfig {
            arg_history_len: None,
            call_history_len: 2,
        }
        .apply()?;

        for _ in 0..5 {
            push("bt_rand");
        }
        assert_eq!(call_history().len(), 2);
        assert_eq!(call_history_dropped(), 3);

        config::restore_default();
        reset_call_history();
        assert_eq!(call_history_dropped(), 0);
        Ok(())
    }
}
