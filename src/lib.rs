//! # Bluetooth identity manager test fixture
//!
//! Unit tests of the identity manager link against fake versions of the
//! lower host layers. This crate ties those fakes together:
//!
//! - **`fixture`**: process-wide reset of every fake, the call history and the
//!   device surrogate, plus a guard that resets around each test
//! - **`logging`**: idempotent tracing setup for test binaries
//! - **`prelude`**: everything a test usually imports
//!
//! The fake records themselves live in [`bt_fake_core`] (bookkeeping) and
//! [`bt_host_mock`] (the faked Bluetooth functions).
//!
//! ## Example
//!
//! ```
//! use bt_id_mocks::prelude::*;
//!
//! let _fixture = fixture::setup();
//! assert_eq!(bt_le_adv_set_enable(Some(ExtAdvHandle::new(0)), true), 0);
//! assert_eq!(BT_LE_ADV_SET_ENABLE_FAKE.call_count(), 1);
//! assert_eq!(bt_dev().manufacturer, 0x1234);
//! ```

pub mod fixture;
pub mod logging;

pub use bt_fake_core;
pub use bt_host_mock;

pub use fixture::reset_all;

/// Common imports for identity manager tests.
pub mod prelude {
    pub use crate::fixture::{self, reset_all, Fixture};
    pub use bt_fake_core::{
        call_history, Addr, FakeConfig, FakeControl, FakeError, Ref, ReturnScenario,
    };
    pub use bt_host_mock::adv::{bt_le_adv_set_enable, BT_LE_ADV_SET_ENABLE_FAKE};
    pub use bt_host_mock::crypto::{bt_rand, fill_with, seeded_rand, BT_RAND_FAKE};
    pub use bt_host_mock::errno::*;
    pub use bt_host_mock::hci;
    pub use bt_host_mock::hci_core::{
        allocate_buffers, bt_hci_cmd_create, bt_hci_cmd_send_sync, bt_unpair, respond_with,
        BT_HCI_CMD_CREATE_FAKE, BT_HCI_CMD_SEND_SYNC_FAKE, BT_UNPAIR_FAKE,
    };
    pub use bt_host_mock::scan::{
        bt_le_scan_set_enable, BT_HCI_LE_SCAN_DISABLE, BT_HCI_LE_SCAN_ENABLE,
        BT_LE_SCAN_SET_ENABLE_FAKE,
    };
    pub use bt_host_mock::{bt_dev, bt_dev_mut, AddrType, ExtAdvHandle, LeAddr, NetBuf};
}
