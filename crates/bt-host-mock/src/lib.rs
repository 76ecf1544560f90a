//! Fake Bluetooth host collaborators for identity manager unit tests.
//!
//! This crate stands in for the lower layers the identity manager calls into,
//! so its logic can be tested without a controller:
//!
//! - [`adv`] - advertising set enable/disable
//! - [`scan`] - scan enable/disable
//! - [`hci_core`] - bond removal, HCI command allocation and synchronous send
//! - [`crypto`] - random number generation
//! - [`device`] - the `bt_dev` surrogate (manufacturer `0x1234`)
//!
//! Every faked function has a matching `*_FAKE` record. Each module lists its
//! records in `FAKES` and resets them with `reset_fakes()`.
//!
//! # Example
//!
//! ```
//! use bt_host_mock::crypto::{bt_rand, fill_with, BT_RAND_FAKE};
//!
//! bt_host_mock::crypto::reset_fakes();
//! BT_RAND_FAKE.set_custom_fake(fill_with(0xAB));
//!
//! let mut irk = [0u8; 4];
//! assert_eq!(bt_rand(&mut irk, 4), 0);
//! assert_eq!(irk, [0xAB; 4]);
//! assert_eq!(BT_RAND_FAKE.call_count(), 1);
//! ```

pub mod adv;
pub mod crypto;
pub mod device;
pub mod errno;
pub mod hci;
pub mod hci_core;
pub mod rng;
pub mod scan;
pub mod types;

use bt_fake_core::FakeControl;

// Re-export commonly used types
pub use device::{bt_dev, bt_dev_mut, reset_bt_dev, BtDev};
pub use rng::FakeRng;
pub use types::{AddrType, ExtAdvHandle, LeAddr, NetBuf};

/// Every fake list of the crate, keyed by module.
pub fn fake_groups() -> [(&'static str, &'static [&'static dyn FakeControl]); 4] {
    [
        ("adv", adv::FAKES),
        ("scan", scan::FAKES),
        ("hci_core", hci_core::FAKES),
        ("crypto", crypto::FAKES),
    ]
}
