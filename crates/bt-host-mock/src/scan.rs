//! Scanning fakes.

use bt_fake_core::{fake_value_fn, FakeControl};

/// `enable` value turning scanning off.
pub const BT_HCI_LE_SCAN_DISABLE: u8 = 0x00;
/// `enable` value turning scanning on.
pub const BT_HCI_LE_SCAN_ENABLE: u8 = 0x01;

fake_value_fn! {
    /// Set the LE scan enable state.
    pub fn bt_le_scan_set_enable(enable: u8) -> i32 => BT_LE_SCAN_SET_ENABLE_FAKE;
}

/// Fakes of this module.
pub static FAKES: &[&dyn FakeControl] = &[&BT_LE_SCAN_SET_ENABLE_FAKE];

/// Reset the scanning fakes.
pub fn reset_fakes() {
    bt_fake_core::reset_fakes(FAKES);
}
