//! Advertising fakes.

use bt_fake_core::{fake_value_fn, FakeControl};

use crate::types::ExtAdvHandle;

fake_value_fn! {
    /// Enable or disable advertising set `adv` (`None` for the legacy set).
    pub fn bt_le_adv_set_enable(adv: Option<ExtAdvHandle>, enable: bool) -> i32
        => BT_LE_ADV_SET_ENABLE_FAKE;
}

/// Fakes of this module.
pub static FAKES: &[&dyn FakeControl] = &[&BT_LE_ADV_SET_ENABLE_FAKE];

/// Reset the advertising fakes.
pub fn reset_fakes() {
    bt_fake_core::reset_fakes(FAKES);
}
