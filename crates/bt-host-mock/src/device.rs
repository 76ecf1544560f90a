//! Device surrogate standing in for the host's `bt_dev` singleton.
//!
//! Only the fields the identity manager reads are present. Everything but the
//! manufacturer starts out zeroed. The code under test reads through
//! [`bt_dev`]; tests adjust fields through [`bt_dev_mut`].

use parking_lot::{const_rwlock, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::types::LeAddr;

/// Number of local identities the surrogate can hold.
pub const BT_ID_MAX: usize = 1;

/// Manufacturer identifier reported by the surrogate controller.
pub const MANUFACTURER_ID: u16 = 0x1234;

/// Device context read by the code under test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BtDev {
    /// Controller manufacturer identifier.
    pub manufacturer: u16,
    /// Number of configured identities.
    pub id_count: u8,
    /// Identity addresses, indexed by identity.
    pub id_addr: [LeAddr; BT_ID_MAX],
}

impl BtDev {
    /// Surrogate in its process-start state.
    pub const fn new() -> Self {
        Self {
            manufacturer: MANUFACTURER_ID,
            id_count: 0,
            id_addr: [LeAddr::ANY; BT_ID_MAX],
        }
    }
}

impl Default for BtDev {
    fn default() -> Self {
        Self::new()
    }
}

static BT_DEV: RwLock<BtDev> = const_rwlock(BtDev::new());

/// Read access for the code under test.
pub fn bt_dev() -> RwLockReadGuard<'static, BtDev> {
    BT_DEV.read()
}

/// Write access for tests.
pub fn bt_dev_mut() -> RwLockWriteGuard<'static, BtDev> {
    BT_DEV.write()
}

/// Put the surrogate back into its process-start state.
pub fn reset_bt_dev() {
    *BT_DEV.write() = BtDev::new();
}
