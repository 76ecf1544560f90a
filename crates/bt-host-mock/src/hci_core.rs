//! HCI core fakes: bond removal and synchronous command dispatch.

use std::sync::Arc;

use bt_fake_core::{fake_value_fn, FakeControl};
use tracing::trace;

use crate::types::{LeAddr, NetBuf};

/// Custom-fake type of [`bt_hci_cmd_create`].
pub type CmdCreateFn = dyn Fn(u16, u8) -> Option<NetBuf> + Send + Sync;

/// Custom-fake type of [`bt_hci_cmd_send_sync`].
pub type CmdSendSyncFn =
    dyn Fn(u16, Option<NetBuf>, Option<&mut Option<NetBuf>>) -> i32 + Send + Sync;

fake_value_fn! {
    /// Remove the bond with `addr` on identity `id`; `None` removes every bond.
    pub fn bt_unpair(id: u8, addr: Option<&LeAddr>) -> i32 => BT_UNPAIR_FAKE;

    /// Allocate a command buffer for `opcode` with room for `param_len` bytes.
    ///
    /// The default fake returns `None`, which the code under test treats as
    /// buffer exhaustion.
    pub fn bt_hci_cmd_create(opcode: u16, param_len: u8) -> Option<NetBuf>
        => BT_HCI_CMD_CREATE_FAKE;

    /// Send `buf` and wait for its completion; the response buffer, if any,
    /// is stored through `rsp`.
    pub fn bt_hci_cmd_send_sync(
        opcode: u16,
        buf: Option<NetBuf>,
        rsp: Option<&mut Option<NetBuf>>,
    ) -> i32 => BT_HCI_CMD_SEND_SYNC_FAKE;
}

/// Fakes of this module.
pub static FAKES: &[&dyn FakeControl] = &[
    &BT_UNPAIR_FAKE,
    &BT_HCI_CMD_CREATE_FAKE,
    &BT_HCI_CMD_SEND_SYNC_FAKE,
];

/// Reset the HCI core fakes.
pub fn reset_fakes() {
    bt_fake_core::reset_fakes(FAKES);
}

/// Custom fake handing out a fresh buffer sized for each command.
pub fn allocate_buffers() -> Arc<CmdCreateFn> {
    Arc::new(|opcode: u16, param_len: u8| {
        trace!(opcode, param_len, "allocating command buffer");
        Some(NetBuf::with_capacity(usize::from(param_len)))
    })
}

/// Custom fake completing every command with `status`, storing `rsp` as the
/// response when the caller asked for one.
pub fn respond_with(status: i32, rsp: NetBuf) -> Arc<CmdSendSyncFn> {
    Arc::new(
        move |_opcode: u16, _buf: Option<NetBuf>, out: Option<&mut Option<NetBuf>>| {
            if let Some(slot) = out {
                *slot = Some(rsp.clone());
            }
            status
        },
    )
}
