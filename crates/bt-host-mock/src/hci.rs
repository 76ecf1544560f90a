//! HCI command opcodes issued by the identity manager.
//!
//! Only the values are provided; no command encoding happens here.

/// Build an opcode from its group (OGF) and command (OCF) fields.
pub const fn opcode(ogf: u16, ocf: u16) -> u16 {
    ocf | (ogf << 10)
}

const OGF_BASEBAND: u16 = 0x03;
const OGF_INFO: u16 = 0x04;
const OGF_LE: u16 = 0x08;
const OGF_VS: u16 = 0x3f;

/// HCI_Reset.
pub const OP_RESET: u16 = opcode(OGF_BASEBAND, 0x0003);
/// HCI_Read_BD_ADDR.
pub const OP_READ_BD_ADDR: u16 = opcode(OGF_INFO, 0x0009);
/// HCI_LE_Set_Random_Address.
pub const OP_LE_SET_RANDOM_ADDRESS: u16 = opcode(OGF_LE, 0x0005);
/// HCI_LE_Set_Privacy_Mode.
pub const OP_LE_SET_PRIVACY_MODE: u16 = opcode(OGF_LE, 0x004e);
/// Zephyr vendor command: read static addresses.
pub const OP_VS_READ_STATIC_ADDRS: u16 = opcode(OGF_VS, 0x0009);
