//! Host value types appearing in faked signatures.

use std::fmt;
use std::sync::Arc;

use bt_fake_core::Capture;
use bytes::BytesMut;
use parking_lot::{Mutex, MutexGuard};

/// Bluetooth LE address type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum AddrType {
    /// Public device address.
    #[default]
    Public = 0x00,
    /// Random device address.
    Random = 0x01,
    /// Public identity address (resolved from an RPA).
    PublicId = 0x02,
    /// Random static identity address (resolved from an RPA).
    RandomId = 0x03,
}

/// Bluetooth LE address: type plus six little-endian address bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LeAddr {
    /// Address type.
    pub kind: AddrType,
    /// Address bytes, least significant first.
    pub val: [u8; 6],
}

impl LeAddr {
    /// The all-zero public address (`BT_ADDR_LE_ANY`).
    pub const ANY: LeAddr = LeAddr {
        kind: AddrType::Public,
        val: [0; 6],
    };

    /// Public address from little-endian bytes.
    pub const fn public(val: [u8; 6]) -> Self {
        Self {
            kind: AddrType::Public,
            val,
        }
    }

    /// Random address from little-endian bytes.
    pub const fn random(val: [u8; 6]) -> Self {
        Self {
            kind: AddrType::Random,
            val,
        }
    }

    /// A random static address has its two most significant bits set.
    pub fn is_static_random(&self) -> bool {
        self.kind == AddrType::Random && self.val[5] & 0xc0 == 0xc0
    }
}

impl fmt::Display for LeAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = &self.val;
        let kind = match self.kind {
            AddrType::Public => "public",
            AddrType::Random => "random",
            AddrType::PublicId => "public-id",
            AddrType::RandomId => "random-id",
        };
        write!(
            f,
            "{:02X}:{:02X}:{:02X}:{:02X}:{:02X}:{:02X} ({})",
            v[5], v[4], v[3], v[2], v[1], v[0], kind
        )
    }
}

/// Handle of an extended advertising set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExtAdvHandle(u8);

impl ExtAdvHandle {
    /// Handle of advertising set `index`.
    pub const fn new(index: u8) -> Self {
        Self(index)
    }

    /// Advertising set index.
    pub fn index(self) -> u8 {
        self.0
    }
}

impl Capture for ExtAdvHandle {
    type Captured = ExtAdvHandle;

    fn capture(&self) -> Self::Captured {
        *self
    }
}

/// Shared handle to an HCI command or event buffer.
///
/// Cloning yields another handle to the same buffer; equality is identity,
/// like comparing `struct net_buf *` pointers.
#[derive(Clone, Default)]
pub struct NetBuf(Arc<Mutex<BytesMut>>);

impl NetBuf {
    /// Empty buffer able to hold `capacity` bytes without reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        NetBuf(Arc::new(Mutex::new(BytesMut::with_capacity(capacity))))
    }

    /// Buffer holding a copy of `data`.
    pub fn from_slice(data: &[u8]) -> Self {
        NetBuf(Arc::new(Mutex::new(BytesMut::from(data))))
    }

    /// Append bytes.
    pub fn add_mem(&self, data: &[u8]) {
        self.0.lock().extend_from_slice(data);
    }

    /// Append one byte.
    pub fn add_u8(&self, value: u8) {
        self.add_mem(&[value]);
    }

    /// Append a little-endian `u16`.
    pub fn add_le16(&self, value: u16) {
        self.add_mem(&value.to_le_bytes());
    }

    /// Bytes written so far.
    pub fn len(&self) -> usize {
        self.0.lock().len()
    }

    /// Whether nothing has been written.
    pub fn is_empty(&self) -> bool {
        self.0.lock().is_empty()
    }

    /// Copy of the buffer contents.
    pub fn to_vec(&self) -> Vec<u8> {
        self.0.lock().to_vec()
    }

    /// Lock the underlying bytes for in-place access.
    pub fn data(&self) -> MutexGuard<'_, BytesMut> {
        self.0.lock()
    }

    /// Whether both handles refer to the same buffer.
    pub fn ptr_eq(&self, other: &NetBuf) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl PartialEq for NetBuf {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for NetBuf {}

impl fmt::Debug for NetBuf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NetBuf")
            .field("ptr", &Arc::as_ptr(&self.0))
            .field("len", &self.len())
            .finish()
    }
}

impl Capture for NetBuf {
    type Captured = NetBuf;

    fn capture(&self) -> Self::Captured {
        self.clone()
    }
}
