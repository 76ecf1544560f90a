//! Zephyr errno values returned (negated) by the faked host functions.
//!
//! Fakes return `0` for success unless programmed otherwise; tests model a
//! failing collaborator by programming `-EIO` and friends.

/// I/O error.
pub const EIO: i32 = 5;
/// Try again.
pub const EAGAIN: i32 = 11;
/// Device or resource busy.
pub const EBUSY: i32 = 16;
/// Invalid argument.
pub const EINVAL: i32 = 22;
/// No buffer space available.
pub const ENOBUFS: i32 = 105;
