//! Argument capture.
//!
//! Every argument of a faked function is converted to an owned value at call
//! time and stored in the fake's history. Plain values are copied. Shared
//! references are recorded as a [`Ref`]: the pointer, plus a snapshot of the
//! pointee taken at call time, so a test can check either which object was
//! passed or what it held. Mutable references (output buffers, out-pointers)
//! are recorded as an [`Addr`] alone.

use std::fmt;

/// Address of an argument passed by mutable reference.
///
/// Only useful for identity checks ("the fake was handed this buffer"); it is
/// never dereferenced.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Addr(usize);

impl Addr {
    /// Address tag of the value behind `value`.
    pub fn of<T: ?Sized>(value: &T) -> Self {
        Addr(value as *const T as *const () as usize)
    }

    /// The raw address as an integer.
    pub fn get(self) -> usize {
        self.0
    }
}

impl fmt::Debug for Addr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Addr({:#x})", self.0)
    }
}

/// Argument passed by shared reference.
///
/// Equality compares the address and the snapshot, so two distinct objects
/// holding the same value are told apart.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Ref<T> {
    addr: Addr,
    value: T,
}

impl<T: Clone> Ref<T> {
    /// Record of `value` as the fake would capture it.
    pub fn of(value: &T) -> Self {
        Ref {
            addr: Addr::of(value),
            value: value.clone(),
        }
    }
}

impl<T> Ref<T> {
    /// Address of the referenced object.
    pub fn addr(&self) -> Addr {
        self.addr
    }

    /// Pointee as it was at call time.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Whether this is a reference to `other`.
    pub fn points_to(&self, other: &T) -> bool {
        self.addr == Addr::of(other)
    }
}

/// Conversion of a live argument into its recorded form.
pub trait Capture {
    /// Owned form kept in the argument history.
    type Captured: Clone + Send;

    /// Record this argument.
    fn capture(&self) -> Self::Captured;
}

macro_rules! capture_by_value {
    ($($ty:ty),* $(,)?) => {$(
        impl Capture for $ty {
            type Captured = $ty;

            fn capture(&self) -> Self::Captured {
                *self
            }
        }
    )*};
}

capture_by_value!(bool, u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

impl<T: Capture> Capture for Option<T> {
    type Captured = Option<T::Captured>;

    fn capture(&self) -> Self::Captured {
        self.as_ref().map(Capture::capture)
    }
}

impl<T: Clone + Send> Capture for &T {
    type Captured = Ref<T>;

    fn capture(&self) -> Self::Captured {
        Ref::of(*self)
    }
}

impl<T: ?Sized> Capture for &mut T {
    type Captured = Addr;

    fn capture(&self) -> Self::Captured {
        Addr::of(&**self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values_are_copied() {
        assert_eq!(0x0C03u16.capture(), 0x0C03);
        assert!(true.capture());
        assert_eq!(Some(7u8).capture(), Some(7));
        assert_eq!(None::<u8>.capture(), None);
    }

    #[test]
    fn test_shared_reference_records_pointer_and_snapshot() {
        let addr = [1u8, 2, 3, 4, 5, 6];
        let copy = addr;
        let captured = (&addr).capture();
        assert_eq!(captured.value(), &addr);
        assert_eq!(captured.addr(), Addr::of(&addr));
        assert!(captured.points_to(&addr));
        assert!(!captured.points_to(&copy));
        assert_ne!(captured, (&copy).capture());
    }

    #[test]
    fn test_mutable_reference_records_pointer() {
        let mut buf = [0u8; 4];
        let expected = Addr::of(&buf[..]);
        let slice: &mut [u8] = &mut buf;
        assert_eq!(slice.capture(), expected);
        slice[0] = 0xAB;
        // pointee changes are not reflected in the captured tag
        assert_eq!(slice.capture(), expected);
    }

    #[test]
    fn test_optional_out_pointer() {
        let mut slot: Option<u32> = None;
        let expected = Addr::of(&slot);
        let out: Option<&mut Option<u32>> = Some(&mut slot);
        assert_eq!(out.capture(), Some(expected));
        let absent: Option<&mut Option<u32>> = None;
        assert_eq!(absent.capture(), None);
    }
}
