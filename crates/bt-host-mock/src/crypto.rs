//! Random number fakes.

use std::sync::Arc;

use bt_fake_core::{fake_value_fn, FakeControl};

use crate::rng::FakeRng;

/// Custom-fake type of [`bt_rand`].
pub type RandFn = dyn Fn(&mut [u8], usize) -> i32 + Send + Sync;

fake_value_fn! {
    /// Fill the first `len` bytes of `buf` with random data.
    ///
    /// The default fake writes nothing; install [`fill_with`] or
    /// [`seeded_rand`] when the code under test needs the bytes.
    pub fn bt_rand(buf: &mut [u8], len: usize) -> i32 => BT_RAND_FAKE;
}

/// Fakes of this module.
pub static FAKES: &[&dyn FakeControl] = &[&BT_RAND_FAKE];

/// Reset the crypto fakes.
pub fn reset_fakes() {
    bt_fake_core::reset_fakes(FAKES);
}

/// Custom fake writing `len` copies of `byte` and returning 0.
pub fn fill_with(byte: u8) -> Arc<RandFn> {
    Arc::new(move |buf: &mut [u8], len: usize| {
        let len = len.min(buf.len());
        buf[..len].fill(byte);
        0
    })
}

/// Custom fake writing a reproducible byte stream seeded with `seed`.
pub fn seeded_rand(seed: u64) -> Arc<RandFn> {
    let rng = FakeRng::new(seed);
    Arc::new(move |buf: &mut [u8], len: usize| {
        let len = len.min(buf.len());
        rng.fill(&mut buf[..len]);
        0
    })
}
