//! Seeded RNG wrapper for reproducible `bt_rand` output.
//!
//! Identity tests that generate random static addresses or IRKs want the same
//! bytes on every run, so the canned rand fakes draw from a seeded ChaCha8
//! stream instead of the OS.

use parking_lot::Mutex;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seeded byte generator shared by a rand fake.
pub struct FakeRng {
    inner: Mutex<ChaCha8Rng>,
}

impl FakeRng {
    /// Generator producing the same stream for the same seed.
    pub fn new(seed: u64) -> Self {
        Self {
            inner: Mutex::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }

    /// Fill `dst` with the next bytes of the stream.
    pub fn fill(&self, dst: &mut [u8]) {
        self.inner.lock().fill_bytes(dst);
    }
}

impl std::fmt::Debug for FakeRng {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FakeRng")
            .field("inner", &"<Mutex<ChaCha8Rng>>")
            .finish()
    }
}
