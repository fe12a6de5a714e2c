//! Cryptographic random source (spec.md §4.A).
//!
//! `random_below` draws a uniform integer in `[0, n)` by rejection
//! sampling: read `2 * ceil(bits(n)/8)` random bytes and reduce modulo `n`.
//! The 2x oversample bounds modulo bias to negligible, matching
//! `original_source/src/mpzurandom.c`. A failed OS RNG read is unrecoverable
//! and is surfaced as [`crate::error::Error::RandomFailure`] rather than a
//! panic, the same "fatal but typed, not aborted" treatment this crate
//! already gives `InvalidModulus` (spec.md §7 calls both "fatal").

use rand_core::RngCore;

use crate::error::Error;
use crate::field::limb::{self, MAX_LIMBS};

/// Abstraction over a cryptographic byte source. Implemented for any
/// `rand_core::RngCore`, so callers may substitute a deterministic RNG in
/// tests (see `dev` module) while production code uses [`OsRng`].
pub trait RandomSource {
    /// Fill `dest` with random bytes. `Err(Error::RandomFailure)` if the
    /// underlying source cannot supply them.
    fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error>;
}

impl<T: RngCore> RandomSource for T {
    fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        RngCore::try_fill_bytes(self, dest).map_err(|_| Error::RandomFailure)
    }
}

/// The platform cryptographic RNG (`getrandom`).
#[cfg(feature = "std")]
#[derive(Clone, Copy, Debug, Default)]
pub struct OsRng;

#[cfg(feature = "std")]
impl RngCore for OsRng {
    fn next_u32(&mut self) -> u32 {
        let mut buf = [0u8; 4];
        self.fill_bytes_checked(&mut buf);
        u32::from_ne_bytes(buf)
    }

    fn next_u64(&mut self) -> u64 {
        let mut buf = [0u8; 8];
        self.fill_bytes_checked(&mut buf);
        u64::from_ne_bytes(buf)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.fill_bytes_checked(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
        getrandom::getrandom(dest).map_err(|_| rand_core::Error::new(RandomFailure))
    }
}

#[cfg(feature = "std")]
impl rand_core::CryptoRng for OsRng {}

#[cfg(feature = "std")]
impl OsRng {
    /// `RngCore::fill_bytes` is infallible by signature; `rand_core` itself
    /// has no recovery path here, so this is the one place a failed read
    /// still panics. [`RandomSource::fill_bytes`] goes through
    /// `try_fill_bytes` instead and returns `Error::RandomFailure`.
    fn fill_bytes_checked(&mut self, dest: &mut [u8]) {
        if getrandom::getrandom(dest).is_err() {
            panic!("OS random facility failed");
        }
    }
}

#[derive(Debug)]
struct RandomFailure;

impl core::fmt::Display for RandomFailure {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "OS random facility failed")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for RandomFailure {}

/// Draw a uniform integer in `[0, n)`, `n` given as a big-endian byte
/// string. Oversamples by 2x the byte length of `n` and reduces, per
/// spec §4.A.
pub fn random_below(rng: &mut dyn RandomSource, n_be: &[u8]) -> Result<[u8; MAX_LIMBS * 8], Error> {
    let n_limbs = (n_be.len() + 7) / 8;
    let n_wide = limb::from_be_bytes(n_be, n_limbs).expect("n fits MAX_LIMBS");

    let oversample_bytes = 2 * n_be.len();
    let mut buf = [0u8; 2 * MAX_LIMBS * 8];
    let buf = &mut buf[..oversample_bytes];
    rng.fill_bytes(buf)?;

    // interpret buf as a big integer and reduce mod n via the same
    // bit-serial long division used by the field engine.
    let total_bits = oversample_bytes * 8;
    let mut rem = [0u64; MAX_LIMBS];
    for bit in (0..total_bits).rev() {
        let byte_idx = oversample_bytes - 1 - bit / 8;
        let bit_in_byte = bit % 8;
        let incoming = ((buf[byte_idx] >> bit_in_byte) & 1) as u64;
        let mut carry = incoming;
        for limb in rem.iter_mut().take(n_limbs) {
            let new_carry = *limb >> 63;
            *limb = (*limb << 1) | carry;
            carry = new_carry;
        }
        if limb::cmp_n(&rem, &n_wide, n_limbs) != core::cmp::Ordering::Less {
            let mut t = [0u64; MAX_LIMBS];
            limb::sub_n(&mut t, &rem, &n_wide, n_limbs);
            rem = t;
        }
    }

    let mut out = [0u8; MAX_LIMBS * 8];
    limb::to_be_bytes(&rem, n_limbs, &mut out[MAX_LIMBS * 8 - n_limbs * 8..]);
    Ok(out)
}

/// Draw a uniform, nonzero integer in `[1, n)`; loops on a zero draw, per
/// spec: "Callers requiring nonzero results (nonces, secret keys) loop
/// until the draw is nonzero."
pub fn random_below_nonzero(rng: &mut dyn RandomSource, n_be: &[u8]) -> Result<[u8; MAX_LIMBS * 8], Error> {
    loop {
        let candidate = random_below(rng, n_be)?;
        if candidate.iter().any(|&b| b != 0) {
            return Ok(candidate);
        }
    }
}

/// A small deterministic RNG for tests (`dev`/test-only, never used by
/// production code paths).
#[cfg(any(test, feature = "dev"))]
pub fn test_rng(seed: u64) -> impl RandomSource {
    struct Xorshift(u64);
    impl RngCore for Xorshift {
        fn next_u32(&mut self) -> u32 {
            self.next_u64() as u32
        }
        fn next_u64(&mut self) -> u64 {
            let mut x = self.0;
            x ^= x << 13;
            x ^= x >> 7;
            x ^= x << 17;
            self.0 = x;
            x
        }
        fn fill_bytes(&mut self, dest: &mut [u8]) {
            for chunk in dest.chunks_mut(8) {
                let bytes = self.next_u64().to_le_bytes();
                chunk.copy_from_slice(&bytes[..chunk.len()]);
            }
        }
        fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
            self.fill_bytes(dest);
            Ok(())
        }
    }
    Xorshift(seed | 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_below_is_in_range() {
        let mut rng = test_rng(42);
        let n = [0x00, 0xFFu8]; // n = 255
        for _ in 0..50 {
            let out = random_below(&mut rng, &n).unwrap();
            let v = out[out.len() - 1];
            assert!((v as u16) < 255 || out[out.len() - 2] == 0);
        }
    }

    #[test]
    fn nonzero_never_returns_zero() {
        let mut rng = test_rng(7);
        let n = [0x03u8]; // n = 3
        for _ in 0..20 {
            let out = random_below_nonzero(&mut rng, &n).unwrap();
            assert_ne!(out[out.len() - 1], 0);
        }
    }
}
