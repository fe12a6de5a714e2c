//! Hash-function contract consumed by ECDSA (spec.md §6, §9 "ECDSA hash
//! binding").
//!
//! The scheme only ever needs a digest size and a deterministic
//! `msg -> digest` function; it must not assume anything about which
//! algorithm produced the digest output. This mirrors the C original's
//! `(digest_size, hash_fn)` pair more directly than a generic trait bound
//! would, while [`HashFn::of`] lets callers build one from any
//! `digest::Digest` impl (`sha2::Sha256`, `sha2::Sha384`, ...) without
//! hand-writing the function pointer.

use digest::Digest;

use crate::field::limb::MAX_LIMBS;

/// Maximum digest size this crate's fixed buffers can hold.
pub const MAX_DIGEST_SIZE: usize = MAX_LIMBS * 8;

/// Runtime hash descriptor: a digest size plus a function pointer.
#[derive(Clone, Copy)]
pub struct HashFn {
    pub digest_size: usize,
    f: fn(&[u8]) -> ([u8; MAX_DIGEST_SIZE], usize),
}

impl HashFn {
    /// Build a [`HashFn`] from any `digest::Digest` implementation.
    pub fn of<D: Digest>() -> Self {
        fn run<D: Digest>(msg: &[u8]) -> ([u8; MAX_DIGEST_SIZE], usize) {
            let out = D::digest(msg);
            let mut buf = [0u8; MAX_DIGEST_SIZE];
            let len = out.len().min(MAX_DIGEST_SIZE);
            buf[..len].copy_from_slice(&out[..len]);
            (buf, len)
        }
        HashFn {
            digest_size: <D as Digest>::output_size(),
            f: run::<D>,
        }
    }

    /// Build a [`HashFn`] from a raw function pointer, for hash
    /// implementations that don't implement `digest::Digest`.
    pub const fn from_raw(digest_size: usize, f: fn(&[u8]) -> ([u8; MAX_DIGEST_SIZE], usize)) -> Self {
        HashFn { digest_size, f }
    }

    /// Hash `msg`, returning a fixed buffer and the number of
    /// significant (leading) bytes in it.
    pub fn digest(&self, msg: &[u8]) -> ([u8; MAX_DIGEST_SIZE], usize) {
        (self.f)(msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sha2::Sha256;

    #[test]
    fn hashfn_matches_digest_trait() {
        let hf = HashFn::of::<Sha256>();
        assert_eq!(hf.digest_size, 32);
        let (buf, len) = hf.digest(b"abc");
        assert_eq!(len, 32);
        let expected = Sha256::digest(b"abc");
        assert_eq!(&buf[..len], expected.as_slice());
    }
}
