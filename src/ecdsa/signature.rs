//! Fixed-width `r || s` signature encoding (spec.md §4.F/§6).
//!
//! The teacher `ecdsa` crate represents this as `Signature<C>` backed by
//! a `GenericArray` sized by a `C: PrimeCurve` associated constant.
//! Curves here are built at runtime rather than monomorphized per type,
//! so the byte width is a runtime field and the backing storage is a
//! `Vec<u8>` instead.

extern crate alloc;
use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use crate::error::Error;
use crate::field::limb;
use crate::field::Fp;
use crate::point::CurveRef;

/// An ECDSA signature: `r` and `s`, each `byte_len` big-endian bytes
/// (`byte_len` the curve's scalar-field byte length).
#[derive(Clone, PartialEq, Eq)]
pub struct Signature {
    byte_len: usize,
    r: Vec<u8>,
    s: Vec<u8>,
}

/// `true` iff the big-endian integer `bytes` is strictly less than `fnp`'s
/// modulus `n`. Used to validate `r`/`s` before they are ever reduced into
/// an `Fp`, so an overflowed byte string cannot be accepted by silently
/// wrapping mod `n`.
fn scalar_in_range(fnp: &crate::field::FieldParams, bytes: &[u8]) -> bool {
    let n_limbs = fnp.limb_count();
    match limb::from_be_bytes(bytes, n_limbs) {
        Some(value) => limb::cmp_n(&value, fnp.modulus(), n_limbs) == core::cmp::Ordering::Less,
        None => false,
    }
}

impl Signature {
    pub(crate) fn from_scalars(curve: &CurveRef, r: &Fp, s: &Fp) -> Self {
        let byte_len = curve.fn_.byte_len();
        let mut rb = vec![0u8; byte_len];
        let mut sb = vec![0u8; byte_len];
        r.to_be_bytes(&mut rb);
        s.to_be_bytes(&mut sb);
        Signature { byte_len, r: rb, s: sb }
    }

    /// Recover `(r, s)` as elements of the curve's scalar field.
    pub(crate) fn to_scalars(&self, curve: &CurveRef) -> Result<(Fp, Fp), Error> {
        let r = Fp::from_be_bytes(&curve.fn_, &self.r)?;
        let s = Fp::from_be_bytes(&curve.fn_, &self.s)?;
        Ok((r, s))
    }

    /// Parse a fixed-width `r || s` encoding (`2 * byte_len` bytes).
    /// Rejects `r` or `s` outside `[1, n-1]` (spec §4.F/§7: `BadSignature`
    /// — "r or s out of [1, n-1]"), checked against the raw bytes so an
    /// overflowed encoding cannot slip through by reducing mod `n` later.
    pub fn from_bytes(curve: &CurveRef, bytes: &[u8]) -> Result<Self, Error> {
        let byte_len = curve.fn_.byte_len();
        if bytes.len() != 2 * byte_len {
            return Err(Error::BadSignature);
        }
        let r = bytes[..byte_len].to_vec();
        let s = bytes[byte_len..].to_vec();
        if r.iter().all(|&b| b == 0) || s.iter().all(|&b| b == 0) {
            return Err(Error::BadSignature);
        }
        if !scalar_in_range(&curve.fn_, &r) || !scalar_in_range(&curve.fn_, &s) {
            return Err(Error::BadSignature);
        }
        Ok(Signature { byte_len, r, s })
    }

    /// Encode as `r || s`, fixed-width.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(2 * self.byte_len);
        out.extend_from_slice(&self.r);
        out.extend_from_slice(&self.s);
        out
    }

    /// Lowercase hex encoding of [`Signature::to_bytes`].
    pub fn to_hex(&self) -> String {
        base16ct::lower::encode_string(&self.to_bytes())
    }

    /// Parse a lower- or upper-hex `r || s` encoding.
    pub fn from_hex(curve: &CurveRef, hex: &str) -> Result<Self, Error> {
        let bytes = base16ct::mixed::decode_vec(hex).map_err(|_| Error::BadSignature)?;
        Self::from_bytes(curve, &bytes)
    }
}

impl core::fmt::Debug for Signature {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Signature").field("r", &self.r).field("s", &self.s).finish()
    }
}

impl core::fmt::LowerHex for Signature {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        for byte in self.to_bytes() {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl core::fmt::UpperHex for Signature {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        for byte in self.to_bytes() {
            write!(f, "{byte:02X}")?;
        }
        Ok(())
    }
}
