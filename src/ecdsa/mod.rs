//! ECDSA over any curve this crate can construct (spec.md §4.F).
//!
//! Adapted from the teacher `ecdsa` crate's split of init/sign/verify,
//! but without its per-curve generic type parameter: curves here are
//! built at runtime, so a scheme instance carries a curve handle and a
//! precomputed base-point table instead of a `C: PrimeCurve` bound.

extern crate alloc;

pub mod sign;
pub mod signature;
pub mod verify;

pub use signature::Signature;

use crate::error::Error;
use crate::field::Fp;
use crate::hash::HashFn;
use crate::point::{AsRefCurve, CurveRef, Point};
use crate::scalarmul::BasePointTable;

/// A scheme instance: a curve, a hash function, and a precomputed table
/// for the generator (spec §4.F "Scheme init").
pub struct Ecdsa {
    curve: CurveRef,
    hash: HashFn,
    g_table: BasePointTable,
}

impl Ecdsa {
    /// Bind a curve and hash function. The hash-size requirement from
    /// spec §4.F (`|H| >= ceil(log2(n)/8)`) is a construction-time
    /// precondition, not caller-facing data — a hash too narrow for the
    /// curve's order is a configuration mistake, not a runtime failure
    /// mode in the error taxonomy, so it is asserted rather than
    /// returned as an `Error` variant.
    pub fn new(curve: CurveRef, hash: HashFn) -> Result<Self, Error> {
        let required = curve.fn_.byte_len();
        assert!(hash.digest_size >= required, "hash digest too short for curve order");
        let g = Point::from_affine(&curve, &curve.gx.clone(), &curve.gy.clone())?;
        let g_table = BasePointTable::new(&g)?;
        Ok(Ecdsa { curve, hash, g_table })
    }

    /// The bound curve.
    pub fn curve(&self) -> &crate::curve::Curve {
        self.curve.as_ref_curve()
    }

    /// `H(msg)`, truncated to `nsz` bytes and reduced mod the curve
    /// order (spec §4.F: "take leftmost nsz bytes, interpret
    /// big-endian, reduce mod n").
    fn hash_to_scalar(&self, msg: &[u8]) -> Fp {
        let (digest, len) = self.hash.digest(msg);
        let nsz = self.curve.fn_.byte_len();
        let take = len.min(nsz);
        Fp::from_be_bytes(&self.curve.fn_, &digest[..take]).expect("take <= nsz fits the scalar field's width")
    }
}
