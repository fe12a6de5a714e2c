//! Test-vector harness.
//!
//! Mirrors the teacher `ecdsa` crate's own `dev` module: a `TestVector`
//! struct plus `new_signing_test!`/`new_verification_test!` macros that
//! drive a concrete [`crate::ecdsa::Ecdsa`] instance against literal byte
//! vectors. Unlike the teacher, there is no per-curve associated-type
//! dance to set up first — curves here are runtime values from
//! [`crate::curve::named`], so a vector table just needs a curve name.
//!
//! As in the teacher crate, these macros are not invoked by this crate's
//! own test suite — there, per-curve downstream crates (`k256`, `p256`,
//! ...) are the callers; here, `tests/ecdsa.rs` exercises the same
//! literal RFC-6979 vector directly against [`crate::ecdsa::Ecdsa`] and
//! [`crate::ecdsa::Signature`] without going through this module. This
//! harness exists for a caller (in or outside this crate) that has its
//! own `TestVector` table to drive, gated behind the `dev` feature for
//! that reason.

use crate::curve::named;
use crate::field::Fp;
use crate::point::{curve_ref, CurveRef, Point};

/// One ECDSA test vector: a secret/nonce/message triple plus the
/// signature and public key it is expected to produce.
pub struct TestVector {
    /// Private scalar `d`.
    pub d: &'static [u8],
    /// Public key x-coordinate (`Qx`).
    pub q_x: &'static [u8],
    /// Public key y-coordinate (`Qy`).
    pub q_y: &'static [u8],
    /// Ephemeral scalar (nonce) `k`.
    pub k: &'static [u8],
    /// Message to hash and sign/verify.
    pub m: &'static [u8],
    /// Expected signature `r` component.
    pub r: &'static [u8],
    /// Expected signature `s` component.
    pub s: &'static [u8],
}

/// Build a [`CurveRef`] for a registered curve name. Panics if `name` is
/// unregistered — a harness-only helper, not a public lookup API (see
/// [`crate::curve::by_name`] for that).
pub fn curve_by_name(name: &str) -> CurveRef {
    let entry = named::REGISTRY.iter().find(|e| e.name == name).unwrap_or_else(|| panic!("no curve named {name}"));
    curve_ref(entry.build().expect("built-in curve constants are valid"))
}

/// Recover a vector's public key as a [`Point`] on `curve`.
pub fn vector_public_key(curve: &CurveRef, vector: &TestVector) -> Point {
    let x = Fp::from_be_bytes(&curve.fp, vector.q_x).expect("vector Qx fits the field");
    let y = Fp::from_be_bytes(&curve.fp, vector.q_y).expect("vector Qy fits the field");
    Point::from_affine(curve, &x, &y).expect("vector public key is on-curve")
}

/// Define a signing test: for each vector, re-derive `(r, s)` from `d`
/// and the recorded nonce `k` via
/// [`crate::ecdsa::Ecdsa::sign_with_nonce`], and compare against the
/// recorded signature bytes.
#[macro_export]
macro_rules! new_signing_test {
    ($scheme:expr, $curve:expr, $vectors:expr) => {
        #[test]
        fn ecdsa_signing_matches_vectors() {
            let scheme = $scheme;
            let curve = $curve;
            for vector in $vectors {
                let d = $crate::field::Fp::from_be_bytes(&curve.fn_, vector.d).unwrap();
                let k = $crate::field::Fp::from_be_bytes(&curve.fn_, vector.k).unwrap();
                let sig = scheme.sign_with_nonce(&k, &d, vector.m).unwrap();

                let mut expected_bytes = vector.r.to_vec();
                expected_bytes.extend_from_slice(vector.s);
                let expected = $crate::ecdsa::Signature::from_bytes(&curve, &expected_bytes).unwrap();
                assert_eq!(sig, expected, "signature mismatch for vector");
            }
        }
    };
}

/// Define a verification test: the recorded signature must verify
/// against the recorded public key, and must be rejected after flipping
/// a bit of `s`.
#[macro_export]
macro_rules! new_verification_test {
    ($scheme:expr, $curve:expr, $vectors:expr) => {
        #[test]
        fn ecdsa_verify_success() {
            let scheme = $scheme;
            let curve = $curve;
            for vector in $vectors {
                let q = $crate::dev::vector_public_key(&curve, vector);
                let mut bytes = vector.r.to_vec();
                bytes.extend_from_slice(vector.s);
                let sig = $crate::ecdsa::Signature::from_bytes(&curve, &bytes).unwrap();
                assert!(scheme.verify(&q, vector.m, &sig).is_ok());
            }
        }

        #[test]
        fn ecdsa_verify_invalid_s() {
            let scheme = $scheme;
            let curve = $curve;
            for vector in $vectors {
                let q = $crate::dev::vector_public_key(&curve, vector);
                let mut s_tweaked = vector.s.to_vec();
                s_tweaked[0] ^= 1;
                let mut bytes = vector.r.to_vec();
                bytes.extend_from_slice(&s_tweaked);
                if let Ok(sig) = $crate::ecdsa::Signature::from_bytes(&curve, &bytes) {
                    assert!(scheme.verify(&q, vector.m, &sig).is_err());
                }
            }
        }
    };
}
