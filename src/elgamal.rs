//! EC-Elgamal two-point encryption (spec.md §4.G).
//!
//! Additively homomorphic on points, malleable, not IND-CCA2 — a thin
//! composition of scalar multiplication and point addition, not a
//! scheme with its own state, so (unlike [`crate::ecdsa::Ecdsa`]) there
//! is no scheme-init struct here.

use crate::error::Error;
use crate::field::limb::{self, MAX_LIMBS};
use crate::field::{FieldParams, Fp};
use crate::point::Point;
use crate::random::{random_below_nonzero, RandomSource};
use crate::scalarmul::scalar_mul;

/// A ciphertext: the pair `(C, D)` of points on the same curve.
#[derive(Clone, Debug, PartialEq)]
pub struct Ciphertext {
    pub c: Point,
    pub d: Point,
}

/// Encrypt plaintext point `m` under public key `q = d*G`.
///
/// ```text
/// repeat k <- random_below(n) until k != 0
/// C <- k*G
/// D <- k*Q + M
/// ```
pub fn encrypt(rng: &mut dyn RandomSource, g: &Point, q: &Point, m: &Point) -> Result<Ciphertext, Error> {
    if g.curve() != q.curve() || g.curve() != m.curve() {
        return Err(Error::CurveMismatch);
    }
    let fnp = &g.curve().fn_;
    let n_limbs = fnp.limb_count();
    let mut n_be_buf = [0u8; MAX_LIMBS * 8];
    limb::to_be_bytes(fnp.modulus(), n_limbs, &mut n_be_buf[..n_limbs * 8]);
    let n_be = &n_be_buf[..n_limbs * 8];

    let k_buf = random_below_nonzero(rng, n_be)?;
    let k = Fp::from_be_bytes(fnp, &k_buf[MAX_LIMBS * 8 - n_limbs * 8..])?;

    let c = scalar_mul(g, &k)?;
    let kq = scalar_mul(q, &k)?;
    let d = kq.add(m)?;
    Ok(Ciphertext { c, d })
}

/// Decrypt `(C, D)` under secret scalar `d`: `M <- D - d*C`.
pub fn decrypt(d_scalar: &Fp, ciphertext: &Ciphertext) -> Result<Point, Error> {
    if ciphertext.c.curve() != ciphertext.d.curve() {
        return Err(Error::CurveMismatch);
    }
    if !same_field(d_scalar.field(), &ciphertext.c.curve().fn_) {
        return Err(Error::FieldMismatch);
    }
    let dc = scalar_mul(&ciphertext.c, d_scalar)?;
    ciphertext.d.add(&dc.neg())
}

/// `true` iff `a` and `b` are the same field descriptor (spec §4.G:
/// `d`'s field must be the curve's scalar field `Fn`).
fn same_field(a: &FieldParams, b: &FieldParams) -> bool {
    a == b
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::named;
    use crate::point::curve_ref;
    use crate::random::test_rng;

    #[test]
    fn roundtrip_on_secp256k1_with_d_one() {
        let curve = curve_ref(named::REGISTRY.iter().find(|e| e.name == "secp256k1").unwrap().build().unwrap());
        let g = Point::from_affine(&curve, &curve.gx.clone(), &curve.gy.clone()).unwrap();
        let d = Fp::from_u64(&curve.fn_, 1);
        let q = g.clone(); // Q = d*G = G when d = 1

        let mut rng = test_rng(1234);
        let ct = encrypt(&mut rng, &g, &q, &g).unwrap(); // M = G
        let recovered = decrypt(&d, &ct).unwrap();
        assert_eq!(recovered, g);
    }

    #[test]
    fn homomorphic_addition_matches_sum_of_plaintexts() {
        let curve = curve_ref(named::REGISTRY.iter().find(|e| e.name == "secp256k1").unwrap().build().unwrap());
        let g = Point::from_affine(&curve, &curve.gx.clone(), &curve.gy.clone()).unwrap();
        let d = Fp::from_u64(&curve.fn_, 5);
        let q = scalar_mul(&g, &d).unwrap();

        let m1 = g.double().unwrap(); // 2G
        let m2 = g.double().unwrap().double().unwrap(); // 4G

        let mut rng = test_rng(99);
        let ct1 = encrypt(&mut rng, &g, &q, &m1).unwrap();
        let ct2 = encrypt(&mut rng, &g, &q, &m2).unwrap();
        let combined = Ciphertext { c: ct1.c.add(&ct2.c).unwrap(), d: ct1.d.add(&ct2.d).unwrap() };

        let recovered = decrypt(&d, &combined).unwrap();
        let expected = m1.add(&m2).unwrap();
        assert_eq!(recovered, expected);
    }

    #[test]
    fn decrypt_rejects_a_scalar_from_a_different_field() {
        let curve = curve_ref(named::REGISTRY.iter().find(|e| e.name == "secp256k1").unwrap().build().unwrap());
        let g = Point::from_affine(&curve, &curve.gx.clone(), &curve.gy.clone()).unwrap();
        let q = g.clone();

        let mut rng = test_rng(55);
        let ct = encrypt(&mut rng, &g, &q, &g).unwrap();

        let other_curve = curve_ref(named::REGISTRY.iter().find(|e| e.name == "P-256").unwrap().build().unwrap());
        let foreign_d = Fp::from_u64(&other_curve.fn_, 1);
        assert_eq!(decrypt(&foreign_d, &ct), Err(Error::FieldMismatch));
    }
}
