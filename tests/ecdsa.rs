//! ECDSA sign/verify round-trips and the literal RFC-6979 vector from
//! spec.md §8 scenario 4.

use ecc_core::curve::by_name;
use ecc_core::ecdsa::{Ecdsa, Signature};
use ecc_core::field::Fp;
use ecc_core::hash::HashFn;
use ecc_core::point::{curve_ref, Point};
use ecc_core::random::OsRng;
use hex_literal::hex;
use sha2::Sha256;

#[test]
fn p256_rfc6979_vector_verifies() {
    let curve = curve_ref(by_name("P-256").unwrap());
    let scheme = Ecdsa::new(curve.clone(), HashFn::of::<Sha256>()).unwrap();

    let d = Fp::from_be_bytes(&curve.fn_, &hex!("C9AFA9D845BA75166B5C215767B1D6934E50C3DB36E89B127B8A622B120F6721")).unwrap();
    let r = hex!("EFD48B2AACB6A8FD1140DD9CD45E81D69D2C877B56AAF991C34D0EA84EAF3716");
    let s = hex!("F7CB1C942D657C41D436C7A1B6E29F65F3E900DBB9AFF4064DC4AB2F843ACDA8");
    let mut sig_bytes = r.to_vec();
    sig_bytes.extend_from_slice(&s);
    let sig = Signature::from_bytes(&curve, &sig_bytes).unwrap();

    let g = Point::from_affine(&curve, &curve.gx.clone(), &curve.gy.clone()).unwrap();
    let q = ecc_core::scalarmul::scalar_mul(&g, &d).unwrap();

    assert!(scheme.verify(&q, b"sample", &sig).is_ok());
}

#[test]
fn sign_then_verify_round_trips_on_secp256k1() {
    let curve = curve_ref(by_name("secp256k1").unwrap());
    let scheme = Ecdsa::new(curve.clone(), HashFn::of::<Sha256>()).unwrap();

    let d = Fp::from_u64(&curve.fn_, 0xDEAD_BEEF);
    let g = Point::from_affine(&curve, &curve.gx.clone(), &curve.gy.clone()).unwrap();
    let q = ecc_core::scalarmul::scalar_mul(&g, &d).unwrap();

    let mut rng = OsRng;
    let sig = scheme.sign(&mut rng, &d, b"a message to sign").unwrap();
    assert!(scheme.verify(&q, b"a message to sign", &sig).is_ok());
}

#[test]
fn verification_rejects_bit_flips() {
    let curve = curve_ref(by_name("secp256k1").unwrap());
    let scheme = Ecdsa::new(curve.clone(), HashFn::of::<Sha256>()).unwrap();

    let d = Fp::from_u64(&curve.fn_, 777);
    let g = Point::from_affine(&curve, &curve.gx.clone(), &curve.gy.clone()).unwrap();
    let q = ecc_core::scalarmul::scalar_mul(&g, &d).unwrap();

    let mut rng = OsRng;
    let sig = scheme.sign(&mut rng, &d, b"message").unwrap();
    assert!(scheme.verify(&q, b"message", &sig).is_ok());

    // Flipping a bit of the message must be rejected.
    assert!(scheme.verify(&q, b"Message", &sig).is_err());

    // Flipping a bit of the signature's `r || s` encoding must be rejected.
    let mut tampered = sig.to_bytes();
    let last = tampered.len() - 1;
    tampered[last] ^= 1;
    let tampered_sig = Signature::from_bytes(&curve, &tampered).unwrap();
    assert!(scheme.verify(&q, b"message", &tampered_sig).is_err());
}
