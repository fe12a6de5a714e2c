//! EC-Elgamal round-trip (spec.md §8 scenario 5) and homomorphism.

use ecc_core::curve::by_name;
use ecc_core::elgamal::{decrypt, encrypt, Ciphertext};
use ecc_core::field::Fp;
use ecc_core::point::{curve_ref, Point};
use ecc_core::random::OsRng;

#[test]
fn round_trip_with_d_one_and_m_equals_g() {
    let curve = curve_ref(by_name("secp256k1").unwrap());
    let g = Point::from_affine(&curve, &curve.gx.clone(), &curve.gy.clone()).unwrap();
    let d = Fp::from_u64(&curve.fn_, 1);
    let q = g.clone(); // Q = d*G = G when d = 1

    let mut rng = OsRng;
    let ct = encrypt(&mut rng, &g, &q, &g).unwrap();
    let recovered = decrypt(&d, &ct).unwrap();
    assert_eq!(recovered, g);
}

#[test]
fn round_trip_with_larger_secret() {
    let curve = curve_ref(by_name("secp256k1").unwrap());
    let g = Point::from_affine(&curve, &curve.gx.clone(), &curve.gy.clone()).unwrap();
    let d = Fp::from_u64(&curve.fn_, 424242);
    let q = ecc_core::scalarmul::scalar_mul(&g, &d).unwrap();
    let m = g.double().unwrap().double().unwrap(); // 4G

    let mut rng = OsRng;
    let ct = encrypt(&mut rng, &g, &q, &m).unwrap();
    let recovered = decrypt(&d, &ct).unwrap();
    assert_eq!(recovered, m);
}

#[test]
fn encryption_is_additively_homomorphic() {
    let curve = curve_ref(by_name("secp256k1").unwrap());
    let g = Point::from_affine(&curve, &curve.gx.clone(), &curve.gy.clone()).unwrap();
    let d = Fp::from_u64(&curve.fn_, 5);
    let q = ecc_core::scalarmul::scalar_mul(&g, &d).unwrap();

    let m1 = g.double().unwrap(); // 2G
    let m2 = g.double().unwrap().double().unwrap(); // 4G

    let mut rng = OsRng;
    let ct1 = encrypt(&mut rng, &g, &q, &m1).unwrap();
    let ct2 = encrypt(&mut rng, &g, &q, &m2).unwrap();
    let combined = Ciphertext { c: ct1.c.add(&ct2.c).unwrap(), d: ct1.d.add(&ct2.d).unwrap() };

    let recovered = decrypt(&d, &combined).unwrap();
    let expected = m1.add(&m2).unwrap();
    assert_eq!(recovered, expected);
}

#[test]
fn curve_mismatch_is_rejected() {
    let secp = curve_ref(by_name("secp256k1").unwrap());
    let p256 = curve_ref(by_name("P-256").unwrap());
    let g = Point::from_affine(&secp, &secp.gx.clone(), &secp.gy.clone()).unwrap();
    let q_other = Point::from_affine(&p256, &p256.gx.clone(), &p256.gy.clone()).unwrap();

    let mut rng = OsRng;
    assert!(matches!(encrypt(&mut rng, &g, &q_other, &g), Err(ecc_core::Error::CurveMismatch)));
}

#[test]
fn decrypt_rejects_a_scalar_from_a_different_field() {
    let secp = curve_ref(by_name("secp256k1").unwrap());
    let g = Point::from_affine(&secp, &secp.gx.clone(), &secp.gy.clone()).unwrap();

    let mut rng = OsRng;
    let ct = encrypt(&mut rng, &g, &g, &g).unwrap();

    let p256 = curve_ref(by_name("P-256").unwrap());
    let foreign_d = Fp::from_u64(&p256.fn_, 1);
    assert!(matches!(decrypt(&foreign_d, &ct), Err(ecc_core::Error::FieldMismatch)));
}
