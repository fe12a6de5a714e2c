//! Scalar multiplication: ladder vs. windowed base-point table agreement,
//! and the codec round-trip property from spec.md §8.

use ecc_core::curve::by_name;
use ecc_core::field::Fp;
use ecc_core::point::{curve_ref, Point};
use ecc_core::scalarmul::{scalar_mul, BasePointTable};

fn generator(name: &str) -> Point {
    let curve = curve_ref(by_name(name).unwrap());
    Point::from_affine(&curve, &curve.gx.clone(), &curve.gy.clone()).unwrap()
}

#[test]
fn ladder_matches_repeated_doubling() {
    let g = generator("secp256k1");
    let curve = g.curve();
    let four = Fp::from_u64(&curve.fn_, 4);
    let by_ladder = scalar_mul(&g, &four).unwrap();
    let by_doubling = g.double().unwrap().double().unwrap();
    assert_eq!(by_ladder, by_doubling);
}

#[test]
fn ladder_by_zero_is_neutral() {
    let g = generator("P-256");
    let curve = g.curve();
    let zero = Fp::zero(&curve.fn_);
    assert!(scalar_mul(&g, &zero).unwrap().is_neutral());
}

#[test]
fn windowed_table_matches_ladder() {
    let g = generator("secp256k1");
    let curve = g.curve();
    let table = BasePointTable::new(&g).unwrap();
    for k in [1u64, 2, 3, 17, 255, 256, 65537] {
        let scalar = Fp::from_u64(&curve.fn_, k);
        let via_ladder = scalar_mul(&g, &scalar).unwrap();
        let via_table = table.mul(&scalar).unwrap();
        assert_eq!(via_ladder, via_table, "mismatch for k={k}");
    }
}

#[test]
fn scalar_mul_is_additive() {
    let g = generator("secp256k1");
    let curve = g.curve();
    let a = Fp::from_u64(&curve.fn_, 11);
    let b = Fp::from_u64(&curve.fn_, 13);
    let ab = a.add(&b).unwrap();

    let lhs = scalar_mul(&g, &ab).unwrap();
    let rhs = scalar_mul(&g, &a).unwrap().add(&scalar_mul(&g, &b).unwrap()).unwrap();
    assert_eq!(lhs, rhs);
}

#[test]
fn compressed_and_uncompressed_codec_round_trip() {
    for name in ["secp256k1", "P-256", "Ed25519"] {
        let g = generator(name);
        let curve = curve_ref(by_name(name).unwrap());

        let compressed = g.encode_compressed().unwrap();
        assert_eq!(Point::decode(&curve, &compressed).unwrap(), g);

        let uncompressed = g.encode_uncompressed().unwrap();
        assert_eq!(Point::decode(&curve, &uncompressed).unwrap(), g);
    }
}

#[test]
fn curve25519_scalar_one_is_identity_on_x_equals_9() {
    // spec.md §8 scenario 2: on the internal Weierstrass form, scalar 1
    // maps back to the external `x = 9` base point unchanged.
    let g = generator("Curve25519");
    let (x, _) = scalar_mul(&g, &Fp::from_u64(&g.curve().fn_, 1)).unwrap().affine().unwrap().unwrap();
    let (gx, _) = g.affine().unwrap().unwrap();
    assert_eq!(x, gx);

    let nine = Fp::from_u64(&g.curve().fp, 9);
    assert_eq!(gx, nine);
}

#[test]
fn curve25519_scalar_nine_matches_repeated_addition() {
    // spec.md §8 scenario 2: the ninth multiple of the base point, built
    // two independent ways, must agree.
    let g = generator("Curve25519");
    let by_ladder = scalar_mul(&g, &Fp::from_u64(&g.curve().fn_, 9)).unwrap();

    let mut by_addition = g.clone();
    for _ in 0..8 {
        by_addition = by_addition.add(&g).unwrap();
    }
    assert_eq!(by_ladder, by_addition);
}

#[test]
fn neutral_codec_round_trip() {
    let curve = curve_ref(by_name("secp256k1").unwrap());
    let neutral = Point::neutral(&curve);

    let compressed = neutral.encode_compressed().unwrap();
    assert!(Point::decode(&curve, &compressed).unwrap().is_neutral());

    let uncompressed = neutral.encode_uncompressed().unwrap();
    assert!(Point::decode(&curve, &uncompressed).unwrap().is_neutral());
}
