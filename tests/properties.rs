//! Algebraic-property tests (spec.md §8): field-ring axioms and the
//! scalar-multiplication homomorphism, exercised over random inputs via
//! `proptest` rather than the fixed vectors in the other `tests/` files.

use ecc_core::curve::by_name;
use ecc_core::field::Fp;
use ecc_core::point::{curve_ref, Point};
use ecc_core::scalarmul::scalar_mul;
use proptest::prelude::*;

proptest! {
    #[test]
    fn field_add_is_commutative(a: u64, b: u64) {
        let curve = curve_ref(by_name("secp256k1").unwrap());
        let fp = curve.fp.clone();
        let x = Fp::from_u64(&fp, a);
        let y = Fp::from_u64(&fp, b);
        prop_assert_eq!(x.add(&y).unwrap(), y.add(&x).unwrap());
    }

    #[test]
    fn field_add_is_associative(a: u64, b: u64, c: u64) {
        let curve = curve_ref(by_name("secp256k1").unwrap());
        let fp = curve.fp.clone();
        let x = Fp::from_u64(&fp, a);
        let y = Fp::from_u64(&fp, b);
        let z = Fp::from_u64(&fp, c);
        let lhs = x.add(&y).unwrap().add(&z).unwrap();
        let rhs = x.add(&y.add(&z).unwrap()).unwrap();
        prop_assert_eq!(lhs, rhs);
    }

    #[test]
    fn field_mul_is_commutative(a: u64, b: u64) {
        let curve = curve_ref(by_name("secp256k1").unwrap());
        let fp = curve.fp.clone();
        let x = Fp::from_u64(&fp, a);
        let y = Fp::from_u64(&fp, b);
        prop_assert_eq!(x.mul(&y).unwrap(), y.mul(&x).unwrap());
    }

    #[test]
    fn field_distributes_over_addition(a: u64, b: u64, c: u64) {
        let curve = curve_ref(by_name("secp256k1").unwrap());
        let fp = curve.fp.clone();
        let x = Fp::from_u64(&fp, a);
        let y = Fp::from_u64(&fp, b);
        let z = Fp::from_u64(&fp, c);
        let lhs = x.mul(&y.add(&z).unwrap()).unwrap();
        let rhs = x.mul(&y).unwrap().add(&x.mul(&z).unwrap()).unwrap();
        prop_assert_eq!(lhs, rhs);
    }

    #[test]
    fn field_additive_inverse_cancels(a: u64) {
        let curve = curve_ref(by_name("secp256k1").unwrap());
        let fp = curve.fp.clone();
        let x = Fp::from_u64(&fp, a);
        let sum = x.add(&x.neg()).unwrap();
        prop_assert!(bool::from(sum.is_zero()));
    }

    #[test]
    fn scalar_mul_is_homomorphic(a in 1u64..=0xFFFF, b in 1u64..=0xFFFF) {
        let curve = curve_ref(by_name("secp256k1").unwrap());
        let g = Point::from_affine(&curve, &curve.gx.clone(), &curve.gy.clone()).unwrap();
        let fn_ = curve.fn_.clone();
        let ka = Fp::from_u64(&fn_, a);
        let kb = Fp::from_u64(&fn_, b);
        let sum = ka.add(&kb).unwrap();

        let lhs = scalar_mul(&g, &sum).unwrap();
        let rhs = scalar_mul(&g, &ka).unwrap().add(&scalar_mul(&g, &kb).unwrap()).unwrap();
        prop_assert_eq!(lhs, rhs);
    }

    #[test]
    fn point_addition_is_commutative(a in 1u64..=0xFFFF, b in 1u64..=0xFFFF) {
        let curve = curve_ref(by_name("secp256k1").unwrap());
        let g = Point::from_affine(&curve, &curve.gx.clone(), &curve.gy.clone()).unwrap();
        let fn_ = curve.fn_.clone();
        let pa = scalar_mul(&g, &Fp::from_u64(&fn_, a)).unwrap();
        let pb = scalar_mul(&g, &Fp::from_u64(&fn_, b)).unwrap();
        prop_assert_eq!(pa.add(&pb).unwrap(), pb.add(&pa).unwrap());
    }
}
