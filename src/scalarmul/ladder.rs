//! Generic constant-time Montgomery ladder (spec.md §4.E): the only
//! scalar-multiplication primitive required to be constant-time with
//! respect to the scalar. Works for any curve tag — the underlying
//! `Point::add` already dispatches add/double by tag.

use subtle::{Choice, ConditionallySelectable};

use crate::error::Error;
use crate::field::Fp;
use crate::point::Point;

fn cswap(a: &mut Point, b: &mut Point, cond: Choice) {
    Fp::cswap(&mut a.x, &mut b.x, cond);
    Fp::cswap(&mut a.y, &mut b.y, cond);
    Fp::cswap(&mut a.z, &mut b.z, cond);
    let mut an = a.is_neutral as u8;
    let mut bn = b.is_neutral as u8;
    u8::conditional_swap(&mut an, &mut bn, cond);
    a.is_neutral = an != 0;
    b.is_neutral = bn != 0;
}

/// `scalar * point`. The scalar's bits are read MSB-first over the
/// curve's bit-length; the ladder performs the same sequence of
/// point operations regardless of the scalar's value.
pub fn scalar_mul(point: &Point, scalar: &Fp) -> Result<Point, Error> {
    let curve = point.curve.clone();
    let bits = point.curve().bits;
    let mut r0 = Point::neutral(&curve);
    let mut r1 = point.clone();
    for i in (0..bits).rev() {
        let b = scalar.bit(i);
        cswap(&mut r0, &mut r1, b);
        r1 = r1.add(&r0)?;
        r0 = r0.add(&r0)?;
        cswap(&mut r0, &mut r1, b);
    }
    Ok(r0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::named;
    use crate::point::{curve_ref, AsRefCurve};

    fn secp256k1() -> crate::point::CurveRef {
        curve_ref(named::REGISTRY.iter().find(|e| e.name == "secp256k1").unwrap().build().unwrap())
    }

    #[test]
    fn scalar_two_matches_doubling() {
        let curve = secp256k1();
        let g = Point::from_affine(&curve, &curve.as_ref_curve().gx.clone(), &curve.as_ref_curve().gy.clone()).unwrap();
        let two = Fp::from_u64(&curve.as_ref_curve().fn_, 2);
        let by_ladder = scalar_mul(&g, &two).unwrap();
        let by_doubling = g.double().unwrap();
        assert_eq!(by_ladder, by_doubling);
    }

    #[test]
    fn scalar_zero_is_neutral() {
        let curve = secp256k1();
        let g = Point::from_affine(&curve, &curve.as_ref_curve().gx.clone(), &curve.as_ref_curve().gy.clone()).unwrap();
        let zero = Fp::zero(&curve.as_ref_curve().fn_);
        let r = scalar_mul(&g, &zero).unwrap();
        assert!(r.is_neutral());
    }

    #[test]
    fn toy_curve_four_times_generator_matches_repeated_doubling() {
        // y^2 = x^3 + 2x + 2 mod 17, order 19, generator (5, 1): small
        // enough to cross-check the ladder against repeated doubling.
        let params = crate::curve::CurveParams {
            name: "toy",
            modulus: &[17],
            order: &[19],
            cofactor: 1,
            a: &[2],
            b: &[2],
            gx: &[5],
            gy: &[1],
        };
        let curve = curve_ref(crate::curve::Curve::short_weierstrass(&params).unwrap());
        let g = Point::from_affine(&curve, &curve.as_ref_curve().gx.clone(), &curve.as_ref_curve().gy.clone()).unwrap();
        let four = Fp::from_u64(&curve.as_ref_curve().fn_, 4);
        let by_ladder = scalar_mul(&g, &four).unwrap();
        let by_doubling = g.double().unwrap().double().unwrap();
        assert_eq!(by_ladder, by_doubling);
    }
}
