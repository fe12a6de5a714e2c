//! Projective-coordinate addition for Edwards and twisted-Edwards curves
//! (2007 Bernstein-Lange / 2008 BBJLP formulas, spec.md §4.D). Both laws
//! are complete: addition doubles correctly when the two inputs are the
//! same point, so there is no separate doubling routine.

use crate::error::Error;
use crate::field::Fp;

/// A point in projective coordinates, `(x, y, z)` with affine image
/// `(x/z, y/z)`.
#[derive(Clone)]
pub(crate) struct Projective {
    pub x: Fp,
    pub y: Fp,
    pub z: Fp,
}

/// Edwards addition: `x^2 + y^2 = c^2*(1 + d*x^2*y^2)`. `c` is the
/// curve's `a`-slot coefficient, `d` its `b`-slot coefficient.
pub(crate) fn add(p1: &Projective, p2: &Projective, c: &Fp, d: &Fp) -> Result<Projective, Error> {
    let a = p1.z.mul(&p2.z)?;
    let b = a.square();
    let cc = p1.x.mul(&p2.x)?;
    let dd = p1.y.mul(&p2.y)?;
    let e = d.mul(&cc)?.mul(&dd)?;
    let f = b.sub(&e)?;
    let g = b.add(&e)?;

    let sum_x = p1.x.add(&p1.y)?.mul(&p2.x.add(&p2.y)?)?.sub(&cc)?.sub(&dd)?;
    let x3 = a.mul(&f)?.mul(&sum_x)?;
    let y3 = a.mul(&g)?.mul(&dd.sub(&cc)?)?;
    let z3 = c.mul(&f)?.mul(&g)?;

    Ok(Projective { x: x3, y: y3, z: z3 })
}

/// Twisted-Edwards addition: `a*x^2 + y^2 = 1 + d*x^2*y^2`. `a` and `d`
/// are the curve's `a`-slot and `b`-slot coefficients respectively.
pub(crate) fn add_twisted(p1: &Projective, p2: &Projective, a_coeff: &Fp, d: &Fp) -> Result<Projective, Error> {
    let a = p1.z.mul(&p2.z)?;
    let b = a.square();
    let cc = p1.x.mul(&p2.x)?;
    let dd = p1.y.mul(&p2.y)?;
    let e = d.mul(&cc)?.mul(&dd)?;
    let f = b.sub(&e)?;
    let g = b.add(&e)?;

    let sum_x = p1.x.add(&p1.y)?.mul(&p2.x.add(&p2.y)?)?.sub(&cc)?.sub(&dd)?;
    let x3 = a.mul(&f)?.mul(&sum_x)?;
    let y3 = a.mul(&g)?.mul(&dd.sub(&a_coeff.mul(&cc)?)?)?;
    let z3 = f.mul(&g)?;

    Ok(Projective { x: x3, y: y3, z: z3 })
}

/// Affine `(x, y)` from projective coordinates.
pub(crate) fn to_affine(p: &Projective) -> Result<(Fp, Fp), Error> {
    let z_inv = p.z.invert()?;
    Ok((p.x.mul(&z_inv)?, p.y.mul(&z_inv)?))
}
