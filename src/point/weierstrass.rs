//! Jacobian-coordinate addition/doubling shared by `ShortWeierstrass` and
//! Montgomery-as-Weierstrass curves (2007 Bernstein-Lange formulas,
//! spec.md §4.D).

use crate::error::Error;
use crate::field::Fp;

/// A point in Jacobian coordinates, `(x, y, z)` with affine image
/// `(x/z^2, y/z^3)`.
#[derive(Clone)]
pub(crate) struct Jacobian {
    pub x: Fp,
    pub y: Fp,
    pub z: Fp,
}

/// `P1 + P2`. `Ok(None)` means the sum is the neutral element
/// (`U1 == U2`, `S1 == -S2`); the caller is expected to special-case
/// `P1 == P2` (dispatch to [`double`]) before calling this.
pub(crate) fn add(p1: &Jacobian, p2: &Jacobian) -> Result<Option<Jacobian>, Error> {
    let z1z1 = p1.z.square();
    let z2z2 = p2.z.square();
    let u1 = p1.x.mul(&z2z2)?;
    let u2 = p2.x.mul(&z1z1)?;
    let s1 = p1.y.mul(&p2.z)?.mul(&z2z2)?;
    let s2 = p2.y.mul(&p1.z)?.mul(&z1z1)?;

    if u1 == u2 {
        if s1 == s2 {
            // caller should have routed this to `double`; still correct
            // to compute it here via the same formula family.
            return Ok(None);
        }
        return Ok(None);
    }

    let h = u2.sub(&u1)?;
    let two_h = h.add(&h)?;
    let i = two_h.square();
    let j = h.mul(&i)?;
    let r = s2.sub(&s1)?;
    let r = r.add(&r)?;
    let v = u1.mul(&i)?;

    let x3 = r.square().sub(&j)?.sub(&v)?.sub(&v)?;
    let y3_left = v.sub(&x3)?.mul(&r)?;
    let two_s1_j = s1.mul(&j)?.add(&s1.mul(&j)?)?;
    let y3 = y3_left.sub(&two_s1_j)?;

    let z_sum_sq = p1.z.add(&p2.z)?.square();
    let z3 = z_sum_sq.sub(&z1z1)?.sub(&z2z2)?.mul(&h)?;

    Ok(Some(Jacobian { x: x3, y: y3, z: z3 }))
}

/// `2*P` (2007 Bernstein-Lange), `a` the Weierstrass coefficient (or,
/// for Montgomery curves, the precomputed `ws_a`).
pub(crate) fn double(p: &Jacobian, a: &Fp) -> Result<Jacobian, Error> {
    let xx = p.x.square();
    let yy = p.y.square();
    let yyyy = yy.square();
    let zz = p.z.square();

    let s = p.x.add(&yy)?.square().sub(&xx)?.sub(&yyyy)?;
    let s = s.add(&s)?;

    let m = xx.add(&xx)?.add(&xx)?.add(&a.mul(&zz)?)?;
    let t = m.square().sub(&s)?.sub(&s)?;

    let x3 = t.clone();
    let eight_yyyy = yyyy.add(&yyyy)?.add(&yyyy)?.add(&yyyy)?.add(&yyyy)?.add(&yyyy)?.add(&yyyy)?.add(&yyyy)?.add(&yyyy)?;
    let y3 = m.mul(&s.sub(&t)?)?.sub(&eight_yyyy)?;

    let z3 = p.y.add(&p.z)?.square().sub(&yy)?.sub(&zz)?;

    Ok(Jacobian { x: x3, y: y3, z: z3 })
}

/// Affine `(x, y)` from Jacobian coordinates.
pub(crate) fn to_affine(p: &Jacobian) -> Result<(Fp, Fp), Error> {
    let z_inv = p.z.invert()?;
    let z_inv2 = z_inv.square();
    let z_inv3 = z_inv2.mul(&z_inv)?;
    Ok((p.x.mul(&z_inv2)?, p.y.mul(&z_inv3)?))
}
