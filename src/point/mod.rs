//! Elliptic-curve point engine (spec.md §4.D): affine import/export, the
//! SEC1-style compressed/uncompressed codec, and curve-tag dispatch over
//! [`weierstrass`] and [`edwards`] add/double formulas.

pub(crate) mod edwards;
pub(crate) mod weierstrass;

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

use crate::curve::{Curve, CurveTag};
use crate::error::Error;
use crate::field::Fp;

#[cfg(feature = "std")]
/// Shared handle to a [`Curve`]; many points typically reference the same
/// curve, so this is reference-counted under `std`.
pub type CurveRef = std::sync::Arc<Curve>;
#[cfg(not(feature = "std"))]
/// Shared handle to a [`Curve`]. Without `std` there is no atomic
/// refcount available, so each point holds its own copy.
pub type CurveRef = Curve;

/// Wrap a freshly built [`Curve`] for sharing across points.
#[cfg(feature = "std")]
pub fn curve_ref(curve: Curve) -> CurveRef {
    std::sync::Arc::new(curve)
}
#[cfg(not(feature = "std"))]
pub fn curve_ref(curve: Curve) -> CurveRef {
    curve
}

/// A point on some curve. Representation varies by curve tag (spec
/// §3): Jacobian for `ShortWeierstrass`/`Montgomery` (the latter stored
/// in its isomorphic internal Weierstrass form), projective for
/// `Edwards`/`TwistedEdwards`.
#[derive(Clone)]
pub struct Point {
    pub(crate) curve: CurveRef,
    pub(crate) x: Fp,
    pub(crate) y: Fp,
    pub(crate) z: Fp,
    pub(crate) is_neutral: bool,
}

impl core::fmt::Debug for Point {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Point")
            .field("curve", &self.curve.name)
            .field("is_neutral", &self.is_neutral)
            .finish()
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Point) -> bool {
        if self.curve.as_ref_curve() != other.curve.as_ref_curve() {
            return false;
        }
        if self.is_neutral || other.is_neutral {
            return self.is_neutral == other.is_neutral;
        }
        match self.curve.tag {
            CurveTag::ShortWeierstrass | CurveTag::Montgomery => {
                let z1_2 = self.z.square();
                let z2_2 = other.z.square();
                let (lx, rx) = match (self.x.mul(&z2_2), other.x.mul(&z1_2)) {
                    (Ok(l), Ok(r)) => (l, r),
                    _ => return false,
                };
                if lx != rx {
                    return false;
                }
                let (z1_3, z2_3) = match (z1_2.mul(&self.z), z2_2.mul(&other.z)) {
                    (Ok(l), Ok(r)) => (l, r),
                    _ => return false,
                };
                match (self.y.mul(&z2_3), other.y.mul(&z1_3)) {
                    (Ok(l), Ok(r)) => l == r,
                    _ => false,
                }
            }
            CurveTag::Edwards | CurveTag::TwistedEdwards => {
                let (lx, rx) = match (self.x.mul(&other.z), other.x.mul(&self.z)) {
                    (Ok(l), Ok(r)) => (l, r),
                    _ => return false,
                };
                if lx != rx {
                    return false;
                }
                match (self.y.mul(&other.z), other.y.mul(&self.z)) {
                    (Ok(l), Ok(r)) => l == r,
                    _ => false,
                }
            }
        }
    }
}

/// Small helper so comparisons above read the same whether `CurveRef`
/// is `Arc<Curve>` (std) or `Curve` (no_std).
pub(crate) trait AsRefCurve {
    fn as_ref_curve(&self) -> &Curve;
}
#[cfg(feature = "std")]
impl AsRefCurve for CurveRef {
    fn as_ref_curve(&self) -> &Curve {
        self.as_ref()
    }
}
#[cfg(not(feature = "std"))]
impl AsRefCurve for CurveRef {
    fn as_ref_curve(&self) -> &Curve {
        self
    }
}

fn weierstrass_a_coeff(curve: &CurveRef) -> Fp {
    match curve.tag {
        CurveTag::ShortWeierstrass => curve.a.clone(),
        CurveTag::Montgomery => curve
            .montgomery
            .as_ref()
            .expect("montgomery curve always carries derived coefficients")
            .ws_a
            .clone(),
        _ => unreachable!("only called for Weierstrass-shaped tags"),
    }
}

impl Point {
    /// Import an affine `(x, y)`, validating against the curve equation
    /// (spec §4.D: "Import must check point-on-curve"). Montgomery
    /// curves are transformed to their internal Weierstrass form:
    /// `u = x/B + A/3`, `v = y/B`.
    pub fn from_affine(curve: &CurveRef, x: &Fp, y: &Fp) -> Result<Point, Error> {
        if !curve.is_on_curve(x, y) {
            return Err(Error::PointNotOnCurve);
        }
        let one = Fp::one(&curve.fp);
        match curve.tag {
            CurveTag::ShortWeierstrass | CurveTag::Edwards | CurveTag::TwistedEdwards => Ok(Point {
                curve: curve.clone(),
                x: x.clone(),
                y: y.clone(),
                z: one,
                is_neutral: false,
            }),
            CurveTag::Montgomery => {
                let m = curve
                    .montgomery
                    .as_ref()
                    .expect("montgomery curve always carries derived coefficients");
                let u = x.mul(&m.b_inv)?.add(&m.a_third)?;
                let v = y.mul(&m.b_inv)?;
                Ok(Point {
                    curve: curve.clone(),
                    x: u,
                    y: v,
                    z: one,
                    is_neutral: false,
                })
            }
        }
    }

    /// The curve's neutral (identity) element.
    pub fn neutral(curve: &CurveRef) -> Point {
        let one = Fp::one(&curve.fp);
        match curve.tag {
            CurveTag::ShortWeierstrass | CurveTag::Montgomery => Point {
                curve: curve.clone(),
                x: one.clone(),
                y: one.clone(),
                z: one,
                is_neutral: true,
            },
            CurveTag::Edwards => Point {
                curve: curve.clone(),
                x: Fp::zero(&curve.fp),
                y: curve.a.clone(),
                z: one,
                is_neutral: false,
            },
            CurveTag::TwistedEdwards => Point {
                curve: curve.clone(),
                x: Fp::zero(&curve.fp),
                y: one.clone(),
                z: one,
                is_neutral: false,
            },
        }
    }

    /// `true` iff this is the neutral element.
    pub fn is_neutral(&self) -> bool {
        self.is_neutral
            || match self.curve.tag {
                CurveTag::Edwards | CurveTag::TwistedEdwards => {
                    *self == Point::neutral(&self.curve)
                }
                _ => false,
            }
    }

    /// The curve this point lies on.
    pub fn curve(&self) -> &Curve {
        self.curve.as_ref_curve()
    }

    /// Export affine coordinates, in the curve's external form
    /// (Montgomery curves are converted back from the internal
    /// Weierstrass representation). `None` for the neutral element,
    /// which has no affine image (spec §4.D).
    pub fn affine(&self) -> Result<Option<(Fp, Fp)>, Error> {
        if self.is_neutral {
            return Ok(None);
        }
        match self.curve.tag {
            CurveTag::ShortWeierstrass => {
                let j = weierstrass::Jacobian { x: self.x.clone(), y: self.y.clone(), z: self.z.clone() };
                let (x, y) = weierstrass::to_affine(&j)?;
                Ok(Some((x, y)))
            }
            CurveTag::Montgomery => {
                let j = weierstrass::Jacobian { x: self.x.clone(), y: self.y.clone(), z: self.z.clone() };
                let (u, v) = weierstrass::to_affine(&j)?;
                let m = self
                    .curve
                    .montgomery
                    .as_ref()
                    .expect("montgomery curve always carries derived coefficients");
                let x = u.sub(&m.a_third)?.mul(&self.curve.a)?;
                let y = v.mul(&self.curve.a)?;
                Ok(Some((x, y)))
            }
            CurveTag::Edwards | CurveTag::TwistedEdwards => {
                let p = edwards::Projective { x: self.x.clone(), y: self.y.clone(), z: self.z.clone() };
                let (x, y) = edwards::to_affine(&p)?;
                Ok(Some((x, y)))
            }
        }
    }

    /// `self + other` (spec §4.D add/double formulas).
    pub fn add(&self, other: &Point) -> Result<Point, Error> {
        if self.curve.as_ref_curve() != other.curve.as_ref_curve() {
            return Err(Error::CurveMismatch);
        }
        match self.curve.tag {
            CurveTag::ShortWeierstrass | CurveTag::Montgomery => {
                if self.is_neutral {
                    return Ok(other.clone());
                }
                if other.is_neutral {
                    return Ok(self.clone());
                }
                let p1 = weierstrass::Jacobian { x: self.x.clone(), y: self.y.clone(), z: self.z.clone() };
                let p2 = weierstrass::Jacobian { x: other.x.clone(), y: other.y.clone(), z: other.z.clone() };

                let z1z1 = p1.z.square();
                let z2z2 = p2.z.square();
                let u1 = p1.x.mul(&z2z2)?;
                let u2 = p2.x.mul(&z1z1)?;
                let s1 = p1.y.mul(&p2.z)?.mul(&z2z2)?;
                let s2 = p2.y.mul(&p1.z)?.mul(&z1z1)?;

                if u1 == u2 {
                    if s1 == s2 {
                        let a = weierstrass_a_coeff(&self.curve);
                        let d = weierstrass::double(&p1, &a)?;
                        return Ok(Point { curve: self.curve.clone(), x: d.x, y: d.y, z: d.z, is_neutral: false });
                    }
                    return Ok(Point::neutral(&self.curve));
                }

                let sum = weierstrass::add(&p1, &p2)?.expect("u1 != u2 checked above");
                Ok(Point { curve: self.curve.clone(), x: sum.x, y: sum.y, z: sum.z, is_neutral: false })
            }
            CurveTag::Edwards => {
                let p1 = edwards::Projective { x: self.x.clone(), y: self.y.clone(), z: self.z.clone() };
                let p2 = edwards::Projective { x: other.x.clone(), y: other.y.clone(), z: other.z.clone() };
                let sum = edwards::add(&p1, &p2, &self.curve.a, &self.curve.b)?;
                Ok(Point { curve: self.curve.clone(), x: sum.x, y: sum.y, z: sum.z, is_neutral: false })
            }
            CurveTag::TwistedEdwards => {
                let p1 = edwards::Projective { x: self.x.clone(), y: self.y.clone(), z: self.z.clone() };
                let p2 = edwards::Projective { x: other.x.clone(), y: other.y.clone(), z: other.z.clone() };
                let sum = edwards::add_twisted(&p1, &p2, &self.curve.a, &self.curve.b)?;
                Ok(Point { curve: self.curve.clone(), x: sum.x, y: sum.y, z: sum.z, is_neutral: false })
            }
        }
    }

    /// `2 * self`.
    pub fn double(&self) -> Result<Point, Error> {
        match self.curve.tag {
            CurveTag::ShortWeierstrass | CurveTag::Montgomery => {
                if self.is_neutral {
                    return Ok(self.clone());
                }
                let a = weierstrass_a_coeff(&self.curve);
                let p = weierstrass::Jacobian { x: self.x.clone(), y: self.y.clone(), z: self.z.clone() };
                let d = weierstrass::double(&p, &a)?;
                Ok(Point { curve: self.curve.clone(), x: d.x, y: d.y, z: d.z, is_neutral: false })
            }
            CurveTag::Edwards | CurveTag::TwistedEdwards => self.add(self),
        }
    }

    /// `-self`.
    pub fn neg(&self) -> Point {
        match self.curve.tag {
            CurveTag::ShortWeierstrass | CurveTag::Montgomery => {
                if self.is_neutral {
                    return self.clone();
                }
                Point { curve: self.curve.clone(), x: self.x.clone(), y: self.y.neg(), z: self.z.clone(), is_neutral: false }
            }
            CurveTag::Edwards | CurveTag::TwistedEdwards => {
                Point { curve: self.curve.clone(), x: self.x.neg(), y: self.y.clone(), z: self.z.clone(), is_neutral: false }
            }
        }
    }

    /// Compressed SEC1-style encoding (spec §4.D/§6): `0x00 || zeros` for
    /// the neutral element, `0x02`/`0x03 || X` otherwise (parity of Y).
    #[cfg(feature = "alloc")]
    pub fn encode_compressed(&self) -> Result<Vec<u8>, Error> {
        let byte_len = self.curve.fp.byte_len();
        match self.affine()? {
            None => Ok(alloc::vec![0u8; 1 + byte_len]),
            Some((x, y)) => {
                let mut out = alloc::vec![0u8; 1 + byte_len];
                out[0] = if bool::from(y.is_odd()) { 0x03 } else { 0x02 };
                x.to_be_bytes(&mut out[1..]);
                Ok(out)
            }
        }
    }

    /// Uncompressed SEC1-style encoding: `0x04 || X || Y`.
    #[cfg(feature = "alloc")]
    pub fn encode_uncompressed(&self) -> Result<Vec<u8>, Error> {
        let byte_len = self.curve.fp.byte_len();
        match self.affine()? {
            None => Ok(alloc::vec![0u8; 1 + 2 * byte_len]),
            Some((x, y)) => {
                let mut out = alloc::vec![0u8; 1 + 2 * byte_len];
                out[0] = 0x04;
                x.to_be_bytes(&mut out[1..1 + byte_len]);
                y.to_be_bytes(&mut out[1 + byte_len..]);
                Ok(out)
            }
        }
    }

    /// Decode a SEC1-style encoding, rejecting points off the curve
    /// (spec §4.D).
    pub fn decode(curve: &CurveRef, bytes: &[u8]) -> Result<Point, Error> {
        let byte_len = curve.fp.byte_len();
        let Some(&tag) = bytes.first() else {
            return Err(Error::PointNotOnCurve);
        };
        match tag {
            0x00 => {
                if bytes.len() != 1 + byte_len && bytes.len() != 1 + 2 * byte_len {
                    return Err(Error::PointNotOnCurve);
                }
                if bytes[1..].iter().any(|&b| b != 0) {
                    return Err(Error::PointNotOnCurve);
                }
                Ok(Point::neutral(curve))
            }
            0x02 | 0x03 => {
                if bytes.len() != 1 + byte_len {
                    return Err(Error::PointNotOnCurve);
                }
                let x = Fp::from_be_bytes(&curve.fp, &bytes[1..])?;
                let y = decompress_y(curve, &x, tag == 0x03)?;
                Point::from_affine(curve, &x, &y)
            }
            0x04 => {
                if bytes.len() != 1 + 2 * byte_len {
                    return Err(Error::PointNotOnCurve);
                }
                let x = Fp::from_be_bytes(&curve.fp, &bytes[1..1 + byte_len])?;
                let y = Fp::from_be_bytes(&curve.fp, &bytes[1 + byte_len..])?;
                Point::from_affine(curve, &x, &y)
            }
            _ => Err(Error::PointNotOnCurve),
        }
    }
}

/// Recover `y` from `x` (external/natural curve form) for decompression,
/// per the curve's equation, then fix parity to match `want_odd`.
fn decompress_y(curve: &CurveRef, x: &Fp, want_odd: bool) -> Result<Fp, Error> {
    let fp = &curve.fp;
    let candidate = match curve.tag {
        CurveTag::ShortWeierstrass => x.square().mul(x)?.add(&curve.a.mul(x)?)?.add(&curve.b)?,
        CurveTag::Montgomery => {
            let m = curve
                .montgomery
                .as_ref()
                .expect("montgomery curve always carries derived coefficients");
            let rhs = x.square().mul(x)?.add(&curve.b.mul(&x.square())?)?.add(x)?;
            rhs.mul(&m.b_inv)?
        }
        CurveTag::Edwards => {
            let c2 = curve.a.square();
            let numerator = c2.sub(&x.square())?;
            let denominator = Fp::one(fp).sub(&c2.mul(&curve.b)?.mul(&x.square())?)?;
            numerator.mul(&denominator.invert()?)?
        }
        CurveTag::TwistedEdwards => {
            let numerator = Fp::one(fp).sub(&curve.a.mul(&x.square())?)?;
            let denominator = Fp::one(fp).sub(&curve.b.mul(&x.square())?)?;
            numerator.mul(&denominator.invert()?)?
        }
    };
    let root = candidate.sqrt()?;
    let root_odd = bool::from(root.is_odd());
    Ok(if root_odd == want_odd { root } else { root.neg() })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::named;

    #[test]
    fn secp256k1_generator_add_self_equals_double() {
        let curve = curve_ref(named::REGISTRY.iter().find(|e| e.name == "secp256k1").unwrap().build().unwrap());
        let g = Point::from_affine(&curve, &curve.as_ref_curve().gx.clone(), &curve.as_ref_curve().gy.clone()).unwrap();
        let sum = g.add(&g).unwrap();
        let doubled = g.double().unwrap();
        assert_eq!(sum, doubled);
    }

    #[test]
    fn point_plus_negation_is_neutral() {
        let curve = curve_ref(named::REGISTRY.iter().find(|e| e.name == "secp256k1").unwrap().build().unwrap());
        let g = Point::from_affine(&curve, &curve.as_ref_curve().gx.clone(), &curve.as_ref_curve().gy.clone()).unwrap();
        let sum = g.add(&g.neg()).unwrap();
        assert!(sum.is_neutral());
    }

    #[test]
    fn compressed_roundtrip() {
        let curve = curve_ref(named::REGISTRY.iter().find(|e| e.name == "secp256k1").unwrap().build().unwrap());
        let g = Point::from_affine(&curve, &curve.as_ref_curve().gx.clone(), &curve.as_ref_curve().gy.clone()).unwrap();
        let enc = g.encode_compressed().unwrap();
        let dec = Point::decode(&curve, &enc).unwrap();
        assert_eq!(g, dec);
    }

    #[test]
    fn ed25519_generator_add_self_equals_double() {
        let curve = curve_ref(named::REGISTRY.iter().find(|e| e.name == "Ed25519").unwrap().build().unwrap());
        let g = Point::from_affine(&curve, &curve.as_ref_curve().gx.clone(), &curve.as_ref_curve().gy.clone()).unwrap();
        let sum = g.add(&g).unwrap();
        let doubled = g.double().unwrap();
        assert_eq!(sum, doubled);
    }
}
