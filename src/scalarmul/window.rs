//! Windowed base-point multiplier (spec.md §4.E): a precomputed table
//! accelerating repeated multiplication of one fixed point (typically a
//! curve's generator) by varying scalars. Not constant-time in the
//! scalar — callers multiplying a secret scalar by a secret point must
//! use [`crate::scalarmul::scalar_mul`] instead.

extern crate alloc;
use alloc::vec::Vec;

use crate::error::Error;
use crate::field::Fp;
use crate::point::{CurveRef, Point};

const WINDOW_BITS: usize = 8;
const WINDOW_SIZE: usize = 1 << WINDOW_BITS;

/// `T[j][k] = k * 2^(j*8) * P`, covering every base point up to the
/// curve's bit-length. Setup is a one-time cost; `mul` is then a table
/// lookup and sum per 8-bit window of the scalar.
pub struct BasePointTable {
    curve: CurveRef,
    levels: usize,
    table: Vec<Vec<Point>>,
}

impl BasePointTable {
    /// Build the table for `point`. Calling this twice for logically
    /// the same point duplicates the (one-time) setup cost; callers
    /// that want memoization should build the table once and hold onto
    /// it (e.g. a signing scheme caching the table for its generator).
    pub fn new(point: &Point) -> Result<Self, Error> {
        let bits = point.curve().bits;
        let levels = bits.div_ceil(WINDOW_BITS);
        let mut table = Vec::with_capacity(levels);
        let mut base = point.clone();
        for _ in 0..levels {
            let mut row = Vec::with_capacity(WINDOW_SIZE);
            row.push(Point::neutral(&point.curve));
            for k in 1..WINDOW_SIZE {
                let prev = row[k - 1].clone();
                row.push(prev.add(&base)?);
            }
            let next_base = row[WINDOW_SIZE - 1].add(&base)?;
            table.push(row);
            base = next_base;
        }
        Ok(BasePointTable { curve: point.curve.clone(), levels, table })
    }

    /// `scalar * P`, `P` the point the table was built for.
    pub fn mul(&self, scalar: &Fp) -> Result<Point, Error> {
        let mut acc = Point::neutral(&self.curve);
        for (j, row) in self.table.iter().enumerate().take(self.levels) {
            let mut d: usize = 0;
            for bit in 0..WINDOW_BITS {
                let idx = j * WINDOW_BITS + bit;
                let b = scalar.bit(idx).unwrap_u8();
                d |= (b as usize) << bit;
            }
            acc = acc.add(&row[d])?;
        }
        Ok(acc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::named;
    use crate::point::{curve_ref, AsRefCurve};

    #[test]
    fn windowed_matches_ladder_for_secp256k1() {
        let curve = curve_ref(named::REGISTRY.iter().find(|e| e.name == "secp256k1").unwrap().build().unwrap());
        let g = Point::from_affine(&curve, &curve.as_ref_curve().gx.clone(), &curve.as_ref_curve().gy.clone()).unwrap();
        let table = BasePointTable::new(&g).unwrap();

        let seven = Fp::from_u64(&curve.as_ref_curve().fn_, 7);
        let by_table = table.mul(&seven).unwrap();
        let by_ladder = crate::scalarmul::scalar_mul(&g, &seven).unwrap();
        assert_eq!(by_table, by_ladder);
    }

    #[test]
    fn windowed_zero_scalar_is_neutral() {
        let curve = curve_ref(named::REGISTRY.iter().find(|e| e.name == "secp256k1").unwrap().build().unwrap());
        let g = Point::from_affine(&curve, &curve.as_ref_curve().gx.clone(), &curve.as_ref_curve().gy.clone()).unwrap();
        let table = BasePointTable::new(&g).unwrap();
        let zero = Fp::zero(&curve.as_ref_curve().fn_);
        let r = table.mul(&zero).unwrap();
        assert!(r.is_neutral());
    }
}
