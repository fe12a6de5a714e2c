//! `Fp`: a constant-time element of a prime field (spec.md §4.B).

use core::cmp::Ordering;

use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

use crate::error::Error;
use crate::random::RandomSource;

use super::limb::{self, sbb, DoubleWide, Wide, MAX_LIMBS};
use super::FieldParams;

#[cfg(feature = "std")]
type FieldRef = std::sync::Arc<FieldParams>;
#[cfg(not(feature = "std"))]
type FieldRef = FieldParams;

/// An element of `Fp`, for some interned field `Fp`.
///
/// Invariant: `0 <= self.i < self.fp.p`, and only the low `fp.psize` limbs
/// of `i` are ever significant (higher limbs are always zero).
#[derive(Clone)]
pub struct Fp {
    fp: FieldRef,
    i: Wide,
}

impl core::fmt::Debug for Fp {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Fp(psize={})", self.fp.psize)
    }
}

impl ConstantTimeEq for Fp {
    fn ct_eq(&self, other: &Self) -> Choice {
        if self.fp != other.fp {
            return Choice::from(0);
        }
        let n = self.fp.psize;
        let mut acc = 1u8;
        for i in 0..n {
            acc &= self.i[i].ct_eq(&other.i[i]).unwrap_u8();
        }
        Choice::from(acc)
    }
}

impl PartialEq for Fp {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}
impl Eq for Fp {}

impl ConditionallySelectable for Fp {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        debug_assert!(a.fp == b.fp);
        let mut out = a.i;
        for i in 0..a.fp.psize {
            out[i] = u64::conditional_select(&a.i[i], &b.i[i], choice);
        }
        Fp { fp: a.fp.clone(), i: out }
    }
}

/// Zeroizes the limbs only; `fp` is a shared field descriptor, not secret
/// material, and is left alone (mirrors the convention in `safe_memory`).
#[cfg(feature = "zeroize")]
impl zeroize::Zeroize for Fp {
    fn zeroize(&mut self) {
        self.i.zeroize();
    }
}

impl Fp {
    fn fp_ref(fp: &FieldRef) -> FieldRef {
        fp.clone()
    }

    /// The additive identity of `fp`.
    pub fn zero(fp: &FieldRef) -> Self {
        Fp { fp: Self::fp_ref(fp), i: [0u64; MAX_LIMBS] }
    }

    /// The multiplicative identity of `fp`.
    pub fn one(fp: &FieldRef) -> Self {
        Self::from_u64(fp, 1)
    }

    /// Build the element `a mod p`, from an unsigned machine word.
    pub fn from_u64(fp: &FieldRef, a: u64) -> Self {
        let mut i = [0u64; MAX_LIMBS];
        i[0] = a;
        let mut out = Fp { fp: Self::fp_ref(fp), i };
        out.reduce_once();
        out
    }

    /// Build the element `a mod p`, from a big-endian byte encoding. The
    /// input may be up to `psize` limbs wide and need not already be
    /// reduced below `p`.
    pub fn from_be_bytes(fp: &FieldRef, bytes: &[u8]) -> Result<Self, Error> {
        let n = fp.psize;
        let wide = limb::from_be_bytes(bytes, n).ok_or(Error::PointNotOnCurve)?;
        let mut out = Fp { fp: Self::fp_ref(fp), i: wide };
        out.reduce_from_wide(&wide, n * 64);
        Ok(out)
    }

    /// `true` iff this is zero.
    pub fn is_zero(&self) -> Choice {
        let n = self.fp.psize;
        let mut acc = 0u64;
        for i in 0..n {
            acc |= self.i[i];
        }
        acc.ct_eq(&0)
    }

    /// Handle to this element's field.
    pub fn field(&self) -> &FieldParams {
        &self.fp
    }

    fn same_field(&self, other: &Fp) -> Result<(), Error> {
        if self.fp == other.fp {
            Ok(())
        } else {
            Err(Error::FieldMismatch)
        }
    }

    /// Reduce `self.i`, currently known to be `< 2p`, into `[0, p)`.
    fn reduce_once(&mut self) {
        let n = self.fp.psize;
        let mut t = [0u64; MAX_LIMBS];
        let borrow = limb::sub_n(&mut t, &self.i, &self.fp.p, n);
        // borrow == 1 means self.i < p already, keep self.i; else use t.
        let take = Choice::from((1 - borrow) as u8);
        for k in 0..n {
            self.i[k] = u64::conditional_select(&self.i[k], &t[k], take);
        }
    }

    /// Reduce a value of `total_bits` significant bits mod `p`, writing
    /// the result (width `psize`) into `self.i`. Implements the
    /// "delegate to the big-integer library's mod" step of spec §4.B via
    /// plain binary long division (schoolbook mod, bit-serial
    /// shift-and-subtract). Correct, not the fastest possible, but runs
    /// in a data-independent number of steps for a fixed field, matching
    /// the constant-time discipline spec.md asks of the add/sub layer.
    /// `bit_at` yields bit `i` (0 = least significant) of the source
    /// value; its source may be wider or narrower than `psize` limbs.
    fn reduce_bits(&mut self, total_bits: usize, bit_at: impl Fn(usize) -> u64) {
        let n = self.fp.psize;
        let mut rem = [0u64; MAX_LIMBS];
        for bit in (0..total_bits).rev() {
            let mut carry = bit_at(bit);
            for limb in rem.iter_mut().take(n) {
                let new_carry = *limb >> 63;
                *limb = (*limb << 1) | carry;
                carry = new_carry;
            }
            let mut t = [0u64; MAX_LIMBS];
            let borrow = limb::sub_n(&mut t, &rem, &self.fp.p, n);
            let take = Choice::from((1 - borrow) as u8);
            for k in 0..n {
                rem[k] = u64::conditional_select(&rem[k], &t[k], take);
            }
        }
        self.i = [0u64; MAX_LIMBS];
        self.i[..n].copy_from_slice(&rem[..n]);
    }

    /// Reduce a `2*psize`-limb multiplication product mod `p`.
    fn barrett_reduce_from_double(&mut self, wide: &DoubleWide) {
        let total_bits = self.fp.p2size * 64;
        self.reduce_bits(total_bits, |bit| ((wide[bit / 64] >> (bit % 64)) & 1) as u64);
    }

    /// Reduce a `Wide`-width value (at most `MAX_LIMBS` limbs, `total_bits`
    /// of them significant) mod `p`.
    fn reduce_from_wide(&mut self, wide: &Wide, total_bits: usize) {
        self.reduce_bits(total_bits, |bit| {
            let limb_idx = bit / 64;
            if limb_idx < MAX_LIMBS {
                (wide[limb_idx] >> (bit % 64)) & 1
            } else {
                0
            }
        });
    }

    /// `self + rhs mod p`.
    pub fn add(&self, rhs: &Fp) -> Result<Fp, Error> {
        self.same_field(rhs)?;
        let n = self.fp.psize;
        let mut sum = [0u64; MAX_LIMBS];
        let carry = limb::add_n(&mut sum, &self.i, &rhs.i, n);
        let mut reduced = [0u64; MAX_LIMBS];
        let borrow = limb::sub_n(&mut reduced, &sum, &self.fp.p, n);
        // subtract p iff carry out OR sum >= p (borrow == 0 means no underflow i.e. sum >= p)
        let need_sub = Choice::from((carry != 0) as u8) | Choice::from((borrow == 0) as u8);
        let mut out = sum;
        for k in 0..n {
            out[k] = u64::conditional_select(&sum[k], &reduced[k], need_sub);
        }
        Ok(Fp { fp: self.fp.clone(), i: out })
    }

    /// `self - rhs mod p`.
    pub fn sub(&self, rhs: &Fp) -> Result<Fp, Error> {
        self.same_field(rhs)?;
        let n = self.fp.psize;
        let mut diff = [0u64; MAX_LIMBS];
        let borrow = limb::sub_n(&mut diff, &self.i, &rhs.i, n);
        let mut added = [0u64; MAX_LIMBS];
        limb::add_n(&mut added, &diff, &self.fp.p, n);
        let need_add = Choice::from(borrow as u8);
        let mut out = diff;
        for k in 0..n {
            out[k] = u64::conditional_select(&diff[k], &added[k], need_add);
        }
        Ok(Fp { fp: self.fp.clone(), i: out })
    }

    /// `-self mod p`.
    pub fn neg(&self) -> Fp {
        let n = self.fp.psize;
        let is_zero = self.is_zero();
        let mut out = [0u64; MAX_LIMBS];
        limb::sub_n(&mut out, &self.fp.p, &self.i, n);
        for k in 0..n {
            out[k] = u64::conditional_select(&out[k], &0u64, is_zero);
        }
        Fp { fp: self.fp.clone(), i: out }
    }

    /// `self * rhs mod p`.
    pub fn mul(&self, rhs: &Fp) -> Result<Fp, Error> {
        self.same_field(rhs)?;
        let n = self.fp.psize;
        let mut prod: DoubleWide = [0u64; 2 * MAX_LIMBS];
        limb::mul_n(&mut prod, &self.i, &rhs.i, n);
        let mut out = Fp { fp: self.fp.clone(), i: [0u64; MAX_LIMBS] };
        out.barrett_reduce_from_double(&prod);
        Ok(out)
    }

    /// `self * self mod p`.
    pub fn square(&self) -> Fp {
        self.mul(self).expect("self is always in its own field")
    }

    /// `self^e mod p`, `e` an unsigned integer.
    pub fn pow_u64(&self, e: u64) -> Fp {
        let mut result = Fp::one(&self.fp);
        let mut base = self.clone();
        let mut exp = e;
        while exp != 0 {
            if exp & 1 == 1 {
                result = result.mul(&base).expect("same field");
            }
            base = base.square();
            exp >>= 1;
        }
        result
    }

    /// `self^e mod p`, `e` given as a big-endian byte encoding (used for
    /// `a^((p+1)/4)`-style exponent-by-big-integer in Tonelli-Shanks and
    /// Fermat inversion).
    pub fn pow_be_bytes(&self, exponent: &[u8]) -> Fp {
        let mut result = Fp::one(&self.fp);
        let mut base = self.clone();
        for &byte in exponent.iter().rev() {
            let mut b = byte;
            for _ in 0..8 {
                if b & 1 == 1 {
                    result = result.mul(&base).expect("same field");
                }
                base = base.square();
                b >>= 1;
            }
        }
        result
    }

    /// Modular inverse via Fermat's little theorem: `a^(p-2) mod p`.
    /// `NotInvertible` iff `self` is zero.
    pub fn invert(&self) -> Result<Fp, Error> {
        if bool::from(self.is_zero()) {
            return Err(Error::NotInvertible);
        }
        // p - 2, computed on the fly from fp.p
        let n = self.fp.psize;
        let mut p_minus_2 = [0u64; MAX_LIMBS];
        let (w0, borrow) = sbb(self.fp.p[0], 2, 0);
        p_minus_2[0] = w0;
        let mut borrow = borrow;
        for i in 1..n {
            let (w, b) = sbb(self.fp.p[i], 0, borrow);
            p_minus_2[i] = w;
            borrow = b;
        }
        let mut bytes = [0u8; MAX_LIMBS * 8];
        limb::to_be_bytes(&p_minus_2, n, &mut bytes[..n * 8]);
        Ok(self.pow_be_bytes(&bytes[..n * 8]))
    }

    /// Modular square root via Tonelli-Shanks. `NotAResidue` iff `self` is
    /// not a quadratic residue mod `p`. Returns one of the two roots; the
    /// caller selects parity (spec §4.B/§4.D).
    pub fn sqrt(&self) -> Result<Fp, Error> {
        if bool::from(self.is_zero()) {
            return Ok(self.clone());
        }
        let n = self.fp.psize;

        // Legendre symbol via a^((p-1)/2).
        let mut p_minus_1 = self.fp.p;
        let mut half_exp = [0u64; MAX_LIMBS];
        limb::sub_n(&mut p_minus_1, &self.fp.p, &{
            let mut one = [0u64; MAX_LIMBS];
            one[0] = 1;
            one
        }, n);
        half_exp[..n].copy_from_slice(&p_minus_1[..n]);
        limb::shr1_n(&mut half_exp, n);
        let mut bytes = [0u8; MAX_LIMBS * 8];
        limb::to_be_bytes(&half_exp, n, &mut bytes[..n * 8]);
        let legendre = self.pow_be_bytes(&bytes[..n * 8]);
        if legendre != Fp::one(&self.fp) {
            return Err(Error::NotAResidue);
        }

        // p mod 4 == 3 fast path: a^((p+1)/4).
        if self.fp.p[0] & 0b11 == 0b11 {
            let mut p_plus_1 = [0u64; MAX_LIMBS];
            limb::add_n(&mut p_plus_1, &self.fp.p, &{
                let mut one = [0u64; MAX_LIMBS];
                one[0] = 1;
                one
            }, n);
            limb::shr1_n(&mut p_plus_1, n);
            limb::shr1_n(&mut p_plus_1, n);
            let mut eb = [0u8; MAX_LIMBS * 8];
            limb::to_be_bytes(&p_plus_1, n, &mut eb[..n * 8]);
            return Ok(self.pow_be_bytes(&eb[..n * 8]));
        }

        // General Tonelli-Shanks: p - 1 = q * 2^s.
        let mut q = p_minus_1;
        let mut s = 0u32;
        while limb::test_bit(&q, 0) == 0 {
            limb::shr1_n(&mut q, n);
            s += 1;
        }

        let mut qb = [0u8; MAX_LIMBS * 8];
        limb::to_be_bytes(&q, n, &mut qb[..n * 8]);

        // find a non-residue z by incrementing from 2.
        let mut z_val = 2u64;
        let z = loop {
            let cand = Fp::from_u64(&self.fp, z_val);
            let leg = cand.pow_be_bytes(&bytes[..n * 8]);
            if leg != Fp::one(&self.fp) {
                break cand;
            }
            z_val += 1;
        };

        let mut c = z.pow_be_bytes(&qb[..n * 8]);
        let mut q_plus_1_half = q;
        limb::add_n(&mut q_plus_1_half, &q, &{
            let mut one = [0u64; MAX_LIMBS];
            one[0] = 1;
            one
        }, n);
        limb::shr1_n(&mut q_plus_1_half, n);
        let mut qp1h_bytes = [0u8; MAX_LIMBS * 8];
        limb::to_be_bytes(&q_plus_1_half, n, &mut qp1h_bytes[..n * 8]);

        let mut r = self.pow_be_bytes(&qp1h_bytes[..n * 8]);
        let mut t = self.pow_be_bytes(&qb[..n * 8]);
        let mut m = s;

        loop {
            if t == Fp::one(&self.fp) {
                return Ok(r);
            }
            // find smallest i, 0 < i < m, with t^(2^i) == 1
            let mut i = 1u32;
            let mut t2i = t.square();
            while t2i != Fp::one(&self.fp) {
                t2i = t2i.square();
                i += 1;
                if i >= m {
                    return Err(Error::NotAResidue);
                }
            }
            let mut b = c.clone();
            for _ in 0..(m - i - 1) {
                b = b.square();
            }
            r = r.mul(&b).expect("same field");
            c = b.square();
            t = t.mul(&c).expect("same field");
            m = i;
        }
    }

    /// Constant-time conditional swap of `a` and `b` iff `cond` is `1`.
    pub fn cswap(a: &mut Fp, b: &mut Fp, cond: Choice) {
        let n = a.fp.psize;
        for i in 0..n {
            u64::conditional_swap(&mut a.i[i], &mut b.i[i], cond);
        }
    }

    /// Draw a uniformly random element of `fp`.
    pub fn random(fp: &FieldRef, rng: &mut dyn RandomSource) -> Result<Fp, Error> {
        let n = fp.psize;
        let byte_len = n * 8;
        loop {
            let mut buf = [0u8; MAX_LIMBS * 8];
            rng.fill_bytes(&mut buf[..byte_len])?;
            let wide = limb::from_be_bytes(&buf[..byte_len], n).expect("byte_len fits n limbs");
            if limb::cmp_n(&wide, &fp.p, n) == Ordering::Less {
                return Ok(Fp { fp: fp.clone(), i: wide });
            }
        }
    }

    /// Export this element as a big-endian byte string, `fp.byte_len()`
    /// bytes, zero-padded.
    pub fn to_be_bytes(&self, out: &mut [u8]) {
        let n = self.fp.psize;
        let byte_len = self.fp.byte_len();
        debug_assert_eq!(out.len(), byte_len);
        let mut tmp = [0u8; MAX_LIMBS * 8];
        limb::to_be_bytes(&self.i, n, &mut tmp[..n * 8]);
        out.copy_from_slice(&tmp[n * 8 - byte_len..n * 8]);
    }

    /// `true` iff the least-significant bit of the canonical representative
    /// is set (used for point-compression parity).
    pub fn is_odd(&self) -> Choice {
        Choice::from((self.i[0] & 1) as u8)
    }

    /// Bit `i` of the canonical representative, `0` for `i >= fp.bits()`
    /// (used by the scalar-multiplication ladder, spec §4.E).
    pub fn bit(&self, i: usize) -> Choice {
        Choice::from(limb::test_bit(&self.i, i))
    }

    /// Number of bits in the field modulus (its bit-length, not the
    /// element's own significant-bit count).
    pub fn field_bits(&self) -> usize {
        self.fp.psize * 64
    }
}

// helper trait import brought in scope for `u64::conditional_swap`
use subtle::ConditionallySelectable as _;
trait CondSwapExt {
    fn conditional_swap(a: &mut u64, b: &mut u64, choice: Choice);
}
impl CondSwapExt for u64 {
    fn conditional_swap(a: &mut u64, b: &mut u64, choice: Choice) {
        let t = u64::conditional_select(a, b, choice);
        *b = u64::conditional_select(b, a, choice);
        *a = t;
    }
}
