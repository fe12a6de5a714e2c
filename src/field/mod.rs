//! Prime-field engine: field-descriptor interning plus constant-time
//! arithmetic mod an odd prime (`spec.md` §4.B).

pub mod element;
pub mod limb;

pub use element::Fp;

use crate::error::Error;
use limb::{cmp_n, from_be_bytes, sub_n, Wide, MAX_LIMBS};

#[cfg(feature = "std")]
extern crate std;

#[cfg(feature = "std")]
use std::sync::Arc;
#[cfg(feature = "std")]
use std::sync::RwLock;

#[cfg(not(feature = "std"))]
use core::cell::RefCell;

/// Descriptor for one prime field, interned by modulus.
///
/// `p` is the modulus, `pc = 2^(64*psize) - p` its complement used by the
/// carry-free add routine (spec §4.B), `psize` the number of significant
/// limbs, `p2size = 2*psize` the width needed to hold a full product.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldParams {
    pub(crate) p: Wide,
    pub(crate) pc: Wide,
    pub(crate) psize: usize,
    pub(crate) p2size: usize,
}

impl FieldParams {
    /// Build a field descriptor from a big-endian modulus encoding.
    /// `InvalidModulus` if `p` is zero, one, or even.
    pub fn new(modulus_be: &[u8]) -> Result<Self, Error> {
        let psize = (modulus_be.len() + 7) / 8;
        if psize == 0 || psize > MAX_LIMBS {
            return Err(Error::InvalidModulus);
        }
        let p = from_be_bytes(modulus_be, psize).ok_or(Error::InvalidModulus)?;

        if limb::is_zero_n(&p, psize) || (p[0] & 1) == 0 {
            return Err(Error::InvalidModulus);
        }
        // reject p == 1
        if psize == 1 && p[0] == 1 {
            return Err(Error::InvalidModulus);
        }

        // pc = 2^(64*psize) - p, computed as (2^(64*psize) - 1) - p + 1
        let mut pc = [0u64; MAX_LIMBS];
        let mut borrow = 0u64;
        for i in 0..psize {
            let (w, b) = limb::sbb(0, p[i], borrow);
            pc[i] = w;
            borrow = b;
        }
        // two's complement of psize-limb p, which equals 2^(64*psize) - p
        // when p != 0 (guaranteed above).
        let _ = borrow;

        Ok(FieldParams {
            p,
            pc,
            psize,
            p2size: 2 * psize,
        })
    }

    /// Number of significant limbs.
    pub fn limb_count(&self) -> usize {
        self.psize
    }

    /// Bit length of the modulus, `ceil(log2(p))`.
    pub fn bits(&self) -> usize {
        for i in (0..self.psize).rev() {
            if self.p[i] != 0 {
                return i * 64 + (64 - self.p[i].leading_zeros() as usize);
            }
        }
        0
    }

    /// Byte length, `ceil(bits/8)`.
    pub fn byte_len(&self) -> usize {
        (self.bits() + 7) / 8
    }

    /// The modulus as a big integer (for export).
    pub fn modulus(&self) -> &Wide {
        &self.p
    }
}

/// Process-wide intern pool mapping modulus -> field descriptor.
///
/// Field descriptors are append-only and never removed, so lookups after
/// the insertion succeeds may be served without holding a lock (spec §5);
/// here every lookup still takes a (cheap, read-preferring) lock for
/// simplicity, since the pool is expected to hold at most a few dozen
/// distinct moduli for the lifetime of a process.
#[cfg(feature = "std")]
pub struct Registry {
    fields: RwLock<std::vec::Vec<Arc<FieldParams>>>,
}

#[cfg(feature = "std")]
impl Registry {
    const fn new() -> Self {
        Registry {
            fields: RwLock::new(std::vec::Vec::new()),
        }
    }

    /// Look up (or create) the field descriptor for `p`, given as a
    /// big-endian modulus.
    pub fn intern(&self, modulus_be: &[u8]) -> Result<Arc<FieldParams>, Error> {
        let probe = FieldParams::new(modulus_be)?;
        {
            let fields = self.fields.read().expect("field registry poisoned");
            if let Some(existing) = fields
                .iter()
                .find(|fp| cmp_n(&fp.p, &probe.p, fp.psize.max(probe.psize)) == core::cmp::Ordering::Equal && fp.psize == probe.psize)
            {
                return Ok(existing.clone());
            }
        }
        let mut fields = self.fields.write().expect("field registry poisoned");
        if let Some(existing) = fields
            .iter()
            .find(|fp| fp.psize == probe.psize && cmp_n(&fp.p, &probe.p, fp.psize) == core::cmp::Ordering::Equal)
        {
            return Ok(existing.clone());
        }
        let interned = Arc::new(probe);
        fields.push(interned.clone());
        Ok(interned)
    }
}

#[cfg(feature = "std")]
static REGISTRY: Registry = Registry::new();

/// Look up (or create) the process-wide field descriptor for `p`.
#[cfg(feature = "std")]
pub fn intern_field(modulus_be: &[u8]) -> Result<Arc<FieldParams>, Error> {
    REGISTRY.intern(modulus_be)
}

/// Without `std`, there is no process-wide mutable singleton available;
/// callers construct and hold their own `FieldParams` (typically wrapped
/// in a `Rc`/`Arc` themselves, or simply reused by value since it is
/// `Clone`). See DESIGN.md for the Open Question this resolves.
#[cfg(not(feature = "std"))]
pub fn intern_field(modulus_be: &[u8]) -> Result<FieldParams, Error> {
    FieldParams::new(modulus_be)
}

#[cfg(not(feature = "std"))]
#[allow(dead_code)]
struct Unused(RefCell<()>); // keeps `core::cell` imported under no_std-only builds

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_even_modulus() {
        assert_eq!(FieldParams::new(&[0x10]), Err(Error::InvalidModulus));
    }

    #[test]
    fn rejects_zero_and_one() {
        assert_eq!(FieldParams::new(&[0x00]), Err(Error::InvalidModulus));
        assert_eq!(FieldParams::new(&[0x01]), Err(Error::InvalidModulus));
    }

    #[test]
    fn accepts_small_prime() {
        let fp = FieldParams::new(&[0xFB]).unwrap(); // 251, prime
        assert_eq!(fp.limb_count(), 1);
        assert_eq!(fp.bits(), 8);
    }

    #[cfg(feature = "std")]
    #[test]
    fn interning_is_by_value() {
        let a = intern_field(&[0xFB]).unwrap();
        let b = intern_field(&[0xFB]).unwrap();
        assert!(Arc::ptr_eq(&a, &b));
    }
}
