//! ECDSA verification (spec.md §4.F).

use crate::error::Error;
use crate::field::limb::MAX_LIMBS;
use crate::field::Fp;
use crate::point::Point;
use crate::scalarmul::scalar_mul;

use super::signature::Signature;
use super::Ecdsa;

impl Ecdsa {
    /// Verify `sig` over `msg` against public key `q`. Returns `Ok(())`
    /// on success; any failure (malformed signature, off-curve key,
    /// equation mismatch) is reported as `Error::BadSignature`.
    pub fn verify(&self, q: &Point, msg: &[u8], sig: &Signature) -> Result<(), Error> {
        let fnp = &self.curve.fn_;
        let (r, s) = sig.to_scalars(&self.curve).map_err(|_| Error::BadSignature)?;
        if bool::from(r.is_zero()) || bool::from(s.is_zero()) {
            return Err(Error::BadSignature);
        }

        let e = self.hash_to_scalar(msg);
        let s_inv = s.invert().map_err(|_| Error::BadSignature)?;
        let u1 = e.mul(&s_inv)?;
        let u2 = r.mul(&s_inv)?;

        let p1 = self.g_table.mul(&u1)?;
        let p2 = scalar_mul(q, &u2)?;
        let sum = p1.add(&p2)?;

        let (x, _) = match sum.affine()? {
            Some(pair) => pair,
            None => return Err(Error::BadSignature),
        };
        let mut x_bytes = [0u8; MAX_LIMBS * 8];
        let fp_byte_len = self.curve.fp.byte_len();
        x.to_be_bytes(&mut x_bytes[..fp_byte_len]);
        let v = Fp::from_be_bytes(fnp, &x_bytes[..fp_byte_len])?;

        if v == r {
            Ok(())
        } else {
            Err(Error::BadSignature)
        }
    }
}
