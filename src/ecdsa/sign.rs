//! ECDSA signing: the nonce-rejection loop (spec.md §4.F).

use crate::error::Error;
use crate::field::limb::{self, MAX_LIMBS};
use crate::field::Fp;
use crate::random::{random_below_nonzero, RandomSource};

use super::signature::Signature;
use super::Ecdsa;

#[cfg(feature = "zeroize")]
use zeroize::Zeroizing;

impl Ecdsa {
    /// Sign `msg` under secret scalar `d` (`d` in `[1, n-1]`, over the
    /// curve's scalar field). Draws fresh nonces from `rng` until one
    /// produces a nonzero `r` and `s`.
    pub fn sign(&self, rng: &mut dyn RandomSource, d: &Fp, msg: &[u8]) -> Result<Signature, Error> {
        let fnp = &self.curve.fn_;
        let n_limbs = fnp.limb_count();
        let mut n_be_buf = [0u8; MAX_LIMBS * 8];
        limb::to_be_bytes(fnp.modulus(), n_limbs, &mut n_be_buf[..n_limbs * 8]);
        let n_be = &n_be_buf[..n_limbs * 8];

        loop {
            let k_buf = random_below_nonzero(rng, n_be)?;
            let k = Fp::from_be_bytes(fnp, &k_buf[MAX_LIMBS * 8 - n_limbs * 8..])?;
            #[cfg(feature = "zeroize")]
            let k = Zeroizing::new(k);

            match self.sign_with_nonce(&k, d, msg) {
                Ok(sig) => return Ok(sig),
                Err(Error::BadSignature) => continue,
                Err(e) => return Err(e),
            }
        }
    }

    /// Sign `msg` with an explicit nonce `k` instead of drawing one from
    /// an RNG. `BadSignature` if `k` yields `r == 0` or `s == 0`.
    ///
    /// This is how [`Ecdsa::sign`] is implemented, and is also the entry
    /// point test vectors use to re-derive a known signature from its
    /// recorded nonce (see the `dev` module). The nonce's modular inverse
    /// is as sensitive as `k` itself (spec §5: "signature-signing must
    /// zeroize the nonce `k` after producing `(r, s)`") and is zeroized
    /// on drop here; the caller is responsible for zeroizing `k` itself,
    /// which [`Ecdsa::sign`] does via `Zeroizing`.
    pub fn sign_with_nonce(&self, k: &Fp, d: &Fp, msg: &[u8]) -> Result<Signature, Error> {
        let fnp = &self.curve.fn_;
        let r_point = self.g_table.mul(k)?;
        let (rx, _) = r_point.affine()?.expect("k in [1, n) keeps k*G in the prime-order subgroup");
        let mut rx_bytes = [0u8; MAX_LIMBS * 8];
        let fp_byte_len = self.curve.fp.byte_len();
        rx.to_be_bytes(&mut rx_bytes[..fp_byte_len]);
        let r = Fp::from_be_bytes(fnp, &rx_bytes[..fp_byte_len])?;
        if bool::from(r.is_zero()) {
            return Err(Error::BadSignature);
        }

        let e = self.hash_to_scalar(msg);
        let rd = r.mul(d)?;
        let numerator = e.add(&rd)?;
        let k_inv = k.invert().map_err(|_| Error::BadSignature)?;
        #[cfg(feature = "zeroize")]
        let k_inv = Zeroizing::new(k_inv);
        let s = k_inv.mul(&numerator)?;
        if bool::from(s.is_zero()) {
            return Err(Error::BadSignature);
        }

        Ok(Signature::from_scalars(&self.curve, &r, &s))
    }
}
