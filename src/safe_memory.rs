//! Safe-memory hook (spec.md §4.H).
//!
//! The C original installs a process-wide GMP allocator shim that zeroes
//! memory on reallocation-that-moves and on free
//! (`original_source/src/safememory.c`). Rust has no portable equivalent
//! to `mp_set_memory_functions` — there is no single global allocator
//! entry point every `Fp`/`Point`/`Signature` value necessarily funnels
//! through, since they are plain stack values, not heap blocks owned by a
//! C-style arbitrary-precision library. This module preserves the
//! *lifecycle guarantee* instead: `Fp` implements `Zeroize`, and the
//! concrete secret values the spec calls out — the signing nonce `k` and
//! its modular inverse in `ecdsa::sign` — are wrapped in `zeroize`'s
//! `Zeroizing<T>`, which zeroes its contents when dropped, the same
//! "every constructor has a matching destructor that zeroizes" contract
//! described in spec §5 (see DESIGN.md for this REDESIGN).

#[cfg(feature = "zeroize")]
pub use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

/// Installs the safe-memory hook. On this platform the hook is the
/// `zeroize`-backed wrapper types themselves, which are always active
/// once the `zeroize` feature is enabled; `install` exists so callers
/// coming from the C API's explicit opt-in (`mpz_set_memory_functions`)
/// have an equivalent call site, and so a caller built without the
/// `zeroize` feature gets an explicit, documented no-op rather than
/// silent behavior (spec: "No-op if not installed.").
pub fn install() {
    #[cfg(not(feature = "zeroize"))]
    {
        // no-op: the `zeroize` feature is disabled, so sensitive scratch
        // (nonces, secret scalars) is not automatically cleared on drop.
    }
}
