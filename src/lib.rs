//! Multi-precision elliptic-curve cryptography core.
//!
//! A `no_std`-first engine for constant-time prime-field arithmetic,
//! point arithmetic over short-Weierstrass, (twisted) Edwards and
//! Montgomery curves, Montgomery-ladder and windowed scalar
//! multiplication, ECDSA, and EC-Elgamal.
//!
//! ## Feature flags
//!
//! - `std` (default): enables [`random::OsRng`] (via `getrandom`) and
//!   interns curves/fields process-wide behind `Arc`/`RwLock`. Pulls in
//!   `alloc`.
//! - `alloc`: point encoding, the windowed base-point multiplier, ECDSA
//!   signature hex I/O — anything that needs a `Vec`.
//! - `zeroize` (default): zeroes secret scalars on drop (see
//!   [`safe_memory`]).
//!
//! Building with no features gives a `no_std`, no-`alloc` field and point
//! engine; without `std` there is no process-wide cache to intern into,
//! so field/curve descriptors are built fresh per call instead of shared
//! (see `DESIGN.md`).
//!
//! ## Module map
//!
//! - [`field`] — prime-field descriptors and constant-time `Fp` arithmetic.
//! - [`curve`] — curve parameters, the named-curve registry, point-on-curve
//!   checks.
//! - [`point`] — affine import/export, point addition/doubling, SEC1-style
//!   compressed/uncompressed encoding.
//! - [`scalarmul`] — the constant-time Montgomery ladder and the windowed
//!   base-point accelerator.
//! - [`ecdsa`] — signing and verification.
//! - [`elgamal`] — EC-Elgamal encryption/decryption.
//! - [`random`] — the `RandomSource` trait, `OsRng`, and rejection-sampled
//!   `random_below`.
//! - [`hash`] — the runtime hash-function descriptor ECDSA is parameterized
//!   over.
//! - [`safe_memory`] — the zeroize-on-drop lifecycle hook.
//! - [`error`] — the crate's error taxonomy.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code, clippy::unwrap_used)]
#![warn(missing_docs, rust_2018_idioms)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod curve;
pub mod ecdsa;
pub mod elgamal;
pub mod error;
pub mod field;
pub mod hash;
pub mod point;
pub mod random;
pub mod safe_memory;
pub mod scalarmul;

#[cfg(any(test, feature = "dev"))]
pub mod dev;

pub use curve::{Curve, CurveTag};
pub use ecdsa::{Ecdsa, Signature};
pub use elgamal::Ciphertext;
pub use error::Error;
pub use field::Fp;
pub use point::Point;
