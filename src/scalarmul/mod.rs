//! Scalar multiplication (spec.md §4.E): a generic constant-time ladder
//! (the default, and the only primitive required to be constant-time in
//! the scalar) plus a windowed base-point accelerator that trades that
//! guarantee for speed on fixed base points.

pub mod ladder;
#[cfg(feature = "alloc")]
pub mod window;

pub use ladder::scalar_mul;
#[cfg(feature = "alloc")]
pub use window::BasePointTable;
