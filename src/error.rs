//! Error taxonomy (spec.md §7).

/// Errors returned by this crate's fallible operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    /// Field-descriptor creation was given a modulus that is zero, one, or
    /// even.
    InvalidModulus,
    /// A binary operation was attempted on elements of different fields.
    FieldMismatch,
    /// Modular inverse of zero.
    NotInvertible,
    /// Square root of a quadratic non-residue.
    NotAResidue,
    /// A point's affine coordinates do not satisfy the curve equation.
    PointNotOnCurve,
    /// An operation was attempted across two different curves.
    CurveMismatch,
    /// `Registry::by_name` found no curve with the given name.
    UnknownCurve,
    /// A signature's `r` or `s` is outside `[1, n-1]`, or the verification
    /// equation did not hold.
    BadSignature,
    /// The OS random facility failed to supply bytes. Unrecoverable: the
    /// caller cannot retry its way out of a broken entropy source.
    RandomFailure,
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            Error::InvalidModulus => "modulus must be odd and greater than one",
            Error::FieldMismatch => "operands belong to different fields",
            Error::NotInvertible => "value has no modular inverse",
            Error::NotAResidue => "value is not a quadratic residue",
            Error::PointNotOnCurve => "point does not satisfy the curve equation",
            Error::CurveMismatch => "operands belong to different curves",
            Error::UnknownCurve => "no curve registered under that name",
            Error::BadSignature => "signature is malformed or fails to verify",
            Error::RandomFailure => "OS random facility failed",
        };
        f.write_str(msg)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// Convenience alias for this crate's `Result`.
pub type Result<T> = core::result::Result<T, Error>;
