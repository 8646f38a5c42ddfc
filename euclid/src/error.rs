//! This module defines some errors that
//! may occur during the execution of the library.

use thiserror::Error;

/// Errors that may occur.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EuclidError {
    /// Error that occurs when the extended Euclidean engine is given a negative operand.
    #[error("Arguments must be non-negative, got a = {a} and b = {b}!")]
    InvalidArgument {
        /// The first operand as given.
        a: i64,
        /// The second operand as given.
        b: i64,
    },
    /// Error that occurs when the given value has no inverse element with the given modulus.
    #[error("Value {value} has no inverse element with the modulus {modulus}!")]
    NoInverse {
        /// The value being inverted.
        value: i64,
        /// The modulus.
        modulus: i64,
    },
    /// Error that occurs when a modulus is requested that is not positive.
    #[error("Modulus must be positive, got {modulus}!")]
    NonPositiveModulus {
        /// The offending modulus.
        modulus: i64,
    },
}
