#![deny(missing_docs)]

//! Extended Euclidean algorithm with Bézout coefficients, and a Chinese
//! Remainder Theorem solver built on top of it.

pub mod crt;
pub mod report;
pub mod xgcd;

mod error;

pub use crt::{mod_inverse, solve_crt, Congruence, CrtSolution, CrtTerm};
pub use error::EuclidError;
pub use xgcd::{
    compute_extended_gcd, iterate_extended_gcd, ExtendedGcd, ExtendedGcdOutput, Step, Steps,
};
