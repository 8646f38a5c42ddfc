//! Extended Euclidean algorithm producing the greatest common divisor
//! together with the Bézout coefficients `x` and `y` such that
//! `a·x + b·y = gcd(a, b)`.
//!
//! The recurrence is exposed as a lazy, finite sequence of [`Step`]
//! records so that callers can render the full derivation; [`compute`]
//! drives the sequence to completion and returns only the final triple.
//!
//! [`compute`]: ExtendedGcd::compute

use serde::{Deserialize, Serialize};

use crate::EuclidError;

/// One iteration record of the extended Euclidean recurrence.
///
/// The coefficient histories `(x2, x1)` and `(y2, y1)` are the two prior
/// running coefficients needed for back-substitution. At every step
/// `a₀·x2 + b₀·y2 = a` and `a₀·x1 + b₀·y1 = b` hold, where `(a₀, b₀)` is
/// the operand pair the recurrence was seeded with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    /// 1-based index of this step, in iteration order.
    pub step: usize,
    /// Quotient `⌊a/b⌋` taken by this step (0 for the seed step).
    pub q: i64,
    /// Remainder `a mod b` left by this step (0 for the seed step).
    pub r: i64,
    /// Running coefficient `x2 − q·x1` produced by this step.
    pub x: i64,
    /// Running coefficient `y2 − q·y1` produced by this step.
    pub y: i64,
    /// The larger value of the pair active at this step.
    pub a: i64,
    /// The smaller value of the pair active at this step.
    pub b: i64,
    /// Second-previous coefficient attached to the seed's larger operand.
    pub x2: i64,
    /// Previous coefficient attached to the seed's larger operand.
    pub x1: i64,
    /// Second-previous coefficient attached to the seed's smaller operand.
    pub y2: i64,
    /// Previous coefficient attached to the seed's smaller operand.
    pub y1: i64,
}

impl Step {
    /// The identity seed: `a·1 + b·0 = a` and `a·0 + b·1 = b`.
    fn seed(a: i64, b: i64) -> Self {
        Self {
            step: 1,
            q: 0,
            r: 0,
            x: 0,
            y: 0,
            a,
            b,
            x2: 1,
            x1: 0,
            y2: 0,
            y1: 1,
        }
    }

    /// One turn of the recurrence. Requires `self.b != 0`.
    fn advance(&self) -> Self {
        let q = self.a / self.b;
        let r = self.a % self.b;
        let x = self.x2 - q * self.x1;
        let y = self.y2 - q * self.y1;
        Self {
            step: self.step + 1,
            q,
            r,
            x,
            y,
            a: self.b,
            b: r,
            x2: self.x1,
            x1: x,
            y2: self.y1,
            y1: y,
        }
    }

    /// Whether the recurrence is complete at this step.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.b == 0
    }

    /// The final triple, available only once this step is terminal.
    ///
    /// The coefficients attach to the seed operand pair in normalized
    /// order (larger value first). Returns [`None`] while the remainder
    /// has not reached zero.
    pub fn output(&self) -> Option<ExtendedGcdOutput> {
        if self.is_terminal() {
            Some(ExtendedGcdOutput {
                d: self.a,
                x: self.x2,
                y: self.y2,
            })
        } else {
            None
        }
    }
}

/// The output of the extended Euclidean algorithm on operands `a` and `b`:
/// the greatest common divisor `d` and the Bézout coefficients `x` and `y`
/// such that `a·x + b·y = d`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtendedGcdOutput {
    /// The greatest common divisor.
    pub d: i64,
    /// The coefficient attached to `a`.
    pub x: i64,
    /// The coefficient attached to `b`.
    pub y: i64,
}

impl ExtendedGcdOutput {
    fn flip(self) -> Self {
        Self {
            d: self.d,
            x: self.y,
            y: self.x,
        }
    }
}

/// The extended Euclidean engine over a validated pair of non-negative
/// operands.
///
/// Construction normalizes the pair so the recurrence always starts with
/// the larger value first; [`compute`](Self::compute) reports the
/// coefficients against the caller's original operand order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExtendedGcd {
    a: i64,
    b: i64,
    swapped: bool,
}

impl ExtendedGcd {
    /// Creates the engine for `a` and `b`, in either order.
    ///
    /// # Errors
    ///
    /// Returns [`EuclidError::InvalidArgument`] if either operand is
    /// negative.
    pub fn new(a: i64, b: i64) -> Result<Self, EuclidError> {
        if a < 0 || b < 0 {
            return Err(EuclidError::InvalidArgument { a, b });
        }
        let swapped = a < b;
        let (a, b) = if swapped { (b, a) } else { (a, b) };
        Ok(Self { a, b, swapped })
    }

    /// The normalized operand pair, larger value first.
    #[inline]
    pub fn operands(&self) -> (i64, i64) {
        (self.a, self.b)
    }

    /// A fresh iterator over the recurrence, starting from the seed step.
    ///
    /// Every call restarts the recurrence from scratch; iterators share no
    /// state, so re-iterating always reproduces the identical sequence.
    pub fn steps(&self) -> Steps {
        Steps {
            next: Some(Step::seed(self.a, self.b)),
        }
    }

    /// Drives the recurrence to completion and returns the final triple,
    /// with `x` attached to the first constructor argument and `y` to the
    /// second.
    pub fn compute(&self) -> ExtendedGcdOutput {
        let mut step = Step::seed(self.a, self.b);
        while !step.is_terminal() {
            step = step.advance();
        }
        let output = ExtendedGcdOutput {
            d: step.a,
            x: step.x2,
            y: step.y2,
        };
        if self.swapped {
            output.flip()
        } else {
            output
        }
    }
}

/// Lazy, finite iterator over the [`Step`] records of one run of the
/// recurrence.
///
/// Yields the seed step first and ends after the step whose `b` is zero;
/// the remainder sequence is strictly decreasing, so the iterator always
/// terminates.
#[derive(Clone, Debug)]
pub struct Steps {
    next: Option<Step>,
}

impl Iterator for Steps {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        let current = self.next?;
        self.next = if current.is_terminal() {
            None
        } else {
            Some(current.advance())
        };
        Some(current)
    }
}

/// Computes `gcd(a, b)` and the Bézout coefficients in one shot.
///
/// `(0, 0)` is a defined edge case yielding `(0, 1, 0)`.
///
/// # Errors
///
/// Returns [`EuclidError::InvalidArgument`] if either operand is negative.
pub fn compute_extended_gcd(a: i64, b: i64) -> Result<ExtendedGcdOutput, EuclidError> {
    Ok(ExtendedGcd::new(a, b)?.compute())
}

/// Returns the full derivation of `gcd(a, b)` as a lazy [`Step`] sequence.
///
/// # Errors
///
/// Returns [`EuclidError::InvalidArgument`] if either operand is negative.
pub fn iterate_extended_gcd(a: i64, b: i64) -> Result<Steps, EuclidError> {
    Ok(ExtendedGcd::new(a, b)?.steps())
}
