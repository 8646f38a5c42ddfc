//! Chinese Remainder Theorem solver built on the extended Euclidean
//! engine.
//!
//! Given congruences `x ≡ aᵢ (mod nᵢ)` with pairwise coprime moduli, the
//! solver returns the unique `x` in `[0, N)` where `N` is the product of
//! all moduli, along with the per-term derivation consumed by external
//! renderers.

use serde::{Deserialize, Serialize};

use crate::{xgcd::ExtendedGcd, EuclidError};

/// Wide type for the solution accumulation.
type WideT = i128;

/// A single congruence `x ≡ residue (mod modulus)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Congruence {
    residue: i64,
    modulus: i64,
}

impl Congruence {
    /// Creates `x ≡ residue (mod modulus)`.
    ///
    /// # Errors
    ///
    /// Returns [`EuclidError::NonPositiveModulus`] if `modulus <= 0`.
    pub fn new(residue: i64, modulus: i64) -> Result<Self, EuclidError> {
        if modulus <= 0 {
            return Err(EuclidError::NonPositiveModulus { modulus });
        }
        Ok(Self { residue, modulus })
    }

    /// The residue.
    #[inline]
    pub fn residue(&self) -> i64 {
        self.residue
    }

    /// The modulus.
    #[inline]
    pub fn modulus(&self) -> i64 {
        self.modulus
    }
}

/// Per-term derivation record of a CRT solve.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrtTerm {
    /// The residue `aᵢ` of the term.
    pub residue: i64,
    /// The modulus `nᵢ` of the term.
    pub modulus: i64,
    /// The partial modulus `Nᵢ = N / nᵢ`.
    pub partial_modulus: i64,
    /// The inverse `uᵢ` of the partial modulus modulo `nᵢ`, in `[0, nᵢ)`.
    pub inverse: i64,
}

/// The canonical solution of a congruence system together with its
/// derivation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrtSolution {
    /// The solution, in `[0, modulus)`.
    pub solution: i64,
    /// The common modulus `N`, the product of all input moduli.
    pub modulus: i64,
    /// Per-term derivation records, in input order.
    pub terms: Vec<CrtTerm>,
}

/// Computes the inverse of `a` modulo `m`, in `[0, m)`.
///
/// `a` may be any integer; it is reduced into `[0, m)` before the engine
/// runs.
///
/// # Errors
///
/// Returns [`EuclidError::NonPositiveModulus`] if `m <= 0`, and
/// [`EuclidError::NoInverse`] if `gcd(a, m) != 1`.
pub fn mod_inverse(a: i64, m: i64) -> Result<i64, EuclidError> {
    if m <= 0 {
        return Err(EuclidError::NonPositiveModulus { modulus: m });
    }
    let reduced = a.rem_euclid(m);
    let output = ExtendedGcd::new(reduced, m)?.compute();
    if output.d != 1 {
        return Err(EuclidError::NoInverse {
            value: a,
            modulus: m,
        });
    }
    Ok(output.x.rem_euclid(m))
}

/// Solves the congruence system via the Chinese Remainder Theorem.
///
/// Pairwise coprimality of the moduli is not validated up front; the
/// solve aborts at the first term whose partial modulus has no inverse,
/// reporting that exact `(value, modulus)` pair. An empty system yields
/// the trivial solution `0 (mod 1)`.
///
/// # Errors
///
/// Returns [`EuclidError::NoInverse`] if `gcd(Nᵢ, nᵢ) != 1` for some
/// term.
pub fn solve_crt(congruences: &[Congruence]) -> Result<CrtSolution, EuclidError> {
    let modulus: i64 = congruences.iter().map(Congruence::modulus).product();

    let mut terms = Vec::with_capacity(congruences.len());
    let mut acc: WideT = 0;
    for congruence in congruences {
        let partial_modulus = modulus / congruence.modulus();
        let inverse = mod_inverse(partial_modulus, congruence.modulus())?;
        acc += congruence.residue() as WideT * inverse as WideT * partial_modulus as WideT;
        terms.push(CrtTerm {
            residue: congruence.residue(),
            modulus: congruence.modulus(),
            partial_modulus,
            inverse,
        });
    }

    let solution = acc.rem_euclid(modulus as WideT) as i64;
    Ok(CrtSolution {
        solution,
        modulus,
        terms,
    })
}

#[cfg(test)]
mod tests {
    use rand::prelude::*;

    use super::*;

    fn gcd(mut m: i64, mut n: i64) -> i64 {
        while n != 0 {
            (m, n) = (n, m % n);
        }
        m
    }

    #[test]
    fn test_mod_inverse() {
        let mut rng = thread_rng();

        for _ in 0..100 {
            let m = rng.gen_range(1..=10_000i64);
            let a = rng.gen_range(0..m);

            match mod_inverse(a, m) {
                Ok(inverse) => {
                    assert!((0..m).contains(&inverse));
                    assert_eq!((a as i128 * inverse as i128).rem_euclid(m as i128), 1 % m as i128);
                }
                Err(err) => {
                    assert_ne!(gcd(a, m), 1);
                    assert_eq!(err, EuclidError::NoInverse { value: a, modulus: m });
                }
            }
        }
    }

    #[test]
    fn test_mod_inverse_negative_value() {
        // -3 ≡ 4 (mod 7), and 4·2 = 8 ≡ 1 (mod 7)
        assert_eq!(mod_inverse(-3, 7), Ok(2));
    }

    #[test]
    fn test_mod_inverse_rejects_bad_modulus() {
        assert_eq!(
            mod_inverse(3, 0),
            Err(EuclidError::NonPositiveModulus { modulus: 0 })
        );
        assert_eq!(
            mod_inverse(3, -5),
            Err(EuclidError::NonPositiveModulus { modulus: -5 })
        );
    }

    #[test]
    fn test_solve_crt_empty() {
        let solution = solve_crt(&[]).unwrap();
        assert_eq!(solution.solution, 0);
        assert_eq!(solution.modulus, 1);
        assert!(solution.terms.is_empty());
    }

    #[test]
    fn test_solve_crt_satisfies_all_congruences() {
        let mut rng = thread_rng();

        // pairwise coprime moduli
        let moduli = [7i64, 11, 13, 27];
        let congruences: Vec<Congruence> = moduli
            .iter()
            .map(|&m| Congruence::new(rng.gen_range(0..m), m).unwrap())
            .collect();

        let solution = solve_crt(&congruences).unwrap();
        assert_eq!(solution.modulus, moduli.iter().product::<i64>());
        assert!((0..solution.modulus).contains(&solution.solution));
        for congruence in &congruences {
            assert_eq!(
                solution.solution % congruence.modulus(),
                congruence.residue()
            );
        }
    }

    #[test]
    fn test_solve_crt_fails_at_first_offending_term() {
        // N = 24; the first term's partial modulus 6 shares a factor with 4
        let congruences = [
            Congruence::new(0, 4).unwrap(),
            Congruence::new(1, 6).unwrap(),
        ];
        assert_eq!(
            solve_crt(&congruences),
            Err(EuclidError::NoInverse {
                value: 6,
                modulus: 4
            })
        );
    }
}
