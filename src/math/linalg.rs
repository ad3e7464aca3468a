//! Dense linear system solver for the regression engine.
//!
//! ## Purpose
//!
//! This module solves the small square normal-equation systems produced by
//! least-squares fitting: `A·coef = b` with `A = ΦᵗΦ` and `b = Φᵗy`.
//!
//! ## Design notes
//!
//! * **Algorithm**: Gaussian elimination with partial pivoting. At each
//!   elimination step the row with the largest absolute entry in the pivot
//!   column is selected.
//! * **Singularity**: A pivot magnitude below `1e-12` declares the system
//!   singular and the solve returns `None`; the caller reports a failed
//!   fit rather than an error.
//! * **Purity**: The caller's matrix and vector are never mutated;
//!   elimination runs on internal copies.
//! * **Layout**: The matrix is a flat row-major slice of length `p * p`.
//!
//! ## Invariants
//!
//! * Systems are tiny (p ≤ 4 for the enumerated model families).
//! * A `Some` result contains only finite coefficients.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

/// Pivot magnitude below which the system is declared singular.
const PIVOT_TOLERANCE: f64 = 1e-12;

// ============================================================================
// Solver
// ============================================================================

/// Solve the dense `p x p` system `A·x = b` by Gaussian elimination with
/// partial pivoting.
///
/// `a` is row-major with length `p * p`; `b` has length `p`. Returns
/// `None` when the system is singular within the pivot tolerance.
pub fn solve<T: Float>(a: &[T], b: &[T], p: usize) -> Option<Vec<T>> {
    debug_assert_eq!(a.len(), p * p);
    debug_assert_eq!(b.len(), p);

    let tolerance = T::from(PIVOT_TOLERANCE).unwrap();

    // Work on copies; the caller's system must survive the solve intact.
    let mut m: Vec<T> = a.to_vec();
    let mut rhs: Vec<T> = b.to_vec();

    // Forward elimination with partial pivoting.
    for k in 0..p {
        let mut pivot_row = k;
        let mut pivot_mag = m[k * p + k].abs();
        for r in (k + 1)..p {
            let mag = m[r * p + k].abs();
            if mag > pivot_mag {
                pivot_mag = mag;
                pivot_row = r;
            }
        }

        if pivot_mag < tolerance {
            return None;
        }

        if pivot_row != k {
            for c in 0..p {
                m.swap(k * p + c, pivot_row * p + c);
            }
            rhs.swap(k, pivot_row);
        }

        // Normalize the pivot row to a unit diagonal.
        let pivot = m[k * p + k];
        for c in k..p {
            m[k * p + c] = m[k * p + c] / pivot;
        }
        rhs[k] = rhs[k] / pivot;

        // Eliminate below the pivot.
        for r in (k + 1)..p {
            let factor = m[r * p + k];
            if factor == T::zero() {
                continue;
            }
            for c in k..p {
                m[r * p + c] = m[r * p + c] - factor * m[k * p + c];
            }
            rhs[r] = rhs[r] - factor * rhs[k];
        }
    }

    // Back substitution (diagonal is 1 after normalization).
    let mut x = vec![T::zero(); p];
    for k in (0..p).rev() {
        let mut sum = rhs[k];
        for c in (k + 1)..p {
            sum = sum - m[k * p + c] * x[c];
        }
        if !sum.is_finite() {
            return None;
        }
        x[k] = sum;
    }

    Some(x)
}
