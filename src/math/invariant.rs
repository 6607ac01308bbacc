//! StableSwap invariant `D` solver.
//!
//! # Invariant
//!
//! ```text
//! Ann · Σxᵢ + D = Ann · D + D^(n+1) / (n^n · Πxᵢ)
//! ```
//!
//! where `Ann = A · n` and `A` is already the amplification scaled by
//! `n^(n−1)`.
//!
//! # Iteration
//!
//! Starting from `D = S = Σxᵢ`:
//!
//! ```text
//! D_P    = D · D/(n·x₀) · D/(n·x₁) · …        (floor after every step)
//! D_next = (Ann·S + n·D_P) · D / ((Ann − 1)·D + (n + 1)·D_P)
//! ```
//!
//! until `|D − D_prev| ≤ 1`.  Integer division is not associative, so the
//! multiply-then-divide order above is part of the contract: reordering
//! any step changes the last digits of `D`.

use primitive_types::{U256, U512};
use tracing::{trace, warn};

use super::checked::CheckedArithmetic;
use super::precision::{narrow, widen};
use crate::error::{Result, SwapError};

/// Maximum fixed-point iterations before a solver reports
/// [`SwapError::ConvergenceFailure`].
pub const MAX_ITERATIONS: u32 = 255;

/// Computes the invariant `D` of a set of normalized balances.
///
/// Assets are visited in slice order when building `D_P`.
///
/// # Errors
///
/// - [`SwapError::ConvergenceFailure`] if `|ΔD| > 1` after
///   [`MAX_ITERATIONS`] steps.
/// - [`SwapError::DivisionByZero`] if a balance is zero while the sum is
///   not.
/// - [`SwapError::ArithmeticOverflow`] if an intermediate exceeds 512 bits
///   or `A · n < 1`.
pub fn compute_d(xp: &[U256], amplification: u64) -> Result<U256> {
    let n = U512::from(xp.len());
    let ann = U512::from(amplification).safe_mul(n, "D: A·n")?;
    let ann_minus_one = ann.safe_sub(U512::one(), "D: A·n − 1")?;
    let n_plus_one = n.safe_add(U512::one(), "D: n + 1")?;

    let s = xp
        .iter()
        .try_fold(U512::zero(), |acc, &x| acc.safe_add(widen(x), "D: S"))?;
    let ann_s = ann.safe_mul(s, "D: A·n·S")?;

    let mut d = s;
    let mut d_prev = U512::zero();
    let mut iterations = 0u32;
    while d.abs_diff(d_prev) > U512::one() {
        if iterations == MAX_ITERATIONS {
            warn!(iterations, n_assets = xp.len(), amplification, "invariant did not converge");
            return Err(SwapError::ConvergenceFailure("D"));
        }
        iterations += 1;

        let mut d_p = d;
        for &x in xp {
            let nx = n.safe_mul(widen(x), "D: n·x")?;
            d_p = d_p.safe_mul(d, "D: D_P·D")?.safe_div(nx)?;
        }
        d_prev = d;

        let numerator = ann_s
            .safe_add(d_p.safe_mul(n, "D: D_P·n")?, "D: numerator sum")?
            .safe_mul(d, "D: numerator")?;
        let denominator = ann_minus_one
            .safe_mul(d, "D: (A·n − 1)·D")?
            .safe_add(n_plus_one.safe_mul(d_p, "D: (n + 1)·D_P")?, "D: denominator")?;
        d = numerator.safe_div(denominator)?;
    }

    trace!(iterations, "invariant converged");
    narrow(d, "D: result")
}

/// Absolute error of the invariant equation at `d`:
///
/// ```text
/// | (Ann·S + D) − (Ann·D + D^(n+1) / (n^n · Πxᵢ)) |
/// ```
///
/// The `D^(n+1) / (n^n · Πxᵢ)` term is evaluated as a single floor
/// division, so this is a measure of how well `d` solves the equation,
/// not a replay of the solver.
///
/// # Errors
///
/// - [`SwapError::ArithmeticOverflow`] if `D^(n+1)` or `n^n · Πxᵢ`
///   exceeds 512 bits.
/// - [`SwapError::DivisionByZero`] if any balance is zero.
pub fn invariant_error(xp: &[U256], amplification: u64, d: U256) -> Result<U512> {
    let n = U512::from(xp.len());
    let ann = U512::from(amplification).safe_mul(n, "error: A·n")?;
    let d = widen(d);

    let mut s = U512::zero();
    let mut nn_prod = U512::one();
    for &x in xp {
        s = s.safe_add(widen(x), "error: S")?;
        nn_prod = nn_prod
            .safe_mul(n, "error: n^n")?
            .safe_mul(widen(x), "error: n^n·Πx")?;
    }
    let mut d_pow = d;
    for _ in 0..xp.len() {
        d_pow = d_pow.safe_mul(d, "error: D^(n+1)")?;
    }

    let left = ann.safe_mul(s, "error: A·n·S")?.safe_add(d, "error: left")?;
    let right = ann
        .safe_mul(d, "error: A·n·D")?
        .safe_add(d_pow.safe_div(nn_prod)?, "error: right")?;
    Ok(left.abs_diff(right))
}
