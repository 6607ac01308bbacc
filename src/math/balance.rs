//! Single-asset balance solver.
//!
//! Given normalized balances, an invariant `D`, and the index `k` of the
//! asset to solve for, finds `y = xₖ` such that the invariant holds with
//! every other balance fixed.  The equation reduces to
//!
//! ```text
//! y² + b·y = c
//! c = D^(n+1) / (n^n · Π'x · Ann · n)      (Π' skips asset k)
//! b = Σ'x + D / Ann − D                    (Σ' skips asset k)
//! ```
//!
//! solved by `y ← (y² + c) / (2y + b)` from `y = D`.
//!
//! Swaps and single-asset withdrawals both go through [`solve_y`]; the
//! swap caller substitutes the post-trade input balance into the snapshot
//! first, the withdrawal caller passes a reduced target `D`.

use primitive_types::{U256, U512};
use tracing::{trace, warn};

use super::checked::CheckedArithmetic;
use super::invariant::MAX_ITERATIONS;
use super::precision::{narrow, widen};
use crate::error::{Result, SwapError};

/// Solves for the normalized balance of asset `k` that keeps the invariant
/// at `d`, holding all other entries of `xp` fixed.
///
/// `xp[k]` itself is ignored.  The caller validates `k < xp.len()`.
///
/// # Errors
///
/// - [`SwapError::ConvergenceFailure`] if `|Δy| > 1` after
///   [`MAX_ITERATIONS`] steps.
/// - [`SwapError::DivisionByZero`] if a balance other than `xp[k]` is
///   zero or the iteration denominator reaches zero.
/// - [`SwapError::ArithmeticOverflow`] if an intermediate exceeds 512 bits
///   or the denominator `2y + b` goes negative.
pub fn solve_y(xp: &[U256], amplification: u64, k: usize, d: U256) -> Result<U256> {
    let n = U512::from(xp.len());
    let ann = U512::from(amplification).safe_mul(n, "y: A·n")?;
    let d = widen(d);

    let mut c = d;
    let mut sum = U512::zero();
    for (idx, &x) in xp.iter().enumerate() {
        if idx == k {
            continue;
        }
        let x = widen(x);
        sum = sum.safe_add(x, "y: S'")?;
        c = c
            .safe_mul(d, "y: c·D")?
            .safe_div(x.safe_mul(n, "y: x·n")?)?;
    }
    c = c
        .safe_mul(d, "y: c·D")?
        .safe_div(n.safe_mul(ann, "y: n·A·n")?)?;
    let b = sum.safe_add(d.safe_div(ann)?, "y: b")?;

    let mut y = d;
    let mut y_prev = U512::zero();
    let mut iterations = 0u32;
    while y.abs_diff(y_prev) > U512::one() {
        if iterations == MAX_ITERATIONS {
            warn!(iterations, asset = k, "balance solver did not converge");
            return Err(SwapError::ConvergenceFailure("y"));
        }
        iterations += 1;
        y_prev = y;

        let numerator = y.safe_mul(y, "y: y²")?.safe_add(c, "y: y² + c")?;
        let denominator = y
            .safe_mul(U512::from(2u8), "y: 2y")?
            .safe_add(b, "y: 2y + b")?
            .safe_sub(d, "y: denominator")?;
        y = numerator.safe_div(denominator)?;
    }

    trace!(iterations, asset = k, "balance solver converged");
    narrow(y, "y: result")
}
