//! Integer arithmetic and the StableSwap solvers.
//!
//! Everything here is pure and operates on normalized balances; pool state
//! and fee accounting live in [`pools`](crate::pools).
//!
//! | Item | Role |
//! |------|------|
//! | [`CheckedArithmetic`] | overflow-checked `U256`/`U512` operations |
//! | [`compute_d`] | invariant `D` from normalized balances |
//! | [`solve_y`] | one asset's balance under a given `D` |
//! | [`invariant_error`] | residual of the invariant equation |

mod balance;
mod checked;
mod invariant;
mod precision;

pub use balance::solve_y;
pub use checked::{mul_div, CheckedArithmetic};
pub use invariant::{compute_d, invariant_error, MAX_ITERATIONS};
pub use precision::{
    narrow, precision, widen, DEFAULT_TRADE_FEE, DEFAULT_WITHDRAW_FEE, FEE_DENOMINATOR,
    PRECISION_DECIMALS,
};
