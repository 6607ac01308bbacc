//! Swap operations over a multi-asset pool.
//!
//! [`SwapPool`] covers quoting and executing exchanges between two assets
//! of a pool, addressed by index.
//!
//! # Fee Rule
//!
//! StableSwap pools charge the trade fee on the **output** side:
//!
//! ```text
//! gross  = xp[j] − y(xp[i] + dx·rate[i]) − 1
//! fee    = gross · trade_fee / 10^10
//! output = (gross − fee) / rate[j]
//! ```
//!
//! The fee stays in the pool's balance of asset `j`.
//!
//! # Preview and Commit
//!
//! [`SwapPool::preview_exchange`] is pure.  [`SwapPool::exchange`] runs the
//! same computation and, only on success, writes the resulting balances
//! back; a failed exchange leaves the pool untouched.

use primitive_types::U256;

use crate::domain::{ExchangeResult, Fees};
use crate::error::Result;

/// Exchange between assets of a pool.
///
/// # Errors
///
/// Methods return [`SwapError`](crate::error::SwapError); common variants:
///
/// - `InvalidAssetIndex`: an index is outside the pool
/// - `RejectedTrade`: the output would not be positive
/// - `ConvergenceFailure`: a solver hit its iteration cap
/// - `ArithmeticOverflow`: an intermediate exceeded its integer width
pub trait SwapPool {
    /// Number of assets in the pool.
    #[must_use]
    fn n_assets(&self) -> usize;

    /// Fee schedule, constant for the lifetime of the pool.
    #[must_use]
    fn fees(&self) -> Fees;

    /// Fee-free normalized output of asset `j` for a normalized input `dx`
    /// of asset `i`.
    ///
    /// # Errors
    ///
    /// Invalid indices or solver failures.
    fn quote(&self, i: usize, j: usize, dx: U256) -> Result<U256>;

    /// Computes the exchange of `dx` native units of asset `i` for asset
    /// `j` without modifying the pool.
    ///
    /// # Errors
    ///
    /// - `InvalidAssetIndex` or `InvalidQuantity` for bad indices or a
    ///   zero `dx`.
    /// - `RejectedTrade` if the output is not positive.
    fn preview_exchange(&self, i: usize, j: usize, dx: U256) -> Result<ExchangeResult>;

    /// Exchanges `dx` native units of asset `i` for asset `j`.
    ///
    /// # Errors
    ///
    /// Same as [`preview_exchange`](Self::preview_exchange).
    fn exchange(&mut self, i: usize, j: usize, dx: U256) -> Result<ExchangeResult>;
}
