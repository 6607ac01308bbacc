//! Liquidity provision and redemption, extending [`SwapPool`].
//!
//! # Share Accounting
//!
//! Operations report how many pool shares were minted or must be burned,
//! but never change the pool's supply themselves.  The ledger that holds
//! shares applies those amounts and reports the new total back through
//! [`LiquidityPool::set_supply`].
//!
//! # Preview and Commit
//!
//! Every mutating operation has a pure `preview_*` counterpart returning
//! the same outcome, including the balances it would leave.  Single-asset
//! redemption additionally supports committing a quote taken earlier:
//!
//! ```text
//! let quote = pool.preview_withdraw_one_coin(shares, i)?;   // &self
//! // ... caller accepts ...
//! pool.commit_withdraw_one_coin(&quote)?;                   // &mut self
//! ```
//!
//! A quote whose balances no longer match the pool is rejected as stale.

use primitive_types::U256;

use super::SwapPool;
use crate::domain::{DepositOutcome, ImbalancedWithdrawOutcome, WithdrawOneQuote, WithdrawOutcome};
use crate::error::Result;

/// Deposits and withdrawals against a pool.
///
/// # Errors
///
/// Methods return [`SwapError`](crate::error::SwapError); common variants:
///
/// - `InvalidBootstrap`: the first deposit omits an asset
/// - `PoolUninitialized`: a supply-proportional operation on an empty pool
/// - `InsufficientSupply`: more shares than exist
/// - `InsufficientBalance`: more of an asset than the pool holds
/// - `LengthMismatch`: an amount vector with the wrong length
pub trait LiquidityPool: SwapPool {
    /// Outstanding pool shares.
    #[must_use]
    fn supply(&self) -> U256;

    /// Records the share supply after the caller applied a mint or burn.
    fn set_supply(&mut self, supply: U256);

    /// Computes a deposit of native `deposits` without modifying the pool.
    ///
    /// # Errors
    ///
    /// - `InvalidBootstrap` if the pool is empty and any deposit is zero.
    /// - `InvalidQuantity` if every deposit is zero.
    fn preview_add_liq(&self, deposits: &[U256]) -> Result<DepositOutcome>;

    /// Deposits native `deposits`, keeping imbalance fees in the pool.
    ///
    /// # Errors
    ///
    /// Same as [`preview_add_liq`](Self::preview_add_liq).
    fn add_liq(&mut self, deposits: &[U256]) -> Result<DepositOutcome>;

    /// Computes a proportional redemption of `shares` without modifying
    /// the pool.
    ///
    /// # Errors
    ///
    /// `PoolUninitialized`, `InvalidQuantity` for zero shares, or
    /// `InsufficientSupply`.
    fn preview_remove_liq(&self, shares: U256) -> Result<WithdrawOutcome>;

    /// Redeems `shares` for a proportional slice of every asset.
    ///
    /// # Errors
    ///
    /// Same as [`preview_remove_liq`](Self::preview_remove_liq).
    fn remove_liq(&mut self, shares: U256) -> Result<WithdrawOutcome>;

    /// Computes a withdrawal of exact native `amounts` without modifying
    /// the pool.
    ///
    /// # Errors
    ///
    /// `PoolUninitialized`, `InsufficientBalance` if the pool cannot cover
    /// an amount plus its fees, or `InsufficientSupply` if the required
    /// burn exceeds the supply.
    fn preview_remove_liquidity_imbalance(
        &self,
        amounts: &[U256],
    ) -> Result<ImbalancedWithdrawOutcome>;

    /// Withdraws exact native `amounts`.
    ///
    /// # Errors
    ///
    /// Same as
    /// [`preview_remove_liquidity_imbalance`](Self::preview_remove_liquidity_imbalance).
    fn remove_liquidity_imbalance(&mut self, amounts: &[U256]) -> Result<ImbalancedWithdrawOutcome>;

    /// Quotes redeeming `shares` entirely into asset `i`.
    ///
    /// # Errors
    ///
    /// `PoolUninitialized`, `InsufficientSupply`, `InvalidAssetIndex`, or
    /// `RejectedTrade` if nothing would be paid out.
    fn preview_withdraw_one_coin(&self, shares: U256, i: usize) -> Result<WithdrawOneQuote>;

    /// Applies a quote from
    /// [`preview_withdraw_one_coin`](Self::preview_withdraw_one_coin) and
    /// returns the native amount paid out.
    ///
    /// # Errors
    ///
    /// `StaleQuote` if the pool balances changed since the quote was taken.
    fn commit_withdraw_one_coin(&mut self, quote: &WithdrawOneQuote) -> Result<U256>;

    /// Redeems `shares` into asset `i` in one step.
    ///
    /// # Errors
    ///
    /// Same as
    /// [`preview_withdraw_one_coin`](Self::preview_withdraw_one_coin).
    fn calc_withdraw_one_coin(&mut self, shares: U256, i: usize) -> Result<WithdrawOneQuote>;
}
