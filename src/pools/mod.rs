//! The StableSwap pool and its operations.
//!
//! [`PoolState`] owns configuration and balances; the
//! [`SwapPool`](crate::traits::SwapPool) and
//! [`LiquidityPool`](crate::traits::LiquidityPool) implementations in
//! `liquidity_ops` are the only code that changes its balances.
//!
//! | Operation | Kind |
//! |-----------|------|
//! | `quote` | pure, normalized, fee-free |
//! | `exchange` | swap, fee on output |
//! | `add_liq` | deposit, imbalance fee |
//! | `remove_liq` | proportional exit, withdraw fee |
//! | `remove_liquidity_imbalance` | exact-amount exit, both fees |
//! | `calc_withdraw_one_coin` | single-asset exit, both fees |

mod liquidity_ops;
mod state;

#[cfg(test)]
#[allow(clippy::panic)]
mod proptest_properties;

pub use state::PoolState;
