//! Convenience re-exports for common types and traits.
//!
//! ```rust
//! use stableswap_model::prelude::*;
//! ```

pub use crate::config::{InitialBalances, PoolConfig};
pub use crate::domain::{
    DepositOutcome, ExchangeResult, FeeRate, Fees, ImbalancedWithdrawOutcome, WithdrawOneQuote,
    WithdrawOutcome,
};
pub use crate::error::{Result, SwapError};
pub use crate::math::{compute_d, solve_y, CheckedArithmetic};
pub use crate::pools::PoolState;
pub use crate::traits::{FromConfig, LiquidityPool, SwapPool};
