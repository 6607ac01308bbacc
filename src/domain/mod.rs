//! Value types shared by the pool operations.
//!
//! Fee rates and the outcome records returned by swaps, deposits, and
//! withdrawals.  Quantities are [`U256`](primitive_types::U256) in native
//! asset units unless a type documents otherwise.

mod fee_rate;
mod fees;
mod liquidity_outcome;
mod swap_result;

pub use fee_rate::FeeRate;
pub use fees::Fees;
pub use liquidity_outcome::{
    DepositOutcome, ImbalancedWithdrawOutcome, WithdrawOneQuote, WithdrawOutcome,
};
pub use swap_result::ExchangeResult;
