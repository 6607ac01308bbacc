//! Outcome of an exchange between two pool assets.

use core::fmt;

use primitive_types::U256;

/// The outcome of an exchange, in native units of the assets involved.
///
/// `fee` is the part of the gross output retained by the pool; the caller
/// receives `amount_out`.  `balances` is the pool's native balance vector
/// once the exchange is applied.
///
/// # Invariants
///
/// - `asset_in != asset_out`
/// - `amount_in > 0` and `amount_out > 0`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExchangeResult {
    asset_in: usize,
    asset_out: usize,
    amount_in: U256,
    amount_out: U256,
    fee: U256,
    balances: Vec<U256>,
}

impl ExchangeResult {
    pub(crate) const fn new(
        asset_in: usize,
        asset_out: usize,
        amount_in: U256,
        amount_out: U256,
        fee: U256,
        balances: Vec<U256>,
    ) -> Self {
        Self {
            asset_in,
            asset_out,
            amount_in,
            amount_out,
            fee,
            balances,
        }
    }

    /// Index of the asset sold to the pool.
    #[must_use]
    pub const fn asset_in(&self) -> usize {
        self.asset_in
    }

    /// Index of the asset bought from the pool.
    #[must_use]
    pub const fn asset_out(&self) -> usize {
        self.asset_out
    }

    /// Native amount of `asset_in` paid.
    #[must_use]
    pub const fn amount_in(&self) -> U256 {
        self.amount_in
    }

    /// Native amount of `asset_out` received, net of fee.
    #[must_use]
    pub const fn amount_out(&self) -> U256 {
        self.amount_out
    }

    /// Native amount of `asset_out` kept by the pool as fee.
    #[must_use]
    pub const fn fee(&self) -> U256 {
        self.fee
    }

    /// Pool balances after the exchange.
    #[must_use]
    pub fn balances(&self) -> &[U256] {
        &self.balances
    }
}

impl fmt::Display for ExchangeResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ExchangeResult(#{} {} -> #{} {}, fee: {})",
            self.asset_in, self.amount_in, self.asset_out, self.amount_out, self.fee
        )
    }
}
