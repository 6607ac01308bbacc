//! Fee schedule of a pool.

use core::fmt;

use primitive_types::U256;

use super::FeeRate;
use crate::error::{Result, SwapError};
use crate::math::{DEFAULT_TRADE_FEE, DEFAULT_WITHDRAW_FEE};

/// Trade and withdraw fee rates, constant for the lifetime of a pool.
///
/// - The **trade fee** is charged on swap output and, scaled by
///   `n / (4 · (n − 1))`, on the imbalance of deposits and withdrawals.
/// - The **withdraw fee** is a flat charge on withdrawn value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Fees {
    trade: FeeRate,
    withdraw: FeeRate,
}

impl Fees {
    /// Creates a fee schedule.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::InvalidConfiguration`] if either rate exceeds
    /// 100%.
    pub fn new(trade: FeeRate, withdraw: FeeRate) -> Result<Self> {
        let fees = Self { trade, withdraw };
        fees.validate()?;
        Ok(fees)
    }

    /// Checks that both rates are at most 100%.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::InvalidConfiguration`] naming the offending
    /// rate.
    pub fn validate(&self) -> Result<()> {
        if !self.trade.is_valid() {
            return Err(SwapError::InvalidConfiguration(
                "trade fee exceeds the fee denominator",
            ));
        }
        if !self.withdraw.is_valid() {
            return Err(SwapError::InvalidConfiguration(
                "withdraw fee exceeds the fee denominator",
            ));
        }
        Ok(())
    }

    /// Replaces the trade fee rate without validating it.
    #[must_use]
    pub const fn with_trade(self, trade: FeeRate) -> Self {
        Self { trade, ..self }
    }

    /// Replaces the withdraw fee rate without validating it.
    #[must_use]
    pub const fn with_withdraw(self, withdraw: FeeRate) -> Self {
        Self { withdraw, ..self }
    }

    /// Returns the trade fee rate.
    #[must_use]
    pub const fn trade(&self) -> FeeRate {
        self.trade
    }

    /// Returns the withdraw fee rate.
    #[must_use]
    pub const fn withdraw(&self) -> FeeRate {
        self.withdraw
    }

    /// Fee on a gross swap output.
    ///
    /// # Errors
    ///
    /// Propagates [`FeeRate::apply`] failures.
    pub fn trade_fee(&self, amount: U256) -> Result<U256> {
        self.trade.apply(amount)
    }

    /// Flat fee on a withdrawn amount.
    ///
    /// # Errors
    ///
    /// Propagates [`FeeRate::apply`] failures.
    pub fn withdraw_fee(&self, amount: U256) -> Result<U256> {
        self.withdraw.apply(amount)
    }

    /// Fee on the distance between an asset's actual and ideal balance in
    /// an `n`-asset pool.
    ///
    /// # Errors
    ///
    /// Propagates [`FeeRate::for_imbalance`] and [`FeeRate::apply`]
    /// failures.
    pub fn imbalance_fee(&self, n_assets: usize, difference: U256) -> Result<U256> {
        self.trade.for_imbalance(n_assets)?.apply(difference)
    }
}

impl Default for Fees {
    fn default() -> Self {
        Self {
            trade: FeeRate::new(DEFAULT_TRADE_FEE),
            withdraw: FeeRate::new(DEFAULT_WITHDRAW_FEE),
        }
    }
}

impl fmt::Display for Fees {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "trade {} / withdraw {}", self.trade, self.withdraw)
    }
}
