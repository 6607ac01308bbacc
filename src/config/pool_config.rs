//! Configuration for a multi-asset StableSwap pool.

use primitive_types::U256;

use crate::domain::{FeeRate, Fees};
use crate::error::{Result, SwapError};
use crate::math::{mul_div, precision, CheckedArithmetic};

/// Initial funding of a pool.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum InitialBalances {
    /// Native balance per asset.
    Balances(Vec<U256>),
    /// A target invariant spread evenly over the assets:
    /// `balance_i = D / n * 10^24 / rate_i`.
    TargetInvariant(U256),
}

/// Configuration for a StableSwap pool over `n_assets` assets.
///
/// # Amplification Parameter
///
/// `amplification` is `A · n^(n−1)`, the form the invariant uses
/// directly.  It must be at least 1 with `amplification · n > 1`.
///
/// - `A = 1`: close to constant product
/// - `A → ∞`: approaches constant sum
///
/// # Defaults
///
/// | Field | Default |
/// |-------|---------|
/// | rates | `10^24` per asset |
/// | trade fee | `4 · 10^6` (0.04%) |
/// | withdraw fee | 0 |
/// | initial supply | 0 (uninitialized) |
///
/// # Examples
///
/// ```
/// use primitive_types::U256;
/// use stableswap_model::config::{InitialBalances, PoolConfig};
///
/// let rates = vec![U256::exp10(6), U256::exp10(18), U256::exp10(18)];
/// let balances = vec![U256::exp10(22), U256::exp10(10), U256::exp10(10)];
/// let config = PoolConfig::new(720, 3, InitialBalances::Balances(balances))
///     .with_rates(rates);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PoolConfig {
    amplification: u64,
    n_assets: usize,
    initial: InitialBalances,
    rates: Vec<U256>,
    fees: Fees,
    initial_supply: U256,
}

impl PoolConfig {
    /// Creates a configuration with default rates, fees, and supply.
    ///
    /// The result is not validated until [`validate`](Self::validate) or
    /// pool construction.
    #[must_use]
    pub fn new(amplification: u64, n_assets: usize, initial: InitialBalances) -> Self {
        Self {
            amplification,
            n_assets,
            initial,
            rates: vec![precision(); n_assets],
            fees: Fees::default(),
            initial_supply: U256::zero(),
        }
    }

    /// Sets the per-asset rates mapping native units to the `10^24` basis.
    #[must_use]
    pub fn with_rates(mut self, rates: Vec<U256>) -> Self {
        self.rates = rates;
        self
    }

    /// Sets the trade fee numerator (of `10^10`).
    #[must_use]
    pub fn with_trade_fee(mut self, numerator: u64) -> Self {
        self.fees = self.fees.with_trade(FeeRate::new(numerator));
        self
    }

    /// Sets the withdraw fee numerator (of `10^10`).
    #[must_use]
    pub fn with_withdraw_fee(mut self, numerator: u64) -> Self {
        self.fees = self.fees.with_withdraw(FeeRate::new(numerator));
        self
    }

    /// Sets the share supply the pool starts with.
    #[must_use]
    pub const fn with_initial_supply(mut self, supply: U256) -> Self {
        self.initial_supply = supply;
        self
    }

    /// Validates all configuration invariants.
    ///
    /// # Errors
    ///
    /// - [`SwapError::InvalidConfiguration`] if there are fewer than two
    ///   assets, the amplification is out of range, a rate is zero, or a
    ///   fee exceeds 100%.
    /// - [`SwapError::LengthMismatch`] if the rate or balance vector does
    ///   not have one entry per asset.
    pub fn validate(&self) -> Result<()> {
        if self.n_assets < 2 {
            return Err(SwapError::InvalidConfiguration(
                "a pool needs at least two assets",
            ));
        }
        if self.amplification == 0 {
            return Err(SwapError::InvalidConfiguration(
                "amplification must be greater than zero",
            ));
        }
        let ann = u128::from(self.amplification) * self.n_assets as u128;
        if ann <= 1 {
            return Err(SwapError::InvalidConfiguration(
                "amplification times asset count must exceed one",
            ));
        }
        if self.rates.len() != self.n_assets {
            return Err(SwapError::LengthMismatch {
                expected: self.n_assets,
                actual: self.rates.len(),
            });
        }
        if self.rates.iter().any(U256::is_zero) {
            return Err(SwapError::InvalidConfiguration("rates must be positive"));
        }
        if let InitialBalances::Balances(balances) = &self.initial {
            if balances.len() != self.n_assets {
                return Err(SwapError::LengthMismatch {
                    expected: self.n_assets,
                    actual: balances.len(),
                });
            }
        }
        self.fees.validate()
    }

    /// Returns the amplification parameter.
    #[must_use]
    pub const fn amplification(&self) -> u64 {
        self.amplification
    }

    /// Returns the number of assets.
    #[must_use]
    pub const fn n_assets(&self) -> usize {
        self.n_assets
    }

    /// Returns the initial funding as configured.
    #[must_use]
    pub const fn initial(&self) -> &InitialBalances {
        &self.initial
    }

    /// Returns the per-asset rates.
    #[must_use]
    pub fn rates(&self) -> &[U256] {
        &self.rates
    }

    /// Returns the fee schedule.
    #[must_use]
    pub const fn fees(&self) -> Fees {
        self.fees
    }

    /// Returns the initial share supply.
    #[must_use]
    pub const fn initial_supply(&self) -> U256 {
        self.initial_supply
    }

    /// Resolves the initial funding into one native balance per asset.
    ///
    /// # Errors
    ///
    /// - [`SwapError::DivisionByZero`] if a rate is zero.
    /// - [`SwapError::ArithmeticOverflow`] if the expansion overflows.
    pub fn initial_balances(&self) -> Result<Vec<U256>> {
        match &self.initial {
            InitialBalances::Balances(balances) => Ok(balances.clone()),
            InitialBalances::TargetInvariant(d) => {
                let share = d.safe_div(U256::from(self.n_assets))?;
                self.rates
                    .iter()
                    .map(|&rate| mul_div(share, precision(), rate, "initial balance"))
                    .collect()
            }
        }
    }
}
