//! Pool state and normalization.
//!
//! [`PoolState`] holds the configuration and the native balances of a
//! StableSwap pool.  Solvers only ever see **normalized** balances,
//! `balance_i · rate_i`, so assets of different native precision share one
//! `10^24` basis.

use primitive_types::U256;

use crate::config::PoolConfig;
use crate::domain::Fees;
use crate::error::{Result, SwapError};
use crate::math::{compute_d, mul_div, precision, solve_y, CheckedArithmetic};
use crate::traits::FromConfig;

/// A multi-asset StableSwap pool.
///
/// # Invariants
///
/// - `balances.len() == rates.len() == n_assets >= 2`
/// - every rate is positive
/// - both fee rates are at most 100%
///
/// Balances change only through the [`SwapPool`](crate::traits::SwapPool)
/// and [`LiquidityPool`](crate::traits::LiquidityPool) entry points.
/// `supply` is reported by those operations but only ever changed by
/// [`set_supply`](Self::set_supply).
///
/// # Examples
///
/// ```
/// use primitive_types::U256;
/// use stableswap_model::config::{InitialBalances, PoolConfig};
/// use stableswap_model::pools::PoolState;
/// use stableswap_model::traits::FromConfig;
///
/// let balance = U256::exp10(6);
/// let config = PoolConfig::new(100, 2, InitialBalances::Balances(vec![balance; 2]));
/// let Ok(pool) = PoolState::from_config(&config) else { unreachable!() };
///
/// // A balanced pool has D = n · normalized balance.
/// assert_eq!(pool.invariant(), Ok(U256::from(2u8) * balance * U256::exp10(24)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolState {
    amplification: u64,
    balances: Vec<U256>,
    rates: Vec<U256>,
    fees: Fees,
    supply: U256,
}

impl PoolState {
    /// Returns the amplification parameter `A · n^(n−1)`.
    #[must_use]
    pub const fn amplification(&self) -> u64 {
        self.amplification
    }

    /// Returns the number of assets.
    #[must_use]
    pub fn n_assets(&self) -> usize {
        self.balances.len()
    }

    /// Returns the native balances.
    #[must_use]
    pub fn balances(&self) -> &[U256] {
        &self.balances
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

    /// Returns the outstanding share supply.
    #[must_use]
    pub const fn supply(&self) -> U256 {
        self.supply
    }

    /// Records a new share supply.
    pub fn set_supply(&mut self, supply: U256) {
        self.supply = supply;
    }

    /// Returns the normalized balances `balance_i · rate_i`.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::ArithmeticOverflow`] if a product exceeds 256
    /// bits.
    pub fn normalized(&self) -> Result<Vec<U256>> {
        self.normalize(&self.balances)
    }

    /// Returns the invariant `D` of the current balances.
    ///
    /// # Errors
    ///
    /// Normalization or solver failures.
    pub fn invariant(&self) -> Result<U256> {
        self.invariant_of(&self.balances)
    }

    /// Value of one share in the `10^24` basis: `D · 10^24 / supply`.
    ///
    /// # Errors
    ///
    /// - [`SwapError::PoolUninitialized`] if `supply` is zero.
    /// - Any failure of [`invariant`](Self::invariant).
    pub fn virtual_price(&self) -> Result<U256> {
        self.require_supply()?;
        mul_div(self.invariant()?, precision(), self.supply, "virtual price")
    }

    /// Normalized balance of asset `j` that keeps the current invariant
    /// once asset `i` holds the normalized amount `x`.
    ///
    /// # Errors
    ///
    /// - [`SwapError::InvalidAssetIndex`] or [`SwapError::InvalidQuantity`]
    ///   for out-of-range or equal indices.
    /// - Solver failures.
    pub fn solve_for(&self, i: usize, j: usize, x: U256) -> Result<U256> {
        self.check_pair(i, j)?;
        let mut xp = self.normalized()?;
        let d = compute_d(&xp, self.amplification)?;
        xp[i] = x;
        solve_y(&xp, self.amplification, j, d)
    }

    /// Normalized balance of asset `i` under `target_d`, with the other
    /// assets taken from the snapshot `xp`.
    ///
    /// # Errors
    ///
    /// - [`SwapError::InvalidAssetIndex`] if `i` is out of range.
    /// - [`SwapError::LengthMismatch`] if `xp` is not one entry per asset.
    /// - Solver failures.
    pub fn solve_for_target_d(&self, i: usize, target_d: U256, xp: &[U256]) -> Result<U256> {
        self.check_index(i)?;
        self.check_len(xp)?;
        solve_y(xp, self.amplification, i, target_d)
    }

    pub(crate) fn normalize(&self, balances: &[U256]) -> Result<Vec<U256>> {
        balances
            .iter()
            .zip(&self.rates)
            .map(|(&balance, &rate)| balance.safe_mul(rate, "normalized balance"))
            .collect()
    }

    pub(crate) fn invariant_of(&self, balances: &[U256]) -> Result<U256> {
        compute_d(&self.normalize(balances)?, self.amplification)
    }

    pub(crate) fn replace_balances(&mut self, balances: &[U256]) {
        self.balances.clear();
        self.balances.extend_from_slice(balances);
    }

    pub(crate) fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.n_assets() {
            return Err(SwapError::InvalidAssetIndex {
                index,
                n_assets: self.n_assets(),
            });
        }
        Ok(())
    }

    pub(crate) fn check_pair(&self, i: usize, j: usize) -> Result<()> {
        self.check_index(i)?;
        self.check_index(j)?;
        if i == j {
            return Err(SwapError::InvalidQuantity(
                "cannot exchange an asset for itself",
            ));
        }
        Ok(())
    }

    pub(crate) fn check_len(&self, values: &[U256]) -> Result<()> {
        if values.len() != self.n_assets() {
            return Err(SwapError::LengthMismatch {
                expected: self.n_assets(),
                actual: values.len(),
            });
        }
        Ok(())
    }

    pub(crate) fn require_supply(&self) -> Result<()> {
        if self.supply.is_zero() {
            return Err(SwapError::PoolUninitialized);
        }
        Ok(())
    }
}

impl FromConfig<PoolConfig> for PoolState {
    /// Creates a pool from a validated [`PoolConfig`].
    ///
    /// A target invariant is expanded into per-asset balances.
    ///
    /// # Errors
    ///
    /// Any [`PoolConfig::validate`] failure, or an overflow while expanding
    /// a target invariant.
    fn from_config(config: &PoolConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            amplification: config.amplification(),
            balances: config.initial_balances()?,
            rates: config.rates().to_vec(),
            fees: config.fees(),
            supply: config.initial_supply(),
        })
    }
}
