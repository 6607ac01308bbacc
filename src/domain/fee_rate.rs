//! Fee fractions expressed against [`FEE_DENOMINATOR`].

use core::fmt;

use primitive_types::U256;

use crate::error::{Result, SwapError};
use crate::math::{CheckedArithmetic, FEE_DENOMINATOR};

/// A fee fraction `numerator / 10^10`.
///
/// Any `u64` is representable, but only values up to
/// [`FEE_DENOMINATOR`] (100%) are meaningful; configurations reject
/// anything larger.
///
/// # Examples
///
/// ```
/// use primitive_types::U256;
/// use stableswap_model::domain::FeeRate;
///
/// let rate = FeeRate::new(4_000_000); // 0.04%
/// assert!(rate.is_valid());
/// assert_eq!(rate.apply(U256::from(1_000_000u64)), Ok(U256::from(400u64)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct FeeRate(u64);

impl FeeRate {
    /// No fee.
    pub const ZERO: Self = Self(0);

    /// 100%.
    pub const MAX: Self = Self(FEE_DENOMINATOR);

    /// Creates a new `FeeRate` from a raw numerator.
    pub const fn new(numerator: u64) -> Self {
        Self(numerator)
    }

    /// Returns the raw numerator.
    #[must_use]
    pub const fn get(&self) -> u64 {
        self.0
    }

    /// Returns `true` if the fraction is at most 100%.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.0 <= FEE_DENOMINATOR
    }

    /// Returns `true` if no fee is charged.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Computes `amount · numerator / 10^10`, flooring.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::ArithmeticOverflow`] if `amount · numerator`
    /// exceeds 256 bits.
    pub fn apply(&self, amount: U256) -> Result<U256> {
        amount
            .safe_mul(U256::from(self.0), "fee: amount·rate")?
            .safe_div(U256::from(FEE_DENOMINATOR))
    }

    /// Scales the rate by `n / (4 · (n − 1))`, flooring.
    ///
    /// This spreads a swap fee over a multi-asset deposit or withdrawal:
    /// the imbalance part of such an operation is charged at this rate.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::InvalidConfiguration`] if `n_assets < 2`.
    pub fn for_imbalance(&self, n_assets: usize) -> Result<Self> {
        if n_assets < 2 {
            return Err(SwapError::InvalidConfiguration(
                "imbalance fee needs at least two assets",
            ));
        }
        let n = n_assets as u128;
        let scaled = u128::from(self.0) * n / (4 * (n - 1));
        u64::try_from(scaled)
            .map(Self)
            .map_err(|_| SwapError::ArithmeticOverflow("fee: imbalance rate"))
    }
}

impl fmt::Display for FeeRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.0, FEE_DENOMINATOR)
    }
}
