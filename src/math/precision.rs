//! Fixed-point precision constants and integer width conversions.
//!
//! All pool quantities live in [`U256`].  Products that can exceed 256
//! bits (`D_P · D`, `y²`, `c · D`, ...) are computed in [`U512`] and
//! narrowed back with an explicit overflow check.
//!
//! | Constant | Value | Role |
//! |----------|-------|------|
//! | [`PRECISION_DECIMALS`] | 24 | normalized base unit `10^24` |
//! | [`FEE_DENOMINATOR`] | `10^10` | denominator of fee numerators |
//! | [`DEFAULT_TRADE_FEE`] | `4 · 10^6` | 0.04% |
//! | [`DEFAULT_WITHDRAW_FEE`] | 0 | |

use primitive_types::{U256, U512};

use crate::error::{Result, SwapError};

/// Number of decimals of the normalized base unit.
pub const PRECISION_DECIMALS: usize = 24;

/// Denominator that fee numerators are expressed against.
pub const FEE_DENOMINATOR: u64 = 10_000_000_000;

/// Trade fee applied when a configuration does not set one.
pub const DEFAULT_TRADE_FEE: u64 = 4_000_000;

/// Withdraw fee applied when a configuration does not set one.
pub const DEFAULT_WITHDRAW_FEE: u64 = 0;

/// Returns the normalized base unit `10^24`.
///
/// Also the default per-asset rate.
#[must_use]
pub fn precision() -> U256 {
    U256::exp10(PRECISION_DECIMALS)
}

/// Widens a 256-bit value for solver intermediates.
#[inline]
#[must_use]
pub fn widen(value: U256) -> U512 {
    U512::from(value)
}

/// Narrows a 512-bit intermediate back to 256 bits.
///
/// # Errors
///
/// Returns [`SwapError::ArithmeticOverflow`] tagged with `what` if the
/// value does not fit.
#[inline]
pub fn narrow(value: U512, what: &'static str) -> Result<U256> {
    U256::try_from(value).map_err(|_| SwapError::ArithmeticOverflow(what))
}
