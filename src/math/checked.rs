//! Checked arithmetic for the wide integer types used by the solvers.
//!
//! The [`CheckedArithmetic`] trait wraps the `Option`-returning checked
//! operations of [`U256`] and [`U512`] so that every failure surfaces as a
//! [`SwapError`] carrying a short description of the term being computed.
//!
//! # Examples
//!
//! ```
//! use primitive_types::U256;
//! use stableswap_model::math::CheckedArithmetic;
//!
//! let a = U256::from(100u64);
//! let b = U256::from(200u64);
//! let Ok(sum) = a.safe_add(b, "example sum") else { unreachable!() };
//! assert_eq!(sum, U256::from(300u64));
//! assert!(U256::MAX.safe_add(b, "overflowing sum").is_err());
//! ```

use primitive_types::{U256, U512};

use super::precision::{narrow, widen};
use crate::error::{Result, SwapError};

/// Fallible arithmetic for wide unsigned integers.
///
/// # Contract
///
/// - **No panics**: every error condition produces `Err`.
/// - **No saturation**: underflow is an error, not a clamp to zero.
/// - Division floors, matching the rounding of the reference model.
pub trait CheckedArithmetic: Sized + Copy + Ord {
    /// Checked addition.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::ArithmeticOverflow`] tagged with `what`.
    fn safe_add(self, rhs: Self, what: &'static str) -> Result<Self>;

    /// Checked subtraction.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::ArithmeticOverflow`] tagged with `what` when
    /// the result would be negative.
    fn safe_sub(self, rhs: Self, what: &'static str) -> Result<Self>;

    /// Checked multiplication.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::ArithmeticOverflow`] tagged with `what`.
    fn safe_mul(self, rhs: Self, what: &'static str) -> Result<Self>;

    /// Floor division.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::DivisionByZero`] if `rhs` is zero.
    fn safe_div(self, rhs: Self) -> Result<Self>;

    /// Absolute difference `|self - rhs|`.
    #[must_use]
    fn abs_diff(self, rhs: Self) -> Self;
}

macro_rules! impl_checked_arithmetic {
    ($ty:ty) => {
        impl CheckedArithmetic for $ty {
            #[inline]
            fn safe_add(self, rhs: Self, what: &'static str) -> Result<Self> {
                self.checked_add(rhs)
                    .ok_or(SwapError::ArithmeticOverflow(what))
            }

            #[inline]
            fn safe_sub(self, rhs: Self, what: &'static str) -> Result<Self> {
                self.checked_sub(rhs)
                    .ok_or(SwapError::ArithmeticOverflow(what))
            }

            #[inline]
            fn safe_mul(self, rhs: Self, what: &'static str) -> Result<Self> {
                self.checked_mul(rhs)
                    .ok_or(SwapError::ArithmeticOverflow(what))
            }

            #[inline]
            fn safe_div(self, rhs: Self) -> Result<Self> {
                self.checked_div(rhs).ok_or(SwapError::DivisionByZero)
            }

            #[inline]
            fn abs_diff(self, rhs: Self) -> Self {
                if self > rhs {
                    self - rhs
                } else {
                    rhs - self
                }
            }
        }
    };
}

impl_checked_arithmetic!(U256);
impl_checked_arithmetic!(U512);

/// Computes `a * b / c` with a 512-bit intermediate product, flooring.
///
/// This is the shape of every pro-rata formula in the pool
/// (`supply * (d2 - d0) / d0`, `balance * shares / supply`, ...).
///
/// # Errors
///
/// - [`SwapError::DivisionByZero`] if `c` is zero.
/// - [`SwapError::ArithmeticOverflow`] tagged with `what` if the quotient
///   does not fit in 256 bits.
pub fn mul_div(a: U256, b: U256, c: U256, what: &'static str) -> Result<U256> {
    let product = widen(a).safe_mul(widen(b), what)?;
    narrow(product.safe_div(widen(c))?, what)
}
