//! Construction of pools from their configuration.
//!
//! [`FromConfig`] gives every pool type one way in: validate the blueprint,
//! resolve its defaults, and return a pool that already satisfies all of
//! its state invariants.
//!
//! ```text
//! PoolConfig ──validate()──▶ PoolState::from_config(&config)
//! ```

use crate::error::Result;

/// Builds a pool from a configuration.
///
/// # Validation Contract
///
/// Implementations **must** run the configuration's own validation before
/// building anything.  A successfully constructed pool is in a valid
/// initial state: vector lengths agree with the asset count, rates are
/// positive, and fees are at most 100%.
///
/// The configuration is taken by reference so one blueprint can seed
/// several independent pools.
///
/// # Errors
///
/// Returns [`SwapError::InvalidConfiguration`](crate::error::SwapError::InvalidConfiguration)
/// or [`SwapError::LengthMismatch`](crate::error::SwapError::LengthMismatch)
/// if the configuration is invalid.
pub trait FromConfig<C> {
    /// Creates a new pool from `config`.
    ///
    /// # Errors
    ///
    /// Any validation failure of `config`, or an arithmetic failure while
    /// resolving its initial balances.
    fn from_config(config: &C) -> Result<Self>
    where
        Self: Sized;
}
