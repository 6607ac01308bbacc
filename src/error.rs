//! Unified error types for the StableSwap model.
//!
//! All fallible operations across the crate return [`SwapError`] as their
//! error type.  Every variant is terminal for the operation that produced
//! it: nothing is retried internally and the pool is left untouched.

use thiserror::Error;

/// Errors produced by pool construction, the solvers, and liquidity
/// operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SwapError {
    /// The first deposit into an uninitialized pool omitted an asset.
    #[error("first deposit must seed every asset with a positive amount")]
    InvalidBootstrap,

    /// The computed swap output is zero or negative.
    #[error("trade rejected: {0}")]
    RejectedTrade(&'static str),

    /// A fixed-point iteration exceeded its iteration cap.
    #[error("solver did not converge: {0}")]
    ConvergenceFailure(&'static str),

    /// An intermediate value exceeded the integer width.
    #[error("arithmetic overflow: {0}")]
    ArithmeticOverflow(&'static str),

    /// A division with a zero divisor was attempted.
    #[error("division by zero")]
    DivisionByZero,

    /// A supply-proportional operation was invoked while `supply == 0`.
    #[error("pool has no outstanding shares")]
    PoolUninitialized,

    /// Pool configuration failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),

    /// An asset index is out of range.
    #[error("invalid asset index {index} for a pool of {n_assets} assets")]
    InvalidAssetIndex {
        /// The offending index.
        index: usize,
        /// Number of assets in the pool.
        n_assets: usize,
    },

    /// A per-asset vector does not have one entry per asset.
    #[error("expected {expected} per-asset values, got {actual}")]
    LengthMismatch {
        /// Number of assets in the pool.
        expected: usize,
        /// Length of the supplied vector.
        actual: usize,
    },

    /// A caller-supplied quantity is unusable (for example zero).
    #[error("invalid quantity: {0}")]
    InvalidQuantity(&'static str),

    /// A withdrawal or its fees would drive a balance below zero.
    #[error("insufficient balance of asset {asset}")]
    InsufficientBalance {
        /// Index of the asset that ran short.
        asset: usize,
    },

    /// A share amount exceeds the outstanding supply.
    #[error("share amount exceeds outstanding supply")]
    InsufficientSupply,

    /// Pool balances changed between preview and commit.
    #[error("quote no longer matches pool balances")]
    StaleQuote,
}

/// Crate-wide result alias.
pub type Result<T> = core::result::Result<T, SwapError>;
