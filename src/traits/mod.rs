//! Core trait abstractions for pool operations.
//!
//! [`SwapPool`] for exchanges, [`LiquidityPool`] for deposits and
//! withdrawals, and [`FromConfig`] for configuration-driven construction.

mod from_config;
mod liquidity_pool;
mod swap_pool;

pub use from_config::FromConfig;
pub use liquidity_pool::LiquidityPool;
pub use swap_pool::SwapPool;
