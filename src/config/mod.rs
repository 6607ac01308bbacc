//! Pool configuration.
//!
//! [`PoolConfig`] is the declarative blueprint a
//! [`PoolState`](crate::pools::PoolState) is built from.

mod pool_config;

pub use pool_config::{InitialBalances, PoolConfig};
