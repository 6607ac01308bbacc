//! # StableSwap Model
//!
//! Reference integer model of a multi-asset StableSwap bonding curve: the
//! invariant, single-asset swap outputs, and liquidity issuance and
//! redemption under a hybrid constant-sum/constant-product curve.
//!
//! All arithmetic is integer.  Public quantities are 256-bit, solver
//! intermediates 512-bit, and every operation checks for overflow instead
//! of wrapping.  Floor division order follows the reference formulas
//! exactly, so results are bit-for-bit comparable with other
//! implementations of the same curve.
//!
//! # Quick Start
//!
//! ```rust
//! use primitive_types::U256;
//! use stableswap_model::prelude::*;
//!
//! // 1. An empty three-asset pool: one 18-decimal and two 6-decimal assets
//! let rates = vec![U256::exp10(6), U256::exp10(18), U256::exp10(18)];
//! let config = PoolConfig::new(720, 3, InitialBalances::Balances(vec![U256::zero(); 3]))
//!     .with_rates(rates);
//! let Ok(mut pool) = PoolState::from_config(&config) else { unreachable!() };
//!
//! // 2. Seed every asset; the first depositor receives D shares
//! let seed = vec![U256::exp10(24), U256::exp10(12), U256::exp10(12)];
//! let Ok(deposit) = pool.add_liq(&seed) else { unreachable!() };
//! pool.set_supply(deposit.minted());
//!
//! // 3. Swap 1_000 units of asset 1 for asset 2
//! let Ok(swap) = pool.exchange(1, 2, U256::from(1_000_000_000u64)) else { unreachable!() };
//! assert!(swap.amount_out() > U256::zero());
//! assert!(swap.fee() > U256::zero());
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐
//! │  PoolConfig  │  validated blueprint
//! └──────┬───────┘
//!        │ FromConfig
//!        ▼
//! ┌──────────────┐
//! │  PoolState   │  balances, rates, fees, supply
//! └──────┬───────┘
//!        │ SwapPool + LiquidityPool
//!        ▼
//! ┌──────────────┐
//! │    Solvers   │  compute_d, solve_y
//! └──────────────┘
//! ```
//!
//! # Share Supply
//!
//! Operations report shares minted or burned but never apply them.  The
//! caller owns the share ledger and reports the new total through
//! [`LiquidityPool::set_supply`](traits::LiquidityPool::set_supply).
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Fee rates and operation outcomes |
//! | [`traits`] | [`SwapPool`](traits::SwapPool), [`LiquidityPool`](traits::LiquidityPool), [`FromConfig`](traits::FromConfig) |
//! | [`config`] | [`PoolConfig`](config::PoolConfig) |
//! | [`pools`] | [`PoolState`](pools::PoolState) and its operations |
//! | [`math`] | Checked wide arithmetic and the invariant/balance solvers |
//! | [`error`] | [`SwapError`](error::SwapError) |
//! | [`prelude`] | Convenience re-exports |
//!
//! # Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `serde` | no | `Serialize`/`Deserialize` for configuration and fee types |

pub mod config;
pub mod domain;
pub mod error;
pub mod math;
pub mod pools;
pub mod prelude;
pub mod traits;
