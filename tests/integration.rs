//! Integration tests exercising the full system from config to pool operation.
//!
//! These tests verify end-to-end flows through the public API: pool
//! construction from configuration, a full liquidity lifecycle with the
//! caller managing share supply, and reference values for the three-asset
//! scenario (one 18-decimal and two 6-decimal assets at `A = 720`).

#![allow(clippy::panic)]

use primitive_types::U256;
use stableswap_model::config::{InitialBalances, PoolConfig};
use stableswap_model::error::SwapError;
use stableswap_model::math::{compute_d, invariant_error, MAX_ITERATIONS};
use stableswap_model::pools::PoolState;
use stableswap_model::traits::{FromConfig, LiquidityPool, SwapPool};

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

fn u(v: u128) -> U256 {
    U256::from(v)
}

fn us(values: &[u128]) -> Vec<U256> {
    values.iter().map(|&v| U256::from(v)).collect()
}

fn three_pool_rates() -> Vec<U256> {
    us(&[1_000_000, 1_000_000_000_000_000_000, 1_000_000_000_000_000_000])
}

fn three_pool(initial: InitialBalances) -> PoolState {
    let cfg = PoolConfig::new(720, 3, initial).with_rates(three_pool_rates());
    let Ok(pool) = PoolState::from_config(&cfg) else {
        panic!("valid three-pool config");
    };
    pool
}

// ---------------------------------------------------------------------------
// Invariant
// ---------------------------------------------------------------------------

#[test]
fn three_pool_invariant_is_stable() {
    let pool = three_pool(InitialBalances::Balances(us(&[
        20_000_000_000_000_000_000_000,
        30_000_000_000,
        40_000_000_000,
    ])));
    let Ok(d) = pool.invariant() else {
        panic!("invariant must converge");
    };
    assert_eq!(d, u(89_994_800_091_505_500_108_142_183_489));
    for _ in 0..5 {
        assert_eq!(pool.invariant(), Ok(d));
    }

    let Ok(xp) = pool.normalized() else {
        panic!("expected Ok");
    };
    let Ok(at_d) = invariant_error(&xp, 720, d) else {
        panic!("expected Ok");
    };
    let Ok(off_by_far) = invariant_error(&xp, 720, d + U256::exp10(12)) else {
        panic!("expected Ok");
    };
    assert!(at_d < off_by_far);
}

#[test]
fn target_invariant_config_spreads_value_evenly() {
    let pool = three_pool(InitialBalances::TargetInvariant(u(30_000)));
    assert_eq!(
        pool.balances(),
        us(&[10_000_000_000_000_000_000_000, 10_000_000_000, 10_000_000_000]).as_slice()
    );
    assert_eq!(pool.invariant(), Ok(u(3) * U256::exp10(28)));
}

#[test]
fn iteration_cap_matches_reference() {
    assert_eq!(MAX_ITERATIONS, 255);
}

#[test]
fn solver_rejects_zero_balance_in_funded_vector() {
    let xp = us(&[1_000_000, 0, 1_000_000]);
    assert_eq!(compute_d(&xp, 720), Err(SwapError::DivisionByZero));
}

// ---------------------------------------------------------------------------
// Lifecycle
// ---------------------------------------------------------------------------

#[test]
fn full_lifecycle_with_caller_managed_supply() {
    let mut pool = three_pool(InitialBalances::Balances(vec![U256::zero(); 3]));
    assert_eq!(pool.virtual_price(), Err(SwapError::PoolUninitialized));

    // 1. Bootstrap: 1M of each asset
    let seed_amounts = us(&[
        1_000_000_000_000_000_000_000_000,
        1_000_000_000_000,
        1_000_000_000_000,
    ]);
    let Ok(seed) = pool.add_liq(&seed_amounts) else {
        panic!("bootstrap deposit");
    };
    assert_eq!(seed.minted(), u(3) * U256::exp10(30));
    pool.set_supply(seed.minted());
    assert_eq!(pool.virtual_price(), Ok(U256::exp10(24)));

    // 2. Small swap near the peg
    let Ok(swap) = pool.exchange(1, 2, u(1_000_000_000)) else {
        panic!("swap near peg");
    };
    assert_eq!(swap.amount_out(), u(999_598_613));
    assert_eq!(swap.fee(), u(399_999));

    // 3. Large swap pushing the pool off balance
    let Ok(swap) = pool.exchange(0, 1, u(500_000_000_000_000_000_000_000)) else {
        panic!("large swap");
    };
    assert_eq!(swap.amount_out(), u(499_340_763_352));
    assert_eq!(swap.fee(), u(199_816_231));
    assert_eq!(
        pool.balances(),
        us(&[1_500_000_000_000_000_000_000_000, 501_659_236_648, 999_000_401_387]).as_slice()
    );

    // 4. Single-sided deposit pays an imbalance fee on every asset
    let Ok(deposit) = pool.add_liq(&us(&[0, 200_000_000_000, 0])) else {
        panic!("single-sided deposit");
    };
    assert_eq!(deposit.minted(), u(200_166_446_689_659_842_676_212_489_268));
    assert_eq!(
        deposit.fees(),
        us(&[15_016_233_731_613_355_070, 24_977_978, 10_000_815]).as_slice()
    );
    pool.set_supply(pool.supply() + deposit.minted());

    // 5. Exact-amount withdrawal
    let amounts = us(&[100_000_000_000_000_000_000_000, 0, 50_000_000_000]);
    let Ok(exit) = pool.remove_liquidity_imbalance(&amounts) else {
        panic!("imbalanced withdrawal");
    };
    assert_eq!(exit.burned(), u(149_951_032_438_433_131_651_860_444_284));
    assert_eq!(
        exit.fees(),
        us(&[4_457_915_789_031_748_989, 4_931_174, 478_969]).as_slice()
    );
    pool.set_supply(pool.supply() - exit.burned());
    assert_eq!(pool.supply(), u(3_050_215_414_251_226_711_024_352_044_984));

    // 6. Redeem a tenth of the supply into asset 2
    let shares = pool.supply() / U256::from(10u8);
    let Ok(quote) = pool.preview_withdraw_one_coin(shares, 2) else {
        panic!("single-asset quote");
    };
    assert_eq!(quote.amount(), u(304_890_637_409));
    assert_eq!(quote.fee(), u(63_003_242));
    assert_eq!(pool.commit_withdraw_one_coin(&quote), Ok(u(304_890_637_409)));
    pool.set_supply(pool.supply() - shares);
    assert_eq!(
        pool.balances(),
        us(&[1_399_959_526_142_591_597_705_617, 701_618_803_056, 644_067_775_996]).as_slice()
    );

    // 7. Proportional exit of half the remaining supply
    let shares = pool.supply() / U256::from(2u8);
    let Ok(exit) = pool.remove_liq(shares) else {
        panic!("proportional withdrawal");
    };
    assert_eq!(
        exit.amounts(),
        us(&[699_979_763_071_295_798_852_808, 350_809_401_528, 322_033_887_998]).as_slice()
    );
    pool.set_supply(pool.supply() - shares);

    // Swap and imbalance fees accrued to the remaining shares
    assert_eq!(pool.virtual_price(), Ok(u(1_000_066_850_662_567_962_439_561)));
}

#[test]
fn failed_operations_leave_pool_untouched() {
    let balances = us(&[1_000_000_000_000_000_000, 1_000_000, 1_000_000]);
    let cfg = PoolConfig::new(720, 3, InitialBalances::Balances(balances))
        .with_rates(three_pool_rates())
        .with_initial_supply(u(3) * U256::exp10(24));
    let Ok(mut pool) = PoolState::from_config(&cfg) else {
        panic!("valid config");
    };
    let before = pool.clone();

    assert!(matches!(
        pool.exchange(0, 1, U256::one()),
        Err(SwapError::RejectedTrade(_))
    ));
    assert_eq!(
        pool.remove_liquidity_imbalance(&us(&[0, 2_000_000, 0])),
        Err(SwapError::InsufficientBalance { asset: 1 })
    );
    assert_eq!(
        pool.remove_liq(u(3) * U256::exp10(24) + U256::one()),
        Err(SwapError::InsufficientSupply)
    );
    assert_eq!(
        pool.calc_withdraw_one_coin(U256::one(), 7),
        Err(SwapError::InvalidAssetIndex {
            index: 7,
            n_assets: 3
        })
    );
    assert_eq!(pool, before);
}

#[test]
fn errors_render_for_callers() {
    let err = SwapError::InsufficientBalance { asset: 1 };
    assert_eq!(err.to_string(), "insufficient balance of asset 1");
    assert_eq!(
        SwapError::RejectedTrade("output is not positive").to_string(),
        "trade rejected: output is not positive"
    );
}

// ---------------------------------------------------------------------------
// Serialization
// ---------------------------------------------------------------------------

#[cfg(feature = "serde")]
#[test]
fn config_round_trips_through_json() {
    let cfg = PoolConfig::new(720, 3, InitialBalances::TargetInvariant(u(30_000)))
        .with_rates(three_pool_rates())
        .with_trade_fee(1_000_000)
        .with_withdraw_fee(5_000_000);
    let Ok(json) = serde_json::to_string(&cfg) else {
        panic!("serializable config");
    };
    let Ok(back) = serde_json::from_str::<PoolConfig>(&json) else {
        panic!("deserializable config");
    };
    assert_eq!(back, cfg);
    assert!(PoolState::from_config(&back).is_ok());
}
