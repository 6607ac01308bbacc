//! Property-based tests using `proptest` for StableSwap invariants.
//!
//! 1. **Closed form**: balanced pools have `D = n · x` within one unit.
//! 2. **Bounded convergence**: both solvers finish under the iteration
//!    cap for `A ∈ [1, 10_000]` and `n ∈ [2, 8]`.
//! 3. **Swap round trip**: `i → j → i` never returns more than was paid.
//! 4. **Proportional deposit**: pays no imbalance fee.
//! 5. **Withdraw then re-deposit**: restores balances up to the
//!    withdraw fee.
//! 6. **Preview purity**: previews leave the pool untouched and match
//!    the committed result.

use primitive_types::U256;
use proptest::prelude::*;

use crate::config::{InitialBalances, PoolConfig};
use crate::math::{compute_d, mul_div, precision, solve_y};
use crate::pools::PoolState;
use crate::traits::{FromConfig, LiquidityPool, SwapPool};

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

fn make_pool(amp: u64, balances: &[u64], trade_fee: u64, withdraw_fee: u64) -> PoolState {
    let balances = balances.iter().map(|&b| U256::from(b)).collect::<Vec<_>>();
    let cfg = PoolConfig::new(amp, balances.len(), InitialBalances::Balances(balances))
        .with_trade_fee(trade_fee)
        .with_withdraw_fee(withdraw_fee);
    let Ok(pool) = PoolState::from_config(&cfg) else {
        panic!("valid pool config");
    };
    pool
}

/// Funded pool with one share per unit of `D`.
fn make_funded_pool(amp: u64, balances: &[u64], withdraw_fee: u64) -> PoolState {
    let mut pool = make_pool(amp, balances, 4_000_000, withdraw_fee);
    let Ok(d) = pool.invariant() else {
        panic!("invariant of a positive pool");
    };
    pool.set_supply(d);
    pool
}

// ---------------------------------------------------------------------------
// Custom strategies
// ---------------------------------------------------------------------------

/// Amplification across the supported range.
fn amplification_strategy() -> impl Strategy<Value = u64> {
    1u64..=10_000u64
}

/// Native balances of `[2, max_assets]` assets, each in `[1e6, 1e9]`.
fn balances_strategy(max_assets: usize) -> impl Strategy<Value = Vec<u64>> {
    (2usize..=max_assets)
        .prop_flat_map(|n| prop::collection::vec(1_000_000u64..=1_000_000_000u64, n))
}

/// Balances with an asset pair `(i, j)`, `i != j`.
fn balances_and_pair_strategy() -> impl Strategy<Value = (Vec<u64>, usize, usize)> {
    balances_strategy(8).prop_flat_map(|balances| {
        let n = balances.len();
        (Just(balances), 0..n, 1..n).prop_map(|(b, i, offset)| {
            let j = (i + offset) % b.len();
            (b, i, j)
        })
    })
}

// ---------------------------------------------------------------------------
// Properties 1 and 2: solvers
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_balanced_pool_closed_form(
        n in 2usize..=8,
        amp in amplification_strategy(),
        balance in 1u64..=1_000_000_000_000u64,
    ) {
        let x = U256::from(balance) * precision();
        let xp = vec![x; n];
        let Ok(d) = compute_d(&xp, amp) else {
            return Err(TestCaseError::fail("balanced pool must converge"));
        };
        let expected = x * U256::from(n);
        prop_assert!(
            d.abs_diff(expected) <= U256::one(),
            "D = {} but n·x = {}", d, expected
        );
    }

    #[test]
    fn prop_solvers_converge(
        balances in balances_strategy(8),
        amp in amplification_strategy(),
        k_seed in any::<usize>(),
    ) {
        let xp = balances
            .iter()
            .map(|&b| U256::from(b) * precision())
            .collect::<Vec<_>>();
        let d = compute_d(&xp, amp);
        prop_assert!(d.is_ok(), "D failed: {:?}", d);
        let Ok(d) = d else {
            return Ok(());
        };

        let k = k_seed % xp.len();
        let y = solve_y(&xp, amp, k, d);
        prop_assert!(y.is_ok(), "y failed: {:?}", y);
        let Ok(y) = y else {
            return Ok(());
        };
        let tolerance = (xp[k] / U256::exp10(12)).max(U256::from(1_000_000u64));
        prop_assert!(
            y.abs_diff(xp[k]) <= tolerance,
            "y = {} drifted from x = {}", y, xp[k]
        );
    }
}

// ---------------------------------------------------------------------------
// Property 3: swap round trip
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_round_trip_loses_value_with_fee(
        (balances, i, j) in balances_and_pair_strategy(),
        amp in amplification_strategy(),
        divisor in 2u64..=1_000,
    ) {
        let mut pool = make_pool(amp, &balances, 4_000_000, 0);
        let dx = U256::from((balances[i] / divisor).max(1));
        let there = pool.exchange(i, j, dx);
        prop_assume!(there.is_ok(), "first leg rejected: {:?}", there);
        let Ok(there) = there else {
            return Ok(());
        };
        let back = pool.exchange(j, i, there.amount_out());
        prop_assume!(back.is_ok(), "return leg rejected: {:?}", back);
        let Ok(back) = back else {
            return Ok(());
        };
        prop_assert!(
            back.amount_out() <= dx,
            "round trip gained: {} > {}", back.amount_out(), dx
        );
    }

    #[test]
    fn prop_round_trip_fee_free_is_tight(
        (balances, i, j) in balances_and_pair_strategy(),
        amp in amplification_strategy(),
        divisor in 2u64..=1_000,
    ) {
        let mut pool = make_pool(amp, &balances, 0, 0);
        let dx = U256::from((balances[i] / divisor).max(1));
        let there = pool.exchange(i, j, dx);
        prop_assume!(there.is_ok(), "first leg rejected: {:?}", there);
        let Ok(there) = there else {
            return Ok(());
        };
        let back = pool.exchange(j, i, there.amount_out());
        prop_assume!(back.is_ok(), "return leg rejected: {:?}", back);
        let Ok(back) = back else {
            return Ok(());
        };
        let returned = back.amount_out();
        prop_assert!(returned <= dx, "round trip gained: {} > {}", returned, dx);
        let tolerance = dx / U256::from(1_000u64) + U256::from(2u64);
        prop_assert!(
            dx - returned <= tolerance,
            "round trip lost {} of {}", dx - returned, dx
        );
    }
}

// ---------------------------------------------------------------------------
// Properties 4 and 5: liquidity
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_proportional_deposit_is_fee_free(
        balances in balances_strategy(5),
        amp in amplification_strategy(),
        multiple in 1u64..=4,
    ) {
        let pool = make_funded_pool(amp, &balances, 0);
        let deposits = balances
            .iter()
            .map(|&b| U256::from(b) * U256::from(multiple))
            .collect::<Vec<_>>();
        let Ok(outcome) = pool.preview_add_liq(&deposits) else {
            return Err(TestCaseError::fail("proportional deposit must succeed"));
        };
        prop_assert!(outcome.fees().iter().all(U256::is_zero), "fees: {:?}", outcome.fees());

        let d0 = outcome.invariant_before();
        let d1 = outcome.invariant_after();
        let Ok(expected) = mul_div(pool.supply(), d1 - d0, d0, "expected mint") else {
            return Err(TestCaseError::fail("mint formula overflow"));
        };
        prop_assert_eq!(outcome.minted(), expected);
    }

    #[test]
    fn prop_remove_then_add_restores_balances(
        balances in balances_strategy(5),
        amp in amplification_strategy(),
        withdraw_fee in prop_oneof![Just(0u64), Just(3_000_000u64), Just(50_000_000u64)],
        fraction in 2u64..=100,
    ) {
        let mut pool = make_funded_pool(amp, &balances, withdraw_fee);
        let original = pool.balances().to_vec();
        let shares = pool.supply() / U256::from(fraction);

        let Ok(withdrawn) = pool.remove_liq(shares) else {
            return Err(TestCaseError::fail("proportional withdrawal must succeed"));
        };
        let Ok(deposit) = pool.add_liq(withdrawn.amounts()) else {
            return Err(TestCaseError::fail("re-deposit must succeed"));
        };
        prop_assert!(deposit.fees().iter().all(U256::is_zero));

        for (k, (&before, &after)) in original.iter().zip(pool.balances()).enumerate() {
            prop_assert!(after <= before, "asset {} grew: {} > {}", k, after, before);
            prop_assert!(
                before - after <= withdrawn.fees()[k] + U256::one(),
                "asset {} lost {} with fee {}", k, before - after, withdrawn.fees()[k]
            );
        }
    }
}

// ---------------------------------------------------------------------------
// Property 6: preview purity
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_withdraw_one_preview_matches_commit(
        balances in balances_strategy(4),
        amp in amplification_strategy(),
        fraction in 2u64..=50,
        asset_seed in any::<usize>(),
    ) {
        let mut pool = make_funded_pool(amp, &balances, 0);
        let before = pool.clone();
        let i = asset_seed % balances.len();
        let shares = pool.supply() / U256::from(fraction);

        let preview = pool.preview_withdraw_one_coin(shares, i);
        prop_assert_eq!(&pool, &before);

        let committed = pool.calc_withdraw_one_coin(shares, i);
        prop_assert_eq!(&preview, &committed);
        if let Ok(quote) = committed {
            prop_assert_eq!(pool.balances(), quote.balances_after());
        }
    }
}
