//! Exchange, deposit, and withdrawal operations on [`PoolState`].
//!
//! Every operation is computed on a working copy of the balances.  The
//! `preview_*` methods return that copy inside the outcome; the mutating
//! entry points run the preview and write the copy back only on success.
//!
//! # Imbalance Fee
//!
//! Deposits and imbalanced withdrawals move the invariant from `D0` to
//! `D1`.  Each asset is charged on its distance from the balance that a
//! purely proportional operation would have left:
//!
//! ```text
//! ideal_i = D1 · old_i / D0
//! fee_i   = |ideal_i − new_i| · (trade_fee · n / (4 · (n − 1))) / 10^10
//! ```
//!
//! A deposit in the pool's current ratios pays no imbalance fee.

use primitive_types::U256;
use tracing::{debug, warn};

use super::PoolState;
use crate::domain::{
    DepositOutcome, ExchangeResult, Fees, ImbalancedWithdrawOutcome, WithdrawOneQuote,
    WithdrawOutcome,
};
use crate::error::{Result, SwapError};
use crate::math::{compute_d, mul_div, solve_y, CheckedArithmetic};
use crate::traits::{LiquidityPool, SwapPool};

impl PoolState {
    /// Per-asset imbalance fees between `old` balances at invariant `d0`
    /// and `new` balances at invariant `d1`.
    fn imbalance_fees(
        &self,
        old: &[U256],
        new: &[U256],
        d0: U256,
        d1: U256,
    ) -> Result<Vec<U256>> {
        let fees = self.fees();
        old.iter()
            .zip(new)
            .map(|(&before, &after)| {
                let ideal = mul_div(d1, before, d0, "ideal balance")?;
                fees.imbalance_fee(self.n_assets(), ideal.abs_diff(after))
            })
            .collect()
    }
}

impl SwapPool for PoolState {
    fn n_assets(&self) -> usize {
        PoolState::n_assets(self)
    }

    fn fees(&self) -> Fees {
        PoolState::fees(self)
    }

    fn quote(&self, i: usize, j: usize, dx: U256) -> Result<U256> {
        self.check_pair(i, j)?;
        let xp = self.normalized()?;
        let x = xp[i].safe_add(dx, "quote: x")?;
        let y = self.solve_for(i, j, x)?;
        Ok(xp[j].saturating_sub(y))
    }

    fn preview_exchange(&self, i: usize, j: usize, dx: U256) -> Result<ExchangeResult> {
        self.check_pair(i, j)?;
        if dx.is_zero() {
            return Err(SwapError::InvalidQuantity("exchange amount must be positive"));
        }
        let rates = self.rates();
        let xp = self.normalized()?;
        let x = dx
            .safe_mul(rates[i], "exchange: dx·rate")?
            .safe_add(xp[i], "exchange: x")?;
        let y = self.solve_for(i, j, x)?;

        let Some(gross) = xp[j]
            .checked_sub(y)
            .and_then(|dy| dy.checked_sub(U256::one()))
            .filter(|dy| !dy.is_zero())
        else {
            warn!(i, j, %dx, "exchange rejected: no output");
            return Err(SwapError::RejectedTrade("output is not positive"));
        };
        let fee = self.fees().trade_fee(gross)?;
        let amount_out = gross.safe_sub(fee, "exchange: net output")?.safe_div(rates[j])?;
        if amount_out.is_zero() {
            warn!(i, j, %dx, "exchange rejected: output rounds to zero");
            return Err(SwapError::RejectedTrade("output rounds to zero"));
        }
        let fee = fee.safe_div(rates[j])?;

        let mut balances = self.balances().to_vec();
        balances[i] = balances[i].safe_add(dx, "exchange: balance in")?;
        balances[j] = balances[j]
            .checked_sub(amount_out)
            .ok_or(SwapError::InsufficientBalance { asset: j })?;
        Ok(ExchangeResult::new(i, j, dx, amount_out, fee, balances))
    }

    fn exchange(&mut self, i: usize, j: usize, dx: U256) -> Result<ExchangeResult> {
        let result = self.preview_exchange(i, j, dx)?;
        self.replace_balances(result.balances());
        debug!(i, j, %dx, out = %result.amount_out(), fee = %result.fee(), "exchange");
        Ok(result)
    }
}

impl LiquidityPool for PoolState {
    fn supply(&self) -> U256 {
        PoolState::supply(self)
    }

    fn set_supply(&mut self, supply: U256) {
        PoolState::set_supply(self, supply);
    }

    fn preview_add_liq(&self, deposits: &[U256]) -> Result<DepositOutcome> {
        self.check_len(deposits)?;
        let bootstrap = self.supply().is_zero();
        if bootstrap && deposits.iter().any(U256::is_zero) {
            return Err(SwapError::InvalidBootstrap);
        }
        if deposits.iter().all(U256::is_zero) {
            return Err(SwapError::InvalidQuantity("deposit is empty"));
        }

        let old = self.balances();
        let d0 = if bootstrap {
            U256::zero()
        } else {
            self.invariant()?
        };
        let mut new = old
            .iter()
            .zip(deposits)
            .map(|(&balance, &amount)| balance.safe_add(amount, "deposit: balance"))
            .collect::<Result<Vec<_>>>()?;
        let d1 = self.invariant_of(&new)?;

        if bootstrap {
            let fees = vec![U256::zero(); new.len()];
            return Ok(DepositOutcome::new(d1, fees, d0, d1, new));
        }

        let fees = self.imbalance_fees(old, &new, d0, d1)?;
        for (asset, (balance, &fee)) in new.iter_mut().zip(&fees).enumerate() {
            *balance = balance
                .checked_sub(fee)
                .ok_or(SwapError::InsufficientBalance { asset })?;
        }
        let d2 = self.invariant_of(&new)?;
        let growth = d2.safe_sub(d0, "deposit: invariant growth")?;
        let minted = mul_div(self.supply(), growth, d0, "deposit: minted")?;
        Ok(DepositOutcome::new(minted, fees, d0, d2, new))
    }

    fn add_liq(&mut self, deposits: &[U256]) -> Result<DepositOutcome> {
        let outcome = self.preview_add_liq(deposits)?;
        self.replace_balances(outcome.balances());
        debug!(
            minted = %outcome.minted(),
            d0 = %outcome.invariant_before(),
            d2 = %outcome.invariant_after(),
            "add_liq"
        );
        Ok(outcome)
    }

    fn preview_remove_liq(&self, shares: U256) -> Result<WithdrawOutcome> {
        self.require_supply()?;
        if shares.is_zero() {
            return Err(SwapError::InvalidQuantity("share amount must be positive"));
        }
        if shares > self.supply() {
            return Err(SwapError::InsufficientSupply);
        }

        let n = self.n_assets();
        let mut amounts = Vec::with_capacity(n);
        let mut fees = Vec::with_capacity(n);
        let mut balances = Vec::with_capacity(n);
        for &balance in self.balances() {
            let value = mul_div(balance, shares, self.supply(), "withdraw: value")?;
            let fee = self.fees().withdraw_fee(value)?;
            let amount = value.safe_sub(fee, "withdraw: amount")?;
            balances.push(balance.safe_sub(amount, "withdraw: balance")?);
            amounts.push(amount);
            fees.push(fee);
        }
        Ok(WithdrawOutcome::new(shares, amounts, fees, balances))
    }

    fn remove_liq(&mut self, shares: U256) -> Result<WithdrawOutcome> {
        let outcome = self.preview_remove_liq(shares)?;
        self.replace_balances(outcome.balances());
        debug!(shares = %shares, "remove_liq");
        Ok(outcome)
    }

    fn preview_remove_liquidity_imbalance(
        &self,
        amounts: &[U256],
    ) -> Result<ImbalancedWithdrawOutcome> {
        self.require_supply()?;
        self.check_len(amounts)?;
        if amounts.iter().all(U256::is_zero) {
            return Err(SwapError::InvalidQuantity("withdrawal is empty"));
        }

        let old = self.balances();
        let mut new = old
            .iter()
            .zip(amounts)
            .enumerate()
            .map(|(asset, (&balance, &amount))| {
                balance
                    .checked_sub(amount)
                    .ok_or(SwapError::InsufficientBalance { asset })
            })
            .collect::<Result<Vec<_>>>()?;
        let d0 = self.invariant()?;
        let d1 = self.invariant_of(&new)?;

        let mut fees = self.imbalance_fees(old, &new, d0, d1)?;
        let rows = new.iter_mut().zip(&mut fees).zip(amounts).enumerate();
        for (asset, ((balance, fee), &amount)) in rows {
            *fee = fee.safe_add(self.fees().withdraw_fee(amount)?, "withdraw: total fee")?;
            *balance = balance
                .checked_sub(*fee)
                .ok_or(SwapError::InsufficientBalance { asset })?;
        }
        let d2 = self.invariant_of(&new)?;

        let loss = d0.safe_sub(d2, "withdraw: invariant loss")?;
        let burned = mul_div(loss, self.supply(), d0, "withdraw: burned")?
            .safe_add(U256::one(), "withdraw: burned")?;
        if burned > self.supply() {
            return Err(SwapError::InsufficientSupply);
        }
        Ok(ImbalancedWithdrawOutcome::new(
            burned,
            amounts.to_vec(),
            fees,
            d0,
            d2,
            new,
        ))
    }

    fn remove_liquidity_imbalance(
        &mut self,
        amounts: &[U256],
    ) -> Result<ImbalancedWithdrawOutcome> {
        let outcome = self.preview_remove_liquidity_imbalance(amounts)?;
        self.replace_balances(outcome.balances());
        debug!(
            burned = %outcome.burned(),
            d0 = %outcome.invariant_before(),
            d2 = %outcome.invariant_after(),
            "remove_liquidity_imbalance"
        );
        Ok(outcome)
    }

    fn preview_withdraw_one_coin(&self, shares: U256, i: usize) -> Result<WithdrawOneQuote> {
        self.check_index(i)?;
        self.require_supply()?;
        if shares.is_zero() {
            return Err(SwapError::InvalidQuantity("share amount must be positive"));
        }
        if shares > self.supply() {
            return Err(SwapError::InsufficientSupply);
        }

        let amp = self.amplification();
        let fees = self.fees();
        let xp = self.normalized()?;
        let d0 = compute_d(&xp, amp)?;
        let d1 = d0.safe_sub(
            mul_div(shares, d0, self.supply(), "withdraw one: D reduction")?,
            "withdraw one: D1",
        )?;
        let new_y = solve_y(&xp, amp, i, d1)?;
        let dy_fee_free = xp[i].saturating_sub(new_y);

        let mut xp_reduced = xp.clone();
        for (j, reduced) in xp_reduced.iter_mut().enumerate() {
            let scaled = mul_div(xp[j], d1, d0, "withdraw one: scaled balance")?;
            let dx_ideal = if j == i {
                scaled.abs_diff(new_y)
            } else {
                xp[j].safe_sub(scaled, "withdraw one: deviation")?
            };
            let fee = fees.imbalance_fee(self.n_assets(), dx_ideal)?;
            *reduced = reduced
                .checked_sub(fee)
                .ok_or(SwapError::InsufficientBalance { asset: j })?;
        }

        let y = solve_y(&xp_reduced, amp, i, d1)?;
        let Some(dy) = xp_reduced[i]
            .checked_sub(y)
            .and_then(|dy| dy.checked_sub(U256::one()))
            .filter(|dy| !dy.is_zero())
        else {
            warn!(i, %shares, "single-asset withdrawal rejected: no output");
            return Err(SwapError::RejectedTrade("withdrawal output is not positive"));
        };
        let withdraw_fee = fees.withdraw_fee(dy)?;
        let rate = self.rates()[i];
        let amount = dy.safe_sub(withdraw_fee, "withdraw one: amount")?.safe_div(rate)?;
        if amount.is_zero() {
            warn!(i, %shares, "single-asset withdrawal rejected: output rounds to zero");
            return Err(SwapError::RejectedTrade("withdrawal output rounds to zero"));
        }
        let fee = dy_fee_free
            .saturating_sub(dy)
            .safe_add(withdraw_fee, "withdraw one: fee")?
            .safe_div(rate)?;

        let mut balances = xp_reduced
            .iter()
            .zip(self.rates())
            .map(|(&x, &rate)| x.safe_div(rate))
            .collect::<Result<Vec<_>>>()?;
        balances[i] = balances[i]
            .checked_sub(amount)
            .ok_or(SwapError::InsufficientBalance { asset: i })?;

        Ok(WithdrawOneQuote::new(
            i,
            shares,
            amount,
            fee,
            self.balances().to_vec(),
            balances,
        ))
    }

    fn commit_withdraw_one_coin(&mut self, quote: &WithdrawOneQuote) -> Result<U256> {
        if quote.balances_before() != self.balances() {
            warn!(asset = quote.asset(), "stale single-asset withdrawal quote");
            return Err(SwapError::StaleQuote);
        }
        self.replace_balances(quote.balances_after());
        debug!(
            asset = quote.asset(),
            shares = %quote.shares(),
            amount = %quote.amount(),
            "withdraw_one_coin"
        );
        Ok(quote.amount())
    }

    fn calc_withdraw_one_coin(&mut self, shares: U256, i: usize) -> Result<WithdrawOneQuote> {
        let quote = self.preview_withdraw_one_coin(shares, i)?;
        self.commit_withdraw_one_coin(&quote)?;
        Ok(quote)
    }
}
