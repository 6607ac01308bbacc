//! Outcomes of deposits and withdrawals.
//!
//! Each outcome carries the pool balances it would leave behind, so a
//! preview can be inspected before it is committed.  Share amounts are
//! reported, never applied: the pool's `supply` is owned by the caller.

use core::fmt;

use primitive_types::U256;

/// Outcome of a multi-asset deposit.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DepositOutcome {
    minted: U256,
    fees: Vec<U256>,
    invariant_before: U256,
    invariant_after: U256,
    balances: Vec<U256>,
}

impl DepositOutcome {
    pub(crate) const fn new(
        minted: U256,
        fees: Vec<U256>,
        invariant_before: U256,
        invariant_after: U256,
        balances: Vec<U256>,
    ) -> Self {
        Self {
            minted,
            fees,
            invariant_before,
            invariant_after,
            balances,
        }
    }

    /// Pool shares owed to the depositor.
    #[must_use]
    pub const fn minted(&self) -> U256 {
        self.minted
    }

    /// Imbalance fee retained per asset, in native units.  All zero on a
    /// bootstrap deposit.
    #[must_use]
    pub fn fees(&self) -> &[U256] {
        &self.fees
    }

    /// Invariant before the deposit (zero on bootstrap).
    #[must_use]
    pub const fn invariant_before(&self) -> U256 {
        self.invariant_before
    }

    /// Invariant after the deposit and its fees.
    #[must_use]
    pub const fn invariant_after(&self) -> U256 {
        self.invariant_after
    }

    /// Pool balances after the deposit.
    #[must_use]
    pub fn balances(&self) -> &[U256] {
        &self.balances
    }
}

impl fmt::Display for DepositOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Deposit(minted: {}, D: {} -> {})",
            self.minted, self.invariant_before, self.invariant_after
        )
    }
}

/// Outcome of a proportional withdrawal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WithdrawOutcome {
    shares: U256,
    amounts: Vec<U256>,
    fees: Vec<U256>,
    balances: Vec<U256>,
}

impl WithdrawOutcome {
    pub(crate) const fn new(
        shares: U256,
        amounts: Vec<U256>,
        fees: Vec<U256>,
        balances: Vec<U256>,
    ) -> Self {
        Self {
            shares,
            amounts,
            fees,
            balances,
        }
    }

    /// Pool shares redeemed.
    #[must_use]
    pub const fn shares(&self) -> U256 {
        self.shares
    }

    /// Native amount received per asset, net of the withdraw fee.
    #[must_use]
    pub fn amounts(&self) -> &[U256] {
        &self.amounts
    }

    /// Withdraw fee retained per asset.
    #[must_use]
    pub fn fees(&self) -> &[U256] {
        &self.fees
    }

    /// Pool balances after the withdrawal.
    #[must_use]
    pub fn balances(&self) -> &[U256] {
        &self.balances
    }
}

impl fmt::Display for WithdrawOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Withdraw(shares: {}, amounts: [", self.shares)?;
        for (idx, amount) in self.amounts.iter().enumerate() {
            if idx > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{amount}")?;
        }
        write!(f, "])")
    }
}

/// Outcome of a withdrawal of caller-chosen amounts.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImbalancedWithdrawOutcome {
    burned: U256,
    amounts: Vec<U256>,
    fees: Vec<U256>,
    invariant_before: U256,
    invariant_after: U256,
    balances: Vec<U256>,
}

impl ImbalancedWithdrawOutcome {
    pub(crate) const fn new(
        burned: U256,
        amounts: Vec<U256>,
        fees: Vec<U256>,
        invariant_before: U256,
        invariant_after: U256,
        balances: Vec<U256>,
    ) -> Self {
        Self {
            burned,
            amounts,
            fees,
            invariant_before,
            invariant_after,
            balances,
        }
    }

    /// Pool shares the caller must burn, rounded up by one unit.
    #[must_use]
    pub const fn burned(&self) -> U256 {
        self.burned
    }

    /// Native amounts withdrawn, as requested.
    #[must_use]
    pub fn amounts(&self) -> &[U256] {
        &self.amounts
    }

    /// Imbalance fee plus withdraw fee retained per asset.
    #[must_use]
    pub fn fees(&self) -> &[U256] {
        &self.fees
    }

    /// Invariant before the withdrawal.
    #[must_use]
    pub const fn invariant_before(&self) -> U256 {
        self.invariant_before
    }

    /// Invariant after the withdrawal and its fees.
    #[must_use]
    pub const fn invariant_after(&self) -> U256 {
        self.invariant_after
    }

    /// Pool balances after the withdrawal.
    #[must_use]
    pub fn balances(&self) -> &[U256] {
        &self.balances
    }
}

impl fmt::Display for ImbalancedWithdrawOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ImbalancedWithdraw(burned: {}, D: {} -> {})",
            self.burned, self.invariant_before, self.invariant_after
        )
    }
}

/// Quote for redeeming shares into a single asset.
///
/// Produced by a pure preview; applying it to a pool checks that the
/// pool still holds `balances_before`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WithdrawOneQuote {
    asset: usize,
    shares: U256,
    amount: U256,
    fee: U256,
    balances_before: Vec<U256>,
    balances_after: Vec<U256>,
}

impl WithdrawOneQuote {
    pub(crate) const fn new(
        asset: usize,
        shares: U256,
        amount: U256,
        fee: U256,
        balances_before: Vec<U256>,
        balances_after: Vec<U256>,
    ) -> Self {
        Self {
            asset,
            shares,
            amount,
            fee,
            balances_before,
            balances_after,
        }
    }

    /// Index of the asset paid out.
    #[must_use]
    pub const fn asset(&self) -> usize {
        self.asset
    }

    /// Pool shares redeemed.
    #[must_use]
    pub const fn shares(&self) -> U256 {
        self.shares
    }

    /// Native amount of `asset` received.
    #[must_use]
    pub const fn amount(&self) -> U256 {
        self.amount
    }

    /// Total fee on the redemption (imbalance, rounding and withdraw
    /// fee), in native units of `asset`.
    #[must_use]
    pub const fn fee(&self) -> U256 {
        self.fee
    }

    /// Pool balances the quote was taken against.
    #[must_use]
    pub fn balances_before(&self) -> &[U256] {
        &self.balances_before
    }

    /// Pool balances once the quote is committed.
    #[must_use]
    pub fn balances_after(&self) -> &[U256] {
        &self.balances_after
    }
}

impl fmt::Display for WithdrawOneQuote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "WithdrawOne(shares: {} -> #{} {}, fee: {})",
            self.shares, self.asset, self.amount, self.fee
        )
    }
}
