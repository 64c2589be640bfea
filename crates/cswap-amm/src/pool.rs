//! Two-token liquidity pool with public reserves
//!
//! The pool owns the two confidential ledgers and a single ledger account
//! on each. Reserves and the share ledger are cleartext; every mutation of
//! them happens in the same call as the encrypted transfer it accounts
//! for, and a call either commits every effect or none.
//!
//! Authorization model: callers grant the pool a time-boxed operator on
//! both token ledgers before depositing or swapping; the pool authorizes
//! itself when paying out (owner == spender always passes).

use crate::pricing;
use cswap_ledger::{AccountId, CallContext, ConfidentialLedger, LedgerError};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::info;

/// Domain separator for the pool's own ledger account
pub const POOL_ACCOUNT_DOMAIN: &[u8] = b"cswap.pool.account.v1";

/// Direction of a swap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SwapDirection {
    /// Swap token A for token B
    AForB,
    /// Swap token B for token A
    BForA,
}

#[derive(Debug, thiserror::Error)]
pub enum PoolError {
    #[error("amount is zero or out of domain")]
    InvalidAmount,

    #[error("deposit does not match the current pool ratio")]
    RatioMismatch,

    #[error("output is below the caller's slippage floor")]
    SlippageExceeded,

    #[error("caller holds fewer liquidity shares than requested")]
    InsufficientShares,

    #[error("pool has no liquidity on the requested side")]
    InsufficientLiquidity,

    #[error("reserve or share accounting would overflow")]
    Overflow,

    #[error(transparent)]
    Ledger(#[from] LedgerError),
}

/// Constant-product pool over two confidential ledgers
///
/// Invariants held across every operation:
/// - `reserve_a`/`reserve_b` equal the pool account's true encrypted
///   holdings on the respective ledger
/// - the per-account share map sums to `total_shares`
/// - `total_shares == 0` iff both reserves are 0
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LiquidityPool {
    account: AccountId,
    token_a: ConfidentialLedger,
    token_b: ConfidentialLedger,
    reserve_a: u64,
    reserve_b: u64,
    total_shares: u128,
    shares: HashMap<AccountId, u128>,
}

impl LiquidityPool {
    /// Create an empty pool over the two ledgers
    ///
    /// The pool's ledger account is derived from the token symbols, so a
    /// given pair always maps to the same account
    pub fn new(token_a: ConfidentialLedger, token_b: ConfidentialLedger) -> Self {
        let mut seed = Vec::new();
        seed.extend_from_slice(POOL_ACCOUNT_DOMAIN);
        seed.extend_from_slice(token_a.meta().symbol.as_bytes());
        seed.extend_from_slice(token_b.meta().symbol.as_bytes());

        Self {
            account: AccountId::derive(&seed),
            token_a,
            token_b,
            reserve_a: 0,
            reserve_b: 0,
            total_shares: 0,
            shares: HashMap::new(),
        }
    }

    /// The pool's own ledger account (grant operator rights to this)
    pub fn account(&self) -> AccountId {
        self.account
    }

    pub fn token_a(&self) -> &ConfidentialLedger {
        &self.token_a
    }

    pub fn token_a_mut(&mut self) -> &mut ConfidentialLedger {
        &mut self.token_a
    }

    pub fn token_b(&self) -> &ConfidentialLedger {
        &self.token_b
    }

    pub fn token_b_mut(&mut self) -> &mut ConfidentialLedger {
        &mut self.token_b
    }

    /// Current public reserves (token A, token B)
    pub fn get_reserves(&self) -> (u64, u64) {
        (self.reserve_a, self.reserve_b)
    }

    /// Total liquidity shares outstanding
    pub fn total_liquidity(&self) -> u128 {
        self.total_shares
    }

    /// Liquidity shares held by `account`
    pub fn liquidity_of(&self, account: &AccountId) -> u128 {
        self.shares.get(account).copied().unwrap_or(0)
    }

    /// Deposit both tokens and mint liquidity shares
    ///
    /// The first deposit fixes the pool price and mints `amount_a` shares;
    /// later deposits must match the current ratio within one base unit of
    /// rounding and mint proportionally. Both pulls commit together: if
    /// the second pull is rejected the first is returned to the caller
    pub fn add_liquidity(
        &mut self,
        ctx: &CallContext,
        amount_a: u64,
        amount_b: u64,
    ) -> Result<u128, PoolError> {
        if amount_a == 0 || amount_b == 0 {
            return Err(PoolError::InvalidAmount);
        }

        let minted = if self.total_shares == 0 {
            u128::from(amount_a)
        } else {
            self.check_ratio(amount_a, amount_b)?;
            pricing::mul_div(
                u128::from(amount_a),
                self.total_shares,
                u128::from(self.reserve_a),
            )
            .ok_or(PoolError::Overflow)?
        };
        if minted == 0 {
            return Err(PoolError::InvalidAmount);
        }

        let new_reserve_a = self
            .reserve_a
            .checked_add(amount_a)
            .ok_or(PoolError::Overflow)?;
        let new_reserve_b = self
            .reserve_b
            .checked_add(amount_b)
            .ok_or(PoolError::Overflow)?;
        let new_total = self
            .total_shares
            .checked_add(minted)
            .ok_or(PoolError::Overflow)?;

        let pool_ctx = self.pool_ctx(ctx);
        self.token_a
            .transfer_from(&pool_ctx, ctx.caller, self.account, amount_a)?;
        if let Err(err) = self
            .token_b
            .transfer_from(&pool_ctx, ctx.caller, self.account, amount_b)
        {
            // return the first pull so the call stays all-or-nothing
            self.token_a
                .transfer_from(&pool_ctx, self.account, ctx.caller, amount_a)?;
            return Err(err.into());
        }

        self.reserve_a = new_reserve_a;
        self.reserve_b = new_reserve_b;
        self.total_shares = new_total;
        *self.shares.entry(ctx.caller).or_insert(0) += minted;

        info!(
            provider = %ctx.caller,
            amount_a,
            amount_b,
            minted,
            reserve_a = self.reserve_a,
            reserve_b = self.reserve_b,
            "liquidity added"
        );
        Ok(minted)
    }

    /// Burn shares and withdraw the proportional slice of both reserves
    ///
    /// Floor division; burning every outstanding share drains the
    /// reserves to exactly (0, 0)
    pub fn remove_liquidity(
        &mut self,
        ctx: &CallContext,
        share_amount: u128,
        min_out_a: u64,
        min_out_b: u64,
    ) -> Result<(u64, u64), PoolError> {
        if share_amount == 0 {
            return Err(PoolError::InvalidAmount);
        }
        let held = self.liquidity_of(&ctx.caller);
        if share_amount > held {
            return Err(PoolError::InsufficientShares);
        }

        let out_a = pricing::mul_div(u128::from(self.reserve_a), share_amount, self.total_shares)
            .ok_or(PoolError::Overflow)?;
        let out_b = pricing::mul_div(u128::from(self.reserve_b), share_amount, self.total_shares)
            .ok_or(PoolError::Overflow)?;
        // proportional slices are bounded by the reserves
        let out_a = u64::try_from(out_a).map_err(|_| PoolError::Overflow)?;
        let out_b = u64::try_from(out_b).map_err(|_| PoolError::Overflow)?;

        if out_a < min_out_a || out_b < min_out_b {
            return Err(PoolError::SlippageExceeded);
        }

        // pool-to-caller pushes cannot fail the balance check: the pool
        // account holds exactly the reserves it pays out of
        let pool_ctx = self.pool_ctx(ctx);
        self.token_a
            .transfer_from(&pool_ctx, self.account, ctx.caller, out_a)?;
        self.token_b
            .transfer_from(&pool_ctx, self.account, ctx.caller, out_b)?;

        self.reserve_a -= out_a;
        self.reserve_b -= out_b;
        self.total_shares -= share_amount;
        let remaining = held - share_amount;
        if remaining == 0 {
            self.shares.remove(&ctx.caller);
        } else {
            self.shares.insert(ctx.caller, remaining);
        }

        info!(
            provider = %ctx.caller,
            share_amount,
            out_a,
            out_b,
            reserve_a = self.reserve_a,
            reserve_b = self.reserve_b,
            "liquidity removed"
        );
        Ok((out_a, out_b))
    }

    /// Swap token A into the pool for token B
    pub fn swap_a_for_b(
        &mut self,
        ctx: &CallContext,
        amount_in: u64,
        min_amount_out: u64,
    ) -> Result<u64, PoolError> {
        self.swap(ctx, SwapDirection::AForB, amount_in, min_amount_out)
    }

    /// Swap token B into the pool for token A
    pub fn swap_b_for_a(
        &mut self,
        ctx: &CallContext,
        amount_in: u64,
        min_amount_out: u64,
    ) -> Result<u64, PoolError> {
        self.swap(ctx, SwapDirection::BForA, amount_in, min_amount_out)
    }

    /// Quote a swap of token A for token B against current reserves
    ///
    /// Read-only; the estimate goes stale as soon as reserves move, so
    /// execution takes `min_amount_out` to bound that risk
    pub fn preview_swap_a_for_b(&self, amount_in: u64) -> u64 {
        pricing::swap_output(amount_in, self.reserve_a, self.reserve_b)
    }

    /// Quote a swap of token B for token A against current reserves
    pub fn preview_swap_b_for_a(&self, amount_in: u64) -> u64 {
        pricing::swap_output(amount_in, self.reserve_b, self.reserve_a)
    }

    fn swap(
        &mut self,
        ctx: &CallContext,
        direction: SwapDirection,
        amount_in: u64,
        min_amount_out: u64,
    ) -> Result<u64, PoolError> {
        if amount_in == 0 {
            return Err(PoolError::InvalidAmount);
        }
        let (reserve_in, reserve_out) = match direction {
            SwapDirection::AForB => (self.reserve_a, self.reserve_b),
            SwapDirection::BForA => (self.reserve_b, self.reserve_a),
        };
        if reserve_in == 0 || reserve_out == 0 {
            return Err(PoolError::InsufficientLiquidity);
        }

        let amount_out = pricing::swap_output(amount_in, reserve_in, reserve_out);
        if amount_out < min_amount_out {
            return Err(PoolError::SlippageExceeded);
        }

        let new_reserve_in = reserve_in
            .checked_add(amount_in)
            .ok_or(PoolError::Overflow)?;
        let new_reserve_out = reserve_out
            .checked_sub(amount_out)
            .ok_or(PoolError::Overflow)?;

        // the pull is the only step that can be rejected, and it runs
        // before any state is touched
        let pool_ctx = self.pool_ctx(ctx);
        let ledger_in = match direction {
            SwapDirection::AForB => &mut self.token_a,
            SwapDirection::BForA => &mut self.token_b,
        };
        ledger_in.transfer_from(&pool_ctx, ctx.caller, self.account, amount_in)?;

        let ledger_out = match direction {
            SwapDirection::AForB => &mut self.token_b,
            SwapDirection::BForA => &mut self.token_a,
        };
        ledger_out.transfer_from(&pool_ctx, self.account, ctx.caller, amount_out)?;

        match direction {
            SwapDirection::AForB => {
                self.reserve_a = new_reserve_in;
                self.reserve_b = new_reserve_out;
            }
            SwapDirection::BForA => {
                self.reserve_b = new_reserve_in;
                self.reserve_a = new_reserve_out;
            }
        }

        info!(
            trader = %ctx.caller,
            ?direction,
            amount_in,
            amount_out,
            reserve_a = self.reserve_a,
            reserve_b = self.reserve_b,
            "swap executed"
        );
        Ok(amount_out)
    }

    /// Deposits must track the current price: |b·Ra - a·Rb| < Ra accepts
    /// only the floor/ceil roundings of the ideal b = a·Rb/Ra
    fn check_ratio(&self, amount_a: u64, amount_b: u64) -> Result<(), PoolError> {
        let lhs = u128::from(amount_b) * u128::from(self.reserve_a);
        let rhs = u128::from(amount_a) * u128::from(self.reserve_b);
        if lhs.abs_diff(rhs) >= u128::from(self.reserve_a) {
            return Err(PoolError::RatioMismatch);
        }
        Ok(())
    }

    fn pool_ctx(&self, ctx: &CallContext) -> CallContext {
        CallContext::new(self.account, ctx.now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cswap_ledger::{Timestamp, TokenMetadata, ONE};

    const NOW: Timestamp = 1_700_000_000;
    const EXPIRY: Timestamp = NOW + 86_400;
    const RATE: u64 = 2_000;

    fn deployer() -> AccountId {
        AccountId::derive(b"deployer")
    }

    fn alice() -> AccountId {
        AccountId::derive(b"alice")
    }

    fn bob() -> AccountId {
        AccountId::derive(b"bob")
    }

    /// Pool over cETH/cZAMA with 50 cETH (and 2000x cZAMA) minted to both
    /// alice and bob, who have granted the pool operator rights
    fn seeded_pool() -> LiquidityPool {
        let token_a = ConfidentialLedger::new(TokenMetadata::new("Confidential ETH", "cETH"), deployer());
        let token_b =
            ConfidentialLedger::new(TokenMetadata::new("Confidential Zama", "cZAMA"), deployer());
        let mut pool = LiquidityPool::new(token_a, token_b);
        let pool_account = pool.account();

        let mint = CallContext::new(deployer(), NOW);
        for user in [alice(), bob()] {
            pool.token_a_mut().mint(&mint, user, 50 * ONE).unwrap();
            pool.token_b_mut().mint(&mint, user, 50 * ONE * RATE).unwrap();

            let ctx = CallContext::new(user, NOW);
            pool.token_a_mut().set_operator(&ctx, pool_account, EXPIRY);
            pool.token_b_mut().set_operator(&ctx, pool_account, EXPIRY);
        }
        pool
    }

    fn balance(ledger: &ConfidentialLedger, account: AccountId) -> u64 {
        match ledger.confidential_balance_of(&account) {
            Some(handle) => ledger.user_decrypt(&account, handle).unwrap(),
            None => 0,
        }
    }

    #[test]
    fn first_deposit_sets_reserves_and_price() {
        let mut pool = seeded_pool();
        let ctx = CallContext::new(alice(), NOW);

        let minted = pool.add_liquidity(&ctx, 10 * ONE, 10 * ONE * RATE).unwrap();

        assert!(minted > 0);
        assert_eq!(pool.get_reserves(), (10 * ONE, 10 * ONE * RATE));
        assert_eq!(pool.total_liquidity(), minted);
        assert_eq!(pool.liquidity_of(&alice()), minted);
        assert_eq!(balance(pool.token_a(), alice()), 40 * ONE);
        assert_eq!(balance(pool.token_b(), alice()), 40 * ONE * RATE);
    }

    #[test]
    fn reserves_mirror_pool_ledger_holdings() {
        let mut pool = seeded_pool();
        let ctx = CallContext::new(alice(), NOW);
        pool.add_liquidity(&ctx, 10 * ONE, 10 * ONE * RATE).unwrap();

        let bob_ctx = CallContext::new(bob(), NOW);
        pool.swap_a_for_b(&bob_ctx, ONE, 0).unwrap();

        let pool_account = pool.account();
        let (reserve_a, reserve_b) = pool.get_reserves();
        assert_eq!(balance(pool.token_a(), pool_account), reserve_a);
        assert_eq!(balance(pool.token_b(), pool_account), reserve_b);
    }

    #[test]
    fn zero_amounts_are_rejected() {
        let mut pool = seeded_pool();
        let ctx = CallContext::new(alice(), NOW);

        assert!(matches!(
            pool.add_liquidity(&ctx, 0, ONE),
            Err(PoolError::InvalidAmount)
        ));
        assert!(matches!(
            pool.swap_a_for_b(&ctx, 0, 0),
            Err(PoolError::InvalidAmount)
        ));
        assert!(matches!(
            pool.remove_liquidity(&ctx, 0, 0, 0),
            Err(PoolError::InvalidAmount)
        ));
    }

    #[test]
    fn mismatched_ratio_is_rejected_without_state_change() {
        let mut pool = seeded_pool();
        let alice_ctx = CallContext::new(alice(), NOW);
        pool.add_liquidity(&alice_ctx, 10 * ONE, 10 * ONE * RATE).unwrap();

        let bob_ctx = CallContext::new(bob(), NOW);
        let result = pool.add_liquidity(&bob_ctx, 5 * ONE, 5 * ONE * RATE + ONE);
        assert!(matches!(result, Err(PoolError::RatioMismatch)));

        assert_eq!(pool.get_reserves(), (10 * ONE, 10 * ONE * RATE));
        assert_eq!(balance(pool.token_a(), bob()), 50 * ONE);
        assert_eq!(balance(pool.token_b(), bob()), 50 * ONE * RATE);
    }

    #[test]
    fn proportional_deposit_mints_proportional_shares() {
        let mut pool = seeded_pool();
        let alice_ctx = CallContext::new(alice(), NOW);
        let first = pool.add_liquidity(&alice_ctx, 10 * ONE, 10 * ONE * RATE).unwrap();

        let bob_ctx = CallContext::new(bob(), NOW);
        let second = pool.add_liquidity(&bob_ctx, 5 * ONE, 5 * ONE * RATE).unwrap();

        assert_eq!(second, first / 2);
        assert_eq!(pool.total_liquidity(), first + second);
        assert_eq!(pool.get_reserves(), (15 * ONE, 15 * ONE * RATE));
    }

    #[test]
    fn deposit_without_operator_grant_fails_atomically() {
        let mut pool = seeded_pool();
        let carol = AccountId::derive(b"carol");
        let mint = CallContext::new(deployer(), NOW);
        pool.token_a_mut().mint(&mint, carol, 10 * ONE).unwrap();
        pool.token_b_mut().mint(&mint, carol, 10 * ONE * RATE).unwrap();

        // carol grants the pool rights on token a only: the second pull is
        // rejected and the first is rolled back
        let pool_account = pool.account();
        let ctx = CallContext::new(carol, NOW);
        pool.token_a_mut().set_operator(&ctx, pool_account, EXPIRY);

        assert!(matches!(
            pool.add_liquidity(&ctx, ONE, ONE * RATE),
            Err(PoolError::Ledger(LedgerError::Unauthorized))
        ));
        assert_eq!(pool.get_reserves(), (0, 0));
        assert_eq!(pool.total_liquidity(), 0);
        assert_eq!(balance(pool.token_a(), carol), 10 * ONE);
        assert_eq!(balance(pool.token_b(), carol), 10 * ONE * RATE);
    }

    #[test]
    fn swap_pays_the_reference_amount_and_grows_k() {
        let mut pool = seeded_pool();
        let alice_ctx = CallContext::new(alice(), NOW);
        pool.add_liquidity(&alice_ctx, 20 * ONE, 20 * ONE * RATE).unwrap();

        let (reserve_a, reserve_b) = pool.get_reserves();
        let k = reserve_a as u128 * reserve_b as u128;
        let expected = pricing::swap_output(ONE, reserve_a, reserve_b);

        let bob_ctx = CallContext::new(bob(), NOW);
        let out = pool.swap_a_for_b(&bob_ctx, ONE, 0).unwrap();

        assert_eq!(out, expected);
        assert_eq!(pool.get_reserves(), (reserve_a + ONE, reserve_b - out));
        assert_eq!(balance(pool.token_b(), bob()), 50 * ONE * RATE + out);

        let (new_a, new_b) = pool.get_reserves();
        assert!(new_a as u128 * new_b as u128 > k);
    }

    #[test]
    fn swap_respects_slippage_floor() {
        let mut pool = seeded_pool();
        let alice_ctx = CallContext::new(alice(), NOW);
        pool.add_liquidity(&alice_ctx, 20 * ONE, 20 * ONE * RATE).unwrap();

        let quote = pool.preview_swap_a_for_b(ONE);
        let bob_ctx = CallContext::new(bob(), NOW);

        assert!(matches!(
            pool.swap_a_for_b(&bob_ctx, ONE, quote + 1),
            Err(PoolError::SlippageExceeded)
        ));
        assert_eq!(pool.get_reserves(), (20 * ONE, 20 * ONE * RATE));

        let out = pool.swap_a_for_b(&bob_ctx, ONE, quote).unwrap();
        assert_eq!(out, quote);
    }

    #[test]
    fn swap_against_empty_pool_is_rejected() {
        let mut pool = seeded_pool();
        let ctx = CallContext::new(bob(), NOW);

        assert!(matches!(
            pool.swap_a_for_b(&ctx, ONE, 0),
            Err(PoolError::InsufficientLiquidity)
        ));
    }

    #[test]
    fn swap_directions_are_symmetric() {
        let mut pool = seeded_pool();
        let alice_ctx = CallContext::new(alice(), NOW);
        pool.add_liquidity(&alice_ctx, 20 * ONE, 20 * ONE * RATE).unwrap();

        let quote = pool.preview_swap_b_for_a(ONE * RATE);
        let bob_ctx = CallContext::new(bob(), NOW);
        let out = pool.swap_b_for_a(&bob_ctx, ONE * RATE, quote).unwrap();

        assert_eq!(out, quote);
        let (reserve_a, reserve_b) = pool.get_reserves();
        assert_eq!(reserve_a, 20 * ONE - out);
        assert_eq!(reserve_b, 20 * ONE * RATE + ONE * RATE);
    }

    #[test]
    fn remove_half_returns_half_the_reserves() {
        let mut pool = seeded_pool();
        let ctx = CallContext::new(alice(), NOW);
        pool.add_liquidity(&ctx, 12 * ONE, 12 * ONE * RATE).unwrap();

        let minted = pool.liquidity_of(&alice());
        let (out_a, out_b) = pool.remove_liquidity(&ctx, minted / 2, 1, 1).unwrap();

        assert_eq!(out_a, 6 * ONE);
        assert_eq!(out_b, 6 * ONE * RATE);
        assert_eq!(pool.get_reserves(), (6 * ONE, 6 * ONE * RATE));
        assert_eq!(balance(pool.token_a(), alice()), 44 * ONE);
    }

    #[test]
    fn remove_all_drains_the_pool() {
        let mut pool = seeded_pool();
        let ctx = CallContext::new(alice(), NOW);
        pool.add_liquidity(&ctx, 10 * ONE, 10 * ONE * RATE).unwrap();

        let bob_ctx = CallContext::new(bob(), NOW);
        pool.swap_a_for_b(&bob_ctx, ONE, 0).unwrap();

        let minted = pool.liquidity_of(&alice());
        pool.remove_liquidity(&ctx, minted, 1, 1).unwrap();

        assert_eq!(pool.get_reserves(), (0, 0));
        assert_eq!(pool.total_liquidity(), 0);
        assert_eq!(pool.liquidity_of(&alice()), 0);
    }

    #[test]
    fn remove_respects_slippage_floors() {
        let mut pool = seeded_pool();
        let ctx = CallContext::new(alice(), NOW);
        pool.add_liquidity(&ctx, 10 * ONE, 10 * ONE * RATE).unwrap();
        let minted = pool.liquidity_of(&alice());

        assert!(matches!(
            pool.remove_liquidity(&ctx, minted / 2, 10 * ONE, 1),
            Err(PoolError::SlippageExceeded)
        ));
        assert_eq!(pool.get_reserves(), (10 * ONE, 10 * ONE * RATE));
    }

    #[test]
    fn cannot_burn_more_shares_than_held() {
        let mut pool = seeded_pool();
        let ctx = CallContext::new(alice(), NOW);
        pool.add_liquidity(&ctx, 10 * ONE, 10 * ONE * RATE).unwrap();
        let minted = pool.liquidity_of(&alice());

        assert!(matches!(
            pool.remove_liquidity(&ctx, minted + 1, 1, 1),
            Err(PoolError::InsufficientShares)
        ));

        let bob_ctx = CallContext::new(bob(), NOW);
        assert!(matches!(
            pool.remove_liquidity(&bob_ctx, 1, 1, 1),
            Err(PoolError::InsufficientShares)
        ));
    }

    #[test]
    fn expired_operator_grant_blocks_a_swap() {
        let mut pool = seeded_pool();
        let alice_ctx = CallContext::new(alice(), NOW);
        pool.add_liquidity(&alice_ctx, 10 * ONE, 10 * ONE * RATE).unwrap();

        let late = CallContext::new(bob(), EXPIRY + 1);
        assert!(matches!(
            pool.swap_a_for_b(&late, ONE, 0),
            Err(PoolError::Ledger(LedgerError::Unauthorized))
        ));
        assert_eq!(pool.get_reserves(), (10 * ONE, 10 * ONE * RATE));
    }

    #[test]
    fn read_paths_are_idempotent() {
        let mut pool = seeded_pool();
        let ctx = CallContext::new(alice(), NOW);
        pool.add_liquidity(&ctx, 10 * ONE, 10 * ONE * RATE).unwrap();

        let first = (
            pool.get_reserves(),
            pool.total_liquidity(),
            pool.liquidity_of(&alice()),
            pool.preview_swap_a_for_b(ONE),
        );
        let second = (
            pool.get_reserves(),
            pool.total_liquidity(),
            pool.liquidity_of(&alice()),
            pool.preview_swap_a_for_b(ONE),
        );
        assert_eq!(first, second);
    }
}
