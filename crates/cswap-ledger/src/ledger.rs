//! confidential token ledger
//!
//! per-account encrypted balances for a single token. all arithmetic is
//! delegated to the fhe runtime; the ledger logic observes only the
//! success bit of checked balance updates, never a cleartext amount.
//!
//! transfer authorization follows the operator model: a spender moves an
//! owner's tokens iff the spender is the owner, or holds a non-expired
//! grant from the owner. minting is restricted to the minter role fixed
//! at construction

use crate::fhe::{FheError, FheRuntime, Handle};
use crate::operator::OperatorRegistry;
use crate::{AccountId, CallContext, Timestamp, DECIMALS};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

/// public descriptive data for one token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenMetadata {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
}

impl TokenMetadata {
    pub fn new(name: &str, symbol: &str) -> Self {
        Self {
            name: name.to_owned(),
            symbol: symbol.to_owned(),
            decimals: DECIMALS,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    /// missing/expired operator grant, or a non-owner acting on an account
    #[error("caller is not authorized to move these tokens")]
    Unauthorized,

    /// transfer exceeds the owner's true encrypted balance
    #[error("encrypted balance is insufficient for the transfer")]
    InsufficientBalance,

    #[error(transparent)]
    Fhe(#[from] FheError),
}

/// encrypted balance store for one token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfidentialLedger {
    meta: TokenMetadata,
    minter: AccountId,
    fhe: FheRuntime,
    balances: HashMap<AccountId, Handle>,
    total_supply: Option<Handle>,
    operators: OperatorRegistry,
}

impl ConfidentialLedger {
    pub fn new(meta: TokenMetadata, minter: AccountId) -> Self {
        Self {
            meta,
            minter,
            fhe: FheRuntime::new(),
            balances: HashMap::new(),
            total_supply: None,
            operators: OperatorRegistry::new(),
        }
    }

    pub fn meta(&self) -> &TokenMetadata {
        &self.meta
    }

    pub fn minter(&self) -> AccountId {
        self.minter
    }

    /// current encrypted balance handle, `None` if no balance registered
    pub fn confidential_balance_of(&self, account: &AccountId) -> Option<Handle> {
        self.balances.get(account).copied()
    }

    /// encrypted total supply handle, `None` before the first mint
    pub fn confidential_total_supply(&self) -> Option<Handle> {
        self.total_supply
    }

    /// increase `to`'s encrypted balance by a public `amount`
    ///
    /// minter-only; zero mints are accepted
    pub fn mint(
        &mut self,
        ctx: &CallContext,
        to: AccountId,
        amount: u64,
    ) -> Result<Handle, LedgerError> {
        if ctx.caller != self.minter {
            return Err(LedgerError::Unauthorized);
        }

        let minted = self.fhe.trivial_encrypt(amount);
        let balance = match self.balances.get(&to) {
            Some(&current) => self.fhe.add(current, minted)?,
            None => minted,
        };
        let supply = match self.total_supply {
            Some(current) => self.fhe.add(current, minted)?,
            None => minted,
        };

        self.balances.insert(to, balance);
        self.total_supply = Some(supply);
        self.fhe.allow(balance, to);
        self.fhe.allow(minted, to);
        self.fhe.allow(supply, self.minter);

        debug!(token = %self.meta.symbol, %to, handle = %balance, "minted confidential balance");
        Ok(minted)
    }

    /// grant or revoke a time-boxed operator for the caller's account
    pub fn set_operator(&mut self, ctx: &CallContext, operator: AccountId, until: Timestamp) {
        debug!(token = %self.meta.symbol, owner = %ctx.caller, %operator, until, "operator set");
        self.operators.set(ctx.caller, operator, until);
    }

    /// whether `operator` may currently move `owner`'s tokens
    pub fn is_operator(&self, owner: &AccountId, operator: &AccountId, now: Timestamp) -> bool {
        self.operators.is_authorized(owner, operator, now)
    }

    /// move a public `amount` from `from` to `to`
    ///
    /// the caller must be `from` or hold a non-expired grant from `from`.
    /// the amount is trivially encrypted before it touches a balance, so
    /// only the two balance handles change. rejects with
    /// [`LedgerError::InsufficientBalance`] when the hidden balance cannot
    /// cover the amount
    pub fn transfer_from(
        &mut self,
        ctx: &CallContext,
        from: AccountId,
        to: AccountId,
        amount: u64,
    ) -> Result<Handle, LedgerError> {
        if ctx.caller != from && !self.operators.is_authorized(&from, &ctx.caller, ctx.now) {
            return Err(LedgerError::Unauthorized);
        }

        let transferred = self.fhe.trivial_encrypt(amount);
        self.settle(from, to, transferred)?;
        Ok(transferred)
    }

    /// move a hidden amount from the caller to `to`
    ///
    /// the caller must be allowed to use the amount ciphertext; presenting
    /// a handle issued to someone else fails with
    /// [`LedgerError::Unauthorized`]
    pub fn confidential_transfer(
        &mut self,
        ctx: &CallContext,
        to: AccountId,
        amount: Handle,
    ) -> Result<Handle, LedgerError> {
        if !self.fhe.is_allowed(amount, &ctx.caller) {
            return Err(LedgerError::Unauthorized);
        }

        self.settle(ctx.caller, to, amount)?;
        Ok(amount)
    }

    /// acl-gated decryption for clients; the ledger never calls this on
    /// behalf of its own accounting
    pub fn user_decrypt(
        &self,
        requester: &AccountId,
        handle: Handle,
    ) -> Result<u64, LedgerError> {
        Ok(self.fhe.user_decrypt(handle, requester)?)
    }

    /// debit `from` and credit `to` by the hidden amount behind `amount`
    ///
    /// side effects are confined to the two balance handles
    fn settle(
        &mut self,
        from: AccountId,
        to: AccountId,
        amount: Handle,
    ) -> Result<(), LedgerError> {
        let from_balance = match self.balances.get(&from) {
            Some(&handle) => handle,
            None => self.fhe.trivial_encrypt(0),
        };

        let (ok, new_from) = self.fhe.try_sub(from_balance, amount)?;
        if !ok {
            return Err(LedgerError::InsufficientBalance);
        }

        let new_to = if to == from {
            // debit and credit collapse onto one account
            self.fhe.add(new_from, amount)?
        } else {
            match self.balances.get(&to) {
                Some(&current) => self.fhe.add(current, amount)?,
                None => amount,
            }
        };

        self.balances.insert(from, new_from);
        self.balances.insert(to, new_to);
        self.fhe.allow(new_from, from);
        self.fhe.allow(new_to, to);
        self.fhe.allow(amount, from);
        self.fhe.allow(amount, to);

        debug!(
            token = %self.meta.symbol,
            %from,
            %to,
            transferred = %amount,
            "confidential transfer settled"
        );
        Ok(())
    }
}
