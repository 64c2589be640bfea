//! cswap confidential ledger
//!
//! per-account encrypted token balances with delegated transfers
//!
//! # architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                   CONFIDENTIAL LEDGER                       │
//! ├────────────────────────────────────────────────────────────┤
//! │                                                             │
//! │  public state                                               │
//! │  ├─ operator grants (owner, spender) -> expiry              │
//! │  └─ token metadata (name, symbol, decimals)                 │
//! │                                                             │
//! │  hidden state (behind opaque handles)                       │
//! │  ├─ account -> balance handle                               │
//! │  ├─ encrypted total supply                                  │
//! │  └─ fhe runtime: homomorphic add / checked sub / acl        │
//! │                                                             │
//! │  clients decrypt their own handles through the acl-gated    │
//! │  oracle surface; the ledger logic never reads cleartext     │
//! │                                                             │
//! └────────────────────────────────────────────────────────────┘
//! ```

pub mod fhe;
pub mod ledger;
pub mod operator;

pub use fhe::{FheError, FheRuntime, Handle};
pub use ledger::{ConfidentialLedger, LedgerError, TokenMetadata};
pub use operator::OperatorRegistry;

use serde::{Deserialize, Serialize};
use std::fmt;

/// domain separator for ciphertext handles
pub const HANDLE_DOMAIN: &[u8] = b"cswap.ledger.handle.v1";
/// domain separator for derived account ids
pub const ACCOUNT_DOMAIN: &[u8] = b"cswap.ledger.account.v1";

/// token decimals used across the system
pub const DECIMALS: u8 = 6;
/// base units per whole token (6 decimals)
pub const ONE: u64 = 1_000_000;

/// seconds since epoch
pub type Timestamp = u64;

/// account identifier (32 bytes)
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AccountId(pub [u8; 32]);

impl AccountId {
    /// derive an account id from a seed (test accounts, pool accounts)
    pub fn derive(seed: &[u8]) -> Self {
        let mut hasher = blake3::Hasher::new();
        hasher.update(ACCOUNT_DOMAIN);
        hasher.update(seed);
        Self(*hasher.finalize().as_bytes())
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(&self.0[..8]))
    }
}

impl fmt::Debug for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AccountId({self})")
    }
}

/// per-call execution context
///
/// explicit stand-in for the host chain's signed origin and block
/// timestamp; nothing in the ledger or pool reads ambient state
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CallContext {
    /// authenticated caller of the operation
    pub caller: AccountId,
    /// current time, seconds since epoch
    pub now: Timestamp,
}

impl CallContext {
    pub fn new(caller: AccountId, now: Timestamp) -> Self {
        Self { caller, now }
    }
}
