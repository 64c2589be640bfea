//! software fhe runtime
//!
//! stands in for the host environment's fhe coprocessor. balances live
//! behind opaque 32-byte handles; arithmetic happens on the hidden values
//! inside the runtime. only two pieces of cleartext ever escape:
//!
//! - the success bit of a checked subtraction (control flow), and
//! - acl-gated user decryption through [`FheRuntime::user_decrypt`]
//!
//! every operation derives a fresh handle, so observers cannot link a
//! result to its operands

use crate::{AccountId, HANDLE_DOMAIN};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;

/// opaque ciphertext handle
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Handle(pub [u8; 32]);

impl Handle {
    fn derive(salt: &[u8; 32], counter: u64) -> Self {
        let mut hasher = blake3::Hasher::new();
        hasher.update(HANDLE_DOMAIN);
        hasher.update(salt);
        hasher.update(&counter.to_le_bytes());
        Self(*hasher.finalize().as_bytes())
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(&self.0[..8]))
    }
}

impl fmt::Debug for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Handle({self})")
    }
}

#[derive(Debug, thiserror::Error)]
pub enum FheError {
    #[error("unknown ciphertext handle {0}")]
    UnknownHandle(Handle),

    #[error("ciphertext arithmetic overflow")]
    Overflow,

    #[error("account is not allowed to decrypt this handle")]
    AccessDenied,
}

/// software evaluator for homomorphic u64 arithmetic
///
/// the ciphertext table and acl are private; callers hold handles only.
/// a per-instance random salt keeps handles unlinkable across runtimes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FheRuntime {
    salt: [u8; 32],
    counter: u64,
    values: HashMap<Handle, u64>,
    acl: HashMap<Handle, HashSet<AccountId>>,
}

impl FheRuntime {
    pub fn new() -> Self {
        let mut salt = [0u8; 32];
        rand::thread_rng().fill(&mut salt);
        Self {
            salt,
            counter: 0,
            values: HashMap::new(),
            acl: HashMap::new(),
        }
    }

    fn fresh(&mut self, value: u64) -> Handle {
        self.counter += 1;
        let handle = Handle::derive(&self.salt, self.counter);
        self.values.insert(handle, value);
        handle
    }

    fn value(&self, handle: Handle) -> Result<u64, FheError> {
        self.values
            .get(&handle)
            .copied()
            .ok_or(FheError::UnknownHandle(handle))
    }

    /// encrypt a public cleartext value
    pub fn trivial_encrypt(&mut self, value: u64) -> Handle {
        self.fresh(value)
    }

    /// homomorphic addition
    pub fn add(&mut self, a: Handle, b: Handle) -> Result<Handle, FheError> {
        let sum = self
            .value(a)?
            .checked_add(self.value(b)?)
            .ok_or(FheError::Overflow)?;
        Ok(self.fresh(sum))
    }

    /// checked homomorphic subtraction
    ///
    /// returns the success bit and the result handle; on underflow the
    /// minuend is returned unchanged. the bit is the only cleartext the
    /// runtime reveals about the operands
    pub fn try_sub(&mut self, a: Handle, b: Handle) -> Result<(bool, Handle), FheError> {
        let x = self.value(a)?;
        let d = self.value(b)?;
        match x.checked_sub(d) {
            Some(diff) => Ok((true, self.fresh(diff))),
            None => Ok((false, a)),
        }
    }

    /// permit `account` to decrypt `handle`
    pub fn allow(&mut self, handle: Handle, account: AccountId) {
        self.acl.entry(handle).or_default().insert(account);
    }

    pub fn is_allowed(&self, handle: Handle, account: &AccountId) -> bool {
        self.acl
            .get(&handle)
            .map(|allowed| allowed.contains(account))
            .unwrap_or(false)
    }

    /// decryption-oracle surface consumed by clients
    ///
    /// the pool and ledger logic never call this for their own accounting
    pub fn user_decrypt(&self, handle: Handle, requester: &AccountId) -> Result<u64, FheError> {
        if !self.is_allowed(handle, requester) {
            return Err(FheError::AccessDenied);
        }
        self.value(handle)
    }
}

impl Default for FheRuntime {
    fn default() -> Self {
        Self::new()
    }
}
