//! time-boxed operator grants
//!
//! (owner, operator) -> expiry timestamp. a grant authorizes delegated
//! transfers while `now <= until`; expired or absent grants permit
//! nothing. only the owner writes its own grants, through
//! [`crate::ConfidentialLedger::set_operator`]

use crate::{AccountId, Timestamp};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OperatorRegistry {
    grants: HashMap<(AccountId, AccountId), Timestamp>,
}

impl OperatorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// grant or extend an operator for `owner` until `until`
    ///
    /// overwrite semantics; `until` in the past revokes immediately.
    /// no validity check at grant time
    pub fn set(&mut self, owner: AccountId, operator: AccountId, until: Timestamp) {
        self.grants.insert((owner, operator), until);
    }

    /// whether `operator` may move `owner`'s tokens at `now`
    pub fn is_authorized(&self, owner: &AccountId, operator: &AccountId, now: Timestamp) -> bool {
        match self.grants.get(&(*owner, *operator)) {
            Some(&until) => now <= until,
            None => false,
        }
    }

    /// current expiry of a grant, if one was ever set
    pub fn expiry(&self, owner: &AccountId, operator: &AccountId) -> Option<Timestamp> {
        self.grants.get(&(*owner, *operator)).copied()
    }
}
