//! Settlement of disbursed value
//!
//! The treasury hands control to external code when it pays a recipient.
//! That interaction sits behind [`Settlement`] so the pool can commit its
//! own bookkeeping first and so tests can stand in a failing or hostile
//! recipient.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use token::{Address, Amount};

/// External value transfer invoked after the pool has committed its
/// balance decrement. Implementations are untrusted and may fail; a failure
/// rolls the whole disbursement back.
pub trait Settlement {
    fn transfer(&mut self, recipient: &str, amount: Amount) -> std::result::Result<(), String>;
}

/// In-memory native-value accounts. The default settlement target: credits
/// each recipient and never fails.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AccountBook {
    accounts: HashMap<Address, Amount>,
}

impl AccountBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn balance_of(&self, holder: &str) -> Amount {
        self.accounts.get(holder).copied().unwrap_or(0)
    }
}

impl Settlement for AccountBook {
    fn transfer(&mut self, recipient: &str, amount: Amount) -> std::result::Result<(), String> {
        let entry = self.accounts.entry(recipient.to_string()).or_insert(0);
        *entry = entry
            .checked_add(amount)
            .ok_or_else(|| "recipient balance overflow".to_string())?;
        Ok(())
    }
}
