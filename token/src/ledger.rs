//! Token balance ledger

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::{Result, TokenError};
use crate::{Address, Amount, TOKEN_UNIT};

/// Read-only view of voting weight. The governance core consumes balances
/// through this trait and never mutates the ledger.
pub trait BalanceSource {
    fn balance_of(&self, holder: &str) -> Amount;
}

/// Fungible token with a fixed total supply.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenLedger {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    total_supply: Amount,
    balances: HashMap<Address, Amount>,
    allowances: HashMap<(Address, Address), Amount>,
}

impl TokenLedger {
    /// Create the token and mint the whole supply to the deployer.
    /// `supply_tokens` is denominated in whole tokens, not base units.
    pub fn new(name: &str, symbol: &str, supply_tokens: u64, deployer: &str) -> Self {
        let total_supply = supply_tokens as Amount * TOKEN_UNIT;
        let mut balances = HashMap::new();
        balances.insert(deployer.to_string(), total_supply);

        TokenLedger {
            name: name.to_string(),
            symbol: symbol.to_string(),
            decimals: 18,
            total_supply,
            balances,
            allowances: HashMap::new(),
        }
    }

    pub fn total_supply(&self) -> Amount {
        self.total_supply
    }

    pub fn balance_of(&self, holder: &str) -> Amount {
        self.balances.get(holder).copied().unwrap_or(0)
    }

    pub fn allowance(&self, owner: &str, spender: &str) -> Amount {
        self.allowances
            .get(&(owner.to_string(), spender.to_string()))
            .copied()
            .unwrap_or(0)
    }

    pub fn transfer(&mut self, from: &str, to: &str, amount: Amount) -> Result<()> {
        self.move_balance(from, to, amount)
    }

    pub fn approve(&mut self, owner: &str, spender: &str, amount: Amount) {
        self.allowances
            .insert((owner.to_string(), spender.to_string()), amount);
    }

    /// Spend `spender`'s allowance from `from` and move the balance to `to`.
    pub fn transfer_from(
        &mut self,
        spender: &str,
        from: &str,
        to: &str,
        amount: Amount,
    ) -> Result<()> {
        let approved = self.allowance(from, spender);
        if amount > approved {
            return Err(TokenError::InsufficientAllowance {
                requested: amount,
                approved,
            });
        }

        self.move_balance(from, to, amount)?;
        self.allowances
            .insert((from.to_string(), spender.to_string()), approved - amount);
        Ok(())
    }

    fn move_balance(&mut self, from: &str, to: &str, amount: Amount) -> Result<()> {
        let from_balance = self.balance_of(from);
        if amount > from_balance {
            return Err(TokenError::InsufficientBalance {
                requested: amount,
                available: from_balance,
            });
        }

        let to_balance = self.balance_of(to);
        let new_to = to_balance.checked_add(amount).ok_or(TokenError::Overflow)?;

        self.balances.insert(from.to_string(), from_balance - amount);
        self.balances.insert(to.to_string(), new_to);
        Ok(())
    }
}

impl BalanceSource for TokenLedger {
    fn balance_of(&self, holder: &str) -> Amount {
        TokenLedger::balance_of(self, holder)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens;

    #[test]
    fn test_supply_minted_to_deployer() {
        let ledger = TokenLedger::new("Henry token", "HENRY", 1_000_000, "deployer");

        assert_eq!(ledger.total_supply(), tokens(1_000_000));
        assert_eq!(ledger.balance_of("deployer"), tokens(1_000_000));
        assert_eq!(ledger.decimals, 18);
    }

    #[test]
    fn test_unknown_holder_has_zero_balance() {
        let ledger = TokenLedger::new("Henry token", "HENRY", 1_000_000, "deployer");
        assert_eq!(ledger.balance_of("stranger"), 0);
    }

    #[test]
    fn test_transfer_moves_balance() {
        let mut ledger = TokenLedger::new("Henry token", "HENRY", 1_000_000, "deployer");

        ledger.transfer("deployer", "alice", tokens(200_000)).unwrap();

        assert_eq!(ledger.balance_of("deployer"), tokens(800_000));
        assert_eq!(ledger.balance_of("alice"), tokens(200_000));
    }

    #[test]
    fn test_transfer_insufficient_balance() {
        let mut ledger = TokenLedger::new("Henry token", "HENRY", 100, "deployer");

        let result = ledger.transfer("deployer", "alice", tokens(101));
        assert!(matches!(
            result,
            Err(TokenError::InsufficientBalance { .. })
        ));

        // Nothing moved.
        assert_eq!(ledger.balance_of("deployer"), tokens(100));
        assert_eq!(ledger.balance_of("alice"), 0);
    }

    #[test]
    fn test_balances_sum_to_total_supply() {
        let mut ledger = TokenLedger::new("Henry token", "HENRY", 1_000_000, "deployer");

        ledger.transfer("deployer", "alice", tokens(250_000)).unwrap();
        ledger.transfer("alice", "bob", tokens(50_000)).unwrap();
        ledger.transfer("deployer", "carol", tokens(1)).unwrap();

        let sum = ["deployer", "alice", "bob", "carol"]
            .iter()
            .map(|h| ledger.balance_of(h))
            .sum::<Amount>();
        assert_eq!(sum, ledger.total_supply());
    }

    #[test]
    fn test_transfer_from_spends_allowance() {
        let mut ledger = TokenLedger::new("Henry token", "HENRY", 1_000, "deployer");

        ledger.approve("deployer", "exchange", tokens(300));
        ledger
            .transfer_from("exchange", "deployer", "alice", tokens(200))
            .unwrap();

        assert_eq!(ledger.balance_of("alice"), tokens(200));
        assert_eq!(ledger.allowance("deployer", "exchange"), tokens(100));

        let result = ledger.transfer_from("exchange", "deployer", "alice", tokens(200));
        assert!(matches!(
            result,
            Err(TokenError::InsufficientAllowance { .. })
        ));
    }
}
