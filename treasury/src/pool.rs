//! Treasury pool management

use serde::{Deserialize, Serialize};
use token::{Address, Amount};

use crate::error::{Result, TreasuryError};
use crate::settlement::Settlement;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum TxKind {
    Deposit,
    Disbursement,
}

/// Audit-trail entry for every movement of treasury value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreasuryTransaction {
    pub kind: TxKind,
    /// Sender for deposits, recipient for disbursements.
    pub counterparty: Address,
    pub amount: Amount,
    pub timestamp: i64,
}

/// Value pool owned by the governance core.
///
/// Invariant: `balance == total_deposited - total_disbursed` at all times.
#[derive(Debug, Serialize, Deserialize)]
pub struct TreasuryPool {
    balance: Amount,
    total_deposited: Amount,
    total_disbursed: Amount,
    #[serde(skip)]
    disbursing: bool,
    transactions: Vec<TreasuryTransaction>,
}

impl TreasuryPool {
    pub fn new() -> Self {
        TreasuryPool {
            balance: 0,
            total_deposited: 0,
            total_disbursed: 0,
            disbursing: false,
            transactions: Vec::new(),
        }
    }

    pub fn balance(&self) -> Amount {
        self.balance
    }

    pub fn total_deposited(&self) -> Amount {
        self.total_deposited
    }

    pub fn total_disbursed(&self) -> Amount {
        self.total_disbursed
    }

    pub fn transactions(&self) -> &[TreasuryTransaction] {
        &self.transactions
    }

    /// Accept value from any sender. Unconditional: no access control, any
    /// amount, any number of times. Fails only on arithmetic overflow.
    pub fn deposit(&mut self, from: &str, amount: Amount) -> Result<()> {
        let new_balance = self
            .balance
            .checked_add(amount)
            .ok_or(TreasuryError::Overflow)?;
        let new_total = self
            .total_deposited
            .checked_add(amount)
            .ok_or(TreasuryError::Overflow)?;

        self.balance = new_balance;
        self.total_deposited = new_total;
        self.record(TxKind::Deposit, from, amount);

        tracing::info!("Treasury deposit: {} from {}", amount, from);
        Ok(())
    }

    /// Release funds to a recipient. Only the governance finalize path calls
    /// this. The balance decrement is committed before the settlement
    /// transfer runs, and rolled back if the transfer fails.
    pub fn disburse(
        &mut self,
        recipient: &str,
        amount: Amount,
        settlement: &mut dyn Settlement,
    ) -> Result<()> {
        if self.disbursing {
            return Err(TreasuryError::ReentrantDisbursement);
        }
        if amount > self.balance {
            tracing::warn!(
                "Disbursement rejected: requested {}, available {}",
                amount,
                self.balance
            );
            return Err(TreasuryError::InsufficientFunds {
                requested: amount,
                available: self.balance,
            });
        }

        // Commit effects before handing control to external code.
        self.disbursing = true;
        self.balance -= amount;
        self.total_disbursed += amount;

        let transferred = settlement.transfer(recipient, amount);
        self.disbursing = false;

        if let Err(reason) = transferred {
            // All-or-nothing: undo the decrement.
            self.balance += amount;
            self.total_disbursed -= amount;
            return Err(TreasuryError::TransferFailed(reason));
        }

        self.record(TxKind::Disbursement, recipient, amount);
        tracing::info!("Treasury disbursed {} to {}", amount, recipient);
        Ok(())
    }

    pub fn report(&self) -> TreasuryReport {
        TreasuryReport {
            balance: self.balance,
            total_deposited: self.total_deposited,
            total_disbursed: self.total_disbursed,
            transaction_count: self.transactions.len(),
        }
    }

    fn record(&mut self, kind: TxKind, counterparty: &str, amount: Amount) {
        self.transactions.push(TreasuryTransaction {
            kind,
            counterparty: counterparty.to_string(),
            amount,
            timestamp: chrono::Utc::now().timestamp(),
        });
    }
}

impl Default for TreasuryPool {
    fn default() -> Self {
        Self::new()
    }
}

/// Summary of treasury activity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreasuryReport {
    pub balance: Amount,
    pub total_deposited: Amount,
    pub total_disbursed: Amount,
    pub transaction_count: usize,
}

impl TreasuryReport {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
