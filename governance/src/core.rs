//! Governance core orchestration
//!
//! The single aggregate owning all mutable governance state: the treasury
//! pool, the proposal registry and the vote book. Every mutating entry
//! point takes the caller identity explicitly and either completes in full
//! or fails leaving no partial state. Callers wanting multi-threaded access
//! serialize through an outer `Mutex`; the core itself is synchronous.

use parking_lot::RwLock;
use std::sync::Arc;
use token::{Address, Amount, BalanceSource};
use treasury::{AccountBook, Settlement, TreasuryPool};

use crate::error::{GovernanceError, Result};
use crate::proposal::{Proposal, ProposalRegistry};
use crate::voting::{VoteBook, VoteReceipt};

pub struct GovernanceCore<S: BalanceSource> {
    token: Arc<RwLock<S>>,
    token_address: Address,
    quorum: Amount,
    treasury: TreasuryPool,
    settlement: Box<dyn Settlement + Send>,
    registry: ProposalRegistry,
    votes: VoteBook,
    finalizing: bool,
}

impl<S: BalanceSource> GovernanceCore<S> {
    /// Build a core bound to a token ledger and a quorum threshold. Both
    /// are immutable afterwards. A quorum above total supply is valid: no
    /// proposal can ever finalize.
    pub fn new(token: Arc<RwLock<S>>, token_address: &str, quorum: Amount) -> Self {
        Self::with_settlement(token, token_address, quorum, Box::new(AccountBook::new()))
    }

    /// Same as [`GovernanceCore::new`] with a custom disbursement target.
    pub fn with_settlement(
        token: Arc<RwLock<S>>,
        token_address: &str,
        quorum: Amount,
        settlement: Box<dyn Settlement + Send>,
    ) -> Self {
        GovernanceCore {
            token,
            token_address: token_address.to_string(),
            quorum,
            treasury: TreasuryPool::new(),
            settlement,
            registry: ProposalRegistry::new(),
            votes: VoteBook::new(),
            finalizing: false,
        }
    }

    // --- read-only queries ---

    pub fn token(&self) -> &str {
        &self.token_address
    }

    pub fn quorum(&self) -> Amount {
        self.quorum
    }

    pub fn treasury_balance(&self) -> Amount {
        self.treasury.balance()
    }

    pub fn treasury(&self) -> &TreasuryPool {
        &self.treasury
    }

    pub fn proposal(&self, id: u64) -> Result<&Proposal> {
        self.registry.get(id)
    }

    pub fn proposal_count(&self) -> u64 {
        self.registry.count()
    }

    pub fn has_voted(&self, id: u64, voter: &str) -> bool {
        self.votes.has_voted(id, voter)
    }

    pub fn has_quorum(&self, id: u64) -> Result<bool> {
        Ok(self.registry.get(id)?.votes >= self.quorum)
    }

    // --- mutating entry points ---

    /// Accept value into the treasury. Permissionless: any sender, any
    /// amount, before or after any proposal exists.
    pub fn deposit(&mut self, from: &str, amount: Amount) -> Result<()> {
        self.treasury.deposit(from, amount)?;
        Ok(())
    }

    /// Create a proposal to send `amount` of treasury value to `recipient`.
    /// The caller must hold tokens, and the amount must fit in the treasury
    /// as of now (advisory — re-verified at finalize).
    pub fn create_proposal(
        &mut self,
        caller: &str,
        name: &str,
        amount: Amount,
        recipient: &str,
    ) -> Result<u64> {
        if self.token.read().balance_of(caller) == 0 {
            return Err(GovernanceError::NotATokenHolder);
        }
        let available = self.treasury.balance();
        if amount > available {
            return Err(GovernanceError::InsufficientTreasuryFunds {
                requested: amount,
                available,
            });
        }

        let id = self.registry.create(name, amount, recipient);
        tracing::info!(
            "Proposal {} created by {}: '{}' for {} to {}",
            id,
            caller,
            name,
            amount,
            recipient
        );
        Ok(id)
    }

    /// Cast an affirmative vote weighted by the caller's live token
    /// balance. One vote per holder per proposal.
    pub fn vote(&mut self, caller: &str, id: u64) -> Result<VoteReceipt> {
        let proposal = self.registry.get(id)?;
        if proposal.finalized {
            return Err(GovernanceError::AlreadyFinalized(id));
        }
        if self.votes.has_voted(id, caller) {
            return Err(GovernanceError::AlreadyVoted {
                proposal: id,
                voter: caller.to_string(),
            });
        }

        let weight = self.token.read().balance_of(caller);
        if weight == 0 {
            return Err(GovernanceError::NotATokenHolder);
        }

        let new_votes = proposal
            .votes
            .checked_add(weight)
            .ok_or(GovernanceError::Overflow)?;

        self.votes.record(id, caller)?;
        self.registry.get_mut(id)?.votes = new_votes;

        tracing::info!("Vote on proposal {} by {} with weight {}", id, caller, weight);
        Ok(VoteReceipt {
            proposal_id: id,
            voter: caller.to_string(),
            weight,
            timestamp: chrono::Utc::now().timestamp(),
        })
    }

    /// Execute a proposal's disbursement once quorum is met. Permissionless:
    /// any caller may trigger it. The finalized flag commits before the
    /// treasury hands value to external code, and rolls back if the
    /// settlement fails — finalize is all-or-nothing.
    pub fn finalize_proposal(&mut self, caller: &str, id: u64) -> Result<()> {
        if self.finalizing {
            return Err(GovernanceError::ReentrantCall);
        }

        let proposal = self.registry.get(id)?;
        if proposal.finalized {
            return Err(GovernanceError::AlreadyFinalized(id));
        }
        if proposal.votes < self.quorum {
            return Err(GovernanceError::InsufficientQuorum {
                votes: proposal.votes,
                quorum: self.quorum,
            });
        }
        let amount = proposal.amount;
        let recipient = proposal.recipient.clone();
        let available = self.treasury.balance();
        if available < amount {
            return Err(GovernanceError::InsufficientTreasuryFunds {
                requested: amount,
                available,
            });
        }

        // Effects before interaction.
        self.finalizing = true;
        self.registry.get_mut(id)?.finalized = true;

        let disbursed = self
            .treasury
            .disburse(&recipient, amount, self.settlement.as_mut());
        self.finalizing = false;

        if let Err(err) = disbursed {
            self.registry.get_mut(id)?.finalized = false;
            return Err(err.into());
        }

        tracing::info!(
            "Proposal {} finalized by {}: {} disbursed to {}",
            id,
            caller,
            amount,
            recipient
        );
        Ok(())
    }
}
