//! Vote records and the one-vote-per-holder book

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use token::{Address, Amount};

use crate::error::{GovernanceError, Result};

/// Returned on a successful vote. The weight is the voter's token balance
/// at the moment of voting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoteReceipt {
    pub proposal_id: u64,
    pub voter: Address,
    pub weight: Amount,
    pub timestamp: i64,
}

/// Which identities have voted on which proposals. A recorded pair is a
/// back-reference only; the weight already counted never moves with it.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct VoteBook {
    voted: HashMap<u64, HashSet<Address>>,
}

impl VoteBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_voted(&self, proposal: u64, voter: &str) -> bool {
        self.voted
            .get(&proposal)
            .map(|voters| voters.contains(voter))
            .unwrap_or(false)
    }

    /// Record that `voter` voted on `proposal`. At most one record per pair.
    pub fn record(&mut self, proposal: u64, voter: &str) -> Result<()> {
        let inserted = self
            .voted
            .entry(proposal)
            .or_default()
            .insert(voter.to_string());
        if !inserted {
            return Err(GovernanceError::AlreadyVoted {
                proposal,
                voter: voter.to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_once_per_pair() {
        let mut book = VoteBook::new();

        book.record(1, "alice").unwrap();
        assert!(book.has_voted(1, "alice"));

        let result = book.record(1, "alice");
        assert!(matches!(
            result,
            Err(GovernanceError::AlreadyVoted { proposal: 1, .. })
        ));
    }

    #[test]
    fn test_pairs_are_independent() {
        let mut book = VoteBook::new();

        book.record(1, "alice").unwrap();
        book.record(2, "alice").unwrap();
        book.record(1, "bob").unwrap();

        assert!(book.has_voted(2, "alice"));
        assert!(!book.has_voted(2, "bob"));
    }
}
