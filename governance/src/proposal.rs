//! Proposal types and registry

use serde::{Deserialize, Serialize};
use token::{Address, Amount};

use crate::error::{GovernanceError, Result};

/// A request to disburse treasury funds.
///
/// Lifecycle: created open, accumulates weighted votes, and flips
/// `finalized` exactly once when the disbursement executes. There is no
/// rejection or expiry — a proposal below quorum stays open forever.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Proposal {
    pub id: u64,
    pub name: String,
    pub amount: Amount,
    pub recipient: Address,
    /// Weighted affirmative tally.
    pub votes: Amount,
    pub finalized: bool,
    pub created_at: i64,
}

/// Append-only proposal collection. Ids are sequential from 1, never
/// reused, never gap-filled.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ProposalRegistry {
    proposals: Vec<Proposal>,
}

impl ProposalRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create(&mut self, name: &str, amount: Amount, recipient: &str) -> u64 {
        let id = self.proposals.len() as u64 + 1;
        self.proposals.push(Proposal {
            id,
            name: name.to_string(),
            amount,
            recipient: recipient.to_string(),
            votes: 0,
            finalized: false,
            created_at: chrono::Utc::now().timestamp(),
        });
        id
    }

    pub fn get(&self, id: u64) -> Result<&Proposal> {
        id.checked_sub(1)
            .and_then(|i| self.proposals.get(i as usize))
            .ok_or(GovernanceError::ProposalNotFound(id))
    }

    pub fn get_mut(&mut self, id: u64) -> Result<&mut Proposal> {
        id.checked_sub(1)
            .and_then(|i| self.proposals.get_mut(i as usize))
            .ok_or(GovernanceError::ProposalNotFound(id))
    }

    pub fn count(&self) -> u64 {
        self.proposals.len() as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_sequential_from_one() {
        let mut registry = ProposalRegistry::new();

        assert_eq!(registry.create("first", 100, "alice"), 1);
        assert_eq!(registry.create("second", 200, "bob"), 2);
        assert_eq!(registry.count(), 2);

        let first = registry.get(1).unwrap();
        assert_eq!(first.name, "first");
        assert_eq!(first.votes, 0);
        assert!(!first.finalized);
    }

    #[test]
    fn test_unknown_id_fails() {
        let mut registry = ProposalRegistry::new();
        registry.create("only", 1, "alice");

        assert!(matches!(
            registry.get(0),
            Err(GovernanceError::ProposalNotFound(0))
        ));
        assert!(matches!(
            registry.get(2),
            Err(GovernanceError::ProposalNotFound(2))
        ));
    }
}
