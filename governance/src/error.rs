//! Governance error types

use thiserror::Error;
use treasury::TreasuryError;

#[derive(Error, Debug)]
pub enum GovernanceError {
    #[error("Not a token holder")]
    NotATokenHolder,

    #[error("Proposal not found: {0}")]
    ProposalNotFound(u64),

    #[error("Already voted: {voter} on proposal {proposal}")]
    AlreadyVoted { proposal: u64, voter: String },

    #[error("Proposal already finalized: {0}")]
    AlreadyFinalized(u64),

    #[error("Insufficient quorum: {votes} votes, {quorum} required")]
    InsufficientQuorum { votes: u128, quorum: u128 },

    #[error("Insufficient treasury funds: requested {requested}, available {available}")]
    InsufficientTreasuryFunds { requested: u128, available: u128 },

    #[error("Finalization already in progress")]
    ReentrantCall,

    #[error("Arithmetic overflow")]
    Overflow,

    #[error(transparent)]
    Treasury(TreasuryError),
}

/// Treasury failures surface under the governance taxonomy where a named
/// kind exists; anything else passes through unchanged.
impl From<TreasuryError> for GovernanceError {
    fn from(err: TreasuryError) -> Self {
        match err {
            TreasuryError::InsufficientFunds {
                requested,
                available,
            } => GovernanceError::InsufficientTreasuryFunds {
                requested,
                available,
            },
            TreasuryError::ReentrantDisbursement => GovernanceError::ReentrantCall,
            TreasuryError::Overflow => GovernanceError::Overflow,
            other => GovernanceError::Treasury(other),
        }
    }
}

pub type Result<T> = std::result::Result<T, GovernanceError>;
