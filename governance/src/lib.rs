//! DAO Governance Module
//!
//! Token-weighted treasury governance: token holders create proposals to
//! disburse treasury funds, vote with their live token balance as weight,
//! and anyone may finalize a proposal once its affirmative weight reaches
//! the quorum fixed at construction.

pub mod core;
pub mod error;
pub mod proposal;
pub mod voting;

pub use crate::core::GovernanceCore;
pub use error::{GovernanceError, Result};
pub use proposal::{Proposal, ProposalRegistry};
pub use voting::{VoteBook, VoteReceipt};
