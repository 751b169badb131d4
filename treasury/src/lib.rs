//! DAO Treasury Module
//!
//! Manages the value pool controlled by governance. Any party may deposit;
//! funds leave only through the governance finalize path, which calls
//! [`TreasuryPool::disburse`] with commit-then-interact ordering so an
//! untrusted recipient can never drain the pool by re-entering.

pub mod error;
pub mod pool;
pub mod settlement;

pub use error::{Result, TreasuryError};
pub use pool::{TreasuryPool, TreasuryReport, TreasuryTransaction, TxKind};
pub use settlement::{AccountBook, Settlement};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_pool_is_empty() {
        let pool = TreasuryPool::new();
        assert_eq!(pool.balance(), 0);
        assert_eq!(pool.total_deposited(), 0);
        assert_eq!(pool.total_disbursed(), 0);
    }
}
