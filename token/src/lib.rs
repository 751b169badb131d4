//! Governance token ledger
//!
//! A fungible token with a fixed supply, minted in full to the deployer at
//! construction. Balances determine voting weight in the governance module,
//! which reads them through the [`BalanceSource`] trait.

pub mod error;
pub mod ledger;

pub use error::{Result, TokenError};
pub use ledger::{BalanceSource, TokenLedger};

/// Holder identity (address-like, opaque).
pub type Address = String;

/// Token / native value amount in base units.
pub type Amount = u128;

/// One whole token in base units (18 decimal places).
pub const TOKEN_UNIT: Amount = 1_000_000_000_000_000_000;

/// Convert a whole-token count into base units.
pub fn tokens(n: u64) -> Amount {
    n as Amount * TOKEN_UNIT
}
