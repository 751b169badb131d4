//! Treasury error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TreasuryError {
    #[error("Insufficient treasury funds: requested {requested}, available {available}")]
    InsufficientFunds { requested: u128, available: u128 },

    #[error("Disbursement already in progress")]
    ReentrantDisbursement,

    #[error("Settlement transfer failed: {0}")]
    TransferFailed(String),

    #[error("Arithmetic overflow")]
    Overflow,
}

pub type Result<T> = std::result::Result<T, TreasuryError>;
