//! Token error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TokenError {
    #[error("Insufficient balance: requested {requested}, available {available}")]
    InsufficientBalance { requested: u128, available: u128 },

    #[error("Insufficient allowance: requested {requested}, approved {approved}")]
    InsufficientAllowance { requested: u128, approved: u128 },

    #[error("Arithmetic overflow")]
    Overflow,
}

pub type Result<T> = std::result::Result<T, TokenError>;
