//! Typed failures for the public API.

use thiserror::Error;

use crate::money::Cents;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum OutwitError {
    /// A debt record carried a negative (or non-finite) numeric field.
    #[error("invalid debt input: {field} = {value} on debt `{debt_id}`")]
    InvalidDebtInput {
        debt_id: String,
        field: &'static str,
        value: String,
    },

    #[error("extra monthly payment must be non-negative, got {0}")]
    NegativeExtraPayment(Cents),

    #[error("unknown envelope: `{0}`")]
    UnknownEnvelope(String),

    #[error("transfer amount must be positive, got {0}")]
    InvalidAmount(Cents),

    #[error("cannot move funds from envelope `{0}` to itself")]
    SelfTransfer(String),
}

pub type Result<T> = std::result::Result<T, OutwitError>;
