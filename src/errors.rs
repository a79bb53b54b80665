use rust_decimal::Decimal;
use thiserror::Error;

use crate::types::DebtId;

#[derive(Error, Debug)]
pub enum PayoffError {
    #[error("invalid strategy: {strategy:?} (expected \"snowball\" or \"avalanche\")")]
    InvalidStrategy {
        strategy: String,
    },

    #[error("negative input: {field} is {value}{}", for_debt(.debt_id))]
    NegativeInput {
        field: &'static str,
        debt_id: Option<DebtId>,
        value: Decimal,
    },

    #[error("unpayable debt: {open_debts} debt(s) still open after {max_periods} periods")]
    UnpayableDebt {
        max_periods: u32,
        open_debts: usize,
    },

    #[error("duplicate debt id: {id}")]
    DuplicateDebtId {
        id: DebtId,
    },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration {
        message: String,
    },

    #[error("failed to persist schedule for debt {debt_id}: {message}")]
    PersistenceFailed {
        debt_id: DebtId,
        message: String,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

fn for_debt(debt_id: &Option<DebtId>) -> String {
    debt_id.map(|id| format!(" for debt {id}")).unwrap_or_default()
}

pub type Result<T> = std::result::Result<T, PayoffError>;
