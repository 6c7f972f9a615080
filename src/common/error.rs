use crate::common::money::Money;
use crate::domain::account::AccountId;

/// Rejections raised by the ledger itself.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("account {0} not found")]
    AccountNotFound(AccountId),
    #[error("insufficient balance in account {id}: balance {balance}, requested {requested}")]
    InsufficientFunds {
        id: AccountId,
        balance: Money,
        requested: Money,
    },
    #[error("amount {amount} would take account {id} out of range (balance {balance})")]
    AmountOverflow {
        id: AccountId,
        balance: Money,
        amount: Money,
    },
    #[error("no account numbers left")]
    IdsExhausted,
}

/// User text that could not be turned into a ledger argument.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("invalid amount: {0:?}")]
    InvalidAmount(String),
    #[error("invalid account number: {0:?}")]
    InvalidAccountId(String),
    #[error("account holder name must not be empty")]
    EmptyHolderName,
    #[error("unknown menu option: {0:?}")]
    UnknownChoice(String),
    #[error("input is not valid UTF-8")]
    NotUtf8,
}

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("terminal i/o failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to open script {}: {source}", path.display())]
    OpenScript {
        path: std::path::PathBuf,
        source: std::io::Error,
    },
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("script line {line}: {reason}")]
    Script { line: u64, reason: String },
}
