use thiserror::Error;

/// Error type that captures common ledger failures.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("Category not in the category list: {0}")]
    InvalidCategory(String),
    #[error("Malformed record: {0}")]
    MalformedRecord(String),
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Record not found: {0}")]
    RecordNotFound(String),
    #[error("No such category: {0}")]
    NoSuchCategory(String),
    #[error("Balance would leave the integer range: {0}")]
    BalanceOverflow(String),
    #[error("Invalid opening balance: {0}")]
    InvalidOpeningBalance(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for LedgerError {
    fn from(err: serde_json::Error) -> Self {
        LedgerError::Config(err.to_string())
    }
}
