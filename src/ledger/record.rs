use std::fmt;

use crate::errors::LedgerError;

/// One income or expense entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Record {
    pub category: String,
    pub description: String,
    pub amount: i64,
}

impl Record {
    pub fn new(category: impl Into<String>, description: impl Into<String>, amount: i64) -> Self {
        Self {
            category: category.into(),
            description: description.into(),
            amount,
        }
    }

    /// Persisted line form: `category, description, amount`.
    pub fn to_line(&self) -> String {
        format!("{}, {}, {}", self.category, self.description, self.amount)
    }

    /// Parses a persisted line, returning `None` for anything that is not
    /// exactly three comma-separated fields with an integer amount.
    pub fn from_line(line: &str) -> Option<Self> {
        let parts: Vec<&str> = line.split(',').map(str::trim).collect();
        let [category, description, amount] = parts.as_slice() else {
            return None;
        };
        let amount = amount.parse().ok()?;
        Some(Self::new(*category, *description, amount))
    }

    /// True when `field` survives a trip through [`Record::to_line`] and
    /// [`Record::from_line`] unchanged.
    pub fn is_storable(field: &str) -> bool {
        field.trim() == field && !field.contains(|c| matches!(c, ',' | '\n' | '\r'))
    }

    pub fn matches(&self, category: &str, description: &str, amount: i64) -> bool {
        self.category == category && self.description == description && self.amount == amount
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.category, self.description, self.amount)
    }
}

/// Parses a user-typed integer amount.
pub fn parse_amount(raw: &str) -> Result<i64, LedgerError> {
    raw.parse()
        .map_err(|_| LedgerError::InvalidAmount(raw.to_string()))
}

/// Parses the opening balance, either the first persisted line or a user answer.
pub fn parse_balance(raw: &str) -> Result<i64, LedgerError> {
    raw.trim()
        .parse()
        .map_err(|_| LedgerError::InvalidOpeningBalance(raw.trim().to_string()))
}
