use tracing::{debug, warn};

use super::{
    record::{parse_amount, parse_balance, Record},
    taxonomy::Taxonomy,
};
use crate::errors::LedgerError;

/// Records in insertion order plus the running balance.
///
/// `balance` is maintained incrementally: every accepted add or delete moves
/// it by the record amount, and a rejected one leaves both fields untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ledger {
    balance: i64,
    records: Vec<Record>,
}

/// Records matched by [`Ledger::find`] and their summed amount.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindReport {
    pub category: String,
    pub records: Vec<Record>,
    pub total: i64,
}

/// Parsed contents of a ledger file, before the opening balance is resolved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    /// `None` when the balance line is missing, blank or not an integer.
    pub balance: Option<i64>,
    pub records: Vec<Record>,
}

impl Ledger {
    pub fn new(opening_balance: i64) -> Self {
        Self {
            balance: opening_balance,
            records: Vec::new(),
        }
    }

    /// Rebuilds a ledger from persisted state. Stored records are trusted and
    /// the stored balance already accounts for them.
    pub fn load(initial_balance: i64, stored_records: impl IntoIterator<Item = Record>) -> Self {
        Self {
            balance: initial_balance,
            records: stored_records.into_iter().collect(),
        }
    }

    pub fn balance(&self) -> i64 {
        self.balance
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn add(
        &mut self,
        category: &str,
        description: &str,
        amount: i64,
        taxonomy: &Taxonomy,
    ) -> Result<&Record, LedgerError> {
        if !taxonomy.is_valid(category) {
            return Err(LedgerError::InvalidCategory(category.to_string()));
        }
        if !Record::is_storable(category) || !Record::is_storable(description) {
            return Err(LedgerError::MalformedRecord(format!(
                "{category:?} {description:?}"
            )));
        }
        let balance = self
            .balance
            .checked_add(amount)
            .ok_or_else(|| LedgerError::BalanceOverflow(format!("{} + {amount}", self.balance)))?;
        self.records.push(Record::new(category, description, amount));
        self.balance = balance;
        debug!(category, description, amount, "record added");
        Ok(&self.records[self.records.len() - 1])
    }

    /// Adds every comma-separated `category description amount` item in
    /// `raw_text`, left to right. Each item succeeds or fails on its own.
    pub fn add_batch(
        &mut self,
        raw_text: &str,
        taxonomy: &Taxonomy,
    ) -> Vec<Result<Record, LedgerError>> {
        raw_text
            .split(',')
            .map(|item| self.add_item(item.trim(), taxonomy))
            .collect()
    }

    fn add_item(&mut self, item: &str, taxonomy: &Taxonomy) -> Result<Record, LedgerError> {
        let tokens: Vec<&str> = item.split_whitespace().collect();
        let [category, description, amount] = tokens.as_slice() else {
            return Err(LedgerError::MalformedRecord(item.to_string()));
        };
        let amount = parse_amount(amount)?;
        self.add(category, description, amount, taxonomy).cloned()
    }

    /// Removes the first record equal to the given fields.
    pub fn delete(
        &mut self,
        category: &str,
        description: &str,
        amount: &str,
    ) -> Result<Record, LedgerError> {
        let raw_amount = amount;
        let amount = parse_amount(raw_amount)?;
        let position = self
            .records
            .iter()
            .position(|record| record.matches(category, description, amount))
            .ok_or_else(|| {
                LedgerError::RecordNotFound(format!("{category} {description} {raw_amount}"))
            })?;
        let balance = self
            .balance
            .checked_sub(amount)
            .ok_or_else(|| LedgerError::BalanceOverflow(format!("{} - {amount}", self.balance)))?;
        let removed = self.records.remove(position);
        self.balance = balance;
        debug!(category, description, amount, "record deleted");
        Ok(removed)
    }

    /// Deletes using a raw `category description amount` line.
    pub fn delete_line(&mut self, raw: &str) -> Result<Record, LedgerError> {
        let tokens: Vec<&str> = raw.split_whitespace().collect();
        match tokens.as_slice() {
            [category, description, amount] => self.delete(category, description, amount),
            _ => Err(LedgerError::MalformedRecord(raw.trim().to_string())),
        }
    }

    /// Records whose category is `target` or nested beneath it.
    pub fn find(&self, target: &str, taxonomy: &Taxonomy) -> Result<FindReport, LedgerError> {
        let categories = taxonomy.descendants_of(target);
        if categories.is_empty() {
            return Err(LedgerError::NoSuchCategory(target.to_string()));
        }
        let records: Vec<Record> = self
            .records
            .iter()
            .filter(|record| categories.contains(&record.category))
            .cloned()
            .collect();
        let total = records
            .iter()
            .try_fold(0i64, |total, record| total.checked_add(record.amount))
            .ok_or_else(|| LedgerError::BalanceOverflow(format!("total of {target}")))?;
        Ok(FindReport {
            category: target.to_string(),
            records,
            total,
        })
    }

    pub fn serialize(&self) -> Vec<String> {
        std::iter::once(self.balance.to_string())
            .chain(self.records.iter().map(Record::to_line))
            .collect()
    }

    /// Inverse of [`Ledger::serialize`]. Malformed record lines are dropped.
    pub fn deserialize<I, S>(lines: I) -> Snapshot
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut lines = lines.into_iter();
        let balance = lines.next().and_then(|first| {
            let first = first.as_ref();
            if first.trim().is_empty() {
                return None;
            }
            parse_balance(first)
                .map_err(|err| warn!(%err, "stored balance unreadable"))
                .ok()
        });

        let mut records = Vec::new();
        for line in lines {
            let line = line.as_ref();
            if line.trim().is_empty() {
                continue;
            }
            match Record::from_line(line) {
                Some(record) => records.push(record),
                None => debug!(line, "dropping malformed ledger line"),
            }
        }

        Snapshot { balance, records }
    }
}

impl From<Snapshot> for Ledger {
    fn from(snapshot: Snapshot) -> Self {
        Ledger::load(snapshot.balance.unwrap_or_default(), snapshot.records)
    }
}
