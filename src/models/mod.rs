mod errors;
mod transaction;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::{Display, Formatter};

pub use errors::LedgerError;
pub use transaction::Transaction;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionKind {
    Income,
    Expense
}

impl TransactionKind {
    /// Canonical text used both on screen and in the ledger file.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Income => "INCOME",
            TransactionKind::Expense => "EXPENSE"
        }
    }
}

impl Display for TransactionKind {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.pad(self.as_str())
    }
}

/// Unicode aware case-insensitive equality.
pub(crate) fn eq_ignore_case(left: &str, right: &str) -> bool {
    left.chars().flat_map(char::to_lowercase)
        .eq(right.chars().flat_map(char::to_lowercase))
}
