use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{eq_ignore_case, TransactionKind};
use crate::types::Amount;

/// One recorded income or expense.
///
/// The field order matches the column order of the ledger file:
/// `user,kind,category,description,amount,date`.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Who the money belongs to. Stored as typed, matched without case.
    pub user: String,
    pub kind: TransactionKind,
    pub category: String,
    pub description: String,
    pub amount: Amount,
    /// Calendar date, written as `YYYY-MM-DD`.
    pub date: NaiveDate
}

impl Transaction {
    pub fn new(
        user: impl Into<String>,
        description: impl Into<String>,
        amount: Amount,
        category: impl Into<String>,
        kind: TransactionKind,
        date: NaiveDate
    ) -> Self {
        Self {
            user: user.into(),
            kind,
            category: category.into(),
            description: description.into(),
            amount,
            date
        }
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    pub fn belongs_to(&self, user: &str) -> bool {
        eq_ignore_case(&self.user, user)
    }

    pub fn is_described_as(&self, description: &str) -> bool {
        eq_ignore_case(&self.description, description)
    }
}
