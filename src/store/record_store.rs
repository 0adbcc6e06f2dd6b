use crate::models::{LedgerError, Transaction};
use crate::types::Amount;
use std::slice::Iter;
use tracing::debug;

/// In-memory, append-only sequence of transactions.
///
/// Insertion order is preserved and is the order used for display and for saving.
#[derive(Debug, Default)]
pub struct RecordStore {
    transactions: Vec<Transaction>
}

impl RecordStore {
    pub fn new() -> Self {
        Self {
            transactions: Vec::new()
        }
    }

    pub fn add(&mut self, transaction: Transaction) {
        debug!("Recording [{}] for user [{}]", transaction.kind, transaction.user);
        self.transactions.push(transaction);
    }

    pub fn all(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn iter(&self) -> Iter<'_, Transaction> {
        self.transactions.iter()
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    /// Corrects the amount of the first income matching `user` and `description`.
    ///
    /// Both comparisons ignore case. Duplicate user/description pairs are legal,
    /// only the earliest recorded one is changed. Expenses are never touched.
    ///
    /// # Errors
    /// Returns `LedgerError::IncomeNotFound` when no income matches.
    pub fn update_income_amount(&mut self, user: &str, description: &str, amount: Amount) -> Result<&Transaction, LedgerError> {
        let transaction = self.transactions.iter_mut()
            .find(|t| t.is_income() && t.belongs_to(user) && t.is_described_as(description))
            .ok_or_else(|| LedgerError::income_not_found(user, description))?;

        debug!("Income [{}] for user [{}] changed from {} to {}", transaction.description, transaction.user, transaction.amount, amount);
        transaction.amount = amount;

        Ok(&*transaction)
    }

    /// Drops every record and takes ownership of `transactions`. Used by the load path.
    pub fn replace_all(&mut self, transactions: Vec<Transaction>) {
        self.transactions = transactions;
    }
}

impl<'a> IntoIterator for &'a RecordStore {
    type Item = &'a Transaction;
    type IntoIter = Iter<'a, Transaction>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
