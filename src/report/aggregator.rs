use chrono::Datelike;
use rust_decimal::Decimal;

use crate::models::{Transaction, TransactionKind};
use crate::types::Amount;

/// Selects which transactions contribute to an aggregate.
#[derive(Debug, Clone, Copy)]
pub enum Filter<'a> {
    All,
    /// Case-insensitive exact user match.
    User(&'a str),
    /// Both month (1-12) and year must match.
    Month { month: u32, year: i32 },
    Year(i32)
}

impl Filter<'_> {
    pub fn matches(&self, transaction: &Transaction) -> bool {
        match *self {
            Filter::All => true,
            Filter::User(user) => transaction.belongs_to(user),
            Filter::Month { month, year } => transaction.date.month() == month && transaction.date.year() == year,
            Filter::Year(year) => transaction.date.year() == year
        }
    }
}

/// Income and expense totals over some subset of the ledger.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct Aggregate {
    pub income: Amount,
    pub expense: Amount
}

impl Aggregate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Income minus expense, negative when spending exceeds earnings.
    pub fn balance(&self) -> Decimal {
        self.income.value() - self.expense.value()
    }

    fn record(&mut self, transaction: &Transaction) {
        match transaction.kind {
            TransactionKind::Income => self.income += transaction.amount,
            TransactionKind::Expense => self.expense += transaction.amount
        }
    }
}

/// Sums every transaction accepted by `filter`. No match yields zero totals.
pub fn aggregate<'a, I>(transactions: I, filter: &Filter<'_>) -> Aggregate
where
    I: IntoIterator<Item = &'a Transaction>,
{
    transactions.into_iter()
        .filter(|t| filter.matches(t))
        .fold(Aggregate::new(), |mut totals, t| {
            totals.record(t);
            totals
        })
}

/// Per-month totals for `year`, index 0 is January.
pub fn monthly_breakdown<'a, I>(transactions: I, year: i32) -> [Aggregate; 12]
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let mut months = [Aggregate::new(); 12];

    for transaction in transactions.into_iter().filter(|t| t.date.year() == year) {
        months[transaction.date.month0() as usize].record(transaction);
    }

    months
}
