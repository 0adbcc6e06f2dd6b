use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::Transaction;
use crate::report::Aggregate;

const CURRENCY: &str = "₹";
const BAR_GLYPH: &str = "█ ";
/// Marks a bar cut short at `MAX_BAR_GLYPHS`.
const BAR_OVERFLOW: &str = "…";
/// Currency units represented by one bar glyph.
const BAR_UNIT: i64 = 10_000;
/// Upper bound on glyphs drawn for a single bar.
pub const MAX_BAR_GLYPHS: usize = 100;
const MONTHS_PER_YEAR: usize = 12;

/// Number of glyphs for `amount`: `floor(amount / 10000)`, never below zero.
///
/// Quotients beyond `usize::MAX` saturate.
pub fn bar_units(amount: Decimal) -> usize {
    let units = (amount / Decimal::from(BAR_UNIT)).floor();

    if units.is_sign_negative() {
        return 0;
    }

    units.to_usize().unwrap_or(usize::MAX)
}

pub fn bar(amount: Decimal) -> String {
    let units = bar_units(amount);

    if units > MAX_BAR_GLYPHS {
        return format!("{}{BAR_OVERFLOW}", BAR_GLYPH.repeat(MAX_BAR_GLYPHS));
    }

    BAR_GLYPH.repeat(units)
}

/// Column aligned listing in insertion order.
pub fn render_table(transactions: &[Transaction]) -> String {
    if transactions.is_empty() {
        return "No transactions to show.\n".to_string();
    }

    let mut output = format!("{:<10} | {:<10} | {:<10} | {:<15} | {:<11} | {}\n", "Type", "User", "Category", "Description", "Amount", "Date");
    output.push_str(&"-".repeat(80));
    output.push('\n');

    for t in transactions {
        output.push_str(&format!("{:<10} | {:<10} | {:<10} | {:<15} | {CURRENCY}{:<10} | {}\n", t.kind, t.user, t.category, t.description, t.amount, t.date));
    }

    output
}

pub fn render_summary(title: &str, totals: &Aggregate) -> String {
    let balance = totals.balance().round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);

    format!(
        "==== {title} ====\nIncome  : {CURRENCY}{}\nExpense : {CURRENCY}{}\nBalance : {CURRENCY}{balance:.2}\n",
        totals.income,
        totals.expense
    )
}

pub fn render_month_graph(month: u32, year: i32, totals: &Aggregate) -> String {
    format!(
        "==== Graph for {month:02}/{year} ====\nIncome  ({CURRENCY}{}): {}\nExpense ({CURRENCY}{}): {}\n",
        totals.income,
        bar(totals.income.value()),
        totals.expense,
        bar(totals.expense.value())
    )
}

pub fn render_year_graph(year: i32, months: &[Aggregate; MONTHS_PER_YEAR]) -> String {
    let mut output = format!("==== Yearly Transaction Graph ({year}) ====\n");

    for (index, totals) in months.iter().enumerate() {
        output.push_str(&format!("{:02} | Income:  {CURRENCY}{:<10} {}\n", index + 1, totals.income, bar(totals.income.value())));
        output.push_str(&format!("   | Expense: {CURRENCY}{:<10} {}\n", totals.expense, bar(totals.expense.value())));
    }

    output
}
