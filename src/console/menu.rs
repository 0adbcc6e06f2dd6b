use crate::models::TransactionKind;

pub const MENU: &str = "\
==== Personal Budget Tracker ====
1. Add Income
2. Add Expense
3. View All Transactions
4. Show Summary
5. Save Transactions
6. Update Income for a User
7. Show Summary for a User
8. Show Monthly Summary
9. Show Yearly Summary
10. Show Monthly Graph
11. Show Yearly Graph
12. View Raw File Content
13. Exit
";

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Action {
    Add(TransactionKind),
    ListAll,
    Summary,
    Save,
    UpdateIncome,
    UserSummary,
    MonthlySummary,
    YearlySummary,
    MonthlyGraph,
    YearlyGraph,
    ViewRaw,
    Exit
}

impl Action {
    pub fn from_choice(choice: i64) -> Option<Self> {
        let action = match choice {
            1 => Action::Add(TransactionKind::Income),
            2 => Action::Add(TransactionKind::Expense),
            3 => Action::ListAll,
            4 => Action::Summary,
            5 => Action::Save,
            6 => Action::UpdateIncome,
            7 => Action::UserSummary,
            8 => Action::MonthlySummary,
            9 => Action::YearlySummary,
            10 => Action::MonthlyGraph,
            11 => Action::YearlyGraph,
            12 => Action::ViewRaw,
            13 => Action::Exit,
            _ => return None
        };

        Some(action)
    }
}
