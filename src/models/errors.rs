use thiserror::Error;

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("Income [{description}] not found for user: {user}")]
    IncomeNotFound {
        user: String,
        description: String
    }
}

impl LedgerError {
    pub fn income_not_found(user: &str, description: &str) -> Self {
        Self::IncomeNotFound {
            user: user.to_string(),
            description: description.to_string()
        }
    }
}
