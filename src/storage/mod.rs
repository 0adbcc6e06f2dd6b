mod errors;
mod file_storage;

use crate::models::Transaction;

pub use errors::StorageError;
pub use file_storage::FileStorage;

/// Persistence seam between the ledger and whatever medium holds it.
pub trait Storage {
    /// Returns `Ok(None)` when there is nothing to load, so callers can start fresh.
    fn load(&self) -> Result<Option<Vec<Transaction>>, StorageError>;
    /// Replaces the persisted ledger with `transactions`, in order.
    fn save(&self, transactions: &[Transaction]) -> Result<(), StorageError>;
    /// The persisted ledger exactly as stored.
    fn read_raw(&self) -> Result<String, StorageError>;
    /// Human readable location, used in status messages.
    fn location(&self) -> String;
}
