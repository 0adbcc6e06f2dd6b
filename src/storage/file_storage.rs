use crate::models::Transaction;
use crate::storage::{Storage, StorageError};
use csv::{ReaderBuilder, WriterBuilder};
use std::fs;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

const FIELD_COUNT: usize = 6;

/// Ledger kept in a flat text file, one `user,kind,category,description,amount,date`
/// record per line and no header.
///
/// Fields holding a comma, quote or line break are quoted on write. Everything else is
/// written bare, so files stay readable by tools that expect the unquoted layout.
pub struct FileStorage {
    path: PathBuf
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into()
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Storage for FileStorage {
    fn load(&self) -> Result<Option<Vec<Transaction>>, StorageError> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(error) => {
                warn!("Ledger at path: {} could not be opened, starting empty | {error}", self.path.display());
                return Ok(None);
            }
        };

        //NOTE: Fields are read verbatim, surrounding whitespace is part of the stored text
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(BufReader::new(file));

        let mut transactions = Vec::new();

        //NOTE: A corrupt line is skipped rather than failing the whole load, the rest of the ledger is still usable
        for (index, result) in reader.records().enumerate() {
            let record = match result {
                Ok(record) => record,
                Err(error) => {
                    warn!("Skipping unreadable ledger line {} in {}: {error}", index + 1, self.path.display());
                    continue;
                }
            };

            let line = record.position().map_or(index as u64 + 1, |position| position.line());

            if record.len() != FIELD_COUNT {
                warn!("Skipping malformed ledger line {line} in {}: expected {FIELD_COUNT} fields, found {}", self.path.display(), record.len());
                continue;
            }

            match record.deserialize::<Transaction>(None) {
                Ok(transaction) => transactions.push(transaction),
                Err(error) => {
                    warn!("Skipping malformed ledger line {line} in {}: {error}", self.path.display());
                }
            }
        }

        info!("Loaded {} transactions from {}", transactions.len(), self.path.display());

        Ok(Some(transactions))
    }

    fn save(&self, transactions: &[Transaction]) -> Result<(), StorageError> {
        let file = File::create(&self.path).map_err(|error| StorageError::io(&self.path, error))?;

        let mut writer = WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);

        for transaction in transactions {
            writer.serialize(transaction)?;
        }

        writer.flush().map_err(|error| StorageError::io(&self.path, error))?;

        debug!("Saved {} transactions to {}", transactions.len(), self.path.display());

        Ok(())
    }

    fn read_raw(&self) -> Result<String, StorageError> {
        fs::read_to_string(&self.path).map_err(|error| StorageError::io(&self.path, error))
    }

    fn location(&self) -> String {
        self.path().display().to_string()
    }
}
