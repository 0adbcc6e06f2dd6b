use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("Console error: {0}")]
    Io(#[from] io::Error),
    #[error("Console error: input closed")]
    InputClosed
}
