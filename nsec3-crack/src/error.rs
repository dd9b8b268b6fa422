use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("no valid records in '{path}'")]
    NoRecords { path: PathBuf },

    #[error("wordlist '{path}' is empty")]
    EmptyWordlist { path: PathBuf },
}
