use nsec3_core::{NameError, RecordError};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid name: {0}")]
    Name(#[from] NameError),

    #[error("invalid record: {0}")]
    Record(#[from] RecordError),

    #[error("salt is not even-length hex of at most 255 bytes")]
    BadSalt,
}
