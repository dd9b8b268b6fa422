use crate::name::{MAX_LABEL_LEN, MAX_NAME_LEN};

/// A name that cannot be represented in canonical DNS wire format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum NameError {
    #[error("label of {0} bytes exceeds the {MAX_LABEL_LEN}-byte limit")]
    LabelTooLong(usize),

    #[error("encoded name exceeds the {MAX_NAME_LEN}-byte limit")]
    NameTooLong,

    #[error("empty label (consecutive dots are only valid as a trailing root)")]
    EmptyLabel,

    #[error("malformed wire-format name")]
    InvalidWire,
}

/// A textual `$NSEC3$` record that fails structural or field-level
/// validation. Each variant identifies the offending field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    #[error("record does not start with the $NSEC3$ tag")]
    BadTag,

    #[error("record is missing the {0} field")]
    MissingField(&'static str),

    #[error("iterations field is not a decimal number in 0..=65535")]
    BadIterations,

    #[error("salt field is not even-length hex of at most 255 bytes")]
    BadSalt,

    #[error("hash field is not exactly 40 hex characters")]
    BadTargetDigest,

    #[error("zone field is empty")]
    EmptyZone,

    #[error("zone field: {0}")]
    BadZone(#[from] NameError),
}
