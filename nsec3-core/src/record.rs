//! The `$NSEC3$` textual record format:
//!
//! ```text
//! $NSEC3$<iterations>$<salt-hex>$<hash-hex>$<zone>
//! ```
//!
//! One record captures one hash "challenge": the parameters a zone hashed
//! its names with, the digest observed on the wire, and the zone the hash is
//! anchored in. Parsing is pure and fail-closed: a record that violates any
//! field rule yields an error identifying the field, never a partially
//! populated descriptor.

use std::fmt;

use crate::conversion::{decode_hex, encode_hex};
use crate::error::RecordError;
use crate::hash::{DIGEST_LEN, Digest};
use crate::name::WireName;

/// The literal tag of field one.
pub const RECORD_TAG: &str = "NSEC3";

/// Maximum salt length in bytes.
pub const MAX_SALT_LEN: usize = 255;

/// An opaque salt, 0-255 bytes, carried verbatim into every hash round.
#[derive(Clone, Copy)]
pub struct Salt {
    bytes: [u8; MAX_SALT_LEN],
    len: usize,
}

impl Salt {
    /// An empty salt.
    pub fn empty() -> Self {
        Self { bytes: [0u8; MAX_SALT_LEN], len: 0 }
    }

    /// Copy `bytes` into a fixed-capacity salt. `None` if longer than 255.
    pub fn new(bytes: &[u8]) -> Option<Self> {
        if bytes.len() > MAX_SALT_LEN {
            return None;
        }
        let mut salt = Self::empty();
        salt.bytes[..bytes.len()].copy_from_slice(bytes);
        salt.len = bytes.len();
        Some(salt)
    }

    /// Decode a hex salt field. `None` on odd length, non-hex characters,
    /// or more than 255 decoded bytes. The empty string is the empty salt.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let mut salt = Self::empty();
        salt.len = decode_hex(hex, &mut salt.bytes)?;
        Some(salt)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl PartialEq for Salt {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Eq for Salt {}

impl fmt::Debug for Salt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Salt({})", encode_hex(self.as_bytes()))
    }
}

/// One parsed challenge: everything needed to test candidate names against
/// a captured NSEC3 hash. Immutable once parsed; any number of candidate
/// evaluations share one descriptor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HashDescriptor {
    pub iterations: u16,
    pub salt: Salt,
    pub target: Digest,
    pub zone: WireName,
}

impl HashDescriptor {
    /// Parse and validate a `$NSEC3$` record.
    pub fn parse(record: &str) -> Result<Self, RecordError> {
        let rest = record
            .strip_prefix('$')
            .and_then(|r| r.strip_prefix(RECORD_TAG))
            .and_then(|r| r.strip_prefix('$'))
            .ok_or(RecordError::BadTag)?;

        let mut fields = rest.splitn(4, '$');
        let iterations_field = fields.next().ok_or(RecordError::MissingField("iterations"))?;
        let salt_field = fields.next().ok_or(RecordError::MissingField("salt"))?;
        let hash_field = fields.next().ok_or(RecordError::MissingField("hash"))?;
        let zone_field = fields.next().ok_or(RecordError::MissingField("zone"))?;

        let iterations: u16 =
            iterations_field.parse().map_err(|_| RecordError::BadIterations)?;

        let salt = Salt::from_hex(salt_field).ok_or(RecordError::BadSalt)?;

        let mut target = [0u8; DIGEST_LEN];
        if decode_hex(hash_field, &mut target) != Some(DIGEST_LEN) {
            return Err(RecordError::BadTargetDigest);
        }

        let zone_field = zone_field.trim();
        if zone_field.is_empty() {
            return Err(RecordError::EmptyZone);
        }
        let zone = WireName::from_text(zone_field)?;

        Ok(Self { iterations, salt, target, zone })
    }
}

impl fmt::Display for HashDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "${RECORD_TAG}${}${}${}${}",
            self.iterations,
            encode_hex(self.salt.as_bytes()),
            encode_hex(&self.target),
            self.zone
        )
    }
}
