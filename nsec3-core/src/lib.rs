//! NSEC3 hashing and record-format primitives.
//!
//! NSEC3 (RFC 5155) is the DNSSEC authenticated-denial mechanism that
//! identifies names by an iterated, salted SHA-1 hash of their canonical
//! wire encoding instead of by plaintext, to resist zone enumeration. This
//! crate implements the pieces both sides of that arrangement share:
//!
//! - [`name`]: canonical wire-format names with the RFC 1035 63-byte label
//!   and 255-byte name limits enforced at construction.
//! - [`hash`]: the iterated salted SHA-1 engine itself.
//! - [`record`]: the textual `$NSEC3$<iterations>$<salt>$<hash>$<zone>`
//!   record format that hash-recovery tools exchange captured challenges in,
//!   parsed into an immutable [`HashDescriptor`].
//! - [`bucket`]: a cheap grouping key letting a bulk engine amortize
//!   per-salt work across many candidates.
//! - [`format`]: the five-function [`CrackFormat`] surface a cracking
//!   engine drives, implemented for this record format by [`Nsec3Format`].
//!
//! The core is pure: no I/O, no logging, no shared state. Every hash call
//! owns its digest context, so evaluation parallelizes across threads with
//! no coordination beyond sharing an immutable descriptor.
//!
//! # Example
//!
//! ```
//! use nsec3_core::{CrackFormat, Nsec3Format};
//!
//! let format = Nsec3Format;
//! let record =
//!     "$NSEC3$100$4141414141414141$8c2d583acbe22616c69bb457e0c2111ced0a6e77$example.com.";
//!
//! let descriptor = format.descriptor(record)?;
//! let digest = format.evaluate(&descriptor, "www")?;
//! assert!(format.matches(&descriptor, &digest));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod bucket;
pub mod conversion;
pub mod error;
pub mod format;
pub mod hash;
pub mod name;
pub mod record;

pub use bucket::{BUCKET_COUNT, salt_bucket};
pub use error::{NameError, RecordError};
pub use format::{CrackFormat, Nsec3Format};
pub use hash::{DIGEST_LEN, Digest, hash_label, hash_name};
pub use name::{MAX_LABEL_LEN, MAX_NAME_LEN, NameBuf, WireName, encode_candidate};
pub use record::{HashDescriptor, MAX_SALT_LEN, Salt};
