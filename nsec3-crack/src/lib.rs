//! Tests dictionary candidates against captured NSEC3 hashes.
//!
//! Input is a file of `$NSEC3$<iterations>$<salt>$<hash>$<zone>` records
//! (the form `nsec3-core` parses) and a wordlist of candidate labels. The
//! wordlist is partitioned across worker threads; each worker hashes every
//! candidate once per distinct (zone, salt, iterations) tuple and compares
//! the digest against all targets captured under that tuple. Matches are
//! printed in pot-file form, `record:candidate`.
//!
//! The heavy lifting lives in `nsec3-core`; this crate is scaffolding:
//! record/wordlist loading, bucket grouping, and the thread pool.

pub mod engine;
pub mod error;
pub mod records;

pub use engine::{Match, SaltGroup, Target, group_challenges, worker};
pub use error::Error;
pub use records::{Challenge, load_records};
