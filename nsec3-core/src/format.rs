//! The surface a bulk cracking engine consumes.
//!
//! Engines that test dictionaries against captured hashes need exactly five
//! operations per supported record format: a cheap structural check, target
//! and challenge extraction, a salt-grouping key, and per-candidate
//! evaluation. [`CrackFormat`] is that contract as a trait; [`Nsec3Format`]
//! implements it in terms of the rest of this crate. An engine holds the
//! format behind the trait and never touches record internals.

use crate::bucket::salt_bucket;
use crate::error::{NameError, RecordError};
use crate::hash::{Digest, hash_label};
use crate::name::encode_candidate;
use crate::record::HashDescriptor;

pub trait CrackFormat {
    /// The parsed, immutable challenge candidates are evaluated against.
    type Descriptor;

    /// Structural check. A record failing this is unsupported and should be
    /// skipped by the engine, not treated as a crash.
    fn validate(&self, record: &str) -> bool;

    /// Extract the captured digest candidates are compared against.
    fn target_digest(&self, record: &str) -> Result<Digest, RecordError>;

    /// Parse the full challenge descriptor.
    fn descriptor(&self, record: &str) -> Result<Self::Descriptor, RecordError>;

    /// Grouping key in `[0, BUCKET_COUNT)` for per-salt batching.
    fn bucket(&self, descriptor: &Self::Descriptor) -> u16;

    /// Hash one candidate under the descriptor's parameters.
    fn evaluate(
        &self,
        descriptor: &Self::Descriptor,
        candidate: &str,
    ) -> Result<Digest, NameError>;

    /// Byte equality of a computed digest against the descriptor's target.
    fn matches(&self, descriptor: &Self::Descriptor, digest: &Digest) -> bool;
}

/// The `$NSEC3$` record format.
#[derive(Clone, Copy, Debug, Default)]
pub struct Nsec3Format;

impl CrackFormat for Nsec3Format {
    type Descriptor = HashDescriptor;

    fn validate(&self, record: &str) -> bool {
        HashDescriptor::parse(record).is_ok()
    }

    fn target_digest(&self, record: &str) -> Result<Digest, RecordError> {
        Ok(HashDescriptor::parse(record)?.target)
    }

    fn descriptor(&self, record: &str) -> Result<HashDescriptor, RecordError> {
        HashDescriptor::parse(record)
    }

    fn bucket(&self, descriptor: &HashDescriptor) -> u16 {
        salt_bucket(descriptor)
    }

    fn evaluate(
        &self,
        descriptor: &HashDescriptor,
        candidate: &str,
    ) -> Result<Digest, NameError> {
        let label = encode_candidate(candidate)?;
        Ok(hash_label(
            &label,
            &descriptor.zone,
            descriptor.salt.as_bytes(),
            descriptor.iterations,
        ))
    }

    fn matches(&self, descriptor: &HashDescriptor, digest: &Digest) -> bool {
        descriptor.target == *digest
    }
}

#[cfg(test)]
mod tests {
    use hex_literal::hex;

    use super::*;
    use crate::bucket::BUCKET_COUNT;

    // the two self-test challenges every implementation of this format
    // has to get right
    const WWW_RECORD: &str =
        "$NSEC3$100$4141414141414141$8c2d583acbe22616c69bb457e0c2111ced0a6e77$example.com.";
    const MX_RECORD: &str =
        "$NSEC3$100$42424242$8fb38d13720815ed5b5fcefd973e0d7c3906ab02$example.com.";

    #[test]
    fn test_validate() {
        let format = Nsec3Format;
        assert!(format.validate(WWW_RECORD));
        assert!(format.validate(MX_RECORD));
        assert!(!format.validate("$MD5$whatever"));
        assert!(!format.validate("$NSEC3$100$zz$8c$example.com."));
        assert!(!format.validate(""));
    }

    #[test]
    fn test_target_digest() {
        let format = Nsec3Format;
        assert_eq!(
            format.target_digest(WWW_RECORD).unwrap(),
            hex!("8c2d583acbe22616c69bb457e0c2111ced0a6e77")
        );
    }

    #[test]
    fn test_end_to_end_match() {
        let format = Nsec3Format;
        let desc = format.descriptor(WWW_RECORD).unwrap();

        let digest = format.evaluate(&desc, "www").unwrap();
        assert!(format.matches(&desc, &digest));

        let digest = format.evaluate(&desc, "mx").unwrap();
        assert!(!format.matches(&desc, &digest));
    }

    #[test]
    fn test_end_to_end_second_challenge() {
        let format = Nsec3Format;
        let desc = format.descriptor(MX_RECORD).unwrap();

        let digest = format.evaluate(&desc, "mx").unwrap();
        assert!(format.matches(&desc, &digest));

        let digest = format.evaluate(&desc, "www").unwrap();
        assert!(!format.matches(&desc, &digest));
    }

    #[test]
    fn test_candidate_case_is_folded() {
        let format = Nsec3Format;
        let desc = format.descriptor(WWW_RECORD).unwrap();
        let digest = format.evaluate(&desc, "WWW").unwrap();
        assert!(format.matches(&desc, &digest));
    }

    #[test]
    fn test_evaluate_rejects_bad_candidate() {
        let format = Nsec3Format;
        let desc = format.descriptor(WWW_RECORD).unwrap();
        assert!(format.evaluate(&desc, &"a".repeat(64)).is_err());
        assert!(format.evaluate(&desc, "a..b").is_err());
    }

    #[test]
    fn test_bucket_through_trait() {
        let format = Nsec3Format;
        let desc = format.descriptor(WWW_RECORD).unwrap();
        assert!((format.bucket(&desc) as usize) < BUCKET_COUNT);
        assert_eq!(format.bucket(&desc), format.bucket(&desc));
    }
}
