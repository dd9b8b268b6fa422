//! Salt bucketing for bulk candidate evaluation.
//!
//! A cracking engine batching many candidates benefits from grouping
//! challenges that share a (salt, zone, iterations) tuple, so the
//! salt-dependent portion of the work is set up once per group. The bucket
//! value is that grouping key: a cheap rolling hash over a fixed-size
//! serialization of the descriptor's salt record. It is not a security
//! property; collisions only cost grouping efficiency.

use crate::name::MAX_NAME_LEN;
use crate::record::{HashDescriptor, MAX_SALT_LEN};

/// Number of buckets. Power of two; the fold mask below depends on it.
pub const BUCKET_COUNT: usize = 1024;

const BUCKET_BITS: u32 = BUCKET_COUNT.trailing_zeros();
const BUCKET_MASK: u32 = (BUCKET_COUNT - 1) as u32;

/// iterations (2 bytes LE) + salt length + zone length + zero-padded salt
/// and zone bodies. Fixed width so equal descriptors serialize identically.
const SALT_RECORD_LEN: usize = 4 + MAX_SALT_LEN + MAX_NAME_LEN;

/// Map a descriptor to its bucket in `[0, BUCKET_COUNT)`.
///
/// Deterministic and total: identical (iterations, salt, zone) tuples always
/// land in the same bucket regardless of the target digest.
pub fn salt_bucket(desc: &HashDescriptor) -> u16 {
    let mut record = [0u8; SALT_RECORD_LEN];
    record[0..2].copy_from_slice(&desc.iterations.to_le_bytes());
    record[2] = desc.salt.len() as u8;
    record[3] = desc.zone.len() as u8;
    record[4..4 + desc.salt.len()].copy_from_slice(desc.salt.as_bytes());
    let zone_off = 4 + MAX_SALT_LEN;
    record[zone_off..zone_off + desc.zone.len()].copy_from_slice(desc.zone.as_bytes());

    let mut hash: u32 = 0;
    for &b in record.iter() {
        hash = (hash << 1) + b as u32;
        if hash >> BUCKET_BITS != 0 {
            hash ^= hash >> BUCKET_BITS;
            hash &= BUCKET_MASK;
        }
    }
    // fold once more so the reduction applies even without overflow
    hash ^= hash >> BUCKET_BITS;
    hash &= BUCKET_MASK;

    hash as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor(record: &str) -> HashDescriptor {
        HashDescriptor::parse(record).unwrap()
    }

    #[test]
    fn test_in_range_and_deterministic() {
        let records = [
            "$NSEC3$0$$0000000000000000000000000000000000000000$.",
            "$NSEC3$100$4141414141414141$8c2d583acbe22616c69bb457e0c2111ced0a6e77$example.com.",
            "$NSEC3$100$42424242$8fb38d13720815ed5b5fcefd973e0d7c3906ab02$example.com.",
            "$NSEC3$65535$ff$ffffffffffffffffffffffffffffffffffffffff$a.b.c.d.example.",
        ];
        for record in records {
            let desc = descriptor(record);
            let bucket = salt_bucket(&desc);
            assert!((bucket as usize) < BUCKET_COUNT, "record={record}");
            assert_eq!(bucket, salt_bucket(&desc), "record={record}");
        }
    }

    #[test]
    fn test_target_digest_does_not_matter() {
        // same salt tuple, different captured digests: one bucket
        let a = descriptor(
            "$NSEC3$100$4141414141414141$8c2d583acbe22616c69bb457e0c2111ced0a6e77$example.com.",
        );
        let b = descriptor(
            "$NSEC3$100$4141414141414141$0000000000000000000000000000000000000000$example.com.",
        );
        assert_eq!(salt_bucket(&a), salt_bucket(&b));
    }

    #[test]
    fn test_salt_tuple_changes_bucket() {
        // not guaranteed for arbitrary inputs (collisions are allowed), but
        // these particular tuples are known to differ
        let base = descriptor(
            "$NSEC3$100$4141414141414141$8c2d583acbe22616c69bb457e0c2111ced0a6e77$example.com.",
        );
        let other_salt = descriptor(
            "$NSEC3$100$42424242$8c2d583acbe22616c69bb457e0c2111ced0a6e77$example.com.",
        );
        let other_iter = descriptor(
            "$NSEC3$101$4141414141414141$8c2d583acbe22616c69bb457e0c2111ced0a6e77$example.com.",
        );
        assert_ne!(salt_bucket(&base), salt_bucket(&other_salt));
        assert_ne!(salt_bucket(&base), salt_bucket(&other_iter));
    }
}
