//! Bucket-grouped dictionary evaluation.
//!
//! Challenges are grouped by their salt bucket and then by exact
//! (zone, salt, iterations) equality, so each candidate is hashed once per
//! parameter tuple and the digest compared against every target captured
//! under it. The candidate's wire encoding is likewise computed once and
//! reused across all groups.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::Sender;

use nsec3_core::{Digest, HashDescriptor, encode_candidate, hash_label, salt_bucket};

use crate::records::Challenge;

/// One captured digest within a salt group.
#[derive(Debug, Clone)]
pub struct Target {
    pub digest: Digest,
    /// the source record, reported verbatim on a match
    pub record: String,
}

/// Challenges sharing one (zone, salt, iterations) tuple.
#[derive(Debug, Clone)]
pub struct SaltGroup {
    /// representative parameters; targets differ only in digest
    pub descriptor: HashDescriptor,
    pub targets: Vec<Target>,
}

fn same_parameters(a: &HashDescriptor, b: &HashDescriptor) -> bool {
    a.iterations == b.iterations && a.salt == b.salt && a.zone == b.zone
}

/// Group challenges for evaluation: bucket first, exact parameter
/// comparison within a bucket.
pub fn group_challenges(challenges: Vec<Challenge>) -> Vec<SaltGroup> {
    let mut buckets: HashMap<u16, Vec<SaltGroup>> = HashMap::new();

    for challenge in challenges {
        let bucket = salt_bucket(&challenge.descriptor);
        let groups = buckets.entry(bucket).or_default();
        let target = Target { digest: challenge.descriptor.target, record: challenge.record };

        match groups.iter_mut().find(|g| same_parameters(&g.descriptor, &challenge.descriptor))
        {
            Some(group) => group.targets.push(target),
            None => groups.push(SaltGroup {
                descriptor: challenge.descriptor,
                targets: vec![target],
            }),
        }
    }

    buckets.into_values().flatten().collect()
}

/// A cracked challenge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    pub record: String,
    pub candidate: String,
}

/// Evaluate a slice of the wordlist against every salt group.
///
/// Candidates that cannot be wire-encoded (oversized labels, stray empty
/// labels) can never hash to anything and are skipped. Matches go out over
/// the channel; `progress` counts candidates processed.
pub fn worker(
    groups: &[SaltGroup],
    candidates: &[String],
    progress: &AtomicU64,
    matches: &Sender<Match>,
) {
    for candidate in candidates {
        if let Ok(label) = encode_candidate(candidate) {
            for group in groups {
                let desc = &group.descriptor;
                let digest =
                    hash_label(&label, &desc.zone, desc.salt.as_bytes(), desc.iterations);
                for target in &group.targets {
                    if target.digest == digest {
                        let _ = matches.send(Match {
                            record: target.record.clone(),
                            candidate: candidate.clone(),
                        });
                    }
                }
            }
        }
        progress.fetch_add(1, Ordering::Relaxed);
    }
}
