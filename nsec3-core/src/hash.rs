//! The iterated salted SHA-1 engine at the heart of NSEC3 (RFC 5155
//! section 5):
//!
//! ```text
//! IH(salt, x, 0) = H(x || salt)
//! IH(salt, x, k) = H(IH(salt, x, k-1) || salt)  for k > 0
//! ```
//!
//! `iterations` counts the *additional* rounds after the initial pass, so
//! zero iterations still performs exactly one SHA-1 computation.
//!
//! Each call owns its digest context; there is no shared state, so calls are
//! freely concurrent across worker threads.

use sha1::{Digest as _, Sha1};

use crate::name::{NameBuf, WireName};

/// SHA-1 output width in bytes.
pub const DIGEST_LEN: usize = 20;

/// A finalized NSEC3 digest.
pub type Digest = [u8; DIGEST_LEN];

/// Hash an absolute name.
pub fn hash_name(name: &WireName, salt: &[u8], iterations: u16) -> Digest {
    hash_parts(&[name.as_bytes()], salt, iterations)
}

/// Hash a relative candidate label under a zone, without materializing the
/// concatenated name. An empty candidate hashes the zone apex itself.
pub fn hash_label(candidate: &NameBuf, zone: &WireName, salt: &[u8], iterations: u16) -> Digest {
    hash_parts(&[candidate.as_bytes(), zone.as_bytes()], salt, iterations)
}

fn hash_parts(name_parts: &[&[u8]], salt: &[u8], iterations: u16) -> Digest {
    let mut sha = Sha1::new();
    for part in name_parts {
        sha.update(part);
    }
    sha.update(salt);
    let mut digest: Digest = sha.finalize_reset().into();
    for _ in 0..iterations {
        sha.update(digest);
        sha.update(salt);
        digest = sha.finalize_reset().into();
    }
    digest
}

#[cfg(test)]
mod tests {
    use hex_literal::hex;

    use super::*;

    fn sha1(input: &[u8]) -> Digest {
        let mut sha = Sha1::new();
        sha.update(input);
        sha.finalize().into()
    }

    #[test]
    fn test_zero_iterations_is_one_pass() {
        let name = WireName::from_text("example.com.").unwrap();
        let salt = b"\xaa\xbb";

        let mut input = name.as_bytes().to_vec();
        input.extend_from_slice(salt);
        assert_eq!(hash_name(&name, salt, 0), sha1(&input));
    }

    #[test]
    fn test_iteration_counts_additional_rounds() {
        let name = WireName::from_text("example.com.").unwrap();
        let salt = b"\x01\x02\x03";

        // k iterations == k+1 total passes, each later pass over digest||salt
        let mut expected = {
            let mut input = name.as_bytes().to_vec();
            input.extend_from_slice(salt);
            sha1(&input)
        };
        for k in 0..=5u16 {
            assert_eq!(hash_name(&name, salt, k), expected, "k={k}");
            let mut input = expected.to_vec();
            input.extend_from_slice(salt);
            expected = sha1(&input);
        }
    }

    #[test]
    fn test_empty_salt() {
        let name = WireName::from_text("example.com.").unwrap();
        assert_eq!(hash_name(&name, b"", 0), sha1(name.as_bytes()));
    }

    #[test]
    fn test_rfc5155_vectors() {
        // RFC 5155 Appendix A/B: zone "example", salt AABBCCDD, 12 iterations
        let salt = hex!("aabbccdd");

        let apex = WireName::from_text("example.").unwrap();
        let h = hash_name(&apex, &salt, 12);
        assert_eq!(
            crate::conversion::encode_base32hex(&h),
            "0p9mhaveqvm6t7vbl5lop2u3t2rp3tom"
        );

        let a = WireName::from_text("a.example.").unwrap();
        let h = hash_name(&a, &salt, 12);
        assert_eq!(
            crate::conversion::encode_base32hex(&h),
            "35mthgpgcu1qg68fab165klnsnk3dpvl"
        );
    }

    #[test]
    fn test_label_plus_zone_matches_full_name() {
        let salt = hex!("4141414141414141");
        let zone = WireName::from_text("example.com.").unwrap();
        let candidate = crate::name::encode_candidate("www").unwrap();
        let full = WireName::from_text("www.example.com.").unwrap();

        assert_eq!(
            hash_label(&candidate, &zone, &salt, 100),
            hash_name(&full, &salt, 100)
        );
    }

    #[test]
    fn test_known_answer_from_capture() {
        // captured challenge: 100 iterations, salt 41414141..., zone example.com.
        let salt = hex!("4141414141414141");
        let zone = WireName::from_text("example.com.").unwrap();
        let www = crate::name::encode_candidate("www").unwrap();

        assert_eq!(
            hash_label(&www, &zone, &salt, 100),
            hex!("8c2d583acbe22616c69bb457e0c2111ced0a6e77")
        );
    }
}
