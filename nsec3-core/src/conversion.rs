//! Hex and base32hex helpers shared by the record parser and the tools.
//!
//! Hex input is accepted in either case; output is always lowercase, matching
//! the convention of the tools that emit `$NSEC3$` records. The base32hex
//! encoding (RFC 4648 extended-hex alphabet, unpadded) is the form NSEC3
//! owner names take inside a zone.

/// Lowercase hex alphabet used for record output.
pub const HEX_CHARS: &[u8; 16] = b"0123456789abcdef";

/// RFC 4648 extended-hex alphabet, lowercase.
pub const BASE32HEX_CHARS: &[u8; 32] = b"0123456789abcdefghijklmnopqrstuv";

/// Convert hex ASCII character to nibble value (0-15).
#[inline]
pub fn hex_to_nibble(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'A'..=b'F' => Some(c - b'A' + 10),
        b'a'..=b'f' => Some(c - b'a' + 10),
        _ => None,
    }
}

/// Decode an even-length hex string into `out`, returning the number of
/// bytes written. `None` if the input has odd length, contains a non-hex
/// character, or decodes to more than `out` can hold.
pub fn decode_hex(hex: &str, out: &mut [u8]) -> Option<usize> {
    let hex = hex.as_bytes();
    if hex.len() % 2 != 0 || hex.len() / 2 > out.len() {
        return None;
    }
    for (i, pair) in hex.chunks_exact(2).enumerate() {
        out[i] = (hex_to_nibble(pair[0])? << 4) | hex_to_nibble(pair[1])?;
    }
    Some(hex.len() / 2)
}

/// Encode bytes as lowercase hex.
pub fn encode_hex(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for &b in bytes {
        out.push(HEX_CHARS[(b >> 4) as usize] as char);
        out.push(HEX_CHARS[(b & 0x0f) as usize] as char);
    }
    out
}

/// Encode bytes as unpadded base32hex. A 20-byte SHA-1 digest encodes to
/// exactly 32 characters, so NSEC3 owner names never need padding.
pub fn encode_base32hex(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len().div_ceil(5) * 8);
    let mut acc: u16 = 0;
    let mut bits: u32 = 0;
    for &b in bytes {
        acc = (acc << 8) | b as u16;
        bits += 8;
        while bits >= 5 {
            bits -= 5;
            out.push(BASE32HEX_CHARS[((acc >> bits) & 0x1f) as usize] as char);
        }
    }
    if bits > 0 {
        out.push(BASE32HEX_CHARS[((acc << (5 - bits)) & 0x1f) as usize] as char);
    }
    out
}
