//! Canonical DNS wire-format names.
//!
//! NSEC3 hashes are computed over the wire encoding of a name: each label as
//! a length byte (1-63) followed by the label bytes, ASCII-lowercased, with
//! an absolute name terminated by the zero-length root label. See RFC 1035
//! section 2.3.4 for the size limits and RFC 5155 section 5 for the
//! canonical (lowercase) requirement.
//!
//! Everything here goes through [`NameBuf`], an append-only buffer that
//! refuses writes past its fixed 255-byte capacity, so an oversized name is
//! an error rather than a truncated or overflowing encoding.

use std::fmt;
use std::fmt::Write as _;

use crate::error::NameError;

/// Maximum length of a single label, without its length byte.
pub const MAX_LABEL_LEN: usize = 63;

/// Maximum encoded length of a full name, root label included.
pub const MAX_NAME_LEN: usize = 255;

/// Fixed-capacity, append-only wire-format name builder.
///
/// Labels are lowercased as they are pushed. A `NameBuf` holds a *relative*
/// encoding (no terminating root label) until [`push_root`](Self::push_root)
/// is called, which is the form candidate labels are hashed in.
#[derive(Clone, Copy)]
pub struct NameBuf {
    bytes: [u8; MAX_NAME_LEN],
    len: usize,
}

impl NameBuf {
    pub fn new() -> Self {
        Self { bytes: [0u8; MAX_NAME_LEN], len: 0 }
    }

    /// Append one label, length byte first, folding to ASCII lowercase.
    pub fn push_label(&mut self, label: &[u8]) -> Result<(), NameError> {
        if label.is_empty() {
            return Err(NameError::EmptyLabel);
        }
        if label.len() > MAX_LABEL_LEN {
            return Err(NameError::LabelTooLong(label.len()));
        }
        if self.len + 1 + label.len() > MAX_NAME_LEN {
            return Err(NameError::NameTooLong);
        }
        self.bytes[self.len] = label.len() as u8;
        self.len += 1;
        for &b in label {
            self.bytes[self.len] = b.to_ascii_lowercase();
            self.len += 1;
        }
        Ok(())
    }

    /// Append the zero-length root label, anchoring the name as absolute.
    pub fn push_root(&mut self) -> Result<(), NameError> {
        if self.len + 1 > MAX_NAME_LEN {
            return Err(NameError::NameTooLong);
        }
        self.bytes[self.len] = 0;
        self.len += 1;
        Ok(())
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

impl Default for NameBuf {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for NameBuf {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Eq for NameBuf {}

impl fmt::Debug for NameBuf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NameBuf({:?})", self.as_bytes())
    }
}

/// An absolute domain name in canonical wire format.
///
/// Always ends in the root label; always at most [`MAX_NAME_LEN`] bytes;
/// label bytes are lowercase ASCII. Construction validates, so every
/// `WireName` in existence can be fed straight into the hash engine.
#[derive(Clone, Copy)]
pub struct WireName {
    buf: NameBuf,
}

impl WireName {
    /// The root name, a single zero-length label.
    pub fn root() -> Self {
        let mut buf = NameBuf::new();
        // a single byte always fits
        buf.push_root().unwrap();
        Self { buf }
    }

    /// Canonicalize a dotted text name.
    ///
    /// `""` and `"."` both denote the root. A trailing dot is optional and
    /// never produces a second root label. Empty labels anywhere else
    /// (leading or consecutive dots) are rejected.
    pub fn from_text(name: &str) -> Result<Self, NameError> {
        let name = name.strip_suffix('.').unwrap_or(name);
        let mut buf = NameBuf::new();
        if !name.is_empty() {
            for label in name.split('.') {
                buf.push_label(label.as_bytes())?;
            }
        }
        buf.push_root()?;
        Ok(Self { buf })
    }

    /// Accept an already-canonical wire-format encoding.
    ///
    /// Validates label framing and size limits; stray uppercase ASCII in
    /// label bytes is folded so that re-canonicalizing is a fixed point.
    pub fn from_wire(wire: &[u8]) -> Result<Self, NameError> {
        if wire.len() > MAX_NAME_LEN {
            return Err(NameError::NameTooLong);
        }
        let mut buf = NameBuf::new();
        let mut pos = 0usize;
        loop {
            let len = *wire.get(pos).ok_or(NameError::InvalidWire)? as usize;
            if len == 0 {
                // the root label must be the final byte
                if pos + 1 != wire.len() {
                    return Err(NameError::InvalidWire);
                }
                buf.push_root()?;
                return Ok(Self { buf });
            }
            if len > MAX_LABEL_LEN {
                return Err(NameError::LabelTooLong(len));
            }
            let label = wire.get(pos + 1..pos + 1 + len).ok_or(NameError::InvalidWire)?;
            buf.push_label(label)?;
            pos += 1 + len;
        }
    }

    /// The full wire encoding, terminating root label included.
    pub fn as_bytes(&self) -> &[u8] {
        self.buf.as_bytes()
    }

    /// Encoded length in bytes. Never zero: the root alone is 1 byte, and
    /// anything longer is at most 255.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Iterate over the labels, excluding the terminating root label.
    pub fn labels(&self) -> Labels<'_> {
        Labels { wire: self.as_bytes(), pos: 0 }
    }
}

impl PartialEq for WireName {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Eq for WireName {}

impl fmt::Display for WireName {
    /// RFC 1035 presentation format: dots and backslashes inside a label
    /// are backslash-escaped, other non-graphic bytes print as `\DDD`
    /// decimal escapes. Ordinary hostnames render unchanged.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.len() == 1 {
            return f.write_char('.');
        }
        for label in self.labels() {
            for &b in label {
                match b {
                    b'.' | b'\\' => {
                        f.write_char('\\')?;
                        f.write_char(b as char)?;
                    }
                    0x21..=0x7e => f.write_char(b as char)?,
                    _ => write!(f, "\\{b:03}")?,
                }
            }
            f.write_char('.')?;
        }
        Ok(())
    }
}

impl fmt::Debug for WireName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WireName({self})")
    }
}

/// Iterator over the non-root labels of a [`WireName`].
pub struct Labels<'a> {
    wire: &'a [u8],
    pos: usize,
}

impl<'a> Iterator for Labels<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<&'a [u8]> {
        let len = self.wire[self.pos] as usize;
        if len == 0 {
            return None;
        }
        let label = &self.wire[self.pos + 1..self.pos + 1 + len];
        self.pos += 1 + len;
        Some(label)
    }
}

/// Encode a candidate label in relative wire form (no terminating root).
///
/// A candidate containing dots becomes multiple labels, so `x.y` hashed
/// under zone `w.example.` denotes `x.y.w.example.`. An empty candidate
/// yields an empty encoding, which hashes the zone apex itself.
pub fn encode_candidate(candidate: &str) -> Result<NameBuf, NameError> {
    let mut buf = NameBuf::new();
    if !candidate.is_empty() {
        for label in candidate.split('.') {
            buf.push_label(label.as_bytes())?;
        }
    }
    Ok(buf)
}
