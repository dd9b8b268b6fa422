use std::fs;
use std::path::Path;

use nsec3_core::{CrackFormat, HashDescriptor, Nsec3Format};
use tracing::warn;

use crate::error::Error;

/// One challenge loaded from a records file.
#[derive(Debug, Clone)]
pub struct Challenge {
    /// 1-based line number in the source file
    pub line: usize,
    /// the record as it appeared, used when reporting matches
    pub record: String,
    pub descriptor: HashDescriptor,
}

/// Read challenges from a records file, one `$NSEC3$` record per line.
///
/// Blank lines and `#`/`;` comment lines are skipped. A record that fails
/// validation is unsupported, not fatal: it is skipped with a warning. Only
/// a file yielding zero usable records is an error.
pub fn load_records(path: &Path) -> Result<Vec<Challenge>, Error> {
    let format = Nsec3Format;
    let contents = fs::read_to_string(path)?;

    let mut challenges = Vec::new();
    for (idx, line) in contents.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with(';') {
            continue;
        }
        match format.descriptor(trimmed) {
            Ok(descriptor) => challenges.push(Challenge {
                line: idx + 1,
                record: trimmed.to_string(),
                descriptor,
            }),
            Err(e) => warn!(line = idx + 1, error = %e, "skipping unsupported record"),
        }
    }

    if challenges.is_empty() {
        return Err(Error::NoRecords { path: path.to_path_buf() });
    }
    Ok(challenges)
}
