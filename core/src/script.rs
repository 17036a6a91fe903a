use std::fs;
use std::path::Path;

use crate::repository::Result;

/// Reads a SQL script from disk.
///
/// The error names the script path so a missing schema or seed file is
/// diagnosable from the message alone.
pub fn load<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    fs::read_to_string(path).map_err(|e| format!("cannot read {}: {}", path.display(), e).into())
}
