//! Directory listing and sibling ordering

use std::ffi::OsString;
use std::io;
use std::path::Path;

/// List the names of a directory's immediate children.
///
/// Names come back in whatever order the OS yields them; callers that need
/// a defined order apply [`sort_case_insensitive`] themselves. Entries that
/// fail to read mid-listing are skipped.
pub fn list_children(dir: &Path) -> io::Result<Vec<OsString>> {
    let entries = std::fs::read_dir(dir)?;
    Ok(entries.filter_map(|e| e.ok()).map(|e| e.file_name()).collect())
}

/// Sort names ascending, ignoring case.
///
/// The sort is stable, so names differing only by case keep their listing
/// order relative to each other.
pub fn sort_case_insensitive(names: &mut [OsString]) {
    names.sort_by_key(|name| name.to_string_lossy().to_lowercase());
}
